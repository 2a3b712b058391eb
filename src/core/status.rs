//! Status projection: given today's punches, what comes next.
//!
//! Independent of the accrual walker; runs on today's events only.

use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::utils::time::format_minutes;
use chrono::{DateTime, Local};

#[derive(Debug)]
pub struct DayStatus {
    pub history: Vec<Punch>,
    /// Next expected punch kind; `None` once the day is closed by SAIDA.
    pub next: Option<PunchKind>,
    pub button_label: &'static str,
    /// Closed working minutes so far today. An interval still open at "now"
    /// is not counted.
    pub elapsed_minutes: i64,
}

impl DayStatus {
    pub fn elapsed_str(&self) -> String {
        format_minutes(self.elapsed_minutes)
    }

    pub fn last(&self) -> Option<&Punch> {
        self.history.last()
    }
}

/// Project the current workday state from today's punches (ascending order).
pub fn project(history: Vec<Punch>) -> DayStatus {
    let last_kind = history.last().map(|p| p.kind);

    let (next, button_label) = match last_kind {
        None => (Some(PunchKind::Entrada), "Registrar Entrada"),
        Some(PunchKind::Entrada) => (Some(PunchKind::SaidaAlmoco), "Sair para o Almoço"),
        Some(PunchKind::SaidaAlmoco) => (Some(PunchKind::VoltaAlmoco), "Voltar do Almoço"),
        Some(PunchKind::VoltaAlmoco) => (Some(PunchKind::Saida), "Encerrar Expediente"),
        Some(PunchKind::Saida) => (None, "Expediente Finalizado"),
    };

    DayStatus {
        elapsed_minutes: closed_minutes(&history),
        history,
        next,
        button_label,
    }
}

/// Sum of closed intervals, keyed by kind: ENTRADA/VOLTA_ALMOCO open,
/// SAIDA_ALMOCO/SAIDA close.
fn closed_minutes(history: &[Punch]) -> i64 {
    let mut total = 0;
    let mut open: Option<DateTime<Local>> = None;

    for p in history {
        if p.kind.opens_interval() {
            open = Some(p.timestamp);
        } else if p.kind.closes_interval()
            && let Some(start) = open.take()
        {
            total += (p.timestamp - start).num_minutes();
        }
    }

    total
}
