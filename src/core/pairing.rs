//! Daily pair aggregation: total worked minutes of one calendar day.

use crate::config::{Config, PAIRING_STRICT};
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingMode {
    /// Pair punches by position: (0,1), (2,3), ... The kind is ignored and
    /// an odd trailing punch contributes nothing. Negative pair deltas
    /// (clock skew, bad manual edits) are clamped to zero.
    Positional,
    /// Kind-aware: ENTRADA/VOLTA_ALMOCO open an interval, SAIDA_ALMOCO/SAIDA
    /// close it. A malformed sequence fails the whole computation.
    Strict,
}

impl PairingMode {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.pairing.eq_ignore_ascii_case(PAIRING_STRICT) {
            PairingMode::Strict
        } else {
            PairingMode::Positional
        }
    }
}

/// Worked minutes for the punches of a single day, which must already be
/// sorted by ascending timestamp.
pub fn worked_minutes(punches: &[Punch], mode: PairingMode) -> AppResult<i64> {
    match mode {
        PairingMode::Positional => Ok(positional_minutes(punches)),
        PairingMode::Strict => strict_minutes(punches),
    }
}

fn positional_minutes(punches: &[Punch]) -> i64 {
    let mut total = 0;

    for pair in punches.chunks_exact(2) {
        let delta = (pair[1].timestamp - pair[0].timestamp).num_minutes();
        total += delta.max(0);
    }

    total
}

fn strict_minutes(punches: &[Punch]) -> AppResult<i64> {
    let mut total = 0;
    let mut open: Option<&Punch> = None;

    for p in punches {
        if p.kind.opens_interval() {
            if let Some(prev) = open {
                return Err(AppError::MalformedSequence {
                    date: p.date_str(),
                    detail: format!(
                        "{} at {} while {} at {} is still open",
                        p.kind.to_db_str(),
                        p.time_str(),
                        prev.kind.to_db_str(),
                        prev.time_str()
                    ),
                });
            }
            open = Some(p);
        } else {
            let Some(prev) = open.take() else {
                return Err(AppError::MalformedSequence {
                    date: p.date_str(),
                    detail: format!(
                        "{} at {} without a matching opener",
                        p.kind.to_db_str(),
                        p.time_str()
                    ),
                });
            };

            let delta = (p.timestamp - prev.timestamp).num_minutes();
            if delta < 0 {
                return Err(AppError::MalformedSequence {
                    date: p.date_str(),
                    detail: format!("negative interval closed at {}", p.time_str()),
                });
            }
            total += delta;
        }
    }

    // A still-open interval is allowed: the day may simply not be over.
    Ok(total)
}
