use serde::Serialize;

/// The four punch kinds of a standard workday, in expected order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    Entrada,
    SaidaAlmoco,
    VoltaAlmoco,
    Saida,
}

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::Entrada => "ENTRADA",
            PunchKind::SaidaAlmoco => "SAIDA_ALMOCO",
            PunchKind::VoltaAlmoco => "VOLTA_ALMOCO",
            PunchKind::Saida => "SAIDA",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ENTRADA" => Some(PunchKind::Entrada),
            "SAIDA_ALMOCO" => Some(PunchKind::SaidaAlmoco),
            "VOLTA_ALMOCO" => Some(PunchKind::VoltaAlmoco),
            "SAIDA" => Some(PunchKind::Saida),
            _ => None,
        }
    }

    /// Human label shown in listings and exports.
    pub fn display(&self) -> &'static str {
        match self {
            PunchKind::Entrada => "Entrada",
            PunchKind::SaidaAlmoco => "Saída para Almoço",
            PunchKind::VoltaAlmoco => "Volta do Almoço",
            PunchKind::Saida => "Saída do Expediente",
        }
    }

    /// True for kinds that open a working interval.
    pub fn opens_interval(&self) -> bool {
        matches!(self, PunchKind::Entrada | PunchKind::VoltaAlmoco)
    }

    /// True for kinds that close a working interval.
    pub fn closes_interval(&self) -> bool {
        matches!(self, PunchKind::SaidaAlmoco | PunchKind::Saida)
    }

    /// The kind expected after this one. `None` after SAIDA: day closed.
    pub fn next(&self) -> Option<PunchKind> {
        match self {
            PunchKind::Entrada => Some(PunchKind::SaidaAlmoco),
            PunchKind::SaidaAlmoco => Some(PunchKind::VoltaAlmoco),
            PunchKind::VoltaAlmoco => Some(PunchKind::Saida),
            PunchKind::Saida => None,
        }
    }
}
