use std::fmt;

pub type Amount = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Bet,
    Payout,
}

impl TxKind {
    pub fn token(self) -> &'static str {
        match self {
            TxKind::Bet => "Bet",
            TxKind::Payout => "Payout",
        }
    }
}

/// Why a row contributed nothing to the totals.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooFewFields { found: usize },
    UnrecognizedType,
    InvalidAmount { kind: TxKind, raw: String },
    AmountOutOfBounds { kind: TxKind },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => write!(f, "only {found} fields"),
            SkipReason::UnrecognizedType => write!(f, "no Bet or Payout field"),
            SkipReason::InvalidAmount { kind, raw } => {
                write!(f, "{} amount {raw:?} is not a number", kind.token())
            }
            SkipReason::AmountOutOfBounds { kind } => {
                write!(f, "{} row has no amount field", kind.token())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Counted { kind: TxKind, amount: Amount },
    Skipped(SkipReason),
}
