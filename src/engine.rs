use crate::types::{
    row::{Amount, RowOutcome, SkipReason, TxKind},
    summary::Summary,
};

pub const MIN_FIELDS: usize = 10;
/// The amount sits this many fields from the end of the row.
pub const AMOUNT_OFFSET_FROM_END: usize = 3;

/// Decides what a single row contributes, without touching any totals.
pub fn classify_row(fields: &[&str]) -> RowOutcome {
    if fields.len() < MIN_FIELDS {
        return RowOutcome::Skipped(SkipReason::TooFewFields {
            found: fields.len(),
        });
    }

    // Bet wins when a row carries both tokens
    let kind = if fields.contains(&TxKind::Bet.token()) {
        TxKind::Bet
    } else if fields.contains(&TxKind::Payout.token()) {
        TxKind::Payout
    } else {
        return RowOutcome::Skipped(SkipReason::UnrecognizedType);
    };

    let Some(raw) = fields
        .len()
        .checked_sub(AMOUNT_OFFSET_FROM_END)
        .and_then(|idx| fields.get(idx))
    else {
        return RowOutcome::Skipped(SkipReason::AmountOutOfBounds { kind });
    };

    match raw.trim().parse::<Amount>() {
        Ok(amount) => RowOutcome::Counted { kind, amount },
        Err(_) => RowOutcome::Skipped(SkipReason::InvalidAmount {
            kind,
            raw: raw.to_string(),
        }),
    }
}

pub struct Summarizer {
    total_bet: Amount,
    total_payout: Amount,
    counted: usize,
    skipped: usize,
}

impl Summarizer {
    pub fn new() -> Self {
        Summarizer {
            total_bet: 0.0,
            total_payout: 0.0,
            counted: 0,
            skipped: 0,
        }
    }

    pub fn process_row(&mut self, fields: &[&str]) -> RowOutcome {
        let outcome = classify_row(fields);

        match &outcome {
            RowOutcome::Counted {
                kind: TxKind::Bet,
                amount,
            } => {
                self.total_bet += amount;
                self.counted += 1;
            }
            RowOutcome::Counted {
                kind: TxKind::Payout,
                amount,
            } => {
                self.total_payout += amount;
                self.counted += 1;
            }
            RowOutcome::Skipped(_) => {
                self.skipped += 1;
            }
        }

        outcome
    }

    pub fn finish(self) -> Summary {
        Summary {
            total_bet: self.total_bet,
            total_payout: self.total_payout,
            counted: self.counted,
            skipped: self.skipped,
        }
    }
}
