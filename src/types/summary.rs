use std::fmt;

use crate::types::row::Amount;

pub const CURRENCY_LABEL: &str = "PHP";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total_bet: Amount,
    pub total_payout: Amount,
    pub counted: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn net_result(&self) -> Amount {
        self.total_payout - self.total_bet
    }
}

/// Shortest round-trip text for an amount: always a fractional part on
/// integral values (`100.0`), lowercase `nan`/`inf`, and a signed exponent
/// of at least two digits (`1e+16`, `1.5e-05`).
pub fn render_amount(value: Amount) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Bet Amount: {CURRENCY_LABEL} {}",
            render_amount(self.total_bet)
        )?;
        writeln!(
            f,
            "Total Payout Amount: {CURRENCY_LABEL} {}",
            render_amount(self.total_payout)
        )?;
        write!(
            f,
            "Profit/Loss: {CURRENCY_LABEL} {}",
            render_amount(self.net_result())
        )
    }
}
