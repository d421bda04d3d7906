//! South African Rand formatting (en-ZA conventions).

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol for the Rand.
pub const RAND_SYMBOL: &str = "R";

/// Separator used between the symbol and amount and between digit groups.
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Decimal separator in en-ZA.
pub const DECIMAL_SEPARATOR: char = ',';

/// Format an amount as Rand, e.g. `R 1 000,00` (non-breaking spaces).
///
/// Rounds half away from zero to cents.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    // Scale is at most 2 after rounding.
    let cents = rounded.mantissa().unsigned_abs() * 10u128.pow(2 - rounded.scale().min(2));
    let whole = group_thousands(&(cents / 100).to_string());
    let fraction = cents % 100;

    let sign = if rounded.is_sign_negative() && cents != 0 {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}{}{}{}{:02}",
        sign, RAND_SYMBOL, GROUP_SEPARATOR, whole, DECIMAL_SEPARATOR, fraction
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
