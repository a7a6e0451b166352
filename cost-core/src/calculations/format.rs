//! Display formatting for money.

use rust_decimal::Decimal;

use crate::calculations::common::round_whole;

/// Formats an amount as whole US dollars, e.g. `$36,400`.
///
/// Rounds half away from zero and groups thousands with commas. Amounts
/// that round to zero print as `$0`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::calculations::format_currency;
///
/// assert_eq!(format_currency(dec!(303.1)), "$303");
/// assert_eq!(format_currency(dec!(36400)), "$36,400");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_whole(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
