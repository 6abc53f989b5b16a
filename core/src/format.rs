//! Display formatting shared by every host.

/// Thousands separator used by the French locale (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202F}';
/// Space between amount and currency sign (no-break space).
const CURRENCY_SPACE: char = '\u{00A0}';

/// Format an amount in euros the French way: `1 234 567,89 €`.
///
/// Rounds to cents half to even. Non-finite inputs render as `0,00 €`.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3 * 3 + 8);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    format!(
        "{}{grouped},{cents}{CURRENCY_SPACE}€",
        if negative { "-" } else { "" }
    )
}
