use chrono::{Locale, NaiveDate};
use rust_decimal::Decimal;

/// The service quotes in a single fixed locale/currency pair: Brazilian Real
/// rendered for pt-BR. Keep every amount and date that crosses the service
/// boundary going through these two functions.
pub const CURRENCY_SYMBOL: &str = "R$";

const LOCALE: Locale = Locale::pt_BR;

/// Formats a final amount as BRL: two decimal places, comma decimal
/// separator, dot thousands separator ("R$ 1.234,56").
///
/// Amounts are rounded to 2 decimal places first (banker's rounding).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits
        .split_once('.')
        .unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{} {},{}", sign, CURRENCY_SYMBOL, grouped, frac_part)
}

/// Renders a due date as a long-form pt-BR calendar date,
/// e.g. "10 de novembro de 2020".
pub fn format_due_date(date: NaiveDate) -> String {
    date.format_localized("%-d de %B de %Y", LOCALE).to_string()
}
