//! Price formatting for the order summary

/// Currency suffix shown after every amount
pub const CURRENCY_SUFFIX: &str = "ج";

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Разделитель каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats a price: no decimals for whole amounts, two otherwise, plus the currency suffix
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(1270.0), "1,270 ج");
/// ```
pub fn format_price(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!(
        "{} {}",
        format_number_with_decimals(value, decimals),
        CURRENCY_SUFFIX
    )
}
