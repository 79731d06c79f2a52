//! Number formatting for amounts shown in tables

/// Inserts a thousands separator into a string of ASCII digits
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Formats an amount in minor units (cents) as major units with two decimals
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_minor_units(123456789), "1,234,567.89");
/// ```
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let major = group_thousands(&(abs / 100).to_string(), ',');
    format!("{}{}.{:02}", sign, major, abs % 100)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_lowercase().as_str() {
        "usd" => Some("$"),
        "eur" => Some("€"),
        "gbp" => Some("£"),
        _ => None,
    }
}

/// Formats an amount in minor units with its currency, e.g. "$1,234.50"
pub fn format_amount(amount: i64, currency: &str) -> String {
    let value = format_minor_units(amount);
    match currency_symbol(currency) {
        Some(symbol) => match value.strip_prefix('-') {
            Some(rest) => format!("-{}{}", symbol, rest),
            None => format!("{}{}", symbol, value),
        },
        None => format!("{} {}", value, currency.to_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(5), "0.05");
        assert_eq!(format_minor_units(2500), "25.00");
        assert_eq!(format_minor_units(123456789), "1,234,567.89");
        assert_eq!(format_minor_units(-123456), "-1,234.56");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2550, "usd"), "$25.50");
        assert_eq!(format_amount(100000, "EUR"), "€1,000.00");
        assert_eq!(format_amount(-990, "usd"), "-$9.90");
        assert_eq!(format_amount(1200, "sgd"), "12.00 SGD");
    }
}
