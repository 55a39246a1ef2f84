// src/donations/currency.rs
//! Rupiah display formatting for the nominal input

const PREFIX: &str = "Rp ";
const GROUP_SEPARATOR: char = '.';

/// Two-way transform between raw digit strings and `Rp 100.000` display strings
pub struct CurrencyFormatter;

impl CurrencyFormatter {
    /// Groups the digits of `raw` in thousands and prefixes `Rp `.
    /// Non-digit characters are ignored and leading zeros collapse, so
    /// `format(parse(format(x)))` always equals `format(x)`. Empty input
    /// formats to an empty string.
    pub fn format(raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return String::new();
        }

        let significant = digits.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };

        let mut grouped = String::with_capacity(PREFIX.len() + significant.len() * 4 / 3);
        grouped.push_str(PREFIX);
        for (i, c) in significant.chars().enumerate() {
            if i > 0 && (significant.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(c);
        }
        grouped
    }

    pub fn format_amount(amount: u64) -> String {
        Self::format(&amount.to_string())
    }

    /// Strips everything but digits and returns the amount.
    /// Empty or digit-free input parses to `0`; amounts past `u64::MAX` saturate.
    pub fn parse(display: &str) -> u64 {
        display
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| {
                acc.checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(d)))
                    .unwrap_or(u64::MAX)
            })
    }
}
