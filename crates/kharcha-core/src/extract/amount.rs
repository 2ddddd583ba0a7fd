//! Amount extraction from receipt text.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::patterns::{
    AMOUNT_LABELED, CURRENCY_PREFIXED, CURRENCY_SUFFIXED, NUMBER_TOKEN, TOTAL_LABELED,
};

/// Ordered amount rules, most specific first. Within each rule the first
/// match in reading order wins, not the largest.
fn amount_rules() -> [(&'static str, &'static Regex); 4] {
    [
        ("currency-prefixed", &CURRENCY_PREFIXED),
        ("currency-suffixed", &CURRENCY_SUFFIXED),
        ("total-labeled", &TOTAL_LABELED),
        ("amount-labeled", &AMOUNT_LABELED),
    ]
}

/// Extract the receipt amount, if any.
///
/// Tries the labeled/currency rules in order; a rule only wins if its
/// numeric token parses. When no rule matches, falls back to the largest
/// standalone number in the text; on an unlabeled receipt the grand total
/// is typically the largest printed figure. `None` when the text holds no
/// usable number at all.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    for (rule, pattern) in amount_rules() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(amount) = parse_amount(&caps[1]) {
                debug!("Amount {} extracted by {} rule", amount, rule);
                return Some(amount);
            }
        }
    }

    let fallback = largest_standalone_number(text);
    if let Some(amount) = fallback {
        debug!("Amount {} selected by magnitude fallback", amount);
    }
    fallback
}

/// Parse a numeric token, stripping grouping commas (e.g. "1,234.56").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', "")).ok()
}

/// Largest parseable standalone number, if strictly positive.
fn largest_standalone_number(text: &str) -> Option<Decimal> {
    let max = NUMBER_TOKEN
        .find_iter(text)
        .filter_map(|m| parse_amount(m.as_str()))
        .max()?;

    if max > Decimal::ZERO { Some(max) } else { None }
}

/// Format an amount the way the app displays money (रु 1,234.56).
pub fn format_npr(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 2 {
        return format!("रु {}", s);
    }

    let integer_part = parts[0];
    let decimal_part = parts[1];

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("रु {}.{}", formatted, decimal_part)
}
