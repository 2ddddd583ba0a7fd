//! Regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

// Numeric tokens use [0-9] rather than \d: receipts around the NPR markers
// can carry Devanagari digits, which Rust's \d would match but which the
// decimal parser cannot consume.

lazy_static! {
    // Amount patterns, most specific first (NPR markers: रु, Rs., NPR)
    pub static ref CURRENCY_PREFIXED: Regex = Regex::new(
        r"(?i)(?:रु|Rs\.?|NPR)\s*([0-9]+(?:[,.][0-9]+)*)"
    ).unwrap();

    pub static ref CURRENCY_SUFFIXED: Regex = Regex::new(
        r"(?i)([0-9]+(?:[,.][0-9]+)*)\s*(?:रु|Rs\.?|NPR)"
    ).unwrap();

    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)total[:\s]*(?:रु|Rs\.?|NPR)?\s*([0-9]+(?:[,.][0-9]+)*)"
    ).unwrap();

    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)amount[:\s]*(?:रु|Rs\.?|NPR)?\s*([0-9]+(?:[,.][0-9]+)*)"
    ).unwrap();

    // Standalone numeric token for the magnitude fallback
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9]+(?:[,.][0-9]+)*"
    ).unwrap();

    // Generic receipt words rejected as titles
    pub static ref TITLE_NOISE: Regex = Regex::new(
        r"(?i)receipt|bill|invoice"
    ).unwrap();
}
