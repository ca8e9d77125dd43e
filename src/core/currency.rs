use crate::domain::model::OrderAmount;
use crate::utils::sanitize::{decode_entities, strip_all_tags};
use once_cell::sync::Lazy;
use regex::Regex;

pub const CURRENCY_PREFIX: &str = "GHS ";

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").expect("valid regex")
});

/// Formats an order total for display, e.g. `12` -> `GHS 12.00`.
///
/// Strings that read as a plain number are formatted like numbers. Anything
/// else is decoded, stripped of markup and reduced to digits and dots, with
/// no further checking of the result.
pub fn format_amount(amount: &OrderAmount) -> String {
    match amount {
        OrderAmount::Number(value) => format_number(*value),
        OrderAmount::Text(text) => match parse_numeric(text) {
            Some(value) => format_number(value),
            None => {
                let plain = strip_all_tags(&decode_entities(text));
                let kept: String = plain
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                format!("{}{}", CURRENCY_PREFIX, kept)
            }
        },
    }
}

// An exponent past f64 range parses to infinity and stays numeric (`GHS inf`).
fn parse_numeric(text: &str) -> Option<f64> {
    if !NUMERIC.is_match(text) {
        return None;
    }
    text.trim().parse::<f64>().ok()
}

fn format_number(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_PREFIX, value)
}
