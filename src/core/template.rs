use crate::core::currency::format_amount;
use crate::domain::model::OrderFact;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(order_number|order_total|order_status|customer_name)\}").expect("valid regex")
});

/// Fills the four order placeholders in one pass.
///
/// Replacement text is never scanned again, so a customer called
/// `{order_number}` stays `{order_number}`. Other `{...}` tokens are kept.
pub fn render_template(template: &str, order: &OrderFact) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "order_number" => order.order_number.clone(),
            "order_total" => format_amount(&order.total_amount),
            "order_status" => capitalize_first(&order.new_status),
            "customer_name" => order.billing_first_name.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
