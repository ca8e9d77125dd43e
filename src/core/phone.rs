//! Ghana-only MSISDN normalization.
//!
//! Two shapes are accepted once every non-digit is removed: a 10 digit local
//! number with a trunk `0`, or a 12 digit number that already carries the
//! `233` country code. An input written as `+233...` passes through the
//! second rule because the `+` is stripped like any other non-digit. Numbers
//! from any other country are rejected.

const COUNTRY_CODE: &str = "233";

pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 && digits.starts_with('0') {
        return Some(format!("+{}{}", COUNTRY_CODE, &digits[1..]));
    }
    if digits.len() == 12 && digits.starts_with(COUNTRY_CODE) {
        return Some(format!("+{}", digits));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_number_gets_country_code() {
        assert_eq!(normalize_phone("0241234567").as_deref(), Some("+233241234567"));
        assert_eq!(normalize_phone("0551112222").as_deref(), Some("+233551112222"));
    }

    #[test]
    fn test_formatting_characters_are_ignored() {
        assert_eq!(normalize_phone("024 123 4567").as_deref(), Some("+233241234567"));
        assert_eq!(normalize_phone("(024)-123-4567").as_deref(), Some("+233241234567"));
    }

    #[test]
    fn test_international_form() {
        assert_eq!(normalize_phone("233241234567").as_deref(), Some("+233241234567"));
        assert_eq!(normalize_phone("+233 24 123 4567").as_deref(), Some("+233241234567"));
    }

    #[test]
    fn test_normalized_output_normalizes_again() {
        let once = normalize_phone("0241234567").unwrap();
        assert_eq!(normalize_phone(&once), Some(once.clone()));
    }

    #[test]
    fn test_every_ten_digit_trunk_number_is_accepted() {
        for tail in ["000000000", "123456789", "999999999", "201234567"] {
            let input = format!("0{}", tail);
            assert_eq!(normalize_phone(&input), Some(format!("+233{}", tail)));
        }
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("241234567"), None);
        assert_eq!(normalize_phone("1241234567"), None);
        assert_eq!(normalize_phone("02412345678"), None);
        assert_eq!(normalize_phone("234241234567"), None);
        assert_eq!(normalize_phone("+14155552671"), None);
        assert_eq!(normalize_phone("2330241234567"), None);
        assert_eq!(normalize_phone("not a phone"), None);
    }
}
