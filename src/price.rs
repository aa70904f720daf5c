//! Price Input Mask
//!
//! Converts raw digit input into the canonical `"$D.CC"` display string plus
//! its exact numeric value. Pure; cursor placement is handled by the input
//! component on top of this.

/// Canonical currency pair produced by the mask
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedPrice {
    pub display: String,
    pub numeric: f64,
}

impl Default for MaskedPrice {
    fn default() -> Self {
        Self {
            display: "$0.00".to_string(),
            numeric: 0.0,
        }
    }
}

/// Apply the currency mask to arbitrary input.
///
/// All non-digit characters are stripped; the last two surviving digits are
/// cents, the rest are dollars with leading zeros removed.
pub fn apply_digit_input(raw: &str) -> MaskedPrice {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let (display, numeric) = match digits.len() {
        0 => ("$0.00".to_string(), 0.0),
        1 => {
            let value = format!("0.0{digits}");
            (format!("$0.0{digits}"), parse_amount(&value))
        }
        2 => {
            let value = format!("0.{digits}");
            (format!("$0.{digits}"), parse_amount(&value))
        }
        n => {
            let (dollars, cents) = digits.split_at(n - 2);
            let dollars = normalize_dollars(dollars);
            let value = format!("{dollars}.{cents}");
            (format!("${dollars}.{cents}"), parse_amount(&value))
        }
    };

    MaskedPrice { display, numeric }
}

/// Format an already-known numeric price into the canonical display string
pub fn format_price(numeric: f64) -> String {
    format!("${:.2}", numeric)
}

fn normalize_dollars(dollars: &str) -> String {
    let trimmed = dollars.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_amount(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        let p = apply_digit_input("");
        assert_eq!(p.display, "$0.00");
        assert_eq!(p.numeric, 0.0);
    }

    #[test]
    fn test_single_digit_is_cents() {
        let p = apply_digit_input("1");
        assert_eq!(p.display, "$0.01");
        assert_eq!(p.numeric, 0.01);
    }

    #[test]
    fn test_two_digits_are_cents() {
        let p = apply_digit_input("12");
        assert_eq!(p.display, "$0.12");
        assert_eq!(p.numeric, 0.12);
    }

    #[test]
    fn test_three_or_more_digits_split_dollars_and_cents() {
        let p = apply_digit_input("1299");
        assert_eq!(p.display, "$12.99");
        assert_eq!(p.numeric, 12.99);
    }

    #[test]
    fn test_non_digits_are_stripped() {
        let p = apply_digit_input("$1a2.9-9 ");
        assert_eq!(p.display, "$12.99");
        assert_eq!(p.numeric, 12.99);
    }

    #[test]
    fn test_leading_zeros_renormalized() {
        let p = apply_digit_input("000123");
        assert_eq!(p.display, "$1.23");
        assert_eq!(p.numeric, 1.23);

        let p = apply_digit_input("00012");
        assert_eq!(p.display, "$0.12");
        assert_eq!(p.numeric, 0.12);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in ["", "5", "42", "1299", "000777", "123456789"] {
            let once = apply_digit_input(input);
            let twice = apply_digit_input(&once.display);
            assert_eq!(once, twice, "re-masking {input:?} changed the result");
        }
    }

    #[test]
    fn test_display_and_numeric_agree() {
        for input in ["", "9", "50", "100", "99999", "1050"] {
            let p = apply_digit_input(input);
            let stripped: String = p
                .display
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            assert_eq!(p.numeric, stripped.parse::<f64>().unwrap());
        }
    }

    #[test]
    fn test_format_price_matches_mask() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(12.99), "$12.99");
        assert_eq!(format_price(0.5), "$0.50");
    }
}
