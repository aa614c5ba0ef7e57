//! Small display helpers shared by the view components.

/// Money as rendered in tables and stat tiles.
pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Signed return with a percent sign, e.g. `+5.57%`.
pub fn signed_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Units with trailing zeros trimmed (backend sends fractional units).
pub fn units(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(money(1302.5), "$1302.50");
        assert_eq!(money(0.0), "$0.00");
    }

    #[test]
    fn test_signed_percent_keeps_sign() {
        assert_eq!(signed_percent(5.566), "+5.57%");
        assert_eq!(signed_percent(-3.2), "-3.20%");
    }

    #[test]
    fn test_units_trims_trailing_zeros() {
        assert_eq!(units(12.5000), "12.5");
        assert_eq!(units(4.0), "4");
        assert_eq!(units(0.1234), "0.1234");
    }
}
