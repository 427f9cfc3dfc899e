//! Display helpers for the task table.

/// Rows at or above this cost are highlighted
pub const HIGH_COST_THRESHOLD: f64 = 1000.0;

pub fn is_high_cost(cost: f64) -> bool {
    cost >= HIGH_COST_THRESHOLD
}

/// Brazilian real, e.g. `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0,00".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(12.5), "R$ 12,50");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format_currency(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-5.0), "-R$ 5,00");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_high_cost() {
        assert!(!is_high_cost(999.99));
        assert!(is_high_cost(1000.0));
    }
}
