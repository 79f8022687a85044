//! Number and money formatting for cards and tables.

/// 1234567 -> "1,234,567"
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        format!("-{result}")
    } else {
        result
    }
}

/// (1234.5, "$") -> "$1,234.50"; negative amounts get a leading minus.
pub fn format_money(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{symbol}{}.{:02}",
        format_thousands(cents / 100),
        cents % 100
    )
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Signed change with arrow, as on analytics cards: "↑ 2.5%"
pub fn format_change(change: f64) -> String {
    let arrow = if change > 0.0 {
        "\u{2191}"
    } else if change < 0.0 {
        "\u{2193}"
    } else {
        ""
    };
    format!("{arrow} {:.1}%", change.abs()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45210), "-45,210");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5, "$"), "$1,234.50");
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(-85.0, "$"), "-$85.00");
        assert_eq!(format_money(12.346, "€"), "€12.35");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(2.5), "\u{2191} 2.5%");
        assert_eq!(format_change(-0.75), "\u{2193} 0.8%");
        assert_eq!(format_change(0.0), "0.0%");
    }
}
