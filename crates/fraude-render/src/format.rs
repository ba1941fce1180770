//! Number and column formatting for rendered widgets.

use unicode_width::UnicodeWidthStr;

/// Currency suffix shown after amounts.
pub const CURRENCY: &str = "TL";

/// Groups digits in threes with `.` as Turkish locales do.
///
/// ```rust
/// use fraude_render::format_amount;
///
/// assert_eq!(format_amount(26000), "26.000");
/// assert_eq!(format_amount(999), "999");
/// ```
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: u64) -> String {
    format!("{} {}", format_amount(value), CURRENCY)
}

/// Pads with spaces to `width` terminal columns.
///
/// Text already at or past `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

/// A bar of `width` cells, `fraction` of them filled.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(3000), "3.000");
        assert_eq!(format_amount(15000), "15.000");
        assert_eq!(format_amount(1234567), "1.234.567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(26000), "26.000 TL");
    }

    #[test]
    fn test_pad_right_counts_columns() {
        assert_eq!(pad_right("Doğru", 8), "Doğru   ");
        assert_eq!(pad_right("long text", 4), "long text");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.5, 4), "████");
    }
}
