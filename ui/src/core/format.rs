//! Display formatting helpers.

use api::Language;

const TAKA: &str = "৳";

/// Format a taka amount for display: western digit grouping for English,
/// Indian-style grouping with Bangla numerals for Bangla
/// (e.g. 40000 → `৳40,000` / `৳৪০,০০০`).
pub fn format_price(amount: u64, language: Language) -> String {
    match language {
        Language::En => format!("{TAKA}{}", group_western(amount)),
        Language::Bn => format!("{TAKA}{}", to_bangla_digits(&group_indian(amount))),
    }
}

fn group_western(amount: u64) -> String {
    let digits = amount.to_string();
    group_from_right(&digits, &[3])
}

/// Indian grouping: the last three digits, then pairs (1,23,45,678).
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    group_from_right(&digits, &[3, 2])
}

/// Insert commas right-to-left; the last entry of `widths` repeats.
fn group_from_right(digits: &str, widths: &[usize]) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = digits;
    let mut widths = widths.iter().copied();
    let mut width = widths.next().unwrap_or(3);
    loop {
        if rest.len() <= width {
            groups.push(rest);
            break;
        }
        let split = rest.len() - width;
        groups.push(&rest[split..]);
        rest = &rest[..split];
        width = widths.next().unwrap_or(width);
    }
    groups.reverse();
    groups.join(",")
}

fn to_bangla_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '০',
            '1' => '১',
            '2' => '২',
            '3' => '৩',
            '4' => '৪',
            '5' => '৫',
            '6' => '৬',
            '7' => '৭',
            '8' => '৮',
            '9' => '৯',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_prices_use_western_grouping() {
        assert_eq!(format_price(1000, Language::En), "৳1,000");
        assert_eq!(format_price(40000, Language::En), "৳40,000");
        assert_eq!(format_price(1234567, Language::En), "৳1,234,567");
        assert_eq!(format_price(999, Language::En), "৳999");
    }

    #[test]
    fn bangla_prices_use_indian_grouping_and_bangla_digits() {
        assert_eq!(format_price(1000, Language::Bn), "৳১,০০০");
        assert_eq!(format_price(40000, Language::Bn), "৳৪০,০০০");
        assert_eq!(format_price(1234567, Language::Bn), "৳১২,৩৪,৫৬৭");
        assert_eq!(format_price(0, Language::Bn), "৳০");
    }
}
