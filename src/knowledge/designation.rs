//! Alloy designation parsing and label formatting.
//!
//! Every digit extraction uses the first contiguous run of ASCII digits in reading order:
//! `6N01(6005C)` yields `6`, never `01` or `6005`.
use crate::workbook::Value;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("Hardcode regex pattern"));
static FOUR_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("Hardcode regex pattern"));

/// First contiguous run of digits.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|found| found.as_str())
}

/// First four consecutive digits, e.g. `6061` in `A6061-T6` or `6000` in `6000系`.
pub fn first_four_digits(text: &str) -> Option<&str> {
    FOUR_DIGITS.find(text).map(|found| found.as_str())
}

/// Series code of a family number: floored to the thousand, `None` below 1000.
pub fn series_code(number: u64) -> Option<u32> {
    let code = number / 1000 * 1000;
    u32::try_from(code).ok().filter(|code| *code > 0)
}

/// Designation zero-padded to four characters, as compared against a canonical number.
pub fn padded_designation(designation: &Value) -> String {
    format!("{:0>4}", designation.to_string().trim())
}

/// Designation as `A` + first digit run zero-padded to four digits; raw text without digits.
pub fn designation_label(designation: &Value) -> String {
    let raw = designation.to_string();
    match first_digit_run(&raw).and_then(|digits| digits.parse::<u64>().ok()) {
        Some(number) => format!("A{number:04}"),
        None => raw.trim().to_owned(),
    }
}

/// Alloy label such as `A6061-T6`.
pub fn alloy_label(designation: &Value, temper: &str) -> String {
    format!("{}-{}", designation_label(designation), temper.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_of_numeric_designation() {
        assert_eq!(alloy_label(&Value::Number(6061.0), "T6"), "A6061-T6");
        assert_eq!(alloy_label(&Value::from("1100"), "O"), "A1100-O");
    }

    #[test]
    fn label_uses_first_digit_run_only() {
        // "N" splits "6N01" so the first run is "6", not "6005"
        assert_eq!(first_digit_run("6N01(6005C)"), Some("6"));
        assert_eq!(alloy_label(&Value::from("6N01(6005C)"), "T6"), "A0006-T6");
    }

    #[test]
    fn label_without_digits_keeps_raw_text() {
        assert_eq!(alloy_label(&Value::from("ADC"), "F"), "ADC-F");
    }

    #[test]
    fn series_codes() {
        assert_eq!(series_code(6061), Some(6000));
        assert_eq!(series_code(1000), Some(1000));
        assert_eq!(series_code(999), None);
        assert_eq!(first_four_digits("6000系 (Al-Mg-Si)"), Some("6000"));
        assert_eq!(first_four_digits("A6N01"), None);
    }

    #[test]
    fn padding() {
        assert_eq!(padded_designation(&Value::Number(6061.0)), "6061");
        assert_eq!(padded_designation(&Value::from("110")), "0110");
    }
}
