//! String utility functions
//!
//! Casing, padding, and formatting helpers used in report and order-ticket
//! rendering.

use std::sync::LazyLock;

use regex::Regex;

static WORD_INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]").expect("word-initial pattern is a valid literal"));

/// Uppercase the first letter of every word
///
/// Only ASCII lowercase letters at a word boundary are touched; the rest of
/// the string passes through unchanged.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::uppercase_first_letters;
///
/// assert_eq!(uppercase_first_letters("open new position"), "Open New Position");
/// ```
pub fn uppercase_first_letters(input: &str) -> String {
    WORD_INITIAL
        .replace_all(input, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Ensure a string has at least a certain length by left-padding
///
/// When the input is shorter than `length`, the prefix is repeated once per
/// missing character and prepended. The default prefix is a single space.
///
/// # Arguments
///
/// * `input` - The string to pad
/// * `length` - The minimum length to guarantee
/// * `prefix` - Optional pad string (default `" "`)
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::ensure_string_length;
///
/// assert_eq!(ensure_string_length("42", 5, None), "   42");
/// assert_eq!(ensure_string_length("42", 4, Some("0")), "0042");
/// ```
pub fn ensure_string_length(input: &str, length: usize, prefix: Option<&str>) -> String {
    let pad = prefix.unwrap_or(" ");
    let current = input.chars().count();
    if current < length {
        format!("{}{}", pad.repeat(length - current), input)
    } else {
        input.to_string()
    }
}

/// Render a number in financial Chinese numerals
///
/// Each decimal digit becomes its anti-fraud numeral followed by its
/// positional marker, up to the 萬 (ten-thousands) position. Numbers with
/// more than five digits have no positional marker here and return `None`.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::to_finance_chinese;
///
/// assert_eq!(to_finance_chinese(123), Some("壹佰貳拾參".to_string()));
/// assert_eq!(to_finance_chinese(100000), None);
/// ```
pub fn to_finance_chinese(num: u32) -> Option<String> {
    const DIGITS: [&str; 10] = ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"];
    const POSITIONS: [&str; 5] = ["", "拾", "佰", "仟", "萬"];

    let decimal = num.to_string();
    let len = decimal.len();
    if len > POSITIONS.len() {
        return None;
    }

    let mut rendered = String::new();
    for (index, ch) in decimal.chars().enumerate() {
        let digit = ch.to_digit(10)? as usize;
        rendered.push_str(DIGITS[digit]);
        rendered.push_str(POSITIONS[len - index - 1]);
    }
    Some(rendered)
}

/// Extract the lowercased file extension from a path-like string
///
/// The segment after the final dot; a string without dots is returned
/// whole, lowercased.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::file_extension;
///
/// assert_eq!(file_extension("Report.2024.CSV"), "csv");
/// ```
pub fn file_extension(input: &str) -> String {
    input
        .rsplit('.')
        .next()
        .unwrap_or(input)
        .to_lowercase()
}

/// Count the decimal digits of an integer
///
/// The sign of a negative number counts as one character, matching the
/// string-length semantics callers rely on for column alignment.
pub fn integer_digits(num: i64) -> usize {
    num.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_first_letters() {
        assert_eq!(uppercase_first_letters("hello world"), "Hello World");
        assert_eq!(uppercase_first_letters("already Up"), "Already Up");
        assert_eq!(uppercase_first_letters("mixed-case words"), "Mixed-Case Words");
        assert_eq!(uppercase_first_letters(""), "");
        assert_eq!(uppercase_first_letters("123 abc"), "123 Abc");
    }

    #[test]
    fn test_ensure_string_length() {
        assert_eq!(ensure_string_length("42", 5, None), "   42");
        assert_eq!(ensure_string_length("42", 4, Some("0")), "0042");
        assert_eq!(ensure_string_length("hello", 3, None), "hello");
        assert_eq!(ensure_string_length("", 2, Some("*")), "**");
    }

    #[test]
    fn test_to_finance_chinese() {
        assert_eq!(to_finance_chinese(0), Some("零".to_string()));
        assert_eq!(to_finance_chinese(7), Some("柒".to_string()));
        assert_eq!(to_finance_chinese(10), Some("壹拾零".to_string()));
        assert_eq!(to_finance_chinese(123), Some("壹佰貳拾參".to_string()));
        assert_eq!(
            to_finance_chinese(98765),
            Some("玖萬捌仟柒佰陸拾伍".to_string())
        );
        assert_eq!(to_finance_chinese(100000), None);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.CSV"), "csv");
        assert_eq!(file_extension("archive.tar.GZ"), "gz");
        assert_eq!(file_extension("README"), "readme");
    }

    #[test]
    fn test_integer_digits() {
        assert_eq!(integer_digits(0), 1);
        assert_eq!(integer_digits(17500), 5);
        assert_eq!(integer_digits(-42), 3);
    }
}
