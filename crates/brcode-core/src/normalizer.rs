//! Input normalization: BR Codes copied from apps or scanners often carry
//! line breaks and padding that are not part of the payload.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of Unicode whitespace
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Removes every whitespace character, wherever it appears.
pub fn sanitize(input: &str) -> String {
    WHITESPACE.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_everywhere() {
        assert_eq!(sanitize(" 0002 01\n"), "000201");
        assert_eq!(sanitize("\t00\r\n02\u{a0}01  "), "000201");
    }

    #[test]
    fn test_clean_input_unchanged() {
        assert_eq!(sanitize("000201"), "000201");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("  00 02\n01 ");
        assert_eq!(sanitize(&once), once);
    }
}
