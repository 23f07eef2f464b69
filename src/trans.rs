//! Character translation tables (digit normalization).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::{LexiconError, Result};

pub const PERSIAN_DIGITS: &str = "۰۱۲۳۴۵۶۷۸۹";
pub const ASCII_DIGITS: &str = "0123456789";

pub type TransTable = HashMap<char, char>;

lazy_static! {
    pub static ref PERSIAN_TO_ASCII_DIGITS: TransTable = PERSIAN_DIGITS
        .chars()
        .zip(ASCII_DIGITS.chars())
        .collect();
}

/// Map each char of `source` to the char at the same position in `target`.
///
/// Lengths are compared in chars, not bytes: `"۰۱۲"` is six bytes but three
/// chars and pairs with `"012"`. A later duplicate in `source` overrides the
/// earlier mapping.
pub fn make_trans(source: &str, target: &str) -> Result<TransTable> {
    let source_len = source.chars().count();
    let target_len = target.chars().count();
    if source_len != target_len {
        return Err(LexiconError::TransLength {
            source_len,
            target_len,
        });
    }
    Ok(source.chars().zip(target.chars()).collect())
}

/// Replace every mapped char of `text`; unmapped chars pass through
pub fn translate(text: &str, table: &TransTable) -> String {
    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_trans_persian_digits() {
        let table = make_trans("۰۱۲", "012").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[&'۰'], '0');
        assert_eq!(table[&'۱'], '1');
        assert_eq!(table[&'۲'], '2');
        assert_eq!(translate("۰۱۲", &table), "012");
    }

    #[test]
    fn test_make_trans_length_mismatch() {
        let err = make_trans("۰۱۲", "01").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::TransLength {
                source_len: 3,
                target_len: 2
            }
        ));
        assert!(make_trans("01", "۰۱۲").is_err());
    }

    #[test]
    fn test_make_trans_empty() {
        assert!(make_trans("", "").unwrap().is_empty());
    }

    #[test]
    fn test_translate_passes_unmapped_through() {
        assert_eq!(
            translate("سال ۱۴۰۲ شمسی", &PERSIAN_TO_ASCII_DIGITS),
            "سال 1402 شمسی"
        );
        assert_eq!(translate("abc", &PERSIAN_TO_ASCII_DIGITS), "abc");
    }

    #[test]
    fn test_reverse_table() {
        let table = make_trans(ASCII_DIGITS, PERSIAN_DIGITS).unwrap();
        assert_eq!(translate("2024", &table), "۲۰۲۴");
    }
}
