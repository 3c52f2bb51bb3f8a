//! Cross-crate tests for the formatted-amount workspace.
//!
//! # Test Categories
//!
//! - `formatting` - Core formatting properties across locales
//! - `widget_flow` - Widget lifecycle against the core formatter
//!
//! The library part only carries small helpers shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Strip a localized rendering down to an ASCII fixed-point string: drop
/// grouping separators and normalize the locale's decimal separator to ".".
///
/// The decimal separator is taken to be the last occurrence of `decimal_sep`
/// so that locales whose grouping separator is the other candidate (e.g.
/// "1.234,56") normalize correctly.
#[must_use]
pub fn strip_grouping(localized: &str, decimal_sep: &str) -> String {
    let keep = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect()
    };
    localized.rsplit_once(decimal_sep).map_or_else(
        || keep(localized),
        |(int_part, frac_part)| format!("{}.{}", keep(int_part), keep(frac_part)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_grouping() {
        assert_eq!(strip_grouping("1,234.50", "."), "1234.50");
        assert_eq!(strip_grouping("1.234,56", ","), "1234.56");
        assert_eq!(strip_grouping("1\u{202f}234,56", ","), "1234.56");
        assert_eq!(strip_grouping("-1,235", "."), "-1235");
    }
}
