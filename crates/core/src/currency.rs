//! Decimal-digit classification of currency codes.

use serde::{Deserialize, Serialize};

/// Currencies conventionally displayed without fractional digits.
const ZERO_DECIMAL: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ILS", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

/// Currencies conventionally displayed with three fractional digits.
const THREE_DECIMAL: &[&str] = &["BHD", "IQD", "JOD", "KWD", "OMR", "TND"];

/// Cryptocurrencies displayed with eight fractional digits.
const EIGHT_DECIMAL: &[&str] = &["BCH", "BTC"];

/// Number of fractional digits conventionally shown for a currency.
///
/// Unknown codes (including the empty string) fall back to [`Two`], the
/// convention for the vast majority of fiat currencies. There is no error
/// path: classification never fails.
///
/// ## Examples
///
/// ```
/// use formatted_amount_core::DecimalClass;
///
/// assert_eq!(DecimalClass::for_currency("JPY"), DecimalClass::Zero);
/// assert_eq!(DecimalClass::for_currency("btc"), DecimalClass::Eight);
/// assert_eq!(DecimalClass::for_currency("USD"), DecimalClass::Two);
/// assert_eq!(DecimalClass::for_currency(""), DecimalClass::Two);
/// ```
///
/// [`Two`]: DecimalClass::Two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecimalClass {
    /// Integer-only display (JPY, KRW, ...).
    Zero,
    /// Two fractional digits, the common fiat convention.
    #[default]
    Two,
    /// Three fractional digits (BHD, KWD, ...).
    Three,
    /// Eight fractional digits (BCH, BTC).
    Eight,
}

impl DecimalClass {
    /// Classify a currency code, case-insensitively.
    #[must_use]
    pub fn for_currency(code: &str) -> Self {
        let contains = |set: &[&str]| set.iter().any(|c| c.eq_ignore_ascii_case(code));
        if contains(ZERO_DECIMAL) {
            Self::Zero
        } else if contains(THREE_DECIMAL) {
            Self::Three
        } else if contains(EIGHT_DECIMAL) {
            Self::Eight
        } else {
            Self::Two
        }
    }

    /// Number of fractional digits for this class.
    #[must_use]
    pub const fn digits(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Two => 2,
            Self::Three => 3,
            Self::Eight => 8,
        }
    }
}
