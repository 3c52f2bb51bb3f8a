//! Locale-aware number rendering built on ICU4X.
//!
//! Numbers are rendered with the locale's grouping and decimal separators
//! via [`DecimalFormatter`]. Some platform formatters have been observed to
//! return fewer fractional digits than the requested minimum, so every
//! rendering passes through a correction step that re-pads the fractional
//! tail while keeping the locale's own decimal separator.

use std::sync::LazyLock;

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale;
use regex::Regex;

/// Splits a rendered number into everything up to and including the last
/// non-digit, plus the trailing digit run.
static TRAILING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\D)(\d+)$").expect("Invalid regex"));

/// Extracts whatever a locale renders between the digits of 1.5. Separators
/// can be more than one character.
static SEPARATOR_PROBE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1(.+)5$").expect("Invalid regex"));

/// Errors that can occur while resolving a locale's number formatter.
///
/// These never escape the formatting path; [`localize`] falls back to the
/// root-locale formatter and ultimately to a plain fixed-point rendering.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LocaleError {
    /// The locale tag is not a well-formed BCP-47 identifier.
    #[error("invalid locale tag: {0}")]
    InvalidTag(String),
    /// No decimal formatting data is available for the locale.
    #[error("no decimal formatter available for: {0}")]
    Unavailable(String),
}

/// Format a value with grouping separators and a minimum fractional-digit
/// count under the given locale's conventions.
///
/// The value is rounded (half away from zero) to `fraction_digits` and then
/// padded back up to that many fractional digits, so `localize(1.1, 2, ..)`
/// yields `"1.10"`. Never fails: an unresolvable locale degrades to the
/// root-locale conventions, and an unrepresentable value (infinities, NaN)
/// to a plain `format!` rendering.
#[must_use]
pub fn localize(value: f64, fraction_digits: u8, locale: &str) -> String {
    let Ok(formatter) = formatter_for(locale).or_else(|_| root_formatter()) else {
        return fixed_point(value, fraction_digits);
    };
    let Ok(mut dec) = Decimal::try_from_f64(value, FloatPrecision::RoundTrip) else {
        return fixed_point(value, fraction_digits);
    };
    dec.round_with_mode(
        -i16::from(fraction_digits),
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
    if fraction_digits > 0 {
        dec.absolute.pad_end(-i16::from(fraction_digits));
    }
    let localized = formatter.format(&dec).to_string();
    ensure_fraction_digits(&localized, value, fraction_digits)
}

/// Detect the decimal separator the given locale renders numbers with.
///
/// Probes by formatting the literal 1.5 and extracting the substring between
/// the leading "1" and trailing "5". Used only to build placeholder strings
/// for unparseable input (e.g. `"-,---"`). Falls back to `"."` if the probe
/// does not match.
#[must_use]
pub fn decimal_separator(locale: &str) -> String {
    let probe = localize(1.5, 1, locale);
    SEPARATOR_PROBE_RE
        .captures(&probe)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| String::from("."), |m| m.as_str().to_owned())
}

/// Re-pad the fractional tail of a rendered number when the formatter
/// returned fewer digits than requested.
///
/// The corrected tail comes from the fixed-point rendering of the original
/// value; the prefix (and with it the locale's decimal separator) is kept
/// from the localized string. A rendering that does not match the expected
/// shape is returned unchanged.
fn ensure_fraction_digits(localized: &str, value: f64, fraction_digits: u8) -> String {
    if fraction_digits == 0 {
        // Integer-only renderings are trusted as-is.
        return localized.to_owned();
    }

    let Some(caps) = TRAILING_DIGITS_RE.captures(localized) else {
        return localized.to_owned();
    };
    let (Some(prefix), Some(trailing)) = (caps.get(1), caps.get(2)) else {
        return localized.to_owned();
    };
    if trailing.as_str().chars().count() >= usize::from(fraction_digits) {
        return localized.to_owned();
    }

    let fixed = fixed_point(value, fraction_digits);
    let Some(corrected) = TRAILING_DIGITS_RE
        .captures(&fixed)
        .and_then(|fixed_caps| fixed_caps.get(2))
    else {
        return localized.to_owned();
    };

    // Keeps the locale's decimal separator.
    format!("{}{}", prefix.as_str(), corrected.as_str())
}

/// Plain ASCII fixed-point rendering, the last-resort fallback.
fn fixed_point(value: f64, fraction_digits: u8) -> String {
    format!("{value:.prec$}", prec = usize::from(fraction_digits))
}

fn formatter_for(tag: &str) -> Result<DecimalFormatter, LocaleError> {
    let locale: Locale = tag
        .parse()
        .map_err(|_| LocaleError::InvalidTag(tag.to_owned()))?;
    DecimalFormatter::try_new(DecimalFormatterPreferences::from(&locale), options())
        .map_err(|_| LocaleError::Unavailable(tag.to_owned()))
}

fn root_formatter() -> Result<DecimalFormatter, LocaleError> {
    DecimalFormatter::try_new(DecimalFormatterPreferences::default(), options())
        .map_err(|_| LocaleError::Unavailable(String::from("und")))
}

fn options() -> DecimalFormatterOptions {
    let mut opts = DecimalFormatterOptions::default();
    opts.grouping_strategy = Some(GroupingStrategy::Auto);
    opts
}
