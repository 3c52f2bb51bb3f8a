//! The amount builder: raw input strings in, display fragments out.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::currency::DecimalClass;
use crate::locale::{decimal_separator, localize};

/// Longest leading float prefix: optional sign, digits with an optional
/// fractional part (or a bare fractional part), optional exponent. Lenient
/// on trailing garbage so a combined `"12.49382901 BCH"` value still reads
/// as a number.
static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("Invalid regex")
});

/// Display fragments of a formatted amount.
///
/// `start` carries the integer part plus the near fractional digits. For
/// 8-decimal currencies `middle` (three characters) and `end` (two
/// characters) carry the far fractional tail, which hosts typically render
/// in a smaller font; for every other decimal class both are empty.
///
/// A value that fails to parse as a number degrades to a placeholder in
/// `start` (`"-"`, `"-.--"`, `"-.---"`, with the locale's own decimal
/// separator) rather than an error. The fragments are always rebuilt as a
/// whole, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AmountParts {
    /// Integer part, grouping separators included, plus near fraction.
    pub start: String,
    /// Middle fractional digits (8-decimal currencies only).
    pub middle: String,
    /// Trailing fractional digits (8-decimal currencies only).
    pub end: String,
}

impl AmountParts {
    fn solid(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            middle: String::new(),
            end: String::new(),
        }
    }

    /// Whether the fractional tail was split off into `middle`/`end`.
    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.middle.is_empty() || !self.end.is_empty()
    }
}

impl fmt::Display for AmountParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, self.middle, self.end)
    }
}

/// Build the display fragments for a raw value and currency under a locale.
///
/// The currency may ride along inside the value as `"<number> <CODE>"`; a
/// combined value overrides `raw_currency`. The effective currency selects
/// a [`DecimalClass`], the value is rounded to that class's digit count and
/// localized, and for the 8-decimal class the rendering is split into
/// start/middle/end by character count.
///
/// Pure in its three inputs and infallible: unparseable values yield the
/// class-specific placeholder.
#[must_use]
pub fn format_amount(raw_value: &str, raw_currency: &str, locale: &str) -> AmountParts {
    // The host may switch from a separate currency attribute to a combined
    // value between updates; a combined value wins. Exactly two tokens is a
    // combined form, anything else is left to the numeric parse.
    let tokens: Vec<&str> = raw_value.split(' ').collect();
    let currency = if tokens.len() == 2 {
        tokens.get(1).copied().unwrap_or(raw_currency)
    } else {
        raw_currency
    };

    let parsed = parse_float_prefix(raw_value);
    match DecimalClass::for_currency(currency) {
        DecimalClass::Zero => parsed.map_or_else(
            || AmountParts::solid("-"),
            |value| AmountParts::solid(localize(value.round(), 0, locale)),
        ),
        DecimalClass::Three => parsed.map_or_else(
            || AmountParts::solid(placeholder(locale, 3)),
            |value| AmountParts::solid(localize(to_fixed(value, 3), 3, locale)),
        ),
        DecimalClass::Eight => match parsed {
            None => AmountParts::solid(placeholder(locale, 3)),
            Some(value) if value == 0.0 => AmountParts::solid("0"),
            Some(value) => split_tail(&localize(to_fixed(value, 8), 8, locale)),
        },
        DecimalClass::Two => parsed.map_or_else(
            || AmountParts::solid(placeholder(locale, 2)),
            |value| {
                // Round to two decimals through a plain float first; the
                // localize step's minimum digit count re-pads a dropped
                // trailing zero, so 1.10 still renders as "1.10".
                AmountParts::solid(localize(to_fixed(value, 2), 2, locale))
            },
        ),
    }
}

/// Split an 8-digit rendering into start / middle (3 chars) / end (2 chars).
fn split_tail(formatted: &str) -> AmountParts {
    let total = formatted.chars().count();
    let Some(start_len) = total.checked_sub(5) else {
        return AmountParts::solid(formatted);
    };
    AmountParts {
        start: formatted.chars().take(start_len).collect(),
        middle: formatted.chars().skip(start_len).take(3).collect(),
        end: formatted.chars().skip(start_len + 3).collect(),
    }
}

/// Class-specific placeholder for unparseable input, e.g. `"-,---"`.
fn placeholder(locale: &str, dashes: usize) -> String {
    format!("-{}{}", decimal_separator(locale), "-".repeat(dashes))
}

/// Round to a fixed number of decimals and strip back to a plain float.
fn to_fixed(value: f64, digits: u8) -> f64 {
    fixed_point_string(value, digits).parse().unwrap_or(value)
}

fn fixed_point_string(value: f64, digits: u8) -> String {
    format!("{value:.prec$}", prec = usize::from(digits))
}

/// Parse the longest leading float prefix of the input, if any.
fn parse_float_prefix(input: &str) -> Option<f64> {
    let found = FLOAT_PREFIX_RE.find(input.trim_start())?;
    found.as_str().parse().ok()
}
