//! Core formatting properties exercised across locales.

#![allow(clippy::unwrap_used)]

use formatted_amount_core::{DecimalClass, decimal_separator, format_amount};
use formatted_amount_integration_tests::strip_grouping;

const LOCALES: &[&str] = &["en-US", "de-DE", "fr-FR", "en-GB", "it-IT"];

#[test]
fn zero_class_never_splits_in_any_locale() {
    for locale in LOCALES {
        for code in [
            "BIF", "CLP", "DJF", "GNF", "ILS", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX",
            "VND", "VUV", "XAF", "XOF", "XPF",
        ] {
            let parts = format_amount("98765.4321", code, locale);
            assert!(parts.middle.is_empty(), "{code}/{locale}");
            assert!(parts.end.is_empty(), "{code}/{locale}");
        }
    }
}

#[test]
fn eight_class_split_shape_holds_in_any_locale() {
    for locale in LOCALES {
        for value in ["0.00000001", "12.49382901", "1234.5", "98765.4321"] {
            let parts = format_amount(value, "BTC", locale);
            assert_eq!(parts.middle.chars().count(), 3, "{value}/{locale}");
            assert_eq!(parts.end.chars().count(), 2, "{value}/{locale}");
        }
    }
}

#[test]
fn eight_class_round_trips_to_fixed_point() {
    for locale in LOCALES {
        let sep = decimal_separator(locale);
        for value in [0.00000001_f64, 12.493_829_01, 1234.5, 98765.4321] {
            let parts = format_amount(&value.to_string(), "BCH", locale);
            let joined = parts.to_string();
            assert_eq!(
                strip_grouping(&joined, &sep),
                format!("{value:.8}"),
                "{value}/{locale}"
            );
        }
    }
}

#[test]
fn format_is_idempotent() {
    for locale in LOCALES {
        for (value, currency) in [("1234.5", "USD"), ("abc", "BHD"), ("12.49382901", "BTC")] {
            let first = format_amount(value, currency, locale);
            let second = format_amount(value, currency, locale);
            assert_eq!(first, second, "{value}/{currency}/{locale}");
        }
    }
}

#[test]
fn placeholder_matches_locale_separator() {
    for locale in LOCALES {
        let sep = decimal_separator(locale);
        let parts = format_amount("not a number", "OMR", locale);
        assert_eq!(parts.start, format!("-{sep}---"), "{locale}");
        let parts = format_amount("not a number", "", locale);
        assert_eq!(parts.start, format!("-{sep}--"), "{locale}");
    }
}

#[test]
fn en_us_reference_values() {
    assert_eq!(format_amount("abc", "JPY", "en-US").to_string(), "-");
    assert_eq!(format_amount("abc", "BHD", "en-US").to_string(), "-.---");
    assert_eq!(format_amount("0", "BTC", "en-US").to_string(), "0");
    assert_eq!(format_amount("1234.5", "", "en-US").to_string(), "1,234.50");

    let parts = format_amount("12.49382901 BCH", "", "en-US");
    assert_eq!(parts.start, "12.493");
    assert_eq!(parts.middle, "829");
    assert_eq!(parts.end, "01");
}

#[test]
fn classification_is_case_insensitive_end_to_end() {
    let upper = format_amount("12.49382901", "BTC", "en-US");
    let lower = format_amount("12.49382901", "btc", "en-US");
    assert_eq!(upper, lower);
    assert_eq!(DecimalClass::for_currency("btc"), DecimalClass::Eight);
}

#[test]
fn parts_serialize_as_plain_strings() {
    let parts = format_amount("1234.5", "", "en-US");
    let json = serde_json::to_value(&parts).unwrap();
    assert_eq!(json["start"], "1,234.50");
    assert_eq!(json["middle"], "");
    assert_eq!(json["end"], "");
}
