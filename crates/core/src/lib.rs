//! Formatted Amount Core - locale-aware currency amount formatting.
//!
//! This crate turns a raw numeric string and a currency code into display
//! fragments, localized to a BCP-47 locale tag:
//!
//! - the integer part plus the "near" fractional digits, and
//! - for 8-decimal currencies (BCH, BTC), a split fractional tail the host
//!   can render in a smaller font.
//!
//! # Architecture
//!
//! The core crate contains only formatting logic - no I/O, no widget state,
//! no host bindings. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`currency`] - Decimal-digit classification of currency codes
//! - [`locale`] - Locale-aware number rendering and separator detection
//! - [`amount`] - The amount builder producing display fragments

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod amount;
pub mod currency;
pub mod locale;

pub use amount::{AmountParts, format_amount};
pub use currency::DecimalClass;
pub use locale::{LocaleError, decimal_separator, localize};
