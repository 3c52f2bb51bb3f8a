//! Formatted Amount Widget - host-facing glue around the core formatter.
//!
//! The core crate is a pure function; this crate adds what a UI host needs
//! around it: a [`LanguageProvider`] collaborator queried on every format
//! pass (so live language switches are picked up), a widget struct owning
//! the input attributes and the computed fragments, a readiness flag for
//! deferred first render, and recomputation whenever an input changes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod language;
pub mod widget;

pub use language::{LanguageProvider, StaticLanguage};
pub use widget::FormattedAmountWidget;
