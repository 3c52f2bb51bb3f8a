//! Reactive display state for a single formatted amount.

use formatted_amount_core::{AmountParts, format_amount};

use crate::language::LanguageProvider;

/// Display state for one amount widget instance.
///
/// Owns its two input attributes (value, currency), the purely visual
/// size-equal flag, and the last computed [`AmountParts`]. Instances share
/// nothing; every widget carries its own provider and fragments.
///
/// The first computation is deferred: a freshly constructed widget reports
/// `can_show() == false` until the host calls [`refresh`] after its current
/// render pass. From then on, every input change recomputes the fragments
/// before returning, so the host always renders a fully rebuilt triple.
///
/// [`refresh`]: FormattedAmountWidget::refresh
#[derive(Debug)]
pub struct FormattedAmountWidget<P> {
    provider: P,
    value: String,
    currency: String,
    size_equal: bool,
    can_show: bool,
    parts: AmountParts,
}

impl<P: LanguageProvider> FormattedAmountWidget<P> {
    /// Create a widget from its host attributes. No formatting happens yet.
    pub fn new(
        provider: P,
        value: impl Into<String>,
        currency: impl Into<String>,
        size_equal: bool,
    ) -> Self {
        Self {
            provider,
            value: value.into(),
            currency: currency.into(),
            size_equal,
            can_show: false,
            parts: AmountParts::default(),
        }
    }

    /// Recompute the fragments from the current inputs and active language.
    pub fn refresh(&mut self) {
        let locale = self.provider.current_language();
        self.parts = format_amount(&self.value, &self.currency, &locale);
        self.can_show = true;
        tracing::debug!(
            value = %self.value,
            currency = %self.currency,
            locale = %locale,
            rendered = %self.parts,
            "Recomputed formatted amount"
        );
    }

    /// Replace the value attribute.
    ///
    /// Recomputes immediately once the widget has rendered. The value may
    /// carry a combined `"<number> <CODE>"` form, in which case the embedded
    /// code overrides the currency attribute during formatting.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.can_show {
            self.refresh();
        }
    }

    /// Replace the currency attribute, recomputing once rendered.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
        if self.can_show {
            self.refresh();
        }
    }

    /// The computed fragments. Defaults (all empty) before first refresh.
    #[must_use]
    pub const fn parts(&self) -> &AmountParts {
        &self.parts
    }

    /// Integer part plus near fraction.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.parts.start
    }

    /// Middle fractional digits (8-decimal currencies only).
    #[must_use]
    pub fn middle(&self) -> &str {
        &self.parts.middle
    }

    /// Trailing fractional digits (8-decimal currencies only).
    #[must_use]
    pub fn end(&self) -> &str {
        &self.parts.end
    }

    /// Whether the first computation has run.
    #[must_use]
    pub const fn can_show(&self) -> bool {
        self.can_show
    }

    /// Whether the host should render all fragments at equal size.
    #[must_use]
    pub const fn size_equal(&self) -> bool {
        self.size_equal
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::language::StaticLanguage;

    /// A provider whose language can be switched from outside the widget.
    #[derive(Clone)]
    struct SharedLanguage(Rc<RefCell<String>>);

    impl LanguageProvider for SharedLanguage {
        fn current_language(&self) -> String {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn test_first_render_is_deferred() {
        let mut widget =
            FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1234.5", "USD", false);
        assert!(!widget.can_show());
        assert_eq!(widget.start(), "");

        widget.refresh();
        assert!(widget.can_show());
        assert_eq!(widget.start(), "1,234.50");
    }

    #[test]
    fn test_set_value_before_first_render_does_not_compute() {
        let mut widget =
            FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1", "USD", false);
        widget.set_value("2");
        assert!(!widget.can_show());
        assert_eq!(widget.start(), "");
    }

    #[test]
    fn test_set_value_recomputes_after_render() {
        let mut widget =
            FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1", "USD", false);
        widget.refresh();
        widget.set_value("2.5");
        assert_eq!(widget.start(), "2.50");
    }

    #[test]
    fn test_set_currency_recomputes_after_render() {
        let mut widget =
            FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1234.5", "USD", false);
        widget.refresh();
        widget.set_currency("JPY");
        assert_eq!(widget.start(), "1,235");
    }

    #[test]
    fn test_combined_value_overrides_currency_attribute() {
        let mut widget =
            FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1234.5", "JPY", false);
        widget.refresh();
        widget.set_value("12.49382901 BCH");
        assert_eq!(widget.start(), "12.493");
        assert_eq!(widget.middle(), "829");
        assert_eq!(widget.end(), "01");
    }

    #[test]
    fn test_live_language_switch() {
        let language = SharedLanguage(Rc::new(RefCell::new(String::from("en-US"))));
        let mut widget = FormattedAmountWidget::new(language.clone(), "1234.5", "USD", false);
        widget.refresh();
        assert_eq!(widget.start(), "1,234.50");

        *language.0.borrow_mut() = String::from("de-DE");
        // An identical set still recomputes, picking up the new language.
        widget.set_value("1234.5");
        assert_eq!(widget.start(), "1.234,50");
    }

    #[test]
    fn test_size_equal_passthrough() {
        let widget = FormattedAmountWidget::new(StaticLanguage::new("en-US"), "1", "USD", true);
        assert!(widget.size_equal());
    }
}
