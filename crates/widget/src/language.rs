//! Locale provider collaborator.

/// Supplies the active UI language.
///
/// The widget queries this on every format pass rather than caching the
/// tag, so a live language switch takes effect on the next recomputation.
pub trait LanguageProvider {
    /// The current locale tag, e.g. `"en-US"`.
    fn current_language(&self) -> String;
}

/// A fixed language, for hosts without live switching and for tests.
#[derive(Debug, Clone)]
pub struct StaticLanguage(String);

impl StaticLanguage {
    /// Wrap a locale tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl LanguageProvider for StaticLanguage {
    fn current_language(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_language() {
        let lang = StaticLanguage::new("de-DE");
        assert_eq!(lang.current_language(), "de-DE");
    }
}
