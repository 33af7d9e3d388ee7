use super::format::{sprintf, Arg, FormatError};
use super::messages::{Bundle, MessageKey, EN, ES};
use crate::kernel::request::Language;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocalizationError {
    #[error("no '{key}' message for '{language}' and no fallback bundle has it")]
    MissingMessage { key: MessageKey, language: Language },
    #[error("cannot format '{key}': {source}")]
    Format {
        key: MessageKey,
        #[source]
        source: FormatError,
    },
}

/// Language bundles plus the language used when a bundle lacks a key.
/// Holds no per-request state: the language is passed on every call.
#[derive(Debug, Clone)]
pub struct Localizer {
    bundles: HashMap<Language, &'static Bundle>,
    fallback: Option<Language>,
}

impl Localizer {
    pub fn new(bundles: HashMap<Language, &'static Bundle>, fallback: Option<Language>) -> Self {
        Self { bundles, fallback }
    }

    /// Raw template lookup: requested language first, then the fallback.
    pub fn template(&self, language: Language, key: MessageKey) -> Option<&'static str> {
        let lookup = |lang: Language| {
            self.bundles
                .get(&lang)
                .and_then(|bundle| bundle.get(key.as_str()).copied())
        };
        lookup(language).or_else(|| self.fallback.and_then(lookup))
    }

    /// PURE FUNCTION: (language, key, args) -> text.
    pub fn translate(
        &self,
        language: Language,
        key: MessageKey,
        args: &[Arg<'_>],
    ) -> Result<String, LocalizationError> {
        let template = self
            .template(language, key)
            .ok_or(LocalizationError::MissingMessage { key, language })?;
        sprintf(template, args).map_err(|source| LocalizationError::Format { key, source })
    }
}

impl Default for Localizer {
    fn default() -> Self {
        let mut bundles: HashMap<Language, &'static Bundle> = HashMap::new();
        bundles.insert(Language::English, &EN);
        bundles.insert(Language::Spanish, &ES);
        Self::new(bundles, Some(Language::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phf::phf_map;

    static PARTIAL_ES: Bundle = phf_map! {
        "GOODBYE_MESSAGE" => "¡Adiós!",
    };

    #[test]
    fn builtin_bundles_are_complete() {
        let keys = [
            MessageKey::Welcome,
            MessageKey::Help,
            MessageKey::Goodbye,
            MessageKey::Fallback,
            MessageKey::Error,
            MessageKey::Hello,
            MessageKey::Reflector,
            MessageKey::ConvertPrefix,
            MessageKey::Convert,
            MessageKey::UnsupportedConversion,
            MessageKey::InvalidQuantity,
        ];
        for bundle in [&EN, &ES] {
            for key in keys {
                assert!(bundle.get(key.as_str()).is_some(), "bundle missing {}", key);
            }
        }
    }

    #[test]
    fn missing_key_falls_back() {
        let mut bundles: HashMap<Language, &'static Bundle> = HashMap::new();
        bundles.insert(Language::English, &EN);
        bundles.insert(Language::Spanish, &PARTIAL_ES);
        let localizer = Localizer::new(bundles, Some(Language::English));

        assert_eq!(
            localizer.translate(Language::Spanish, MessageKey::Goodbye, &[]).unwrap(),
            "¡Adiós!"
        );
        assert_eq!(
            localizer.translate(Language::Spanish, MessageKey::Hello, &[]).unwrap(),
            "Hello World!"
        );
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let mut bundles: HashMap<Language, &'static Bundle> = HashMap::new();
        bundles.insert(Language::Spanish, &PARTIAL_ES);
        let localizer = Localizer::new(bundles, None);

        let err = localizer
            .translate(Language::Spanish, MessageKey::Welcome, &[])
            .unwrap_err();
        assert_eq!(
            err,
            LocalizationError::MissingMessage {
                key: MessageKey::Welcome,
                language: Language::Spanish
            }
        );
    }

    #[test]
    fn format_errors_carry_the_key() {
        let localizer = Localizer::default();
        let err = localizer
            .translate(Language::English, MessageKey::UnsupportedConversion, &["feet".into()])
            .unwrap_err();
        assert!(matches!(
            err,
            LocalizationError::Format { key: MessageKey::UnsupportedConversion, .. }
        ));
    }
}
