use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Raw slot values keyed by slot name. Values are the platform's resolved text,
/// never parsed here.
pub type Slots = BTreeMap<String, String>;

/// What the platform asked us to do. Envelope details (ids, timestamps,
/// session attributes) are stripped before a request reaches the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Request {
    Launch,
    Intent { name: String, slots: Slots },
    SessionEnded { reason: Option<String> },
}

impl Request {
    pub fn intent(name: &str) -> Self {
        Self::Intent {
            name: name.to_string(),
            slots: Slots::new(),
        }
    }

    /// Builder helper for tests and the invoke binary.
    pub fn with_slot(mut self, slot: &str, value: &str) -> Self {
        if let Self::Intent { slots, .. } = &mut self {
            slots.insert(slot.to_string(), value.to_string());
        }
        self
    }

    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Self::Intent { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn slot(&self, slot: &str) -> Option<&str> {
        match self {
            Self::Intent { slots, .. } => slots.get(slot).map(String::as_str),
            _ => None,
        }
    }

    /// Platform request type name, used in logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Launch => LAUNCH_REQUEST,
            Self::Intent { .. } => INTENT_REQUEST,
            Self::SessionEnded { .. } => SESSION_ENDED_REQUEST,
        }
    }
}

/// Languages the skill ships messages and a conversion table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Two-letter tag, also the key of the message bundles.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Matches the two-letter prefix of a locale tag such as `en-US` or `es-ES`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let prefix = locale.split(['-', '_']).next()?.trim();
        Self::ALL
            .into_iter()
            .find(|lang| prefix.eq_ignore_ascii_case(lang.tag()))
    }

    /// Like `from_locale`, but unknown or missing tags resolve to `fallback`.
    pub fn resolve(locale: Option<&str>, fallback: Language) -> Self {
        locale.and_then(Self::from_locale).unwrap_or(fallback)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locale(s).ok_or_else(|| format!("unsupported locale '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_prefix_selects_language() {
        assert_eq!(Language::from_locale("en-US"), Some(Language::English));
        assert_eq!(Language::from_locale("en-GB"), Some(Language::English));
        assert_eq!(Language::from_locale("es-ES"), Some(Language::Spanish));
        assert_eq!(Language::from_locale("ES-mx"), Some(Language::Spanish));
        assert_eq!(Language::from_locale("es"), Some(Language::Spanish));
        assert_eq!(Language::from_locale("fr-FR"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn unknown_locale_uses_fallback() {
        assert_eq!(Language::resolve(Some("de-DE"), Language::English), Language::English);
        assert_eq!(Language::resolve(None, Language::Spanish), Language::Spanish);
        assert_eq!(Language::resolve(Some("es-US"), Language::English), Language::Spanish);
    }

    #[test]
    fn slot_lookup_only_on_intents() {
        let req = Request::intent("ConvertidorIntent").with_slot("uno", "3");
        assert_eq!(req.slot("uno"), Some("3"));
        assert_eq!(req.slot("medida"), None);
        assert_eq!(Request::Launch.with_slot("uno", "3").slot("uno"), None);
    }
}
