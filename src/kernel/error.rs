use crate::outputs::LocalizationError;
use thiserror::Error;

/// Faults raised while answering one request. All of them are recovered at the
/// request boundary (`Skill::recover`) into the spoken apology.
///
/// Unsupported unit pairs and unparseable quantities are not faults: they are
/// `ConversionOutcome` variants and get their own spoken answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillError {
    #[error("no handler matches {request_type} (intent: {intent:?})")]
    NoMatchingHandler {
        request_type: &'static str,
        intent: Option<String>,
    },
    #[error("request is missing slot '{0}'")]
    MissingSlot(&'static str),
    #[error("unsupported request: {0}")]
    UnsupportedRequest(String),
    #[error("malformed request envelope: {0}")]
    MalformedEnvelope(String),
    #[error(transparent)]
    Localization(#[from] LocalizationError),
}
