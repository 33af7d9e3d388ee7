use serde::{Deserialize, Serialize};

/// What a handler wants spoken back. Wrapped into the platform envelope by
/// `platform::envelope`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub should_end_session: Option<bool>,
}

impl Response {
    /// No speech at all. Used when the session has already ended.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            ..Self::default()
        }
    }

    /// A reprompt keeps the session open waiting for the user.
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self.should_end_session = Some(false);
        self
    }

    pub fn end_session(mut self) -> Self {
        self.should_end_session = Some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.speech.is_none() && self.reprompt.is_none() && self.should_end_session.is_none()
    }
}
