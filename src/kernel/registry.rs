use super::error::SkillError;
use super::handlers::{self, HandlerInput};
use super::request::{Request, LAUNCH_REQUEST, SESSION_ENDED_REQUEST};
use super::response::Response;
use tracing::debug;

pub const CONVERT_INTENT: &str = "ConvertidorIntent";
pub const HELLO_WORLD_INTENT: &str = "HelloWorldIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

pub type Predicate = fn(&Request) -> bool;
pub type Action = fn(&HandlerInput<'_>) -> Result<Response, SkillError>;

/// One link of the handler chain.
#[derive(Clone, Copy)]
pub struct HandlerEntry {
    pub name: &'static str,
    pub can_handle: Predicate,
    pub handle: Action,
}

impl std::fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry").field("name", &self.name).finish()
    }
}

fn is_intent(request: &Request, name: &str) -> bool {
    request.intent_name() == Some(name)
}

/// Ordered handler chain. First entry whose predicate accepts the request wins;
/// an earlier entry silently shadows any later one with the same predicate.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<HandlerEntry>,
}

impl Registry {
    pub fn new(entries: Vec<HandlerEntry>) -> Self {
        Self { entries }
    }

    /// The skill's chain. Order matters: the reflector matches every intent
    /// and must stay last.
    pub fn standard() -> Self {
        Self::new(vec![
            HandlerEntry {
                name: LAUNCH_REQUEST,
                can_handle: |r| matches!(r, Request::Launch),
                handle: handlers::launch,
            },
            HandlerEntry {
                name: CONVERT_INTENT,
                can_handle: |r| is_intent(r, CONVERT_INTENT),
                handle: handlers::convert,
            },
            HandlerEntry {
                name: HELLO_WORLD_INTENT,
                can_handle: |r| is_intent(r, HELLO_WORLD_INTENT),
                handle: handlers::hello_world,
            },
            HandlerEntry {
                name: "HelpIntent",
                can_handle: |r| is_intent(r, HELP_INTENT),
                handle: handlers::help,
            },
            HandlerEntry {
                name: "CancelAndStopIntent",
                can_handle: |r| is_intent(r, CANCEL_INTENT) || is_intent(r, STOP_INTENT),
                handle: handlers::cancel_and_stop,
            },
            HandlerEntry {
                name: "FallbackIntent",
                can_handle: |r| is_intent(r, FALLBACK_INTENT),
                handle: handlers::fallback,
            },
            HandlerEntry {
                name: SESSION_ENDED_REQUEST,
                can_handle: |r| matches!(r, Request::SessionEnded { .. }),
                handle: handlers::session_ended,
            },
            HandlerEntry {
                name: "IntentReflector",
                can_handle: |r| matches!(r, Request::Intent { .. }),
                handle: handlers::intent_reflector,
            },
        ])
    }

    pub fn entries(&self) -> &[HandlerEntry] {
        &self.entries
    }

    pub fn select(&self, request: &Request) -> Option<&HandlerEntry> {
        self.entries.iter().find(|entry| (entry.can_handle)(request))
    }

    pub fn dispatch(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        let entry = self
            .select(input.request)
            .ok_or_else(|| SkillError::NoMatchingHandler {
                request_type: input.request.type_name(),
                intent: input.request.intent_name().map(str::to_string),
            })?;
        debug!("Dispatching {} to {}", input.request.type_name(), entry.name);
        (entry.handle)(input)
    }
}
