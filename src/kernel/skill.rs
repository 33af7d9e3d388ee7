use super::config::SkillConfig;
use super::error::SkillError;
use super::handlers::HandlerInput;
use super::registry::Registry;
use super::request::{Language, Request};
use super::response::Response;
use crate::conversion::ConversionCatalog;
use crate::outputs::{messages::BASELINE_APOLOGY, Localizer, MessageKey};
use crate::platform::envelope::{RequestEnvelope, ResponseEnvelope};
use tracing::{info, warn};

/// Request boundary. Holds only read-only parts, so one instance can serve
/// any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Skill {
    pub config: SkillConfig,
    registry: Registry,
    localizer: Localizer,
    catalog: ConversionCatalog,
}

impl Skill {
    pub fn new(config: SkillConfig) -> Self {
        Self::with_parts(
            config,
            Registry::standard(),
            Localizer::default(),
            ConversionCatalog::default(),
        )
    }

    pub fn with_parts(
        config: SkillConfig,
        registry: Registry,
        localizer: Localizer,
        catalog: ConversionCatalog,
    ) -> Self {
        Self {
            config,
            registry,
            localizer,
            catalog,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn language_for(&self, locale: Option<&str>) -> Language {
        Language::resolve(locale, self.config.fallback_language)
    }

    /// Never fails: any handler error becomes the apology response.
    ///
    /// 1. Log the request
    /// 2. Dispatch through the registry
    /// 3. Recover errors
    /// 4. Log the response
    pub fn handle(&self, request: &Request, locale: Option<&str>) -> Response {
        let language = self.language_for(locale);
        info!(
            "Incoming request: {} (locale {:?} -> {})",
            serde_json::to_string(request).unwrap_or_default(),
            locale,
            language
        );

        let response = self.respond(request, language);

        info!(
            "Outgoing response: {}",
            serde_json::to_string(&response).unwrap_or_default()
        );
        response
    }

    fn respond(&self, request: &Request, language: Language) -> Response {
        let input = HandlerInput {
            request,
            language,
            localizer: &self.localizer,
            catalog: &self.catalog,
        };
        self.registry
            .dispatch(&input)
            .unwrap_or_else(|err| self.recover(&err, language))
    }

    /// Catch-all error handler: apology as speech and reprompt.
    pub fn recover(&self, error: &SkillError, language: Language) -> Response {
        warn!("Error handled: {}", error);
        let speech = self
            .localizer
            .translate(language, MessageKey::Error, &[])
            .unwrap_or_else(|err| {
                warn!("Apology lookup failed, using baseline: {}", err);
                BASELINE_APOLOGY.to_string()
            });
        Response::speak(speech.clone()).reprompt(speech)
    }

    /// Full platform round trip: envelope in, envelope out. Requests the
    /// kernel cannot represent are logged like any other and answered with
    /// the apology.
    pub fn handle_envelope(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let locale = envelope.request.locale.as_deref();
        let language = self.language_for(locale);
        info!(
            "Incoming request: {} (locale {:?} -> {})",
            serde_json::to_string(&envelope.request).unwrap_or_default(),
            locale,
            language
        );

        let response = match envelope.request.to_request() {
            Ok(request) => self.respond(&request, language),
            Err(err) => self.recover(&err, language),
        };
        self.wrap(&response)
    }

    /// Entry point for raw JSON text. Text that is not an envelope still gets
    /// one apology envelope, in the fallback language.
    pub fn handle_json(&self, raw: &str) -> ResponseEnvelope {
        match serde_json::from_str::<RequestEnvelope>(raw) {
            Ok(envelope) => self.handle_envelope(&envelope),
            Err(err) => {
                info!("Incoming request: {} bytes of unparsable JSON", raw.len());
                let error = SkillError::MalformedEnvelope(err.to_string());
                let response = self.recover(&error, self.config.fallback_language);
                self.wrap(&response)
            }
        }
    }

    fn wrap(&self, response: &Response) -> ResponseEnvelope {
        let envelope = ResponseEnvelope::from_response(response, self.config.user_agent.clone());
        info!(
            "Outgoing response: {}",
            serde_json::to_string(&envelope).unwrap_or_default()
        );
        envelope
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new(SkillConfig::default())
    }
}
