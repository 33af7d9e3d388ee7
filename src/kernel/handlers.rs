use super::error::SkillError;
use super::request::{Language, Request};
use super::response::Response;
use crate::conversion::{resolver::normalize_unit, resolve_slots, ConversionCatalog, ConversionOutcome};
use crate::outputs::{Arg, Localizer, MessageKey};
use tracing::{debug, info};

/// Slot names declared by the interaction model for `ConvertidorIntent`.
pub const QUANTITY_SLOT: &str = "uno";
pub const FROM_UNIT_SLOT: &str = "medida";
pub const TO_UNIT_SLOT: &str = "medidaapasar";

/// Everything a handler may read. Borrowed from the `Skill` for one request.
#[derive(Debug, Clone, Copy)]
pub struct HandlerInput<'a> {
    pub request: &'a Request,
    pub language: Language,
    pub localizer: &'a Localizer,
    pub catalog: &'a ConversionCatalog,
}

impl HandlerInput<'_> {
    pub fn t(&self, key: MessageKey, args: &[Arg<'_>]) -> Result<String, SkillError> {
        Ok(self.localizer.translate(self.language, key, args)?)
    }

    fn slot(&self, name: &'static str) -> Result<&str, SkillError> {
        self.request.slot(name).ok_or(SkillError::MissingSlot(name))
    }
}

pub fn launch(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speech = input.t(MessageKey::Welcome, &[])?;
    Ok(Response::speak(speech.clone()).reprompt(speech))
}

/// Resolves the conversion in the table of the request's language and speaks
/// the outcome after the fixed prefix.
pub fn convert(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let raw_quantity = input.slot(QUANTITY_SLOT)?;
    let from = input.slot(FROM_UNIT_SLOT)?;
    let to = input.slot(TO_UNIT_SLOT)?;

    let outcome = match input.catalog.table(input.language) {
        Some(table) => resolve_slots(raw_quantity, from, to, table),
        None => ConversionOutcome::Unsupported {
            from: normalize_unit(from),
            to: normalize_unit(to),
        },
    };
    debug!("Conversion outcome: {:?}", outcome);

    let detail = match &outcome {
        ConversionOutcome::Converted {
            value,
            from,
            converted,
            to,
        } => input.t(
            MessageKey::Convert,
            &[
                Arg::Float(*value),
                Arg::from(from),
                Arg::Float(*converted),
                Arg::from(to),
            ],
        )?,
        ConversionOutcome::Unsupported { from, to } => input.t(
            MessageKey::UnsupportedConversion,
            &[Arg::from(from), Arg::from(to)],
        )?,
        ConversionOutcome::InvalidQuantity { raw } => {
            input.t(MessageKey::InvalidQuantity, &[Arg::from(raw)])?
        }
    };

    let speech = format!("{} {}", input.t(MessageKey::ConvertPrefix, &[])?, detail);
    Ok(Response::speak(speech).reprompt(input.t(MessageKey::Help, &[])?))
}

pub fn hello_world(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    Ok(Response::speak(input.t(MessageKey::Hello, &[])?))
}

pub fn help(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speech = input.t(MessageKey::Help, &[])?;
    Ok(Response::speak(speech.clone()).reprompt(speech))
}

pub fn cancel_and_stop(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    Ok(Response::speak(input.t(MessageKey::Goodbye, &[])?).end_session())
}

/// Must also exist in the interaction model; locales without it never send it.
pub fn fallback(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speech = input.t(MessageKey::Fallback, &[])?;
    Ok(Response::speak(speech.clone()).reprompt(speech))
}

/// The platform closed the session (user exit, timeout or error). Nothing may
/// be spoken back.
pub fn session_ended(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    if let Request::SessionEnded { reason } = input.request {
        info!("Session ended: {}", reason.as_deref().unwrap_or("unspecified"));
    }
    Ok(Response::empty())
}

/// Echoes the intent name. Handy while testing the interaction model.
pub fn intent_reflector(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let name = input.request.intent_name().unwrap_or_default();
    Ok(Response::speak(input.t(MessageKey::Reflector, &[Arg::Text(name)])?))
}
