use crate::kernel::skill::Skill;
use crate::platform::envelope::{RequestEnvelope, ResponseEnvelope};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn router(skill: Arc<Skill>) -> Router {
    Router::new()
        .route("/", post(skill_endpoint))
        .route("/health", get(health_check))
        .with_state(skill)
}

/// The platform posts one envelope per request and expects a 200 with the
/// response envelope, apologies included.
pub async fn skill_endpoint(
    State(skill): State<Arc<Skill>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Json<ResponseEnvelope> {
    Json(skill.handle_envelope(&envelope))
}

pub async fn health_check() -> &'static str {
    "ok"
}
