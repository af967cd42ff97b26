use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;
use with_core::response::rejected;
use with_core::{ApiRejection, JsonUtf8};

use super::upstream;
use crate::prompts::respond_prompt;
use crate::serializers::with_respond::{WithRespondIn, WithRespondOut};
use crate::AppState;

pub async fn respond(
    State(state): State<AppState>,
    body: Result<Json<WithRespondIn>, JsonRejection>,
) -> Result<JsonUtf8<WithRespondOut>, ApiRejection> {
    let Json(inp) = body.map_err(rejected)?;

    let raw = state
        .client
        .complete(&state.model, &respond_prompt(&inp.text, &inp.state))
        .await
        .map_err(upstream)?;

    let reply = raw.trim().to_string();
    info!(state = %inp.state, chars = reply.chars().count(), "replied");
    Ok(JsonUtf8(WithRespondOut { reply }))
}
