use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;
use with_core::response::rejected;
use with_core::{ApiRejection, JsonUtf8};

use super::upstream;
use crate::prompts::classify_prompt;
use crate::serializers::with_classify::{Classification, WithClassifyIn, WithClassifyOut};
use crate::AppState;

pub async fn classify(
    State(state): State<AppState>,
    body: Result<Json<WithClassifyIn>, JsonRejection>,
) -> Result<JsonUtf8<WithClassifyOut>, ApiRejection> {
    let Json(inp) = body.map_err(rejected)?;

    let raw = state
        .client
        .complete(&state.model, &classify_prompt(&inp.text))
        .await
        .map_err(upstream)?;

    let label = Classification::from_model_output(&raw);
    info!(state = %label, "classified");
    Ok(JsonUtf8(WithClassifyOut { state: label }))
}
