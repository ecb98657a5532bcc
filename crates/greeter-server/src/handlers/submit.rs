//! Search term submission handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::submit::SubmitRequest;
use crate::state::AppState;

/// Records the submitted search term and answers with a joke.
///
/// The response body is a bare JSON string: either a joke or the fallback
/// message. Both are `200 OK`.
///
/// `POST /api/submit/`
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<String>, ApiError> {
    let joke = state.service.submit(req.search_term).await?;
    Ok(Json(joke))
}
