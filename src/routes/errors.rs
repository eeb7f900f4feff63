use std::sync::Arc;

use axum::{extract::OriginalUri, response::IntoResponse, Extension};
use http::StatusCode;
use serde::Serialize;

use crate::State;

#[derive(Serialize)]
pub struct ErrorTemplate {
    error_code: u16,
    error_message: String,
}

pub async fn make_not_found(state: Arc<State>, message: &str) -> impl IntoResponse {
    let mut response = state.render_template(
        "error",
        ErrorTemplate {
            error_code: 404,
            error_message: message.to_owned(),
        },
    );

    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[tracing::instrument]
pub async fn not_found(
    Extension(state): Extension<Arc<State>>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    make_not_found(state, &format!("{} not found", uri.path())).await
}
