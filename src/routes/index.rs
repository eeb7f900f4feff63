use std::sync::Arc;

use axum::{response::IntoResponse, Extension};
use serde::Serialize;

use super::TemplateBase;

#[derive(Serialize)]
struct ConductorTemplate {
    base: TemplateBase,
    domains: Vec<String>,
}

/// The conductor page: one trigger per configured domain, each calling
/// /logout on its own origin so its cookies are actually visible to us.
#[tracing::instrument]
pub async fn index(Extension(state): Extension<Arc<crate::State>>) -> impl IntoResponse {
    state.render_template(
        "conductor",
        ConductorTemplate {
            base: TemplateBase {
                title: "log out everywhere".into(),
            },
            domains: state.config.domains.clone(),
        },
    )
}
