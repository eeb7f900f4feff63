use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use color_eyre::eyre::Context;
use handlebars::Handlebars;
use http::StatusCode;
use serde::Serialize;

use crate::{handlebars::create_handlebars, hide_debug::HideDebug, Config};

/// Everything a handler needs. Nothing here mutates after startup; each
/// request derives what it needs from its own headers.
#[derive(Clone, Debug)]
pub struct State {
    pub config: HideDebug<Arc<Config>>,
    pub handlebars: HideDebug<Handlebars<'static>>,
}

impl State {
    pub fn new(config: Arc<Config>) -> color_eyre::Result<Self> {
        Ok(Self {
            handlebars: HideDebug(create_handlebars().context("failed to create handlebars")?),
            config: HideDebug(config),
        })
    }

    pub fn render_template<T: Serialize>(&self, path: &'static str, data: T) -> Response {
        match self.handlebars.render(path, &data) {
            Ok(response) => Html(response).into_response(),
            Err(error) => {
                tracing::error!("failed to render template {path}: {error:#?}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to render template. this is a bug.\n{error}"),
                )
                    .into_response()
            }
        }
    }
}
