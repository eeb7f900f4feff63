mod config;
mod expire;
mod handlebars;
mod headers;
mod hide_debug;
mod routes;
mod scope;
mod state;

pub use config::Config;
pub use state::State;

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::Extension, handler::Handler, routing::get, Router};
use color_eyre::eyre::Context;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Arc::new(Config::read_from_file().context("failed to read config")?);

    if config.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    tracing::info!("starting signoff");

    let state = Arc::new(State::new(Arc::clone(&config)).context("failed to create state")?);

    let port = config.port;

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/logout", get(routes::logout))
        .route("/lab/set", get(routes::cookie_lab::set_cookies))
        .route("/lab/whoami", get(routes::cookie_lab::whoami))
        .route("/lab/api/ping", get(routes::cookie_lab::ping))
        .fallback(routes::errors::not_found.into_service())
        .layer(Extension(state))
        .layer(axum::middleware::from_fn(headers::no_store_defaults))
        .layer(TraceLayer::new_for_http());

    let address = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::debug!("listening on {}", address);

    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await
        .unwrap();

    Ok(())
}
