//! A known cookie matrix for black-box verification: /lab/set plants
//! host-only, domain-scoped, path-scoped, and secure-gated cookies, and
//! /lab/whoami reports which names are still visible afterwards. The
//! end-to-end suite drives a browser through set -> logout -> whoami to
//! confirm the expirations actually landed.

use std::sync::Arc;

use axum::{response::IntoResponse, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use http::{
    header::{HOST, SET_COOKIE},
    HeaderValue, StatusCode,
};

use crate::{headers, scope};

/// Path scope used by the path-restricted matrix cookies; /lab/api/ping
/// exists so they have a live path to be sent on.
const LAB_API_PATH: &str = "/lab/api";

fn lab_disabled() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, "the cookie lab is disabled")
}

/// Every Set-Cookie line for the matrix. The secure pair only exists over
/// https, where browsers will actually store it.
fn matrix_cookies(parent_domain: &str, secure: bool) -> Vec<String> {
    let mut cookies = vec![
        "host_only=1; Path=/".to_owned(),
        format!("host_only_api=1; Path={LAB_API_PATH}"),
        format!("domain_cookie=1; Domain={parent_domain}; Path=/"),
        format!("domain_cookie_api=1; Domain={parent_domain}; Path={LAB_API_PATH}"),
    ];

    if secure {
        cookies.push("secure_host_only=1; Path=/; Secure".to_owned());
        cookies.push(format!(
            "secure_domain_cookie=1; Domain={parent_domain}; Path=/; Secure"
        ));
    }

    cookies
}

#[tracing::instrument(skip(request_headers))]
pub async fn set_cookies(
    Extension(state): Extension<Arc<crate::State>>,
    request_headers: http::HeaderMap,
) -> impl IntoResponse {
    if !state.config.cookie_lab {
        return lab_disabled().into_response();
    }

    let host = request_headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let host = scope::host_without_port(host);
    let parent_domain = scope::parent_domain(host);
    let secure = headers::is_secure_transport(&request_headers);

    let mut response = "cookies set\n".into_response();

    for cookie in matrix_cookies(&parent_domain, secure) {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(error) => tracing::warn!("skipping matrix cookie {cookie:?}: {error}"),
        }
    }

    response
}

#[tracing::instrument(skip(request_headers, jar))]
pub async fn whoami(
    Extension(state): Extension<Arc<crate::State>>,
    jar: CookieJar,
    request_headers: http::HeaderMap,
) -> impl IntoResponse {
    if !state.config.cookie_lab {
        return lab_disabled().into_response();
    }

    let host = request_headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let mut cookies: Vec<String> = jar.iter().map(|cookie| cookie.name().to_owned()).collect();
    cookies.sort();

    Json(serde_json::json!({
        "host": scope::host_without_port(host),
        "cookies": cookies,
    }))
    .into_response()
}

#[tracing::instrument]
pub async fn ping(Extension(state): Extension<Arc<crate::State>>) -> impl IntoResponse {
    if !state.config.cookie_lab {
        return lab_disabled().into_response();
    }

    "pong\n".into_response()
}
