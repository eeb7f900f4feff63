use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    Extension,
};
use http::{
    header::{COOKIE, HOST, SET_COOKIE},
    HeaderValue, StatusCode,
};

use crate::{
    expire::{self, CookieExpiration, ExpireOptions},
    headers, scope,
};

/// Expires every cookie the request presented, under every attribute
/// combination we cover: parent domain, exact host, and host-only, per
/// configured path. Over https this is backed up by Clear-Site-Data, which
/// handles the current origin wholesale; the per-cookie expirations remain
/// the only thing reaching sibling origins' domain-scoped cookies.
#[tracing::instrument(skip(request_headers))]
pub async fn logout(
    Extension(state): Extension<Arc<crate::State>>,
    request_headers: http::HeaderMap,
) -> impl IntoResponse {
    let host = request_headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let host = scope::host_without_port(host);
    let parent_domain = scope::parent_domain(host);
    let secure = headers::is_secure_transport(&request_headers);

    tracing::debug!("incoming host: {host}");
    tracing::debug!("derived parent domain: {parent_domain}");
    tracing::debug!("secure transport: {secure}");

    let cookie_header = request_headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let names = expire::cookie_names(cookie_header);

    tracing::debug!("cookies to expire: {names:?}");

    let options = ExpireOptions {
        paths: &state.config.expire_paths,
        secure,
        same_site_none: state.config.expire_same_site_none,
    };

    let expirations = expire::expire_all(&names, host, &parent_domain, &options);

    invalidation_response(&expirations, secure, state.config.clear_site_data)
}

/// 205 tells the client its current view of the page is stale and should be
/// reset, which is exactly what a logout means.
fn invalidation_response(
    expirations: &[CookieExpiration],
    secure: bool,
    clear_site_data: bool,
) -> Response {
    let mut response = (StatusCode::RESET_CONTENT, "You have been logged out.").into_response();

    headers::force_no_store(response.headers_mut());

    // Browsers ignore Clear-Site-Data over plaintext, so don't bother.
    if secure && clear_site_data {
        response.headers_mut().insert(
            headers::CLEAR_SITE_DATA.clone(),
            HeaderValue::from_static(headers::CLEAR_SITE_DATA_VALUE),
        );
    }

    for expiration in expirations {
        match HeaderValue::from_str(&expiration.header_value()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(error) => {
                tracing::warn!(
                    "skipping unencodable expiration for cookie {:?}: {error}",
                    expiration.name
                );
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{body::Body, routing::get, Router};
    use http::header::{CACHE_CONTROL, EXPIRES, PRAGMA, REFERRER_POLICY};
    use tower::ServiceExt;

    fn test_state(expire_paths: Vec<String>) -> Arc<crate::State> {
        let config = Arc::new(crate::Config {
            port: 0,
            debug: false,
            domains: Vec::new(),
            expire_paths,
            clear_site_data: true,
            expire_same_site_none: false,
            cookie_lab: false,
        });

        Arc::new(crate::State::new(config).unwrap())
    }

    #[test]
    fn anti_cache_headers_always_present() {
        let response = invalidation_response(&[], false, true);

        assert_eq!(response.status(), StatusCode::RESET_CONTENT);

        for name in [CACHE_CONTROL, PRAGMA, EXPIRES, REFERRER_POLICY] {
            assert!(response.headers().contains_key(&name), "{name} missing");
        }
    }

    #[test]
    fn clear_site_data_requires_secure_transport_and_capability() {
        for (secure, enabled, expected) in [
            (true, true, true),
            (true, false, false),
            (false, true, false),
            (false, false, false),
        ] {
            let response = invalidation_response(&[], secure, enabled);

            assert_eq!(
                response.headers().contains_key(&*headers::CLEAR_SITE_DATA),
                expected,
                "secure={secure} enabled={enabled}"
            );
        }
    }

    #[test]
    fn expirations_become_set_cookie_headers() {
        let expirations = expire::expire_all(
            &["sid".to_owned()],
            "app.example.com",
            ".example.com",
            &ExpireOptions {
                paths: &["/".to_owned()],
                secure: true,
                same_site_none: false,
            },
        );

        let response = invalidation_response(&expirations, true, false);
        let set_cookies: Vec<&HeaderValue> =
            response.headers().get_all(SET_COOKIE).iter().collect();

        assert_eq!(set_cookies.len(), 3);
    }

    #[tokio::test]
    async fn logout_round_trip() {
        let app = Router::new()
            .route("/logout", get(logout))
            .layer(Extension(test_state(vec!["/".to_owned()])));

        let response = app
            .oneshot(
                http::Request::builder()
                    .uri("/logout")
                    .header(HOST, "app.example.com")
                    .header(COOKIE, "sid=abc; theme=dark")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::RESET_CONTENT);
        assert!(response.headers().contains_key(&*headers::CLEAR_SITE_DATA));

        let set_cookies: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap())
            .collect();

        // Two names, each across parent domain, exact host, and host-only.
        assert_eq!(set_cookies.len(), 6);

        for name in ["sid", "theme"] {
            assert!(set_cookies
                .iter()
                .any(|value| value.starts_with(&format!("{name}=;"))
                    && value.contains("Domain=.example.com")));
            assert!(set_cookies
                .iter()
                .any(|value| value.starts_with(&format!("{name}=;"))
                    && value.contains("Domain=app.example.com")));
            assert!(set_cookies
                .iter()
                .any(|value| value.starts_with(&format!("{name}=;"))
                    && !value.contains("Domain=")));
        }

        assert!(set_cookies
            .iter()
            .all(|value| value.contains("Path=/") && value.contains("Secure")));
    }

    #[tokio::test]
    async fn logout_without_cookies_still_composes() {
        let app = Router::new()
            .route("/logout", get(logout))
            .layer(Extension(test_state(vec!["/".to_owned()])));

        let response = app
            .oneshot(
                http::Request::builder()
                    .uri("/logout")
                    .header(HOST, "localhost:8000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::RESET_CONTENT);
        assert!(response.headers().get_all(SET_COOKIE).iter().count() == 0);
        assert!(response.headers().contains_key(CACHE_CONTROL));
        // Plaintext transport, so no Clear-Site-Data.
        assert!(!response.headers().contains_key(&*headers::CLEAR_SITE_DATA));
    }
}
