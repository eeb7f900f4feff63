use axum::{middleware::Next, response::Response};
use http::{
    header::{CACHE_CONTROL, EXPIRES, PRAGMA, REFERRER_POLICY},
    HeaderMap, HeaderName, HeaderValue, Request,
};
use once_cell::sync::Lazy;

/// Anti-cache bundle: no cache tier, shared or private, may store or serve a
/// stale copy of anything we send.
pub const NO_STORE_HEADERS: [(HeaderName, &str); 4] = [
    (
        CACHE_CONTROL,
        "no-store, no-cache, must-revalidate, proxy-revalidate, max-age=0, private",
    ),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
    (REFERRER_POLICY, "no-referrer"),
];

pub static CLEAR_SITE_DATA: Lazy<HeaderName> =
    Lazy::new(|| HeaderName::from_static("clear-site-data"));

/// Purges cache, cookies, and site storage for the current origin. The only
/// path- and domain-agnostic deletion mechanism there is, and browsers only
/// honor it over https.
pub const CLEAR_SITE_DATA_VALUE: &str = r#""cache","cookies","storage""#;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Whether the client reached us over https, going by the reverse proxy's
/// `X-Forwarded-Proto`. We terminate plaintext HTTP ourselves, so with no
/// proxy header the answer is no.
pub fn is_secure_transport(headers: &HeaderMap) -> bool {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .map(|scheme| scheme.trim() == "https")
        .unwrap_or(false)
}

/// Overwrites the anti-cache bundle onto `headers`, whatever was there.
pub fn force_no_store(headers: &mut HeaderMap) {
    for (name, value) in NO_STORE_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

/// Middleware applying the anti-cache bundle to every response in the
/// process, set-if-absent so a handler can still say something stronger.
pub async fn no_store_defaults<B>(request: Request<B>, next: Next<B>) -> Response {
    let mut response = next.run(request).await;

    for (name, value) in NO_STORE_HEADERS {
        if !response.headers().contains_key(&name) {
            response
                .headers_mut()
                .insert(name, HeaderValue::from_static(value));
        }
    }

    response
}
