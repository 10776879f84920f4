//! Same-origin guard for the state-changing routes.
//!
//! Browsers attach `Sec-Fetch-Site` and/or `Origin` to form posts. A request
//! that declares itself cross-site, or whose origin does not match the host it
//! was sent to, is refused before any storage call is made. Requests carrying
//! neither header (curl, tests) pass.

use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::warn;

/// Extractor that only succeeds for same-origin requests.
#[derive(Debug, Clone, Copy)]
pub struct SameOrigin;

impl<S> FromRequestParts<S> for SameOrigin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()));

        if is_same_origin(&parts.headers, host) {
            Ok(SameOrigin)
        } else {
            warn!(
                origin = ?parts.headers.get(header::ORIGIN),
                host = ?host,
                "rejected cross-origin mutation"
            );
            Err(AppError::forbidden("cross-origin request rejected"))
        }
    }
}

fn is_same_origin(headers: &HeaderMap, host: Option<&str>) -> bool {
    let cross_site = headers
        .get("sec-fetch-site")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("cross-site"));
    if cross_site {
        return false;
    }

    let Some(origin) = headers.get(header::ORIGIN) else {
        return true;
    };
    let Some((scheme, authority)) = origin.to_str().ok().and_then(|o| o.split_once("://")) else {
        return false;
    };
    let Some(host) = host else {
        return false;
    };

    let default_port = match scheme.to_ascii_lowercase().as_str() {
        "http" => Some("80"),
        "https" => Some("443"),
        _ => None,
    };
    let origin_authority = strip_default_port(authority.trim_end_matches('/'), default_port);
    let host_authority = strip_default_port(host, default_port);

    origin_authority.eq_ignore_ascii_case(host_authority)
}

/// `host:80` and `host` name the same http origin.
fn strip_default_port<'a>(authority: &'a str, default_port: Option<&str>) -> &'a str {
    match (authority.rsplit_once(':'), default_port) {
        (Some((host, port)), Some(default)) if port == default => host,
        _ => authority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn no_browser_headers_is_allowed() {
        assert!(is_same_origin(&HeaderMap::new(), None));
    }

    #[test]
    fn matching_origin_is_allowed() {
        let h = headers(&[("origin", "http://browser.local:8080")]);
        assert!(is_same_origin(&h, Some("browser.local:8080")));
    }

    #[test]
    fn default_port_is_normalized() {
        let h = headers(&[("origin", "http://browser.local")]);
        assert!(is_same_origin(&h, Some("browser.local:80")));

        let h = headers(&[("origin", "https://browser.local:443")]);
        assert!(is_same_origin(&h, Some("browser.local")));

        let h = headers(&[("origin", "https://browser.local")]);
        assert!(!is_same_origin(&h, Some("browser.local:80")));
    }

    #[test]
    fn foreign_or_null_origin_is_rejected() {
        let h = headers(&[("origin", "https://evil.example")]);
        assert!(!is_same_origin(&h, Some("browser.local")));

        let h = headers(&[("origin", "null")]);
        assert!(!is_same_origin(&h, Some("browser.local")));
    }

    #[test]
    fn cross_site_fetch_metadata_is_rejected() {
        let h = headers(&[("sec-fetch-site", "cross-site")]);
        assert!(!is_same_origin(&h, None));

        let h = headers(&[("sec-fetch-site", "same-origin")]);
        assert!(is_same_origin(&h, None));
    }
}
