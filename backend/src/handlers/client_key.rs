use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::AppState;

/// Best guess at who sent the request, used as the rate limit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl ClientKey {
    fn from_parts(parts: &Parts, trust_forwarded_for: bool) -> Self {
        if trust_forwarded_for {
            // first hop, as written by the fronting proxy
            let forwarded = parts
                .headers
                .get("x-forwarded-for")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());
            if let Some(addr) = forwarded {
                return ClientKey(addr);
            }
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        ClientKey(peer)
    }
}

impl FromRequestParts<Arc<AppState>> for ClientKey {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(ClientKey::from_parts(parts, state.trust_forwarded_for))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use pretty_assertions::assert_eq;

    fn parts(forwarded: Option<&str>, peer: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/forms/volunteer");
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        if let Some(addr) = peer {
            let addr: SocketAddr = addr.parse().unwrap();
            parts.extensions.insert(ConnectInfo(addr));
        }
        parts
    }

    #[test]
    fn test_forwarded_header_ignored_unless_trusted() {
        let parts = parts(Some("203.0.113.9, 10.0.0.1"), Some("192.0.2.7:5000"));
        assert_eq!(ClientKey::from_parts(&parts, false), ClientKey("192.0.2.7".to_string()));
        assert_eq!(ClientKey::from_parts(&parts, true), ClientKey("203.0.113.9".to_string()));
    }

    #[test]
    fn test_falls_back_to_peer_then_unknown() {
        let with_peer = parts(None, Some("192.0.2.7:5000"));
        assert_eq!(ClientKey::from_parts(&with_peer, true), ClientKey("192.0.2.7".to_string()));

        let bare = parts(Some(" "), None);
        assert_eq!(ClientKey::from_parts(&bare, true), ClientKey("unknown".to_string()));
    }
}
