use axum::extract::ConnectInfo;
use axum::http::{header, Request};
use serde::Serialize;
use std::net::SocketAddr;

pub const FALLBACK_CLIENT_IP: &str = "127.0.0.1";
pub const FALLBACK_USER_AGENT: &str = "Unknown";

/// Who asked, and for what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestDescriptor {
    /// The peer address comes from `ConnectInfo`, present when the server
    /// is started with `into_make_service_with_connect_info`.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let client_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| FALLBACK_CLIENT_IP.to_string());

        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_USER_AGENT)
            .to_string();

        Self {
            client_ip,
            user_agent,
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        }
    }
}
