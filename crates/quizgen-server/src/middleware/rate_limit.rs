//! Per-IP request limiting for uploads.
//!
//! Each client IP gets a fixed window that opens on its first request and
//! admits at most `max` requests until `window` has elapsed. Counters live
//! in process memory: several server instances do not share them.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tokio::sync::Mutex;
use tokio::time::Instant;

pub const DEFAULT_MAX_REQUESTS: u32 = 10;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);
pub const LIMIT_MESSAGE: &str = "Too many upload requests from this IP, please try again later.";

/// Expired windows are swept once the table grows past this many IPs.
const PRUNE_THRESHOLD: usize = 1024;

const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RATELIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    hits: u32,
}

/// Result of counting one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: u32, reset: Duration },
    Limited { reset: Duration },
}

/// Process-scoped request counters keyed by client IP.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<IpAddr, Window>>>,
    max: u32,
    window: Duration,
    trust_proxy: bool,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            max,
            window,
            trust_proxy: false,
        }
    }

    /// Take the client IP from the first `X-Forwarded-For` entry when present.
    pub fn trust_proxy(mut self, trust: bool) -> Self {
        self.trust_proxy = trust;
        self
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Count one request from `ip`.
    pub async fn check(&self, ip: IpAddr) -> Decision {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if windows.len() >= PRUNE_THRESHOLD {
            windows.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let entry = windows.entry(ip).or_insert(Window {
            started: now,
            hits: 0,
        });
        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                hits: 0,
            };
        }

        let reset = self.window.saturating_sub(now.duration_since(entry.started));

        if entry.hits >= self.max {
            return Decision::Limited { reset };
        }

        entry.hits += 1;
        Decision::Allowed {
            remaining: self.max - entry.hits,
            reset,
        }
    }

    fn client_ip(&self, req: &Request) -> IpAddr {
        if self.trust_proxy
            && let Some(ip) = req
                .headers()
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .and_then(|v| v.trim().parse().ok())
        {
            return ip;
        }

        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }
}

fn reset_secs(reset: Duration) -> u64 {
    reset.as_secs() + u64::from(reset.subsec_nanos() > 0)
}

fn insert_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset: Duration) {
    headers.insert(RATELIMIT_LIMIT, HeaderValue::from(limit));
    headers.insert(RATELIMIT_REMAINING, HeaderValue::from(remaining));
    headers.insert(RATELIMIT_RESET, HeaderValue::from(reset_secs(reset)));
}

/// Rate limiting middleware.
///
/// Rejected requests get `429` with `{"error": LIMIT_MESSAGE}` and never
/// reach the handler.
pub async fn enforce(State(limiter): State<RateLimiter>, req: Request, next: Next) -> Response {
    let ip = limiter.client_ip(&req);

    match limiter.check(ip).await {
        Decision::Allowed { remaining, reset } => {
            let mut response = next.run(req).await;
            insert_headers(response.headers_mut(), limiter.max, remaining, reset);
            response
        }
        Decision::Limited { reset } => {
            tracing::warn!(ip = %ip, "upload rate limit exceeded");

            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": LIMIT_MESSAGE })),
            )
                .into_response();
            let headers = response.headers_mut();
            insert_headers(headers, limiter.max, 0, reset);
            headers.insert(RETRY_AFTER, HeaderValue::from(reset_secs(reset)));
            response
        }
    }
}
