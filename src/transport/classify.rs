//! Failure classification.
//!
//! A total mapping from transport outcome to error variant:
//!
//! | Outcome | Variant |
//! |---------|---------|
//! | connect/DNS/reset failure | [`Error::Connection`] |
//! | request could not be built | [`Error::Configuration`] |
//! | no response within timeout | [`Error::Timeout`] |
//! | HTTP 429 | [`Error::RateLimited`] (`Retry-After`, default 60s) |
//! | HTTP 402 | [`Error::BudgetExceeded`] (best-effort body fields) |
//! | HTTP 400 | [`Error::Validation`] (raw body) |
//! | other non-2xx | [`Error::Service`] |
//! | 2xx, undecodable body | [`Error::Decode`] |

use crate::error_code::ErrorKind;
use crate::{Error, ErrorContext};
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Applied when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest body prefix kept in [`Error::Decode`].
pub const BODY_EXCERPT_CHARS: usize = 512;

/// Classify a failure raised by the HTTP client before a status was available,
/// or while reading the body.
pub fn transport_error(url: &str, err: &reqwest::Error) -> Error {
    if err.is_builder() {
        return Error::configuration_with_context(
            format!("request could not be built: {}", error_chain(err)),
            ErrorContext::new()
                .with_details(url.to_string())
                .with_source("transport"),
        );
    }
    if err.is_timeout() {
        return Error::Timeout {
            url: url.to_string(),
        };
    }
    Error::Connection {
        url: url.to_string(),
        message: error_chain(err),
    }
}

/// Classify a non-2xx response.
pub fn status_error(status: u16, headers: &HeaderMap, body: String) -> Error {
    match ErrorKind::from_http_status(status) {
        ErrorKind::RateLimited => Error::RateLimited {
            retry_after: retry_after_secs(headers),
            message: body,
        },
        ErrorKind::BudgetExceeded => budget_exceeded(&body),
        ErrorKind::Validation => Error::Validation {
            field: "request".to_string(),
            message: body,
        },
        _ => Error::Service { status, body },
    }
}

/// Classify a 2xx body that failed to decode.
pub fn decode_error(err: &serde_json::Error, body: &str) -> Error {
    Error::Decode {
        message: err.to_string(),
        body: excerpt(body),
    }
}

/// Seconds form of `Retry-After`. HTTP-date values and garbage fall back to the default.
pub fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// 402 bodies are read for `agent_id`/`required`/`available`, at the top level or
/// under `error`. Anything the service did not send stays `None`.
fn budget_exceeded(body: &str) -> Error {
    let json: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let field = |name: &str| {
        let json = json.as_ref()?;
        json.get(name)
            .or_else(|| json.get("error").and_then(|e| e.get(name)))
            .cloned()
    };
    Error::BudgetExceeded {
        agent_id: field("agent_id").and_then(|v| v.as_str().map(str::to_string)),
        required: field("required").and_then(|v| v.as_f64()),
        available: field("available").and_then(|v| v.as_f64()),
    }
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub(crate) fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
