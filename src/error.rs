use crate::error_code::ErrorKind;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for construction-time failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "base_url", "AIMESH_TIMEOUT_SECS")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "builder", "env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the AiMesh client.
///
/// Every failed call resolves to exactly one variant. Transport and HTTP status
/// outcomes are classified once in [`crate::transport::classify`].
#[derive(Debug, Error)]
pub enum Error {
    /// The service could not be reached (DNS, refused connection, reset).
    #[error("Failed to connect to {url}: {message}")]
    Connection { url: String, message: String },

    /// No response arrived within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The caller cancelled the in-flight request.
    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },

    /// HTTP 429. `retry_after` is in seconds.
    #[error("Rate limit exceeded (retry after {retry_after}s): {message}")]
    RateLimited { retry_after: u64, message: String },

    /// HTTP 402. Fields the service did not report stay `None`.
    #[error(
        "Budget exceeded for agent {}: required {}, available {}",
        display_or_unknown(.agent_id),
        display_or_unknown(.required),
        display_or_unknown(.available)
    )]
    BudgetExceeded {
        agent_id: Option<String>,
        required: Option<f64>,
        available: Option<f64>,
    },

    /// HTTP 400, or a local wire-model decode failure.
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// A 2xx response whose body could not be decoded.
    #[error("Failed to decode response: {message} (body: {body})")]
    Decode { message: String, body: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn display_or_unknown<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "unknown".to_string(),
    }
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Map a serde failure while decoding a wire entity locally.
    pub(crate) fn from_wire(entity: &str, err: serde_json::Error) -> Self {
        Error::Validation {
            field: entity.to_string(),
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection { .. } => ErrorKind::Connection,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::Cancelled { .. } => ErrorKind::Cancelled,
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::BudgetExceeded { .. } => ErrorKind::BudgetExceeded,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Service { .. } => ErrorKind::Service,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Whether resending the same request may succeed.
    ///
    /// Service failures are retryable only for 5xx statuses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service { status, .. } => (500..=599).contains(status),
            other => other.kind().retryable(),
        }
    }

    /// The wait requested by the service, only known for rate-limit failures.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited { retry_after, .. } => Some(Duration::from_secs(*retry_after)),
            _ => None,
        }
    }

    /// HTTP status behind this error, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::RateLimited { .. } => Some(429),
            Error::BudgetExceeded { .. } => Some(402),
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
