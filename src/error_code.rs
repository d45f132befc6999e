//! 错误分类：AiMesh 客户端的封闭错误类别及其重试语义。
//!
//! Error kinds for the AiMesh client.
//!
//! Each [`crate::Error`] variant maps to exactly one [`ErrorKind`]. The kind carries
//! the stable name and default retry semantics callers use to drive their own
//! backoff policy; the client itself never retries.
//!
//! | Kind            | Name               | Retryable |
//! |-----------------|--------------------|-----------|
//! | Connection      | `connection`       | yes       |
//! | Timeout         | `timeout`          | yes       |
//! | Cancelled       | `cancelled`        | no        |
//! | RateLimited     | `rate_limited`     | yes       |
//! | BudgetExceeded  | `budget_exceeded`  | no        |
//! | Validation      | `validation`       | no        |
//! | Service         | `service`          | per status|
//! | Decode          | `decode`           | no        |
//! | Configuration   | `configuration`    | no        |
//!
//! ## Example
//!
//! ```rust
//! use aimesh_client::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(429);
//! assert_eq!(kind.name(), "rate_limited");
//! assert!(kind.retryable());
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network unreachable, DNS failure or refused connection
    Connection,
    /// No response within the configured timeout
    Timeout,
    /// Request aborted by the caller
    Cancelled,
    /// HTTP 429
    RateLimited,
    /// HTTP 402
    BudgetExceeded,
    /// HTTP 400 or a local decode failure
    Validation,
    /// Any other non-2xx status
    Service,
    /// 2xx with an undecodable body
    Decode,
    /// Client construction failed
    Configuration,
}

impl ErrorKind {
    /// Returns the stable name (e.g., `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::RateLimited => "rate_limited",
            Self::BudgetExceeded => "budget_exceeded",
            Self::Validation => "validation",
            Self::Service => "service",
            Self::Decode => "decode",
            Self::Configuration => "configuration",
        }
    }

    /// Returns whether this kind is retryable by default.
    ///
    /// `Service` reports `false` here; [`crate::Error::is_retryable`] refines it by status.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Connection | Self::Timeout | Self::RateLimited)
    }

    /// Maps a non-2xx HTTP status code to the kind the classifier produces for it.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            402 => Self::BudgetExceeded,
            429 => Self::RateLimited,
            _ => Self::Service,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
