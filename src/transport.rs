//! HTTP transport: one request/response exchange per call, with every failure
//! classified into exactly one [`crate::Error`] at this boundary.

pub mod classify;
mod http;

pub use http::HttpTransport;
