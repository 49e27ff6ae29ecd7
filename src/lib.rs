//! crpt-client - Rate-Limited CRPT Document Submission Client
//!
//! This crate implements a client for the CRPT goods marking API that
//! submits "introduce goods" documents over HTTPS. Every submission passes
//! through a shared, thread-safe window rate limiter so the client never
//! exceeds the request quota configured for it.

pub mod api;
pub mod config;
pub mod error;
pub mod ratelimit;

pub use api::{CrptClient, Document};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use ratelimit::{TimeUnit, WindowRateLimiter};
