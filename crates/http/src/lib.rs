//! Optimach HTTP client
//!
//! Authenticated access to the Optimach backend: a reqwest-based
//! client that keeps the bearer token fresh behind the caller's back
//! (single-flight refresh on 401), typed wrappers for every endpoint
//! the application consumes, and the session guard that gates
//! protected views.

pub mod client;
pub mod guard;
pub mod navigator;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use guard::{GuardState, SessionGuard};
pub use navigator::{Navigator, RedirectTarget};
