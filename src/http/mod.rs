//! HTTP request module
//!
//! Per-verb wrappers (GET/POST/PUT/PATCH/DELETE) that sign every request
//! and delegate transport concerns to `reqwest`.
//!
//! # Header contract
//!
//! - No overrides: requests carry the default signed bundle
//!   (`Prefer: transient`, `Content-Type: application/json`,
//!   `Authorization`, `cache-control: no-cache`).
//! - With overrides: the caller's headers replace all defaults, and a
//!   freshly computed `Authorization` is injected.

mod client;

pub use client::{HeaderOverrides, RestClient};
