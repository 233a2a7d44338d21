//! HTTP client for the external content-insight API.
//!
//! Implements the engine's [`cscore_engine::insight::InsightProvider`]
//! contract over a JSON REST surface, plus an always-off provider for
//! offline runs. Request/response contract only -- no analysis happens here.

pub mod client;
pub mod error;
pub mod provider;

pub use client::InsightClient;
pub use error::InsightError;
pub use provider::UnavailableProvider;
