//! Machines API - mock telemetry service for an industrial-machine dashboard
//!
//! The service exposes:
//! - a liveness probe (`GET /`)
//! - a static list of mock machine telemetry records (`GET /machines`)
//! - a stubbed question-answering endpoint (`POST /ask-ai`)
//!
//! There is no real inference or persistence behind any of this; the machine
//! list is a fixed in-memory fixture served through a repository seam so a
//! real data store can be wired in later without touching the routing layer.

pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod types;

pub use error::{Error, Result};
