//! Foreign investment eligibility and purchase cost engine for Australian residential
//! and commercial property.
//!
//! The [`calculator`] module holds the pure engine; `config`, `error`, and `telemetry`
//! carry the service plumbing shared with the API binary.

pub mod calculator;
pub mod config;
pub mod error;
pub mod telemetry;
