//! # Matchday
//!
//! Match analytics and prediction scoring for sporting fixtures.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (events, predictions, seasons, reports)
//! - **normalize**: Raw provider records to typed match events
//! - **calculate**: Form, goal statistics, prediction scoring, head-to-head
//! - **analyze**: Per-fixture report assembly
//! - **ingest**: Loading already-fetched provider payloads
//! - **config**: Configuration loading and validation

pub mod analyze;
pub mod calculate;
pub mod config;
pub mod ingest;
pub mod models;
pub mod normalize;

pub use models::*;
