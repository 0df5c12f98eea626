//! Core data models for the match analytics engine.

mod confidence;
mod ids;
mod match_event;
mod prediction;
mod raw;
mod report;
mod season;
mod stats;

pub use confidence::*;
pub use ids::*;
pub use match_event::*;
pub use prediction::*;
pub use raw::*;
pub use report::*;
pub use season::*;
pub use stats::*;
