//! Shared types and weighing-schedule engine for the poultry batch tracker
//!
//! This crate contains the pure domain core used by the application service,
//! the browser front-end (via WASM), and other components of the system.
//! Nothing in here performs I/O or holds mutable state.

pub mod calendar;
pub mod curve;
pub mod models;
pub mod schedule;
pub mod types;
pub mod validation;

pub use calendar::*;
pub use curve::*;
pub use models::*;
pub use schedule::*;
pub use types::*;
pub use validation::*;
