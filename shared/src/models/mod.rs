//! Domain models for the poultry batch tracker

mod batch;
mod deviation;
mod weighing;

pub use batch::*;
pub use deviation::*;
pub use weighing::*;
