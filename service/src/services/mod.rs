//! Business logic services for the poultry weighing tracker

pub mod batch;
pub mod reporting;
pub mod weighing;

pub use batch::BatchService;
pub use reporting::ReportingService;
pub use weighing::WeighingService;
