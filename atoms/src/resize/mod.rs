// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{RecordOutcome, ResizeConfig, ResizeError, ResizeSummary, STATUS_FINISHED};
pub use service::*;
