// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{OutputFormat, TargetSize};
pub use service::*;
