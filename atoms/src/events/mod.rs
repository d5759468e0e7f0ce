// Re-export model types
pub mod model;

pub use model::{NotificationEvent, NotificationRecord};
