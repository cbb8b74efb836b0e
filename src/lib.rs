pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod resource;

// Re-export commonly used types for easier access
pub use models::{Doctor, DoctorPayload};
