// src/lib.rs
pub mod config;
pub mod health;
pub mod indicator;
pub mod metrics;
pub mod site;

pub use health::Status;
pub use indicator::StatusIndicator;
