// src/indicator/mod.rs
mod indicator;
mod slot;

pub use indicator::StatusIndicator;
