// src/health/mod.rs
mod checker;
mod status;

pub use checker::{
    classify, is_truthy, HealthProbe, HealthReport, HealthSource, HttpHealthSource,
    OfflineReason, ProbeError, ProbeOutcome,
};
pub use status::Status;
