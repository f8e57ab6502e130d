pub mod metrics;
pub mod pdf;
pub mod plan;
