pub mod detector;

pub use detector::{AnomalyThresholds, detect};
