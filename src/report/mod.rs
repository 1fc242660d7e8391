pub mod artifact;

pub use artifact::ForecastArtifact;
