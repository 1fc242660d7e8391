pub mod drift;

pub use drift::{ForecastModel, forecast, growth_percent};
