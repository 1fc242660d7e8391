use async_trait::async_trait;

use crate::core::error::PriceError;
use crate::core::types::{Interval, Period, PriceSeries};

/// Remote source of historical closing prices. The one genuine I/O boundary
/// on the price side; implementations block on a single fetch with no retry
/// policy of their own.
#[async_trait]
pub trait PriceClient: Send + Sync + 'static {
    async fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<PriceSeries, PriceError>;
}
