pub mod client;
pub mod csv;
pub mod yahoo;

pub use client::PriceClient;
pub use self::csv::clean_price_csv;
pub use yahoo::YahooClient;
