pub mod ranker;

pub use ranker::{RankerConfig, rank};
