pub mod lexicon;
pub mod scorer;

pub use scorer::{compound, rolling};
