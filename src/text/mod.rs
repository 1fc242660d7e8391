pub mod sentences;
pub mod tokenization;
