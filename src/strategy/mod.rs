pub mod decision;

pub use decision::decide;
