pub mod error;
pub mod matrix;
pub mod metadata;

pub use error::*;
pub use matrix::*;
pub use metadata::*;
