pub mod matrix;
pub mod metadata;
pub mod utils;

pub use matrix::*;
pub use metadata::*;
pub use utils::*;
