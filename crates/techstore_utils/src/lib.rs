pub mod color;
pub mod utils;

pub use utils::*;
