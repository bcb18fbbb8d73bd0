pub mod model;
pub mod types;

pub use model::*;
pub use types::*;
