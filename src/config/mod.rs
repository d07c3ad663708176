mod defaults;
mod types;
mod validation;

pub use types::{LevelSet, TocSettings};
pub use validation::valid_levels;
