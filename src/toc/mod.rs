mod generator;

pub use generator::{build_toc, insert_toc};
