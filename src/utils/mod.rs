pub mod error;

pub use error::RustocError;
