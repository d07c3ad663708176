pub mod apply;
pub mod assign_ids;
pub mod no_toc;
pub mod types;

pub use apply::apply_edits;
pub use assign_ids::assign_ids;
pub use no_toc::{mark_no_toc, NO_TOC_CLASS};
pub use types::Edit;
