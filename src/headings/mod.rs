pub mod scanner;
pub mod slug;
pub mod text;
pub mod types;

pub use scanner::{scan, scan_with_ids};
pub use slug::SlugTracker;
pub use text::{decode_entities, strip_tags};
pub use types::HeadingMatch;
