use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::headings::text::decode_entities;

/// Maximum length of a base slug, before any uniqueness suffix
const MAX_SLUG_LEN: usize = 15;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_SLUG_CHAR: Regex = Regex::new(r"[^\w-]").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Issues unique, URL-safe identifiers for one assignment run.
///
/// Uniqueness is tracked only across the slugs issued through a single
/// tracker; callers create a fresh one per run.
#[derive(Debug, Default)]
pub struct SlugTracker {
    issued: HashSet<String>,
}

impl SlugTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a slug for the given heading text, unique within this run.
    ///
    /// When the normalized base is already taken, `-1`, `-2`, … suffixes
    /// are tried in order. Text that normalizes to the empty string is
    /// tracked and disambiguated like any other base.
    pub fn generate(&mut self, text: &str) -> String {
        let base = base_slug(text);

        let slug = if self.issued.contains(&base) {
            let mut n = 1usize;
            loop {
                let candidate = format!("{}-{}", base, n);
                if !self.issued.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            }
        } else {
            base
        };

        self.issued.insert(slug.clone());
        slug
    }
}

/// Normalize heading text into a length-bounded base slug
fn base_slug(text: &str) -> String {
    let text = decode_entities(text).to_lowercase();
    let text = WHITESPACE_RUN.replace_all(text.trim(), "-");
    let text = NON_SLUG_CHAR.replace_all(&text, "");
    let text = HYPHEN_RUN.replace_all(&text, "-");
    let text = text.trim_matches('-');

    let truncated: String = text.chars().take(MAX_SLUG_LEN).collect();
    truncated.trim_end_matches('-').to_string()
}
