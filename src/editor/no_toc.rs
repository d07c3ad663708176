use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::config::LevelSet;
use crate::editor::types::Edit;
use crate::headings::scanner;

/// Marker class that excludes a heading from TOC output
pub const NO_TOC_CLASS: &str = "no-toc";

lazy_static! {
    static ref CLASS_ATTR: Regex = Regex::new(r#"class="([^"]*)""#).unwrap();
}

/// Add the `no-toc` marker class to every matched heading that lacks it.
///
/// Headings without a class attribute gain `class="no-toc"`; headings with
/// a double-quoted class list get the marker appended. Presence is checked
/// by substring containment, matching how the TOC build detects the marker,
/// and already-marked headings produce no edit, which makes the operation
/// idempotent.
pub fn mark_no_toc(source: &str, levels: &LevelSet) -> Vec<Edit> {
    let mut edits = Vec::new();

    for heading in scanner::scan(source, levels) {
        let attrs = &heading.attributes;

        let new_attrs = if !attrs.contains("class=") {
            format!("{} class=\"{}\"", attrs, NO_TOC_CLASS)
        } else if let Some(value) = CLASS_ATTR.captures(attrs).and_then(|cap| cap.get(1)) {
            if value.as_str().contains(NO_TOC_CLASS) {
                continue;
            }
            let mut appended = String::with_capacity(attrs.len() + NO_TOC_CLASS.len() + 1);
            appended.push_str(&attrs[..value.end()]);
            appended.push(' ');
            appended.push_str(NO_TOC_CLASS);
            appended.push_str(&attrs[value.end()..]);
            appended
        } else {
            warn!(
                "Skipping h{} with unparseable class attribute:{}",
                heading.level, attrs
            );
            continue;
        };

        let text = format!(
            "<h{level}{attrs}>{inner}</h{level}>",
            level = heading.level,
            attrs = new_attrs,
            inner = heading.inner,
        );
        edits.push(Edit::Replace {
            start: heading.start,
            end: heading.end,
            text,
        });
    }

    debug!("Marking {} headings with {}", edits.len(), NO_TOC_CLASS);
    edits
}
