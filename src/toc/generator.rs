use log::debug;

use crate::config::LevelSet;
use crate::editor::no_toc::NO_TOC_CLASS;
use crate::editor::types::Edit;
use crate::headings::scanner;
use crate::headings::text::strip_tags;

/// Build a nested table-of-contents list from headings that carry an id.
///
/// Headings whose attributes contain the `no-toc` marker are invisible to
/// the algorithm: they neither appear in the output nor affect the nesting
/// of their neighbors. Nesting follows level transitions alone, so a level
/// gap opens or closes several list levels at once.
pub fn build_toc(source: &str, levels: &LevelSet) -> String {
    let mut toc = String::new();
    let mut last_level = 0usize;

    for heading in scanner::scan_with_ids(source, levels) {
        if heading.attributes.contains(NO_TOC_CLASS) {
            continue;
        }
        let Some(id) = heading.id.as_deref() else {
            continue;
        };
        let label = strip_tags(&heading.inner);

        // Adjust nesting
        while last_level > heading.level {
            last_level -= 1;
            toc.push_str(&indent(last_level));
            toc.push_str("</ul>\n");
        }
        while last_level < heading.level {
            toc.push_str(&indent(last_level));
            toc.push_str("<ul>\n");
            last_level += 1;
        }

        toc.push_str(&indent(last_level));
        toc.push_str(&format!("<li><a href=\"#{}\">{}</a></li>\n", id, label));
    }

    // Close any remaining open lists
    while last_level > 0 {
        last_level -= 1;
        toc.push_str(&indent(last_level));
        toc.push_str("</ul>\n");
    }

    toc
}

/// Wrap the generated list into an insertion at the cursor position.
///
/// Returns `None` when no qualifying heading survives filtering; inserting
/// never replaces existing content and does not deduplicate against a TOC
/// already present in the document.
pub fn insert_toc(source: &str, levels: &LevelSet, cursor: usize) -> Option<Edit> {
    let toc = build_toc(source, levels);
    if toc.is_empty() {
        debug!("No headings with ids to include in the TOC");
        return None;
    }
    Some(Edit::Insert {
        pos: cursor,
        text: toc,
    })
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
