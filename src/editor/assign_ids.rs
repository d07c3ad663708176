use log::debug;

use crate::config::LevelSet;
use crate::editor::types::Edit;
use crate::headings::scanner;
use crate::headings::slug::SlugTracker;
use crate::headings::text::strip_tags;
use crate::utils::error::RustocError;

/// Assign generated `id="..."` attributes to headings lacking one.
///
/// Headings that already declare an id keep it untouched; only id-less
/// headings produce a replacement. The returned edits carry offsets into
/// the unmodified source and must be applied from the last one back to the
/// first (see [`apply_edits`](crate::editor::apply_edits)).
///
/// An empty edit list means every matched heading already had an id. A
/// level set that was configured but validated down to nothing is reported
/// as [`RustocError::NoHeadingsConfigured`].
pub fn assign_ids(source: &str, levels: &LevelSet) -> Result<Vec<Edit>, RustocError> {
    if levels.is_empty() {
        if levels.was_configured() {
            return Err(RustocError::NoHeadingsConfigured);
        }
        return Ok(Vec::new());
    }

    let mut slugs = SlugTracker::new();
    let mut edits = Vec::new();

    for heading in scanner::scan(source, levels) {
        // Existing ids always win; detection is a plain substring check
        if heading.attributes.contains("id=") {
            continue;
        }

        let slug = slugs.generate(&strip_tags(&heading.inner));
        let text = format!(
            "<h{level}{attrs} id=\"{slug}\">{inner}</h{level}>",
            level = heading.level,
            attrs = heading.attributes,
            slug = slug,
            inner = heading.inner,
        );
        edits.push(Edit::Replace {
            start: heading.start,
            end: heading.end,
            text,
        });
    }

    debug!("Assigning ids to {} headings", edits.len());
    Ok(edits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::apply::apply_edits;

    fn levels(set: &[usize]) -> LevelSet {
        LevelSet::from_levels(set)
    }

    #[test]
    fn test_assigns_id_to_bare_heading() {
        let edits = assign_ids("<h2>Intro</h2>", &levels(&[2])).unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(
            edits[0],
            Edit::Replace {
                start: 0,
                end: 14,
                text: "<h2 id=\"intro\">Intro</h2>".to_string(),
            }
        );
    }

    #[test]
    fn test_appends_to_existing_attributes() {
        let edits = assign_ids("<h2 class=\"x\">T</h2>", &levels(&[2])).unwrap();
        match &edits[0] {
            Edit::Replace { text, .. } => {
                assert_eq!(text, "<h2 class=\"x\" id=\"t\">T</h2>");
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_existing_id_wins() {
        let source = "<h2 id=\"kept\">A</h2><h2>B</h2>";
        let edits = assign_ids(source, &levels(&[2])).unwrap();
        assert_eq!(edits.len(), 1);
        match &edits[0] {
            Edit::Replace { text, .. } => assert_eq!(text, "<h2 id=\"b\">B</h2>"),
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_all_headings_have_ids_is_noop() {
        let source = "<h1 id=\"a\">A</h1><h2 id=\"b\">B</h2>";
        assert!(assign_ids(source, &levels(&[1, 2])).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        let source = "<h2>Intro</h2><h2>Intro</h2>";
        let edits = assign_ids(source, &levels(&[2])).unwrap();
        let texts: Vec<_> = edits
            .iter()
            .map(|e| match e {
                Edit::Replace { text, .. } => text.clone(),
                other => panic!("unexpected edit: {:?}", other),
            })
            .collect();
        assert!(texts[0].contains("id=\"intro\""));
        assert!(texts[1].contains("id=\"intro-1\""));
    }

    #[test]
    fn test_inline_tags_stripped_for_slug() {
        let edits = assign_ids("<h2>Big <em>News</em></h2>", &levels(&[2])).unwrap();
        match &edits[0] {
            Edit::Replace { text, .. } => {
                assert!(text.contains("id=\"big-news\""));
                assert!(text.contains(">Big <em>News</em></h2>"));
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_entity_decoding_in_slug() {
        let edits = assign_ids("<h2>Hello &amp; Welcome</h2>", &levels(&[2])).unwrap();
        match &edits[0] {
            Edit::Replace { text, .. } => {
                assert!(text.contains("id=\"hello-welcome\""));
                assert!(text.ends_with(">Hello &amp; Welcome</h2>"));
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_configured_but_invalid_levels() {
        let set = LevelSet::from_raw(&["9".to_string()]);
        match assign_ids("<h2>T</h2>", &set) {
            Err(RustocError::NoHeadingsConfigured) => {}
            other => panic!("expected NoHeadingsConfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_unconfigured_levels_is_noop() {
        let set = LevelSet::from_raw(&[]);
        assert!(assign_ids("<h2>T</h2>", &set).unwrap().is_empty());
    }

    #[test]
    fn test_second_run_is_noop() {
        let source = "<h1>One</h1><p>x</p><h2>Two</h2><h2>Two</h2>";
        let set = levels(&[1, 2]);
        let edits = assign_ids(source, &set).unwrap();
        let updated = apply_edits(source, &edits).unwrap();
        assert!(assign_ids(&updated, &set).unwrap().is_empty());
    }
}
