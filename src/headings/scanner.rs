use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::LevelSet;
use crate::headings::types::HeadingMatch;

lazy_static! {
    // One pattern per heading level: the regex crate has no backreferences,
    // so the closing tag level is baked into each pattern.
    static ref OPEN_PATTERNS: Vec<Regex> = build_patterns(false);
    static ref ID_PATTERNS: Vec<Regex> = build_patterns(true);
}

fn build_patterns(ids_only: bool) -> Vec<Regex> {
    (1..=6usize)
        .map(|level| {
            let pattern = if ids_only {
                format!(r#"(?is)<h{level}([^>]*?id="([^"]*)"[^>]*)>(.*?)</h{level}>"#)
            } else {
                format!(r"(?is)<h{level}([^>]*)>(.*?)</h{level}>")
            };
            Regex::new(&pattern).unwrap()
        })
        .collect()
}

/// Locate every heading of an allowed level, in document order.
///
/// Tag names match case-insensitively and content is captured non-greedily,
/// so the first closing tag of the same level terminates a match. Same-level
/// nested headings are not handled. An empty level set yields no matches.
pub fn scan(source: &str, levels: &LevelSet) -> Vec<HeadingMatch> {
    scan_inner(source, levels, false)
}

/// Locate only headings whose opening tag carries an `id="..."` attribute,
/// capturing the identifier value into the match.
pub fn scan_with_ids(source: &str, levels: &LevelSet) -> Vec<HeadingMatch> {
    scan_inner(source, levels, true)
}

fn scan_inner(source: &str, levels: &LevelSet, ids_only: bool) -> Vec<HeadingMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    // Single pass over the source: take the earliest match across all
    // allowed levels, then continue past it. Matches never overlap.
    while pos < source.len() {
        let mut earliest: Option<HeadingMatch> = None;

        for &level in levels.levels() {
            let pattern = if ids_only {
                &ID_PATTERNS[level - 1]
            } else {
                &OPEN_PATTERNS[level - 1]
            };
            let Some(cap) = pattern.captures_at(source, pos) else {
                continue;
            };
            let Some(full) = cap.get(0) else { continue };
            if earliest.as_ref().map_or(true, |m| full.start() < m.start) {
                earliest = Some(if ids_only {
                    HeadingMatch {
                        level,
                        attributes: cap[1].to_string(),
                        id: Some(cap[2].to_string()),
                        inner: cap[3].to_string(),
                        start: full.start(),
                        end: full.end(),
                    }
                } else {
                    HeadingMatch {
                        level,
                        attributes: cap[1].to_string(),
                        id: None,
                        inner: cap[2].to_string(),
                        start: full.start(),
                        end: full.end(),
                    }
                });
            }
        }

        match earliest {
            Some(m) => {
                pos = m.end;
                matches.push(m);
            }
            None => break,
        }
    }

    debug!("Found {} matching headings", matches.len());
    matches
}
