use crate::editor::types::Edit;
use crate::utils::error::RustocError;

/// Apply a batch of edits against the text they were computed from.
///
/// Replacements are applied from the last one back to the first so the
/// recorded offsets stay valid throughout the pass. The whole batch is
/// validated up front: an edit that is out of bounds, straddles a character
/// boundary, or overlaps another edit rejects the batch before any change
/// is made.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, RustocError> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|e| e.range());

    let mut prev_end = 0usize;
    for edit in &ordered {
        let (start, end) = edit.range();
        if start > end || end > source.len() {
            return Err(RustocError::Apply(format!(
                "edit range {}..{} is out of bounds",
                start, end
            )));
        }
        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(RustocError::Apply(format!(
                "edit range {}..{} is not on a character boundary",
                start, end
            )));
        }
        if start < prev_end {
            return Err(RustocError::Apply(format!(
                "edit at offset {} overlaps the previous edit",
                start
            )));
        }
        prev_end = end;
    }

    let mut result = source.to_string();
    for edit in ordered.iter().rev() {
        match edit {
            Edit::Replace { start, end, text } => result.replace_range(*start..*end, text),
            Edit::Insert { pos, text } => result.insert_str(*pos, text),
        }
    }

    Ok(result)
}
