use log::warn;

/// Filter a raw heading-level list down to valid levels (1-6).
///
/// Entries that do not parse to an integer in range are dropped with a
/// warning; duplicates are dropped silently. Order is preserved.
pub fn valid_levels(raw: &[String]) -> Vec<usize> {
    let mut levels = Vec::new();

    for entry in raw {
        match entry.trim().parse::<usize>() {
            Ok(level) if (1..=6).contains(&level) => {
                if !levels.contains(&level) {
                    levels.push(level);
                }
            }
            _ => warn!("Ignoring invalid heading level in settings: {:?}", entry),
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_levels() {
        assert_eq!(valid_levels(&raw(&["1", "2", "3"])), vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_entries_dropped() {
        assert_eq!(valid_levels(&raw(&["2", "x", "2", "9", ""])), vec![2]);
    }

    #[test]
    fn test_all_invalid() {
        assert!(valid_levels(&raw(&["0", "7", "h2"])).is_empty());
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(valid_levels(&raw(&[" 3 "])), vec![3]);
    }
}
