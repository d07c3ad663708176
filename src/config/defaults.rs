/// Heading levels processed when the setting is absent
pub fn default_heading_levels() -> Vec<String> {
    vec!["1".to_string(), "2".to_string()]
}
