use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip inline HTML tags from heading content, leaving plain text
pub fn strip_tags(markup: &str) -> String {
    TAG_REGEX.replace_all(markup, "").trim().to_string()
}

/// Decode the two entities that matter for heading text.
///
/// Not a general entity decoder: everything except `&nbsp;` and `&amp;`
/// passes through untouched.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ").replace("&amp;", "&")
}
