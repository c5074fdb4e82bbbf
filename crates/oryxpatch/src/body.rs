//! Locating and replacing function bodies by name.
//!
//! A definition is recognized by the word-bounded shape `name(...) {` with a
//! parameter list that contains no closing parenthesis; the matching close
//! brace comes from the scanner. First match wins: the generated files this
//! crate targets never define a name twice, and duplicates are not
//! disambiguated.

use regex::Regex;

use crate::scanner::find_matching_brace;

/// Byte span of the body delimiters for the first definition of `name`:
/// the opening brace index and its matching close.
fn body_span(text: &str, name: &str) -> Option<(usize, usize)> {
    let signature = Regex::new(&format!(
        r"\b{}\s*\([^)]*\)\s*\{{",
        regex::escape(name)
    ))
    .ok()?;
    let m = signature.find(text)?;
    let open = m.start() + text[m.start()..].find('{')?;
    let close = find_matching_brace(text, open)?;
    Some((open, close))
}

/// Returns the body of the first definition of `name`, exclusive of both
/// braces. `None` when no definition is found or its braces do not match.
#[must_use]
pub fn function_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let (open, close) = body_span(text, name)?;
    Some(&text[open + 1..close])
}

/// Returns `text` with the body of the first definition of `name` replaced by
/// `new_body`, braces retained. `None` when the function is not found, in
/// which case callers keep their original text.
#[must_use]
pub fn replace_function_body(text: &str, name: &str, new_body: &str) -> Option<String> {
    let (open, close) = body_span(text, name)?;
    let mut out = String::with_capacity(text.len() + new_body.len());
    out.push_str(&text[..=open]);
    out.push_str(new_body);
    out.push_str(&text[close..]);
    Some(out)
}
