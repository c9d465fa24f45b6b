//! Cookie access for the session token.
//!
//! `document.cookie` hands back one opaque header string; the parsing of
//! that string is a pure function here so it stays testable off-browser,
//! while the read/write entry points wrap `web_sys::HtmlDocument`.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Extracts the named cookie's value from a raw `document.cookie` string.
pub fn parse(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Reads a cookie by name.
pub fn get(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    parse(&header, name)
}

/// Sets a path-scoped, same-site cookie with the given lifetime in seconds.
pub fn set(name: &str, value: &str, max_age_secs: u32) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{name}={value}; path=/; max-age={max_age_secs}; samesite=lax"
        ));
    }
}

/// Deletes a cookie by expiring it immediately.
pub fn delete(name: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{name}=; path=/; max-age=0"));
    }
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parse_finds_the_named_cookie() {
        let header = "theme=dark; token=abc123; lang=en";
        assert_eq!(parse(header, "token").as_deref(), Some("abc123"));
    }

    #[test]
    fn parse_tolerates_missing_separator_whitespace() {
        assert_eq!(parse("token=t1", "token").as_deref(), Some("t1"));
        assert_eq!(parse("a=1;token=t1", "token").as_deref(), Some("t1"));
    }

    #[test]
    fn parse_misses_absent_cookies() {
        assert!(parse("theme=dark; lang=en", "token").is_none());
        assert!(parse("", "token").is_none());
    }

    #[test]
    fn parse_does_not_match_name_suffixes() {
        assert!(parse("mytoken=zzz", "token").is_none());
    }

    #[test]
    fn parse_keeps_values_containing_equals() {
        let header = "token=abc=def";
        assert_eq!(parse(header, "token").as_deref(), Some("abc=def"));
    }
}
