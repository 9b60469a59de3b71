//! Query-string helpers with `URLSearchParams`-compatible get/set semantics.

use std::borrow::Cow;

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter(|segment| !segment.is_empty())
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

fn split_pair(segment: &str) -> (&str, &str) {
    segment.split_once('=').unwrap_or((segment, ""))
}

/// Reads the decoded value of the first `name` parameter in `search`.
///
/// The leading `?` is optional. A parameter present without `=` reads as an empty string.
pub fn read_query_param(search: &str, name: &str) -> Option<String> {
    pairs(search).find_map(|segment| {
        let (key, value) = split_pair(segment);
        (decode_component(key) == name).then(|| decode_component(value))
    })
}

/// Returns `search` with `name` set to `value`.
///
/// The first occurrence is replaced in place, later duplicates are dropped, and the parameter is
/// appended when absent. Unrelated parameters keep their original encoding and order.
pub fn replace_query_param(search: &str, name: &str, value: &str) -> String {
    let encoded = format!(
        "{}={}",
        urlencoding::encode(name),
        urlencoding::encode(value)
    );
    let mut replaced = false;
    let mut out = Vec::new();
    for segment in pairs(search) {
        let (key, _) = split_pair(segment);
        if decode_component(key) != name {
            out.push(segment.to_string());
        } else if !replaced {
            out.push(encoded.clone());
            replaced = true;
        }
    }
    if !replaced {
        out.push(encoded);
    }
    format!("?{}", out.join("&"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn read_finds_first_occurrence_and_decodes() {
        assert_eq!(
            read_query_param("?tab=a&tab=b", "tab"),
            Some("a".to_string())
        );
        assert_eq!(
            read_query_param("view=grid&q=hello+world%21", "q"),
            Some("hello world!".to_string())
        );
        assert_eq!(read_query_param("?flag&x=1", "flag"), Some(String::new()));
        assert_eq!(read_query_param("", "tab"), None);
        assert_eq!(read_query_param("?other=1", "tab"), None);
    }

    #[test]
    fn replace_updates_in_place_and_keeps_neighbors() {
        assert_eq!(
            replace_query_param("?page=2&tab=a&sort=asc", "tab", "b"),
            "?page=2&tab=b&sort=asc"
        );
    }

    #[test]
    fn replace_drops_duplicates_and_appends_when_missing() {
        assert_eq!(replace_query_param("?tab=a&x=1&tab=c", "tab", "b"), "?tab=b&x=1");
        assert_eq!(replace_query_param("", "tab", "b"), "?tab=b");
        assert_eq!(replace_query_param("?x=1", "tab", "b"), "?x=1&tab=b");
    }

    #[test]
    fn replace_encodes_reserved_characters() {
        let search = replace_query_param("", "tab", "a&b c");
        assert_eq!(search, "?tab=a%26b%20c");
        assert_eq!(read_query_param(&search, "tab"), Some("a&b c".to_string()));
    }
}
