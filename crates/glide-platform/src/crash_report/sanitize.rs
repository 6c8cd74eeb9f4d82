use std::sync::OnceLock;

use regex::Regex;

const REDACTED: &str = "[REDACTED]";

fn patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // user:password@ in URLs
            (r"(?P<scheme>[a-z][a-z0-9+.\-]*://)[^/\s:@]+:[^/\s@]+@", "${scheme}[REDACTED]@"),
            // query strings and fragments carry session ids and tokens
            (r"(?P<path>[a-z][a-z0-9+.\-]*://[^\s?#]*)[?#][^\s'\x22]*", "${path}?[REDACTED]"),
            (r"Bearer [A-Za-z0-9._\-]+", REDACTED),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
        .collect()
    })
}

/// Redacts browsing data that may identify a user from crash text:
/// URL credentials, query strings, fragments, and bearer tokens.
pub fn sanitize_urls(input: &str) -> String {
    patterns()
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}
