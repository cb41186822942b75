use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered table of sensitive-data detectors, evaluated first-match-wins.
/// Any match flags the cookie; the label is for logging and tests.
///
/// Patterns are ASCII byte classes over RFC 6265 cookie values; no locale
/// folding or Unicode classes are involved.
pub static SENSITIVE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "credit-card",
            // 16 digits grouped by 4, separators optional.
            Regex::new(r"\b\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}\b").expect("card pattern"),
        ),
        (
            "ssn",
            Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("ssn pattern"),
        ),
        (
            "email",
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern"),
        ),
        (
            "ipv4",
            Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("ipv4 pattern"),
        ),
    ]
});

/// Whether a cookie value matches any sensitive-data pattern.
pub fn contains_sensitive_data(value: &str) -> bool {
    matched_pattern(value).is_some()
}

/// The label of the first matching pattern, if any.
pub fn matched_pattern(value: &str) -> Option<&'static str> {
    SENSITIVE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(value))
        .map(|(label, _)| *label)
}
