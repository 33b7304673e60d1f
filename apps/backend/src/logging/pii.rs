use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Vetted literal; compiling it cannot fail.
#[allow(clippy::unwrap_used)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Masks member emails: keeps the first character of the local part and the full domain.
///
/// Database errors for the `members` table echo the offending email back, so
/// every raw DB message goes through here before it is logged.
pub fn redact(input: &str) -> String {
    EMAIL_REGEX
        .replace_all(input, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.find('@') {
                Some(0) | None => full_match.to_string(),
                Some(at_pos) => {
                    let first = full_match[..at_pos].chars().next().unwrap_or('*');
                    format!("{first}***{}", &full_match[at_pos..])
                }
            }
        })
        .to_string()
}

/// A wrapper that redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
