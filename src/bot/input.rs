//! Normalized view of one line of user input.

/// A single line of user text.
///
/// Matching runs against `normalized` (trimmed, lowercased, single-spaced);
/// arguments are taken from the raw tokens so stored values keep the casing
/// the user typed.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> Input<'a> {
    pub fn new(text: &'a str) -> Self {
        let raw = text.trim();
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is(&self, phrase: &str) -> bool {
        self.normalized == phrase
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    /// True when the input is `word` or starts with `word` followed by more
    /// text.
    pub fn starts_with_word(&self, word: &str) -> bool {
        match self.normalized.strip_prefix(word) {
            Some(rest) => rest.is_empty() || rest.starts_with(' '),
            None => false,
        }
    }

    /// Raw tokens after the command word.
    pub fn args(&self) -> Vec<&'a str> {
        self.raw.split_whitespace().skip(1).collect()
    }
}

/// Parses a signed integer argument; anything else is `None`.
pub fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}
