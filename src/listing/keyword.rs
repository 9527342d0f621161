//! Keyword normalization for case-insensitive "contains" matching.

/// Escape character used in rendered `ILIKE` patterns.
pub const ESCAPE_CHAR: char = '\\';

/// A normalized search keyword.
///
/// An empty keyword matches every row. `LIKE` metacharacters in the keyword
/// are matched literally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordPattern {
    needle: String,
}

impl KeywordPattern {
    /// Normalizes a raw search string.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Returns a pattern that matches every row.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Returns `true` when the pattern matches every row.
    #[must_use]
    pub const fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Renders the pattern for an `ILIKE ... ESCAPE '\'` predicate.
    #[must_use]
    pub fn sql_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.needle.len() + 2);
        pattern.push('%');
        for ch in self.needle.chars() {
            if matches!(ch, '%' | '_' | ESCAPE_CHAR) {
                pattern.push(ESCAPE_CHAR);
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// Evaluates the pattern against a candidate value in memory.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.is_match_all() || candidate.to_lowercase().contains(&self.needle)
    }
}
