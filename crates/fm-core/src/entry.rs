//! Decoded filter rule data model.

/// One rule extracted from a filter list.
///
/// Holds the raw, not-yet-compiled pattern text after comment stripping and
/// host-prefix normalization. Entries are immutable once produced; the
/// decoder hands ownership to whatever consumes the decoded sequence.
///
/// The pattern is never empty and never purely whitespace: blank lines are
/// dropped during decoding and are not representable as entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterEntry {
    pattern: String,
}

impl FilterEntry {
    /// Wrap an already-normalized pattern.
    ///
    /// Callers must pass trimmed, non-empty text; the list decoder in
    /// `fm-compiler` is the intended construction site.
    pub fn from_normalized(pattern: String) -> Self {
        debug_assert!(!pattern.trim().is_empty());
        Self { pattern }
    }

    /// The raw rule text.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Consume the entry, yielding the raw rule text.
    #[inline]
    pub fn into_pattern(self) -> String {
        self.pattern
    }
}

impl AsRef<str> for FilterEntry {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_access() {
        let entry = FilterEntry::from_normalized("h example.com".to_string());
        assert_eq!(entry.pattern(), "h example.com");
        assert_eq!(entry.as_ref(), "h example.com");
        assert_eq!(entry.into_pattern(), "h example.com");
    }
}
