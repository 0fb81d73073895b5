//! Streaming filter list decoder.
//!
//! Turns a line-oriented filter list source into an ordered sequence of
//! [`FilterEntry`] values. Decoding is lazy and single-pass: lines are
//! pulled from the source one at a time, so arbitrarily long lists never
//! need to sit in memory at once, and the caller controls pacing by
//! pulling entries.

use fm_core::FilterEntry;
use log::trace;

/// Hosts-file redirect targets that mark a host-block rule.
const HOST_PREFIXES: &[&str] = &["127.0.0.1", "0.0.0.0"];

/// Canonical marker a recognized hosts-file prefix is rewritten to.
const HOST_MARKER: char = 'h';

/// Decode a filter list supplied as a sequence of text lines.
///
/// Per line: leading/trailing whitespace is trimmed; blank lines are
/// dropped; when `strip_comments` is set, lines starting with `#` or `//`
/// are dropped; a leading `127.0.0.1` or `0.0.0.0` hosts-file prefix is
/// replaced by the canonical `h` marker, with the rest of the line
/// (separating whitespace included) kept verbatim. Every surviving line
/// becomes one entry.
///
/// Malformed lines are never an error. The decoder does not validate
/// pattern syntax; that is the pattern compiler's concern.
pub fn decode<I>(lines: I, strip_comments: bool) -> Decoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Decoder {
        lines: lines.into_iter(),
        strip_comments,
    }
}

/// Lazy iterator over decoded filter entries.
///
/// Produced by [`decode`]. Single-pass: once exhausted it stays
/// exhausted; re-decode a fresh source to restart.
#[derive(Debug)]
pub struct Decoder<I> {
    lines: I,
    strip_comments: bool,
}

impl<I> Iterator for Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = FilterEntry;

    fn next(&mut self) -> Option<FilterEntry> {
        loop {
            let line = self.lines.next()?;
            let line = line.as_ref().trim();

            if line.is_empty() {
                continue;
            }

            if self.strip_comments && (line.starts_with('#') || line.starts_with("//")) {
                trace!("skipping comment line: {line}");
                continue;
            }

            return Some(FilterEntry::from_normalized(normalize_host_prefix(line)));
        }
    }
}

/// Rewrite a leading hosts-file redirect target to the `h` marker.
///
/// Only the leading literal is replaced; later occurrences of the same
/// text belong to the pattern and stay untouched.
fn normalize_host_prefix(line: &str) -> String {
    for prefix in HOST_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            let mut pattern = String::with_capacity(rest.len() + 1);
            pattern.push(HOST_MARKER);
            pattern.push_str(rest);
            return pattern;
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(text: &str, strip_comments: bool) -> Vec<String> {
        decode(text.lines(), strip_comments)
            .map(FilterEntry::into_pattern)
            .collect()
    }

    #[test]
    fn test_plain_lines_pass_through_trimmed() {
        assert_eq!(
            patterns("  ads.example.com/banner  \n||tracker^", true),
            vec!["ads.example.com/banner", "||tracker^"]
        );
    }

    #[test]
    fn test_loopback_prefix_rewritten() {
        assert_eq!(
            patterns("127.0.0.1 example.com", true),
            vec!["h example.com"]
        );
    }

    #[test]
    fn test_unspecified_prefix_rewritten() {
        assert_eq!(patterns("0.0.0.0 example.com", true), vec!["h example.com"]);
    }

    #[test]
    fn test_prefix_separator_kept_verbatim() {
        assert_eq!(
            patterns("127.0.0.1\texample.com", true),
            vec!["h\texample.com"]
        );
    }

    #[test]
    fn test_only_leading_prefix_rewritten() {
        assert_eq!(
            patterns("0.0.0.0 0.0.0.0.example.com", true),
            vec!["h 0.0.0.0.example.com"]
        );
    }

    #[test]
    fn test_comments_dropped_when_stripping() {
        assert_eq!(patterns("# comment\n// comment\nrule", true), vec!["rule"]);
    }

    #[test]
    fn test_comments_kept_when_not_stripping() {
        assert_eq!(
            patterns("# comment\n// comment", false),
            vec!["# comment", "// comment"]
        );
    }

    #[test]
    fn test_blank_lines_never_produce_entries() {
        assert_eq!(patterns("\n   \n\t\n", true), Vec::<String>::new());
        assert_eq!(patterns("\n   \n\t\n", false), Vec::<String>::new());
    }

    #[test]
    fn test_lazy_single_pass() {
        let mut entries = decode("a\n\nb".lines(), true);
        assert_eq!(entries.next().map(|e| e.into_pattern()), Some("a".into()));
        assert_eq!(entries.next().map(|e| e.into_pattern()), Some("b".into()));
        assert_eq!(entries.next(), None);
        assert_eq!(entries.next(), None);
    }

    #[test]
    fn test_owned_line_source() {
        let lines: Vec<String> = vec!["127.0.0.1 a.com".into(), "b".into()];
        assert_eq!(patterns_from(lines), vec!["h a.com", "b"]);
    }

    fn patterns_from(lines: Vec<String>) -> Vec<String> {
        decode(lines, true).map(FilterEntry::into_pattern).collect()
    }
}
