//! Glob wildcard to regex translation.
//!
//! Filter lists use a small wildcard syntax (`*`, `?`, `+`, `#`) instead of
//! full regex. The compiler translates one raw pattern into a
//! regex-compatible string: wildcards expand, regex metacharacters get
//! escaped, and a backslash suppresses wildcard expansion for exactly the
//! character that follows it.
//!
//! Translation table (unescaped):
//!
//! | input | output | matches                          |
//! |-------|--------|----------------------------------|
//! | `#`   | `\d`   | any single digit                 |
//! | `?`   | `.`    | any single character             |
//! | `*`   | `.*`   | any run of characters, incl. empty |
//! | `+`   | `.+`   | any non-empty run of characters  |
//!
//! `.` and the regex metacharacters `^ $ | ( ) { } [ ]` are always escaped;
//! everything else copies through unchanged.

/// Compiles glob patterns into regex-compatible strings.
///
/// Each compiler owns a reusable scratch buffer, so repeated compiles over
/// a long filter list amortize to zero allocations once the buffer has
/// grown past the longest pattern. The buffer makes a compiler `!Sync` in
/// spirit: `compile` takes `&mut self`, so at most one call can be in
/// flight per instance. Embedders running on multiple worker threads
/// should construct one compiler per thread; instances are cheap.
///
/// Output is deterministic: the same input yields byte-identical output on
/// any instance, fresh or reused.
#[derive(Debug, Default)]
pub struct PatternCompiler {
    buf: String,
}

impl PatternCompiler {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Ensure the scratch buffer can hold a worst-case expansion of `len`
    /// input bytes (every char doubling), then logically empty it.
    /// Capacity only ever grows.
    #[inline]
    fn reset_scratch(&mut self, len: usize) {
        let want = len * 2;
        if self.buf.capacity() < want {
            self.buf = String::with_capacity(want);
        }
        self.buf.clear();
    }

    /// Translate one raw pattern into a regex-compatible string.
    ///
    /// Never fails: every character has a defined (possibly identity)
    /// translation, the empty pattern compiles to the empty string, and a
    /// trailing unpaired backslash is emitted as a literal escaped
    /// backslash.
    pub fn compile(&mut self, pattern: &str) -> String {
        self.reset_scratch(pattern.len());

        // Escape handling is speculative: on `\` we append the backslash
        // immediately and remember the buffer position before it. If the
        // next character turns out to be a wildcard, the escape means
        // "match this character literally", so the buffer rolls back to
        // the save point and the bare character goes in instead. For any
        // other following character the backslash stays.
        let mut escaped = false;
        let mut save_point = 0usize;

        for c in pattern.chars() {
            if escaped {
                escaped = false;
                match c {
                    '#' | '?' | '*' | '+' => {
                        self.buf.truncate(save_point);
                        self.buf.push(c);
                    }
                    _ => self.buf.push(c),
                }
                continue;
            }

            match c {
                '#' => self.buf.push_str("\\d"),
                '?' => self.buf.push('.'),
                '*' => self.buf.push_str(".*"),
                '+' => self.buf.push_str(".+"),
                '.' => self.buf.push_str("\\."),
                '^' | '$' | '|' | '(' | ')' | '{' | '}' | '[' | ']' => {
                    self.buf.push('\\');
                    self.buf.push(c);
                }
                '\\' => {
                    save_point = self.buf.len();
                    self.buf.push('\\');
                    escaped = true;
                }
                _ => self.buf.push(c),
            }
        }

        // A pattern ending in an unpaired backslash gets the same
        // treatment as one followed by another backslash: a literal
        // two-character escaped backslash, never a dangling escape.
        if escaped {
            self.buf.push('\\');
        }

        self.buf.clone()
    }
}

/// One-off compilation with a throwaway buffer.
///
/// Prefer holding a [`PatternCompiler`] when compiling a whole list.
pub fn compile_pattern(pattern: &str) -> String {
    PatternCompiler::new().compile(pattern)
}
