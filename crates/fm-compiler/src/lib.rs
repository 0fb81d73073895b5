//! Fastmatch Filter List Compiler
//!
//! This crate decodes raw filter-list text into [`FilterEntry`] values and
//! drives them through the `fm-core` pattern compiler. Data flows one way:
//! raw text -> decoder -> entries -> compiled regex-compatible strings,
//! which the embedder hands to its regex engine.

pub mod decoder;

pub use decoder::{decode, Decoder};
pub use fm_core::{FilterEntry, PatternCompiler};

/// Decode a whole filter list and compile every entry in order.
///
/// Convenience for embedders that want the compiled strings eagerly; one
/// compiler instance is reused across the list so the scratch buffer
/// amortizes. For streaming use, drive [`decode`] and a
/// [`PatternCompiler`] directly.
pub fn compile_list(text: &str, strip_comments: bool) -> Vec<String> {
    let mut compiler = PatternCompiler::new();
    decode(text.lines(), strip_comments)
        .map(|entry| compiler.compile(entry.pattern()))
        .collect()
}
