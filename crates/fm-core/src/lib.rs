//! Fastmatch Core Library
//!
//! This crate provides the core text transforms for the fastmatch content
//! filter: the data model for decoded filter rules and the glob-to-regex
//! pattern compiler.
//!
//! # Architecture
//!
//! Filter lists are decoded upstream (see `fm-compiler`) into
//! [`FilterEntry`] values. Each entry's raw pattern is then run through
//! [`PatternCompiler`] to produce a regex-compatible string. The compiled
//! strings are handed to an external regex engine for matching; this crate
//! owns neither the matching nor the list fetching.
//!
//! # Modules
//!
//! - `entry`: decoded filter rule data model
//! - `pattern`: glob wildcard to regex translation

pub mod entry;
pub mod pattern;

// Re-export commonly used types
pub use entry::FilterEntry;
pub use pattern::{compile_pattern, PatternCompiler};
