//! Bingo Lexer Core - raw tokenizer for pattern text.
//!
//! This crate turns a pattern string such as `(x:xs)` or `["foo", bar]` into
//! a flat stream of [`RawToken`]s. Each token is a `(tag, len)` pair; the
//! caller reconstructs byte offsets by summing lengths. No interning, no
//! spans, no diagnostics: those belong to `bingo_parse`.
//!
//! # Guarantees
//!
//! - The scanner never panics, on any input.
//! - Token lengths always sum to the input length (every byte is covered,
//!   unknown bytes become [`RawTag::Unknown`]).
//! - The stream ends with exactly one [`RawTag::Eof`] of length 0.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use tag::{RawTag, RawToken};
