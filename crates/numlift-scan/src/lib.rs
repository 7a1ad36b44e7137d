//! numlift-scan - Precision-Preserving JSON Number Extraction
//!
//! This crate provides a single-pass scanner that rewrites a JSON document
//! so that every numeric literal is replaced by a placeholder integer
//! index, while returning, in order of appearance, the exact original
//! textual form of each numeric literal.
//!
//! # Overview
//!
//! Ordinary numeric decoding of JSON silently loses precision for integers
//! or floats outside the safe range of a native double
//! (`9007199254740993` decodes as `9007199254740992.0`). The scanner
//! sidesteps this: after rewriting, every number in the document is a
//! small consecutive integer that any decoder handles exactly, and the
//! original lexemes can be re-parsed with an arbitrary-precision parser
//! and spliced back in by index.
//!
//! The scanner is a lexer, not a validator: it never fails, and malformed
//! input produces a best-effort result. Checking that the document is
//! well-formed JSON belongs to whatever decoder consumes the rewritten
//! text.
//!
//! # Example Usage
//!
//! ```
//! use numlift_scan::extract_numbers;
//!
//! let out = extract_numbers(r#"{"id": 9007199254740993, "name": "a"}"#);
//! assert_eq!(out.rewritten, r#"{"id":0,"name":"a"}"#);
//! assert_eq!(out.literals, vec!["9007199254740993"]);
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - Scanner driver and the [`Extraction`] output pair
//! - [`state`] - The automaton: scan states and the pure transition function
//! - [`classify`] - Character-class predicates for number boundaries
//! - [`cursor`] - Character cursor for input traversal
//!
//! # Rewriting Rules
//!
//! Reading the input once, left to right:
//!
//! - A numeric literal (leading digit or minus, then everything up to the
//!   next `,`, `}`, `]`, whitespace, or end of input) is replaced by the
//!   count of literals seen so far, written in decimal.
//! - String literals pass through verbatim, including escapes and any
//!   whitespace or digits they contain.
//! - Whitespace outside strings is dropped.
//! - Everything else passes through unchanged.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod state;


// Re-export main types for convenience
pub use classify::{is_number_start, is_number_terminator};
pub use cursor::Cursor;
pub use scanner::{extract_numbers, Extraction, Scanner};
pub use state::{step, Route, ScanState};
