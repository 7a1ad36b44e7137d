//! Scanner driver.
//!
//! Walks the input once, interpreting the automaton's routing actions, and
//! produces the placeholder-rewritten document together with the ordered
//! list of original numeric lexemes.

use crate::cursor::Cursor;
use crate::state::{step, Route, ScanState};

/// Result of one scan.
///
/// `rewritten` is the input document with every numeric literal replaced
/// by an ascending decimal placeholder and with whitespace outside strings
/// removed. `literals` holds the original text of each numeric literal in
/// order of appearance: entry `k` is the lexeme that placeholder `k`
/// stands for.
///
/// # Example
///
/// ```
/// use numlift_scan::extract_numbers;
///
/// let out = extract_numbers(r#"{"a":1,"b":"x"}"#);
/// assert_eq!(out.rewritten, r#"{"a":0,"b":"x"}"#);
/// assert_eq!(out.literals, vec!["1".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    /// The document with every numeric literal replaced by a placeholder.
    pub rewritten: String,
    /// The original text of each numeric literal, in order of appearance.
    pub literals: Vec<String>,
}

/// Single-use scanner over one document.
///
/// The scanner owns all of its working state: the cursor, the automaton
/// state, the start offset of the literal currently being accumulated, and
/// the two output buffers. Nothing is shared between scans; [`Scanner::run`]
/// consumes the scanner and returns the outputs by value.
pub struct Scanner<'a> {
    /// Character cursor over the input.
    cursor: Cursor<'a>,

    /// Current automaton state.
    state: ScanState,

    /// Byte offset of the first character of the open literal.
    /// Only meaningful while the state is `InNumber`.
    literal_start: usize,

    /// The rewritten document being built.
    rewritten: String,

    /// Completed literals, in order of appearance.
    literals: Vec<String>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: ScanState::Default,
            literal_start: 0,
            rewritten: String::with_capacity(input.len()),
            literals: Vec::new(),
        }
    }

    /// Runs the scan to completion and returns the outputs.
    ///
    /// Total over all inputs: malformed documents are never rejected, they
    /// produce a best-effort result. An unterminated string simply leaves
    /// the scan in the string state with every character already routed; an
    /// unterminated number is flushed at end of input.
    pub fn run(mut self) -> Extraction {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            let (next, route) = step(self.state, c);
            match route {
                Route::Emit => self.rewritten.push(c),
                Route::Skip => {},
                Route::OpenNumber => self.open_literal(),
                Route::GrowNumber => {},
                Route::CloseNumberEmit => {
                    self.close_literal();
                    self.rewritten.push(c);
                },
                Route::CloseNumberSkip => self.close_literal(),
            }
            self.state = next;
            self.cursor.advance();
        }

        // Input may end while a literal is still open, e.g. a bare `-12`
        // at top level with no trailing terminator.
        if self.state == ScanState::InNumber {
            self.close_literal();
        }

        Extraction {
            rewritten: self.rewritten,
            literals: self.literals,
        }
    }

    /// Opens a literal at the current character: emits the placeholder for
    /// it and records where its text begins.
    ///
    /// The placeholder is the number of literals opened so far, so the
    /// placeholders read left to right are exactly `0, 1, 2, …`.
    fn open_literal(&mut self) {
        let index = self.literals.len();
        self.rewritten.push_str(&index.to_string());
        self.literal_start = self.cursor.position();
    }

    /// Closes the open literal: the accumulated text is the input slice
    /// from the literal's first character up to (not including) the
    /// current one.
    fn close_literal(&mut self) {
        let text = self.cursor.slice_from(self.literal_start);
        self.literals.push(text.to_string());
    }
}

/// Scans `input` and returns the rewritten document with its extracted
/// numeric lexemes.
///
/// This is the crate's single operation: a pure, synchronous, in-memory
/// transformation. See [`Extraction`] for the output contract.
///
/// # Example
///
/// ```
/// use numlift_scan::extract_numbers;
///
/// let out = extract_numbers("[1, 2, -3.5]");
/// assert_eq!(out.rewritten, "[0,1,2]");
/// assert_eq!(out.literals, vec!["1", "2", "-3.5"]);
/// ```
pub fn extract_numbers(input: &str) -> Extraction {
    Scanner::new(input).run()
}
