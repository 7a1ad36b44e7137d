//! The scanner automaton.
//!
//! The scanner's position relative to string and number boundaries is a
//! single enumerated state, and the whole automaton is one pure function
//! from (state, character) to (next state, routing action). The driver in
//! [`crate::scanner`] interprets the actions; nothing in this module
//! touches a buffer.

use crate::classify::{is_number_start, is_number_terminator};

/// The scanner's position relative to string and number boundaries.
///
/// Exactly one of these holds at any point in the scan, which rules out
/// impossible flag combinations by construction. The escape boundary
/// inside a string is its own state rather than a side cell: it only
/// exists for the single character following an unescaped backslash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any string or number.
    Default,
    /// Inside a string literal.
    InString,
    /// Inside a string, on the character following an unescaped backslash.
    InStringEscape,
    /// Accumulating a numeric literal.
    InNumber,
}

/// What the driver should do with the current character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Copy the character to the rewritten output.
    Emit,
    /// Drop the character (insignificant whitespace outside a string).
    Skip,
    /// Open a numeric literal at this character: emit the next placeholder
    /// index, then consume the character into the literal.
    OpenNumber,
    /// Consume the character into the open literal.
    GrowNumber,
    /// Close the open literal, then copy the character to the output.
    CloseNumberEmit,
    /// Close the open literal, then drop the character (whitespace).
    CloseNumberSkip,
}

/// Advances the automaton by one character.
///
/// Pure and total: every (state, character) pair maps to exactly one
/// (state, route) pair, so the transition table can be tested directly.
///
/// # Example
///
/// ```
/// use numlift_scan::state::{step, Route, ScanState};
///
/// assert_eq!(step(ScanState::Default, '7'), (ScanState::InNumber, Route::OpenNumber));
/// assert_eq!(step(ScanState::InNumber, ','), (ScanState::Default, Route::CloseNumberEmit));
/// assert_eq!(step(ScanState::InString, '7'), (ScanState::InString, Route::Emit));
/// ```
pub fn step(state: ScanState, c: char) -> (ScanState, Route) {
    match state {
        ScanState::Default => {
            if c == '"' {
                (ScanState::InString, Route::Emit)
            } else if is_number_start(c) {
                (ScanState::InNumber, Route::OpenNumber)
            } else if c.is_whitespace() {
                (ScanState::Default, Route::Skip)
            } else {
                (ScanState::Default, Route::Emit)
            }
        },
        ScanState::InString => match c {
            '\\' => (ScanState::InStringEscape, Route::Emit),
            '"' => (ScanState::Default, Route::Emit),
            // Whitespace inside a string is data and passes through.
            _ => (ScanState::InString, Route::Emit),
        },
        // The escaped character passes through verbatim: an escaped quote
        // must not close the string, an escaped backslash must not arm a
        // second escape.
        ScanState::InStringEscape => (ScanState::InString, Route::Emit),
        ScanState::InNumber => {
            if is_number_terminator(c) {
                if c.is_whitespace() {
                    (ScanState::Default, Route::CloseNumberSkip)
                } else {
                    (ScanState::Default, Route::CloseNumberEmit)
                }
            } else {
                // Everything that is not a terminator continues the
                // literal: digits, '.', 'e', 'E', '+', '-', and on
                // malformed input whatever garbage precedes the next
                // terminator.
                (ScanState::InNumber, Route::GrowNumber)
            }
        },
    }
}
