// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::result;

/// The error type for parsing a pattern into an `Nfa`.
///
/// Every variant is a syntax error in the pattern. Parsing stops at the first
/// one found; no partial automaton is returned.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` was found with no enclosing `(`. The value is the character
    /// position of the parenthesis in the pattern.
    #[fail(display = "Unexpected ')' at position {}.", _0)]
    ExtraneousParenthesis(usize),

    /// A bracket expression did not have the exact shape `[x-y]`. The value is
    /// the offending bracket literal.
    #[fail(display = "Ill-formed range expression: {}.", _0)]
    MalformedRange(String),

    /// A bracket expression `[x-y]` where `x` is greater than `y`.
    #[fail(
        display = "Invalid range: '{}' is greater lexicographically than '{}'.",
        _0,
        _1
    )]
    InvertedRange(char, char),

    /// A `*` or `+` with no preceding atom to apply to. The values are the
    /// operator and its character position in the pattern.
    #[fail(display = "Nothing to repeat for '{}' at position {}.", _0, _1)]
    NothingToRepeat(char, usize),
}

impl ParseError {
    /// Check if this is one of the bad range errors (either a malformed or an
    /// inverted bracket expression).
    pub fn is_bad_range(&self) -> bool {
        match self {
            &ParseError::MalformedRange(_) | &ParseError::InvertedRange(_, _) => true,
            _ => false,
        }
    }
}

/// A specialized Result type for parsing patterns.
pub type Result<T> = result::Result<T, ParseError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extraneous_parenthesis_display_names_position() {
        let sut = ParseError::ExtraneousParenthesis(3);

        assert_eq!(sut.to_string(), "Unexpected ')' at position 3.");
    }

    #[test]
    fn inverted_range_display_names_both_characters() {
        let sut = ParseError::InvertedRange('c', 'a');

        let message = sut.to_string();

        assert!(message.contains("'c'"));
        assert!(message.contains("'a'"));
    }

    #[test]
    fn range_errors_are_bad_range() {
        assert!(ParseError::MalformedRange("[ab]".to_owned()).is_bad_range());
        assert!(ParseError::InvertedRange('c', 'a').is_bad_range());
        assert!(!ParseError::ExtraneousParenthesis(0).is_bad_range());
        assert!(!ParseError::NothingToRepeat('*', 0).is_bad_range());
    }
}
