//! Lexical analysis for Ren.
//!
//! Transforms source text into a flat sequence of [`Token`]s. The lexer is
//! a pure function: no shared state, nothing to construct, nothing to tear
//! down. It's safe to call from as many threads as there are files to
//! lex — each call only ever touches the `&str` it was given.
//!
//! ```
//! use ren_lex::{lex, Token};
//!
//! let tokens = lex("let x = 1").unwrap();
//! assert!(matches!(tokens[0], Token::Keyword(_)));
//! ```
//!
//! # Pipeline
//!
//! 1. The stream driver walks the source with a [`cursor::Cursor`], calling
//!    the token dispatcher repeatedly to produce a raw token sequence.
//! 2. [`coalesce::coalesce`] merges adjacent `Comment` tokens and adjacent
//!    `Unknown` tokens into single tokens.
//!
//! # Errors
//!
//! There are exactly two outcomes: a token sequence, or [`LexError`]. The
//! error carries no detail — string and comment recognisers are the only
//! ones that can fail this way (an unterminated string, an unknown escape
//! sequence), and by the time one of them has committed to its lead
//! character there's nothing left to say other than that the input wasn't
//! well-formed Ren.

pub mod coalesce;
pub mod cursor;
mod lexer;
pub mod scanner;
pub mod token;
pub mod unicode;

pub use token::{IdentKind, Keyword, Operator, SymbolKind, Token};

use thiserror::Error;

/// The lexer rejected the input. Carries no further detail; see the
/// module-level docs for why.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("input is not well-formed Ren source")]
pub struct LexError;

/// Lexes `source` into a coalesced token sequence.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let raw = lexer::stream(source).map_err(|_| LexError)?;
    Ok(coalesce::coalesce(raw))
}
