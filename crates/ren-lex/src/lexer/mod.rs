//! Token dispatcher and stream driver.
//!
//! This module organizes the lexer implementation into smaller, focused
//! components:
//! - `keyword` — reserved-word recogniser
//! - `number` — numeric literal recogniser
//! - `string` — string literal recogniser
//! - `comment` — line comment recogniser
//! - `operator` — operator recogniser
//! - `symbol` — single-character symbol recogniser
//! - `identifier` — identifier recogniser
//! - `unknown` — always-succeeds fallback
//!
//! `token()` tries these in the fixed order the language defines, using
//! [`attempt`] to make the backtrackable recognisers (number, keyword,
//! operator, symbol, identifier) transparently retry the next alternative
//! on failure. String and comment are not backtrackable: once their lead
//! character is confirmed, any internal failure is a hard error that
//! aborts the whole lex rather than falling through to a different token
//! kind — a malformed escape deep inside a string literal must not be
//! silently reinterpreted as something else.

mod comment;
mod identifier;
mod keyword;
mod number;
mod operator;
mod string;
mod symbol;
mod unknown;

use crate::cursor::Cursor;
use crate::scanner::{spaces, ScanResult};
use crate::token::Token;

/// Runs a backtrackable recogniser, restoring the cursor on failure so the
/// dispatcher can try the next alternative.
fn attempt(cursor: &mut Cursor<'_>, recogniser: fn(&mut Cursor<'_>) -> ScanResult<Token>) -> Option<Token> {
    let snapshot = cursor.snapshot();
    match recogniser(cursor) {
        Ok(token) => Some(token),
        Err(_) => {
            cursor.restore(snapshot);
            None
        }
    }
}

/// Recognises exactly one token at the cursor's current position, which is
/// assumed not to be whitespace and not to be end of input.
///
/// Returns `Err(())` if a non-backtrackable recogniser (string or comment)
/// hard-fails after committing to its lead character.
pub fn token(cursor: &mut Cursor<'_>) -> Result<Token, ()> {
    if let Some(tok) = attempt(cursor, number::recognise) {
        return Ok(tok);
    }

    if cursor.current_char() == '"' {
        return string::recognise(cursor).map_err(|_| ());
    }

    if let Some(tok) = attempt(cursor, keyword::recognise) {
        return Ok(tok);
    }

    if cursor.current_char() == '/' && cursor.peek_char(1) == '/' {
        return comment::recognise(cursor).map_err(|_| ());
    }

    if let Some(tok) = attempt(cursor, operator::recognise) {
        return Ok(tok);
    }

    if let Some(tok) = attempt(cursor, symbol::recognise) {
        return Ok(tok);
    }

    if let Some(tok) = attempt(cursor, identifier::recognise) {
        return Ok(tok);
    }

    Ok(unknown::recognise(cursor))
}

/// Drives the cursor to end of input, collecting one token per call to
/// [`token`], with leading and trailing whitespace skipped around each.
pub fn stream(source: &str) -> Result<Vec<Token>, ()> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    spaces(&mut cursor);
    while !cursor.is_at_end() {
        tokens.push(token(&mut cursor)?);
        spaces(&mut cursor);
    }

    Ok(tokens)
}
