//! Scanner primitives: the small combinators every token recogniser is
//! built from.
//!
//! These mirror a classic parser-combinator scanning style — `literal`,
//! `chomp_if`, `chomp_while`, `one_of` — kept deliberately tiny and
//! allocation-free where possible. They operate directly on a [`Cursor`]
//! rather than building an intermediate parse tree: a scanner only ever
//! needs to know "did this match, and if so, how far did it get".

use crate::cursor::Cursor;

/// The scanner's only error: something didn't match. There's no payload
/// because nothing downstream distinguishes *why* a scan step failed, only
/// whether it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError;

pub type ScanResult<T> = Result<T, ScanError>;

/// Consumes `text` verbatim from the cursor, or fails leaving the cursor
/// untouched.
pub fn literal(cursor: &mut Cursor<'_>, text: &str) -> ScanResult<()> {
    let snapshot = cursor.snapshot();
    for expected in text.chars() {
        if cursor.is_at_end() || cursor.current_char() != expected {
            cursor.restore(snapshot);
            return Err(ScanError);
        }
        cursor.advance();
    }
    Ok(())
}

/// Consumes exactly one character if it satisfies `predicate`, or fails
/// leaving the cursor untouched.
pub fn chomp_if(cursor: &mut Cursor<'_>, predicate: impl Fn(char) -> bool) -> ScanResult<()> {
    if cursor.is_at_end() || !predicate(cursor.current_char()) {
        return Err(ScanError);
    }
    cursor.advance();
    Ok(())
}

/// Consumes characters satisfying `predicate` for as long as they do.
/// Always succeeds, even if it consumes zero characters.
pub fn chomp_while(cursor: &mut Cursor<'_>, predicate: impl Fn(char) -> bool) {
    while !cursor.is_at_end() && predicate(cursor.current_char()) {
        cursor.advance();
    }
}

/// Consumes characters until either `stop` matches the current character
/// or the cursor hits end of input, whichever comes first. Always
/// succeeds.
pub fn chomp_until_end_or(cursor: &mut Cursor<'_>, stop: impl Fn(char) -> bool) {
    while !cursor.is_at_end() && !stop(cursor.current_char()) {
        cursor.advance();
    }
}

/// Runs `step`, and if it succeeds, returns the exact source slice it
/// consumed.
pub fn get_chomped_string(
    cursor: &mut Cursor<'_>,
    step: impl FnOnce(&mut Cursor<'_>) -> ScanResult<()>,
) -> ScanResult<&str> {
    let start = cursor.position();
    step(cursor)?;
    Ok(cursor.slice_from(start))
}

/// Tries each alternative in order, returning the first success. Each
/// alternative is responsible for restoring the cursor itself on failure
/// (backtrackable recognisers do this via [`Cursor::snapshot`] /
/// [`Cursor::restore`]); `one_of` just stops at the first that returns
/// `Ok`.
pub fn one_of<T>(
    cursor: &mut Cursor<'_>,
    alternatives: &[fn(&mut Cursor<'_>) -> ScanResult<T>],
) -> ScanResult<T> {
    for alt in alternatives {
        if let Ok(value) = alt(cursor) {
            return Ok(value);
        }
    }
    Err(ScanError)
}

/// Fixed-point iteration: repeatedly applies `step` to a state, stopping
/// when it reports [`Step::Done`]. Recognisers built from an explicit
/// accumulation loop (the string recogniser's escape-handling loop, the
/// coalesce pass) are naturally expressed this way, though a plain `while`
/// reads just as clearly for the simple cases in this crate and is used
/// there instead.
pub enum Step<S, T> {
    Continue(S),
    Done(T),
}

pub fn loop_<S, T>(init: S, mut step: impl FnMut(S) -> Step<S, T>) -> T {
    let mut state = init;
    loop {
        match step(state) {
            Step::Continue(next) => state = next,
            Step::Done(value) => return value,
        }
    }
}

/// Consumes whitespace (spaces, tabs, newlines, carriage returns). Always
/// succeeds, even if it consumes nothing.
pub fn spaces(cursor: &mut Cursor<'_>) {
    chomp_while(cursor, |c| matches!(c, ' ' | '\t' | '\n' | '\r'));
}

/// Succeeds only if the cursor is at end of input.
pub fn end(cursor: &Cursor<'_>) -> ScanResult<()> {
    if cursor.is_at_end() {
        Ok(())
    } else {
        Err(ScanError)
    }
}
