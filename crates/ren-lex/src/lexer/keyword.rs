//! Keyword recogniser.
//!
//! Backtrackable. Reads a maximal identifier-shaped run the same way the
//! identifier recogniser does, then classifies it against the keyword
//! table — this is equivalent to trying each keyword spelling in
//! descending length order with a word-boundary check, but reuses a single
//! maximal-munch scan instead of repeating it once per table entry. If the
//! run isn't a reserved word, this fails and leaves the cursor untouched,
//! so the same text gets scanned again later by the identifier recogniser.

use crate::cursor::Cursor;
use crate::scanner::{chomp_while, get_chomped_string, ScanError, ScanResult};
use crate::token::{kw_of, Token};
use crate::unicode::{is_ident_continue, is_ident_start};

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    let snapshot = cursor.snapshot();

    let text = get_chomped_string(cursor, |c| {
        if c.is_at_end() || !is_ident_start(c.current_char()) {
            return Err(ScanError);
        }
        c.advance();
        chomp_while(c, is_ident_continue);
        Ok(())
    })?;

    match kw_of(text) {
        Some(kw) => Ok(Token::Keyword(kw)),
        None => {
            cursor.restore(snapshot);
            Err(ScanError)
        }
    }
}
