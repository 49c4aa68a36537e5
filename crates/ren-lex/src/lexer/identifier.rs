//! Identifier recogniser.
//!
//! Backtrackable, and ordered after keyword, operator, and symbol in the
//! dispatcher, so by the time this runs, the run of identifier characters
//! ahead is already known not to spell a keyword. Classifies by the case
//! of the leading letter ([`IdentKind::Lower`] vs. [`IdentKind::Upper`])
//! and interns the text.

use crate::cursor::Cursor;
use crate::scanner::{chomp_while, get_chomped_string, ScanError, ScanResult};
use crate::token::{id_of, Token};
use crate::unicode::{is_ident_continue, is_ident_start};
use ren_util::Symbol;

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    let snapshot = cursor.snapshot();

    let text = get_chomped_string(cursor, |c| {
        if c.is_at_end() || !is_ident_start(c.current_char()) {
            return Err(ScanError);
        }
        c.advance();
        chomp_while(c, is_ident_continue);
        Ok(())
    });

    let text = match text {
        Ok(text) => text,
        Err(err) => {
            cursor.restore(snapshot);
            return Err(err);
        }
    };

    match id_of(text) {
        Some(kind) => Ok(Token::Identifier(kind, Symbol::intern(text))),
        None => {
            cursor.restore(snapshot);
            Err(ScanError)
        }
    }
}
