//! Symbol recogniser.
//!
//! Backtrackable, and tried after the operator recogniser, so `.` and `|`
//! only land here once the operator table has already had the chance to
//! claim `..` or `|>`. `_` is special-cased: a bare underscore is the
//! wildcard-pattern symbol, but `_private` is an identifier, so this only
//! claims `_` when it isn't followed by another identifier character —
//! otherwise it backs off and lets the identifier recogniser take the
//! whole run.

use crate::cursor::Cursor;
use crate::scanner::{chomp_if, ScanError, ScanResult};
use crate::token::{sym_of, Token};
use crate::unicode::is_ident_continue;

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    if cursor.is_at_end() {
        return Err(ScanError);
    }
    let c = cursor.current_char();

    if c == '_' && is_ident_continue(cursor.peek_char(1)) {
        return Err(ScanError);
    }

    let mut buf = [0u8; 4];
    let spelling = c.encode_utf8(&mut buf);
    match sym_of(spelling) {
        Some(sym) => {
            chomp_if(cursor, |ch| ch == c)?;
            Ok(Token::Symbol(sym))
        }
        None => Err(ScanError),
    }
}
