//! String literal recogniser.
//!
//! Not backtrackable: `token()` only calls this once it has already peeked
//! a leading `"`, and any failure past that point — an unknown escape, a
//! raw newline, running off the end of input — is a hard error that
//! propagates out of `lex()` as a whole rather than falling through to try
//! a different token kind.

use crate::cursor::Cursor;
use crate::scanner::{ScanError, ScanResult};
use crate::token::Token;
use ren_util::Symbol;

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    debug_assert_eq!(cursor.current_char(), '"');
    cursor.advance();

    let mut content = String::new();

    loop {
        if cursor.is_at_end() {
            return Err(ScanError);
        }

        match cursor.current_char() {
            '"' => {
                cursor.advance();
                return Ok(Token::String(Symbol::intern(&content)));
            }
            '\n' => return Err(ScanError),
            '\\' => {
                cursor.advance();
                let escaped = match cursor.current_char() {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    _ => return Err(ScanError),
                };
                content.push(escaped);
                cursor.advance();
            }
            c => {
                content.push(c);
                cursor.advance();
            }
        }
    }
}
