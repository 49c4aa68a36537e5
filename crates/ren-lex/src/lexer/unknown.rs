//! Unknown-character fallback.
//!
//! Last in the recogniser order and never fails (as long as the cursor
//! isn't already at end of input): it consumes exactly one Unicode
//! character, whatever it is, so the lexer always makes forward progress
//! and `lex()` never has to reject well-formed-but-unrecognised input at
//! this stage. Adjacent `Unknown` tokens are merged later by the coalesce
//! pass.

use crate::cursor::Cursor;
use crate::token::Token;

pub fn recognise(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.position();
    cursor.advance();
    Token::Unknown(cursor.slice_from(start).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_one_ascii_char() {
        let mut cursor = Cursor::new("$x");
        assert_eq!(recognise(&mut cursor), Token::Unknown("$".to_string()));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn consumes_one_multibyte_char() {
        let mut cursor = Cursor::new("€x");
        let token = recognise(&mut cursor);
        assert_eq!(token, Token::Unknown("€".to_string()));
        assert_eq!(cursor.position(), '€'.len_utf8());
    }
}
