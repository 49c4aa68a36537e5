//! Number literal recogniser.
//!
//! Backtrackable: on any failure the cursor is left untouched by the
//! caller's `attempt` wrapper. Only ever consumes decimal digits, an
//! optional fractional part, and an optional exponent — there's no special
//! case for `0x`/`0o`/`0b` prefixes, so `0x1` lexes as `Number(0.0)`
//! followed by an identifier `x1` rather than as a hex literal. All numbers
//! widen to `f64`; the source never distinguishes `1` from `1.0`.

use crate::cursor::Cursor;
use crate::scanner::{chomp_while, get_chomped_string, ScanError, ScanResult};
use crate::token::Token;
use crate::unicode::is_digit;

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    let snapshot = cursor.snapshot();

    let text = get_chomped_string(cursor, |c| {
        if c.is_at_end() || !is_digit(c.current_char()) {
            return Err(ScanError);
        }
        chomp_while(c, is_digit);

        if !c.is_at_end() && c.current_char() == '.' && is_digit(c.peek_char(1)) {
            c.advance();
            chomp_while(c, is_digit);
        }

        if !c.is_at_end() && matches!(c.current_char(), 'e' | 'E') {
            let exponent_start = c.snapshot();
            c.advance();
            if !c.is_at_end() && matches!(c.current_char(), '+' | '-') {
                c.advance();
            }
            if !c.is_at_end() && is_digit(c.current_char()) {
                chomp_while(c, is_digit);
            } else {
                c.restore(exponent_start);
            }
        }

        Ok(())
    });

    let text = match text {
        Ok(text) => text,
        Err(err) => {
            cursor.restore(snapshot);
            return Err(err);
        }
    };

    text.parse::<f64>().map(Token::Number).map_err(|_| {
        cursor.restore(snapshot);
        ScanError
    })
}
