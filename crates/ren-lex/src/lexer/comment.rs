//! Line comment recogniser.
//!
//! Not backtrackable: `token()` only calls this once it has already peeked
//! the leading `//`, so there's nothing left to fail on — this recogniser
//! always succeeds once invoked. The payload excludes the leading `//` and
//! runs to (but not including) the next newline or end of input. Unlike
//! the teacher's comment handling, which skips comments as whitespace,
//! here the comment becomes a token in its own right, later merged with
//! any adjacent comment by the coalesce pass. There is no block-comment
//! form in this language.

use crate::cursor::Cursor;
use crate::scanner::{chomp_until_end_or, get_chomped_string, literal, ScanResult};
use crate::token::Token;

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    literal(cursor, "//").expect("caller peeked `//` before committing");

    let text = get_chomped_string(cursor, |c| {
        chomp_until_end_or(c, |ch| ch == '\n');
        Ok(())
    })
    .expect("chomp_until_end_or never fails");

    Ok(Token::Comment(text.to_string()))
}
