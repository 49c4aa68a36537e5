//! Operator recogniser.
//!
//! Backtrackable. Tries each spelling in the operator table via [`literal`],
//! in the table's longest-first order, so `==` is tried (and wins) before
//! `=` gets a chance to — genuine maximal munch via ordered literal trial
//! rather than the teacher's per-character nested-match dispatch.

use crate::cursor::Cursor;
use crate::scanner::{literal, ScanError, ScanResult};
use crate::token::{operator_table, Token};

pub fn recognise(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    for (spelling, op) in operator_table() {
        if literal(cursor, spelling).is_ok() {
            return Ok(Token::Operator(*op));
        }
    }
    Err(ScanError)
}
