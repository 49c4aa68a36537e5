//! ASCII character classification for identifiers and digits.
//!
//! Ren identifiers are ASCII-only: the language has no Unicode identifier
//! support, so this module sticks to the subset of the teacher's unicode
//! helpers that's actually needed rather than carrying the full
//! category-aware machinery.

/// Checks if a character can start an identifier: an ASCII letter or `_`.
///
/// ```
/// use ren_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: an ASCII alphanumeric
/// or `_`.
///
/// ```
/// use ren_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is an ASCII decimal digit.
///
/// ```
/// use ren_lex::unicode::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
