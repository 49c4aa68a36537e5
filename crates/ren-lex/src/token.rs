//! Token taxonomy: the shapes a lexeme can take, and the fixed tables used
//! to classify keywords, symbols, and operators.
//!
//! Keywords, symbols, and operators are each a small, fixed, known set, so
//! they're represented as plain enum tags rather than interned `Symbol`s —
//! interning only pays for itself on open-ended text, which here is just
//! `Identifier` and `String` payloads.

use ren_util::Symbol;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, always widened to a single floating-point
    /// representation regardless of whether the source text had a
    /// fractional part.
    Number(f64),
    /// A double-quoted string literal, with escapes already resolved.
    String(Symbol),
    /// A `//` line comment. Payload excludes the leading `//`.
    Comment(String),
    /// A reserved word.
    Keyword(Keyword),
    /// A single-character structural symbol.
    Symbol(SymbolKind),
    /// An operator, built from one or two characters.
    Operator(Operator),
    /// An identifier, tagged by the case of its first letter.
    Identifier(IdentKind, Symbol),
    /// A run of input that didn't match any other token kind.
    Unknown(String),
}

/// Reserved words. Matching an identifier against this table always takes
/// priority over treating it as a plain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Let,
    In,
    If,
    Then,
    Else,
    Case,
    Of,
    Fn,
    Type,
    Alias,
    Pub,
    Import,
    As,
    Exposing,
    External,
    Infix,
    When,
    True,
    False,
}

/// Keyword spellings, matched against the full text of a scanned
/// identifier run (not tried as standalone literals during scanning).
const KEYWORDS: &[(&str, Keyword)] = &[
    ("let", Keyword::Let),
    ("in", Keyword::In),
    ("if", Keyword::If),
    ("then", Keyword::Then),
    ("else", Keyword::Else),
    ("case", Keyword::Case),
    ("of", Keyword::Of),
    ("fn", Keyword::Fn),
    ("type", Keyword::Type),
    ("alias", Keyword::Alias),
    ("pub", Keyword::Pub),
    ("import", Keyword::Import),
    ("as", Keyword::As),
    ("exposing", Keyword::Exposing),
    ("external", Keyword::External),
    ("infix", Keyword::Infix),
    ("when", Keyword::When),
    ("true", Keyword::True),
    ("false", Keyword::False),
];

/// Looks up `text` in the keyword table. Returns `None` for anything that
/// isn't a reserved word, including a prefix or superset of one.
pub fn kw_of(text: &str) -> Option<Keyword> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, kw)| *kw)
}

/// Single-character structural symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Pipe,
    Dot,
    Underscore,
}

const SYMBOLS: &[(&str, SymbolKind)] = &[
    ("(", SymbolKind::LParen),
    (")", SymbolKind::RParen),
    ("[", SymbolKind::LBracket),
    ("]", SymbolKind::RBracket),
    ("{", SymbolKind::LBrace),
    ("}", SymbolKind::RBrace),
    (",", SymbolKind::Comma),
    (":", SymbolKind::Colon),
    (";", SymbolKind::Semicolon),
    ("|", SymbolKind::Pipe),
    (".", SymbolKind::Dot),
    ("_", SymbolKind::Underscore),
];

/// Looks up a single-character symbol. Note `.` and `|` are also prefixes of
/// multi-character operators (`..`, `|>`); the operator recogniser runs
/// before the symbol recogniser so longer operators win.
pub fn sym_of(text: &str) -> Option<SymbolKind> {
    SYMBOLS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, sym)| *sym)
}

/// Operators, one or two characters wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    AndAnd,
    OrOr,
    FatArrow,
    Arrow,
    PipeForward,
    Concat,
    PlusPlus,
    DotDot,
}

/// Operator spellings in longest-first order, so that a literal-by-literal
/// trial naturally performs maximal munch: `==` is tried (and matches)
/// before `=` gets a chance to.
const OPERATORS: &[(&str, Operator)] = &[
    ("==", Operator::EqEq),
    ("!=", Operator::NotEq),
    ("<=", Operator::LtEq),
    (">=", Operator::GtEq),
    ("&&", Operator::AndAnd),
    ("||", Operator::OrOr),
    ("=>", Operator::FatArrow),
    ("->", Operator::Arrow),
    ("|>", Operator::PipeForward),
    ("<>", Operator::Concat),
    ("++", Operator::PlusPlus),
    ("..", Operator::DotDot),
    ("=", Operator::Eq),
    ("<", Operator::Lt),
    (">", Operator::Gt),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("*", Operator::Star),
    ("/", Operator::Slash),
    ("%", Operator::Percent),
];

/// Operator spellings, longest first. Exposed for the scanner to drive a
/// literal-by-literal trial over.
pub fn operator_table() -> &'static [(&'static str, Operator)] {
    OPERATORS
}

/// Identifiers are tagged by the case of their first letter, mirroring
/// Ren's convention of using case to distinguish value names from
/// constructor/type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    /// Starts with a lowercase letter or `_`.
    Lower,
    /// Starts with an uppercase letter.
    Upper,
}

/// Classifies an identifier's leading character. Returns `None` if `text`
/// doesn't start with an ASCII letter (the scanner guarantees this can't
/// happen for anything it hands here, but the check stays honest).
pub fn id_of(text: &str) -> Option<IdentKind> {
    let first = text.chars().next()?;
    if first.is_ascii_uppercase() {
        Some(IdentKind::Upper)
    } else if first.is_ascii_lowercase() || first == '_' {
        Some(IdentKind::Lower)
    } else {
        None
    }
}
