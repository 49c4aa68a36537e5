//! Coalesce pass: merges runs of adjacent `Comment` tokens and runs of
//! adjacent `Unknown` tokens produced by the raw token stream.
//!
//! Described declaratively as a right fold with a pending-accumulator
//! table; implemented here as a single forward left-to-right pass with one
//! pending-token slot, which is the equivalent "preferred in a systems
//! implementation" shape for this kind of run-length merge — each token
//! is looked at exactly once, and the pending slot is flushed whenever the
//! next token can't extend it.

use crate::token::Token;

pub fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut pending: Option<Token> = None;

    for token in tokens {
        pending = match (pending, token) {
            (Some(Token::Comment(mut acc)), Token::Comment(next)) => {
                acc.push('\n');
                acc.push_str(&next);
                Some(Token::Comment(acc))
            }
            (Some(Token::Unknown(mut acc)), Token::Unknown(next)) => {
                acc.push_str(&next);
                Some(Token::Unknown(acc))
            }
            (Some(prev), next) => {
                out.push(prev);
                Some(next)
            }
            (None, next) => Some(next),
        };
    }

    if let Some(last) = pending {
        out.push(last);
    }

    out
}
