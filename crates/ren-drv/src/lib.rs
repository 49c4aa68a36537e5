//! `renc` — a thin driver that lexes a single Ren source file and prints
//! the result.
//!
//! This crate exists to give [`ren_lex::lex`] a runnable entry point and a
//! place for ambient config/logging to live. It does not parse, type-check,
//! or generate code — those stages don't exist in this workspace.

pub mod error;

use std::fs;
use std::path::PathBuf;

use error::{DrvError, Result};

/// What `renc` should print for a given input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EmitKind {
    /// The coalesced token stream, one token per line.
    Tokens,
    /// The module-metadata record for the file, as JSON.
    Meta,
}

/// Resolved configuration for one `renc` invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub emit: EmitKind,
}

/// Reads `config.input`, lexes it, and returns the text `renc` should print
/// to stdout.
pub fn run(config: &Config) -> Result<String> {
    let source = fs::read_to_string(&config.input).map_err(|source| DrvError::Read {
        path: config.input.clone(),
        source,
    })?;

    tracing::info!(path = %config.input.display(), "lexing file");

    let raw_len = source.len();
    let tokens = ren_lex::lex(&source)?;

    tracing::debug!(
        bytes = raw_len,
        tokens = tokens.len(),
        "lexed source into token stream"
    );

    match config.emit {
        EmitKind::Tokens => Ok(render_tokens(&tokens)),
        EmitKind::Meta => render_meta(config).map_err(DrvError::from),
    }
}

fn render_tokens(tokens: &[ren_lex::Token]) -> String {
    tokens
        .iter()
        .map(|tok| format!("{tok:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a [`ren_util::ModuleMeta`] record for the file and renders it as
/// pretty JSON. There is no FFI-detection pass in this system, so
/// `usesFFI` is always `false`.
fn render_meta(config: &Config) -> std::result::Result<String, ren_util::ModuleMetaError> {
    let path = config.input.to_string_lossy().to_string();
    let name = config
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.clone());

    let meta = ren_util::ModuleMeta::new(name, path, String::new(), false);
    meta.to_json_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn emits_one_token_per_line() {
        let file = write_temp("let x = 1");
        let config = Config {
            input: file.path().to_path_buf(),
            emit: EmitKind::Tokens,
        };
        let out = run(&config).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn emits_meta_with_ffi_hardcoded_false() {
        let file = write_temp("let x = 1");
        let config = Config {
            input: file.path().to_path_buf(),
            emit: EmitKind::Meta,
        };
        let out = run(&config).unwrap();
        assert!(out.contains("\"usesFFI\": false"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let config = Config {
            input: PathBuf::from("/no/such/file.ren"),
            emit: EmitKind::Tokens,
        };
        assert!(matches!(run(&config), Err(DrvError::Read { .. })));
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        let file = write_temp("let x = \"oops");
        let config = Config {
            input: file.path().to_path_buf(),
            emit: EmitKind::Tokens,
        };
        assert!(matches!(run(&config), Err(DrvError::Lex(_))));
    }
}
