//! Module metadata record shared across compilation stages.
//!
//! `ModuleMeta` describes a single compilation unit: where it lives, what
//! package it belongs to, and whether it touches the host JS runtime
//! through FFI. The lexer does not produce this record — it is handed down
//! from whatever assembles a module graph — but its wire format is part of
//! this crate's public contract, so it lives here rather than buried in a
//! downstream consumer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metadata describing a single module in a Ren package.
///
/// Serializes to/from JSON with camelCase field names:
///
/// ```json
/// {
///   "name": "Main",
///   "path": "src/Main.ren",
///   "pkgPath": "ren-lang/example",
///   "usesFFI": false
/// }
/// ```
///
/// All four fields are required in both directions: decoding an object
/// that omits any of them is an error, not a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// The module's declared name, e.g. `Main`.
    pub name: String,
    /// Filesystem path to the module's source file.
    pub path: String,
    /// Path of the package the module belongs to.
    #[serde(rename = "pkgPath")]
    pub pkg_path: String,
    /// Whether the module uses foreign-function interop with host JS.
    #[serde(rename = "usesFFI")]
    pub uses_ffi: bool,
}

impl ModuleMeta {
    /// Build a record directly from its fields.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        pkg_path: impl Into<String>,
        uses_ffi: bool,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            pkg_path: pkg_path.into(),
            uses_ffi,
        }
    }

    /// Parse a `ModuleMeta` from its JSON representation.
    ///
    /// Fails if the input isn't valid JSON, or is a JSON object missing one
    /// of `name`, `path`, `pkgPath`, or `usesFFI`.
    pub fn from_json(text: &str) -> Result<Self, ModuleMetaError> {
        serde_json::from_str(text).map_err(ModuleMetaError::from)
    }

    /// Serialize this record to its JSON representation.
    pub fn to_json(&self) -> Result<String, ModuleMetaError> {
        serde_json::to_string(self).map_err(ModuleMetaError::from)
    }

    /// Serialize this record to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModuleMetaError> {
        serde_json::to_string_pretty(self).map_err(ModuleMetaError::from)
    }
}

/// Errors that can occur encoding or decoding a [`ModuleMeta`] record.
#[derive(Debug, Error)]
pub enum ModuleMetaError {
    /// The JSON text was malformed, or an object was missing a required
    /// field (`name`, `path`, `pkgPath`, `usesFFI`).
    #[error("invalid module metadata: {0}")]
    Json(#[from] serde_json::Error),
}
