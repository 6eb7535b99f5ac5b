//! Glider - typed TypeScript accessors for JSON translations
//!
//! Glider compiles per-locale nested JSON message files into TypeScript
//! functions, one per message, that pick the value for the active locale
//! and fall back to the default locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `compiler`: Per-group pipeline and whole-project compile / check
//! - `config`: Configuration file loading and validation
//! - `core`: Message model, flattening, validation, identifiers, namespaces
//! - `emit`: TypeScript source generation
//! - `error`: Library error type
//! - `parsers`: Message directory scanning and JSON decoding

pub mod cli;
pub mod compiler;
pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod parsers;

pub use error::{Error, Result};
