//! File parsers.
//!
//! - `json`: locale file discovery and JSON document decoding

pub mod json;
