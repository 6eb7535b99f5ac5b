//! Core translation pipeline.
//!
//! Each message group goes through the same ordered stages:
//!
//! 1. `flatten`: nested locale document to message records
//! 2. `aggregate`: per-locale records to one catalog keyed by path
//! 3. `validate`: cross-locale completeness
//! 4. `identifier` / `namespace`: accessor names and the namespace tree
//!
//! `accessor` holds the call semantics shared by the emitted code and
//! `glider lookup`.

pub mod accessor;
pub mod aggregate;
pub mod flatten;
pub mod identifier;
pub mod message;
pub mod namespace;
pub mod params;
pub mod validate;

pub use accessor::{Accessor, FixedLocale, LocaleSource, NoLocale, ParamValues};
pub use aggregate::aggregate;
pub use flatten::{find_duplicate_path, flatten, flatten_document};
pub use identifier::{IdentifierRegistry, identifier_for};
pub use message::{
    ArrayItemRef, MessageCatalog, MessageData, MessagePath, MessageRecord, Segment, value_kind,
};
pub use namespace::{NamespaceNode, build_namespace};
pub use validate::validate;
