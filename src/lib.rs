//! # queryon
//!
//! A configurable, extensible boolean query-language parser in the
//! style of Lucene/Gmail search syntax: `field:value`, quoted phrases,
//! ranges, comparisons, containers, and `AND`/`OR`/`NOT` combinators,
//! all over a grammar built from runtime configuration rather than a
//! fixed compile-time lexer.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! query      → immutable parsed-query value: stack/combine history, term access
//!   ↑
//! grammar    → Grammar: wires terms/keywords/operators into a recursive-descent parser
//!   ↑
//! tree       → boolean expression tree + the fold that builds it
//!   ↑
//! term       → typed Field/Value/Term and the TermParser conversion callbacks
//!   ↑
//! primitives → leaf recognizers (Primitive trait + 11 built-ins)
//!   ↑
//! registry   → keyed primitive-constructor table, the extension point
//!   ↑
//! base       → Position, byte-offset to line/column
//! ```

pub mod base;
pub mod error;
pub mod grammar;
pub mod primitives;
pub mod query;
pub mod registry;
pub mod term;
pub mod tree;

pub use base::Position;
pub use error::{ConfigError, QueryonError, Result};
pub use grammar::{Grammar, GrammarConfig, KeywordSpec, OperatorName, OperatorSpec, PrimitiveSpec};
pub use primitives::Primitive;
pub use query::Query;
pub use registry::Registry;
pub use term::{Field, Term, TermParser, Value};
pub use tree::Tree;
