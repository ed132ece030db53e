//! Error types for grammar construction and parsing.
//!
//! One top-level error enum per the five kinds the engine can raise,
//! each carrying a human-readable message and, where applicable, a
//! byte offset into the original input.

use thiserror::Error;

/// Top-level error produced by grammar construction or `Grammar::parse`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryonError {
    /// Input does not conform to the grammar, or trailing input remained
    /// under `fail_if_syntax_mismatch`.
    #[error("syntax error: {message}{}", offset.map(|o| format!(" at offset {o}")).unwrap_or_default())]
    Syntax {
        message: String,
        offset: Option<usize>,
    },

    /// The supplied configuration is ill-formed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The flat parse result was internally inconsistent. Should never
    /// occur with a correctly built grammar.
    #[error("tree construction error: {0}")]
    TreeConstruction(String),

    /// Attempted to attach a second operand to a `Not` node.
    #[error("cannot attach a second operand to a Not node: {0}")]
    NotAttach(String),

    /// Operator name outside `{and, or, not}` passed to the operator factory.
    #[error("factory error: {0}")]
    Factory(String),
}

impl QueryonError {
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        QueryonError::Syntax {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

/// Configuration-shaped failures, surfaced when building a [`crate::grammar::Grammar`]
/// or registering entries in the [`crate::registry::Registry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown registry key: {0}")]
    UnknownRegistryKey(String),

    #[error("parser has no method named {method} (requested by primitive {class})")]
    UnknownParseMethod { class: String, method: String },

    #[error("primitive spec for {class} has unexpected keys: {}", keys.join(", "))]
    ExtraPrimitiveKeys { class: String, keys: Vec<String> },

    #[error("grammar already has a keyword named {0}")]
    DuplicateKeyword(String),

    #[error("value passed to add_value_type must be a primitive recognizer")]
    NonPrimitiveValueType,
}

pub type Result<T> = std::result::Result<T, QueryonError>;
