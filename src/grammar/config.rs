//! In-memory grammar configuration: the shape a caller hands to
//! [`crate::grammar::Grammar::from_config`]. The crate never reads
//! configuration from disk; callers deserialize it themselves (the
//! optional `serde-config` feature derives `Deserialize` for these
//! types for that purpose).

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveSpec {
    pub class: String,
    pub precedence: Option<i32>,
    pub field_separator: Option<String>,
    pub range_symbol: Option<String>,
    pub delim: Option<String>,
    /// Any keys besides the ones above; a non-empty map here means the
    /// config named a parameter this primitive doesn't take.
    #[cfg_attr(feature = "serde-config", serde(flatten))]
    pub extra: FxHashMap<String, String>,
}

impl PrimitiveSpec {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            precedence: None,
            field_separator: None,
            range_symbol: None,
            delim: None,
            extra: FxHashMap::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = Some(precedence);
        self
    }
}

/// `{name, symbols, implicit}` — one entry in the operator table.
#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    pub name: OperatorName,
    pub symbols: Vec<String>,
    pub implicit: bool,
}

#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-config", serde(rename_all = "lowercase"))]
pub enum OperatorName {
    Not,
    And,
    Or,
}

/// A fixed keyword plus its constrained value set.
#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSpec {
    pub name: String,
    pub values: Vec<String>,
    pub allow_other_values: bool,
    pub separator: String,
}

impl KeywordSpec {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            allow_other_values: true,
            separator: ":".to_string(),
        }
    }
}

/// `default_fields` / `aliases` / `integer_as_string`.
#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermParserOptions {
    pub default_fields: Vec<String>,
    pub aliases: IndexMap<String, String>,
    pub integer_as_string: bool,
}

impl Default for TermParserOptions {
    fn default() -> Self {
        Self {
            default_fields: vec!["default".to_string()],
            aliases: IndexMap::new(),
            integer_as_string: false,
        }
    }
}

/// `{field, values}` — the field recognizer plus the precedence-ordered
/// value recognizers making up the generic term.
#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSpec {
    pub field: PrimitiveSpec,
    pub values: Vec<PrimitiveSpec>,
}

/// The full configuration consumed by [`crate::grammar::Grammar::from_config`].
#[cfg_attr(feature = "serde-config", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarConfig {
    pub term_parser: TermParserOptions,
    pub operators: Vec<OperatorSpec>,
    pub keywords: Vec<KeywordSpec>,
    pub term: Option<TermSpec>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            term_parser: TermParserOptions::default(),
            operators: vec![
                OperatorSpec {
                    name: OperatorName::Not,
                    symbols: vec!["!".into(), "-".into(), "not".into()],
                    implicit: false,
                },
                OperatorSpec {
                    name: OperatorName::And,
                    symbols: vec!["+".into(), "and".into()],
                    implicit: false,
                },
                OperatorSpec {
                    name: OperatorName::Or,
                    symbols: vec!["or".into()],
                    implicit: true,
                },
            ],
            keywords: Vec::new(),
            term: None,
        }
    }
}
