//! Builds a runtime grammar from configuration and parses query text
//! against it.

mod config;
mod engine;
mod operator;
mod term_builder;

pub use config::{
    GrammarConfig, KeywordSpec, OperatorName, OperatorSpec, PrimitiveSpec, TermParserOptions,
    TermSpec,
};
pub use engine::{Grammar, ValueTypeInfo};
pub use operator::Operator;
pub use term_builder::{KeywordRecognizer, TermRecognizer};
