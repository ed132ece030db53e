//! Boolean combinators: AND / OR / NOT, with their configured symbols
//! and implicit-application flag.

use crate::grammar::config::{OperatorName, OperatorSpec};

/// A single boolean combinator: its declared symbols, whether it's
/// allowed to appear as bare juxtaposition, and precedence is implied
/// by its position in [`crate::grammar::Grammar`]'s operator list
/// (earlier entries bind tighter).
#[derive(Debug, Clone)]
pub struct Operator {
    pub name: OperatorName,
    pub symbols: Vec<String>,
    pub implicit: bool,
}

impl Operator {
    pub fn new(name: OperatorName, symbols: Vec<String>, implicit: bool) -> Self {
        Self {
            name,
            symbols,
            implicit,
        }
    }

    pub fn from_spec(spec: &OperatorSpec) -> Self {
        Self::new(spec.name, spec.symbols.clone(), spec.implicit)
    }

    pub fn name_str(&self) -> &'static str {
        match self.name {
            OperatorName::Not => "not",
            OperatorName::And => "and",
            OperatorName::Or => "or",
        }
    }

    /// If one of this operator's symbols prefixes `input`, return its
    /// byte length. Single-character symbols match literally;
    /// multi-character (keyword-like) symbols match case-insensitively
    /// and must not be immediately followed by another word character
    /// (so `notable` isn't mistaken for `not` + `able`).
    pub fn match_symbol(&self, input: &str) -> Option<usize> {
        for symbol in &self.symbols {
            if symbol.chars().count() == 1 {
                if input.starts_with(symbol.as_str()) {
                    return Some(symbol.len());
                }
                continue;
            }

            if input.len() < symbol.len() {
                continue;
            }
            let (candidate, rest) = input.split_at(symbol.len());
            if candidate.eq_ignore_ascii_case(symbol) {
                let boundary_ok = rest
                    .chars()
                    .next()
                    .map(|c| !c.is_ascii_alphanumeric())
                    .unwrap_or(true);
                if boundary_ok {
                    return Some(symbol.len());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_char_symbol() {
        let op = Operator::new(OperatorName::Not, vec!["-".into()], false);
        assert_eq!(op.match_symbol("-name:x"), Some(1));
    }

    #[test]
    fn matches_keyword_symbol_case_insensitively() {
        let op = Operator::new(OperatorName::And, vec!["and".into()], false);
        assert_eq!(op.match_symbol("AND b:2"), Some(3));
    }

    #[test]
    fn keyword_symbol_does_not_match_inside_a_longer_word() {
        let op = Operator::new(OperatorName::Not, vec!["not".into()], false);
        assert_eq!(op.match_symbol("notable:x"), None);
    }
}
