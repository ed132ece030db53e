//! Combines terms, keyword terms, and an operator table into a full
//! expression recognizer, and folds a match directly into a [`Tree`]-
//! producing parse.
//!
//! Construction happens once; `parse` is a pure recursive-descent walk
//! over a shared, immutable `Grammar`, so concurrent `parse` calls on
//! an `Arc<Grammar>` need no locking.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::{ConfigError, QueryonError};
use crate::grammar::config::{GrammarConfig, OperatorName, TermSpec};
use crate::grammar::operator::Operator;
use crate::grammar::term_builder::{KeywordRecognizer, TermRecognizer};
use crate::primitives::{Integer, IntegerRange, PartialString, Primitive, QuotedString};
use crate::query::Query;
use crate::registry::Registry;
use crate::term::TermParser;
use crate::tree::{self, OpKind, ParseElem};

/// Describes one configured value recognizer for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeInfo {
    pub type_name: &'static str,
    pub precedence: i32,
}

/// A fully constructed, immutable grammar: the field/value term
/// recognizer, zero or more keyword recognizers, and an operator table
/// in precedence order (index 0 binds tightest).
pub struct Grammar {
    operators: Vec<Operator>,
    keywords: Vec<KeywordRecognizer>,
    term: TermRecognizer,
    term_parser: Arc<TermParser>,
}

fn skip_ws(input: &str, pos: usize) -> usize {
    let mut idx = pos;
    for c in input[pos..].chars() {
        if c.is_whitespace() {
            idx += c.len_utf8();
        } else {
            break;
        }
    }
    idx
}

fn default_term(parser: &TermParser) -> TermRecognizer {
    let field: Arc<dyn Primitive> = Arc::new(crate::primitives::FieldPrimitive::default());
    let _ = parser;
    let values: Vec<Arc<dyn Primitive>> = vec![
        Arc::new(IntegerRange::default()),
        Arc::new(Integer::default()),
        Arc::new(PartialString::default()),
        Arc::new(QuotedString::default()),
    ];
    TermRecognizer::new(field, values)
}

impl Grammar {
    /// The default grammar: `not in {"!", "-", "not"}`, `and in {"+",
    /// "and"}`, `or in {"or"}` (implicit), and the default term (field?
    /// value, where value is int_range | integer | partial_string |
    /// quoted_string).
    pub fn default_grammar() -> Self {
        debug!("building default grammar");
        let term_parser = Arc::new(TermParser::default());
        let term = default_term(&term_parser);

        Self {
            operators: vec![
                Operator::new(OperatorName::Not, vec!["!".into(), "-".into(), "not".into()], false),
                Operator::new(OperatorName::And, vec!["+".into(), "and".into()], false),
                Operator::new(OperatorName::Or, vec!["or".into()], true),
            ],
            keywords: Vec::new(),
            term,
            term_parser,
        }
    }

    /// Build a grammar from an in-memory configuration, resolving
    /// primitive/term-parser classes against `registry`.
    pub fn from_config(config: &GrammarConfig, registry: &Registry) -> Result<Self, QueryonError> {
        debug!(
            operators = config.operators.len(),
            keywords = config.keywords.len(),
            "building grammar from config"
        );

        let term_parser = Arc::new(TermParser::new(
            config.term_parser.default_fields.clone(),
            config.term_parser.aliases.clone(),
            config.term_parser.integer_as_string,
        ));

        let operators = config.operators.iter().map(Operator::from_spec).collect();

        let term = match &config.term {
            Some(TermSpec { field, values }) => {
                let field_prim = registry.build_primitive(field)?;
                let value_prims = values
                    .iter()
                    .map(|spec| registry.build_primitive(spec))
                    .collect::<Result<Vec<_>, _>>()?;
                TermRecognizer::new(field_prim, value_prims)
            }
            None => default_term(&term_parser),
        };

        let mut keywords = Vec::with_capacity(config.keywords.len());
        let mut seen = std::collections::HashSet::new();
        for kw in &config.keywords {
            if !seen.insert(kw.name.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateKeyword(kw.name.clone()).into());
            }
            keywords.push(KeywordRecognizer::new(
                kw.name.clone(),
                kw.values.clone(),
                kw.allow_other_values,
                kw.separator.clone(),
            ));
        }

        Ok(Self {
            operators,
            keywords,
            term,
            term_parser,
        })
    }

    pub fn term_parser(&self) -> &TermParser {
        &self.term_parser
    }

    /// Operator names in precedence order (earlier binds tighter).
    pub fn operators(&self) -> Vec<&'static str> {
        self.operators.iter().map(Operator::name_str).collect()
    }

    pub fn keywords(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.name.clone()).collect()
    }

    pub fn value_types(&self) -> Vec<ValueTypeInfo> {
        self.term
            .values()
            .iter()
            .map(|v| ValueTypeInfo {
                type_name: v.name(),
                precedence: v.precedence(),
            })
            .collect()
    }

    pub fn field_type(&self) -> &'static str {
        self.term.field().name()
    }

    /// Append a keyword term. Rejects a name collision with an existing
    /// keyword, case-insensitively.
    pub fn add_keyword(mut self, keyword: KeywordRecognizer) -> Result<Self, QueryonError> {
        if self
            .keywords
            .iter()
            .any(|k| k.name.eq_ignore_ascii_case(&keyword.name))
        {
            return Err(ConfigError::DuplicateKeyword(keyword.name).into());
        }
        self.keywords.push(keyword);
        Ok(self)
    }

    /// Rebuild the term with an additional value recognizer, inserted
    /// in precedence order.
    pub fn add_value_type(mut self, value: Arc<dyn Primitive>) -> Self {
        let mut values = self.term.values().to_vec();
        values.push(value);
        self.term = TermRecognizer::new(self.term.field().clone(), values);
        self
    }

    /// Remove a value recognizer by name. Absent names are tolerated.
    pub fn remove_type(mut self, type_name: &str) -> Self {
        let values = self
            .term
            .values()
            .iter()
            .filter(|v| v.name() != type_name)
            .cloned()
            .collect();
        self.term = TermRecognizer::new(self.term.field().clone(), values);
        self
    }

    /// Remove an operator by name (`"not"`, `"and"`, `"or"`). Absent
    /// names are tolerated. After removing `not`, its symbols (e.g.
    /// `-`) are no longer treated as operators.
    pub fn remove_operator(mut self, operator_name: &str) -> Self {
        self.operators.retain(|op| op.name_str() != operator_name);
        self
    }

    /// Remove a keyword by name. Absent names are tolerated.
    pub fn remove_keyword(mut self, keyword_name: &str) -> Self {
        self.keywords
            .retain(|k| !k.name.eq_ignore_ascii_case(keyword_name));
        self
    }

    /// Parse `input` against this grammar, folding the result into a
    /// [`Query`]. When `fail_if_syntax_mismatch` is set, any unconsumed
    /// trailing input is a [`QueryonError::Syntax`].
    pub fn parse(&self, input: &str, fail_if_syntax_mismatch: bool) -> Result<Query, QueryonError> {
        trace!(%input, "parsing query");

        let (elem, end_pos) = self.parse_level(input, 0, 0)?;
        let end_pos = skip_ws(input, end_pos);

        if fail_if_syntax_mismatch && end_pos != input.len() {
            warn!(offset = end_pos, "trailing input did not match the grammar");
            return Err(QueryonError::syntax(
                "trailing input could not be parsed",
                end_pos,
            ));
        }

        let elements = match elem {
            ParseElem::Group(v) => v,
            other => vec![other],
        };
        let tree = tree::build(&elements)?;

        trace!("parse complete");
        Ok(Query::new(tree, input.to_string()))
    }

    fn parse_level(
        &self,
        input: &str,
        pos: usize,
        level: usize,
    ) -> Result<(ParseElem, usize), QueryonError> {
        if level >= self.operators.len() {
            return self.parse_atom(input, pos);
        }

        // `self.operators` is ordered tightest-binding-first (index 0 is
        // highest precedence, matching the introspection order). Recursion
        // has to enter at the loosest operator and descend toward the
        // tightest right before the atom, so walk the table back to front.
        let op = &self.operators[self.operators.len() - 1 - level];
        match op.name {
            OperatorName::Not => {
                let ws_pos = skip_ws(input, pos);
                if let Some(len) = op.match_symbol(&input[ws_pos..]) {
                    // Right-associative: the operand is parsed at this same
                    // level so repeated prefixes (`not not a:1`, `--a:1`)
                    // re-apply Not to its own output instead of falling
                    // straight through to the atom.
                    let (operand, new_pos) = self.parse_level(input, ws_pos + len, level)?;
                    return Ok((
                        ParseElem::Group(vec![ParseElem::Op(OpKind::Not), operand]),
                        new_pos,
                    ));
                }
                self.parse_level(input, pos, level + 1)
            }
            OperatorName::And | OperatorName::Or => {
                let kind = if op.name == OperatorName::And {
                    OpKind::And
                } else {
                    OpKind::Or
                };

                let (first, mut cur_pos) = self.parse_level(input, pos, level + 1)?;
                let mut elems = vec![first];

                loop {
                    let ws_pos = skip_ws(input, cur_pos);
                    if let Some(len) = op.match_symbol(&input[ws_pos..]) {
                        match self.parse_level(input, ws_pos + len, level + 1) {
                            Ok((next, new_pos)) => {
                                elems.push(ParseElem::Op(kind));
                                elems.push(next);
                                cur_pos = new_pos;
                                continue;
                            }
                            Err(_) => break,
                        }
                    } else if op.implicit {
                        match self.parse_level(input, ws_pos, level + 1) {
                            Ok((next, new_pos)) if new_pos > ws_pos => {
                                elems.push(ParseElem::Op(kind));
                                elems.push(next);
                                cur_pos = new_pos;
                                continue;
                            }
                            _ => break,
                        }
                    } else {
                        break;
                    }
                }

                if elems.len() == 1 {
                    Ok((elems.pop().unwrap(), cur_pos))
                } else {
                    Ok((ParseElem::Group(elems), cur_pos))
                }
            }
        }
    }

    fn parse_atom(&self, input: &str, pos: usize) -> Result<(ParseElem, usize), QueryonError> {
        let ws_pos = skip_ws(input, pos);
        let rest = &input[ws_pos..];

        if rest.starts_with('(') {
            let (inner, after_inner) = self.parse_level(input, ws_pos + 1, 0)?;
            let after_ws = skip_ws(input, after_inner);
            if !input[after_ws..].starts_with(')') {
                return Err(QueryonError::syntax("expected closing ')'", after_ws));
            }
            let group = match inner {
                ParseElem::Group(v) => ParseElem::Group(v),
                other => ParseElem::Group(vec![other]),
            };
            return Ok((group, after_ws + 1));
        }

        for kw in &self.keywords {
            if let Some((len, term)) = kw.try_match(rest, &self.term_parser) {
                return Ok((ParseElem::Leaf(term), ws_pos + len));
            }
        }

        if let Some((len, term)) = self.term.try_match(rest, &self.term_parser) {
            return Ok((ParseElem::Leaf(term), ws_pos + len));
        }

        Err(QueryonError::syntax("no term matched the input", ws_pos))
    }

    /// Reverse a parsed query back into query-language text. Loses the
    /// exact/partial distinction on quoted strings, the way the source
    /// format does, since both collapse to the same stored value.
    pub fn stringify(&self, query: &Query) -> String {
        let s = do_stringify(query.tree(), &self.term_parser);
        match s.strip_prefix('(') {
            Some(rest) if !rest.is_empty() => rest[..rest.len() - 1].to_string(),
            _ => s,
        }
    }
}

fn do_stringify(node: &crate::tree::Tree, term_parser: &TermParser) -> String {
    use crate::tree::Tree;
    match node {
        Tree::Operand(term) => leaf_to_string(term, term_parser),
        Tree::Not(child) => format!("not {}", do_stringify(child, term_parser)),
        Tree::And(l, r) => format!(
            "({} and {})",
            do_stringify(l, term_parser),
            do_stringify(r, term_parser)
        ),
        Tree::Or(l, r) => format!(
            "({} or {})",
            do_stringify(l, term_parser),
            do_stringify(r, term_parser)
        ),
    }
}

fn leaf_to_string(term: &crate::term::Term, term_parser: &TermParser) -> String {
    use crate::term::Field;
    match &term.field {
        Field::Default(_) => value_to_string(&term.val),
        Field::Keyword(name) => format!("{name}:{}", value_to_string(&term.val)),
        Field::Attribute(name) => {
            format!("{}:{}", reverse_alias(term_parser, name), value_to_string(&term.val))
        }
    }
}

/// First-seen alias wins on a collision, since `aliases()` iterates in
/// the configured insertion order.
fn reverse_alias(term_parser: &TermParser, field: &str) -> String {
    for (alias, canonical) in term_parser.aliases() {
        if canonical == field {
            return alias.clone();
        }
    }
    field.to_string()
}

fn value_to_string(value: &crate::term::Value) -> String {
    use crate::term::{ContainerItem, Value};
    match value {
        Value::Int(n) => n.to_string(),
        Value::ExactString(s) | Value::PartialString(s) | Value::KeywordValue(s) => s.clone(),
        Value::IntRange(a, b) => format!("{a}..{b}"),
        Value::GreaterThan(n) => format!(">{n}"),
        Value::GreaterEqualThan(n) => format!(">={n}"),
        Value::LowerThan(n) => format!("<{n}"),
        Value::LowerEqualThan(n) => format!("<={n}"),
        Value::Proximity(text, distance) => format!("\"{text}\"~{distance}"),
        Value::Container(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    ContainerItem::Int(n) => n.to_string(),
                    ContainerItem::PartialString(s) | ContainerItem::ExactString(s) => s.clone(),
                })
                .collect();
            format!("[{}]", parts.join(","))
        }
    }
}
