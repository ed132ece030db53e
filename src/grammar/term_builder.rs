//! Composes a field recognizer and a precedence-ordered set of value
//! recognizers into a term matcher, and builds keyword terms.

use std::sync::Arc;

use crate::primitives::{at_word_boundary, scan_word, Primitive, RawValue, SIMPLE_WORD_EXTRA};
use crate::term::{Field, Term, TermParser, Value};

/// Turn a primitive's raw payload into a typed value via the matching
/// `TermParser` callback.
fn convert_raw_value(raw: RawValue, parser: &TermParser) -> Option<Value> {
    match raw {
        RawValue::Integer(n) => Some(parser.integer_parse(n)),
        RawValue::Word(w) => Some(parser.partial_string_parse(w)),
        RawValue::Quoted(s) => Some(parser.quoted_string_parse(s)),
        RawValue::IntRange(a, b) => Some(parser.integer_range_parse(a, b)),
        RawValue::Comparison(op, n) => Some(parser.integer_comparison_parse(op, n)),
        RawValue::Container(items) => Some(parser.container_parse(items)),
        RawValue::Proximity(s, n) => Some(parser.proximity_parse(s, n)),
        RawValue::FieldPath(_) => None,
    }
}

/// `field? value` where `value` is the longest-or alternation of the
/// configured value recognizers, sorted by descending precedence.
/// Matching alternatives are tried by length, not first-hit, so e.g.
/// `18..30` is not cut short as the integer `18`.
pub struct TermRecognizer {
    field: Arc<dyn Primitive>,
    values: Vec<Arc<dyn Primitive>>,
}

impl TermRecognizer {
    pub fn new(field: Arc<dyn Primitive>, values: Vec<Arc<dyn Primitive>>) -> Self {
        let mut values = values;
        values.sort_by(|a, b| b.precedence().cmp(&a.precedence()));
        Self { field, values }
    }

    pub fn field(&self) -> &Arc<dyn Primitive> {
        &self.field
    }

    pub fn values(&self) -> &[Arc<dyn Primitive>] {
        &self.values
    }

    pub fn try_match(&self, input: &str, parser: &TermParser) -> Option<(usize, Term)> {
        let mut pos = 0usize;
        let mut field_payload: Option<Field> = None;

        if let Some(m) = self.field.try_match(input) {
            if let RawValue::FieldPath(segments) = m.value {
                field_payload = Some(parser.field_parse(segments));
                pos += m.len;
            }
        }

        let remaining = &input[pos..];
        let mut best: Option<(usize, Value)> = None;
        for value_prim in &self.values {
            if let Some(m) = value_prim.try_match(remaining) {
                if let Some(value) = convert_raw_value(m.value, parser) {
                    if best.as_ref().map(|(len, _)| m.len > *len).unwrap_or(true) {
                        best = Some((m.len, value));
                    }
                }
            }
        }

        let (value_len, value) = best?;
        pos += value_len;
        Some((pos, parser.term_parse(field_payload, value)))
    }
}

/// A fixed keyword followed by a separator and a constrained value set,
/// optionally unioned with a free `simple_word`.
pub struct KeywordRecognizer {
    pub name: String,
    values: Vec<String>,
    allow_other_values: bool,
    separator: String,
}

impl KeywordRecognizer {
    pub fn new(
        name: impl Into<String>,
        values: Vec<String>,
        allow_other_values: bool,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            allow_other_values,
            separator: separator.into(),
        }
    }

    pub fn try_match(&self, input: &str, parser: &TermParser) -> Option<(usize, Term)> {
        let name_len = self.name.len();
        if input.len() < name_len {
            return None;
        }
        let (candidate, rest) = input.split_at(name_len);
        if !candidate.eq_ignore_ascii_case(&self.name) {
            return None;
        }
        let rest = rest.strip_prefix(self.separator.as_str())?;

        let mut best: Option<(usize, String)> = None;
        for allowed in &self.values {
            if rest.len() >= allowed.len()
                && rest[..allowed.len()].eq_ignore_ascii_case(allowed)
                && at_word_boundary(&rest[allowed.len()..])
            {
                if best.as_ref().map(|(l, _)| allowed.len() > *l).unwrap_or(true) {
                    best = Some((allowed.len(), allowed.clone()));
                }
            }
        }

        if self.allow_other_values {
            if let Some((len, word)) = scan_word(rest, SIMPLE_WORD_EXTRA, true) {
                if best.as_ref().map(|(l, _)| len > *l).unwrap_or(true) {
                    best = Some((len, word));
                }
            }
        }

        let (value_len, value) = best?;
        let total = name_len + self.separator.len() + value_len;
        Some((total, parser.keyword_parse(self.name.clone(), value)))
    }
}
