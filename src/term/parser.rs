//! Callbacks that convert a primitive's raw match into a typed
//! [`Field`]/[`Value`]/[`Term`].

use indexmap::IndexMap;

use crate::primitives::CompOp;
use crate::term::value::{ContainerItem, Field, Term, Value};

/// Owns default-field substitution and field-name aliasing, and hosts
/// one conversion method per primitive kind.
#[derive(Debug, Clone)]
pub struct TermParser {
    default_fields: Vec<String>,
    aliases: IndexMap<String, String>,
    integer_as_string: bool,
}

impl Default for TermParser {
    fn default() -> Self {
        Self {
            default_fields: vec!["default".to_string()],
            aliases: IndexMap::new(),
            integer_as_string: false,
        }
    }
}

impl TermParser {
    pub fn new(
        default_fields: Vec<String>,
        aliases: IndexMap<String, String>,
        integer_as_string: bool,
    ) -> Self {
        Self {
            default_fields,
            aliases,
            integer_as_string,
        }
    }

    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.aliases
    }

    pub fn default_fields(&self) -> &[String] {
        &self.default_fields
    }

    pub fn integer_as_string(&self) -> bool {
        self.integer_as_string
    }

    /// The field a term takes when no explicit `field:` prefix was matched.
    pub fn default_field(&self) -> Field {
        Field::Default(self.default_fields.clone())
    }

    /// `field_name(":" field_name)*` segments, with the single-segment
    /// case resolved through the alias map. Multi-segment paths are
    /// joined verbatim; aliasing only ever targets a single field name.
    pub fn field_parse(&self, segments: Vec<String>) -> Field {
        if segments.len() == 1 {
            let name = &segments[0];
            let resolved = self.aliases.get(name).cloned().unwrap_or_else(|| name.clone());
            Field::Attribute(resolved)
        } else {
            Field::Attribute(segments.join(":"))
        }
    }

    pub fn integer_parse(&self, n: i64) -> Value {
        if self.integer_as_string {
            Value::PartialString(n.to_string())
        } else {
            Value::Int(n)
        }
    }

    pub fn partial_string_parse(&self, word: String) -> Value {
        Value::PartialString(word)
    }

    /// Quoted bodies containing `*` become `partial_string`; all others
    /// are `exact_string`.
    pub fn quoted_string_parse(&self, body: String) -> Value {
        if body.contains('*') {
            Value::PartialString(body)
        } else {
            Value::ExactString(body)
        }
    }

    pub fn integer_range_parse(&self, start: i64, end: i64) -> Value {
        Value::IntRange(start, end)
    }

    pub fn integer_comparison_parse(&self, op: CompOp, n: i64) -> Value {
        match op {
            CompOp::Lt => Value::LowerThan(n),
            CompOp::Le => Value::LowerEqualThan(n),
            CompOp::Gt => Value::GreaterThan(n),
            CompOp::Ge => Value::GreaterEqualThan(n),
        }
    }

    pub fn container_parse(&self, items: Vec<ContainerItem>) -> Value {
        Value::Container(items)
    }

    pub fn proximity_parse(&self, text: String, distance: i64) -> Value {
        Value::Proximity(text, distance)
    }

    /// `[keyword, ":", value]` -> a keyword-field term.
    pub fn keyword_parse(&self, keyword: String, value: String) -> Term {
        Term::new(Field::Keyword(keyword), Value::KeywordValue(value))
    }

    /// Merge a field payload (or the synthesized default field) with a
    /// value payload into a complete term.
    pub fn term_parse(&self, field: Option<Field>, value: Value) -> Term {
        Term::new(field.unwrap_or_else(|| self.default_field()), value)
    }
}
