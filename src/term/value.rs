//! The leaf record produced by a successful term match.

/// Which field a [`Term`] targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// An explicit field name, or a colon-joined multi-field path (`"a:b"`).
    Attribute(String),
    /// No field was given; these are the configured default fields.
    Default(Vec<String>),
    /// Bound to a keyword term (`has:attachment`).
    Keyword(String),
}

/// The typed value carried by a [`Term`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    ExactString(String),
    PartialString(String),
    KeywordValue(String),
    IntRange(i64, i64),
    GreaterThan(i64),
    GreaterEqualThan(i64),
    LowerThan(i64),
    LowerEqualThan(i64),
    Container(Vec<ContainerItem>),
    /// Quoted text plus a proximity distance (`"big data"~3`). Not named
    /// in the original value-type vocabulary but grounded in the
    /// `string_proximity` primitive, which has no other value type to
    /// report through.
    Proximity(String, i64),
}

/// One element inside a `container` value (`field:[a,b,3]`).
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerItem {
    Int(i64),
    PartialString(String),
    ExactString(String),
}

/// A fully-populated leaf: the field being matched against and the value
/// it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub field: Field,
    pub val: Value,
}

impl Term {
    pub fn new(field: Field, val: Value) -> Self {
        Self { field, val }
    }

    /// The original string tag for `field_type`, preserved for callers
    /// that want the spec's vocabulary without re-introducing untyped
    /// storage.
    pub fn field_type_name(&self) -> &'static str {
        match &self.field {
            Field::Attribute(_) => "attribute",
            Field::Default(_) => "default",
            Field::Keyword(_) => "keyword",
        }
    }

    /// The original string tag for `val_type`.
    pub fn val_type_name(&self) -> &'static str {
        match &self.val {
            Value::Int(_) => "int",
            Value::ExactString(_) => "exact_string",
            Value::PartialString(_) => "partial_string",
            Value::KeywordValue(_) => "keyword_value",
            Value::IntRange(_, _) => "int_range",
            Value::GreaterThan(_) => "greater_than",
            Value::GreaterEqualThan(_) => "greater_equal_than",
            Value::LowerThan(_) => "lower_than",
            Value::LowerEqualThan(_) => "lower_equal_than",
            Value::Container(_) => "container",
            Value::Proximity(_, _) => "proximity",
        }
    }

    /// `field` rendered the way the original field-accessor would: a
    /// single string unless this term carries multiple default fields.
    pub fn field_display(&self) -> FieldDisplay<'_> {
        match &self.field {
            Field::Attribute(name) => FieldDisplay::Single(name),
            Field::Keyword(name) => FieldDisplay::Single(name),
            Field::Default(names) if names.len() == 1 => FieldDisplay::Single(&names[0]),
            Field::Default(names) => FieldDisplay::Multiple(names),
        }
    }
}

/// How a [`Term::field`] should be rendered: either a single name, or
/// (only for multi-default-field terms) a list of names.
pub enum FieldDisplay<'a> {
    Single(&'a str),
    Multiple(&'a [String]),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_name_matches_spec_vocabulary() {
        assert_eq!(
            Term::new(Field::Attribute("a".into()), Value::Int(1)).field_type_name(),
            "attribute"
        );
        assert_eq!(
            Term::new(Field::Default(vec!["default".into()]), Value::Int(1)).field_type_name(),
            "default"
        );
        assert_eq!(
            Term::new(Field::Keyword("has".into()), Value::KeywordValue("x".into()))
                .field_type_name(),
            "keyword"
        );
    }

    #[test]
    fn val_type_name_matches_spec_vocabulary() {
        assert_eq!(
            Term::new(Field::Attribute("a".into()), Value::IntRange(1, 2)).val_type_name(),
            "int_range"
        );
        assert_eq!(
            Term::new(Field::Attribute("a".into()), Value::Container(vec![])).val_type_name(),
            "container"
        );
    }

    #[test]
    fn default_field_display_collapses_singleton() {
        let t = Term::new(Field::Default(vec!["default".into()]), Value::Int(1));
        match t.field_display() {
            FieldDisplay::Single(name) => assert_eq!(name, "default"),
            FieldDisplay::Multiple(_) => panic!("expected Single"),
        }
    }
}
