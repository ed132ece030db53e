//! Explicit registry of primitive and term-parser constructors.
//!
//! Replaces the dynamic dotted-path class loading of the original
//! implementation: configurations reference primitives by short string
//! keys, which resolve against a fixed built-in table, extensible by
//! the caller before a grammar is built. This is the sole extension
//! point for adding custom recognizers.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, QueryonError};
use crate::grammar::config::PrimitiveSpec;
use crate::primitives::{
    Container, Field as FieldPrimitive, FieldName, Integer, IntegerComparison, IntegerRange,
    MultiField, PartialString, Primitive, QuotedString, SimpleWord, StringProximity,
};

/// Builds a boxed [`Primitive`] from a spec's precedence and extra
/// fields.
pub type PrimitiveCtor =
    Arc<dyn Fn(&PrimitiveSpec) -> Result<Arc<dyn Primitive>, QueryonError> + Send + Sync>;

/// Keyed lookup table for primitive constructors, seeded with built-ins
/// and extensible via [`Registry::register_primitive`].
#[derive(Clone)]
pub struct Registry {
    primitives: FxHashMap<&'static str, PrimitiveCtor>,
}

fn no_extra(spec: &PrimitiveSpec, class: &str) -> Result<(), QueryonError> {
    if spec.extra.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ExtraPrimitiveKeys {
            class: class.to_string(),
            keys: spec.extra.keys().cloned().collect(),
        }
        .into())
    }
}

impl Registry {
    /// An empty registry with no constructors at all.
    pub fn new() -> Self {
        Self {
            primitives: FxHashMap::default(),
        }
    }

    /// A registry seeded with the eleven built-in primitives.
    pub fn with_builtins() -> Self {
        let mut r = Self::new();

        r.register_primitive("simple_word", |spec| {
            no_extra(spec, "simple_word")?;
            Ok(Arc::new(SimpleWord::new(spec.precedence.unwrap_or(0))) as Arc<dyn Primitive>)
        });
        r.register_primitive("field_name", |spec| {
            no_extra(spec, "field_name")?;
            Ok(Arc::new(FieldName::new(spec.precedence.unwrap_or(0))) as Arc<dyn Primitive>)
        });
        r.register_primitive("partial_string", |spec| {
            no_extra(spec, "partial_string")?;
            Ok(Arc::new(PartialString::new(spec.precedence.unwrap_or(3))) as Arc<dyn Primitive>)
        });
        r.register_primitive("quoted_string", |spec| {
            no_extra(spec, "quoted_string")?;
            Ok(Arc::new(QuotedString::new(spec.precedence.unwrap_or(2))) as Arc<dyn Primitive>)
        });
        r.register_primitive("integer", |spec| {
            no_extra(spec, "integer")?;
            Ok(Arc::new(Integer::new(spec.precedence.unwrap_or(6))) as Arc<dyn Primitive>)
        });
        r.register_primitive("integer_range", |spec| {
            let symbol = spec.range_symbol.clone().unwrap_or_else(|| "..".to_string());
            no_extra(spec, "integer_range")?;
            Ok(Arc::new(IntegerRange::new(spec.precedence.unwrap_or(10), symbol)) as Arc<dyn Primitive>)
        });
        r.register_primitive("integer_comparison", |spec| {
            no_extra(spec, "integer_comparison")?;
            Ok(Arc::new(IntegerComparison::new(spec.precedence.unwrap_or(9))) as Arc<dyn Primitive>)
        });
        r.register_primitive("container", |spec| {
            let delim = spec
                .delim
                .clone()
                .and_then(|d| d.chars().next())
                .unwrap_or(',');
            no_extra(spec, "container")?;
            Ok(Arc::new(Container::new(spec.precedence.unwrap_or(8), delim)) as Arc<dyn Primitive>)
        });
        r.register_primitive("field", |spec| {
            let separator = spec
                .field_separator
                .clone()
                .unwrap_or_else(|| ":".to_string());
            no_extra(spec, "field")?;
            Ok(Arc::new(FieldPrimitive::new(spec.precedence.unwrap_or(11), separator)) as Arc<dyn Primitive>)
        });
        r.register_primitive("multi_field", |spec| {
            let separator = spec
                .field_separator
                .clone()
                .unwrap_or_else(|| ":".to_string());
            no_extra(spec, "multi_field")?;
            Ok(Arc::new(MultiField::new(spec.precedence.unwrap_or(12), separator)) as Arc<dyn Primitive>)
        });
        r.register_primitive("string_proximity", |spec| {
            no_extra(spec, "string_proximity")?;
            Ok(Arc::new(StringProximity::new(spec.precedence.unwrap_or(11))) as Arc<dyn Primitive>)
        });

        r
    }

    /// Register (or overwrite) a primitive constructor under `key`.
    pub fn register_primitive<F>(&mut self, key: &'static str, ctor: F)
    where
        F: Fn(&PrimitiveSpec) -> Result<Arc<dyn Primitive>, QueryonError> + Send + Sync + 'static,
    {
        self.primitives.insert(key, Arc::new(ctor));
    }

    pub fn build_primitive(&self, spec: &PrimitiveSpec) -> Result<Arc<dyn Primitive>, QueryonError> {
        let ctor = self
            .primitives
            .get(spec.class.as_str())
            .ok_or_else(|| ConfigError::UnknownRegistryKey(spec.class.clone()))?;
        ctor(spec)
    }

    pub fn has_primitive(&self, key: &str) -> bool {
        self.primitives.contains_key(key)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::config::PrimitiveSpec;

    #[test]
    fn builtins_cover_all_eleven_primitives() {
        let r = Registry::with_builtins();
        for key in [
            "simple_word",
            "field_name",
            "partial_string",
            "quoted_string",
            "integer",
            "integer_range",
            "integer_comparison",
            "container",
            "field",
            "multi_field",
            "string_proximity",
        ] {
            assert!(r.has_primitive(key), "missing builtin: {key}");
        }
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let r = Registry::with_builtins();
        let spec = PrimitiveSpec::new("not_a_real_primitive");
        let err = r.build_primitive(&spec).unwrap_err();
        assert!(matches!(
            err,
            QueryonError::Config(ConfigError::UnknownRegistryKey(_))
        ));
    }

    #[test]
    fn extra_keys_are_rejected() {
        let r = Registry::with_builtins();
        let mut spec = PrimitiveSpec::new("integer");
        spec.extra.insert("bogus".to_string(), "1".to_string());
        let err = r.build_primitive(&spec).unwrap_err();
        assert!(matches!(
            err,
            QueryonError::Config(ConfigError::ExtraPrimitiveKeys { .. })
        ));
    }
}
