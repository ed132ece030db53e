//! End-to-end parsing scenarios against the default grammar and a few
//! reconfigured variants (aliases, container values, operator/type
//! removal).

use std::sync::Arc;

use indexmap::IndexMap;

use queryon::grammar::{GrammarConfig, KeywordSpec, TermParserOptions};
use queryon::primitives::Container;
use queryon::{Field, Grammar, Registry, Value};

#[test]
fn bare_word_is_a_default_field_partial_string() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse("texto", true).unwrap();
    let terms = query.terms(false);

    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].field, Field::Default(vec!["default".into()]));
    assert_eq!(terms[0].val, Value::PartialString("texto".into()));
    assert_eq!(terms[0].val_type_name(), "partial_string");
}

#[test]
fn leading_not_wraps_the_operand() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse("-texto", true).unwrap();

    assert!(matches!(query.tree(), queryon::Tree::Not(_)));
    assert_eq!(query.terms(false).len(), 1);
    assert!(query.terms(true).is_empty());
}

#[test]
fn bare_juxtaposition_is_an_implicit_or() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse(r#"a:"test" b:otro"#, true).unwrap();

    match query.tree() {
        queryon::Tree::Or(left, right) => {
            let lterm = match left.as_ref() {
                queryon::Tree::Operand(t) => t,
                _ => panic!("expected leaf"),
            };
            let rterm = match right.as_ref() {
                queryon::Tree::Operand(t) => t,
                _ => panic!("expected leaf"),
            };
            assert_eq!(lterm.field, Field::Attribute("a".into()));
            assert_eq!(lterm.val, Value::ExactString("test".into()));
            assert_eq!(rterm.field, Field::Attribute("b".into()));
            assert_eq!(rterm.val, Value::PartialString("otro".into()));
        }
        other => panic!("expected Or root, got {other:?}"),
    }
}

#[test]
fn and_binds_tighter_than_or() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse("a:test or b:otro + c:another", true).unwrap();

    match query.tree() {
        queryon::Tree::Or(left, right) => {
            assert!(left.is_leaf());
            assert!(matches!(right.as_ref(), queryon::Tree::And(_, _)));
        }
        other => panic!("expected Or root, got {other:?}"),
    }
}

#[test]
fn parenthesized_group_and_trailing_not_combine_correctly() {
    let grammar = Grammar::default_grammar();
    let query = grammar
        .parse(r#"(a:test + b:otro) c:another d:"xx" AND -e:0"#, true)
        .unwrap();

    // Root is an OR whose left child is the parenthesized AND joined with
    // c:another, and whose right child is the final AND of d:"xx" with NOT e:0.
    match query.tree() {
        queryon::Tree::Or(left, right) => {
            match left.as_ref() {
                queryon::Tree::Or(paren_and, c) => {
                    assert!(matches!(paren_and.as_ref(), queryon::Tree::And(_, _)));
                    assert!(c.is_leaf());
                }
                other => panic!("expected nested Or on the left, got {other:?}"),
            }
            match right.as_ref() {
                queryon::Tree::And(_, not_side) => {
                    assert!(matches!(not_side.as_ref(), queryon::Tree::Not(_)));
                }
                other => panic!("expected And as final conjunct, got {other:?}"),
            }
        }
        other => panic!("expected Or root, got {other:?}"),
    }

    assert_eq!(query.terms(false).len(), 5);
}

#[test]
fn integer_range_parses_as_int_range() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse("age:18..30", true).unwrap();
    let terms = query.terms(false);

    assert_eq!(terms[0].field, Field::Attribute("age".into()));
    assert_eq!(terms[0].val, Value::IntRange(18, 30));
    assert_eq!(terms[0].val_type_name(), "int_range");
}

#[test]
fn container_value_type_parses_a_bracketed_list() {
    let grammar = Grammar::default_grammar().add_value_type(Arc::new(Container::default()));
    let query = grammar.parse("field:[a,b,c]", true).unwrap();
    let terms = query.terms(false);

    assert_eq!(terms[0].field, Field::Attribute("field".into()));
    assert_eq!(terms[0].val_type_name(), "container");
}

#[test]
fn aliased_field_resolves_to_its_canonical_name() {
    let registry = Registry::with_builtins();
    let mut aliases = IndexMap::new();
    aliases.insert("id".to_string(), "__id__".to_string());

    let config = GrammarConfig {
        term_parser: TermParserOptions {
            aliases,
            ..TermParserOptions::default()
        },
        ..GrammarConfig::default()
    };
    let grammar = Grammar::from_config(&config, &registry).unwrap();

    let query = grammar.parse("id:xxx", true).unwrap();
    let terms = query.terms(false);
    assert_eq!(terms[0].field, Field::Attribute("__id__".into()));
}

#[test]
fn removing_not_lets_its_symbol_become_part_of_the_field_name() {
    let grammar = Grammar::default_grammar().remove_operator("not");
    let query = grammar.parse("-name:dummy", true).unwrap();
    let terms = query.terms(false);

    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].field, Field::Attribute("-name".into()));
}

#[test]
fn removing_integer_falls_back_to_partial_string() {
    let grammar = Grammar::default_grammar().remove_type("integer");
    let query = grammar.parse("number:127", true).unwrap();
    let terms = query.terms(false);

    assert_eq!(terms[0].val, Value::PartialString("127".into()));
    assert_eq!(terms[0].val_type_name(), "partial_string");
}

#[test]
fn keyword_term_takes_precedence_over_the_generic_term() {
    let registry = Registry::with_builtins();
    let mut config = GrammarConfig::default();
    config.keywords.push(KeywordSpec::new(
        "has",
        vec!["attachment".to_string(), "link".to_string()],
    ));
    let grammar = Grammar::from_config(&config, &registry).unwrap();

    let query = grammar.parse("has:attachment", true).unwrap();
    let terms = query.terms(false);
    assert_eq!(terms[0].field, Field::Keyword("has".into()));
    assert_eq!(terms[0].val, Value::KeywordValue("attachment".into()));
}

#[test]
fn stringify_round_trips_modulo_quoting_and_outer_parens() {
    let grammar = Grammar::default_grammar();
    let query = grammar.parse("a:test or b:otro + c:another", true).unwrap();
    let rendered = grammar.stringify(&query);
    let reparsed = grammar.parse(&rendered, true).unwrap();

    assert_eq!(query.tree(), reparsed.tree());
}

#[test]
fn stack_and_combine_do_not_mutate_their_operands() {
    let grammar = Grammar::default_grammar();
    let a = grammar.parse("a:1", true).unwrap();
    let b = grammar.parse("b:2", true).unwrap();

    let stacked = a.stack(&b);
    assert!(matches!(stacked.tree(), queryon::Tree::And(_, _)));
    assert_eq!(a.tree(), grammar.parse("a:1", true).unwrap().tree());

    let combined = a.combine(&b);
    assert!(matches!(combined.tree(), queryon::Tree::Or(_, _)));
}
