//! Folds the grammar engine's flat, parenthesis-aware token sequence
//! into a strict binary boolean tree.
//!
//! Ported from `QueryParser.parse_elements`: a recursive stack-based
//! fold. Each operator token pops its left operand (if it has one) off
//! the stack before being pushed as "pending"; each operand attaches to
//! whatever pending operator (or nested pending chain) sits below it,
//! cascading upward exactly once per attach so a completed subtree can
//! immediately satisfy an outer operator waiting for its right operand.

use crate::error::QueryonError;
use crate::tree::elem::{OpKind, ParseElem};
use crate::tree::node::Tree;

enum StackItem {
    Operand(Tree),
    Pending { kind: OpKind, left: Option<Tree> },
}

fn has_left_operand(kind: OpKind) -> bool {
    !matches!(kind, OpKind::Not)
}

/// Build a [`Tree`] from the flat element sequence produced by the
/// grammar engine.
pub fn build(elements: &[ParseElem]) -> Result<Tree, QueryonError> {
    let mut stack = Vec::new();
    fold(elements, &mut stack)?;

    match stack.pop() {
        Some(StackItem::Operand(tree)) if stack.is_empty() => Ok(tree),
        Some(_) => Err(QueryonError::TreeConstruction(
            "parse result left an incomplete operator on the stack".to_string(),
        )),
        None => Err(QueryonError::TreeConstruction(
            "parse result produced no tree".to_string(),
        )),
    }
}

fn fold(elements: &[ParseElem], stack: &mut Vec<StackItem>) -> Result<(), QueryonError> {
    for element in elements {
        match element {
            ParseElem::Op(kind) => push_operator(stack, *kind)?,
            ParseElem::Leaf(term) => attach_operand(stack, Tree::Operand(term.clone()))?,
            ParseElem::Group(sub) => {
                let mut sub_stack = Vec::new();
                fold(sub, &mut sub_stack)?;
                let resolved = match sub_stack.pop() {
                    Some(StackItem::Operand(tree)) if sub_stack.is_empty() => tree,
                    _ => {
                        return Err(QueryonError::TreeConstruction(
                            "nested group did not fold to a single tree".to_string(),
                        ))
                    }
                };
                attach_operand(stack, resolved)?;
            }
        }
    }
    Ok(())
}

fn push_operator(stack: &mut Vec<StackItem>, kind: OpKind) -> Result<(), QueryonError> {
    let left = if has_left_operand(kind) {
        match stack.pop() {
            Some(StackItem::Operand(tree)) => Some(tree),
            _ => {
                return Err(QueryonError::TreeConstruction(format!(
                    "{kind:?} operator is missing its left operand"
                )))
            }
        }
    } else {
        None
    };
    stack.push(StackItem::Pending { kind, left });
    Ok(())
}

/// Attach `operand` to whatever sits on top of the stack: nothing (it
/// becomes the sole stack item), a pending operator (completing it,
/// then cascading the completed subtree into the next pending operator
/// below, if any), or a bare operand (a malformed token stream).
fn attach_operand(stack: &mut Vec<StackItem>, operand: Tree) -> Result<(), QueryonError> {
    let Some(top) = stack.pop() else {
        stack.push(StackItem::Operand(operand));
        return Ok(());
    };

    match top {
        StackItem::Operand(_) => Err(QueryonError::TreeConstruction(
            "two operands in a row with no operator between them".to_string(),
        )),
        StackItem::Pending { kind, left } => {
            let completed = match kind {
                OpKind::Not => {
                    if left.is_some() {
                        return Err(QueryonError::NotAttach(
                            "cannot attach a second operand to a Not node".to_string(),
                        ));
                    }
                    Tree::Not(Box::new(operand))
                }
                OpKind::And => {
                    let left = left.ok_or_else(|| {
                        QueryonError::TreeConstruction("And operator missing left operand".into())
                    })?;
                    Tree::And(Box::new(left), Box::new(operand))
                }
                OpKind::Or => {
                    let left = left.ok_or_else(|| {
                        QueryonError::TreeConstruction("Or operator missing left operand".into())
                    })?;
                    Tree::Or(Box::new(left), Box::new(operand))
                }
            };

            if stack.is_empty() {
                stack.push(StackItem::Operand(completed));
                Ok(())
            } else {
                attach_operand(stack, completed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Field, Term, Value};

    fn leaf(v: &str) -> ParseElem {
        ParseElem::Leaf(Term::new(
            Field::Default(vec!["default".into()]),
            Value::PartialString(v.into()),
        ))
    }

    #[test]
    fn single_leaf() {
        let tree = build(&[leaf("a")]).unwrap();
        assert!(tree.is_leaf());
    }

    #[test]
    fn not_wraps_following_operand() {
        let tree = build(&[ParseElem::Op(OpKind::Not), leaf("a")]).unwrap();
        assert!(matches!(tree, Tree::Not(_)));
    }

    #[test]
    fn two_operands_with_no_operator_is_a_tree_construction_error() {
        let mut stack = Vec::new();
        let err = fold(&[leaf("a"), leaf("b")], &mut stack);
        assert!(matches!(err, Err(QueryonError::TreeConstruction(_))));
    }

    #[test]
    fn and_with_no_preceding_operand_is_a_tree_construction_error() {
        let err = build(&[ParseElem::Op(OpKind::And), leaf("a")]);
        assert!(matches!(err, Err(QueryonError::TreeConstruction(_))));
    }

    #[test]
    fn and_binds_left_to_right() {
        let tree = build(&[leaf("a"), ParseElem::Op(OpKind::And), leaf("b")]).unwrap();
        assert!(matches!(tree, Tree::And(_, _)));
    }

    #[test]
    fn precedence_and_binds_tighter_than_or() {
        // a AND b OR c  ->  Or(And(a,b), c)
        let tree = build(&[
            leaf("a"),
            ParseElem::Op(OpKind::And),
            leaf("b"),
            ParseElem::Op(OpKind::Or),
            leaf("c"),
        ])
        .unwrap();

        match tree {
            Tree::Or(left, right) => {
                assert!(matches!(*left, Tree::And(_, _)));
                assert!(right.is_leaf());
            }
            _ => panic!("expected Or root"),
        }
    }

    #[test]
    fn third_same_operator_input_rebalances_left_deep() {
        // a AND b AND c -> And(And(a,b), c)
        let tree = build(&[
            leaf("a"),
            ParseElem::Op(OpKind::And),
            leaf("b"),
            ParseElem::Op(OpKind::And),
            leaf("c"),
        ])
        .unwrap();

        match tree {
            Tree::And(left, right) => {
                assert!(matches!(*left, Tree::And(_, _)));
                assert!(right.is_leaf());
            }
            _ => panic!("expected And root"),
        }
    }

    #[test]
    fn nested_group_folds_before_attaching() {
        let group = ParseElem::Group(vec![leaf("a"), ParseElem::Op(OpKind::And), leaf("b")]);
        let tree = build(&[group, ParseElem::Op(OpKind::Or), leaf("c")]).unwrap();
        match tree {
            Tree::Or(left, right) => {
                assert!(matches!(*left, Tree::And(_, _)));
                assert!(right.is_leaf());
            }
            _ => panic!("expected Or root"),
        }
    }
}
