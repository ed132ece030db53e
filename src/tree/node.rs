//! The boolean expression tree: a closed algebraic type over
//! `Operand`/`And`/`Or`/`Not`, replacing the source's dict-subclass
//! tree nodes.

use crate::term::Term;

/// A node in the parsed boolean expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Operand(Term),
    And(Box<Tree>, Box<Tree>),
    Or(Box<Tree>, Box<Tree>),
    Not(Box<Tree>),
}

impl Tree {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Operand(_))
    }

    /// Direct children, left to right. Leaves have none.
    pub fn children(&self) -> Vec<&Tree> {
        match self {
            Tree::Operand(_) => Vec::new(),
            Tree::And(l, r) | Tree::Or(l, r) => vec![l.as_ref(), r.as_ref()],
            Tree::Not(c) => vec![c.as_ref()],
        }
    }

    /// All leaves in left-to-right depth-first order. When
    /// `ignore_negated` is set, any subtree rooted at a `Not` node is
    /// skipped entirely.
    pub fn leaves(&self, ignore_negated: bool) -> Vec<&Term> {
        let mut out = Vec::new();
        self.collect_leaves(ignore_negated, &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, ignore_negated: bool, out: &mut Vec<&'a Term>) {
        match self {
            Tree::Operand(term) => out.push(term),
            Tree::Not(child) => {
                if !ignore_negated {
                    child.collect_leaves(ignore_negated, out);
                }
            }
            Tree::And(l, r) | Tree::Or(l, r) => {
                l.collect_leaves(ignore_negated, out);
                r.collect_leaves(ignore_negated, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Field, Value};

    fn leaf(val: &str) -> Tree {
        Tree::Operand(Term::new(
            Field::Default(vec!["default".into()]),
            Value::PartialString(val.into()),
        ))
    }

    #[test]
    fn operand_is_leaf_with_no_children() {
        let t = leaf("x");
        assert!(t.is_leaf());
        assert!(t.children().is_empty());
    }

    #[test]
    fn not_has_single_child() {
        let t = Tree::Not(Box::new(leaf("x")));
        assert!(!t.is_leaf());
        assert_eq!(t.children().len(), 1);
    }

    #[test]
    fn leaves_skip_negated_subtrees_when_requested() {
        let t = Tree::And(
            Box::new(leaf("a")),
            Box::new(Tree::Not(Box::new(leaf("b")))),
        );
        assert_eq!(t.leaves(false).len(), 2);
        assert_eq!(t.leaves(true).len(), 1);
    }
}
