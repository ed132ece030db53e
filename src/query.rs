//! The parsed query as an immutable value: wraps the resolved boolean
//! tree plus the raw string it came from, and tracks the history of
//! `stack`/`combine` operations that built it up.
//!
//! Ported from `Query`: every operation that would mutate state instead
//! returns a new `Query`, and the tree itself is `Arc`-shared rather
//! than deep-copied, since it never changes after it is built.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::term::Term;
use crate::tree::Tree;

type HistoryEntry = (Arc<Tree>, Option<String>);

/// A parsed, immutable query. Combining two queries with [`Query::stack`]
/// or [`Query::combine`] produces a new `Query`; neither operand is
/// changed.
#[derive(Debug, Clone)]
pub struct Query {
    tree: Arc<Tree>,
    raw: Option<String>,
    stack_map: IndexMap<usize, HistoryEntry>,
    combine_map: IndexMap<usize, HistoryEntry>,
}

impl Query {
    pub fn new(tree: Tree, raw_query: impl Into<Option<String>>) -> Self {
        let tree = Arc::new(tree);
        let raw = raw_query.into();

        let mut stack_map = IndexMap::new();
        stack_map.insert(0, (tree.clone(), raw.clone()));
        let mut combine_map = IndexMap::new();
        combine_map.insert(0, (tree.clone(), raw.clone()));

        Self {
            tree,
            raw,
            stack_map,
            combine_map,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Every leaf term in the tree, left to right. When `ignore_negated`
    /// is set, negated subtrees are skipped entirely.
    pub fn terms(&self, ignore_negated: bool) -> Vec<&Term> {
        self.tree.leaves(ignore_negated)
    }

    /// The tree/raw-query pair recorded at `level` of the stack history.
    pub fn query_from_stack(&self, level: usize) -> Option<(&Tree, Option<&str>)> {
        self.stack_map
            .get(&level)
            .map(|(t, r)| (t.as_ref(), r.as_deref()))
    }

    /// The tree/raw-query pair recorded at `level` of the combine history.
    pub fn query_from_combine(&self, level: usize) -> Option<(&Tree, Option<&str>)> {
        self.combine_map
            .get(&level)
            .map(|(t, r)| (t.as_ref(), r.as_deref()))
    }

    /// AND this query with `other`, keeping both queries' combine
    /// history and appending `other` as the next stack layer.
    pub fn stack(&self, other: &Query) -> Query {
        let new_tree = Tree::And(
            Box::new((*self.tree).clone()),
            Box::new((*other.tree).clone()),
        );
        let new_raw = combine_raw(&self.raw, &other.raw, "and");

        let mut result = Query::new(new_tree, new_raw);
        result.combine_map.extend(self.combine_map.clone());
        result.stack_map.extend(self.stack_map.clone());
        result
            .stack_map
            .insert(self.stack_map.len(), (other.tree.clone(), other.raw.clone()));
        result
    }

    /// OR this query with `other`, keeping both queries' stack history
    /// and appending `other` as the next combine layer.
    pub fn combine(&self, other: &Query) -> Query {
        let new_tree = Tree::Or(
            Box::new((*self.tree).clone()),
            Box::new((*other.tree).clone()),
        );
        let new_raw = combine_raw(&self.raw, &other.raw, "or");

        let mut result = Query::new(new_tree, new_raw);
        result.stack_map.extend(self.stack_map.clone());
        result.combine_map.extend(self.combine_map.clone());
        result.combine_map.insert(
            self.combine_map.len(),
            (other.tree.clone(), other.raw.clone()),
        );
        result
    }
}

fn combine_raw(left: &Option<String>, right: &Option<String>, op: &str) -> Option<String> {
    match (left, right) {
        (Some(a), Some(b)) => Some(format!("({a}) {op} ({b})")),
        _ => None,
    }
}
