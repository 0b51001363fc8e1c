//! Reflexive-transitive closures of the subsumption relations.
//!
//! Traversals are iterative and keep a visited set keyed on the term,
//! so cyclic hierarchies terminate and each edge is followed at most once.

use crate::relation::RelationKind;
use crate::store::{TriplePattern, TripleStore, as_subject};
use oxrdf::{Term, TermRef};
use rustc_hash::FxHashSet;
use std::fmt;

/// The side of an edge a traversal walks towards.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    /// From a subject to the objects it points at (`subject kind ?parent`).
    Ancestors,
    /// From an object to the subjects pointing at it (`?child kind object`).
    Descendants,
}

/// A closure laid out as a tree of direct edges.
///
/// The root is the queried term and each branch is a direct neighbour
/// carrying its own closure beneath it.
/// A term reached a second time is listed again as a leaf without being expanded.
///
/// The order of branches follows the store iteration order and is not stable.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Hierarchy {
    node: Term,
    branches: Vec<Hierarchy>,
}

impl Hierarchy {
    #[inline]
    pub fn leaf(node: impl Into<Term>) -> Self {
        Self {
            node: node.into(),
            branches: Vec::new(),
        }
    }

    #[inline]
    pub fn node(&self) -> TermRef<'_> {
        self.node.as_ref()
    }

    #[inline]
    pub fn branches(&self) -> &[Self] {
        &self.branches
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Depth-first, pre-order walk over every listed term, the root first.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of listed terms, repeated ones included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Looks for a term anywhere in the tree.
    pub fn contains<'b>(&self, term: impl Into<TermRef<'b>>) -> bool {
        let term = term.into();
        self.iter().any(|node| node == term)
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.node)?;
        for branch in &self.branches {
            write!(f, ", {branch}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a Hierarchy {
    type Item = TermRef<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the terms of a [`Hierarchy`].
pub struct Iter<'a> {
    stack: Vec<&'a Hierarchy>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = TermRef<'a>;

    fn next(&mut self) -> Option<TermRef<'a>> {
        let current = self.stack.pop()?;
        self.stack.extend(current.branches.iter().rev());
        Some(current.node.as_ref())
    }
}

/// Builds the closure tree of `start` under `kind`.
///
/// A term without edges yields a single leaf holding itself.
pub fn hierarchy(
    store: &impl TripleStore,
    kind: RelationKind,
    start: TermRef<'_>,
    direction: Direction,
) -> Hierarchy {
    let mut arena = Arena::new(start);
    for neighbour in neighbours(store, kind, start, direction) {
        arena.push(neighbour, None);
    }
    // Breadth-first over the arena: every pushed term has a greater index than its parent.
    let mut cursor = 0;
    while cursor < arena.trees.len() {
        if arena.expandable[cursor] {
            for neighbour in neighbours(store, kind, arena.trees[cursor].node(), direction) {
                arena.push(neighbour, Some(cursor));
            }
        }
        cursor += 1;
    }
    arena.assemble(start)
}

/// Checks if `target` is in the reflexive-transitive closure of `subject` under `kind`.
///
/// Returns on the first match without building the whole closure.
pub fn is_subsumed_by(
    store: &impl TripleStore,
    kind: RelationKind,
    subject: TermRef<'_>,
    target: TermRef<'_>,
) -> bool {
    if subject == target {
        return true;
    }
    let mut todo = vec![subject.into_owned()];
    let mut all = todo.iter().cloned().collect::<FxHashSet<_>>();
    while let Some(current) = todo.pop() {
        for neighbour in neighbours(store, kind, current.as_ref(), Direction::Ancestors) {
            if neighbour == target {
                return true;
            }
            let neighbour = neighbour.into_owned();
            if all.insert(neighbour.clone()) {
                todo.push(neighbour);
            }
        }
    }
    false
}

/// All the terms of the reflexive-transitive closure of `start`, without duplicates.
pub fn closure(
    store: &impl TripleStore,
    kind: RelationKind,
    start: TermRef<'_>,
    direction: Direction,
) -> FxHashSet<Term> {
    let mut todo = vec![start.into_owned()];
    let mut all = todo.iter().cloned().collect::<FxHashSet<_>>();
    while let Some(current) = todo.pop() {
        for neighbour in neighbours(store, kind, current.as_ref(), direction) {
            let neighbour = neighbour.into_owned();
            if all.insert(neighbour.clone()) {
                todo.push(neighbour);
            }
        }
    }
    all
}

fn neighbours<'a>(
    store: &'a impl TripleStore,
    kind: RelationKind,
    node: TermRef<'_>,
    direction: Direction,
) -> Vec<TermRef<'a>> {
    let pattern = TriplePattern::any().with_predicate(kind.predicate());
    match direction {
        Direction::Ancestors => {
            let Some(subject) = as_subject(node) else {
                return Vec::new();
            };
            store
                .triples_matching(pattern.with_subject(subject))
                .into_iter()
                .map(|t| t.object)
                .collect()
        }
        Direction::Descendants => store
            .triples_matching(pattern.with_object(node))
            .into_iter()
            .map(|t| t.subject.into())
            .collect(),
    }
}

/// Flat storage of a tree under construction.
struct Arena {
    trees: Vec<Hierarchy>,
    parents: Vec<Option<usize>>,
    expandable: Vec<bool>,
    visited: FxHashSet<Term>,
}

impl Arena {
    fn new(root: TermRef<'_>) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root.into_owned());
        Self {
            trees: Vec::new(),
            parents: Vec::new(),
            expandable: Vec::new(),
            visited,
        }
    }

    /// `None` as parent means the root.
    fn push(&mut self, node: TermRef<'_>, parent: Option<usize>) {
        let node = node.into_owned();
        self.expandable.push(self.visited.insert(node.clone()));
        self.trees.push(Hierarchy::leaf(node));
        self.parents.push(parent);
    }

    fn assemble(mut self, root: TermRef<'_>) -> Hierarchy {
        let mut root = Hierarchy::leaf(root);
        // Children come after their parent so popping from the end attaches complete subtrees.
        while let (Some(mut tree), Some(parent)) = (self.trees.pop(), self.parents.pop()) {
            tree.branches.reverse();
            match parent {
                Some(parent) => self.trees[parent].branches.push(tree),
                None => root.branches.push(tree),
            }
        }
        root.branches.reverse();
        root
    }
}
