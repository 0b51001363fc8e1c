//! The triple storage the reasoner reads from.
//!
//! The reasoner only needs insertion, wildcard pattern lookups and a namespace table.
//! [`MemoryStore`] provides them on top of an indexed [`Graph`].

use oxrdf::{Graph, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, TermRef, TripleRef};
use std::collections::BTreeMap;

/// A triple pattern where every unset field is a wildcard.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct TriplePattern<'a> {
    pub subject: Option<NamedOrBlankNodeRef<'a>>,
    pub predicate: Option<NamedNodeRef<'a>>,
    pub object: Option<TermRef<'a>>,
}

impl<'a> TriplePattern<'a> {
    /// The pattern matching every triple.
    #[inline]
    pub fn any() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<NamedOrBlankNodeRef<'a>>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Into<NamedNodeRef<'a>>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_object(mut self, object: impl Into<TermRef<'a>>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Checks if a triple is matched by this pattern.
    pub fn matches(&self, triple: TripleRef<'_>) -> bool {
        self.subject.is_none_or(|s| s == triple.subject)
            && self.predicate.is_none_or(|p| p == triple.predicate)
            && self.object.is_none_or(|o| o == triple.object)
    }
}

/// Indexed triple storage.
///
/// Lookups must return every matching triple, in any order.
/// An empty result is a valid answer, not an error.
pub trait TripleStore {
    /// Adds a triple. Returns `true` if it was not already present.
    fn insert(&mut self, triple: TripleRef<'_>) -> bool;

    /// Returns all the triples matching the pattern.
    fn triples_matching<'a>(&'a self, pattern: TriplePattern<'_>) -> Vec<TripleRef<'a>>;

    /// Returns the number of triples matching the pattern.
    fn count_matching(&self, pattern: TriplePattern<'_>) -> usize {
        self.triples_matching(pattern).len()
    }

    /// Declares a namespace prefix. It has no effect on reasoning.
    fn add_prefix(&mut self, prefix: &str, iri: NamedNodeRef<'_>);

    /// Returns the namespace bound to a prefix, if any.
    fn prefix_iri(&self, prefix: &str) -> Option<NamedNodeRef<'_>>;

    /// Returns the number of stored triples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`TripleStore`] backed by an [`oxrdf::Graph`].
///
/// ```
/// use oxrdf::vocab::rdfs;
/// use oxrdf::{NamedNodeRef, TripleRef};
/// use vocabreason::{MemoryStore, TriplePattern, TripleStore};
///
/// let dog = NamedNodeRef::new("http://example.com/Dog")?;
/// let animal = NamedNodeRef::new("http://example.com/Animal")?;
/// let mut store = MemoryStore::new();
/// store.insert(TripleRef::new(dog, rdfs::SUB_CLASS_OF, animal));
///
/// let parents = store.triples_matching(TriplePattern::any().with_subject(dog));
/// assert_eq!(parents.len(), 1);
/// assert_eq!(store.count_matching(TriplePattern::any().with_object(dog)), 0);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    graph: Graph,
    prefixes: BTreeMap<String, NamedNode>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The declared prefixes, ordered by prefix name.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, NamedNodeRef<'_>)> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_ref()))
    }
}

impl TripleStore for MemoryStore {
    fn insert(&mut self, triple: TripleRef<'_>) -> bool {
        self.graph.insert(triple)
    }

    fn triples_matching<'a>(&'a self, pattern: TriplePattern<'_>) -> Vec<TripleRef<'a>> {
        // Start from the most selective index, then filter on the remaining fields.
        if let Some(subject) = pattern.subject {
            self.graph
                .triples_for_subject(subject)
                .filter(|t| pattern.matches(*t))
                .collect()
        } else if let Some(object) = pattern.object {
            self.graph
                .triples_for_object(object)
                .filter(|t| pattern.matches(*t))
                .collect()
        } else if let Some(predicate) = pattern.predicate {
            self.graph.triples_for_predicate(predicate).collect()
        } else {
            self.graph.iter().collect()
        }
    }

    fn count_matching(&self, pattern: TriplePattern<'_>) -> usize {
        if let TriplePattern {
            subject: Some(subject),
            predicate: Some(predicate),
            object: Some(object),
        } = pattern
        {
            usize::from(self.graph.contains(TripleRef::new(subject, predicate, object)))
        } else {
            self.triples_matching(pattern).len()
        }
    }

    fn add_prefix(&mut self, prefix: &str, iri: NamedNodeRef<'_>) {
        self.prefixes.insert(prefix.into(), iri.into_owned());
    }

    fn prefix_iri(&self, prefix: &str) -> Option<NamedNodeRef<'_>> {
        self.prefixes.get(prefix).map(NamedNode::as_ref)
    }

    fn len(&self) -> usize {
        self.graph.len()
    }
}

/// The subject view of a term, if it can be the subject of a triple.
#[inline]
pub(crate) fn as_subject(term: TermRef<'_>) -> Option<NamedOrBlankNodeRef<'_>> {
    match term {
        TermRef::NamedNode(node) => Some(node.into()),
        TermRef::BlankNode(node) => Some(node.into()),
        TermRef::Literal(_) => None,
        #[cfg(feature = "rdf-12")]
        TermRef::Triple(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::{rdf, rdfs};
    use oxrdf::{BlankNodeRef, LiteralRef};

    const DOG: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Dog");
    const ANIMAL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Animal");
    const THING: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Thing");

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(TripleRef::new(DOG, rdfs::SUB_CLASS_OF, ANIMAL));
        store.insert(TripleRef::new(ANIMAL, rdfs::SUB_CLASS_OF, THING));
        store.insert(TripleRef::new(DOG, rdfs::LABEL, LiteralRef::new_simple_literal("dog")));
        store.insert(TripleRef::new(DOG, rdf::TYPE, rdfs::CLASS));
        store
    }

    #[test]
    fn insert_reports_novelty() {
        let mut store = MemoryStore::new();
        assert!(store.insert(TripleRef::new(DOG, rdfs::SUB_CLASS_OF, ANIMAL)));
        assert!(!store.insert(TripleRef::new(DOG, rdfs::SUB_CLASS_OF, ANIMAL)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn every_pattern_shape() {
        let store = store();
        let count = |pattern| store.count_matching(pattern);
        assert_eq!(count(TriplePattern::any()), 4);
        assert_eq!(count(TriplePattern::any().with_subject(DOG)), 3);
        assert_eq!(count(TriplePattern::any().with_predicate(rdfs::SUB_CLASS_OF)), 2);
        assert_eq!(count(TriplePattern::any().with_object(ANIMAL)), 1);
        assert_eq!(
            count(
                TriplePattern::any()
                    .with_subject(DOG)
                    .with_predicate(rdfs::SUB_CLASS_OF)
            ),
            1
        );
        assert_eq!(
            count(
                TriplePattern::any()
                    .with_predicate(rdfs::SUB_CLASS_OF)
                    .with_object(THING)
            ),
            1
        );
        assert_eq!(
            count(
                TriplePattern::any()
                    .with_subject(DOG)
                    .with_predicate(rdfs::SUB_CLASS_OF)
                    .with_object(THING)
            ),
            0
        );
        assert_eq!(
            count(
                TriplePattern::any()
                    .with_subject(DOG)
                    .with_predicate(rdf::TYPE)
                    .with_object(rdfs::CLASS)
            ),
            1
        );
    }

    #[test]
    fn missing_data_is_an_empty_answer() {
        let store = store();
        let pattern = TriplePattern::any().with_subject(BlankNodeRef::new_unchecked("nowhere"));
        assert!(store.triples_matching(pattern).is_empty());
        assert_eq!(store.count_matching(pattern), 0);
    }

    #[test]
    fn prefixes_are_kept_apart_from_triples() {
        let mut store = MemoryStore::new();
        store.add_prefix("ex", NamedNodeRef::new_unchecked("http://example.com/"));
        assert!(store.is_empty());
        assert_eq!(
            store.prefix_iri("ex"),
            Some(NamedNodeRef::new_unchecked("http://example.com/"))
        );
        assert_eq!(store.prefix_iri("foo"), None);
        assert_eq!(store.prefixes().count(), 1);
    }

    #[test]
    fn literals_have_no_subject_view() {
        assert!(as_subject(LiteralRef::new_simple_literal("dog").into()).is_none());
        assert_eq!(as_subject(DOG.into()), Some(DOG.into()));
    }
}
