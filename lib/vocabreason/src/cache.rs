use crate::relation::RelationKind;
use oxrdf::Term;
use rustc_hash::FxHashMap;

/// What happens to memoized answers when new triples are asserted.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum CachePolicy {
    /// An answer, once computed, is returned forever, even if later assertions would change it.
    ///
    /// All the triples a query depends on must therefore be asserted before the first query.
    #[default]
    WriteOnce,
    /// Assertions drop the answers they may change.
    ///
    /// A `rdf:type` assertion drops the answers about its subject.
    /// A subsumption assertion drops every answer of its kind,
    /// since the descendants of the subject are affected too.
    InvalidateOnAssert,
}

/// Counters of the memoized lookups.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

type Table = FxHashMap<Term, FxHashMap<Term, bool>>;

/// Memoized answers of the boolean queries, one table per [`RelationKind`].
///
/// Each table maps a subject to its bucket, which maps a candidate to the answer.
/// No eviction: the vocabularies bound the size, not the data volume.
#[derive(Debug, Default)]
pub struct MemoCache {
    tables: [Table; 3],
    stats: CacheStats,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure the subject has a bucket, without recording any answer.
    pub fn prime(&mut self, kind: RelationKind, subject: Term) {
        self.tables[kind.index()].entry(subject).or_default();
    }

    /// Returns the memoized answer, counting the lookup as a hit or a miss.
    pub fn lookup(&mut self, kind: RelationKind, subject: &Term, candidate: &Term) -> Option<bool> {
        let answer = self.tables[kind.index()]
            .get(subject)
            .and_then(|bucket| bucket.get(candidate))
            .copied();
        if answer.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        answer
    }

    /// Records an answer. An already recorded answer is kept.
    pub fn record(&mut self, kind: RelationKind, subject: Term, candidate: Term, answer: bool) -> bool {
        *self.tables[kind.index()]
            .entry(subject)
            .or_default()
            .entry(candidate)
            .or_insert(answer)
    }

    /// Forgets the answers about a subject, keeping its bucket.
    pub fn invalidate(&mut self, kind: RelationKind, subject: &Term) {
        if let Some(bucket) = self.tables[kind.index()].get_mut(subject) {
            bucket.clear();
        }
    }

    /// Forgets every answer of a kind, keeping the buckets.
    pub fn clear(&mut self, kind: RelationKind) {
        for bucket in self.tables[kind.index()].values_mut() {
            bucket.clear();
        }
    }

    /// Number of subjects with a bucket.
    pub fn buckets(&self, kind: RelationKind) -> usize {
        self.tables[kind.index()].len()
    }

    /// Number of memoized answers.
    pub fn entries(&self, kind: RelationKind) -> usize {
        self.tables[kind.index()].values().map(FxHashMap::len).sum()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn term(iri: &str) -> Term {
        NamedNode::new_unchecked(iri).into()
    }

    #[test]
    fn priming_creates_an_empty_bucket() {
        let mut cache = MemoCache::new();
        cache.prime(RelationKind::SubClassOf, term("ex:Dog"));
        cache.prime(RelationKind::SubClassOf, term("ex:Dog"));
        assert_eq!(cache.buckets(RelationKind::SubClassOf), 1);
        assert_eq!(cache.entries(RelationKind::SubClassOf), 0);
        assert_eq!(
            cache.lookup(RelationKind::SubClassOf, &term("ex:Dog"), &term("ex:Animal")),
            None
        );
    }

    #[test]
    fn answers_are_written_once() {
        let mut cache = MemoCache::new();
        let (dog, animal) = (term("ex:Dog"), term("ex:Animal"));
        assert!(!cache.record(RelationKind::SubClassOf, dog.clone(), animal.clone(), false));
        assert!(!cache.record(RelationKind::SubClassOf, dog.clone(), animal.clone(), true));
        assert_eq!(
            cache.lookup(RelationKind::SubClassOf, &dog, &animal),
            Some(false)
        );
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 0 });
    }

    #[test]
    fn tables_are_independent() {
        let mut cache = MemoCache::new();
        let (dog, animal) = (term("ex:Dog"), term("ex:Animal"));
        cache.record(RelationKind::SubClassOf, dog.clone(), animal.clone(), true);
        assert_eq!(cache.lookup(RelationKind::Type, &dog, &animal), None);
        assert_eq!(cache.lookup(RelationKind::SubPropertyOf, &dog, &animal), None);
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
    }

    #[test]
    fn invalidation_keeps_buckets() {
        let mut cache = MemoCache::new();
        let (dog, cat, animal) = (term("ex:Dog"), term("ex:Cat"), term("ex:Animal"));
        cache.record(RelationKind::Type, dog.clone(), animal.clone(), true);
        cache.record(RelationKind::Type, cat.clone(), animal.clone(), true);
        cache.invalidate(RelationKind::Type, &dog);
        assert_eq!(cache.lookup(RelationKind::Type, &dog, &animal), None);
        assert_eq!(cache.lookup(RelationKind::Type, &cat, &animal), Some(true));
        cache.clear(RelationKind::Type);
        assert_eq!(cache.entries(RelationKind::Type), 0);
        assert_eq!(cache.buckets(RelationKind::Type), 2);
    }
}
