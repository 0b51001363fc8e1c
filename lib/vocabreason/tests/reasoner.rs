#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{NamedNodeRef, Term, TermRef, TripleRef};
use rustc_hash::FxHashSet;
use std::cell::Cell;
use std::error::Error;
use vocabreason::vocab::{activitystreams, activitystreams_properties, asx};
use vocabreason::{
    CachePolicy, CacheStats, Hierarchy, IngestError, MemoryStore, Reasoner, ReasonerOptions,
    StreamFormat, TriplePattern, TripleStore, TripleStream,
};

const DOG: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Dog");
const ANIMAL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Animal");
const THING: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/Thing");
const FIDO: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/fido");

/// A store counting the pattern lookups it serves.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    lookups: Cell<usize>,
}

impl TripleStore for CountingStore {
    fn insert(&mut self, triple: TripleRef<'_>) -> bool {
        self.inner.insert(triple)
    }

    fn triples_matching<'a>(&'a self, pattern: TriplePattern<'_>) -> Vec<TripleRef<'a>> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.triples_matching(pattern)
    }

    fn count_matching(&self, pattern: TriplePattern<'_>) -> usize {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.count_matching(pattern)
    }

    fn add_prefix(&mut self, prefix: &str, iri: NamedNodeRef<'_>) {
        self.inner.add_prefix(prefix, iri);
    }

    fn prefix_iri(&self, prefix: &str) -> Option<NamedNodeRef<'_>> {
        self.inner.prefix_iri(prefix)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

fn empty() -> Reasoner {
    Reasoner::with_options(ReasonerOptions::default().without_baseline())
}

fn counting() -> Reasoner<CountingStore> {
    Reasoner::with_store(
        CountingStore::default(),
        ReasonerOptions::default().without_baseline(),
    )
}

fn dog_animal_thing() -> Reasoner {
    let mut reasoner = empty();
    reasoner
        .add(DOG, rdfs::SUB_CLASS_OF, ANIMAL)
        .add(ANIMAL, rdfs::SUB_CLASS_OF, THING);
    reasoner
}

fn flatten(hierarchy: &Hierarchy) -> FxHashSet<Term> {
    hierarchy.iter().map(TermRef::into_owned).collect()
}

fn terms(nodes: &[NamedNodeRef<'_>]) -> FxHashSet<Term> {
    nodes.iter().map(|n| Term::from(*n)).collect()
}

fn ntriples(triples: &[(NamedNodeRef<'_>, NamedNodeRef<'_>, NamedNodeRef<'_>)]) -> String {
    triples
        .iter()
        .map(|(s, p, o)| format!("{s} {p} {o} .\n"))
        .collect()
}

#[test]
fn subsumption_is_reflexive_without_store_lookups() {
    let reasoner = counting();
    assert!(reasoner.is_sub_class_of(DOG, DOG));
    assert!(reasoner.is_sub_property_of(rdfs::LABEL, rdfs::LABEL));
    assert_eq!(reasoner.store().lookups.get(), 0);
}

#[test]
fn direct_edge_implies_subsumption() {
    let mut reasoner = empty();
    reasoner
        .add(DOG, rdfs::SUB_CLASS_OF, ANIMAL)
        .add(rdfs::LABEL, rdfs::SUB_PROPERTY_OF, rdfs::COMMENT);
    assert!(reasoner.is_sub_class_of(DOG, ANIMAL));
    assert!(reasoner.is_sub_property_of(rdfs::LABEL, rdfs::COMMENT));
    assert!(!reasoner.is_sub_property_of(rdfs::COMMENT, rdfs::LABEL));
}

#[test]
fn subsumption_is_transitive() {
    let reasoner = dog_animal_thing();
    assert!(reasoner.is_sub_class_of(DOG, THING));
    assert!(!reasoner.is_sub_class_of(THING, DOG));
}

#[test]
fn relation_kinds_do_not_mix() {
    let mut reasoner = empty();
    reasoner.add(DOG, rdfs::SUB_CLASS_OF, ANIMAL);
    assert!(!reasoner.is_sub_property_of(DOG, ANIMAL));
    assert!(!reasoner.is_type_of(DOG, ANIMAL));
}

#[test]
fn second_query_is_served_from_the_cache() {
    let mut reasoner = counting();
    reasoner
        .add(DOG, rdfs::SUB_CLASS_OF, ANIMAL)
        .add(ANIMAL, rdfs::SUB_CLASS_OF, THING);
    let first = reasoner.is_sub_class_of(DOG, THING);
    let lookups = reasoner.store().lookups.get();
    assert!(lookups > 0);
    let second = reasoner.is_sub_class_of(DOG, THING);
    assert_eq!(first, second);
    assert_eq!(reasoner.store().lookups.get(), lookups);
    assert_eq!(reasoner.cache_stats(), CacheStats { hits: 1, misses: 1 });
}

#[test]
fn type_queries_are_memoized_too() {
    let mut reasoner = counting();
    reasoner.add(FIDO, rdf::TYPE, DOG);
    assert!(reasoner.is_type_of(FIDO, DOG));
    assert_eq!(reasoner.store().lookups.get(), 1);
    assert!(reasoner.is_type_of(FIDO, DOG));
    assert_eq!(reasoner.store().lookups.get(), 1);
}

#[test]
fn cached_false_stays_false_after_assertion() {
    let mut reasoner = empty();
    assert!(!reasoner.is_sub_class_of(DOG, ANIMAL));
    reasoner.add(DOG, rdfs::SUB_CLASS_OF, ANIMAL);
    assert!(!reasoner.is_sub_class_of(DOG, ANIMAL));
    // The store itself has the edge: a fresh query on another pair sees it.
    assert!(reasoner.descendant_classes_of(ANIMAL).contains(DOG));
}

#[test]
fn invalidating_policy_sees_later_assertions() {
    let mut reasoner = Reasoner::with_options(
        ReasonerOptions::default()
            .without_baseline()
            .with_cache_policy(CachePolicy::InvalidateOnAssert),
    );
    assert!(!reasoner.is_sub_class_of(DOG, ANIMAL));
    reasoner.add(DOG, rdfs::SUB_CLASS_OF, ANIMAL);
    assert!(reasoner.is_sub_class_of(DOG, ANIMAL));
}

#[test]
fn type_is_not_inferred_through_subclasses() {
    let mut reasoner = empty();
    reasoner
        .add(DOG, rdfs::SUB_CLASS_OF, ANIMAL)
        .add(FIDO, rdf::TYPE, DOG);
    assert!(reasoner.is_type_of(FIDO, DOG));
    assert!(!reasoner.is_type_of(FIDO, ANIMAL));
}

#[test]
fn streams_accumulate_across_calls() {
    let mut reasoner = empty();
    let mut outcomes = Vec::new();
    for data in [
        ntriples(&[(DOG, rdfs::SUB_CLASS_OF, ANIMAL)]),
        ntriples(&[(ANIMAL, rdfs::SUB_CLASS_OF, THING)]),
    ] {
        reasoner.use_stream(
            TripleStream::new(StreamFormat::NTriples, data.as_bytes()),
            |result| outcomes.push(result.map_err(|e| e.to_string())),
        );
    }
    assert_eq!(outcomes, [Ok(1), Ok(1)]);
    assert!(reasoner.is_sub_class_of(DOG, THING));
}

#[test]
fn turtle_stream_with_prefix_and_base() -> Result<(), Box<dyn Error>> {
    let data = "<Dog> rdfs:subClassOf <Animal> , <Pet> .\nex:fido a <Dog> .\n";
    let stream = TripleStream::new(StreamFormat::Turtle, data.as_bytes())
        .with_base_iri("http://example.com/")?
        .with_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#")?
        .with_prefix("ex", "http://example.com/")?;
    let mut reasoner = empty();
    assert_eq!(reasoner.ingest(stream)?, 3);
    assert!(reasoner.is_sub_class_of(DOG, ANIMAL));
    assert!(reasoner.is_type_of(FIDO, DOG));
    assert_eq!(reasoner.resolve("ex:Dog")?, DOG.into_owned());
    Ok(())
}

#[test]
fn turtle_prefixes_become_resolvable() -> Result<(), Box<dyn Error>> {
    let data = "@prefix ex: <http://example.com/> .\n@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\nex:Dog rdfs:subClassOf ex:Animal .\n";
    let mut reasoner = empty();
    reasoner.ingest(TripleStream::new(StreamFormat::Turtle, data.as_bytes()))?;
    let dog = reasoner.resolve("ex:Dog")?;
    assert_eq!(dog, DOG.into_owned());
    assert!(reasoner.is_sub_class_of(&dog, ANIMAL));
    Ok(())
}

#[test]
fn parse_error_is_reported_once_without_rollback() {
    let data = format!(
        "{}<http://example.com/Animal> <broken\n",
        ntriples(&[(DOG, rdfs::SUB_CLASS_OF, ANIMAL)])
    );
    let mut reasoner = empty();
    let mut calls = 0;
    reasoner.use_stream(
        TripleStream::new(StreamFormat::NTriples, data.as_bytes()),
        |result| {
            calls += 1;
            assert!(matches!(result, Err(IngestError::Parse(_))));
        },
    );
    assert_eq!(calls, 1);
    assert_eq!(reasoner.store().len(), 1);
    assert!(reasoner.is_sub_class_of(DOG, ANIMAL));
}

#[test]
fn ancestors_and_descendants_are_dual() {
    let mut reasoner = empty();
    let edges = [(DOG, ANIMAL), (ANIMAL, THING), (FIDO, DOG), (FIDO, THING)];
    for (subject, object) in edges {
        reasoner.add(subject, rdfs::SUB_CLASS_OF, object);
    }
    for (subject, object) in edges {
        assert!(reasoner.class_hierarchy(subject).contains(object));
        assert!(reasoner.descendant_classes_of(object).contains(subject));
    }
}

#[test]
fn dog_animal_thing_scenario() {
    let reasoner = dog_animal_thing();
    assert!(reasoner.is_sub_class_of(DOG, THING));
    assert_eq!(
        flatten(&reasoner.class_hierarchy(DOG)),
        terms(&[DOG, ANIMAL, THING])
    );
    assert_eq!(
        flatten(&reasoner.descendant_classes_of(THING)),
        terms(&[THING, ANIMAL, DOG])
    );
    assert!(!reasoner.is_sub_class_of(THING, DOG));
    assert_eq!(
        reasoner.class_hierarchy(DOG).to_string(),
        "[<http://example.com/Dog>, [<http://example.com/Animal>, [<http://example.com/Thing>]]]"
    );
}

#[test]
fn unknown_term_hierarchy_is_itself() {
    let reasoner = empty();
    let hierarchy = reasoner.property_hierarchy(rdfs::LABEL);
    assert!(hierarchy.is_leaf());
    assert_eq!(hierarchy.node(), TermRef::from(rdfs::LABEL));
    assert_eq!(reasoner.descendant_properties_of(rdfs::LABEL).len(), 1);
}

#[test]
fn property_hierarchy_of_the_baseline() {
    let reasoner = Reasoner::new();
    let hierarchy = reasoner.property_hierarchy(activitystreams_properties::ACTOR);
    assert!(hierarchy.contains(activitystreams_properties::ATTRIBUTED_TO));
    let descendants =
        reasoner.descendant_properties_of(activitystreams_properties::ATTRIBUTED_WITH);
    assert_eq!(
        flatten(&descendants),
        terms(&[
            activitystreams_properties::ATTRIBUTED_WITH,
            activitystreams_properties::ACTOR_OF,
            activitystreams_properties::AUTHOR_OF,
            activitystreams_properties::RESULT,
        ])
    );
}

#[test]
fn baseline_classifies_activity_streams() {
    let reasoner = Reasoner::new();
    assert!(reasoner.is_sub_class_of(activitystreams::PERSON, activitystreams::OBJECT));
    assert!(reasoner.is_sub_class_of(activitystreams::TENTATIVE_ACCEPT, activitystreams::ACTIVITY));
    assert!(reasoner.is_an_object(activitystreams::PERSON));
    assert!(!reasoner.is_an_object(activitystreams::BROWSER_VIEW));
    assert!(reasoner.is_intransitive(activitystreams::TRAVEL));
    assert!(!reasoner.is_intransitive(activitystreams::LIKE));
    assert!(reasoner.is_number(xsd::INTEGER));
    assert!(reasoner.is_number(asx::NUMBER));
    assert!(!reasoner.is_date(xsd::INTEGER));
    assert!(reasoner.is_language_property(activitystreams_properties::DISPLAY_NAME));
    assert!(reasoner.is_deprecated(activitystreams_properties::AUTHOR));
    assert!(!reasoner.is_functional(activitystreams_properties::AUTHOR));
    assert!(reasoner.is_object_property(activitystreams_properties::ACTOR));
    assert!(!reasoner.is_object_property(activitystreams_properties::DISPLAY_NAME));
}

#[test]
fn a_custom_store_receives_the_baseline() {
    let reasoner = Reasoner::with_store(CountingStore::default(), ReasonerOptions::default());
    assert!(!reasoner.store().is_empty());
    assert!(reasoner.is_a_link(activitystreams::MENTION));
}

#[cfg(feature = "async-tokio")]
#[tokio::test]
async fn async_ingestion() -> Result<(), Box<dyn Error>> {
    let data = ntriples(&[
        (DOG, rdfs::SUB_CLASS_OF, ANIMAL),
        (ANIMAL, rdfs::SUB_CLASS_OF, THING),
    ]);
    let mut reasoner = empty();
    let count = reasoner
        .ingest_tokio_async(TripleStream::new(StreamFormat::NTriples, data.as_bytes()))
        .await?;
    assert_eq!(count, 2);
    assert!(reasoner.is_sub_class_of(DOG, THING));
    Ok(())
}
