use crate::baseline;
use crate::cache::{CachePolicy, CacheStats, MemoCache};
use crate::closure::{self, Direction, Hierarchy};
use crate::error::IngestError;
use crate::ingest::{StreamFormat, TripleStream};
use crate::relation::RelationKind;
use crate::store::{MemoryStore, TriplePattern, TripleStore, as_subject};
use crate::vocab::{activitystreams, asx, owl};
use oxrdf::{
    BlankNode, BlankNodeRef, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef,
    NamedOrBlankNodeRef, Term, TermRef, Triple, TripleRef,
};
use oxttl::{NTriplesParser, TurtleParseError};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::io::Read;
use tracing::{debug, trace, warn};

/// Options of a [`Reasoner`].
///
/// ```
/// use vocabreason::{CachePolicy, ReasonerOptions};
///
/// let options = ReasonerOptions::default()
///     .without_baseline()
///     .with_cache_policy(CachePolicy::InvalidateOnAssert);
/// assert!(!options.baseline());
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
#[must_use]
pub struct ReasonerOptions {
    baseline: bool,
    cache_policy: CachePolicy,
}

impl Default for ReasonerOptions {
    #[inline]
    fn default() -> Self {
        Self {
            baseline: true,
            cache_policy: CachePolicy::default(),
        }
    }
}

impl ReasonerOptions {
    /// Starts from an empty store instead of the Activity Streams baseline schema.
    #[inline]
    pub fn without_baseline(mut self) -> Self {
        self.baseline = false;
        self
    }

    #[inline]
    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    #[inline]
    pub fn baseline(self) -> bool {
        self.baseline
    }

    #[inline]
    pub fn cache_policy(self) -> CachePolicy {
        self.cache_policy
    }
}

/// Values accepted as the object(s) of [`Reasoner::add`]: a single term or a sequence of terms.
pub trait IntoObjects {
    fn into_objects(self) -> Vec<Term>;
}

macro_rules! single_object {
    ($($t:ty),*) => {
        $(
            impl IntoObjects for $t {
                #[inline]
                fn into_objects(self) -> Vec<Term> {
                    vec![self.into()]
                }
            }
        )*
    };
}

single_object!(
    NamedNode,
    NamedNodeRef<'_>,
    BlankNode,
    BlankNodeRef<'_>,
    Literal,
    LiteralRef<'_>,
    Term,
    TermRef<'_>
);

impl<T: Into<Term>> IntoObjects for Vec<T> {
    #[inline]
    fn into_objects(self) -> Vec<Term> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Term>, const N: usize> IntoObjects for [T; N] {
    #[inline]
    fn into_objects(self) -> Vec<Term> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Term>> IntoObjects for &[T] {
    #[inline]
    fn into_objects(self) -> Vec<Term> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Answers subsumption and type membership questions about a vocabulary.
///
/// The reasoner owns a [`TripleStore`] and a memo of the boolean answers.
/// Asserted `rdfs:subClassOf`, `rdfs:subPropertyOf` and `rdf:type` triples are reasoned over,
/// every other triple is only stored.
///
/// With the default [`CachePolicy::WriteOnce`], an answer is computed on first query and kept
/// for the life of the reasoner: assert everything a query depends on before querying.
///
/// `rdf:type` is not inferred through subclasses:
/// an instance of a subclass is not reported as an instance of the superclass.
///
/// Usage example:
/// ```
/// use oxrdf::NamedNodeRef;
/// use oxrdf::vocab::rdfs;
/// use vocabreason::{Reasoner, ReasonerOptions};
///
/// let dog = NamedNodeRef::new("http://example.com/Dog")?;
/// let animal = NamedNodeRef::new("http://example.com/Animal")?;
/// let thing = NamedNodeRef::new("http://example.com/Thing")?;
///
/// let mut reasoner = Reasoner::with_options(ReasonerOptions::default().without_baseline());
/// reasoner
///     .add(dog, rdfs::SUB_CLASS_OF, animal)
///     .add(animal, rdfs::SUB_CLASS_OF, thing);
///
/// assert!(reasoner.is_sub_class_of(dog, thing));
/// assert!(!reasoner.is_sub_class_of(thing, dog));
/// assert!(reasoner.descendant_classes_of(thing).contains(dog));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub struct Reasoner<S = MemoryStore> {
    store: S,
    cache: RefCell<MemoCache>,
    options: ReasonerOptions,
}

impl Reasoner {
    /// A reasoner seeded with the Activity Streams baseline schema.
    pub fn new() -> Self {
        Self::with_options(ReasonerOptions::default())
    }

    pub fn with_options(options: ReasonerOptions) -> Self {
        Self::with_store(MemoryStore::new(), options)
    }
}

impl Default for Reasoner {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TripleStore> Reasoner<S> {
    /// A reasoner over a caller provided store.
    ///
    /// The baseline schema, if enabled, is asserted into it before returning.
    pub fn with_store(store: S, options: ReasonerOptions) -> Self {
        let mut reasoner = Self {
            store,
            cache: RefCell::new(MemoCache::new()),
            options,
        };
        if options.baseline {
            baseline::assert_into(&mut reasoner);
            debug!(triples = reasoner.store.len(), "baseline schema loaded");
        }
        reasoner
    }

    /// Asserts one triple per object.
    ///
    /// `objects` is either a single term or a sequence of terms.
    pub fn add<'a>(
        &mut self,
        subject: impl Into<NamedOrBlankNodeRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        objects: impl IntoObjects,
    ) -> &mut Self {
        let subject = subject.into();
        let predicate = predicate.into();
        let kind = RelationKind::from_predicate(predicate);
        for object in objects.into_objects() {
            self.store
                .insert(TripleRef::new(subject, predicate, object.as_ref()));
            if let Some(kind) = kind {
                self.on_assert(kind, subject);
            }
        }
        self
    }

    /// Asserts an already built triple.
    pub fn insert<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> &mut Self {
        let triple = triple.into();
        self.add(triple.subject, triple.predicate, triple.object)
    }

    /// Declares a namespace prefix. It has no effect on reasoning.
    pub fn declare<'a>(
        &mut self,
        prefix: impl AsRef<str>,
        iri: impl Into<NamedNodeRef<'a>>,
    ) -> &mut Self {
        self.store.add_prefix(prefix.as_ref(), iri.into());
        self
    }

    /// Resolves a `prefix:local` name through the declared prefixes, or parses an absolute IRI.
    ///
    /// `<...>` delimiters are accepted around absolute IRIs.
    pub fn resolve(&self, name: &str) -> Result<NamedNode, IriParseError> {
        if let Some(iri) = name.strip_prefix('<').and_then(|n| n.strip_suffix('>')) {
            return NamedNode::new(iri);
        }
        if let Some((prefix, local)) = name.split_once(':') {
            if let Some(namespace) = self.store.prefix_iri(prefix) {
                return NamedNode::new(format!("{}{local}", namespace.as_str()));
            }
        }
        NamedNode::new(name)
    }

    /// The superclasses of `subject`, as a tree of direct `rdfs:subClassOf` edges.
    pub fn class_hierarchy<'a>(&self, subject: impl Into<TermRef<'a>>) -> Hierarchy {
        self.hierarchy(RelationKind::SubClassOf, subject.into(), Direction::Ancestors)
    }

    /// The superproperties of `subject`, as a tree of direct `rdfs:subPropertyOf` edges.
    pub fn property_hierarchy<'a>(&self, subject: impl Into<TermRef<'a>>) -> Hierarchy {
        self.hierarchy(
            RelationKind::SubPropertyOf,
            subject.into(),
            Direction::Ancestors,
        )
    }

    /// The subclasses of `subject`, as a tree of reversed `rdfs:subClassOf` edges.
    pub fn descendant_classes_of<'a>(&self, subject: impl Into<TermRef<'a>>) -> Hierarchy {
        self.hierarchy(
            RelationKind::SubClassOf,
            subject.into(),
            Direction::Descendants,
        )
    }

    /// The subproperties of `subject`, as a tree of reversed `rdfs:subPropertyOf` edges.
    pub fn descendant_properties_of<'a>(&self, subject: impl Into<TermRef<'a>>) -> Hierarchy {
        self.hierarchy(
            RelationKind::SubPropertyOf,
            subject.into(),
            Direction::Descendants,
        )
    }

    /// Every term reachable from `subject` through `kind` edges, `subject` included.
    ///
    /// Unlike the hierarchy methods the result is flat and has no duplicates.
    pub fn closure_of<'a>(
        &self,
        kind: RelationKind,
        subject: impl Into<TermRef<'a>>,
        direction: Direction,
    ) -> FxHashSet<Term> {
        closure::closure(&self.store, kind, subject.into(), direction)
    }

    /// Checks if `subject` is `object` or one of its direct or transitive subclasses.
    pub fn is_sub_class_of<'a, 'b>(
        &self,
        subject: impl Into<TermRef<'a>>,
        object: impl Into<TermRef<'b>>,
    ) -> bool {
        self.is_subsumed_by(RelationKind::SubClassOf, subject.into(), object.into())
    }

    /// Checks if `subject` is `object` or one of its direct or transitive subproperties.
    pub fn is_sub_property_of<'a, 'b>(
        &self,
        subject: impl Into<TermRef<'a>>,
        object: impl Into<TermRef<'b>>,
    ) -> bool {
        self.is_subsumed_by(RelationKind::SubPropertyOf, subject.into(), object.into())
    }

    /// Checks if the triple `subject rdf:type type` has been asserted.
    ///
    /// Types are not inherited through `rdfs:subClassOf`.
    pub fn is_type_of<'a, 'b>(
        &self,
        subject: impl Into<TermRef<'a>>,
        r#type: impl Into<TermRef<'b>>,
    ) -> bool {
        let subject = subject.into();
        let r#type = r#type.into();
        self.memoized(RelationKind::Type, subject, r#type, || {
            as_subject(subject).is_some_and(|s| {
                self.store.count_matching(
                    TriplePattern::any()
                        .with_subject(s)
                        .with_predicate(RelationKind::Type.predicate())
                        .with_object(r#type),
                ) > 0
            })
        })
    }

    /// Checks if the class is not a kind of `as:Link`.
    pub fn is_an_object<'a>(&self, class: impl Into<TermRef<'a>>) -> bool {
        !self.is_a_link(class)
    }

    /// Checks if the class is `as:Link` or one of its subclasses.
    pub fn is_a_link<'a>(&self, class: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(class, activitystreams::LINK)
    }

    pub fn is_object_property<'a>(&self, property: impl Into<TermRef<'a>>) -> bool {
        self.is_type_of(property, owl::OBJECT_PROPERTY)
    }

    pub fn is_functional<'a>(&self, property: impl Into<TermRef<'a>>) -> bool {
        self.is_type_of(property, owl::FUNCTIONAL_PROPERTY)
    }

    pub fn is_deprecated<'a>(&self, property: impl Into<TermRef<'a>>) -> bool {
        self.is_type_of(property, owl::DEPRECATED_PROPERTY)
    }

    /// Checks if the values of the property are language tagged strings.
    pub fn is_language_property<'a>(&self, property: impl Into<TermRef<'a>>) -> bool {
        self.is_type_of(property, asx::LANGUAGE_PROPERTY)
    }

    /// Checks if the class is an activity without object.
    pub fn is_intransitive<'a>(&self, class: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(class, activitystreams::INTRANSITIVE_ACTIVITY)
    }

    pub fn is_possibly_ordered<'a>(&self, term: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(term, asx::POSSIBLY_ORDERED)
    }

    /// Checks if the datatype is numeric.
    pub fn is_number<'a>(&self, datatype: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(datatype, asx::NUMBER)
    }

    pub fn is_date<'a>(&self, datatype: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(datatype, asx::DATE)
    }

    pub fn is_boolean<'a>(&self, datatype: impl Into<TermRef<'a>>) -> bool {
        self.is_sub_class_of(datatype, asx::BOOLEAN)
    }

    /// Parses the stream and asserts its triples in order.
    ///
    /// Stops on the first error without retracting what was already asserted.
    /// Returns the number of triples read.
    ///
    /// The `@prefix` declarations of a Turtle stream are declared on the reasoner too,
    /// so [`resolve`](Self::resolve) understands the names the stream uses.
    pub fn ingest<R: Read>(&mut self, stream: TripleStream<R>) -> Result<u64, IngestError> {
        for (prefix, iri) in stream.prefixes() {
            self.store.add_prefix(prefix, iri.as_ref());
        }
        let turtle = stream.turtle_parser()?;
        let (format, reader) = stream.into_parts();
        match format {
            StreamFormat::NTriples => {
                self.assert_all(format, NTriplesParser::new().for_reader(reader))
            }
            StreamFormat::Turtle => {
                let mut parser = turtle.for_reader(reader);
                let result = self.assert_all(format, parser.by_ref());
                self.declare_parsed_prefixes(parser.prefixes());
                result
            }
        }
    }

    /// Ingests the stream and reports the outcome to `callback`, exactly once.
    ///
    /// ```
    /// use oxrdf::NamedNodeRef;
    /// use vocabreason::{Reasoner, ReasonerOptions, StreamFormat, TripleStream};
    ///
    /// let data = "<http://example.com/Dog> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.com/Animal> .";
    /// let mut reasoner = Reasoner::with_options(ReasonerOptions::default().without_baseline());
    /// reasoner.use_stream(
    ///     TripleStream::new(StreamFormat::NTriples, data.as_bytes()),
    ///     |result| assert_eq!(result.ok(), Some(1)),
    /// );
    /// assert!(reasoner.is_sub_class_of(
    ///     NamedNodeRef::new("http://example.com/Dog")?,
    ///     NamedNodeRef::new("http://example.com/Animal")?
    /// ));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn use_stream<R: Read>(
        &mut self,
        stream: TripleStream<R>,
        callback: impl FnOnce(Result<u64, IngestError>),
    ) -> &mut Self {
        callback(self.ingest(stream));
        self
    }

    /// Same as [`ingest`](Self::ingest) but reading from a tokio [`AsyncRead`](tokio::io::AsyncRead).
    #[cfg(feature = "async-tokio")]
    pub async fn ingest_tokio_async<R: tokio::io::AsyncRead + Unpin>(
        &mut self,
        stream: TripleStream<R>,
    ) -> Result<u64, IngestError> {
        for (prefix, iri) in stream.prefixes() {
            self.store.add_prefix(prefix, iri.as_ref());
        }
        let turtle = stream.turtle_parser()?;
        let (format, reader) = stream.into_parts();
        let mut count = 0;
        match format {
            StreamFormat::NTriples => {
                let mut parser = NTriplesParser::new().for_tokio_async_reader(reader);
                while let Some(triple) = parser.next().await {
                    self.assert_one(format, triple, &mut count)?;
                }
            }
            StreamFormat::Turtle => {
                let mut parser = turtle.for_tokio_async_reader(reader);
                while let Some(triple) = parser.next().await {
                    if let Err(error) = self.assert_one(format, triple, &mut count) {
                        self.declare_parsed_prefixes(parser.prefixes());
                        return Err(error);
                    }
                }
                self.declare_parsed_prefixes(parser.prefixes());
            }
        }
        debug!(%format, triples = count, "stream ingested");
        Ok(count)
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn options(&self) -> ReasonerOptions {
        self.options
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    fn assert_all(
        &mut self,
        format: StreamFormat,
        triples: impl Iterator<Item = Result<Triple, TurtleParseError>>,
    ) -> Result<u64, IngestError> {
        let mut count = 0;
        for triple in triples {
            self.assert_one(format, triple, &mut count)?;
        }
        debug!(%format, triples = count, "stream ingested");
        Ok(count)
    }

    fn assert_one(
        &mut self,
        format: StreamFormat,
        triple: Result<Triple, TurtleParseError>,
        count: &mut u64,
    ) -> Result<(), IngestError> {
        match triple {
            Ok(triple) => {
                self.insert(&triple);
                *count += 1;
                Ok(())
            }
            Err(error) => {
                warn!(%format, %error, asserted = *count, "stream ingestion aborted");
                Err(error.into())
            }
        }
    }

    /// `@prefix` declarations met in a Turtle stream.
    fn declare_parsed_prefixes<'a>(
        &mut self,
        prefixes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        for (prefix, iri) in prefixes {
            self.store.add_prefix(prefix, NamedNodeRef::new_unchecked(iri));
        }
    }

    fn on_assert(&mut self, kind: RelationKind, subject: NamedOrBlankNodeRef<'_>) {
        let subject = TermRef::from(subject).into_owned();
        let cache = self.cache.get_mut();
        match (self.options.cache_policy, kind) {
            (CachePolicy::WriteOnce, _) => (),
            (CachePolicy::InvalidateOnAssert, RelationKind::Type) => {
                cache.invalidate(kind, &subject);
            }
            (
                CachePolicy::InvalidateOnAssert,
                RelationKind::SubClassOf | RelationKind::SubPropertyOf,
            ) => cache.clear(kind),
        }
        cache.prime(kind, subject);
    }

    fn hierarchy(
        &self,
        kind: RelationKind,
        subject: TermRef<'_>,
        direction: Direction,
    ) -> Hierarchy {
        closure::hierarchy(&self.store, kind, subject, direction)
    }

    fn is_subsumed_by(
        &self,
        kind: RelationKind,
        subject: TermRef<'_>,
        object: TermRef<'_>,
    ) -> bool {
        self.memoized(kind, subject, object, || {
            closure::is_subsumed_by(&self.store, kind, subject, object)
        })
    }

    fn memoized(
        &self,
        kind: RelationKind,
        subject: TermRef<'_>,
        candidate: TermRef<'_>,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        let subject = subject.into_owned();
        let candidate = candidate.into_owned();
        let cached = self.cache.borrow_mut().lookup(kind, &subject, &candidate);
        if let Some(answer) = cached {
            return answer;
        }
        let answer = compute();
        trace!(%kind, %subject, %candidate, answer, "cache miss");
        self.cache
            .borrow_mut()
            .record(kind, subject, candidate, answer)
    }
}
