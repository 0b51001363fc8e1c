//! The Activity Streams 2.0 schema every [`Reasoner`] starts from, unless disabled with
//! [`ReasonerOptions::without_baseline`](crate::ReasonerOptions::without_baseline).

use crate::reasoner::Reasoner;
use crate::store::TripleStore;
use crate::vocab::{
    activitystreams as classes, activitystreams_properties as properties, asx, interval, owl,
    social,
};
use oxrdf::NamedNodeRef;
use oxrdf::vocab::{rdf, rdfs, xsd};

type Edges = &'static [(NamedNodeRef<'static>, &'static [NamedNodeRef<'static>])];

const OBJECT: &[NamedNodeRef<'_>] = &[owl::OBJECT_PROPERTY];
const DATATYPE: &[NamedNodeRef<'_>] = &[owl::DATATYPE_PROPERTY];
const CLASS: &[NamedNodeRef<'_>] = &[owl::CLASS];
const FUNCTIONAL_OBJECT: &[NamedNodeRef<'_>] = &[owl::OBJECT_PROPERTY, owl::FUNCTIONAL_PROPERTY];
const FUNCTIONAL_DATATYPE: &[NamedNodeRef<'_>] =
    &[owl::DATATYPE_PROPERTY, owl::FUNCTIONAL_PROPERTY];
const DEPRECATED_OBJECT: &[NamedNodeRef<'_>] = &[owl::OBJECT_PROPERTY, owl::DEPRECATED_PROPERTY];
const DEPRECATED_DATATYPE: &[NamedNodeRef<'_>] =
    &[owl::DATATYPE_PROPERTY, owl::DEPRECATED_PROPERTY];
const DEPRECATED_FUNCTIONAL_DATATYPE: &[NamedNodeRef<'_>] = &[
    owl::DATATYPE_PROPERTY,
    owl::FUNCTIONAL_PROPERTY,
    owl::DEPRECATED_PROPERTY,
];
const LANGUAGE_PROPERTY: &[NamedNodeRef<'_>] = &[owl::DATATYPE_PROPERTY, asx::LANGUAGE_PROPERTY];

/// `rdfs:subClassOf` edges: datatype families, then the class tree.
const SUB_CLASS_OF: Edges = &[
    (properties::ITEMS, &[asx::POSSIBLY_ORDERED]),
    (xsd::FLOAT, &[asx::NUMBER]),
    (xsd::DECIMAL, &[asx::NUMBER]),
    (xsd::DOUBLE, &[asx::NUMBER]),
    (xsd::INTEGER, &[asx::NUMBER]),
    (xsd::NON_POSITIVE_INTEGER, &[asx::NUMBER]),
    (xsd::LONG, &[asx::NUMBER]),
    (xsd::NON_NEGATIVE_INTEGER, &[asx::NUMBER]),
    (xsd::NEGATIVE_INTEGER, &[asx::NUMBER]),
    (xsd::INT, &[asx::NUMBER]),
    (xsd::UNSIGNED_LONG, &[asx::NUMBER]),
    (xsd::POSITIVE_INTEGER, &[asx::NUMBER]),
    (xsd::SHORT, &[asx::NUMBER]),
    (xsd::UNSIGNED_INT, &[asx::NUMBER]),
    (xsd::BYTE, &[asx::NUMBER]),
    (xsd::UNSIGNED_SHORT, &[asx::NUMBER]),
    (xsd::UNSIGNED_BYTE, &[asx::NUMBER]),
    (xsd::DATE_TIME, &[asx::DATE]),
    (xsd::DATE, &[asx::DATE]),
    (xsd::BOOLEAN, &[asx::BOOLEAN]),
    (classes::ACCEPT, &[classes::RESPOND]),
    (classes::ACTIVITY, &[classes::OBJECT]),
    (classes::BLOCK, &[classes::IGNORE]),
    (classes::INTRANSITIVE_ACTIVITY, &[classes::ACTIVITY]),
    (classes::ACTOR, &[classes::OBJECT]),
    (classes::ACHIEVE, &[classes::OBJECT]),
    (classes::ADD, &[classes::ACTIVITY]),
    (classes::ALBUM, &[classes::COLLECTION]),
    (classes::ANNOUNCE, &[classes::ACTIVITY]),
    (classes::APPLICATION, &[classes::ACTOR]),
    (classes::ARRIVE, &[classes::INTRANSITIVE_ACTIVITY]),
    (classes::ARTICLE, &[classes::CONTENT]),
    (classes::ASSIGN, &[classes::ACTIVITY]),
    (classes::AUDIO, &[classes::DOCUMENT]),
    (classes::BROWSER_VIEW, &[classes::ACTIVITY_HANDLER, classes::LINK]),
    (classes::COLLECTION, &[classes::OBJECT]),
    (classes::COMPLETE, &[classes::ACTIVITY]),
    (classes::CONFIRM, &[classes::RESPOND]),
    (classes::CONNECT, &[classes::ACTIVITY]),
    (classes::CONTENT, &[classes::OBJECT]),
    (classes::CREATE, &[classes::ACTIVITY]),
    (classes::DELETE, &[classes::ACTIVITY]),
    (classes::DEVICE, &[classes::ACTOR]),
    (classes::DISLIKE, &[classes::RESPOND]),
    (classes::DOCUMENT, &[classes::CONTENT]),
    (classes::EMBEDDED_VIEW, &[classes::ACTIVITY_HANDLER, classes::CONTENT]),
    (classes::EVENT, &[classes::OBJECT]),
    (classes::FAVORITE, &[classes::RESPOND]),
    (classes::FLAG, &[classes::RESPOND]),
    (classes::FOLDER, &[classes::COLLECTION]),
    (classes::FOLLOW, &[classes::ACTIVITY]),
    (classes::FRIEND_REQUEST, &[classes::CONNECT]),
    (classes::GIVE, &[classes::OFFER]),
    (classes::GROUP, &[classes::ACTOR]),
    (classes::HTTP_REQUEST, &[classes::ACTIVITY_HANDLER, classes::LINK]),
    (classes::IGNORE, &[classes::RESPOND]),
    (classes::IMAGE, &[classes::DOCUMENT]),
    (classes::INVITE, &[classes::OFFER]),
    (classes::JOIN, &[classes::ACTIVITY]),
    (classes::LEAVE, &[classes::ACTIVITY]),
    (classes::LIKE, &[classes::RESPOND]),
    (classes::EXPERIENCE, &[classes::ACTIVITY]),
    (classes::VIEW, &[classes::EXPERIENCE]),
    (classes::WATCH, &[classes::VIEW]),
    (classes::LISTEN, &[classes::EXPERIENCE]),
    (classes::READ, &[classes::VIEW]),
    (classes::RESERVATION, &[classes::ACTIVITY]),
    (classes::RESPOND, &[classes::ACTIVITY]),
    (classes::MOVE, &[classes::ACTIVITY]),
    (classes::TRAVEL, &[classes::INTRANSITIVE_ACTIVITY]),
    (classes::MENTION, &[classes::LINK]),
    (classes::NOTE, &[classes::CONTENT]),
    (classes::OFFER, &[classes::ACTIVITY]),
    (classes::ORDERED_COLLECTION, &[classes::COLLECTION]),
    (classes::ORGANIZATION, &[classes::ACTOR]),
    (classes::PAGE, &[classes::CONTENT]),
    (classes::PERSON, &[classes::ACTOR]),
    (classes::PLACE, &[classes::OBJECT]),
    (classes::POSSIBLE_ANSWER, &[classes::CONTENT]),
    (classes::POST, &[classes::ACTIVITY]),
    (classes::PROCESS, &[classes::ACTOR]),
    (classes::QUESTION, &[classes::CONTENT, classes::INTRANSITIVE_ACTIVITY]),
    (classes::REJECT, &[classes::RESPOND]),
    (classes::REMOVE, &[classes::ACTIVITY]),
    (classes::REVIEW, &[classes::RESPOND]),
    (classes::ROLE, &[classes::ACTOR]),
    (classes::SAVE, &[classes::ACTIVITY]),
    (classes::SERVICE, &[classes::ACTOR]),
    (classes::SHARE, &[classes::ACTIVITY]),
    (classes::STORY, &[classes::ORDERED_COLLECTION]),
    (classes::TENTATIVE_ACCEPT, &[classes::ACCEPT]),
    (classes::TENTATIVE_REJECT, &[classes::REJECT]),
    (classes::UNDO, &[classes::ACTIVITY]),
    (classes::VIDEO, &[classes::DOCUMENT]),
    (interval::INTERVAL, &[classes::OBJECT]),
    (interval::OPEN_INTERVAL, &[interval::INTERVAL]),
    (interval::CLOSED_INTERVAL, &[interval::INTERVAL]),
    (interval::OPEN_CLOSED_INTERVAL, &[interval::INTERVAL]),
    (interval::CLOSED_OPEN_INTERVAL, &[interval::INTERVAL]),
    (interval::LEFT_OPEN_INTERVAL, &[interval::INTERVAL]),
    (interval::RIGHT_OPEN_INTERVAL, &[interval::INTERVAL]),
    (interval::LEFT_CLOSED_INTERVAL, &[interval::INTERVAL]),
    (interval::RIGHT_CLOSED_INTERVAL, &[interval::INTERVAL]),
    (social::POPULATION, &[classes::OBJECT]),
    (social::EVERYONE, &[social::POPULATION]),
    (social::PUBLIC, &[social::POPULATION]),
    (social::PRIVATE, &[social::POPULATION]),
    (social::DIRECT, &[social::POPULATION]),
    (social::COMMON, &[social::POPULATION]),
    (social::INTERESTED, &[social::POPULATION]),
    (social::SELF, &[social::POPULATION]),
    (social::ALL, &[social::COMPOUND_POPULATION]),
    (social::ANY, &[social::COMPOUND_POPULATION]),
    (social::NONE, &[social::COMPOUND_POPULATION]),
    (social::COMPOUND_POPULATION, &[social::POPULATION]),
];

/// `rdf:type` markers of the properties.
const TYPES: Edges = &[
    (rdf::FIRST, FUNCTIONAL_OBJECT),
    (rdf::REST, FUNCTIONAL_OBJECT),
    (properties::ACTION, OBJECT),
    (properties::ACTOR, OBJECT),
    (properties::ACTOR_OF, OBJECT),
    (properties::ATTRIBUTED_TO, OBJECT),
    (properties::ATTRIBUTED_WITH, OBJECT),
    (properties::ATTACHED_TO, OBJECT),
    (properties::ATTACHMENT, OBJECT),
    (properties::ATTACHMENTS, DEPRECATED_OBJECT),
    (properties::AUTHOR, DEPRECATED_OBJECT),
    (properties::AUTHOR_OF, DEPRECATED_OBJECT),
    (properties::BCC, OBJECT),
    (properties::BTO, OBJECT),
    (properties::CC, OBJECT),
    (properties::CONTEXT, OBJECT),
    (properties::CONTEXT_OF, OBJECT),
    (properties::CURRENT, FUNCTIONAL_OBJECT),
    (properties::FIRST, FUNCTIONAL_OBJECT),
    (properties::GENERATOR, OBJECT),
    (properties::GENERATOR_OF, OBJECT),
    (properties::HANDLER_FOR, OBJECT),
    (properties::HAS_EXPECTED_INPUT, OBJECT),
    (properties::HAS_POTENTIAL_RESULT, OBJECT),
    (properties::HAS_PREFERENCE, OBJECT),
    (properties::HAS_REQUIREMENT, OBJECT),
    (properties::HREFTEMPLATE, FUNCTIONAL_OBJECT),
    (properties::ICON, OBJECT),
    (properties::ICON_FOR, OBJECT),
    (properties::IMAGE, OBJECT),
    (properties::IMAGE_OF, OBJECT),
    (properties::IN_REPLY_TO, OBJECT),
    (properties::ITEMS, OBJECT),
    (properties::LAST, FUNCTIONAL_OBJECT),
    (properties::LOCATION, OBJECT),
    (properties::LOCATION_OF, OBJECT),
    (properties::MEMBER_OF, OBJECT),
    (properties::NEXT, FUNCTIONAL_OBJECT),
    (properties::OBJECT, OBJECT),
    (properties::OBJECT_OF, OBJECT),
    (properties::ONE_OF, OBJECT),
    (properties::ANY_OF, OBJECT),
    (properties::PARAMETER, OBJECT),
    (properties::PREV, FUNCTIONAL_OBJECT),
    (properties::PREVIEW, OBJECT),
    (properties::PREVIEW_OF, OBJECT),
    (properties::PROVIDER, OBJECT),
    (properties::PROVIDER_OF, OBJECT),
    (properties::REPLIES, OBJECT),
    (properties::RESULT, OBJECT),
    (properties::RESULT_OF, OBJECT),
    (properties::ROLE, OBJECT),
    (properties::SCOPE, OBJECT),
    (properties::SCOPE_OF, OBJECT),
    (properties::SELF, FUNCTIONAL_OBJECT),
    (properties::SHAPE, OBJECT),
    (properties::TAG, OBJECT),
    (properties::TAG_OF, OBJECT),
    (properties::TAGS, DEPRECATED_OBJECT),
    (properties::TARGET, OBJECT),
    (properties::TARGET_OF, OBJECT),
    (properties::ORIGIN, OBJECT),
    (properties::ORIGIN_OF, OBJECT),
    (properties::TO, OBJECT),
    (properties::URL, OBJECT),
    (properties::USING, OBJECT),
    (properties::ACCURACY, FUNCTIONAL_DATATYPE),
    (properties::ALIAS, FUNCTIONAL_DATATYPE),
    (properties::ALTITUDE, FUNCTIONAL_DATATYPE),
    (properties::BROWSER_CONTEXT, FUNCTIONAL_DATATYPE),
    (properties::CONFIRM, FUNCTIONAL_DATATYPE),
    (properties::CONTENT, LANGUAGE_PROPERTY),
    (properties::DISPLAY_NAME, LANGUAGE_PROPERTY),
    (properties::DOWNSTREAM_DUPLICATES, DEPRECATED_DATATYPE),
    (properties::DURATION, FUNCTIONAL_DATATYPE),
    (properties::END_TIME, FUNCTIONAL_DATATYPE),
    (properties::HEIGHT, FUNCTIONAL_DATATYPE),
    (properties::HREF, FUNCTIONAL_DATATYPE),
    (properties::HREFLANG, FUNCTIONAL_DATATYPE),
    (properties::ID, DEPRECATED_FUNCTIONAL_DATATYPE),
    (properties::ITEMS_PER_PAGE, FUNCTIONAL_DATATYPE),
    (properties::LATITUDE, FUNCTIONAL_DATATYPE),
    (properties::LONGITUDE, FUNCTIONAL_DATATYPE),
    (properties::MEDIA_TYPE, FUNCTIONAL_DATATYPE),
    (properties::METHOD, FUNCTIONAL_DATATYPE),
    (properties::NAME, FUNCTIONAL_DATATYPE),
    (properties::OBJECT_TYPE, DEPRECATED_FUNCTIONAL_DATATYPE),
    (properties::PRIORITY, FUNCTIONAL_DATATYPE),
    (properties::PUBLISHED, FUNCTIONAL_DATATYPE),
    (properties::RADIUS, FUNCTIONAL_DATATYPE),
    (properties::RATING, FUNCTIONAL_DATATYPE),
    (properties::REL, DATATYPE),
    (properties::OPTIONAL, FUNCTIONAL_DATATYPE),
    (properties::SANDBOX, FUNCTIONAL_DATATYPE),
    (properties::START_INDEX, FUNCTIONAL_DATATYPE),
    (properties::START_TIME, FUNCTIONAL_DATATYPE),
    (properties::SUMMARY, LANGUAGE_PROPERTY),
    (properties::TEMPLATE, FUNCTIONAL_DATATYPE),
    (properties::TITLE, LANGUAGE_PROPERTY),
    (properties::TOTAL_ITEMS, FUNCTIONAL_DATATYPE),
    (properties::UNITS, FUNCTIONAL_DATATYPE),
    (properties::UPDATED, FUNCTIONAL_DATATYPE),
    (properties::UPSTREAM_DUPLICATES, DEPRECATED_DATATYPE),
    (properties::VERB, DEPRECATED_FUNCTIONAL_DATATYPE),
    (properties::WIDTH, FUNCTIONAL_DATATYPE),
    (classes::HTTP_HEADER, CLASS),
    (asx::INDEX_RANGE, FUNCTIONAL_OBJECT),
    (asx::PUBLISHED_RANGE, FUNCTIONAL_OBJECT),
    (asx::START_TIME_RANGE, FUNCTIONAL_OBJECT),
    (interval::LOWER, FUNCTIONAL_DATATYPE),
    (interval::UPPER, FUNCTIONAL_DATATYPE),
    (interval::STEP, FUNCTIONAL_DATATYPE),
    (social::MEMBER, OBJECT),
    (social::CONFIDENCE, FUNCTIONAL_DATATYPE),
    (social::HAVING_DIMENSION, OBJECT),
    (social::HAVING_ROLE, OBJECT),
    (social::HAVING_RELATIONSHIP, OBJECT),
    (social::DISTANCE, FUNCTIONAL_DATATYPE),
];

const SUB_PROPERTY_OF: Edges = &[
    (properties::ACTOR, &[properties::ATTRIBUTED_TO]),
    (properties::ACTOR_OF, &[properties::ATTRIBUTED_WITH]),
    (properties::AUTHOR, &[properties::ATTRIBUTED_TO]),
    (properties::AUTHOR_OF, &[properties::ATTRIBUTED_WITH]),
    (properties::RESULT, &[properties::ATTRIBUTED_WITH]),
    (properties::RESULT_OF, &[properties::ATTRIBUTED_TO]),
];

const PREFIXES: &[(&str, NamedNodeRef<'_>)] = &[
    (
        "as",
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#"),
    ),
    ("asx", NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#")),
    ("owl", NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#")),
    (
        "rdf",
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ),
    (
        "rdfs",
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#"),
    ),
    (
        "xsd",
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#"),
    ),
    (
        "interval",
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#"),
    ),
    (
        "social",
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#"),
    ),
];

pub(crate) fn assert_into<S: TripleStore>(reasoner: &mut Reasoner<S>) {
    for &(prefix, iri) in PREFIXES {
        reasoner.declare(prefix, iri);
    }
    for (edges, predicate) in [
        (SUB_CLASS_OF, rdfs::SUB_CLASS_OF),
        (TYPES, rdf::TYPE),
        (SUB_PROPERTY_OF, rdfs::SUB_PROPERTY_OF),
    ] {
        for &(subject, objects) in edges {
            reasoner.add(subject, predicate, objects);
        }
    }
}
