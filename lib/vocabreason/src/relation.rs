use oxrdf::NamedNodeRef;
use oxrdf::vocab::{rdf, rdfs};
use std::fmt;

/// The predicates the reasoner caches and reasons over.
///
/// Every other predicate is stored as is and only reachable through pattern lookups.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum RelationKind {
    /// `rdfs:subClassOf`
    SubClassOf,
    /// `rdfs:subPropertyOf`
    SubPropertyOf,
    /// `rdf:type`
    Type,
}

impl RelationKind {
    pub const ALL: [Self; 3] = [Self::SubClassOf, Self::SubPropertyOf, Self::Type];

    /// Resolves the kind of a predicate, if it is one of the distinguished ones.
    #[inline]
    pub fn from_predicate(predicate: NamedNodeRef<'_>) -> Option<Self> {
        if predicate == rdfs::SUB_CLASS_OF {
            Some(Self::SubClassOf)
        } else if predicate == rdfs::SUB_PROPERTY_OF {
            Some(Self::SubPropertyOf)
        } else if predicate == rdf::TYPE {
            Some(Self::Type)
        } else {
            None
        }
    }

    #[inline]
    pub fn predicate(self) -> NamedNodeRef<'static> {
        match self {
            Self::SubClassOf => rdfs::SUB_CLASS_OF,
            Self::SubPropertyOf => rdfs::SUB_PROPERTY_OF,
            Self::Type => rdf::TYPE,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::SubClassOf => 0,
            Self::SubPropertyOf => 1,
            Self::Type => 2,
        }
    }
}

impl fmt::Display for RelationKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SubClassOf => "subClassOf",
            Self::SubPropertyOf => "subPropertyOf",
            Self::Type => "type",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_round_trip() {
        for kind in RelationKind::ALL {
            assert_eq!(RelationKind::from_predicate(kind.predicate()), Some(kind));
        }
    }

    #[test]
    fn other_predicates_are_not_distinguished() {
        assert_eq!(RelationKind::from_predicate(rdfs::LABEL), None);
        assert_eq!(RelationKind::from_predicate(rdfs::DOMAIN), None);
    }

    #[test]
    fn indexes_are_distinct() {
        let mut seen = [false; 3];
        for kind in RelationKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }
}
