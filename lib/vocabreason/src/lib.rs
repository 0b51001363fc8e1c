#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod baseline;
mod cache;
mod closure;
mod error;
mod ingest;
mod reasoner;
mod relation;
mod store;
pub mod vocab;

pub use crate::cache::{CachePolicy, CacheStats, MemoCache};
pub use crate::closure::{Direction, Hierarchy, Iter as HierarchyIter};
pub use crate::error::IngestError;
pub use crate::ingest::{StreamFormat, TripleStream, UnknownStreamFormat};
pub use crate::reasoner::{IntoObjects, Reasoner, ReasonerOptions};
pub use crate::relation::RelationKind;
pub use crate::store::{MemoryStore, TriplePattern, TripleStore};
