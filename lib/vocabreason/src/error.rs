use oxrdf::IriParseError;
use oxttl::TurtleParseError;
use std::io;

/// An error raised while feeding a triple stream into a reasoner.
///
/// Triples asserted before the error stay asserted.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The stream content is not valid or could not be read.
    #[error(transparent)]
    Parse(#[from] TurtleParseError),
    /// The base IRI or a prefix given to the stream is not a valid IRI.
    #[error("Invalid stream configuration: {0}")]
    InvalidIri(#[from] IriParseError),
}

impl From<IngestError> for io::Error {
    #[inline]
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::Parse(e) => e.into(),
            IngestError::InvalidIri(e) => Self::new(io::ErrorKind::InvalidInput, e),
        }
    }
}
