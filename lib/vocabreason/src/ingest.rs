//! Triple streams a [`Reasoner`](crate::Reasoner) can ingest.

use oxrdf::{IriParseError, NamedNode};
use oxttl::TurtleParser;
use std::fmt;
use std::str::FromStr;

/// The serializations a [`TripleStream`] can carry.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
#[non_exhaustive]
pub enum StreamFormat {
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
}

impl StreamFormat {
    /// The format canonical IANA media type.
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::NTriples => "application/n-triples",
            Self::Turtle => "text/turtle",
        }
    }

    /// The format usual file extension.
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::NTriples => "nt",
            Self::Turtle => "ttl",
        }
    }

    /// Looks for a known format from a media type, ignoring parameters.
    ///
    /// ```
    /// use vocabreason::StreamFormat;
    ///
    /// assert_eq!(
    ///     StreamFormat::from_media_type("text/turtle; charset=utf-8"),
    ///     Some(StreamFormat::Turtle)
    /// );
    /// ```
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let media_type = media_type.split(';').next()?.trim();
        if media_type.eq_ignore_ascii_case("application/n-triples")
            || media_type.eq_ignore_ascii_case("text/plain")
        {
            Some(Self::NTriples)
        } else if media_type.eq_ignore_ascii_case("text/turtle")
            || media_type.eq_ignore_ascii_case("application/x-turtle")
        {
            Some(Self::Turtle)
        } else {
            None
        }
    }

    /// Looks for a known format from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("nt") {
            Some(Self::NTriples)
        } else if extension.eq_ignore_ascii_case("ttl") {
            Some(Self::Turtle)
        } else {
            None
        }
    }
}

impl fmt::Display for StreamFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NTriples => "N-Triples",
            Self::Turtle => "Turtle",
        })
    }
}

impl FromStr for StreamFormat {
    type Err = UnknownStreamFormat;

    /// Accepts a file extension or a media type.
    fn from_str(name: &str) -> Result<Self, UnknownStreamFormat> {
        Self::from_extension(name)
            .or_else(|| Self::from_media_type(name))
            .ok_or_else(|| UnknownStreamFormat(name.into()))
    }
}

/// A format name that is neither a known extension nor a known media type.
#[derive(Debug, thiserror::Error)]
#[error("The format {0} is unknown, use an extension like nt or ttl or a media type")]
pub struct UnknownStreamFormat(String);

/// A serialized triple stream: a reader and how to parse it.
///
/// ```
/// use vocabreason::{StreamFormat, TripleStream};
///
/// let stream = TripleStream::new(StreamFormat::Turtle, "<Dog> a <Class> .".as_bytes())
///     .with_base_iri("http://example.com/")?;
/// assert_eq!(stream.format(), StreamFormat::Turtle);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[must_use]
pub struct TripleStream<R> {
    reader: R,
    format: StreamFormat,
    base_iri: Option<String>,
    prefixes: Vec<(String, NamedNode)>,
}

impl<R> TripleStream<R> {
    #[inline]
    pub fn new(format: StreamFormat, reader: R) -> Self {
        Self {
            reader,
            format,
            base_iri: None,
            prefixes: Vec::new(),
        }
    }

    /// Sets the base IRI relative IRIs are resolved against.
    ///
    /// Only used by Turtle, N-Triples has no relative IRIs.
    #[inline]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, IriParseError> {
        let base_iri = NamedNode::new(base_iri)?;
        self.base_iri = Some(base_iri.into_string());
        Ok(self)
    }

    /// Binds a prefix before parsing starts.
    ///
    /// The prefix is also declared on the reasoner ingesting the stream.
    #[inline]
    pub fn with_prefix(
        mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Result<Self, IriParseError> {
        self.prefixes
            .push((prefix_name.into(), NamedNode::new(prefix_iri)?));
        Ok(self)
    }

    #[inline]
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    pub(crate) fn prefixes(&self) -> &[(String, NamedNode)] {
        &self.prefixes
    }

    pub(crate) fn into_parts(self) -> (StreamFormat, R) {
        (self.format, self.reader)
    }

    pub(crate) fn turtle_parser(&self) -> Result<TurtleParser, IriParseError> {
        let mut parser = TurtleParser::new();
        if let Some(base_iri) = &self.base_iri {
            parser = parser.with_base_iri(base_iri.as_str())?;
        }
        for (prefix_name, prefix_iri) in &self.prefixes {
            parser = parser.with_prefix(prefix_name.as_str(), prefix_iri.as_str())?;
        }
        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        for format in [StreamFormat::NTriples, StreamFormat::Turtle] {
            assert_eq!(StreamFormat::from_extension(format.file_extension()), Some(format));
            assert_eq!(StreamFormat::from_media_type(format.media_type()), Some(format));
            assert_eq!(format.file_extension().parse::<StreamFormat>().ok(), Some(format));
        }
        assert_eq!(StreamFormat::from_extension("TTL"), Some(StreamFormat::Turtle));
        assert!("jsonld".parse::<StreamFormat>().is_err());
    }

    #[test]
    fn invalid_base_iri_is_rejected_eagerly() {
        let stream = TripleStream::new(StreamFormat::Turtle, b"".as_slice());
        assert!(stream.with_base_iri("not an iri").is_err());
    }

    #[test]
    fn invalid_prefix_is_rejected_eagerly() {
        let stream = TripleStream::new(StreamFormat::Turtle, b"".as_slice());
        assert!(stream.with_prefix("ex", "//relative").is_err());
    }
}
