use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "vocabreason")]
/// Subclass, subproperty and type reasoning over RDF vocabularies
///
/// The Activity Streams 2.0 schema is loaded first, then the given files in order.
pub struct Args {
    /// File(s) to load before answering
    ///
    /// Names are resolved against the prefixes they declare, so `as:Note` or `ex:Dog` can be used in queries.
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Vec<PathBuf>,
    /// The format of the file(s) to load
    ///
    /// It can be an extension like "nt" or a MIME type like "text/turtle".
    ///
    /// By default, the format is guessed from the loaded file extension.
    #[arg(long, global = true)]
    pub format: Option<String>,
    /// Base IRI of the file(s) to load
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub base: Option<String>,
    /// Do not load the Activity Streams 2.0 schema
    #[arg(long, global = true)]
    pub no_baseline: bool,
    /// Recompute answers affected by later assertions instead of keeping the first one
    #[arg(long, global = true)]
    pub invalidate_cache: bool,
    /// Format of the logs written to stderr
    ///
    /// The verbosity is set with the RUST_LOG environment variable and defaults to "warn".
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check if a class is a subclass of another one
    ///
    /// Every class is a subclass of itself.
    SubclassOf {
        /// IRI or prefixed name of the subclass
        subject: String,
        /// IRI or prefixed name of the superclass
        class: String,
    },
    /// Check if a property is a subproperty of another one
    SubpropertyOf {
        /// IRI or prefixed name of the subproperty
        subject: String,
        /// IRI or prefixed name of the superproperty
        property: String,
    },
    /// Check if a rdf:type triple has been asserted
    ///
    /// Types are not inherited from superclasses.
    TypeOf {
        /// IRI or prefixed name of the instance
        subject: String,
        /// IRI or prefixed name of the class
        class: String,
    },
    /// Print the superclasses of a class as a tree
    Ancestors {
        /// IRI or prefixed name of the class
        term: String,
        /// Follow rdfs:subPropertyOf instead of rdfs:subClassOf
        #[arg(long)]
        property: bool,
    },
    /// Print the subclasses of a class as a tree
    Descendants {
        /// IRI or prefixed name of the class
        term: String,
        /// Follow rdfs:subPropertyOf instead of rdfs:subClassOf
        #[arg(long)]
        property: bool,
    },
    /// Print everything known about a term
    Describe {
        /// IRI or prefixed name of the term
        term: String,
    },
}
