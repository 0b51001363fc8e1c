use crate::cli::{Args, Command, LogFormat};
use anyhow::Context;
use clap::Parser;
use oxrdf::{NamedNode, TermRef};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Write, stdout};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocabreason::{
    CachePolicy, Direction, Hierarchy, Reasoner, ReasonerOptions, RelationKind, StreamFormat,
    TripleStream,
};

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    let mut options = ReasonerOptions::default();
    if args.no_baseline {
        options = options.without_baseline();
    }
    if args.invalidate_cache {
        options = options.with_cache_policy(CachePolicy::InvalidateOnAssert);
    }
    let mut reasoner = Reasoner::with_options(options);
    let format = args
        .format
        .as_deref()
        .map(str::parse::<StreamFormat>)
        .transpose()?;
    for file in &args.file {
        load(&mut reasoner, file, format, args.base.as_deref())?;
    }

    let mut out = stdout().lock();
    match args.command {
        Command::SubclassOf { subject, class } => {
            let (subject, class) = (resolve(&reasoner, &subject)?, resolve(&reasoner, &class)?);
            writeln!(out, "{}", reasoner.is_sub_class_of(&subject, &class))?;
        }
        Command::SubpropertyOf { subject, property } => {
            let subject = resolve(&reasoner, &subject)?;
            let property = resolve(&reasoner, &property)?;
            writeln!(out, "{}", reasoner.is_sub_property_of(&subject, &property))?;
        }
        Command::TypeOf { subject, class } => {
            let (subject, class) = (resolve(&reasoner, &subject)?, resolve(&reasoner, &class)?);
            writeln!(out, "{}", reasoner.is_type_of(&subject, &class))?;
        }
        Command::Ancestors { term, property } => {
            let term = resolve(&reasoner, &term)?;
            let tree = if property {
                reasoner.property_hierarchy(&term)
            } else {
                reasoner.class_hierarchy(&term)
            };
            write_tree(&mut out, &tree, 0)?;
        }
        Command::Descendants { term, property } => {
            let term = resolve(&reasoner, &term)?;
            let tree = if property {
                reasoner.descendant_properties_of(&term)
            } else {
                reasoner.descendant_classes_of(&term)
            };
            write_tree(&mut out, &tree, 0)?;
        }
        Command::Describe { term } => {
            let term = resolve(&reasoner, &term)?;
            describe(&mut out, &reasoner, &term)?;
        }
    }
    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn load(
    reasoner: &mut Reasoner,
    file: &Path,
    format: Option<StreamFormat>,
    base: Option<&str>,
) -> anyhow::Result<()> {
    let format = if let Some(format) = format {
        format
    } else {
        format_from_path(file)?
    };
    let mut stream = TripleStream::new(
        format,
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?,
    );
    if let Some(base) = base {
        stream = stream
            .with_base_iri(base)
            .with_context(|| format!("Invalid base IRI {base}"))?;
    }
    let mut outcome = Ok(0);
    reasoner.use_stream(stream, |result| outcome = result);
    let triples = outcome.with_context(|| format!("Failed to load {}", file.display()))?;
    info!(file = %file.display(), %format, triples, "file loaded");
    Ok(())
}

fn format_from_path(path: &Path) -> anyhow::Result<StreamFormat> {
    let ext = path.extension().and_then(OsStr::to_str).with_context(|| {
        format!(
            "The path {} has no extension to guess a file format from, use --format",
            path.display()
        )
    })?;
    StreamFormat::from_extension(ext)
        .with_context(|| format!("The file extension '{ext}' is unknown"))
}

fn resolve(reasoner: &Reasoner, name: &str) -> anyhow::Result<NamedNode> {
    reasoner
        .resolve(name)
        .with_context(|| format!("'{name}' is neither an IRI nor a name with a declared prefix"))
}

fn write_tree(out: &mut impl Write, tree: &Hierarchy, depth: usize) -> io::Result<()> {
    writeln!(out, "{:indent$}{}", "", tree.node(), indent = 2 * depth)?;
    for branch in tree.branches() {
        write_tree(out, branch, depth + 1)?;
    }
    Ok(())
}

fn describe(out: &mut impl Write, reasoner: &Reasoner, term: &NamedNode) -> io::Result<()> {
    writeln!(out, "{term}")?;
    let itself = TermRef::from(term);
    for (name, value) in [
        ("object", reasoner.is_an_object(term)),
        ("link", reasoner.is_a_link(term)),
        ("intransitive", reasoner.is_intransitive(term)),
        ("possibly ordered", reasoner.is_possibly_ordered(term)),
        ("number", reasoner.is_number(term)),
        ("date", reasoner.is_date(term)),
        ("boolean", reasoner.is_boolean(term)),
        ("object property", reasoner.is_object_property(term)),
        ("functional", reasoner.is_functional(term)),
        ("deprecated", reasoner.is_deprecated(term)),
        ("language property", reasoner.is_language_property(term)),
    ] {
        writeln!(out, "  {name}: {value}")?;
    }
    for (name, kind) in [
        ("superclasses", RelationKind::SubClassOf),
        ("superproperties", RelationKind::SubPropertyOf),
    ] {
        let mut terms = reasoner
            .closure_of(kind, term, Direction::Ancestors)
            .into_iter()
            .filter(|t| t.as_ref() != itself)
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        terms.sort_unstable();
        writeln!(out, "  {name}: {}", terms.join(" "))?;
    }
    Ok(())
}
