#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use anyhow::Result;
use assert_cmd::Command;
use assert_fs::NamedTempFile;
use assert_fs::prelude::*;
use predicates::prelude::*;

const PETS: &str = r"
@prefix ex: <http://example.com/> .
@prefix as: <http://www.w3.org/ns/activitystreams#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

ex:Dog rdfs:subClassOf ex:Animal .
ex:Animal rdfs:subClassOf as:Object .
ex:fido a ex:Dog .
";

fn cli_command() -> Result<Command> {
    Ok(Command::cargo_bin("vocabreason")?)
}

fn pets_file() -> Result<NamedTempFile> {
    let file = NamedTempFile::new("pets.ttl")?;
    file.write_str(PETS)?;
    Ok(file)
}

#[test]
fn cli_help() -> Result<()> {
    cli_command()?
        .arg("--help")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabreason"));
    Ok(())
}

#[test]
fn cli_subclass_of_baseline() -> Result<()> {
    cli_command()?
        .arg("subclass-of")
        .arg("as:Person")
        .arg("as:Object")
        .assert()
        .success()
        .stdout("true\n");
    cli_command()?
        .arg("subclass-of")
        .arg("as:Object")
        .arg("as:Person")
        .assert()
        .success()
        .stdout("false\n");
    Ok(())
}

#[test]
fn cli_queries_loaded_file() -> Result<()> {
    let file = pets_file()?;
    cli_command()?
        .arg("subclass-of")
        .arg("ex:Dog")
        .arg("as:Object")
        .arg("--file")
        .arg(file.path())
        .assert()
        .success()
        .stdout("true\n");
    cli_command()?
        .arg("type-of")
        .arg("ex:fido")
        .arg("ex:Animal")
        .arg("--file")
        .arg(file.path())
        .assert()
        .success()
        .stdout("false\n");
    Ok(())
}

#[test]
fn cli_ancestors_tree() -> Result<()> {
    let file = pets_file()?;
    cli_command()?
        .arg("--no-baseline")
        .arg("--file")
        .arg(file.path())
        .arg("ancestors")
        .arg("ex:Dog")
        .assert()
        .success()
        .stdout(
            "<http://example.com/Dog>\n  <http://example.com/Animal>\n    <http://www.w3.org/ns/activitystreams#Object>\n",
        );
    Ok(())
}

#[test]
fn cli_property_descendants() -> Result<()> {
    cli_command()?
        .arg("descendants")
        .arg("--property")
        .arg("as:attributedTo")
        .assert()
        .success()
        .stdout(predicate::str::contains("  <http://www.w3.org/ns/activitystreams#actor>\n"))
        .stdout(predicate::str::contains("#actorOf>").not());
    Ok(())
}

#[test]
fn cli_describe() -> Result<()> {
    cli_command()?
        .arg("describe")
        .arg("as:displayName")
        .assert()
        .success()
        .stdout(predicate::str::contains("  language property: true\n"))
        .stdout(predicate::str::contains("  functional: false\n"));
    Ok(())
}

#[test]
fn cli_explicit_format() -> Result<()> {
    let file = NamedTempFile::new("pets.data")?;
    file.write_str(
        "<http://example.com/Dog> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.com/Animal> .\n",
    )?;
    cli_command()?
        .arg("--file")
        .arg(file.path())
        .arg("subclass-of")
        .arg("<http://example.com/Dog>")
        .arg("<http://example.com/Animal>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension"));
    cli_command()?
        .arg("--file")
        .arg(file.path())
        .arg("--format")
        .arg("application/n-triples")
        .arg("subclass-of")
        .arg("<http://example.com/Dog>")
        .arg("<http://example.com/Animal>")
        .assert()
        .success()
        .stdout("true\n");
    Ok(())
}

#[test]
fn cli_reports_parse_errors() -> Result<()> {
    let file = NamedTempFile::new("broken.ttl")?;
    file.write_str("@prefix ex: <http://example.com/> .\nex:Dog ex:broken")?;
    cli_command()?
        .arg("--file")
        .arg(file.path())
        .arg("describe")
        .arg("ex:Dog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_names() -> Result<()> {
    cli_command()?
        .arg("describe")
        .arg("not an iri")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an iri"));
    Ok(())
}

#[test]
fn cli_json_logs() -> Result<()> {
    let file = pets_file()?;
    cli_command()?
        .env("RUST_LOG", "info")
        .arg("--log-format")
        .arg("json")
        .arg("--file")
        .arg(file.path())
        .arg("type-of")
        .arg("ex:fido")
        .arg("ex:Dog")
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicate::str::contains("\"triples\":3"));
    Ok(())
}
