//! Reason rendering E2E tests: chains, metadata, and file-based format config.

use reasoned::{
    Error, FormatConfigError, PrintOptions, Reason, Success, parse_format_config_json,
    parse_format_config_toml,
};
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use std::{fs, io};

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn read_fixture(name: &str) -> io::Result<String> {
    fs::read_to_string(workspace_root().join("tests").join("fixtures").join(name))
}

fn request_failure() -> Result<Error, Box<dyn StdError>> {
    let timeout = Error::new("socket timed out").with_metadata("elapsed_ms", 5000)?;
    let error = Error::new("request failed")
        .with_metadata("attempt", 3)?
        .caused_by(Error::new("connection lost").caused_by(timeout))
        .caused_by("circuit open");
    Ok(error)
}

#[test]
fn error_chain_renders_and_prints() -> Result<(), Box<dyn StdError>> {
    let error = request_failure()?;

    assert_eq!(
        error.print(),
        "request failed → connection lost → socket timed out"
    );
    assert_eq!(
        error.print_with(&PrintOptions::with_separator(" / ").depth(2)),
        "request failed / connection lost"
    );
    assert_eq!(
        error.to_string(),
        "Error(Message='request failed', Metadata='attempt: 3', Caused by='Error(Message='connection lost', Caused by='Error(Message='socket timed out', Metadata='elapsed_ms: 5000')') • Error(Message='circuit open')')"
    );

    let messages: Vec<&str> = error.chain().map(Reason::message).collect();
    assert_eq!(messages, vec!["request failed", "connection lost", "socket timed out"]);
    assert!(error.has_cause(|cause| cause.message() == "circuit open"));
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("Error(Message='connection lost', Caused by='Error(Message='socket timed out', Metadata='elapsed_ms: 5000')')".to_string())
    );
    Ok(())
}

#[test]
fn success_antecedents_render_recursively() -> Result<(), Box<dyn StdError>> {
    let success = Success::new("order placed")
        .anteceded_by(Success::new("payment captured").with_metadata("amount", "12.50")?)
        .anteceded_by("stock reserved");

    assert_eq!(
        success.to_string(),
        "Success(Message='order placed', Anteceded by='Success(Message='payment captured', Metadata='amount: 12.50') • Success(Message='stock reserved')')"
    );
    assert!(Success::new("x").with_metadata("k", 1)?.with_metadata("k", 2).is_err());
    Ok(())
}

#[test]
fn format_config_from_fixture_files() -> Result<(), Box<dyn StdError>> {
    let error = request_failure()?;

    let toml = parse_format_config_toml(&read_fixture("format-config.valid.toml")?)?;
    let compact = toml.as_ref();
    assert_eq!(
        error.print_with(&PrintOptions::from(compact)),
        "request failed <- connection lost"
    );
    assert_eq!(
        error.render_with(compact),
        "Error(Message='request failed', Caused by='Error(Message='connection lost', Caused by='Error(Message='socket timed out')') | Error(Message='circuit open')')"
    );

    let json = parse_format_config_json(&read_fixture("format-config.valid.json")?)?;
    assert_eq!(
        error.print_with(&PrintOptions::from(json.as_ref())),
        "request failed / connection lost / socket timed out"
    );

    let invalid = parse_format_config_json(&read_fixture("format-config.invalid.json")?);
    assert!(matches!(
        invalid,
        Err(FormatConfigError::UnsupportedVersion { found: 2, .. })
    ));
    Ok(())
}
