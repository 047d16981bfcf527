//! Command-line front-end integration tests
//!
//! Drives `svcacct_app::run` the way the binary does and verifies what it
//! prints.

mod common;

use std::io;

use clap::Parser;
use svcacct_app::{run, Cli};
use svcacct_common::Config;

use crate::common::{shared_key, verify_as_relying_party, KEY_BYTES};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("svcacct").chain(args.iter().copied())).unwrap()
}

fn run_cli(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(
        cli,
        config,
        || Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input")),
        &mut out,
    )?;
    Ok(String::from_utf8(out)?)
}

fn printed_token(output: &str) -> &str {
    output
        .split("\n\n")
        .find_map(|section| section.strip_prefix("JWT\n"))
        .expect("output should contain a JWT section")
}

#[test_log::test]
fn test_cli_output_verifies_as_relying_party() {
    let key = shared_key();
    let cli = parse(&[
        "--email",
        "svc@example.com",
        "--iss",
        "issuer.example.com",
        "--aud",
        "httpbin.example.com,prometheus.example.com",
        "--groups",
        "admins@example.com",
        "--expiry",
        "10m",
        key.as_str(),
    ]);

    let output = run_cli(cli, &Config::default()).unwrap();
    let token = printed_token(&output);

    let claims = verify_as_relying_party(
        token,
        &KEY_BYTES,
        "httpbin.example.com",
        "issuer.example.com",
    )
    .unwrap();
    assert_eq!(claims["groups"], serde_json::json!(["admins@example.com"]));
    assert_eq!(
        claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
        600
    );
}

#[test_log::test]
fn test_cli_reports_prompt_failure() {
    let cli = parse(&[
        "--email",
        "svc@example.com",
        "--iss",
        "issuer.example.com",
        "--aud",
        "api.example.com",
    ]);

    let err = run_cli(cli, &Config::default()).unwrap_err();
    assert!(format!("{err:#}").starts_with("couldn't read shared key"));
}

#[test_log::test]
fn test_cli_takes_defaults_from_config() {
    let config = Config::from_vars(|name| match name {
        "SVCACCT_ISSUER" => Some("issuer.example.com".to_string()),
        "SVCACCT_AUDIENCE" => Some("api.example.com".to_string()),
        "SVCACCT_EXPIRY" => Some("2h".to_string()),
        "SVCACCT_SHARED_KEY" => Some(shared_key()),
        _ => None,
    })
    .unwrap();

    let output = run_cli(parse(&["--email", "svc@example.com"]), &config).unwrap();
    let token = printed_token(&output);

    let claims =
        verify_as_relying_party(token, &KEY_BYTES, "api.example.com", "issuer.example.com")
            .unwrap();
    assert_eq!(
        claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
        7200
    );
}
