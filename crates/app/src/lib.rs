//! svcacct command-line front-end
//!
//! Collects identity attributes from flags and configuration defaults,
//! obtains the shared key, issues the token, and prints the result.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::{CommandFactory, Parser};
use zeroize::Zeroizing;

use svcacct_auth::{issue_now, IssuedToken, RawAttributes, TimeToLive};
use svcacct_common::{parse_duration, Config};

pub const SHARED_KEY_PROMPT: &str = "Enter base64 encoded shared key >";

const AFTER_HELP: &str = "\
The shared key is taken from the positional argument, then SVCACCT_SHARED_KEY,
and is prompted for when neither is set.

For additional help see:

\thttps://jwt.io/";

/// Generates a service account token from a shared key
#[derive(Debug, Parser)]
#[command(name = "svcacct", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Email
    #[arg(long)]
    pub email: Option<String>,

    /// Impersonation Email (optional)
    #[arg(long = "impersonate_email")]
    pub impersonate_email: Option<String>,

    /// Issuing Server (e.g. authenticate.int.example.com)
    #[arg(long = "iss")]
    pub issuer: Option<String>,

    /// Subject (typically User's GUID)
    #[arg(long = "sub")]
    pub subject: Option<String>,

    /// User (typically User's GUID)
    #[arg(long)]
    pub user: Option<String>,

    /// Audience (e.g. httpbin.int.example.com,prometheus.int.example.com)
    #[arg(long = "aud", value_delimiter = ',')]
    pub audience: Vec<String>,

    /// Groups (e.g. admins@example.com,users@example.com)
    #[arg(long, value_delimiter = ',')]
    pub groups: Vec<String>,

    /// Impersonation Groups (optional)
    #[arg(long = "impersonate_groups", value_delimiter = ',')]
    pub impersonate_groups: Vec<String>,

    /// Expiry, as a duration such as 1h or 90m [default: 1h]
    #[arg(long, value_parser = parse_duration, allow_hyphen_values = true)]
    pub expiry: Option<TimeDelta>,

    /// Base64 encoded shared key
    pub shared_key: Option<String>,
}

impl Cli {
    /// Identity attributes, with flags taking precedence over configuration
    pub fn attributes(&self, config: &Config) -> RawAttributes {
        let audience = if self.audience.is_empty() {
            config.audience.clone()
        } else {
            self.audience.clone()
        };

        RawAttributes {
            email: self.email.clone().unwrap_or_default(),
            issuer: self
                .issuer
                .clone()
                .or_else(|| config.issuer.clone())
                .unwrap_or_default(),
            subject: self.subject.clone(),
            user: self.user.clone(),
            audience,
            groups: self.groups.clone(),
            impersonate_email: self.impersonate_email.clone(),
            impersonate_groups: self.impersonate_groups.clone(),
        }
    }

    pub fn time_to_live(&self, config: &Config) -> Result<TimeToLive> {
        let expiry = self.expiry.unwrap_or(config.expiry);
        Ok(TimeToLive::new(expiry)?)
    }
}

/// Full help text with every flag and its default, printed after a failed run
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// Issue a token for `cli` and write the result to `out`.
///
/// `read_shared_key` is called only when neither the command line nor the
/// configuration supplies a key.
pub fn run<F, W>(cli: Cli, config: &Config, read_shared_key: F, out: &mut W) -> Result<()>
where
    F: FnOnce() -> io::Result<String>,
    W: Write,
{
    let ttl = cli.time_to_live(config)?;
    let attributes = cli.attributes(config);

    let shared_key = match cli.shared_key.or_else(|| config.shared_key.clone()) {
        Some(key) => Zeroizing::new(key),
        None => Zeroizing::new(read_shared_key().context("couldn't read shared key")?),
    };

    let issued = issue_now(attributes, ttl, &shared_key)?;

    tracing::info!(
        email = %issued.claims.email,
        iss = %issued.claims.issuer,
        exp = issued.claims.expiry.timestamp(),
        "Issued service account token"
    );

    emit(&issued, out)
}

/// Print the claim set and token in human-readable form
pub fn emit<W: Write>(issued: &IssuedToken, out: &mut W) -> Result<()> {
    let claims = issued
        .claims
        .to_pretty_json()
        .context("couldn't pretty print jwt")?;

    writeln!(out, "Service Account")?;
    writeln!(out, "{claims}\n")?;
    writeln!(out, "JWT")?;
    writeln!(out, "{}\n", issued.token)?;
    out.flush()?;

    Ok(())
}

/// Ask for the shared key on stderr and read one line from stdin.
///
/// Input is hidden when stdin is a terminal.
pub fn prompt_shared_key() -> io::Result<String> {
    eprintln!("{SHARED_KEY_PROMPT}");

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return rpassword::read_password();
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(trim_line_ending(&line).to_string())
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
