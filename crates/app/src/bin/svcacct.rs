// svcacct - Service Account Token Issuer

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use svcacct_app::{help_text, prompt_shared_key, run, Cli};
use svcacct_common::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Config::from_env().and_then(|config| {
        init_tracing(&config.log_filter);
        run(cli, &config, prompt_shared_key, &mut io::stdout().lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n⛔️ {e:#}\n");
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
