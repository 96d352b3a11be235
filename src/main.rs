// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! Posterous backup CLI
//!
//! Backs up the sites, posts and media of a Posterous account

use anyhow::Context;
use clap::Parser;
use posterous::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level: tracing::Level = cli.log_level().into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let folder = cli.folder.clone();
    Runner::new(cli)
        .run()
        .await
        .with_context(|| format!("Backup into '{}' failed", folder.display()))?;
    Ok(())
}
