//! CLI runner - executes the backup

use crate::api::PosterousApi;
use crate::auth::Credentials;
use crate::backup::{Backup, BackupStats};
use crate::cli::commands::Cli;
use crate::config::ClientConfig;
use crate::error::Result;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Client configuration from `--config` and `--format`
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                info!("Loading client configuration from {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };
        if let Some(format) = self.cli.format {
            config.format = format.into();
        }
        Ok(config)
    }

    /// Run the backup
    pub async fn run(&self) -> Result<BackupStats> {
        let config = self.client_config()?;
        let credentials = Credentials::new(&self.cli.username, &self.cli.password);
        let api = PosterousApi::new(config, Some(credentials))?;

        let backup = Backup::new(&api, self.cli.backup_config())?;
        let stats = backup.run().await?;

        println!(
            "Backed up {stats} to {}",
            self.cli.folder.display()
        );
        Ok(stats)
    }
}
