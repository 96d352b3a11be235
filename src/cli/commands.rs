//! CLI arguments and parsing

use crate::backup::BackupConfig;
use crate::types::{LogLevel, ResponseFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Back up Posterous sites, posts and media to a local folder
#[derive(Parser, Debug)]
#[command(name = "posterous-backup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Email address associated with the Posterous account
    #[arg(short, long, env = "POSTEROUS_USERNAME")]
    pub username: String,

    /// Password associated with the Posterous account
    #[arg(short, long, env = "POSTEROUS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Folder to store backup data in (existing files may be overwritten)
    #[arg(short, long, default_value = "backup")]
    pub folder: PathBuf,

    /// Only back up the site with this id
    #[arg(short, long)]
    pub site_id: Option<i64>,

    /// Number of posts to get per API call (the service allows at most 50)
    #[arg(short, long, default_value_t = 50)]
    pub batch_size: u32,

    /// Skip downloading media files
    #[arg(long)]
    pub no_media: bool,

    /// Client configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Response format, overrides the configuration file
    #[arg(long)]
    pub format: Option<FormatArg>,

    /// Debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output, warnings and errors only (the default)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Response format flag
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Xml,
    Json,
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => ResponseFormat::Xml,
            FormatArg::Json => ResponseFormat::Json,
        }
    }
}

impl Cli {
    /// Log level selected by the flags; `--debug` wins over `--verbose`,
    /// which wins over `--quiet`
    pub fn log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        }
    }

    /// Backup settings selected by the flags
    pub fn backup_config(&self) -> BackupConfig {
        BackupConfig {
            folder: self.folder.clone(),
            site_id: self.site_id,
            batch_size: self.batch_size,
            download_media: !self.no_media,
        }
    }
}
