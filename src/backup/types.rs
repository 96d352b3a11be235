//! Backup settings and counters

use std::path::PathBuf;

/// Largest page size the service accepts
pub const MAX_BATCH_SIZE: u32 = 50;

/// Backup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Root folder of the backup tree
    pub folder: PathBuf,
    /// Only back up the site with this id
    pub site_id: Option<i64>,
    /// Posts requested per page
    pub batch_size: u32,
    /// Download media files next to the posts
    pub download_media: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("backup"),
            site_id: None,
            batch_size: MAX_BATCH_SIZE,
            download_media: true,
        }
    }
}

/// What a backup run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackupStats {
    pub sites: usize,
    pub posts: usize,
    pub media: usize,
    /// Media that could not be downloaded
    pub media_failed: usize,
}

impl std::fmt::Display for BackupStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sites, {} posts, {} media files",
            self.sites, self.posts, self.media
        )?;
        if self.media_failed > 0 {
            write!(f, " ({} media downloads failed)", self.media_failed)?;
        }
        Ok(())
    }
}
