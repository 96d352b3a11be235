//! Backup orchestrator

use super::layout::{media_file_name, page_count, post_slug};
use super::types::{BackupConfig, BackupStats, MAX_BATCH_SIZE};
use crate::api::PosterousApi;
use crate::error::{Error, Result, ResultExt};
use crate::models::{Post, Site};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Name of the per-site folder holding private posts
const PRIVATE_FOLDER: &str = "private";

/// Sequential backup of an account's sites, posts and media
#[derive(Debug)]
pub struct Backup<'a> {
    api: &'a PosterousApi,
    config: BackupConfig,
}

impl<'a> Backup<'a> {
    /// Create a backup run; fails on a batch size the service would reject
    pub fn new(api: &'a PosterousApi, config: BackupConfig) -> Result<Self> {
        if config.batch_size == 0 || config.batch_size > MAX_BATCH_SIZE {
            return Err(Error::validation(
                "batch_size",
                format!("an integer between 1 and {MAX_BATCH_SIZE}"),
            ));
        }
        Ok(Self { api, config })
    }

    /// Back up every selected site
    pub async fn run(&self) -> Result<BackupStats> {
        let mut stats = BackupStats::default();
        let sites = self.api.get_sites().await.inspect_err(|e| {
            error!("{}", failure_summary("the site list", e));
        })?;
        info!("Found {} sites", sites.len());

        for site in &sites {
            if let Some(wanted) = self.config.site_id {
                if site.id != Some(wanted) {
                    debug!("Skipping site {} ({:?})", site.hostname, site.id);
                    continue;
                }
            }
            self.backup_site(site, &mut stats).await?;
        }

        if let Some(wanted) = self.config.site_id {
            if stats.sites == 0 {
                warn!("No site with id {wanted} found");
            }
        }

        info!("Backup finished: {stats}");
        Ok(stats)
    }

    async fn backup_site(&self, site: &Site, stats: &mut BackupStats) -> Result<()> {
        let site_id = site
            .id
            .ok_or_else(|| Error::decode(format!("site '{}' has no id", site.hostname)))?;
        let hostname = if site.hostname.is_empty() {
            format!("site-{site_id}")
        } else {
            site.hostname.clone()
        };

        let folder = self.config.folder.join(&hostname);
        info!("Creating folder '{}' for site {site_id}", folder.display());
        tokio::fs::create_dir_all(folder.join(PRIVATE_FOLDER))
            .await
            .with_context(|| format!("Failed to create folder {}", folder.display()))?;

        write_json(&folder.join(format!("site-{hostname}.json")), site).await?;
        stats.sites += 1;

        let num_posts = site.num_posts.unwrap_or(0).max(0) as u64;
        let batch = self.config.batch_size;
        let pages = page_count(num_posts, batch);

        for page in 1..=pages {
            info!("Retrieving page {page} of {pages} with {batch} posts per page");
            let posts = self
                .api
                .get_posts(site_id, page, batch)
                .await
                .inspect_err(|e| {
                    error!("{}", failure_summary(&format!("page {page} of site {site_id}"), e));
                })?;
            for post in &posts {
                self.backup_post(&folder, post, stats).await?;
            }
        }

        Ok(())
    }

    async fn backup_post(&self, site_folder: &Path, post: &Post, stats: &mut BackupStats) -> Result<()> {
        let folder: PathBuf = if post.private {
            site_folder.join(PRIVATE_FOLDER)
        } else {
            site_folder.to_path_buf()
        };
        let slug = post_slug(&post.link, post.id);

        let post_file = folder.join(format!("{slug}.json"));
        debug!("Writing '{}' for post '{}'", post_file.display(), post.title);
        write_json(&post_file, post).await?;
        stats.posts += 1;

        if !self.config.download_media {
            return Ok(());
        }

        for (index, media) in post.media.iter().enumerate() {
            let Some(url) = media.download_url() else {
                warn!("{} media #{index} of post '{}' has no url", media.kind(), post.title);
                continue;
            };

            let target = folder.join(media_file_name(&slug, index, url));
            debug!("Getting media for post '{}' from url '{url}'", post.title);
            match self.api.http().download(url).await {
                Ok(bytes) => {
                    tokio::fs::write(&target, bytes)
                        .await
                        .with_context(|| format!("Failed to write {}", target.display()))?;
                    stats.media += 1;
                }
                Err(e) => {
                    warn!(
                        "{} for post '{}'",
                        failure_summary(&format!("media {url}"), &e),
                        post.title
                    );
                    stats.media_failed += 1;
                }
            }
        }

        Ok(())
    }
}

/// One-line description of a failed call, naming who reported it
pub(crate) fn failure_summary(what: &str, err: &Error) -> String {
    match err.status_code() {
        Some(status) if err.is_api_error() => {
            format!("Posterous rejected {what} with status {status}: {err}")
        }
        Some(status) => format!("Request for {what} failed with HTTP status {status}"),
        None => format!("Failed to get {what}: {err}"),
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
