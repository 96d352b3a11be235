//! Backup module
//!
//! Walks every site of an account and writes it to a folder tree:
//!
//! ```text
//! <folder>/
//!   <hostname>/
//!     site-<hostname>.json
//!     <post-slug>.json          body, comments and everything else
//!     <post-slug>_<n>.<ext>     media files
//!     private/                  the same layout for private posts
//! ```
//!
//! Sites are visited one after another and pages of posts strictly in order.

mod layout;
mod orchestrator;
mod types;

pub use layout::{media_extension, media_file_name, page_count, post_slug};
pub use orchestrator::Backup;
pub use types::{BackupConfig, BackupStats};
