//! File naming for the backup tree

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing `.ext` of a URL path
static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(\w+)$").unwrap());

/// Fallback extension for media URLs without one
pub const DEFAULT_EXTENSION: &str = "bin";

/// Number of pages needed for `num_posts` posts at `batch_size` per page
pub fn page_count(num_posts: u64, batch_size: u32) -> u32 {
    if batch_size == 0 {
        return 0;
    }
    let batch = u64::from(batch_size);
    num_posts.div_ceil(batch) as u32
}

/// File stem for a post: its link path without the leading `/`
///
/// Nested paths are flattened with `_`. Falls back to the post id when the
/// link has no usable path.
pub fn post_slug(link: &str, id: Option<i64>) -> String {
    let path = match url::Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let slug = path.trim_matches('/').replace('/', "_");
    if slug.is_empty() {
        format!("post-{}", id.unwrap_or_default())
    } else {
        slug
    }
}

/// Extension of the file a media URL points to
pub fn media_extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    EXTENSION
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// File name for the `index`th media of a post
pub fn media_file_name(slug: &str, index: usize, url: &str) -> String {
    let ext = media_extension(url).unwrap_or(DEFAULT_EXTENSION);
    format!("{slug}_{index}.{ext}")
}
