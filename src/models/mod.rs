//! Domain model module
//!
//! Typed entities (sites, posts, comments, tags, media) and the builder that
//! constructs them from decoded response trees.

mod builder;
mod types;

pub use builder::{build_all, FromNode};
pub use types::{
    Audio, Comment, Image, Media, Post, Site, Tag, UnrecognizedMedia, Video, AUDIO_FIELDS,
    IMAGE_FIELDS, IMAGE_SIZE_PREFIXES, VIDEO_FIELDS,
};
