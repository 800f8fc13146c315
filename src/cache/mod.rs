//! Caching for generated textures.

mod thumbnail_cache;

pub use thumbnail_cache::ThumbnailCache;
