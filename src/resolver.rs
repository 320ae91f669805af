//! Persistent cache for shrouded/unshrouded artwork pairs
//!
//! Files are stored as `{cachedir}/{key}_shrouded.png` and
//! `{cachedir}/{key}_unshrouded.png`, where `key` is the obscured
//! [`cache_key`] of the creature name. A pair is valid when both files are
//! present; there is no checksum, TTL or eviction. Hits are never opened or
//! decoded, so whatever bytes sit at the two paths are returned as-is. A lone
//! file left behind by a failed write counts as a miss and is overwritten on
//! the next resolve.

use crate::artwork::{ArtworkSource, HttpArtwork};
use crate::cache_key::cache_key;
use crate::config::Config;
use crate::error::{Result, WtpError};
use crate::models::{ArtifactPair, Record};
use crate::shroud::{Shrouder, Silhouette};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Resolves records to cached artwork pairs, generating them on a miss
pub struct CacheResolver<A, S> {
    cache_dir: PathBuf,
    artwork: A,
    shrouder: S,
}

impl CacheResolver<HttpArtwork, Silhouette> {
    /// Resolver backed by HTTP artwork and the built-in silhouette
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.cachedir,
            HttpArtwork::from_config(config),
            Silhouette::default(),
        )
    }
}

impl<A: ArtworkSource, S: Shrouder> CacheResolver<A, S> {
    pub fn new(cache_dir: impl Into<PathBuf>, artwork: A, shrouder: S) -> Self {
        let cache_dir = cache_dir.into();

        // Create directory if needed
        if let Err(e) = std::fs::create_dir_all(&cache_dir) {
            log::warn!("Failed to create artwork cache directory: {}", e);
        } else {
            log::info!("Artwork cache directory: {:?}", cache_dir);
        }

        Self {
            cache_dir,
            artwork,
            shrouder,
        }
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Expected file locations for a creature name
    pub fn paths_for(&self, name: &str) -> ArtifactPair {
        let key = cache_key(name);
        ArtifactPair {
            shrouded_path: self.cache_dir.join(format!("{}_shrouded.png", key)),
            unshrouded_path: self.cache_dir.join(format!("{}_unshrouded.png", key)),
        }
    }

    /// Check if both variants are cached for a name
    pub fn contains(&self, name: &str) -> bool {
        self.paths_for(name).exists()
    }

    /// Return the cached pair for a record, generating it on a miss.
    ///
    /// On a hit nothing is fetched or transformed. On a miss the artwork is
    /// fetched once, shrouded once, and both variants are written as PNG.
    pub fn resolve(&self, record: &Record) -> Result<ArtifactPair> {
        let pair = self.paths_for(&record.name);

        if pair.exists() {
            log::debug!("Artwork cache hit for id {}", record.id);
            return Ok(pair);
        }

        log::info!("Artwork cache miss for id {}, generating", record.id);
        let source = self.artwork.fetch(&record.id)?;
        let images = self.shrouder.shroud(source.path())?;

        save_png(&images.shrouded, &pair.shrouded_path)?;
        save_png(&images.unshrouded, &pair.unshrouded_path)?;
        log::debug!("Cached artwork pair for id {}", record.id);

        Ok(pair)
    }
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => WtpError::Io(io),
            other => WtpError::Io(std::io::Error::other(other)),
        })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
