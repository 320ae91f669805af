//! Artwork download from the remote pokedex image repository.
//!
//! Images are addressed by the creature id zero-padded to at least three
//! digits: `{base_url}/025.png`.

use crate::config::Config;
use crate::error::{FetchError, Result};
use std::io::Write;
use tempfile::NamedTempFile;

const USER_AGENT: &str = "WTP-Cache/1.0";

/// Minimum width of an artwork id in the remote URL
pub const ID_WIDTH: usize = 3;

/// Source of raw artwork for a creature id.
///
/// The downloaded image is staged in a scratch file that is removed when the
/// returned handle drops.
pub trait ArtworkSource {
    fn fetch(&self, id: &str) -> Result<NamedTempFile>;
}

/// Left-pad a numeric id with zeros to at least three digits.
///
/// Longer ids are returned unchanged. Empty or non-numeric ids are rejected.
pub fn pad_id(id: &str) -> std::result::Result<String, FetchError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(FetchError::MalformedId(id.to_string()));
    }
    Ok(format!("{:0>width$}", id, width = ID_WIDTH))
}

/// Build the artwork URL for an id
pub fn artwork_url(base_url: &str, id: &str) -> std::result::Result<String, FetchError> {
    Ok(format!(
        "{}/{}.png",
        base_url.trim_end_matches('/'),
        pad_id(id)?
    ))
}

/// Fetch artwork bytes for an id from the given base URL
pub fn fetch_artwork_from(base_url: &str, id: &str) -> Result<Vec<u8>> {
    let url = artwork_url(base_url, id)?;

    log::info!("Fetching artwork: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    // Anything but 200 has no usable image body
    if response.status() == reqwest::StatusCode::OK {
        Ok(response.bytes()?.to_vec())
    } else {
        Err(FetchError::HttpStatus {
            url,
            status: response.status(),
        }
        .into())
    }
}

/// Artwork fetched over HTTP
#[derive(Debug, Clone)]
pub struct HttpArtwork {
    base_url: String,
}

impl HttpArtwork {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.artwork_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ArtworkSource for HttpArtwork {
    fn fetch(&self, id: &str) -> Result<NamedTempFile> {
        let bytes = fetch_artwork_from(&self.base_url, id)?;

        let mut scratch = tempfile::Builder::new()
            .prefix("wtp_")
            .suffix(".png")
            .tempfile()?;
        scratch.write_all(&bytes)?;
        scratch.flush()?;

        log::debug!(
            "Staged {} bytes of artwork at {}",
            bytes.len(),
            scratch.path().display()
        );
        Ok(scratch)
    }
}

#[cfg(test)]
#[path = "artwork_tests.rs"]
mod tests;
