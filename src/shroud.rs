//! Shrouding transform: turns source artwork into the shrouded/unshrouded pair.
//!
//! The production transform lives outside this crate and plugs in through
//! [`Shrouder`]. [`Silhouette`] is a minimal stand-in that blacks out every
//! visible pixel.

use crate::error::{Result, WtpError};
use image::{DynamicImage, ImageReader, Rgba};
use std::path::Path;

/// The two variants produced from one source image
#[derive(Debug, Clone)]
pub struct ShroudedImages {
    pub shrouded: DynamicImage,
    pub unshrouded: DynamicImage,
}

/// Produces the shrouded and unshrouded variants of a local image file
pub trait Shrouder {
    fn shroud(&self, source: &Path) -> Result<ShroudedImages>;
}

/// Paints every non-transparent pixel a flat colour, keeping its alpha
#[derive(Debug, Clone, Copy)]
pub struct Silhouette {
    pub colour: [u8; 3],
}

impl Default for Silhouette {
    fn default() -> Self {
        Self { colour: [0, 0, 0] }
    }
}

impl Silhouette {
    fn silhouette(&self, source: &DynamicImage) -> DynamicImage {
        let mut rgba = source.to_rgba8();
        let [r, g, b] = self.colour;
        for pixel in rgba.pixels_mut() {
            let alpha = pixel.0[3];
            if alpha > 0 {
                *pixel = Rgba([r, g, b, alpha]);
            }
        }
        DynamicImage::ImageRgba8(rgba)
    }
}

impl Shrouder for Silhouette {
    fn shroud(&self, source: &Path) -> Result<ShroudedImages> {
        let image = ImageReader::open(source)
            .map_err(|e| WtpError::Transform(format!("{}: {}", source.display(), e)))?
            .with_guessed_format()
            .map_err(|e| WtpError::Transform(format!("{}: {}", source.display(), e)))?
            .decode()
            .map_err(|e| WtpError::Transform(format!("{}: {}", source.display(), e)))?;

        Ok(ShroudedImages {
            shrouded: self.silhouette(&image),
            unshrouded: image,
        })
    }
}
