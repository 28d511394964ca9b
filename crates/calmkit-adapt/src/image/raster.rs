// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image wrapper — PNG/JPEG decoding, colour-mode normalization to
// 8-bit RGB or RGBA, and lossless PNG encoding.

use calmkit_core::ImageKind;
use calmkit_core::error::{CalmkitError, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, info, instrument};

/// A decoded image held in 8-bit RGB (opaque) or RGBA mode.
///
/// Palette, grayscale, 16-bit and float images are converted on
/// construction, so every filter sees one of the two standard modes.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    image: DynamicImage,
}

impl RasterImage {
    // -- Construction ---------------------------------------------------------

    /// Decode PNG or JPEG bytes.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn decode(data: &[u8]) -> Result<Self> {
        let kind = Self::sniff(data)?;
        let format = match kind {
            ImageKind::Png => ImageFormat::Png,
            ImageKind::Jpeg => ImageFormat::Jpeg,
        };

        let img = image::load_from_memory_with_format(data, format).map_err(|err| {
            CalmkitError::Decode(format!("invalid {} data: {}", kind.mime_type(), err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Identify the container format from the leading bytes.
    pub fn sniff(data: &[u8]) -> Result<ImageKind> {
        let format = image::guess_format(data)
            .map_err(|err| CalmkitError::Decode(format!("unrecognised image data: {}", err)))?;
        match format {
            ImageFormat::Png => Ok(ImageKind::Png),
            ImageFormat::Jpeg => Ok(ImageKind::Jpeg),
            other => Err(CalmkitError::UnsupportedFormat(
                format!("{other:?}").to_ascii_lowercase(),
            )),
        }
    }

    /// Read and decode an image file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        let raster = Self::decode(&data)?;
        info!(
            width = raster.width(),
            height = raster.height(),
            "Image loaded"
        );
        Ok(raster)
    }

    /// Wrap an already-decoded `DynamicImage`, normalizing its colour mode.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Self { image }
    }

    /// Build from an RGBA buffer, dropping the alpha channel unless `keep_alpha`.
    pub(crate) fn from_rgba(rgba: RgbaImage, keep_alpha: bool) -> Self {
        let image = DynamicImage::ImageRgba8(rgba);
        if keep_alpha {
            Self { image }
        } else {
            Self {
                image: DynamicImage::ImageRgb8(image.to_rgb8()),
            }
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the image carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Copy the pixels out as RGBA (opaque images get alpha 255).
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| CalmkitError::Encode(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Write the image to `path` as PNG, whatever the extension.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(bytes = bytes.len(), "Image saved");
        Ok(())
    }
}
