// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image adapter — tones down brightness and contrast by sensitivity tier,
// softens fine detail, and calms the colour palette.

use calmkit_core::SensitivityLevel;
use image::RgbaImage;
use tracing::{debug, info, instrument};

use crate::image::enhance;
use crate::image::raster::RasterImage;

/// Blur standard deviation used when reducing colour intensity.
pub const SOFTEN_RADIUS: f32 = 0.5;

/// Saturation factor of the calm palette.
pub const CALM_SATURATION: f32 = 0.6;

/// Calming pipeline operating on a working copy of one image.
///
/// Each method consumes `self` and returns the transformed adapter, so steps
/// chain in the order they are called:
///
/// ```ignore
/// let calm = ImageAdapter::new(&raster)
///     .tone(SensitivityLevel::High)
///     .soften(SOFTEN_RADIUS)
///     .saturation(CALM_SATURATION)
///     .into_raster();
/// ```
pub struct ImageAdapter {
    /// Working pixels, always RGBA while filters run.
    image: RgbaImage,
    /// Whether the source had alpha; opaque sources come back as RGB.
    keep_alpha: bool,
}

impl ImageAdapter {
    /// Start from a copy of `source`. The source is never modified.
    pub fn new(source: &RasterImage) -> Self {
        Self {
            image: source.to_rgba8(),
            keep_alpha: source.has_alpha(),
        }
    }

    /// Multiply brightness by `factor`.
    pub fn brightness(self, factor: f32) -> Self {
        debug!(factor, "Adjusting brightness");
        Self {
            image: enhance::brightness(&self.image, factor),
            ..self
        }
    }

    /// Multiply contrast by `factor`.
    pub fn contrast(self, factor: f32) -> Self {
        debug!(factor, "Adjusting contrast");
        Self {
            image: enhance::contrast(&self.image, factor),
            ..self
        }
    }

    /// Multiply colour saturation by `factor`.
    pub fn saturation(self, factor: f32) -> Self {
        debug!(factor, "Adjusting saturation");
        Self {
            image: enhance::saturation(&self.image, factor),
            ..self
        }
    }

    /// Gaussian blur with standard deviation `radius`.
    pub fn soften(self, radius: f32) -> Self {
        debug!(radius, "Softening");
        Self {
            image: enhance::soften(&self.image, radius),
            ..self
        }
    }

    /// Brightness then contrast, with the factors of `level`. Low is a no-op.
    pub fn tone(self, level: SensitivityLevel) -> Self {
        match level.tone() {
            Some(tone) => self.brightness(tone.brightness).contrast(tone.contrast),
            None => self,
        }
    }

    /// Finish the pipeline, restoring the source's colour mode.
    pub fn into_raster(self) -> RasterImage {
        RasterImage::from_rgba(self.image, self.keep_alpha)
    }
}

/// Calm `image` for the given sensitivity and flags.
///
/// Steps run in a fixed order: tone by `level`, soften when `reduce_colors`,
/// desaturate when `calm_palette`. The input is left untouched and a new
/// image with the same dimensions and colour mode is returned.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn adapt(
    image: &RasterImage,
    level: SensitivityLevel,
    reduce_colors: bool,
    calm_palette: bool,
) -> RasterImage {
    if level.tone().is_none() && !reduce_colors && !calm_palette {
        debug!("No image adaptation requested");
        return image.clone();
    }

    info!(%level, reduce_colors, calm_palette, "Adapting image");

    let mut adapter = ImageAdapter::new(image).tone(level);
    if reduce_colors {
        adapter = adapter.soften(SOFTEN_RADIUS);
    }
    if calm_palette {
        adapter = adapter.saturation(CALM_SATURATION);
    }
    adapter.into_raster()
}
