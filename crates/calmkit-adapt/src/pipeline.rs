// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptation entry points driven by an `AdaptationConfig`.

use calmkit_core::AdaptationConfig;
use calmkit_core::error::Result;
use tracing::{debug, info, instrument};

use crate::image::adapter;
use crate::image::raster::RasterImage;
use crate::text::normalizer;

/// Normalize `text` according to `config.simplify_text`.
pub fn adapt_text(text: &str, config: &AdaptationConfig) -> String {
    normalizer::normalize(text, config.simplify_text)
}

/// Calm `image` according to the sensitivity and flags in `config`.
pub fn adapt_image(image: &RasterImage, config: &AdaptationConfig) -> RasterImage {
    adapter::adapt(
        image,
        config.sensitivity,
        config.reduce_colors,
        config.calm_palette,
    )
}

/// Decode PNG/JPEG bytes, adapt, and re-encode as PNG.
///
/// Either the whole adapted PNG is returned or an error; there is no partial
/// output.
#[instrument(skip(data, config), fields(data_len = data.len(), sensitivity = %config.sensitivity))]
pub fn adapt_image_bytes(data: &[u8], config: &AdaptationConfig) -> Result<Vec<u8>> {
    let source = RasterImage::decode(data)?;
    let adapted = adapt_image(&source, config);
    let png = adapted.to_png_bytes()?;
    info!(
        width = adapted.width(),
        height = adapted.height(),
        png_bytes = png.len(),
        "Image adapted"
    );
    debug!(active = config.active_adaptations(), "Adaptation config applied");
    Ok(png)
}
