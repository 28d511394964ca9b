// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// calmkit-adapt — Content adaptation for the calmkit content adapter.
//
// Provides text normalization (punctuation collapse, de-shouting, long
// sentence breaking), calm text presentation, and image calming (tone
// reduction by sensitivity tier, softening blur, desaturation) with PNG output.

pub mod image;
pub mod pipeline;
pub mod text;

// Re-export the primary entry points so callers can use `calmkit_adapt::normalize` etc.
pub use crate::image::adapter::{ImageAdapter, adapt};
pub use crate::image::raster::RasterImage;
pub use pipeline::{adapt_image, adapt_image_bytes, adapt_text};
pub use text::normalizer::normalize;
pub use text::present::{calm_html, present_text};
