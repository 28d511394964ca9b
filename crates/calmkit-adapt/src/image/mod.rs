// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decoding, enhancement primitives, and the calming pipeline.

pub mod adapter;
pub mod enhance;
pub mod raster;

pub use adapter::{ImageAdapter, adapt};
pub use raster::RasterImage;
