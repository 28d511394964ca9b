// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement primitives — brightness, contrast, and saturation as blends
// towards a neutral baseline, plus an alpha-preserving Gaussian soften.
//
// Every blend computes `base + factor * (value - base)` per colour channel,
// clamped to 0..=255 and truncated. A factor of 1.0 is the identity; factors
// below 1.0 move towards the baseline. Alpha is never modified.

use image::{Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;

/// ITU-R 601-2 luma of an RGB triple, in 16-bit fixed point.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Mean luma of the whole image, rounded to the nearest level. Alpha is ignored.
pub fn mean_luma(image: &RgbaImage) -> u8 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = image
        .pixels()
        .map(|Rgba([r, g, b, _])| luma(*r, *g, *b) as u64)
        .sum();
    ((sum as f64 / count as f64) + 0.5) as u8
}

fn blend(base: f32, value: u8, factor: f32) -> u8 {
    (base + factor * (value as f32 - base)).clamp(0.0, 255.0) as u8
}

/// Scale brightness: blend towards black.
pub fn brightness(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_colour(image, |r, g, b| {
        [blend(0.0, r, factor), blend(0.0, g, factor), blend(0.0, b, factor)]
    })
}

/// Scale contrast: blend towards flat gray at the image's mean luma.
pub fn contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = mean_luma(image) as f32;
    map_colour(image, |r, g, b| {
        [blend(mean, r, factor), blend(mean, g, factor), blend(mean, b, factor)]
    })
}

/// Scale colour saturation: blend each pixel towards its own luma.
pub fn saturation(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_colour(image, |r, g, b| {
        let gray = luma(r, g, b) as f32;
        [blend(gray, r, factor), blend(gray, g, factor), blend(gray, b, factor)]
    })
}

/// Gaussian blur of the colour channels with standard deviation `sigma`.
///
/// `sigma` must be positive. The source alpha channel is copied back
/// unchanged so opaque images stay opaque.
pub fn soften(image: &RgbaImage, sigma: f32) -> RgbaImage {
    let mut blurred = gaussian_blur_f32(image, sigma);
    for (out, src) in blurred.pixels_mut().zip(image.pixels()) {
        out.0[3] = src.0[3];
    }
    blurred
}

fn map_colour(image: &RgbaImage, f: impl Fn(u8, u8, u8) -> [u8; 3]) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let [r, g, b] = f(r, g, b);
        Rgba([r, g, b, a])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> RgbaImage {
        RgbaImage::from_fn(32, 32, |x, y| {
            Rgba([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8, 255])
        })
    }

    #[test]
    fn luma_of_primaries() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn mean_luma_rounds() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 10, 10, 255]));
        img.put_pixel(1, 0, Rgba([11, 11, 11, 255]));
        // (10 + 11) / 2 = 10.5 rounds up.
        assert_eq!(mean_luma(&img), 11);
    }

    #[test]
    fn unit_factor_is_identity() {
        let img = gradient();
        assert_eq!(brightness(&img, 1.0), img);
        assert_eq!(contrast(&img, 1.0), img);
        assert_eq!(saturation(&img, 1.0), img);
    }

    #[test]
    fn brightness_moves_towards_black() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 51, 255]));
        let out = brightness(&img, 0.5);
        assert_eq!(out.get_pixel(0, 0), &Rgba([100, 50, 25, 255]));
        assert_eq!(brightness(&img, 0.0).get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn contrast_zero_flattens_to_mean() {
        let img = gradient();
        let mean = mean_luma(&img);
        let flat = contrast(&img, 0.0);
        assert!(flat.pixels().all(|p| p.0[..3] == [mean, mean, mean]));
    }

    #[test]
    fn contrast_pulls_extremes_inward() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
        // Mean luma is 100; half contrast lands a quarter of the way in.
        let out = contrast(&img, 0.5);
        assert_eq!(out.get_pixel(0, 0), &Rgba([50, 50, 50, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([150, 150, 150, 255]));
    }

    #[test]
    fn saturation_zero_is_grayscale() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        assert_eq!(saturation(&img, 0.0).get_pixel(0, 0), &Rgba([76, 76, 76, 255]));
    }

    #[test]
    fn saturation_leaves_gray_alone() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([120, 120, 120, 255]));
        assert_eq!(saturation(&img, 0.6), img);
    }

    #[test]
    fn blends_preserve_alpha() {
        let img = RgbaImage::from_fn(4, 4, |x, y| Rgba([200, 150, 100, (x * 60 + y) as u8]));
        for out in [brightness(&img, 0.7), contrast(&img, 0.6), saturation(&img, 0.6)] {
            for (a, b) in out.pixels().zip(img.pixels()) {
                assert_eq!(a.0[3], b.0[3]);
            }
        }
    }

    #[test]
    fn soften_spreads_a_bright_point() {
        let mut img = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
        img.put_pixel(4, 4, Rgba([255, 255, 255, 255]));

        let out = soften(&img, 0.5);
        assert!(out.get_pixel(4, 4).0[0] < 255);
        assert!(out.get_pixel(3, 4).0[0] > 0);
        assert!(out.get_pixel(4, 5).0[0] > 0);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert!(out.pixels().all(|p| p.0[3] == 255));
    }
}
