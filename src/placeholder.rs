//! Procedural placeholder images for project cards.
//!
//! Each card gets a generated raster instead of a photo: a cyan-to-blue
//! diagonal gradient, a faint hexagon grid, and a dark caption band along
//! the bottom. The caption text itself is drawn by the UI text stack over
//! the image. Encoding prefers WebP and falls back to PNG.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Gradient endpoints (cyan to blue), applied at 88% opacity.
const GRAD_START: [f32; 3] = [0.0, 234.0, 255.0];
const GRAD_END: [f32; 3] = [0.0, 163.0, 255.0];
const GRAD_ALPHA: f32 = 0.88;

/// Hexagon size in pixels; the grid advances by `size * sqrt(3)`
/// horizontally and `size * 1.5` vertically, alternate rows offset by half
/// a horizontal step.
const HEX_SIZE: f32 = 22.0;

/// Height of the caption band along the bottom edge.
const CAPTION_BAND_HEIGHT: u32 = 48;

/// Parameters for one generated placeholder.
#[derive(Debug, Clone)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    /// Per-card seed; varies the gradient tint so cards are not identical
    pub seed: u64,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            seed: 0,
        }
    }
}

/// Output encoding actually used for a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderFormat {
    Webp,
    Png,
}

impl PlaceholderFormat {
    /// File extension for this encoding.
    pub fn extension(&self) -> &'static str {
        match self {
            PlaceholderFormat::Webp => "webp",
            PlaceholderFormat::Png => "png",
        }
    }
}

/// Renders a placeholder raster.
///
/// Deterministic for a given spec: the seed only perturbs the gradient
/// endpoints slightly, so two cards with different seeds get visibly
/// distinct tints.
pub fn render_placeholder(spec: &PlaceholderSpec) -> RgbaImage {
    let (w, h) = (spec.width.max(1), spec.height.max(1));
    let mut img = RgbaImage::from_pixel(w, h, Rgba([11, 15, 22, 255]));

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let jitter: f32 = rng.gen_range(-14.0..=14.0);
    let start = [GRAD_START[0], (GRAD_START[1] + jitter).clamp(0.0, 255.0), GRAD_START[2]];
    let end = [GRAD_END[0], (GRAD_END[1] + jitter).clamp(0.0, 255.0), GRAD_END[2]];

    // Diagonal linear gradient over the base
    let span = (w + h) as f32;
    for y in 0..h {
        for x in 0..w {
            let t = (x + y) as f32 / span;
            let color = [
                start[0] + (end[0] - start[0]) * t,
                start[1] + (end[1] - start[1]) * t,
                start[2] + (end[2] - start[2]) * t,
            ];
            blend_pixel(&mut img, x as i32, y as i32, color, GRAD_ALPHA);
        }
    }

    draw_hex_grid(&mut img);

    // Caption band along the bottom edge
    let band_top = h.saturating_sub(CAPTION_BAND_HEIGHT);
    for y in band_top..h {
        for x in 0..w {
            blend_pixel(&mut img, x as i32, y as i32, [8.0, 10.0, 14.0], 0.6);
        }
    }

    img
}

/// Encodes a placeholder as WebP, falling back to PNG if WebP encoding
/// fails.
pub fn encode_placeholder(img: &RgbaImage) -> Result<(Vec<u8>, PlaceholderFormat)> {
    let mut buf = Cursor::new(Vec::new());
    if img.write_to(&mut buf, ImageFormat::WebP).is_ok() {
        return Ok((buf.into_inner(), PlaceholderFormat::Webp));
    }

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .context("placeholder PNG encoding failed")?;
    Ok((buf.into_inner(), PlaceholderFormat::Png))
}

fn draw_hex_grid(img: &mut RgbaImage) {
    let (w, h) = (img.width() as f32, img.height() as f32);
    let h_step = HEX_SIZE * 3.0_f32.sqrt();
    let v_step = HEX_SIZE * 1.5;

    let mut row = 0u32;
    let mut y = 0.0;
    while y < h + HEX_SIZE {
        let offset = if row % 2 == 1 { h_step / 2.0 } else { 0.0 };
        let mut x = 0.0;
        while x < w + h_step {
            draw_hexagon(img, x + offset, y, HEX_SIZE * 0.5);
            x += h_step;
        }
        y += v_step;
        row += 1;
    }
}

fn draw_hexagon(img: &mut RgbaImage, cx: f32, cy: f32, r: f32) {
    let vertex = |i: u32| {
        let angle = std::f32::consts::FRAC_PI_3 * i as f32 + std::f32::consts::FRAC_PI_6;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    for i in 0..6 {
        let (x0, y0) = vertex(i);
        let (x1, y1) = vertex((i + 1) % 6);
        draw_line(img, x0, y0, x1, y1, [255.0, 255.0, 255.0], 0.15);
    }
}

/// Plots a straight segment by stepping one pixel at a time and
/// alpha-blending each sample.
fn draw_line(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 3], alpha: f32) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (x0 + dx * t).round() as i32;
        let y = (y0 + dy * t).round() as i32;
        blend_pixel(img, x, y, color, alpha);
    }
}

fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: [f32; 3], alpha: f32) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        let base = px.0[c] as f32;
        px.0[c] = (color[c] * alpha + base * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
    }
    px.0[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic_per_seed() {
        let spec = PlaceholderSpec { width: 64, height: 36, seed: 7 };
        let a = render_placeholder(&spec);
        let b = render_placeholder(&spec);
        assert_eq!(a.as_raw(), b.as_raw());

        let c = render_placeholder(&PlaceholderSpec { seed: 8, ..spec });
        assert_ne!(a.as_raw(), c.as_raw());
    }

    #[test]
    fn caption_band_is_darker_than_body() {
        let spec = PlaceholderSpec { width: 128, height: 128, seed: 0 };
        let img = render_placeholder(&spec);
        let body = img.get_pixel(64, 30).0;
        let band = img.get_pixel(64, 120).0;
        let luma = |p: [u8; 4]| p[0] as u32 + p[1] as u32 + p[2] as u32;
        assert!(luma(band) < luma(body));
    }

    #[test]
    fn degenerate_size_clamps_to_one_pixel() {
        let img = render_placeholder(&PlaceholderSpec { width: 0, height: 0, seed: 0 });
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn encoded_placeholder_round_trips() -> anyhow::Result<()> {
        let spec = PlaceholderSpec { width: 64, height: 36, seed: 3 };
        let img = render_placeholder(&spec);
        let (bytes, format) = encode_placeholder(&img)?;
        assert!(!bytes.is_empty());

        let decoded = image::load_from_memory(&bytes)?;
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 36);

        // With the webp feature on, the first attempt should win
        assert_eq!(format, PlaceholderFormat::Webp);
        Ok(())
    }
}
