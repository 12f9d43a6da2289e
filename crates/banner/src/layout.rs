use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::source::{load_rgba, AssetError};

/// Window-relative heights of the three horizontal bands.
///
/// The top and bottom bands claim what their banners need and the middle band
/// absorbs the remainder. When the viewport is too short for both banners the
/// middle collapses to zero (never negative) and the banners overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandFractions {
    pub top: f64,
    pub middle: f64,
    pub bottom: f64,
}

/// Target surface size in physical pixels.
///
/// Zero-sized dimensions occur transiently while the window manager settles a
/// new window, so both axes are clamped to 1 instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Pixel rectangle within the viewport, used for the middle-band content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Output of one relayout pass: band fractions plus the two derived rasters.
///
/// Only the most recent result is retained by the caller; the rasters it
/// holds are exactly what the display surface renders, so dropping an old
/// result releases the superseded pixel buffers.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    viewport: Viewport,
    bands: BandFractions,
    top_raster: RgbaImage,
    bottom_raster: RgbaImage,
    fill: Rgba<u8>,
}

impl LayoutResult {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bands(&self) -> BandFractions {
        self.bands
    }

    /// Top banner tiled to exactly the viewport width, at native tile height.
    pub fn top_raster(&self) -> &RgbaImage {
        &self.top_raster
    }

    /// Bottom banner rescaled to (viewport width, bottom band height).
    pub fn bottom_raster(&self) -> &RgbaImage {
        &self.bottom_raster
    }

    /// Content-placement handle: the middle band's pixel rectangle.
    ///
    /// Caller widgets belong inside this area; it collapses to zero height
    /// when the banners fill the whole viewport.
    pub fn middle_rect(&self) -> Rect {
        let height = self.viewport.height() as f64;
        let top_px = (self.bands.top * height).round() as u32;
        let middle_px = (self.bands.middle * height).round() as u32;
        Rect {
            x: 0,
            y: top_px.min(self.viewport.height()),
            width: self.viewport.width(),
            height: middle_px.min(self.viewport.height().saturating_sub(top_px)),
        }
    }

    /// Flattens the fill colour and both rasters into one full-window frame.
    ///
    /// The top raster sits flush with the top edge, the bottom raster flush
    /// with the bottom edge, and banner alpha blends over the fill so
    /// feathered banner edges melt into the backdrop.
    pub fn compose(&self) -> RgbaImage {
        let mut frame = RgbaImage::from_pixel(self.viewport.width(), self.viewport.height(), self.fill);
        imageops::overlay(&mut frame, &self.top_raster, 0, 0);
        let bottom_y = self
            .viewport
            .height()
            .saturating_sub(self.bottom_raster.height()) as i64;
        imageops::overlay(&mut frame, &self.bottom_raster, 0, bottom_y);
        frame
    }
}

/// Owns the two banner sources and computes band layouts on demand.
///
/// The sources are loaded once at construction and never mutated afterwards;
/// `recompute` reads them and produces fresh rasters for the requested
/// viewport.
#[derive(Debug)]
pub struct BannerLayout {
    top: RgbaImage,
    bottom: RgbaImage,
    fill: Rgba<u8>,
}

impl BannerLayout {
    /// Loads both banner images from disk. Fatal if either is missing or
    /// unreadable; the engine cannot run without its sources.
    pub fn from_paths(top: &Path, bottom: &Path, fill: Rgba<u8>) -> Result<Self, AssetError> {
        let top = load_rgba(top)?;
        let bottom = load_rgba(bottom)?;
        Ok(Self::from_images(top, bottom, fill))
    }

    pub fn from_images(top: RgbaImage, bottom: RgbaImage, fill: Rgba<u8>) -> Self {
        Self { top, bottom, fill }
    }

    pub fn fill(&self) -> Rgba<u8> {
        self.fill
    }

    /// Recomputes the band partition and rasters for the given viewport.
    pub fn recompute(&self, viewport: Viewport) -> LayoutResult {
        let width = viewport.width();
        let height = viewport.height() as f64;

        // The top banner never shrinks below its native pixel height; it only
        // clamps when the viewport itself is shorter.
        let top_fraction = (self.top.height() as f64 / height).min(1.0);

        let bottom_scaled_height = scaled_height_for_width(&self.bottom, width);
        let bottom_fraction = (bottom_scaled_height as f64 / height).min(1.0);
        let middle_fraction = (1.0 - top_fraction - bottom_fraction).max(0.0);

        let top_raster = tile_horizontally(&self.top, width);
        let bottom_px = ((bottom_fraction * height) as u32).max(1);
        let bottom_raster = imageops::resize(&self.bottom, width, bottom_px, FilterType::Lanczos3);

        tracing::trace!(
            width,
            height = viewport.height(),
            top = top_fraction,
            middle = middle_fraction,
            bottom = bottom_fraction,
            "recomputed banner layout"
        );

        LayoutResult {
            viewport,
            bands: BandFractions {
                top: top_fraction,
                middle: middle_fraction,
                bottom: bottom_fraction,
            },
            top_raster,
            bottom_raster,
            fill: self.fill,
        }
    }
}

/// Height of `image` when uniformly rescaled to `target_width`, floored at 1.
fn scaled_height_for_width(image: &RgbaImage, target_width: u32) -> u32 {
    let (width, height) = image.dimensions();
    if width == 0 {
        return height;
    }
    let scale = target_width as f64 / width as f64;
    ((height as f64 * scale) as u32).max(1)
}

/// Repeats `tile` left to right until `target_width` is covered.
///
/// Widths at or below one tile return a single left-aligned crop. Otherwise
/// whole copies are pasted from x = 0, advancing by the tile width, and the
/// final remainder is a partial crop so the canvas width is hit exactly. The
/// canvas keeps the tile's native height.
fn tile_horizontally(tile: &RgbaImage, target_width: u32) -> RgbaImage {
    let (tile_width, tile_height) = tile.dimensions();
    if target_width <= tile_width {
        return imageops::crop_imm(tile, 0, 0, target_width, tile_height).to_image();
    }

    let mut canvas = RgbaImage::new(target_width, tile_height);
    let mut x = 0;
    while x < target_width {
        let remaining = target_width - x;
        if remaining >= tile_width {
            imageops::replace(&mut canvas, tile, x as i64, 0);
            x += tile_width;
        } else {
            let partial = imageops::crop_imm(tile, 0, 0, remaining, tile_height).to_image();
            imageops::replace(&mut canvas, &partial, x as i64, 0);
            x = target_width;
        }
    }
    canvas
}
