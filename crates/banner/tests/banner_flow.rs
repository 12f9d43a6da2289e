//! End-to-end pass over the engine: banner images on disk, construction via
//! `from_paths`, a recompute, and the composed frame.

use std::path::Path;

use banner::{parse_hex_color, AssetError, BannerLayout, Viewport};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32, pixel: Rgba<u8>) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, pixel)
        .save(&path)
        .expect("write test banner");
    path
}

#[test]
fn loads_from_disk_and_composes_a_frame() {
    let dir = TempDir::new().unwrap();
    let top = write_png(dir.path(), "top.png", 100, 20, Rgba([200, 40, 40, 255]));
    let bottom = write_png(dir.path(), "bottom.png", 80, 40, Rgba([40, 200, 40, 255]));
    let fill = parse_hex_color("#3058af").unwrap();

    let layout = BannerLayout::from_paths(&top, &bottom, fill).expect("construct engine");
    let result = layout.recompute(Viewport::new(400, 300));

    let bands = result.bands();
    assert!((bands.top - 20.0 / 300.0).abs() < 1e-9);
    // bottom scaled to width 400: 40 * (400 / 80) = 200 px.
    assert!((bands.bottom - 200.0 / 300.0).abs() < 1e-9);
    assert_eq!(result.top_raster().dimensions(), (400, 20));
    assert_eq!(result.bottom_raster().dimensions(), (400, 200));

    let frame = result.compose();
    assert_eq!(frame.dimensions(), (400, 300));
    assert_eq!(*frame.get_pixel(0, 0), Rgba([200, 40, 40, 255]));
    assert_eq!(*frame.get_pixel(399, 299), Rgba([40, 200, 40, 255]));
    assert_eq!(*frame.get_pixel(200, 50), fill);
}

#[test]
fn missing_banner_fails_construction() {
    let dir = TempDir::new().unwrap();
    let top = write_png(dir.path(), "top.png", 10, 5, Rgba([0, 0, 0, 255]));
    let missing = dir.path().join("nope.png");
    let fill = parse_hex_color("#000000").unwrap();

    let err = BannerLayout::from_paths(&top, &missing, fill).unwrap_err();
    assert!(matches!(err, AssetError::Missing(_)));
}
