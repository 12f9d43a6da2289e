use std::path::{Path, PathBuf};

use image::RgbaImage;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    Missing(PathBuf),
    #[error("failed to decode image at {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Loads a banner source image, normalising it to RGBA8.
///
/// Images without an alpha channel gain an opaque one here so every later
/// compositing step can assume four channels. Both failure modes are fatal to
/// engine construction; there is no placeholder fallback for banners.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.to_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "loaded banner source"
    );
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_reports_missing() {
        let err = load_rgba(Path::new("/nonexistent/banner.png")).unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
    }
}
