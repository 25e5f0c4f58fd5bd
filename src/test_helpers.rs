//! Shared test utilities.
//!
//! Provides an isolated site layout in a temp directory and synthetic image
//! fixtures, so tests never depend on files checked into the repository.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let (tmp, config, paths) = setup_site();
//! create_test_jpeg(&paths.source("Rajan-Avatar.jpeg"), 800, 600);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::AssetsConfig;
use crate::paths::SitePaths;
use image::{ImageEncoder, RgbImage, RgbaImage};

// =========================================================================
// Fixture setup
// =========================================================================

/// Temp site root with the default layout and an empty source directory.
pub fn setup_site() -> (TempDir, AssetsConfig, SitePaths) {
    let tmp = TempDir::new().unwrap();
    let config = AssetsConfig::default();
    let paths = SitePaths::resolve(tmp.path(), &config.paths);
    std::fs::create_dir_all(&paths.source_dir).unwrap();
    (tmp, config, paths)
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}

/// A file that exists but is not an image. Enough for the mock backend.
pub fn write_placeholder(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, b"placeholder").unwrap();
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small RGBA PNG with a translucent gradient.
pub fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, 64, (y % 256) as u8, 200])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
}

// =========================================================================
// Filesystem assertions
// =========================================================================

/// Every regular file under `dir`, relative to it, sorted.
/// A missing directory yields an empty list.
pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}
