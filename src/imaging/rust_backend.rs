//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader` with content sniffing |
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Crop | `DynamicImage::crop_imm` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → PNG | `PngEncoder` (`Best` + adaptive filtering when optimized) |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Encoding, RenderParams};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Codecs the pipeline cannot run without: (format, `image` feature, needs
/// decode, needs encode).
const REQUIRED_CODECS: &[(ImageFormat, &str, bool, bool)] = &[
    (ImageFormat::Jpeg, "jpeg", true, true),
    (ImageFormat::Png, "png", true, true),
    (ImageFormat::Ico, "ico", false, true),
];

/// Names of the `image` crate features whose codecs are not compiled in.
///
/// Empty when the binary can process every asset type.
pub fn missing_codecs() -> Vec<&'static str> {
    REQUIRED_CODECS
        .iter()
        .filter(|(format, _, read, write)| {
            (*read && !format.reading_enabled()) || (*write && !format.writing_enabled())
        })
        .map(|(_, feature, _, _)| *feature)
        .collect()
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Load and decode an image, trusting its content over its extension.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Encode `img` to `path` with the requested container and flags.
fn save_image(img: &DynamicImage, path: &Path, encoding: Encoding) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    let result = match encoding {
        Encoding::Png { optimize: true } => img.write_with_encoder(PngEncoder::new_with_quality(
            writer,
            CompressionType::Best,
            PngFilter::Adaptive,
        )),
        Encoding::Png { optimize: false } => img.write_with_encoder(PngEncoder::new(writer)),
        Encoding::Jpeg { quality } => {
            let encoder = JpegEncoder::new_with_quality(writer, quality.value() as u8);
            // The JPEG encoder only takes 8-bit gray or RGB.
            match img.color() {
                ColorType::L8 | ColorType::Rgb8 => img.write_with_encoder(encoder),
                _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder),
            }
        }
    };

    result.map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn render(&self, params: &RenderParams) -> Result<(), BackendError> {
        let mut img = load_image(&params.source)?;

        if params.variants.iter().any(|v| v.encoding.wants_alpha()) && !img.color().has_alpha() {
            img = DynamicImage::ImageRgba8(img.to_rgba8());
        }

        for variant in &params.variants {
            let resized = match variant.crop {
                Some(crop) => img.crop_imm(crop.x, crop.y, crop.width, crop.height).resize_exact(
                    variant.width,
                    variant.height,
                    FilterType::Lanczos3,
                ),
                None => img.resize_exact(variant.width, variant.height, FilterType::Lanczos3),
            };
            save_image(&resized, &variant.output, variant.encoding)?;
        }

        Ok(())
    }
}
