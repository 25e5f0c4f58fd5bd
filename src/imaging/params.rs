//! Parameter types for image operations.
//!
//! These structs describe *what* to render, not *how*. The pipeline builds a
//! [`RenderParams`] per source image and hands it to the
//! [`backend`](super::backend), which decodes the source once and writes
//! every variant. Keeping the description separate from the pixel work lets
//! tests swap in a mock backend.
//!
//! ## Types
//!
//! - [`Quality`]: JPEG quality (1–100). Clamped on construction.
//! - [`Encoding`]: output container plus its encoder flags.
//! - [`Geometry`]: how a target's pixel size is derived from the source.
//! - [`CropRect`]: a source-space rectangle applied before resampling.
//! - [`VariantParams`]: one fully-resolved output file.
//! - [`RenderParams`]: a source plus all of its resolved variants.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Output encoding for a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// PNG, always written with an alpha channel.
    /// `optimize` selects the slowest, smallest compression settings.
    Png { optimize: bool },
    /// Baseline JPEG. Alpha is dropped before encoding.
    Jpeg { quality: Quality },
}

impl Encoding {
    pub fn jpeg(quality: u32) -> Self {
        Encoding::Jpeg {
            quality: Quality::new(quality),
        }
    }

    /// Whether the source should be promoted to RGBA before resampling.
    pub fn wants_alpha(self) -> bool {
        matches!(self, Encoding::Png { .. })
    }

    /// Short label used in console output.
    pub fn label(self) -> String {
        match self {
            Encoding::Png { optimize: true } => "png, optimized".to_string(),
            Encoding::Png { optimize: false } => "png".to_string(),
            Encoding::Jpeg { quality } => format!("jpeg q{}", quality.value()),
        }
    }
}

/// How a target's output size is derived from the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Resample to exactly `width × height`, ignoring aspect ratio.
    Stretch { width: u32, height: u32 },
    /// Crop the largest centered square, then resample to `side × side`.
    CenterSquare { side: u32 },
    /// Resample to `width`, height scaled to keep the source aspect ratio.
    FitWidth { width: u32 },
}

/// A rectangle in source pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One output file, with geometry already resolved against the source.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantParams {
    pub output: PathBuf,
    pub crop: Option<CropRect>,
    pub width: u32,
    pub height: u32,
    pub encoding: Encoding,
}

/// Everything the backend needs to render one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub source: PathBuf,
    pub variants: Vec<VariantParams>,
}
