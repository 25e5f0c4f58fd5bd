//! Image processing: pure Rust, no external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Crop** | `DynamicImage::crop_imm` |
//! | **Resize → PNG/JPEG** | Lanczos3 + `PngEncoder` / `JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop and scale math (unit testable)
//! - **Parameters**: Data structures describing what to render
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{center_square_crop, resolve_geometry, scale_to_width};
pub use params::{CropRect, Encoding, Geometry, Quality, RenderParams, VariantParams};
pub use rust_backend::{RustBackend, missing_codecs};
