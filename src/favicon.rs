//! Multi-resolution `favicon.ico` packing.
//!
//! The favicon step renders a few small square frames into a scratch
//! directory, then asks an [`IconPacker`] to bundle them into one ICO
//! container. Packers are tried as a capability-checked strategy:
//!
//! 1. [`IconPacker::check`] confirms the packer can run at all.
//! 2. [`IconPacker::pack`] writes the container.
//! 3. If either step fails, the configured fallback PNG is copied
//!    byte-for-byte to the ICO path. Browsers accept a PNG served as
//!    `favicon.ico`, so the site always ends up with a usable icon.
//!
//! | Packer | How |
//! |---|---|
//! | [`MagickPacker`] | external `convert <frames...> favicon.ico` |
//! | [`NativePacker`] | `image::codecs::ico::IcoEncoder`, in-process |

use crate::config::{IcoConfig, PackerKind};
use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} is not available")]
    Unavailable(String),
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("ICO encode failed: {0}")]
    Encode(String),
    #[error("packer reported success but {} was not written", .0.display())]
    NoOutput(PathBuf),
}

/// A square PNG frame on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub path: PathBuf,
    pub size: u32,
}

/// Strategy for bundling PNG frames into an ICO container.
pub trait IconPacker {
    /// Name shown in console output.
    fn name(&self) -> &str;

    /// Confirm the packer can run, without producing output.
    fn check(&self) -> Result<(), PackError>;

    /// Write `frames` into a single ICO at `output`.
    fn pack(&self, frames: &[Frame], output: &Path) -> Result<(), PackError>;
}

/// Packs with an external ImageMagick binary.
pub struct MagickPacker {
    program: String,
}

impl MagickPacker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl IconPacker for MagickPacker {
    fn name(&self) -> &str {
        &self.program
    }

    fn check(&self) -> Result<(), PackError> {
        match Command::new(&self.program).arg("-version").output() {
            Ok(out) if out.status.success() => Ok(()),
            _ => Err(PackError::Unavailable(self.program.clone())),
        }
    }

    fn pack(&self, frames: &[Frame], output: &Path) -> Result<(), PackError> {
        let out = Command::new(&self.program)
            .args(frames.iter().map(|f| f.path.as_os_str()))
            .arg(output)
            .output()?;
        if !out.status.success() {
            return Err(PackError::Failed {
                program: self.program.clone(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Packs in-process with the `image` crate's ICO encoder.
///
/// Frames are embedded as PNG, which every browser that reads ICO supports.
pub struct NativePacker;

impl IconPacker for NativePacker {
    fn name(&self) -> &str {
        "native"
    }

    fn check(&self) -> Result<(), PackError> {
        if image::ImageFormat::Ico.writing_enabled() {
            Ok(())
        } else {
            Err(PackError::Unavailable("ICO encoder".to_string()))
        }
    }

    fn pack(&self, frames: &[Frame], output: &Path) -> Result<(), PackError> {
        let encoded = frames
            .iter()
            .map(|frame| -> Result<IcoFrame<'static>, PackError> {
                let bytes = std::fs::read(&frame.path)?;
                IcoFrame::with_encoded(bytes, frame.size, frame.size, ExtendedColorType::Rgba8)
                    .map_err(|e| PackError::Encode(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let file = std::fs::File::create(output)?;
        IcoEncoder::new(std::io::BufWriter::new(file))
            .encode_images(&encoded)
            .map_err(|e| PackError::Encode(e.to_string()))
    }
}

/// Build the packer selected in config.
pub fn packer_for(config: &IcoConfig) -> Box<dyn IconPacker> {
    match config.packer {
        PackerKind::Magick => Box::new(MagickPacker::new(config.magick_program.clone())),
        PackerKind::Native => Box::new(NativePacker),
    }
}

/// How `favicon.ico` ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcoOutcome {
    Packed { packer: String, frames: Vec<u32> },
    Fallback { from: PathBuf, reason: String },
}

/// Pack `frames` into `output`, or copy `fallback` there if packing fails.
///
/// Any existing `output` is removed first, so a packer that exits cleanly
/// without writing falls through to the fallback instead of leaving a stale
/// icon in place. Only an I/O error from the fallback copy itself is returned.
pub fn build_ico(
    packer: &dyn IconPacker,
    frames: &[Frame],
    output: &Path,
    fallback: &Path,
) -> std::io::Result<IcoOutcome> {
    if output.exists() {
        std::fs::remove_file(output)?;
    }
    let packed = packer
        .check()
        .and_then(|()| packer.pack(frames, output))
        .and_then(|()| {
            if output.is_file() {
                Ok(())
            } else {
                Err(PackError::NoOutput(output.to_path_buf()))
            }
        });
    match packed {
        Ok(()) => Ok(IcoOutcome::Packed {
            packer: packer.name().to_string(),
            frames: frames.iter().map(|f| f.size).collect(),
        }),
        Err(err) => {
            std::fs::copy(fallback, output)?;
            Ok(IcoOutcome::Fallback {
                from: fallback.to_path_buf(),
                reason: err.to_string(),
            })
        }
    }
}
