//! Asset generation: the build pipeline.
//!
//! Runs every [`AssetPlan`] in order, then writes the web manifest.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! ├── favicon.ico                  # packed 16/32/48, or a copy of the 32px PNG
//! ├── favicon-16x16.png
//! ├── favicon-32x32.png
//! ├── apple-touch-icon.png
//! ├── android-chrome-192x192.png
//! ├── android-chrome-512x512.png
//! ├── site.webmanifest
//! └── images/
//!     ├── rajan-avatar.jpg         # 500x500 center square
//!     ├── rajan-about.jpg          # 1200 wide, aspect kept
//!     ├── og/home.jpg              # 1200x630
//!     └── projects/<slug>/{cover,dashboard,thumb}.jpg
//! ```
//!
//! ## Failure semantics
//!
//! - A missing source skips its asset with a [`ProcessEvent::AssetSkipped`];
//!   the run continues.
//! - A source that exists but cannot be decoded aborts the run. Files written
//!   by earlier assets stay on disk.
//! - ICO packing never aborts the run; see [`favicon`](crate::favicon).
//!
//! Each source is decoded once: identify reads the header for geometry,
//! then a single render call writes all of its variants.

use crate::config::{AssetsConfig, IcoConfig};
use crate::favicon::{self, Frame, IcoOutcome, IconPacker};
use crate::imaging::{
    BackendError, Encoding, ImageBackend, RenderParams, VariantParams, missing_codecs,
    resolve_geometry,
};
use crate::paths::SitePaths;
use crate::plan::{AssetKind, AssetPlan, build_plans};
use crate::webmanifest::{self, WebManifest};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error(
        "image codecs not compiled in: {}. Rebuild with these `image` crate features enabled",
        .0.join(", ")
    )]
    MissingCodecs(Vec<&'static str>),
}

/// Progress reported while the pipeline runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// The asset's source file is absent; nothing was written for it.
    AssetSkipped { name: String, source: String },
    AssetStarted {
        name: String,
        source: String,
        dimensions: (u32, u32),
    },
    VariantWritten {
        output: String,
        width: u32,
        height: u32,
        encoding: String,
    },
    IcoWritten { output: String, outcome: IcoOutcome },
    ManifestWritten { output: String },
}

/// What a run produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProcessSummary {
    /// Every file written, in order.
    pub written: Vec<PathBuf>,
    /// Names of assets skipped for a missing source.
    pub skipped: Vec<String>,
}

/// Fail fast when a codec the pipeline needs is not compiled in.
pub fn check_capabilities() -> Result<(), ProcessError> {
    let missing = missing_codecs();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProcessError::MissingCodecs(missing))
    }
}

/// Resolve a plan's targets against the source dimensions.
pub fn resolve_variants(plan: &AssetPlan, source_dims: (u32, u32)) -> Vec<VariantParams> {
    plan.targets
        .iter()
        .map(|target| {
            let (crop, width, height) = resolve_geometry(target.geometry, source_dims);
            VariantParams {
                output: target.output.clone(),
                crop,
                width,
                height,
                encoding: target.encoding,
            }
        })
        .collect()
}

/// Render one plan: identify, resolve, create directories, encode.
///
/// `extra` variants are rendered from the same decode but not reported;
/// the favicon step uses them for its scratch frames. Returns the plan's
/// own written paths.
pub fn generate_variants(
    backend: &impl ImageBackend,
    plan: &AssetPlan,
    extra: &[VariantParams],
    paths: &SitePaths,
    on_event: &mut dyn FnMut(ProcessEvent),
) -> Result<Vec<PathBuf>, ProcessError> {
    let dims = backend.identify(&plan.source)?;
    on_event(ProcessEvent::AssetStarted {
        name: plan.name.clone(),
        source: paths.display(&plan.source),
        dimensions: dims.as_tuple(),
    });

    let variants = resolve_variants(plan, dims.as_tuple());
    let mut all = variants.clone();
    all.extend_from_slice(extra);

    for variant in &all {
        if let Some(parent) = variant.output.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    backend.render(&RenderParams {
        source: plan.source.clone(),
        variants: all,
    })?;

    for variant in &variants {
        on_event(ProcessEvent::VariantWritten {
            output: paths.display(&variant.output),
            width: variant.width,
            height: variant.height,
            encoding: variant.encoding.label(),
        });
    }

    Ok(variants.into_iter().map(|v| v.output).collect())
}

/// Favicon PNGs plus the ICO container.
///
/// ICO frames are rendered into a scratch directory alongside the PNGs and
/// removed once packing is done, whichever strategy succeeded.
fn generate_favicon(
    backend: &impl ImageBackend,
    plan: &AssetPlan,
    ico: &IcoConfig,
    packer: &dyn IconPacker,
    paths: &SitePaths,
    on_event: &mut dyn FnMut(ProcessEvent),
) -> Result<Vec<PathBuf>, ProcessError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("favicon-frames-");
    let scratch = match &paths.scratch_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            builder.tempdir_in(dir)?
        }
        None => builder.tempdir()?,
    };

    let frames: Vec<Frame> = ico
        .frames
        .iter()
        .map(|&size| Frame {
            path: scratch.path().join(format!("favicon_{size}.png")),
            size,
        })
        .collect();
    let frame_variants: Vec<VariantParams> = frames
        .iter()
        .map(|frame| VariantParams {
            output: frame.path.clone(),
            crop: None,
            width: frame.size,
            height: frame.size,
            encoding: Encoding::Png { optimize: false },
        })
        .collect();

    let mut written = generate_variants(backend, plan, &frame_variants, paths, on_event)?;

    let ico_path = paths.public(&ico.file);
    let outcome = favicon::build_ico(packer, &frames, &ico_path, &paths.public(&ico.fallback))?;
    scratch.close()?;

    on_event(ProcessEvent::IcoWritten {
        output: paths.display(&ico_path),
        outcome,
    });
    written.push(ico_path);
    Ok(written)
}

/// Run the whole pipeline with the given backend.
pub fn run(
    backend: &impl ImageBackend,
    config: &AssetsConfig,
    paths: &SitePaths,
    mut on_event: impl FnMut(ProcessEvent),
) -> Result<ProcessSummary, ProcessError> {
    check_capabilities()?;
    let packer = favicon::packer_for(&config.favicon.ico);
    let mut summary = ProcessSummary::default();

    for plan in build_plans(config, paths) {
        if !plan.source.is_file() {
            on_event(ProcessEvent::AssetSkipped {
                name: plan.name.clone(),
                source: paths.display(&plan.source),
            });
            summary.skipped.push(plan.name);
            continue;
        }

        let written = match plan.kind {
            AssetKind::Favicon => generate_favicon(
                backend,
                &plan,
                &config.favicon.ico,
                packer.as_ref(),
                paths,
                &mut on_event,
            )?,
            AssetKind::Avatar | AssetKind::OpenGraph | AssetKind::Project => {
                generate_variants(backend, &plan, &[], paths, &mut on_event)?
            }
        };
        summary.written.extend(written);
    }

    let manifest_path = paths.public(&config.webmanifest.file);
    webmanifest::write_manifest(&WebManifest::from(&config.webmanifest), &manifest_path)?;
    on_event(ProcessEvent::ManifestWritten {
        output: paths.display(&manifest_path),
    });
    summary.written.push(manifest_path);

    Ok(summary)
}
