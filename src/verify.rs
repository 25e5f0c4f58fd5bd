//! Post-build verification.
//!
//! Checks that every output the configuration promises is on disk and lists
//! whatever is still sitting in the source folder, so it can be cleaned up
//! once the outputs look right.

use crate::config::AssetsConfig;
use crate::paths::SitePaths;
use crate::plan::{AssetKind, build_plans};
use std::path::{Path, PathBuf};

/// An output the pipeline is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedAsset {
    /// Logical asset name (`favicon`, `project:automation`, ...).
    pub asset: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Present { bytes: u64 },
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub checks: Vec<(ExpectedAsset, AssetStatus)>,
    /// Files left in the source directory, relative to it.
    pub leftovers: Vec<PathBuf>,
}

impl VerifyReport {
    pub fn missing_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|(_, status)| *status == AssetStatus::Missing)
            .count()
    }

    pub fn all_present(&self) -> bool {
        self.missing_count() == 0
    }
}

/// Every file a complete run writes, in pipeline order.
pub fn expected_assets(config: &AssetsConfig, paths: &SitePaths) -> Vec<ExpectedAsset> {
    let mut expected = Vec::new();
    for plan in build_plans(config, paths) {
        for target in &plan.targets {
            expected.push(ExpectedAsset {
                asset: plan.name.clone(),
                path: target.output.clone(),
            });
        }
        if plan.kind == AssetKind::Favicon {
            expected.push(ExpectedAsset {
                asset: plan.name.clone(),
                path: paths.public(&config.favicon.ico.file),
            });
        }
    }
    expected.push(ExpectedAsset {
        asset: "webmanifest".to_string(),
        path: paths.public(&config.webmanifest.file),
    });
    expected
}

fn status_of(path: &Path) -> AssetStatus {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => AssetStatus::Present { bytes: meta.len() },
        _ => AssetStatus::Missing,
    }
}

/// Files still present under `source_dir`, sorted. Empty if it is gone.
pub fn leftover_sources(source_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(source_dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(source_dir)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect();
    files.sort();
    files
}

pub fn verify(config: &AssetsConfig, paths: &SitePaths) -> VerifyReport {
    let checks = expected_assets(config, paths)
        .into_iter()
        .map(|asset| {
            let status = status_of(&asset.path);
            (asset, status)
        })
        .collect();
    VerifyReport {
        checks,
        leftovers: leftover_sources(&paths.source_dir),
    }
}
