//! Directory layout resolved against the site root.
//!
//! Every output path the pipeline writes is a join of one of these
//! directories and a file name from [`AssetsConfig`](crate::config::AssetsConfig).

use crate::config::PathsConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub public_dir: PathBuf,
    pub images_dir: PathBuf,
    pub source_dir: PathBuf,
    pub scratch_dir: Option<PathBuf>,
}

impl SitePaths {
    /// Resolve the configured directories against `root`.
    ///
    /// Absolute entries in `config` are kept as-is.
    pub fn resolve(root: &Path, config: &PathsConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            public_dir: root.join(&config.public_dir),
            images_dir: root.join(&config.images_dir),
            source_dir: root.join(&config.source_dir),
            scratch_dir: config.scratch_dir.as_ref().map(|dir| root.join(dir)),
        }
    }

    pub fn source(&self, file: &str) -> PathBuf {
        self.source_dir.join(file)
    }

    pub fn public(&self, file: &str) -> PathBuf {
        self.public_dir.join(file)
    }

    pub fn image(&self, file: &str) -> PathBuf {
        self.images_dir.join(file)
    }

    /// Path shown in console output: relative to the site root when possible.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }

    /// Site-root URL of a file under the public directory, e.g.
    /// `public/images/og/home.jpg` → `/images/og/home.jpg`.
    ///
    /// Returns `None` for files outside the public directory.
    pub fn url(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.public_dir).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(format!("/{}", segments.join("/")))
    }
}
