//! `site.webmanifest` writer.
//!
//! The manifest is static: every field comes straight from
//! [`WebManifestConfig`]. It is written on every run, whether or not the
//! icons it references were produced.

use crate::config::{ManifestIconConfig, WebManifestConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Web app manifest, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<&ManifestIconConfig> for ManifestIcon {
    fn from(icon: &ManifestIconConfig) -> Self {
        Self {
            src: icon.src.clone(),
            sizes: icon.sizes.clone(),
            mime_type: icon.mime_type.clone(),
        }
    }
}

impl From<&WebManifestConfig> for WebManifest {
    fn from(config: &WebManifestConfig) -> Self {
        Self {
            name: config.name.clone(),
            short_name: config.short_name.clone(),
            description: config.description.clone(),
            start_url: config.start_url.clone(),
            display: config.display.clone(),
            theme_color: config.theme_color.clone(),
            background_color: config.background_color.clone(),
            icons: config.icons.iter().map(ManifestIcon::from).collect(),
        }
    }
}

/// Serialize with two-space indentation.
pub fn to_json(manifest: &WebManifest) -> serde_json::Result<String> {
    serde_json::to_string_pretty(manifest)
}

/// Write the manifest to `path`, creating the parent directory if needed.
pub fn write_manifest(manifest: &WebManifest, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = to_json(manifest)?;
    std::fs::write(path, json)
}
