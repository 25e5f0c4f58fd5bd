//! Asset configuration module.
//!
//! Handles loading, validating, and merging `assets.toml`. Every size,
//! quality and file name the pipeline uses lives here as a stock default;
//! a user file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! `assets.toml` is looked up in the site root (the `--base` directory), or
//! passed explicitly with `--config`:
//!
//! ```text
//! site/
//! ├── assets.toml                       # optional overrides
//! └── public/
//!     ├── favicon.ico, *.png, site.webmanifest
//!     └── images/
//!         ├── rajan-avatar.jpg, og/, projects/
//!         └── images to process/        # sources
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only make project thumbnails a bit crisper
//! [[projects.variants]]
//! file = "thumb.jpg"
//! size = [720, 450]
//! quality = 90
//! ```
//!
//! Tables merge key-by-key; arrays replace the stock array wholesale.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the site root when `--config` is not given.
pub const CONFIG_FILENAME: &str = "assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full asset configuration.
///
/// All fields have defaults matching the site's published layout. Unknown
/// keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory layout, relative to the site root.
    pub paths: PathsConfig,
    /// Favicon PNGs and the `favicon.ico` container.
    pub favicon: FaviconConfig,
    /// Square avatar and the full-width about-page photo.
    pub avatar: AvatarConfig,
    /// Open Graph banner.
    pub og: OgConfig,
    /// Per-project screenshots.
    pub projects: ProjectsConfig,
    /// `site.webmanifest` contents.
    pub webmanifest: WebManifestConfig,
}

/// Directory layout. Relative paths resolve against the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Web root: favicons and the web manifest land here.
    pub public_dir: String,
    /// Image output root: avatar, OG and project images land here.
    pub images_dir: String,
    /// Where the source images are read from.
    pub source_dir: String,
    /// Parent directory for the ICO scratch frames (system temp when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
            images_dir: "public/images".to_string(),
            source_dir: "public/images/images to process".to_string(),
            scratch_dir: None,
        }
    }
}

/// One square PNG icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconTarget {
    pub file: String,
    /// `[width, height]` in pixels.
    pub size: [u32; 2],
}

impl IconTarget {
    fn new(file: &str, side: u32) -> Self {
        Self {
            file: file.to_string(),
            size: [side, side],
        }
    }
}

/// Favicon generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconConfig {
    /// Source file name inside `paths.source_dir`.
    pub source: String,
    /// PNG icons written to `paths.public_dir`, always optimized.
    pub icons: Vec<IconTarget>,
    pub ico: IcoConfig,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            source: "fav.ico.jpg".to_string(),
            icons: vec![
                IconTarget::new("favicon-16x16.png", 16),
                IconTarget::new("favicon-32x32.png", 32),
                IconTarget::new("apple-touch-icon.png", 180),
                IconTarget::new("android-chrome-192x192.png", 192),
                IconTarget::new("android-chrome-512x512.png", 512),
            ],
            ico: IcoConfig::default(),
        }
    }
}

/// Which strategy packs the multi-resolution `favicon.ico`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackerKind {
    /// External ImageMagick `convert`.
    Magick,
    /// In-process ICO encoder.
    Native,
}

/// `favicon.ico` settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IcoConfig {
    /// Output file name inside `paths.public_dir`.
    pub file: String,
    /// Square frame sizes bundled into the container (1–256).
    pub frames: Vec<u32>,
    pub packer: PackerKind,
    /// Program invoked by the `magick` packer.
    pub magick_program: String,
    /// Icon PNG copied verbatim when packing is unavailable or fails.
    /// Must be one of `favicon.icons`.
    pub fallback: String,
}

impl Default for IcoConfig {
    fn default() -> Self {
        Self {
            file: "favicon.ico".to_string(),
            frames: vec![16, 32, 48],
            packer: PackerKind::Magick,
            magick_program: "convert".to_string(),
            fallback: "favicon-32x32.png".to_string(),
        }
    }
}

/// A center-cropped square JPEG.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SquareTarget {
    pub file: String,
    pub side: u32,
    pub quality: u32,
}

/// A JPEG scaled to a width, aspect ratio preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidthTarget {
    pub file: String,
    pub width: u32,
    pub quality: u32,
}

/// A JPEG stretched to an exact size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JpegTarget {
    pub file: String,
    /// `[width, height]` in pixels.
    pub size: [u32; 2],
    pub quality: u32,
}

impl JpegTarget {
    fn new(file: &str, width: u32, height: u32, quality: u32) -> Self {
        Self {
            file: file.to_string(),
            size: [width, height],
            quality,
        }
    }
}

/// Avatar generation settings. Outputs land in `paths.images_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarConfig {
    pub source: String,
    /// Largest centered square, resampled.
    pub square: SquareTarget,
    /// Uncropped photo for the about page.
    pub about: WidthTarget,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            source: "Rajan-Avatar.jpeg".to_string(),
            square: SquareTarget {
                file: "rajan-avatar.jpg".to_string(),
                side: 500,
                quality: 85,
            },
            about: WidthTarget {
                file: "rajan-about.jpg".to_string(),
                width: 1200,
                quality: 90,
            },
        }
    }
}

/// Open Graph banner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OgConfig {
    pub source: String,
    /// Output path relative to `paths.images_dir`; parent directories are
    /// created on demand.
    pub target: JpegTarget,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            source: "home og.jpg".to_string(),
            target: JpegTarget::new("og/home.jpg", 1200, 630, 85),
        }
    }
}

/// A project screenshot and the slug of its output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSource {
    pub source: String,
    pub slug: String,
}

impl ProjectSource {
    fn new(source: &str, slug: &str) -> Self {
        Self {
            source: source.to_string(),
            slug: slug.to_string(),
        }
    }
}

/// Project screenshot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Parent of the per-project directories, relative to `paths.images_dir`.
    pub dir: String,
    pub sources: Vec<ProjectSource>,
    /// Variants written for every project.
    pub variants: Vec<JpegTarget>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            dir: "projects".to_string(),
            sources: vec![
                ProjectSource::new("Med-ai.png", "healthcare-ai"),
                ProjectSource::new("Trading-ai.png", "trading-ai"),
                ProjectSource::new("futurevision-ai.png", "automation"),
                ProjectSource::new("futuristic-ai.png", "futuristic-ai"),
            ],
            variants: vec![
                JpegTarget::new("cover.jpg", 1200, 800, 85),
                JpegTarget::new("dashboard.jpg", 1440, 900, 85),
                JpegTarget::new("thumb.jpg", 720, 450, 80),
            ],
        }
    }
}

/// An icon entry of the web manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestIconConfig {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIconConfig {
    fn png(src: &str, sizes: &str) -> Self {
        Self {
            src: src.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
        }
    }
}

/// Web app manifest settings. Written verbatim; nothing is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebManifestConfig {
    /// Output file name inside `paths.public_dir`.
    pub file: String,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<ManifestIconConfig>,
}

impl Default for WebManifestConfig {
    fn default() -> Self {
        Self {
            file: "site.webmanifest".to_string(),
            name: "Rajan Maharjan - Portfolio".to_string(),
            short_name: "RM Portfolio".to_string(),
            description: "AI Software Engineer & Full-Stack Developer Portfolio".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            theme_color: "#000000".to_string(),
            background_color: "#000000".to_string(),
            icons: vec![
                ManifestIconConfig::png("/android-chrome-192x192.png", "192x192"),
                ManifestIconConfig::png("/android-chrome-512x512.png", "512x512"),
            ],
        }
    }
}

fn validate_quality(name: &str, quality: u32) -> Result<(), ConfigError> {
    if !(1..=100).contains(&quality) {
        return Err(ConfigError::Validation(format!(
            "{name}.quality must be 1-100"
        )));
    }
    Ok(())
}

fn validate_size(name: &str, size: [u32; 2]) -> Result<(), ConfigError> {
    if size[0] == 0 || size[1] == 0 {
        return Err(ConfigError::Validation(format!(
            "{name}.size values must be non-zero"
        )));
    }
    Ok(())
}

impl AssetsConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for icon in &self.favicon.icons {
            validate_size(&format!("favicon.icons[{}]", icon.file), icon.size)?;
        }
        let ico = &self.favicon.ico;
        if ico.frames.is_empty() {
            return Err(ConfigError::Validation(
                "favicon.ico.frames must not be empty".into(),
            ));
        }
        if ico.frames.iter().any(|&f| f == 0 || f > 256) {
            return Err(ConfigError::Validation(
                "favicon.ico.frames values must be 1-256".into(),
            ));
        }
        let mut frame_sizes = HashSet::new();
        if let Some(dup) = ico.frames.iter().find(|&&f| !frame_sizes.insert(f)) {
            return Err(ConfigError::Validation(format!(
                "favicon.ico.frames: duplicate size {dup}"
            )));
        }
        if !self.favicon.icons.iter().any(|i| i.file == ico.fallback) {
            return Err(ConfigError::Validation(format!(
                "favicon.ico.fallback '{}' is not one of favicon.icons",
                ico.fallback
            )));
        }

        if self.avatar.square.side == 0 || self.avatar.about.width == 0 {
            return Err(ConfigError::Validation(
                "avatar sizes must be non-zero".into(),
            ));
        }
        validate_quality("avatar.square", self.avatar.square.quality)?;
        validate_quality("avatar.about", self.avatar.about.quality)?;

        validate_size("og.target", self.og.target.size)?;
        validate_quality("og.target", self.og.target.quality)?;

        for variant in &self.projects.variants {
            let name = format!("projects.variants[{}]", variant.file);
            validate_size(&name, variant.size)?;
            validate_quality(&name, variant.quality)?;
        }
        let mut slugs = HashSet::new();
        for project in &self.projects.sources {
            if project.slug.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "projects.sources: '{}' has an empty slug",
                    project.source
                )));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "projects.sources: duplicate slug '{}'",
                    project.slug
                )));
            }
        }
        Ok(())
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AssetsConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (arrays included) replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, deserialize, validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<AssetsConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AssetsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load an explicit config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<AssetsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Load `assets.toml` from the site root, falling back to stock defaults
/// when the file is absent.
pub fn load_config(site_root: &Path) -> Result<AssetsConfig, ConfigError> {
    let config_path = site_root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return resolve_config(None);
    }
    load_config_file(&config_path)
}

/// Returns a fully-commented stock `assets.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Assets Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key-by-key with the defaults; arrays replace them wholesale.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Directory layout (relative to the site root, or absolute)
# ---------------------------------------------------------------------------
[paths]
# Web root: favicons and site.webmanifest are written here.
public_dir = "public"
# Avatar, OG and project images are written here.
images_dir = "public/images"
# Source images are read from here.
source_dir = "public/images/images to process"
# Parent directory for the temporary ICO frames (default: system temp).
# scratch_dir = "/tmp"

# ---------------------------------------------------------------------------
# Favicons (optimized PNG, Lanczos3 resampling)
# ---------------------------------------------------------------------------
[favicon]
source = "fav.ico.jpg"
icons = [
    { file = "favicon-16x16.png", size = [16, 16] },
    { file = "favicon-32x32.png", size = [32, 32] },
    { file = "apple-touch-icon.png", size = [180, 180] },
    { file = "android-chrome-192x192.png", size = [192, 192] },
    { file = "android-chrome-512x512.png", size = [512, 512] },
]

[favicon.ico]
file = "favicon.ico"
# Square frame sizes bundled into the container (1-256, each at most once).
frames = [16, 32, 48]
# "magick" runs an external ImageMagick binary; "native" encodes in-process.
packer = "magick"
magick_program = "convert"
# Copied verbatim to favicon.ico when packing is unavailable or fails.
fallback = "favicon-32x32.png"

# ---------------------------------------------------------------------------
# Avatar
# ---------------------------------------------------------------------------
[avatar]
source = "Rajan-Avatar.jpeg"

# Largest centered square of the photo, resampled to side x side.
[avatar.square]
file = "rajan-avatar.jpg"
side = 500
quality = 85

# Whole photo scaled to this width; height keeps the aspect ratio.
[avatar.about]
file = "rajan-about.jpg"
width = 1200
quality = 90

# ---------------------------------------------------------------------------
# Open Graph banner (stretched to size, aspect ratio not preserved)
# ---------------------------------------------------------------------------
[og]
source = "home og.jpg"

[og.target]
file = "og/home.jpg"
size = [1200, 630]
quality = 85

# ---------------------------------------------------------------------------
# Project screenshots: every source gets every variant under <dir>/<slug>/
# ---------------------------------------------------------------------------
[projects]
dir = "projects"
sources = [
    { source = "Med-ai.png", slug = "healthcare-ai" },
    { source = "Trading-ai.png", slug = "trading-ai" },
    { source = "futurevision-ai.png", slug = "automation" },
    { source = "futuristic-ai.png", slug = "futuristic-ai" },
]
variants = [
    { file = "cover.jpg", size = [1200, 800], quality = 85 },
    { file = "dashboard.jpg", size = [1440, 900], quality = 85 },
    { file = "thumb.jpg", size = [720, 450], quality = 80 },
]

# ---------------------------------------------------------------------------
# Web app manifest (written verbatim as JSON)
# ---------------------------------------------------------------------------
[webmanifest]
file = "site.webmanifest"
name = "Rajan Maharjan - Portfolio"
short_name = "RM Portfolio"
description = "AI Software Engineer & Full-Stack Developer Portfolio"
start_url = "/"
display = "standalone"
theme_color = "#000000"
background_color = "#000000"
icons = [
    { src = "/android-chrome-192x192.png", sizes = "192x192", type = "image/png" },
    { src = "/android-chrome-512x512.png", sizes = "512x512", type = "image/png" },
]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_favicon_table() {
        let config = AssetsConfig::default();
        let files: Vec<&str> = config.favicon.icons.iter().map(|i| i.file.as_str()).collect();
        assert_eq!(
            files,
            vec![
                "favicon-16x16.png",
                "favicon-32x32.png",
                "apple-touch-icon.png",
                "android-chrome-192x192.png",
                "android-chrome-512x512.png",
            ]
        );
        assert_eq!(config.favicon.ico.frames, vec![16, 32, 48]);
        assert_eq!(config.favicon.ico.packer, PackerKind::Magick);
    }

    #[test]
    fn default_config_has_jpeg_qualities() {
        let config = AssetsConfig::default();
        assert_eq!(config.avatar.square.quality, 85);
        assert_eq!(config.avatar.about.quality, 90);
        assert_eq!(config.og.target.quality, 85);
        let qualities: Vec<u32> = config.projects.variants.iter().map(|v| v.quality).collect();
        assert_eq!(qualities, vec![85, 85, 80]);
    }

    #[test]
    fn default_config_is_valid() {
        AssetsConfig::default().validate().unwrap();
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[favicon.ico]
packer = "native"
"##;
        let config = resolve_config(Some(toml::from_str(toml).unwrap())).unwrap();
        assert_eq!(config.favicon.ico.packer, PackerKind::Native);
        // Siblings in the same table keep their defaults
        assert_eq!(config.favicon.ico.fallback, "favicon-32x32.png");
        assert_eq!(config.avatar.square.side, 500);
    }

    #[test]
    fn arrays_replace_defaults() {
        let toml = r##"
[projects]
sources = [{ source = "only.png", slug = "only" }]
"##;
        let config = resolve_config(Some(toml::from_str(toml).unwrap())).unwrap();
        assert_eq!(
            config.projects.sources,
            vec![ProjectSource::new("only.png", "only")]
        );
        assert_eq!(config.projects.variants.len(), 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r##"
[avatar]
sorce = "typo.jpg"
"##;
        let result = resolve_config(Some(toml::from_str(toml).unwrap()));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_rejects_zero_quality() {
        let mut config = AssetsConfig::default();
        config.og.target.quality = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_quality_above_100() {
        let mut config = AssetsConfig::default();
        config.projects.variants[2].quality = 101;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_size() {
        let mut config = AssetsConfig::default();
        config.favicon.icons[0].size = [0, 16];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_oversized_ico_frame() {
        let mut config = AssetsConfig::default();
        config.favicon.ico.frames = vec![16, 512];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_unknown_fallback() {
        let mut config = AssetsConfig::default();
        config.favicon.ico.fallback = "favicon-64x64.png".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("favicon-64x64.png"));
    }

    #[test]
    fn validate_rejects_duplicate_slugs() {
        let mut config = AssetsConfig::default();
        config.projects.sources[1].slug = "healthcare-ai".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn validate_rejects_duplicate_ico_frames() {
        let mut config = AssetsConfig::default();
        config.favicon.ico.frames = vec![16, 32, 32];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate size 32"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.paths.public_dir, "public");
        assert_eq!(config.webmanifest.file, "site.webmanifest");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r##"
[paths]
public_dir = "static"

[webmanifest]
theme_color = "#112233"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.paths.public_dir, "static");
        assert_eq!(config.webmanifest.theme_color, "#112233");
        assert_eq!(config.webmanifest.background_color, "#000000");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_file_missing_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config_file(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_overlay_wins_and_base_survives() {
        let base: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(3));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: AssetsConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = AssetsConfig::default();
        assert_eq!(config.favicon.icons, defaults.favicon.icons);
        assert_eq!(config.projects.sources, defaults.projects.sources);
        assert_eq!(config.projects.variants, defaults.projects.variants);
        assert_eq!(config.og.target, defaults.og.target);
        assert_eq!(config.webmanifest.icons, defaults.webmanifest.icons);
        assert_eq!(config.paths.scratch_dir, None);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[paths]",
            "[favicon]",
            "[favicon.ico]",
            "[avatar.square]",
            "[avatar.about]",
            "[og.target]",
            "[projects]",
            "[webmanifest]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }
}
