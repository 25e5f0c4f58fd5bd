//! Asset plans: configuration turned into "source → targets" tables.
//!
//! A plan says which source file feeds which outputs, with each output's
//! geometry and encoding. Plans are pure data built from
//! [`AssetsConfig`] and [`SitePaths`]; nothing here touches the filesystem,
//! so the whole target table can be checked without encoding a pixel.
//!
//! ```text
//! favicon        fav.ico.jpg        → 5 × PNG            (+ favicon.ico)
//! avatar         Rajan-Avatar.jpeg  → square + about JPEG
//! og             home og.jpg        → og/home.jpg
//! project:<slug> <screenshot>.png   → cover / dashboard / thumb JPEG
//! ```

use crate::config::{AssetsConfig, JpegTarget};
use crate::imaging::{Encoding, Geometry};
use crate::paths::SitePaths;
use std::path::PathBuf;

/// What a plan produces, beyond its plain image targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Also packs a multi-resolution ICO after rendering.
    Favicon,
    Avatar,
    OpenGraph,
    Project,
}

/// One output file of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub output: PathBuf,
    pub geometry: Geometry,
    pub encoding: Encoding,
}

/// A source image and every target derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPlan {
    /// Logical asset name used in console output.
    pub name: String,
    pub kind: AssetKind,
    pub source: PathBuf,
    pub targets: Vec<Target>,
}

fn stretch(size: [u32; 2]) -> Geometry {
    Geometry::Stretch {
        width: size[0],
        height: size[1],
    }
}

fn jpeg_target(output: PathBuf, target: &JpegTarget) -> Target {
    Target {
        output,
        geometry: stretch(target.size),
        encoding: Encoding::jpeg(target.quality),
    }
}

/// Favicon PNGs, written optimized into the public directory.
///
/// The ICO container is not a target here: its frames go to a scratch
/// directory that only exists while the favicon step runs.
pub fn favicon_plan(config: &AssetsConfig, paths: &SitePaths) -> AssetPlan {
    AssetPlan {
        name: "favicon".to_string(),
        kind: AssetKind::Favicon,
        source: paths.source(&config.favicon.source),
        targets: config
            .favicon
            .icons
            .iter()
            .map(|icon| Target {
                output: paths.public(&icon.file),
                geometry: stretch(icon.size),
                encoding: Encoding::Png { optimize: true },
            })
            .collect(),
    }
}

pub fn avatar_plan(config: &AssetsConfig, paths: &SitePaths) -> AssetPlan {
    let avatar = &config.avatar;
    AssetPlan {
        name: "avatar".to_string(),
        kind: AssetKind::Avatar,
        source: paths.source(&avatar.source),
        targets: vec![
            Target {
                output: paths.image(&avatar.square.file),
                geometry: Geometry::CenterSquare {
                    side: avatar.square.side,
                },
                encoding: Encoding::jpeg(avatar.square.quality),
            },
            Target {
                output: paths.image(&avatar.about.file),
                geometry: Geometry::FitWidth {
                    width: avatar.about.width,
                },
                encoding: Encoding::jpeg(avatar.about.quality),
            },
        ],
    }
}

pub fn og_plan(config: &AssetsConfig, paths: &SitePaths) -> AssetPlan {
    AssetPlan {
        name: "og".to_string(),
        kind: AssetKind::OpenGraph,
        source: paths.source(&config.og.source),
        targets: vec![jpeg_target(
            paths.image(&config.og.target.file),
            &config.og.target,
        )],
    }
}

/// One plan per project, each writing into `<images>/<dir>/<slug>/`.
pub fn project_plans(config: &AssetsConfig, paths: &SitePaths) -> Vec<AssetPlan> {
    let projects = &config.projects;
    projects
        .sources
        .iter()
        .map(|project| {
            let project_dir = paths.images_dir.join(&projects.dir).join(&project.slug);
            AssetPlan {
                name: format!("project:{}", project.slug),
                kind: AssetKind::Project,
                source: paths.source(&project.source),
                targets: projects
                    .variants
                    .iter()
                    .map(|variant| jpeg_target(project_dir.join(&variant.file), variant))
                    .collect(),
            }
        })
        .collect()
}

/// All plans in pipeline order: favicon, avatar, OG, then projects.
pub fn build_plans(config: &AssetsConfig, paths: &SitePaths) -> Vec<AssetPlan> {
    let mut plans = vec![
        favicon_plan(config, paths),
        avatar_plan(config, paths),
        og_plan(config, paths),
    ];
    plans.extend(project_plans(config, paths));
    plans
}
