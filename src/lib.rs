//! # Site Assets
//!
//! Build step that turns a handful of hand-picked source photos into the
//! image assets a personal portfolio site serves: favicons and a multi-size
//! `favicon.ico`, avatar and about-page photos, an Open Graph banner, per-project
//! cover/dashboard/thumbnail images, and a `site.webmanifest`.
//!
//! # Pipeline
//!
//! ```text
//! assets.toml ─┐
//!              ├─ plan ──> identify source ──> resolve variants ──> render ──> public/
//! source dir ──┘                                                     │
//!                                                 favicon frames ──> ico packer
//! ```
//!
//! Every asset is described as data ([`plan::AssetPlan`]): a source file and
//! a list of targets with a geometry and an encoding. Geometry is resolved
//! against the measured source dimensions, then the backend decodes the source
//! once and writes every variant from it. A missing source skips its asset
//! with a notice; any other failure aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `assets.toml` loading, merging over stock defaults, validation |
//! | [`paths`] | Resolves the configured directories against the site root |
//! | [`plan`] | Turns the config into per-asset plans |
//! | [`process`] | Runs the plans through an image backend and emits progress events |
//! | [`imaging`] | Geometry calculations and the pure-Rust image backend |
//! | [`favicon`] | Packs the favicon frames into `favicon.ico`, with fallback |
//! | [`webmanifest`] | The PWA manifest document |
//! | [`verify`] | Checks that every expected output exists |
//! | [`head`] | `<head>` link/meta tags for the generated files |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Overwrite, Never Diff
//!
//! Each run rewrites every output whose source is present. There is no cache
//! and no manifest of previous runs, so the set of files on disk after a build
//! is exactly what the configuration describes and nothing else.
//!
//! ## ICO Packing Is Pluggable
//!
//! The `.ico` container is produced by an [`favicon::IconPacker`]. The default
//! shells out to ImageMagick's `convert`; a pure-Rust packer is available via
//! config. If packing fails for any reason, the 32px PNG is copied to
//! `favicon.ico`, which browsers accept.

pub mod config;
pub mod favicon;
pub mod head;
pub mod imaging;
pub mod output;
pub mod paths;
pub mod plan;
pub mod process;
pub mod verify;
pub mod webmanifest;

#[cfg(test)]
pub(crate) mod test_helpers;
