//! HTML `<head>` snippet for the generated assets.
//!
//! Page templates need `<link>` tags for the favicons and the web manifest,
//! plus Open Graph `<meta>` tags for the banner. This renders them from the
//! same configuration the pipeline uses, so the URLs always match the files.

use crate::config::AssetsConfig;
use crate::paths::SitePaths;
use maud::{Markup, html};

/// How a favicon PNG is referenced from `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconRole {
    Icon,
    AppleTouch,
    /// Referenced from the web manifest instead.
    ManifestOnly,
}

fn icon_role(file: &str) -> IconRole {
    if file.starts_with("apple-touch-icon") {
        IconRole::AppleTouch
    } else if file.starts_with("favicon") {
        IconRole::Icon
    } else {
        IconRole::ManifestOnly
    }
}

/// Renders the `<link>`/`<meta>` tags for favicons, manifest and OG image.
pub fn render_head(config: &AssetsConfig, paths: &SitePaths) -> Markup {
    let url = |path: std::path::PathBuf| paths.url(&path);
    let ico = url(paths.public(&config.favicon.ico.file));
    let manifest = url(paths.public(&config.webmanifest.file));
    let og = url(paths.image(&config.og.target.file));
    let [og_width, og_height] = config.og.target.size;

    html! {
        @if let Some(href) = &ico {
            link rel="icon" href=(href) sizes="any";
        }
        @for icon in &config.favicon.icons {
            @let sizes = format!("{}x{}", icon.size[0], icon.size[1]);
            @let href = url(paths.public(&icon.file));
            @match (icon_role(&icon.file), href) {
                (IconRole::Icon, Some(href)) => {
                    link rel="icon" type="image/png" sizes=(sizes) href=(href);
                }
                (IconRole::AppleTouch, Some(href)) => {
                    link rel="apple-touch-icon" sizes=(sizes) href=(href);
                }
                _ => {}
            }
        }
        @if let Some(href) = &manifest {
            link rel="manifest" href=(href);
        }
        meta name="theme-color" content=(config.webmanifest.theme_color);
        @if let Some(src) = &og {
            meta property="og:image" content=(src);
            meta property="og:image:width" content=(og_width);
            meta property="og:image:height" content=(og_height);
        }
    }
}
