//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! favicon: skipped (source not found: public/images/images to process/fav.ico.jpg)
//! avatar (800x600)
//!     Source: public/images/images to process/Rajan-Avatar.jpeg
//!     public/images/rajan-avatar.jpg: 500x500, jpeg q85
//!     public/images/rajan-about.jpg: 1200x900, jpeg q90
//! webmanifest
//!     public/site.webmanifest
//!
//! Wrote 3 files, skipped 6 assets
//! ```
//!
//! ## Verify
//!
//! ```text
//! ok          12.3KB  public/favicon.ico
//! MISSING             public/images/og/home.jpg
//!
//! 1 asset of 2 missing
//!
//! Still in source folder:
//!     Med-ai.png
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::favicon::IcoOutcome;
use crate::process::{ProcessEvent, ProcessSummary};
use crate::verify::{AssetStatus, VerifyReport};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format a single pipeline event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::AssetSkipped { name, source } => {
            vec![format!("{name}: skipped (source not found: {source})")]
        }
        ProcessEvent::AssetStarted {
            name,
            source,
            dimensions: (w, h),
        } => vec![
            format!("{name} ({w}x{h})"),
            format!("{}Source: {source}", indent(1)),
        ],
        ProcessEvent::VariantWritten {
            output,
            width,
            height,
            encoding,
        } => vec![format!(
            "{}{output}: {width}x{height}, {encoding}",
            indent(1)
        )],
        ProcessEvent::IcoWritten { output, outcome } => match outcome {
            IcoOutcome::Packed { packer, frames } => {
                let sizes: Vec<String> = frames.iter().map(|s| s.to_string()).collect();
                vec![format!(
                    "{}{output}: {} px frames via {packer}",
                    indent(1),
                    sizes.join("/")
                )]
            }
            IcoOutcome::Fallback { from, reason } => vec![
                format!("{}{output}: copy of {}", indent(1), file_name(from)),
                format!("{}Packing skipped: {reason}", indent(2)),
            ],
        },
        ProcessEvent::ManifestWritten { output } => {
            vec!["webmanifest".to_string(), format!("{}{output}", indent(1))]
        }
    }
}

/// Print a pipeline event to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Format the closing line of a build.
pub fn format_summary(summary: &ProcessSummary) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Wrote {}, skipped {}",
            plural(summary.written.len(), "file"),
            plural(summary.skipped.len(), "asset")
        ),
    ]
}

pub fn print_summary(summary: &ProcessSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Verify output
// ============================================================================

fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Format a verification report, paths shown relative to `root`.
pub fn format_verify_report(report: &VerifyReport, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for (asset, status) in &report.checks {
        let shown = asset.path.strip_prefix(root).unwrap_or(&asset.path);
        let line = match status {
            AssetStatus::Present { bytes } => {
                format!("{:<8}{:>10}  {}", "ok", format_kb(*bytes), shown.display())
            }
            AssetStatus::Missing => format!("{:<8}{:>10}  {}", "MISSING", "", shown.display()),
        };
        lines.push(line);
    }

    lines.push(String::new());
    if report.all_present() {
        lines.push("All assets present".to_string());
    } else {
        lines.push(format!(
            "{} of {} missing",
            plural(report.missing_count(), "asset"),
            report.checks.len()
        ));
    }

    if !report.leftovers.is_empty() {
        lines.push(String::new());
        lines.push("Still in source folder:".to_string());
        for leftover in &report.leftovers {
            lines.push(format!("{}{}", indent(1), leftover.display()));
        }
    }

    lines
}

pub fn print_verify_report(report: &VerifyReport, root: &Path) {
    for line in format_verify_report(report, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Head snippet
// ============================================================================

/// One tag per line, ready to paste into a template.
pub fn format_head(html: &str) -> Vec<String> {
    html.replace("><", ">\n<")
        .lines()
        .map(str::to_string)
        .collect()
}
