use clap::{Parser, Subcommand};
use site_assets::config::{self, AssetsConfig};
use site_assets::imaging::RustBackend;
use site_assets::paths::SitePaths;
use site_assets::{head, output, process, verify};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("SITE_ASSETS_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SITE_ASSETS_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "site-assets")]
#[command(about = "Generate favicons, avatar, OG and project images for the site")]
#[command(long_about = "\
Generate favicons, avatar, OG and project images for the site

Source photos are read from the source directory and resized into the
public directory. Assets whose source is missing are skipped.

Layout (defaults):

  assets.toml                              # Optional config, merged over defaults
  public/
  ├── favicon.ico, favicon-*.png, ...      # Favicons
  ├── site.webmanifest
  └── images/
      ├── rajan-avatar.jpg, rajan-about.jpg
      ├── og/home.jpg
      ├── projects/<slug>/{cover,dashboard,thumb}.jpg
      └── images to process/               # Source photos

Run 'site-assets gen-config' to print a documented assets.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root; all configured directories are relative to it
    #[arg(long, default_value = ".", global = true)]
    base: PathBuf,

    /// Config file (default: <base>/assets.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every asset whose source is present (default)
    Build,
    /// Check that every expected output exists
    Verify,
    /// Print <head> tags for the generated assets
    Head,
    /// Print a stock assets.toml with all options documented
    GenConfig,
}

fn load(base: &Path, explicit: Option<&Path>) -> Result<AssetsConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(base),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Build);
    let site = || -> Result<(AssetsConfig, SitePaths), config::ConfigError> {
        let config = load(&cli.base, cli.config.as_deref())?;
        let paths = SitePaths::resolve(&cli.base, &config.paths);
        Ok((config, paths))
    };

    match command {
        Command::Build => {
            let (config, paths) = site()?;
            println!("==> Generating assets from {}", paths.display(&paths.source_dir));
            let backend = RustBackend::new();
            let summary = process::run(&backend, &config, &paths, |event| {
                output::print_process_event(&event)
            })?;
            output::print_summary(&summary);
            println!("==> Build complete: {}", paths.display(&paths.public_dir));
        }
        Command::Verify => {
            let (config, paths) = site()?;
            println!("==> Verifying {}", paths.display(&paths.public_dir));
            let report = verify::verify(&config, &paths);
            output::print_verify_report(&report, &paths.root);
            if !report.all_present() {
                return Err(format!("{} expected assets missing", report.missing_count()).into());
            }
        }
        Command::Head => {
            let (config, paths) = site()?;
            let html = head::render_head(&config, &paths).into_string();
            for line in output::format_head(&html) {
                println!("{}", line);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
