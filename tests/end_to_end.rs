//! End-to-end tests that run the compiled binary against a temporary site.
//!
//! Run with: `cargo test --test end_to_end`

use image::{ImageEncoder, RgbImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE_DIR: &str = "public/images/images to process";

fn run(base: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_site-assets"))
        .arg("--base")
        .arg(base)
        .args(args)
        .output()
        .expect("failed to run site-assets")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    });
    let file = std::fs::File::create(path).unwrap();
    image::codecs::jpeg::JpegEncoder::new(std::io::BufWriter::new(file))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

/// Every regular file under `dir`, relative to it, sorted.
fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}

fn avatar_only_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_jpeg(
        &tmp.path().join(SOURCE_DIR).join("Rajan-Avatar.jpeg"),
        800,
        600,
    );
    tmp
}

#[test]
fn build_with_only_avatar_source() {
    let site = avatar_only_site();
    let out = run(site.path(), &["build"]);
    assert!(out.status.success(), "build failed: {:?}", out);

    let public = site.path().join("public");
    assert_eq!(
        files_under(&public),
        vec![
            PathBuf::from("images/images to process/Rajan-Avatar.jpeg"),
            PathBuf::from("images/rajan-about.jpg"),
            PathBuf::from("images/rajan-avatar.jpg"),
            PathBuf::from("site.webmanifest"),
        ]
    );
    assert_eq!(dimensions(&public.join("images/rajan-avatar.jpg")), (500, 500));
    assert_eq!(dimensions(&public.join("images/rajan-about.jpg")), (1200, 900));

    let text = stdout(&out);
    for skipped in ["favicon", "og", "project:automation", "project:trading-ai"] {
        assert!(
            text.contains(&format!("{skipped}: skipped")),
            "no skip notice for {skipped} in:\n{text}"
        );
    }
}

#[test]
fn build_without_arguments_defaults_to_build() {
    let site = avatar_only_site();
    let out = run(site.path(), &[]);
    assert!(out.status.success());
    assert!(site.path().join("public/images/rajan-avatar.jpg").is_file());
}

#[test]
fn manifest_is_valid_json_with_icons() {
    let site = TempDir::new().unwrap();
    let out = run(site.path(), &["build"]);
    assert!(out.status.success());

    let json = std::fs::read_to_string(site.path().join("public/site.webmanifest")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["display"], "standalone");
    assert_eq!(value["icons"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["icons"][0]["type"], "image/png");
}

#[test]
fn favicon_with_native_packer_from_config() {
    let site = TempDir::new().unwrap();
    write_jpeg(&site.path().join(SOURCE_DIR).join("fav.ico.jpg"), 256, 200);
    std::fs::write(
        site.path().join("assets.toml"),
        "[favicon.ico]\npacker = \"native\"\n",
    )
    .unwrap();

    let out = run(site.path(), &["build"]);
    assert!(out.status.success(), "build failed: {:?}", out);

    let public = site.path().join("public");
    assert_eq!(dimensions(&public.join("favicon-16x16.png")), (16, 16));
    assert_eq!(dimensions(&public.join("apple-touch-icon.png")), (180, 180));
    assert_eq!(dimensions(&public.join("android-chrome-512x512.png")), (512, 512));

    let ico = std::fs::read(public.join("favicon.ico")).unwrap();
    assert_eq!(&ico[..6], &[0, 0, 1, 0, 3, 0]);
    assert!(stdout(&out).contains("via native"));
}

#[test]
fn verify_fails_until_everything_exists() {
    let site = avatar_only_site();
    assert!(run(site.path(), &["build"]).status.success());

    let out = run(site.path(), &["verify"]);
    assert!(!out.status.success());
    let text = stdout(&out);
    assert!(text.contains("MISSING"));
    assert!(text.contains("public/images/og/home.jpg"));
    assert!(text.contains("Rajan-Avatar.jpeg"));
}

#[test]
fn head_prints_link_tags() {
    let site = TempDir::new().unwrap();
    let out = run(site.path(), &["head"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains(r#"<link rel="manifest" href="/site.webmanifest">"#));
    assert!(text.contains(r#"<meta property="og:image" content="/images/og/home.jpg">"#));
}

#[test]
fn gen_config_output_is_loadable() {
    let site = TempDir::new().unwrap();
    let out = run(site.path(), &["gen-config"]);
    assert!(out.status.success());

    let config_path = site.path().join("custom.toml");
    std::fs::write(&config_path, out.stdout).unwrap();
    let out = run(
        site.path(),
        &["--config", config_path.to_str().unwrap(), "head"],
    );
    assert!(out.status.success(), "config rejected: {:?}", out);
}

#[test]
fn unknown_config_key_is_an_error() {
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join("assets.toml"), "[avatar]\ncolour = 1\n").unwrap();
    let out = run(site.path(), &["build"]);
    assert!(!out.status.success());
    assert!(!site.path().join("public").exists());
}
