use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use appicon_pipeline::storage::InstallLayout;
use image::{ImageBuffer, ImageFormat, Rgba};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("appicon-cli-{tag}-{nanos}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_in(root: &PathBuf) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_appicon-pipeline"))
        .current_dir(root)
        .env("RUST_LOG", "warn")
        .status()
        .expect("spawn appicon-pipeline")
}

#[test]
fn exits_with_one_when_source_is_missing() {
    let root = unique_temp_dir("missing");
    let layout = InstallLayout::new(&root);

    let status = run_in(&root);

    assert_eq!(status.code(), Some(1));
    assert!(!layout.iconset_dir().exists());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn exits_with_zero_after_generating_icons() {
    let root = unique_temp_dir("ok");
    let layout = InstallLayout::new(&root);
    let source = layout.source_image();
    fs::create_dir_all(source.parent().expect("source parent")).expect("source dir");
    ImageBuffer::from_pixel(120, 120, Rgba([30u8, 60, 90, 200]))
        .save_with_format(&source, ImageFormat::Png)
        .expect("write source");

    let status = run_in(&root);

    assert_eq!(status.code(), Some(0));
    assert!(layout.manifest_path().is_file());
    assert!(layout.iconset_dir().join("icon_512x512@2x.png").is_file());

    let _ = fs::remove_dir_all(root);
}
