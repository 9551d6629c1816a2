//! 安装目录布局模块
//!
//! # 设计思路
//!
//! 所有输入/输出路径都由同一个根目录推导，路径本身是固定常量，
//! 不提供额外配置。
//!
//! # 实现思路
//!
//! - `InstallLayout::new` 接收根目录；入口使用当前工作目录。
//! - 各访问器只拼接路径，不触碰文件系统。
//! - 目录创建集中在 `ensure_dir`，失败统一映射为 `AppError::Storage`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// 源图相对根目录的位置。
const SOURCE_IMAGE: [&str; 3] = ["offline_cinema.icon", "Assets", "output.png"];
/// appiconset 输出目录。
const ICONSET_DIR: [&str; 3] = ["OfflineCinema", "Assets.xcassets", "AppIcon.appiconset"];
/// 持久化的品牌资源目录。
const BRANDING_DIR: &str = "branding";
/// 应用包内的资源目录。
const BUNDLE_RESOURCES_DIR: [&str; 3] = ["OfflineCinema.app", "Contents", "Resources"];

pub const MANIFEST_FILE: &str = "Contents.json";
pub const ICNS_FILE: &str = "AppIcon.icns";

/// 一次运行涉及的全部固定路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 以当前工作目录为根。
    pub fn from_current_dir() -> Result<Self, AppError> {
        let root = std::env::current_dir()
            .map_err(|e| AppError::Storage(format!("获取当前工作目录失败: {}", e)))?;
        Ok(Self::new(root))
    }

    pub fn source_image(&self) -> PathBuf {
        join_all(&self.root, &SOURCE_IMAGE)
    }

    pub fn iconset_dir(&self) -> PathBuf {
        join_all(&self.root, &ICONSET_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.iconset_dir().join(MANIFEST_FILE)
    }

    pub fn branding_icns(&self) -> PathBuf {
        self.root.join(BRANDING_DIR).join(ICNS_FILE)
    }

    pub fn bundle_resources_dir(&self) -> PathBuf {
        join_all(&self.root, &BUNDLE_RESOURCES_DIR)
    }

    pub fn bundle_icns(&self) -> PathBuf {
        self.bundle_resources_dir().join(ICNS_FILE)
    }
}

fn join_all(root: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}

/// 确保目录存在，不存在时递归创建。
pub fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .map_err(|e| AppError::Storage(format!("创建目录 '{}' 失败: {}", dir.display(), e)))
}

/// 确保文件的父目录存在。
pub fn ensure_parent_dir(file: &Path) -> Result<(), AppError> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        std::env::temp_dir().join(format!("appicon-storage-test-{nanos}"))
    }

    #[test]
    fn layout_paths_are_relative_to_root() {
        let layout = InstallLayout::new("/opt/cinema");

        assert_eq!(
            layout.source_image(),
            PathBuf::from("/opt/cinema/offline_cinema.icon/Assets/output.png")
        );
        assert_eq!(
            layout.manifest_path(),
            PathBuf::from(
                "/opt/cinema/OfflineCinema/Assets.xcassets/AppIcon.appiconset/Contents.json"
            )
        );
        assert_eq!(layout.branding_icns(), PathBuf::from("/opt/cinema/branding/AppIcon.icns"));
        assert_eq!(
            layout.bundle_icns(),
            PathBuf::from("/opt/cinema/OfflineCinema.app/Contents/Resources/AppIcon.icns")
        );
    }

    #[test]
    fn ensure_parent_dir_creates_missing_parents() {
        let root = unique_temp_dir();
        let file = root.join("a").join("b").join("AppIcon.icns");

        ensure_parent_dir(&file).expect("create parents");
        assert!(root.join("a").join("b").is_dir());
        assert!(!file.exists());

        ensure_parent_dir(&file).expect("existing parents are fine");

        let _ = fs::remove_dir_all(root);
    }
}
