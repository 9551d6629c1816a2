//! Contents.json 清单模块
//!
//! # 设计思路
//!
//! 清单内容完全由固定尺寸目录推导，每次运行整体覆盖写入，不与旧文件合并。
//!
//! # 实现思路
//!
//! - 结构体字段顺序即 JSON 键顺序（`filename, idiom, scale, size`）。
//! - 使用 `serde_json::to_string_pretty` 输出两空格缩进的 JSON。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::icon_set::{ICON_SIZES, IconSizeSpec};

/// macOS 桌面图标的 idiom 标记。
pub const MAC_IDIOM: &str = "mac";
const MANIFEST_AUTHOR: &str = "xcode";
const MANIFEST_VERSION: u32 = 1;

/// 单个位图条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl From<&IconSizeSpec> for ManifestImage {
    fn from(spec: &IconSizeSpec) -> Self {
        Self {
            filename: spec.filename.to_string(),
            idiom: MAC_IDIOM.to_string(),
            scale: spec.scale_label(),
            size: spec.size_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

/// AppIcon.appiconset/Contents.json 的完整内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconManifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

impl IconManifest {
    /// 按固定尺寸目录构建清单（恒为 10 项）。
    pub fn for_catalog() -> Self {
        Self::from_specs(&ICON_SIZES)
    }

    fn from_specs(specs: &[IconSizeSpec]) -> Self {
        Self {
            images: specs.iter().map(ManifestImage::from).collect(),
            info: ManifestInfo::default(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Manifest(format!("序列化 Contents.json 失败: {}", e)))
    }

    /// 覆盖写入到指定路径。
    pub fn write_to(&self, path: &Path) -> Result<(), AppError> {
        let content = self.to_json()?;
        fs::write(path, content)
            .map_err(|e| AppError::Manifest(format!("写入 {} 失败: {}", path.display(), e)))?;
        log::info!("Updated: {}", path.display());
        Ok(())
    }
}
