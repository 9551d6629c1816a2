//! # 配置模块
//!
//! ## 设计思路
//!
//! 将图标尺寸目录与处理阈值集中管理，保证每次运行的行为完全由常量决定。
//!
//! ## 实现思路
//!
//! - `ICON_SIZES` 是 macOS AppIcon 所需的固定 10 项目录（16/32/128/256/512 × 1x/2x）。
//! - `IconConfig::default()` 提供生产可用的加载上限与重采样滤镜。

use image::imageops::FilterType;

/// 单个图标规格：逻辑尺寸、倍率与输出文件名。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSizeSpec {
    /// 逻辑尺寸（点）。
    pub size: u32,
    /// 像素倍率（1 或 2）。
    pub scale: u32,
    /// 写入 appiconset 目录时使用的文件名。
    pub filename: &'static str,
}

impl IconSizeSpec {
    pub const fn new(size: u32, scale: u32, filename: &'static str) -> Self {
        Self {
            size,
            scale,
            filename,
        }
    }

    /// 实际输出的像素边长（`size * scale`）。
    pub fn pixel_size(&self) -> u32 {
        self.size * self.scale
    }

    /// Contents.json 中的 `scale` 字段，例如 `2x`。
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    /// Contents.json 中的 `size` 字段，例如 `128x128`。
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// macOS 应用图标所需的全部尺寸，顺序即 Contents.json 中的顺序。
pub const ICON_SIZES: [IconSizeSpec; 10] = [
    IconSizeSpec::new(16, 1, "icon_16x16.png"),
    IconSizeSpec::new(16, 2, "icon_16x16@2x.png"),
    IconSizeSpec::new(32, 1, "icon_32x32.png"),
    IconSizeSpec::new(32, 2, "icon_32x32@2x.png"),
    IconSizeSpec::new(128, 1, "icon_128x128.png"),
    IconSizeSpec::new(128, 2, "icon_128x128@2x.png"),
    IconSizeSpec::new(256, 1, "icon_256x256.png"),
    IconSizeSpec::new(256, 2, "icon_256x256@2x.png"),
    IconSizeSpec::new(512, 1, "icon_512x512.png"),
    IconSizeSpec::new(512, 2, "icon_512x512@2x.png"),
];

/// 图标生成配置。
///
/// 字段覆盖了源图加载与重采样两个阶段。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 重采样滤镜。图标在小尺寸下的锐度依赖 Lanczos，不应替换为更快的滤镜。
    pub resize_filter: FilterType,
    /// 透明像素合成时使用的不透明背景色（RGB）。
    pub background: [u8; 3],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            resize_filter: FilterType::Lanczos3,
            background: [0, 0, 0],
        }
    }
}
