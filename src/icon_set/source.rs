//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“磁盘上的源文件”和“流水线产物”解耦：
//! - `RawImageData` 表示已读取但未解码的源图字节
//! - `RenderedIcon` 表示已写入磁盘的单个尺寸位图

use std::path::PathBuf;

use super::IconSizeSpec;

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 渲染阶段输出：已落盘的不透明 RGB PNG。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    /// 对应的尺寸规格。
    pub spec: IconSizeSpec,
    /// 写入的文件路径。
    pub path: PathBuf,
}

impl RenderedIcon {
    /// 位图实际像素边长。
    pub fn pixel_size(&self) -> u32 {
        self.spec.pixel_size()
    }
}
