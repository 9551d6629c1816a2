//! # 图标集构建器
//!
//! `IconSetBuilder` 只持有一份不可变配置，各阶段分别在
//! `loader`（读取与校验）和 `render`（重采样与落盘）中实现。

use super::IconConfig;

/// 图标集构建器。
///
/// 单次运行内配置固定，不存在运行时切换。
#[derive(Debug, Clone, Default)]
pub struct IconSetBuilder {
    pub(super) config: IconConfig,
}

impl IconSetBuilder {
    /// 根据配置创建构建器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use appicon_pipeline::icon_set::{IconConfig, IconSetBuilder};
    ///
    /// let builder = IconSetBuilder::new(IconConfig::default());
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }
}
