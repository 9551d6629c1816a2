//! # 图标集模块（icon_set）
//!
//! ## 设计思路
//!
//! 该模块将“源图读取校验 → 居中裁剪 → 多尺寸重采样 → PNG 落盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `builder`：持有配置的构建器（`IconSetBuilder`）
//! - `loader`：源图读取、签名与像素上限校验、解码
//! - `crop`：居中裁剪为正方形
//! - `render`：Lanczos 重采样、透明合成、PNG 写入
//! - `config/error/source`：尺寸目录与配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! pipeline.rs（编排 + 阶段耗时日志）
//!    ↓
//! loader.rs（读取 + 校验 + 解码为 RGBA8）
//!    ↓
//! crop.rs（居中正方形）
//!    ↓
//! render.rs（10 个尺寸 × 重采样 + 去透明 + 写 PNG）
//! ```

mod builder;
mod config;
mod crop;
mod error;
mod loader;
mod render;
mod source;

pub use builder::IconSetBuilder;
pub use config::{ICON_SIZES, IconConfig, IconSizeSpec};
pub use crop::{crop_to_square, square_region};
pub use error::IconError;
pub use render::flatten_onto_background;
pub use source::RenderedIcon;
