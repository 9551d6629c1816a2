//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 编排层 `IconPipeline::run` 返回 `Result<T, AppError>`，
//! 入口据此区分致命错误（退出码 1）与正常完成。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use std::path::PathBuf;

use crate::icon_set::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 源图标文件不存在（致命，尚未产生任何输出）
    #[error("源图标不存在: {}", .0.display())]
    SourceMissing(PathBuf),

    /// 图标生成流水线错误（读取 / 解码 / 写入位图）
    #[error("{0}")]
    Image(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// Contents.json 序列化或写入失败
    #[error("清单写入失败: {0}")]
    Manifest(String),

    /// 输出目录不可用
    #[error("存储目录不可用: {0}")]
    Storage(String),
}
