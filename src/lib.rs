//! # macOS 应用图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + 退出码                    │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ IconPipeline::run() -> Result<PipelineReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓                                                  │
//! │  ┌─ pipeline ─── 编排 + 阶段耗时日志                      │
//! │  │                                                       │
//! │  ├─ icon_set ─── 读取校验 → 居中裁剪 → Lanczos 多尺寸渲染   │
//! │  ├─ manifest ─── Contents.json                           │
//! │  ├─ packager ─── .iconset 暂存 + iconutil                │
//! │  ├─ distribute ─ branding/ 与 OfflineCinema.app 副本     │
//! │  ├─ storage ──── 固定目录布局                             │
//! │  └─ error ────── AppError (统一错误类型)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，区分致命与可忽略的失败 |
//! | [`icon_set`] | 源图加载、正方形裁剪、10 个尺寸的 PNG 渲染 |
//! | [`manifest`] | 生成并覆盖写入 `Contents.json` |
//! | [`packager`] | 调用 `iconutil` 生成 `AppIcon.icns`，失败不致命 |
//! | [`distribute`] | 把 `.icns` 放到品牌目录与应用包资源目录 |
//! | [`storage`] | 以根目录推导所有固定路径、创建目录 |
//! | [`pipeline`] | 顺序编排以上各步骤 |

pub mod distribute;
pub mod error;
pub mod icon_set;
pub mod manifest;
pub mod packager;
pub mod pipeline;
pub mod storage;
