//! # macOS 应用图标生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、运行流水线与退出码映射。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use appicon_pipeline::error::AppError;
use appicon_pipeline::packager::PackageOutcome;
use appicon_pipeline::pipeline::IconPipeline;
use appicon_pipeline::storage::InstallLayout;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = match InstallLayout::from_current_dir() {
        Ok(layout) => layout,
        Err(err) => {
            log::error!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = match IconPipeline::new(layout).run() {
        Ok(report) => report,
        Err(AppError::SourceMissing(path)) => {
            log::error!("Error: Source icon not found at {}", path.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            log::error!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let PackageOutcome::Failed { reason } = &report.package {
        log::warn!("⚠️ 未生成 AppIcon.icns（不影响退出码）: {reason}");
    }

    log::info!("{}", "=".repeat(60));
    log::info!("✅ App icons generated successfully! ({} bitmaps)", report.icons.len());
    log::info!("{}", "=".repeat(60));
    log::info!("Next steps:");
    log::info!("1. Open Xcode and verify the icons in Assets.xcassets");
    log::info!("2. Rebuild the app to apply the new icons");

    ExitCode::SUCCESS
}
