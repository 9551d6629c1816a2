//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconPipeline` 只负责流程编排，处理链路固定为：
//! 1. 检查源图存在（缺失即致命，此时尚未写入任何文件）
//! 2. 读取并裁剪为正方形
//! 3. 渲染 10 个尺寸
//! 4. 写入 Contents.json
//! 5. 打包 `.icns`（失败仅记录日志）
//! 6. 分发到品牌目录与应用包（失败仅记录日志）
//!
//! ## 实现思路
//!
//! - 1~4 步的错误通过 `?` 上抛，决定退出码。
//! - 5~6 步的结果记录在 `PipelineReport` 中，不影响退出码。
//! - 记录 `load/render/manifest/package/total` 阶段耗时，便于诊断。

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::GenericImageView;

use crate::distribute::{Distribution, distribute};
use crate::error::AppError;
use crate::icon_set::{IconConfig, IconSetBuilder, RenderedIcon, crop_to_square};
use crate::manifest::IconManifest;
use crate::packager::{IcnsPackager, PackageOutcome};
use crate::storage::{InstallLayout, ensure_dir, ensure_parent_dir};

/// 一次运行的产物汇总。
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub icons: Vec<RenderedIcon>,
    pub manifest: PathBuf,
    pub package: PackageOutcome,
    /// 仅在打包成功且分发成功时为 `Some`。
    pub distribution: Option<Distribution>,
}

/// 图标生成流水线。
pub struct IconPipeline {
    layout: InstallLayout,
    builder: IconSetBuilder,
    packager: IcnsPackager,
}

impl IconPipeline {
    pub fn new(layout: InstallLayout) -> Self {
        Self {
            layout,
            builder: IconSetBuilder::new(IconConfig::default()),
            packager: IcnsPackager::default(),
        }
    }

    pub fn with_config(mut self, config: IconConfig) -> Self {
        self.builder = IconSetBuilder::new(config);
        self
    }

    /// 替换打包工具（测试中用于模拟 `iconutil` 不可用）。
    pub fn with_packager(mut self, packager: IcnsPackager) -> Self {
        self.packager = packager;
        self
    }

    /// 处理主入口。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use appicon_pipeline::pipeline::IconPipeline;
    /// use appicon_pipeline::storage::InstallLayout;
    ///
    /// let report = IconPipeline::new(InstallLayout::from_current_dir()?).run()?;
    /// assert_eq!(report.icons.len(), 10);
    /// # Ok::<(), appicon_pipeline::error::AppError>(())
    /// ```
    pub fn run(&self) -> Result<PipelineReport, AppError> {
        let source_path = self.layout.source_image();
        if !source_path.exists() {
            return Err(AppError::SourceMissing(source_path));
        }

        let output_dir = self.layout.iconset_dir();
        ensure_dir(&output_dir)?;

        log::info!("{}", "=".repeat(60));
        log::info!("Generating macOS app icons for Offline Cinema");
        log::info!("{}", "=".repeat(60));
        log::info!("Source: {}", source_path.display());
        log::info!("Output: {}", output_dir.display());

        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.builder.load_source(&source_path)?;
        let (width, height) = source.dimensions();
        log::info!("Original image size: {}x{}", width, height);
        let source = crop_to_square(source);
        let (width, height) = source.dimensions();
        log::info!("Cropped to square: {}x{}", width, height);
        let load_elapsed = load_start.elapsed();

        let render_start = Instant::now();
        let icons = self.builder.render_all(&source, &output_dir)?;
        let render_elapsed = render_start.elapsed();

        let manifest_start = Instant::now();
        let manifest = self.layout.manifest_path();
        IconManifest::for_catalog().write_to(&manifest)?;
        let manifest_elapsed = manifest_start.elapsed();

        let package_start = Instant::now();
        let package = self.package_container(&output_dir);
        let package_elapsed = package_start.elapsed();

        let distribution = match &package {
            PackageOutcome::Packaged { container, .. } => {
                match distribute(container, &self.layout) {
                    Ok(distribution) => Some(distribution),
                    Err(err) => {
                        log::warn!("⚠️ 分发 .icns 失败，已忽略: {}", err);
                        None
                    }
                }
            }
            PackageOutcome::Failed { .. } => None,
        };

        log::info!(
            "✅ 图标生成完成 - load={}ms render={}ms manifest={}ms package={}ms total={}ms",
            load_elapsed.as_millis(),
            render_elapsed.as_millis(),
            manifest_elapsed.as_millis(),
            package_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(PipelineReport {
            icons,
            manifest,
            package,
            distribution,
        })
    }

    fn package_container(&self, output_dir: &Path) -> PackageOutcome {
        let container = self.layout.branding_icns();
        if let Err(err) = ensure_parent_dir(&container) {
            log::error!("Error generating .icns: {}", err);
            return PackageOutcome::Failed {
                reason: err.to_string(),
            };
        }

        log::info!("Generating .icns file...");
        self.packager.package(output_dir, &container)
    }
}
