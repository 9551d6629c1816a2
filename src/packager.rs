//! icns 打包模块
//!
//! # 设计思路
//!
//! `.icns` 由系统自带的 `iconutil` 生成：先把位图按固定文件名复制到
//! `.iconset` 暂存目录，再调用 `iconutil -c icns <iconset> -o <icns>`。
//!
//! 打包失败不是致命错误：`package` 永远返回 `PackageOutcome`，
//! 暂存阶段的文件系统错误、工具无法启动、工具返回非零都转换为 `Failed`。
//!
//! # 实现思路
//!
//! - 缺失的位图静默跳过，不足 10 张时仍会调用工具并记录警告。
//! - 成功时删除暂存目录；失败时保留，便于排查。

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AppError;
use crate::icon_set::ICON_SIZES;

/// macOS 自带的图标编译工具。
pub const ICNS_CONVERSION_TOOL: &str = "iconutil";

/// 打包结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    /// 工具返回 0。`staged` 为实际送入工具的位图数量。
    Packaged { container: PathBuf, staged: usize },
    /// 暂存失败、工具无法启动或返回非零，`reason` 为诊断信息。
    Failed { reason: String },
}

impl PackageOutcome {
    pub fn is_packaged(&self) -> bool {
        matches!(self, Self::Packaged { .. })
    }
}

/// 调用外部工具把 appiconset 位图打包为 `.icns`。
#[derive(Debug, Clone)]
pub struct IcnsPackager {
    tool: PathBuf,
}

impl Default for IcnsPackager {
    fn default() -> Self {
        Self::new(ICNS_CONVERSION_TOOL)
    }
}

impl IcnsPackager {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// 暂存目录：把输出路径的 `.icns` 扩展名换成 `.iconset`。
    pub fn staging_dir_for(output: &Path) -> PathBuf {
        output.with_extension("iconset")
    }

    /// 从 `input_dir` 收集位图并生成 `output`。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use appicon_pipeline::packager::IcnsPackager;
    ///
    /// let outcome = IcnsPackager::default().package(
    ///     "OfflineCinema/Assets.xcassets/AppIcon.appiconset".as_ref(),
    ///     "branding/AppIcon.icns".as_ref(),
    /// );
    /// ```
    pub fn package(&self, input_dir: &Path, output: &Path) -> PackageOutcome {
        match self.try_package(input_dir, output) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("Error generating .icns: {}", err);
                PackageOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn try_package(&self, input_dir: &Path, output: &Path) -> Result<PackageOutcome, AppError> {
        let staging = Self::staging_dir_for(output);
        let staged = stage_bitmaps(input_dir, &staging)?;

        if staged < ICON_SIZES.len() {
            log::warn!(
                "⚠️ 暂存目录仅有 {}/{} 张位图，仍继续打包: {}",
                staged,
                ICON_SIZES.len(),
                staging.display()
            );
        }

        let result = Command::new(&self.tool)
            .arg("-c")
            .arg("icns")
            .arg(&staging)
            .arg("-o")
            .arg(output)
            .output()?;

        if result.status.success() {
            fs::remove_dir_all(&staging)?;
            log::info!("Created: {}", output.display());
            return Ok(PackageOutcome::Packaged {
                container: output.to_path_buf(),
                staged,
            });
        }

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            format!("{} 退出状态: {}", self.tool.display(), result.status)
        } else {
            stderr
        };

        log::error!("Error creating .icns: {}", reason);
        log::debug!("暂存目录已保留以便排查: {}", staging.display());

        Ok(PackageOutcome::Failed { reason })
    }
}

/// 按固定文件名复制位图到暂存目录，返回实际复制的数量。
fn stage_bitmaps(input_dir: &Path, staging: &Path) -> Result<usize, AppError> {
    fs::create_dir_all(staging)?;

    let mut staged = 0;
    for spec in ICON_SIZES.iter() {
        let src = input_dir.join(spec.filename);
        if !src.exists() {
            log::debug!("跳过缺失的位图: {}", src.display());
            continue;
        }
        fs::copy(&src, staging.join(spec.filename))?;
        staged += 1;
    }

    Ok(staged)
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
        let dir = std::env::temp_dir().join(format!("appicon-packager-test-{nanos}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_fake_bitmaps(dir: &Path, count: usize) {
        for spec in ICON_SIZES.iter().take(count) {
            fs::write(dir.join(spec.filename), spec.filename.as_bytes()).expect("write bitmap");
        }
    }

    #[test]
    fn staging_dir_swaps_extension() {
        assert_eq!(
            IcnsPackager::staging_dir_for(Path::new("branding/AppIcon.icns")),
            PathBuf::from("branding/AppIcon.iconset")
        );
    }

    #[test]
    fn stage_bitmaps_skips_missing_files() {
        let dir = unique_temp_dir();
        let staging = dir.join("AppIcon.iconset");
        write_fake_bitmaps(&dir, 4);

        let staged = stage_bitmaps(&dir, &staging).expect("stage");

        assert_eq!(staged, 4);
        assert!(staging.join("icon_16x16.png").exists());
        assert!(!staging.join("icon_512x512@2x.png").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_tool_is_reported_as_failure() {
        let dir = unique_temp_dir();
        write_fake_bitmaps(&dir, 10);
        let output = dir.join("AppIcon.icns");

        let packager = IcnsPackager::new(dir.join("no-such-iconutil"));
        let outcome = packager.package(&dir, &output);

        assert!(matches!(outcome, PackageOutcome::Failed { .. }));
        assert!(!output.exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_keeps_staging_dir() {
        let dir = unique_temp_dir();
        write_fake_bitmaps(&dir, 10);
        let output = dir.join("AppIcon.icns");

        let outcome = IcnsPackager::new("false").package(&dir, &output);

        assert!(!outcome.is_packaged());
        let staging = IcnsPackager::staging_dir_for(&output);
        assert!(staging.is_dir());
        assert!(staging.join("icon_128x128@2x.png").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_removes_staging_dir_even_for_partial_set() {
        let dir = unique_temp_dir();
        write_fake_bitmaps(&dir, 3);
        let output = dir.join("AppIcon.icns");

        let outcome = IcnsPackager::new("true").package(&dir, &output);

        assert_eq!(
            outcome,
            PackageOutcome::Packaged {
                container: output.clone(),
                staged: 3,
            }
        );
        assert!(!IcnsPackager::staging_dir_for(&output).exists());

        let _ = fs::remove_dir_all(dir);
    }
}
