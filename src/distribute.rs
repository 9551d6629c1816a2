//! icns 分发模块
//!
//! 打包成功后，把容器文件放到持久化的 `branding/` 目录；
//! 若应用包的 Resources 目录存在，再复制一份进去，不存在则跳过。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::storage::{InstallLayout, ensure_parent_dir};

/// 分发结果：品牌目录路径，以及应用包内的副本（若有）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub branding: PathBuf,
    pub bundle: Option<PathBuf>,
}

/// 将 `container` 分发到品牌目录与应用包。
///
/// 容器已位于品牌目录时不重复复制。工具返回 0 却没有产出文件时返回 `AppError::Io`。
pub fn distribute(container: &Path, layout: &InstallLayout) -> Result<Distribution, AppError> {
    if !container.is_file() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("icns 容器不存在: {}", container.display()),
        )));
    }

    let branding = layout.branding_icns();
    if container != branding {
        ensure_parent_dir(&branding)?;
        fs::copy(container, &branding)?;
        log::info!("Copied to: {}", branding.display());
    }

    let resources_dir = layout.bundle_resources_dir();
    if !resources_dir.is_dir() {
        log::debug!("应用包资源目录不存在，跳过: {}", resources_dir.display());
        return Ok(Distribution {
            branding,
            bundle: None,
        });
    }

    let bundle = layout.bundle_icns();
    fs::copy(&branding, &bundle)?;
    log::info!("Copied to: {}", bundle.display());

    Ok(Distribution {
        branding,
        bundle: Some(bundle),
    })
}
