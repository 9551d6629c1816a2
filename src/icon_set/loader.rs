//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 源图来自本地文件，但仍按不可信输入处理：
//! 先做体积与文件签名检查，再读取 header 尺寸做像素上限检查，最后才完整解码。
//!
//! ## 实现思路
//!
//! 1. 读取文件元信息并按体积上限快速拒绝
//! 2. 读取字节并用 `infer` 校验图片签名
//! 3. 读取 header 尺寸，按像素上限拒绝
//! 4. 完整解码并统一转换为 RGBA8

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

use super::source::RawImageData;
use super::{IconConfig, IconError, IconSetBuilder};

impl IconSetBuilder {
    /// 读取并解码源图，输出统一为 RGBA8。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use appicon_pipeline::icon_set::{IconConfig, IconSetBuilder};
    ///
    /// let builder = IconSetBuilder::new(IconConfig::default());
    /// let image = builder.load_source("offline_cinema.icon/Assets/output.png".as_ref())?;
    /// # Ok::<(), appicon_pipeline::icon_set::IconError>(())
    /// ```
    pub fn load_source(&self, path: &Path) -> Result<DynamicImage, IconError> {
        let raw = self.read_source_file(path)?;
        self.decode_source(raw)
    }

    fn read_source_file(&self, path: &Path) -> Result<RawImageData, IconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
        })
    }

    fn decode_source(&self, raw: RawImageData) -> Result<DynamicImage, IconError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        validate_pixel_limits(&self.config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::Decode(format!("图片尺寸无效：{}x{}", width, height)));
        }

        log::debug!(
            "✅ 源图解码成功 - 来源: {} 尺寸: {}x{} 颜色: {:?}",
            raw.source_hint,
            width,
            height,
            decoded.color()
        );

        Ok(DynamicImage::ImageRgba8(decoded.to_rgba8()))
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| IconError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
