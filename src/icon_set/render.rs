//! # 多尺寸渲染模块
//!
//! ## 设计思路
//!
//! 每个尺寸规格独立执行“重采样 → 去透明 → PNG 落盘”，互不共享中间结果，
//! 相同源图重复运行得到完全相同的输出。
//!
//! ## 实现思路
//!
//! 1. 使用 `fast_image_resize` 的 Lanczos3 卷积重采样（带 alpha 预乘）
//! 2. 快速路径失败时回退到 `image::imageops::resize`（同样是 Lanczos3，同样预乘 alpha）
//! 3. 带 alpha 的结果合成到不透明背景上；无 alpha 的结果直接转为 RGB8
//! 4. 以 PNG（无损）写入输出目录，已存在的文件直接覆盖

use std::path::Path;

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{
    DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage,
};

use super::source::RenderedIcon;
use super::{ICON_SIZES, IconError, IconSetBuilder, IconSizeSpec};

impl IconSetBuilder {
    /// 按固定目录渲染全部 10 个尺寸。
    ///
    /// 任一尺寸写入失败即中止，返回对应错误。
    pub fn render_all(
        &self,
        source: &DynamicImage,
        output_dir: &Path,
    ) -> Result<Vec<RenderedIcon>, IconError> {
        ICON_SIZES
            .iter()
            .map(|spec| self.render_icon(source, spec, output_dir))
            .collect()
    }

    /// 渲染单个尺寸并写入 `output_dir/<filename>`。
    pub fn render_icon(
        &self,
        source: &DynamicImage,
        spec: &IconSizeSpec,
        output_dir: &Path,
    ) -> Result<RenderedIcon, IconError> {
        let actual = spec.pixel_size();
        let resized = self.resample(source, actual);
        let opaque = flatten_onto_background(resized, self.config.background);

        let path = output_dir.join(spec.filename);
        opaque
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| IconError::Encode(format!("写入 {} 失败：{}", path.display(), e)))?;

        log::info!("Created: {} ({}x{})", path.display(), actual, actual);

        Ok(RenderedIcon { spec: *spec, path })
    }

    fn resample(&self, source: &DynamicImage, target: u32) -> DynamicImage {
        let filter = self.config.resize_filter;
        match Self::resize_with_fast_image_resize(source, target, target, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 重采样失败，回退 image::resize：{}", err);
                resize_premultiplied(source, target, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let (src_width, src_height) = image.dimensions();
        let has_alpha = image.color().has_alpha();

        let (pixel_type, bytes) = if has_alpha {
            (fr::PixelType::U8x4, image.to_rgba8().into_raw())
        } else {
            (fr::PixelType::U8x3, image.to_rgb8().into_raw())
        };

        let src_image = fr::images::Image::from_vec_u8(src_width, src_height, bytes, pixel_type)
            .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, pixel_type);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let raw = dst_image.into_vec();
        let resized = if has_alpha {
            ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, raw)
                .map(DynamicImage::ImageRgba8)
        } else {
            ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(target_width, target_height, raw)
                .map(DynamicImage::ImageRgb8)
        };

        resized.ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

/// `image` 回退路径。
///
/// 带 alpha 的图片先预乘再重采样、完成后还原，与快速路径一致：
/// 完全透明像素的颜色不会渗入相邻的不透明边缘。
fn resize_premultiplied(image: &DynamicImage, target: u32, filter: FilterType) -> DynamicImage {
    if !image.color().has_alpha() {
        return DynamicImage::ImageRgb8(imageops::resize(&image.to_rgb8(), target, target, filter));
    }

    let mut rgba = image.to_rgba8();
    rgba.pixels_mut().for_each(premultiply);
    let mut resized = imageops::resize(&rgba, target, target, filter);
    resized.pixels_mut().for_each(unpremultiply);
    DynamicImage::ImageRgba8(resized)
}

fn premultiply(pixel: &mut Rgba<u8>) {
    let alpha = pixel[3] as u32;
    for channel in &mut pixel.0[..3] {
        *channel = ((*channel as u32 * alpha + 127) / 255) as u8;
    }
}

fn unpremultiply(pixel: &mut Rgba<u8>) {
    let alpha = pixel[3] as u32;
    if alpha == 0 {
        *pixel = Rgba([0, 0, 0, 0]);
        return;
    }
    for channel in &mut pixel.0[..3] {
        *channel = ((*channel as u32 * 255 + alpha / 2) / alpha).min(255) as u8;
    }
}

/// 去除透明通道，输出不透明 RGB8。
///
/// 带 alpha 的图片逐像素合成到 `background` 上：
/// `out = src * a + background * (1 - a)`，按 255 定点四舍五入。
pub fn flatten_onto_background(image: DynamicImage, background: [u8; 3]) -> RgbImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => composite_rgba(&rgba, background),
        other if other.color().has_alpha() => composite_rgba(&other.to_rgba8(), background),
        other => other.to_rgb8(),
    }
}

fn composite_rgba(rgba: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let (width, height) = rgba.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        Rgb([
            blend_channel(r, background[0], a),
            blend_channel(g, background[1], a),
            blend_channel(b, background[2], a),
        ])
    })
}

#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
}
