//! 居中裁剪为正方形。

use image::{DynamicImage, GenericImageView};

/// 计算给定宽高内最大的居中正方形区域，返回 `(left, top, size)`。
///
/// 偏移量按整数向下取整，奇数余量时多出的一列/行留在右侧/底部。
pub fn square_region(width: u32, height: u32) -> (u32, u32, u32) {
    let size = width.min(height);
    let left = (width - size) / 2;
    let top = (height - size) / 2;
    (left, top, size)
}

/// 将任意宽高比的图片裁剪为居中正方形，颜色模式保持不变。
///
/// 已经是正方形的图片原样返回。
pub fn crop_to_square(image: DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width == height {
        return image;
    }

    let (left, top, size) = square_region(width, height);
    image.crop_imm(left, top, size, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        }))
    }

    #[test]
    fn square_input_is_returned_unchanged() {
        let image = gradient(64, 64);
        let cropped = crop_to_square(image.clone());
        assert_eq!(cropped, image);
    }

    #[test]
    fn landscape_input_is_cropped_horizontally() {
        let cropped = crop_to_square(gradient(1000, 600));

        assert_eq!(cropped.dimensions(), (600, 600));
        // 左侧偏移 200，原图 x=200 处的像素成为新图 x=0
        assert_eq!(cropped.get_pixel(0, 0), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn portrait_input_is_cropped_vertically() {
        let cropped = crop_to_square(gradient(30, 51));

        assert_eq!(cropped.dimensions(), (30, 30));
        assert_eq!(cropped.get_pixel(0, 0), Rgba([0, 10, 0, 255]));
    }

    #[test]
    fn region_floors_odd_margins() {
        assert_eq!(square_region(101, 100), (0, 0, 100));
        assert_eq!(square_region(103, 100), (1, 0, 100));
        assert_eq!(square_region(7, 10), (0, 1, 7));
    }

    #[test]
    fn crop_keeps_color_mode() {
        let rgb = DynamicImage::ImageRgb8(ImageBuffer::new(12, 8));
        let cropped = crop_to_square(rgb);
        assert!(matches!(cropped, DynamicImage::ImageRgb8(_)));
    }
}
