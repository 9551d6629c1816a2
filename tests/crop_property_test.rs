use appicon_pipeline::icon_set::{crop_to_square, square_region};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use proptest::prelude::*;

proptest! {
    #[test]
    fn region_is_largest_centered_square(width in 1u32..4000, height in 1u32..4000) {
        let (left, top, size) = square_region(width, height);

        prop_assert_eq!(size, width.min(height));
        prop_assert!(left + size <= width);
        prop_assert!(top + size <= height);
        // 两侧余量相差不超过 1 像素
        prop_assert!((width - size - left) - left <= 1);
        prop_assert!((height - size - top) - top <= 1);
    }

    #[test]
    fn cropped_image_is_square(width in 1u32..96, height in 1u32..96) {
        let image = DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, 7, 255])
        }));
        let (left, top, size) = square_region(width, height);

        let cropped = crop_to_square(image);

        prop_assert_eq!(cropped.dimensions(), (size, size));
        prop_assert_eq!(cropped.get_pixel(0, 0), Rgba([left as u8, top as u8, 7, 255]));
    }
}
