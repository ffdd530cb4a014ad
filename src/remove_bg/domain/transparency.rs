use image::RgbaImage;
use imageproc::map::map_colors;

use crate::domain::color::Color;

/// Rewrites every pixel exactly equal to `key` as `replacement` and returns
/// how many were rewritten. Pixels merely close to the key (antialiased
/// edges) stay as they are.
pub fn key_out(image: &mut RgbaImage, key: Color, replacement: Color) -> usize {
    let key_pixel = key.to_rgba();
    let replacement_pixel = replacement.to_rgba();

    let cleared = image.pixels().filter(|p| **p == key_pixel).count();
    if cleared > 0 {
        *image = map_colors(&*image, |p| if p == key_pixel { replacement_pixel } else { p });
    }
    cleared
}
