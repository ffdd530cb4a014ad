use image::RgbaImage;

use crate::domain::color::Color;

/// Recolors the 4-connected region around `seed` whose pixels lie within
/// `threshold` of the seed's original color. Returns the number of pixels
/// recolored.
///
/// Every candidate is compared against the seed color, not against the
/// neighbor it was reached from, so a slow gradient stops once it drifts
/// past the threshold. Nothing happens when the seed is out of bounds or
/// already within `threshold` of `fill`.
pub fn flood_fill(image: &mut RgbaImage, seed: (u32, u32), fill: Color, threshold: u32) -> usize {
    let (width, height) = image.dimensions();
    let (x, y) = seed;
    if x >= width || y >= height {
        return 0;
    }

    let background = Color::from(*image.get_pixel(x, y));
    if fill.diff(&background) <= threshold {
        return 0;
    }

    let fill_pixel = fill.to_rgba();
    let index = |x: u32, y: u32| y as usize * width as usize + x as usize;
    let mut visited = vec![false; width as usize * height as usize];
    let mut stack = vec![(x, y)];
    visited[index(x, y)] = true;
    image.put_pixel(x, y, fill_pixel);
    let mut filled = 1;

    while let Some((x, y)) = stack.pop() {
        let neighbours = [
            (x.checked_add(1), Some(y)),
            (x.checked_sub(1), Some(y)),
            (Some(x), y.checked_add(1)),
            (Some(x), y.checked_sub(1)),
        ];
        for (nx, ny) in neighbours {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= width || ny >= height || visited[index(nx, ny)] {
                continue;
            }
            visited[index(nx, ny)] = true;

            if Color::from(*image.get_pixel(nx, ny)).diff(&background) <= threshold {
                image.put_pixel(nx, ny, fill_pixel);
                filled += 1;
                stack.push((nx, ny));
            }
        }
    }

    filled
}
