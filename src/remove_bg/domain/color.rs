use image::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// 背景マーカー用のマゼンタ (不透明)
    pub const KEY_MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const TRANSPARENT_WHITE: Color = Color::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Sum of the absolute per-channel differences, alpha included.
    pub fn diff(&self, other: &Color) -> u32 {
        [
            (self.r, other.r),
            (self.g, other.g),
            (self.b, other.b),
            (self.a, other.a),
        ]
        .iter()
        .map(|&(x, y)| (x as i32 - y as i32).unsigned_abs())
        .sum()
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}
