use std::path::Path;

use image::RgbaImage;

use crate::infrastructure::error::InfrastructureError;

// 画像の読み書きを抽象化する (テストではモックに差し替える)
#[cfg_attr(test, mockall::automock)]
pub trait ImageStore {
    /// Decodes the file at `path` and forces it to 8-bit RGBA.
    fn load_rgba(&self, path: &Path) -> Result<RgbaImage, InfrastructureError>;

    /// Encodes `image` as PNG and writes it to `path`, replacing any existing file.
    fn save_png(&self, path: &Path, image: &RgbaImage) -> Result<(), InfrastructureError>;
}
