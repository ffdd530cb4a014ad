use super::error::InfrastructureError;
use crate::domain::image_store_trait::ImageStore;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

// ローカルファイルシステム上の ImageStore 実装
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for LocalFileStorage {
    fn load_rgba(&self, path: &Path) -> Result<RgbaImage, InfrastructureError> {
        let reader = image::io::Reader::open(path)
            .map_err(|e| InfrastructureError::FileStorageError(format!("{}: {}", path.display(), e)))?
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        let img = reader.decode().map_err(InfrastructureError::ImageLibError)?;
        Ok(img.to_rgba8())
    }

    fn save_png(&self, path: &Path, image: &RgbaImage) -> Result<(), InfrastructureError> {
        // 一度メモリ上にエンコードしてから書き込む (バックアップは取らない)
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).map_err(InfrastructureError::ImageLibError)?;
        fs::write(path, buffer.into_inner()).map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}
