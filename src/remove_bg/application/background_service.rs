use std::fmt;

use image::RgbaImage;

use super::config::RemovalConfig;
use super::error::ApplicationError;
use crate::domain::flood_fill::flood_fill;
use crate::domain::image_store_trait::ImageStore;
use crate::domain::transparency::key_out;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReport {
    pub width: u32,
    pub height: u32,
    /// 塗りつぶしたピクセル数 (全シードの合計)
    pub filled: usize,
    /// 透明化したピクセル数
    pub cleared: usize,
}

impl fmt::Display for RemovalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}: {} pixels flood filled, {} made transparent",
            self.width, self.height, self.filled, self.cleared
        )
    }
}

pub struct BackgroundRemovalService {
    image_store: Box<dyn ImageStore>,
}

impl BackgroundRemovalService {
    pub fn new(image_store: Box<dyn ImageStore>) -> Self {
        Self { image_store }
    }

    /// Loads `config.input_path`, keys out the background and writes the
    /// result to `config.target_path()`.
    pub fn remove_background(&self, config: &RemovalConfig) -> Result<RemovalReport, ApplicationError> {
        config.validate()?;

        println!("Opening image...");
        let mut image = self.image_store.load_rgba(&config.input_path)?;

        println!("Flood filling corners...");
        let filled = fill_from_seeds(&mut image, config);

        println!("Converting key color to transparency...");
        let cleared = key_out(&mut image, config.key_color, config.replacement);

        println!("Saving image...");
        self.image_store.save_png(config.target_path(), &image)?;
        println!("Done");

        Ok(RemovalReport {
            width: image.width(),
            height: image.height(),
            filled,
            cleared,
        })
    }

    /// The in-memory part of `remove_background`, without I/O or output.
    pub fn process(image: &mut RgbaImage, config: &RemovalConfig) -> RemovalReport {
        let filled = fill_from_seeds(image, config);
        let cleared = key_out(image, config.key_color, config.replacement);
        RemovalReport {
            width: image.width(),
            height: image.height(),
            filled,
            cleared,
        }
    }
}

fn fill_from_seeds(image: &mut RgbaImage, config: &RemovalConfig) -> usize {
    config
        .seeds
        .points(image.width(), image.height())
        .into_iter()
        .map(|seed| flood_fill(image, seed, config.key_color, config.threshold))
        .sum()
}
