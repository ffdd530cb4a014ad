pub mod color;
pub mod error;
pub mod flood_fill;
pub mod image_store_trait;
pub mod seed;
pub mod transparency;
