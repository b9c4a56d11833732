//! Atlas Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in atlas_operations.rs

use image::RgbaImage;

/// Atlas canvas under construction - Pure data structure
pub struct AtlasData {
    /// RGBA canvas, one tile wide, one tile tall per layer.
    /// Starts fully transparent; each slot is written exactly once.
    pub canvas: RgbaImage,
    pub tile_edge: u32,
    pub layer_count: u32,
}
