//! Texture Catalog Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in catalog_operations.rs

use lazy_static::lazy_static;
use std::collections::HashMap;

/// One slot assignment: which texture name fills which atlas layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureEntry {
    pub name: &'static str,
    pub layer: u32,
}

/// Slot table for the shipped block texture set.
/// Layers must stay distinct and contiguous from 0; the renderer
/// reinterprets the strip as a stacked 2D array texture indexed by layer.
pub const TEXTURE_TABLE: [TextureEntry; 12] = [
    TextureEntry { name: "debug", layer: 0 },
    TextureEntry { name: "dirt", layer: 1 },
    TextureEntry { name: "grass", layer: 2 },
    TextureEntry { name: "grass_side", layer: 3 },
    TextureEntry { name: "cobble", layer: 4 },
    TextureEntry { name: "planks", layer: 5 },
    TextureEntry { name: "sand", layer: 6 },
    TextureEntry { name: "bricks", layer: 7 },
    TextureEntry { name: "gravel", layer: 8 },
    TextureEntry { name: "leaves", layer: 9 },
    TextureEntry { name: "wood_top", layer: 10 },
    TextureEntry { name: "wood", layer: 11 },
];

/// Atlas layer per cube face, in [TOP, BOTTOM, LEFT, RIGHT, FRONT, BACK] order
pub type FaceLayers = [u32; 6];

/// Face assignments for every block the mesher renders
pub const BLOCK_FACE_TABLE: [(&str, FaceLayers); 9] = [
    ("dirt", [1; 6]),
    ("grass", [2, 1, 3, 3, 3, 3]),
    ("cobble", [4; 6]),
    ("planks", [5; 6]),
    ("sand", [6; 6]),
    ("bricks", [7; 6]),
    ("gravel", [8; 6]),
    ("leaves", [9; 6]),
    ("wood", [10, 10, 11, 11, 11, 11]),
];

lazy_static! {
    /// Lookup map built from BLOCK_FACE_TABLE
    pub static ref BLOCK_FACE_LAYERS: HashMap<&'static str, FaceLayers> =
        BLOCK_FACE_TABLE.iter().copied().collect();
}

/// Catalog data - validated slot assignments plus atlas geometry
#[derive(Debug)]
pub struct CatalogData {
    /// Slot entries in table order
    pub entries: Vec<TextureEntry>,
    /// Map from texture name to its layer
    pub name_to_layer: HashMap<&'static str, u32>,
    /// Number of layers in the atlas
    pub layer_count: u32,
    /// Edge length of every tile and slot, in pixels
    pub tile_edge: u32,
}
