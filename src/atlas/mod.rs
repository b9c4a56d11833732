//! Atlas canvas construction and output
//!
//! Stacks one tile per catalog layer into a single vertical strip and
//! writes it out as PNG. The renderer reinterprets the strip as a
//! stacked 2D array texture.

pub mod atlas_data;
pub mod atlas_operations;

// Simple re-exports
pub use atlas_data::AtlasData;
pub use atlas_operations::{build_atlas, compose_atlas, load_tile, save_atlas, tile_path};
