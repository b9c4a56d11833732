//! Texture catalog: the fixed name-to-layer table and its face mapping
//!
//! The catalog decides which source tile fills which atlas layer and how
//! block faces index into the finished stack. It is defined at compile
//! time and validated before any file is touched.

pub mod catalog_data;
pub mod catalog_operations;

// Simple re-exports
pub use catalog_data::{CatalogData, FaceLayers, TextureEntry, TEXTURE_TABLE};
pub use catalog_operations::{
    create_catalog, create_catalog_from, face_layers, layer_count, layer_of, validate_face_layers,
};
