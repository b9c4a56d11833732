// texstack - block texture atlas builder
//
// Stacks the game's block tiles into one vertical strip (atlas.png) that
// the renderer reinterprets as a stacked 2D array texture. Data and
// transformations are kept apart:
// - *_data modules hold plain structs and tables
// - *_operations modules hold the pure functions over them

// Constants module
pub mod constants;

// Core modules
pub mod atlas;
pub mod catalog;
pub mod error;

// Simple re-exports
pub use atlas::{build_atlas, compose_atlas, AtlasData};
pub use catalog::{
    create_catalog, face_layers, layer_count, layer_of, validate_face_layers, CatalogData,
    FaceLayers, TextureEntry,
};
pub use error::{AtlasError, AtlasResult};
