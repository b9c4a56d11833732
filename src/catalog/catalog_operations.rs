//! Texture Catalog Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! No methods, no self, just transformations.

use super::catalog_data::{
    CatalogData, FaceLayers, TextureEntry, BLOCK_FACE_LAYERS, BLOCK_FACE_TABLE, TEXTURE_TABLE,
};
use crate::constants::texture::TILE_EDGE;
use crate::error::{AtlasError, AtlasResult};
use std::collections::HashMap;

/// Create the shipped catalog: the built-in slot table at the built-in tile edge
pub fn create_catalog() -> AtlasResult<CatalogData> {
    create_catalog_from(TEXTURE_TABLE.to_vec(), TILE_EDGE)
}

/// Create catalog data from an explicit entry list, validating it first.
/// Rejected tables: empty, zero edge, duplicate names, duplicate layers,
/// layers outside [0, entry count).
pub fn create_catalog_from(entries: Vec<TextureEntry>, tile_edge: u32) -> AtlasResult<CatalogData> {
    if entries.is_empty() {
        return Err(AtlasError::InvalidCatalog("no texture entries".to_string()));
    }
    if tile_edge == 0 {
        return Err(AtlasError::InvalidCatalog(
            "tile edge must be positive".to_string(),
        ));
    }

    let layer_count = entries.len() as u32;
    let mut name_to_layer = HashMap::new();
    let mut layer_to_name: HashMap<u32, &'static str> = HashMap::new();

    for entry in &entries {
        if entry.layer >= layer_count {
            return Err(AtlasError::InvalidCatalog(format!(
                "layer {} for '{}' outside [0, {})",
                entry.layer, entry.name, layer_count
            )));
        }
        if name_to_layer.insert(entry.name, entry.layer).is_some() {
            return Err(AtlasError::InvalidCatalog(format!(
                "duplicate texture name '{}'",
                entry.name
            )));
        }
        if let Some(prev) = layer_to_name.insert(entry.layer, entry.name) {
            return Err(AtlasError::InvalidCatalog(format!(
                "duplicate layer {} ('{}' and '{}')",
                entry.layer, prev, entry.name
            )));
        }
    }

    log::info!(
        "[catalog_operations::create] validated {} entries, {}x{} tiles",
        layer_count,
        tile_edge,
        tile_edge
    );

    Ok(CatalogData {
        entries,
        name_to_layer,
        layer_count,
        tile_edge,
    })
}

/// Get the atlas layer assigned to a texture name
pub fn layer_of(data: &CatalogData, name: &str) -> Option<u32> {
    data.name_to_layer.get(name).copied()
}

/// Number of layers the catalog assigns
pub fn layer_count(data: &CatalogData) -> u32 {
    data.layer_count
}

/// Get the per-face atlas layers for a rendered block
pub fn face_layers(block: &str) -> Option<&'static FaceLayers> {
    BLOCK_FACE_LAYERS.get(block)
}

/// Check every face assignment against the catalog.
/// A valid catalog assigns every layer in [0, layer_count), so the range
/// check alone proves each referenced layer holds a texture.
pub fn validate_face_layers(data: &CatalogData) -> AtlasResult<()> {
    for (block, faces) in &BLOCK_FACE_TABLE {
        for &layer in faces {
            if layer >= data.layer_count {
                return Err(AtlasError::InvalidCatalog(format!(
                    "face layer {} for block '{}' outside [0, {})",
                    layer, block, data.layer_count
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_is_valid() {
        let catalog = create_catalog().expect("Failed to create shipped catalog");
        assert_eq!(layer_count(&catalog), 12);
        assert_eq!(catalog.tile_edge, 64);
        assert_eq!(catalog.entries.len(), 12);
        assert_eq!(layer_of(&catalog, "debug"), Some(0));
        assert_eq!(layer_of(&catalog, "grass_side"), Some(3));
        assert_eq!(layer_of(&catalog, "wood"), Some(11));
        assert_eq!(layer_of(&catalog, "bedrock"), None);
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = create_catalog_from(Vec::new(), 64);
        assert!(matches!(result, Err(AtlasError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_zero_edge() {
        let entries = vec![TextureEntry { name: "a", layer: 0 }];
        let result = create_catalog_from(entries, 0);
        assert!(matches!(result, Err(AtlasError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let entries = vec![
            TextureEntry { name: "a", layer: 0 },
            TextureEntry { name: "a", layer: 1 },
        ];
        let err = create_catalog_from(entries, 64).expect_err("Duplicate name should be rejected");
        assert!(err.to_string().contains("duplicate texture name 'a'"));
    }

    #[test]
    fn test_rejects_duplicate_layer() {
        let entries = vec![
            TextureEntry { name: "a", layer: 1 },
            TextureEntry { name: "b", layer: 1 },
        ];
        let err = create_catalog_from(entries, 64).expect_err("Duplicate layer should be rejected");
        assert!(err.to_string().contains("duplicate layer 1"));
    }

    #[test]
    fn test_rejects_out_of_range_layer() {
        let entries = vec![
            TextureEntry { name: "a", layer: 0 },
            TextureEntry { name: "b", layer: 2 },
        ];
        let err =
            create_catalog_from(entries, 64).expect_err("Out-of-range layer should be rejected");
        assert!(err.to_string().contains("outside [0, 2)"));
    }

    #[test]
    fn test_face_layers_lookup() {
        assert_eq!(face_layers("grass"), Some(&[2, 1, 3, 3, 3, 3]));
        assert_eq!(face_layers("wood"), Some(&[10, 10, 11, 11, 11, 11]));
        assert_eq!(face_layers("dirt"), Some(&[1; 6]));
        // debug is a texture, not a rendered block
        assert_eq!(face_layers("debug"), None);
        assert_eq!(face_layers("air"), None);
    }

    #[test]
    fn test_shipped_face_layers_consistent() {
        let catalog = create_catalog().expect("Failed to create shipped catalog");
        validate_face_layers(&catalog).expect("Shipped face table should fit the shipped catalog");
    }

    #[test]
    fn test_face_layers_out_of_range_for_small_catalog() {
        let entries = vec![
            TextureEntry { name: "a", layer: 0 },
            TextureEntry { name: "b", layer: 1 },
        ];
        let catalog = create_catalog_from(entries, 8).expect("Failed to create catalog");
        let err = validate_face_layers(&catalog)
            .expect_err("Face table should not fit a 2 layer catalog");
        assert!(matches!(err, AtlasError::InvalidCatalog(_)));
    }
}
