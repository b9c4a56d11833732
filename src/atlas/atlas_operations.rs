//! Atlas Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects
//! beyond the documented file reads and the single output write.

use super::atlas_data::AtlasData;
use crate::catalog::CatalogData;
use crate::constants::texture::{ATLAS_TEMP_SUFFIX, TILE_EXTENSION};
use crate::error::{AtlasError, AtlasResult};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Allocate a transparent canvas sized for the catalog
pub fn create_atlas_canvas(tile_edge: u32, layer_count: u32) -> AtlasData {
    AtlasData {
        canvas: RgbaImage::new(tile_edge, tile_edge * layer_count),
        tile_edge,
        layer_count,
    }
}

/// Resolve the source file for a texture name: `<dir>/<name>.png`
pub fn tile_path(source_dir: &Path, name: &str) -> PathBuf {
    source_dir.join(format!("{}.{}", name, TILE_EXTENSION))
}

/// Load one source tile, decoded to RGBA
pub fn load_tile(source_dir: &Path, name: &str) -> AtlasResult<RgbaImage> {
    let path = tile_path(source_dir, name);
    let img = image::open(&path).map_err(|e| AtlasError::MissingImage {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Copy a tile into its layer band, replacing pixels without blending.
/// The copy extent is clamped to the slot: an oversized tile contributes
/// only its top-left corner, an undersized tile leaves the rest of the
/// slot transparent. Bands stay disjoint either way.
pub fn blit_tile(data: &mut AtlasData, layer: u32, name: &str, tile: &RgbaImage) {
    debug_assert!(
        layer < data.layer_count,
        "layer {} out of bounds for {} layer atlas",
        layer,
        data.layer_count
    );

    let width = tile.width().min(data.tile_edge);
    let height = tile.height().min(data.tile_edge);

    if tile.width() != data.tile_edge || tile.height() != data.tile_edge {
        log::warn!(
            "[atlas_operations::blit] tile '{}' is {}x{}, expected {}x{}; copying top-left {}x{}",
            name,
            tile.width(),
            tile.height(),
            data.tile_edge,
            data.tile_edge,
            width,
            height
        );
    }

    let y_offset = layer * data.tile_edge;
    for y in 0..height {
        for x in 0..width {
            let pixel = tile.get_pixel(x, y);
            data.canvas.put_pixel(x, y_offset + y, *pixel);
        }
    }
}

/// Load every catalog entry and blit it into place.
/// Entries are processed in table order; a missing or undecodable tile
/// aborts the whole build.
pub fn compose_atlas(catalog: &CatalogData, source_dir: &Path) -> AtlasResult<AtlasData> {
    let mut data = create_atlas_canvas(catalog.tile_edge, catalog.layer_count);

    log::info!(
        "[atlas_operations::compose] stacking {} tiles into a {}x{} canvas",
        catalog.layer_count,
        data.canvas.width(),
        data.canvas.height()
    );

    for entry in &catalog.entries {
        let tile = load_tile(source_dir, entry.name)?;
        blit_tile(&mut data, entry.layer, entry.name, &tile);
        log::debug!(
            "[atlas_operations::compose] placed '{}' at layer {}",
            entry.name,
            entry.layer
        );
    }

    Ok(data)
}

/// Encode the canvas as PNG into a sibling scratch file, then rename it
/// onto the destination. A failed run never leaves a corrupt file at the
/// output path, and a prior atlas survives until the rename.
pub fn save_atlas(data: &AtlasData, output_path: &Path) -> AtlasResult<()> {
    let mut temp_os = output_path.as_os_str().to_owned();
    temp_os.push(".");
    temp_os.push(ATLAS_TEMP_SUFFIX);
    let temp_path = PathBuf::from(temp_os);

    if let Err(e) = data.canvas.save_with_format(&temp_path, ImageFormat::Png) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(AtlasError::WriteFailed {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = std::fs::rename(&temp_path, output_path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(AtlasError::WriteFailed {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        });
    }

    Ok(())
}

/// Build the atlas end to end: compose from source_dir, save to output_path
pub fn build_atlas(
    catalog: &CatalogData,
    source_dir: &Path,
    output_path: &Path,
) -> AtlasResult<()> {
    let data = compose_atlas(catalog, source_dir)?;
    save_atlas(&data, output_path)?;
    log::info!("[atlas_operations::build] wrote {}", output_path.display());
    Ok(())
}
