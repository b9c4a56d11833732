//! Builds atlas.png from the block tiles in the working directory
//!
//! Loads `<name>.png` for every catalog entry, stacks them into one
//! vertical strip, and writes `atlas.png` next to them. A missing or
//! unreadable tile fails the whole run; no partial atlas is written.

use anyhow::Context;
use texstack::constants::texture::ATLAS_FILE_NAME;
use texstack::{build_atlas, create_catalog, validate_face_layers};

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = run() {
        log::error!("[texstack] atlas build failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let catalog = create_catalog()?;
    validate_face_layers(&catalog)?;

    let work_dir = std::env::current_dir().context("could not resolve working directory")?;
    let output_path = work_dir.join(ATLAS_FILE_NAME);
    build_atlas(&catalog, &work_dir, &output_path)?;

    Ok(())
}
