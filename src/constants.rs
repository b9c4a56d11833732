//! Shared compile-time configuration
//!
//! Everything the build observes is fixed here. There are no runtime
//! flags, environment variables, or config files.

pub mod texture {
    /// Edge length shared by every source tile and every atlas slot, in pixels.
    pub const TILE_EDGE: u32 = 64;

    /// Extension appended to a catalog name to form its source file name.
    pub const TILE_EXTENSION: &str = "png";

    /// File name of the composed atlas in the working directory.
    pub const ATLAS_FILE_NAME: &str = "atlas.png";

    /// Suffix of the scratch file the atlas is encoded into before the
    /// rename onto ATLAS_FILE_NAME.
    pub const ATLAS_TEMP_SUFFIX: &str = "tmp";
}
