use thiserror::Error;

/// Errors produced while assembling a sprite sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The input directory contained no usable PNG files.
    #[error("no PNG images found in {dir}")]
    EmptySet { dir: String },

    /// No source image matched the configured default identifier.
    #[error("default image '{name}' not found in {dir}")]
    MissingDefault { name: String, dir: String },

    /// A source image's dimensions differ from the default's; placing it
    /// would corrupt neighbouring cells, so the run is aborted instead.
    #[error("image '{id}' is {found_w}×{found_h}, expected {want_w}×{want_h}")]
    DimensionMismatch {
        id: String,
        found_w: u32,
        found_h: u32,
        want_w: u32,
        want_h: u32,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
