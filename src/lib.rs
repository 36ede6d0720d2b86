pub mod config;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod source;
pub mod stylesheet;

/// Default padding in pixels between adjacent sprite cells.
pub const DEFAULT_PADDING: u32 = 4;
