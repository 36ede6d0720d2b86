use crate::DEFAULT_PADDING;

// ── Scale ─────────────────────────────────────────────────────────────────────

/// Resolution convention for stylesheet coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    /// Physical pixels: stylesheet coordinates match the sprite exactly.
    #[default]
    Physical,
    /// The sprite holds 2× assets addressed at 1× logical size; every
    /// emitted dimension and offset is halved. Halving truncates, so
    /// doubling back reproduces the source coordinate within ±1.
    Retina,
}

impl Scale {
    /// Divisor applied to physical pixel values before emission.
    pub fn divisor(self) -> u32 {
        match self {
            Scale::Physical => 1,
            Scale::Retina => 2,
        }
    }
}

// ── PackConfig ────────────────────────────────────────────────────────────────

/// Sprite-sheet generation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct PackConfig {
    /// Empty margin between adjacent cells in pixels. Keeps neighbouring
    /// images from bleeding into each other when the sprite is scaled.
    pub padding: u32,
    /// Identifier (file stem) of the fallback image placed at the origin.
    pub default_id: String,
    /// CSS class prefix for emitted rules (`.flag`, `.flag-us`, ...).
    pub css_class: String,
    /// Sprite URL as referenced from the emitted stylesheet.
    pub sprite_url: String,
    /// Resolution convention for stylesheet coordinates.
    pub scale: Scale,
    /// Whether the default image also gets an entry in the position map.
    pub include_default: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            default_id: "default".to_string(),
            css_class: "flag".to_string(),
            sprite_url: "sprite.png".to_string(),
            scale: Scale::Physical,
            include_default: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
