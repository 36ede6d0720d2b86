use std::collections::BTreeMap;

use image::RgbaImage;

use crate::error::SheetError;
use crate::layout::{GridLayout, Position};
use crate::source::SourceSet;

// ── SpriteSheet ───────────────────────────────────────────────────────────────

/// A finished composite: canvas pixels, grid geometry, and the identifier →
/// position map.
///
/// The default image always occupies the origin cell. Whether it also gets a
/// map entry is the caller's choice (`include_default`); stylesheets usually
/// leave it out because the base class already anchors the fallback at (0, 0).
#[derive(Debug)]
pub struct SpriteSheet {
    pub image: RgbaImage,
    pub layout: GridLayout,
    pub positions: BTreeMap<String, Position>,
}

/// Decode every source in `set`, place each at its grid cell, and return the
/// composited sheet.
///
/// The default image decides the cell size; any source with different
/// dimensions aborts the run with [`SheetError::DimensionMismatch`]. Each
/// source is decoded, blitted, and dropped before the next is opened, so peak
/// memory stays at one source image plus the canvas.
pub fn compose(
    set: &SourceSet,
    padding: u32,
    include_default: bool,
) -> Result<SpriteSheet, SheetError> {
    let default_img = image::open(&set.default.path)?.to_rgba8();
    let (cell_w, cell_h) = default_img.dimensions();

    let layout = GridLayout::compute(set.total(), cell_w, cell_h, padding);
    let mut canvas = RgbaImage::new(layout.sheet_w(), layout.sheet_h());

    // The default owns the origin cell.
    blit(&mut canvas, &default_img, 0, 0);
    drop(default_img);

    let mut positions: BTreeMap<String, Position> = BTreeMap::new();
    if include_default {
        positions.insert(set.default.id.clone(), Position { x: 0, y: 0 });
    }

    // Non-default cells are 1-based; cell 0 is the default's.
    for (i, src) in set.others.iter().enumerate() {
        let pos = layout.position(i as u32 + 1);
        let img = image::open(&src.path)?.to_rgba8();
        if img.dimensions() != (cell_w, cell_h) {
            return Err(SheetError::DimensionMismatch {
                id: src.id.clone(),
                found_w: img.width(),
                found_h: img.height(),
                want_w: cell_w,
                want_h: cell_h,
            });
        }
        blit(&mut canvas, &img, pos.x, pos.y);
        positions.insert(src.id.clone(), pos);
    }

    Ok(SpriteSheet { image: canvas, layout, positions })
}

/// Copy `src` onto `dst` with its top-left corner at `(x, y)`.
///
/// Callers must ensure the source rectangle fits inside `dst`.
fn blit(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for dy in 0..src.height() {
        for dx in 0..src.width() {
            dst.put_pixel(x + dx, y + dy, *src.get_pixel(dx, dy));
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(rgba))
    }

    #[test]
    fn blit_copies_pixels_at_offset() {
        let mut dst = RgbaImage::new(8, 8);
        let src = solid(2, 2, [10, 20, 30, 255]);
        blit(&mut dst, &src, 3, 4);
        assert_eq!(*dst.get_pixel(3, 4), Rgba([10, 20, 30, 255]));
        assert_eq!(*dst.get_pixel(4, 5), Rgba([10, 20, 30, 255]));
        // Pixels outside the source rectangle stay blank.
        assert_eq!(*dst.get_pixel(2, 4), Rgba([0, 0, 0, 0]));
        assert_eq!(*dst.get_pixel(5, 6), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn blit_at_origin_fills_top_left_corner() {
        let mut dst = RgbaImage::new(4, 4);
        let src = solid(2, 2, [255, 0, 0, 255]);
        blit(&mut dst, &src, 0, 0);
        assert_eq!(*dst.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*dst.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*dst.get_pixel(2, 2), Rgba([0, 0, 0, 0]));
    }
}
