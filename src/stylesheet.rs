use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::config::PackConfig;
use crate::layout::Position;
use crate::sheet::SpriteSheet;

// ── SheetContext ──────────────────────────────────────────────────────────────

/// Everything an emitter needs to describe a finished sheet.
///
/// Both output formats are rendered from this one shape, with the configured
/// resolution scale already applied to every dimension and offset.
#[derive(Debug, Serialize)]
pub struct SheetContext {
    pub sprite: SpriteInfo,
    pub item: ItemInfo,
}

/// The composite image: its URL and overall dimensions.
#[derive(Debug, Serialize)]
pub struct SpriteInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Per-item dimensions and the identifier → position map.
#[derive(Debug, Serialize)]
pub struct ItemInfo {
    pub width: u32,
    pub height: u32,
    pub positions: BTreeMap<String, Position>,
}

impl SheetContext {
    /// Build a context from a composited sheet, dividing every pixel value
    /// by the configured scale.
    pub fn new(sheet: &SpriteSheet, config: &PackConfig) -> Self {
        let d = config.scale.divisor();
        Self {
            sprite: SpriteInfo {
                path: config.sprite_url.clone(),
                width: sheet.layout.sheet_w() / d,
                height: sheet.layout.sheet_h() / d,
            },
            item: ItemInfo {
                width: sheet.layout.cell_w / d,
                height: sheet.layout.cell_h / d,
                positions: sheet
                    .positions
                    .iter()
                    .map(|(id, p)| (id.clone(), Position { x: p.x / d, y: p.y / d }))
                    .collect(),
            },
        }
    }
}

// ── Emitters ──────────────────────────────────────────────────────────────────

/// Render the context as CSS text.
///
/// One base `.{class}` rule carries the sprite image, the item size, and the
/// (0, 0) fallback position; each map entry becomes a `.{class}-{id}` rule
/// overriding `background-position`. Rules follow the map's sorted order.
pub fn render_css(ctx: &SheetContext, class: &str) -> String {
    let mut css = String::new();
    let _ = writeln!(css, ".{class} {{");
    let _ = writeln!(css, "\tbackground-image: url(\"{}\");", ctx.sprite.path);
    let _ = writeln!(
        css,
        "\tbackground-size: {}px {}px;",
        ctx.sprite.width, ctx.sprite.height
    );
    let _ = writeln!(css, "\tbackground-position: 0 0;");
    let _ = writeln!(css, "\tbackground-repeat: no-repeat;");
    let _ = writeln!(css, "\twidth: {}px;", ctx.item.width);
    let _ = writeln!(css, "\theight: {}px;", ctx.item.height);
    let _ = writeln!(css, "}}");

    for (id, pos) in &ctx.item.positions {
        let _ = writeln!(
            css,
            "\n.{class}-{id} {{\n\tbackground-position: {} {};\n}}",
            offset(pos.x),
            offset(pos.y)
        );
    }
    css
}

/// Serialise the context as a pretty-printed JSON style object.
pub fn render_json(ctx: &SheetContext) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ctx)
}

/// A background offset in CSS: negative and unit-suffixed, except zero.
fn offset(v: u32) -> String {
    if v == 0 { "0".to_string() } else { format!("-{v}px") }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scale;
    use crate::layout::GridLayout;
    use image::RgbaImage;

    // Helper: a 3-cell sheet (default + "ad" + "us") of 10×10 cells at
    // padding 4, as `compose` would produce it.
    fn sample_sheet() -> SpriteSheet {
        let layout = GridLayout::compute(3, 10, 10, 4);
        let mut positions = BTreeMap::new();
        positions.insert("ad".to_string(), layout.position(1));
        positions.insert("us".to_string(), layout.position(2));
        SpriteSheet {
            image: RgbaImage::new(layout.sheet_w(), layout.sheet_h()),
            layout,
            positions,
        }
    }

    #[test]
    fn physical_context_keeps_pixel_values() {
        let ctx = SheetContext::new(&sample_sheet(), &PackConfig::default());
        assert_eq!((ctx.sprite.width, ctx.sprite.height), (38, 10));
        assert_eq!((ctx.item.width, ctx.item.height), (10, 10));
        assert_eq!(ctx.item.positions["ad"], Position { x: 14, y: 0 });
        assert_eq!(ctx.item.positions["us"], Position { x: 28, y: 0 });
    }

    #[test]
    fn retina_context_halves_every_value() {
        let config = PackConfig { scale: Scale::Retina, ..PackConfig::default() };
        let ctx = SheetContext::new(&sample_sheet(), &config);
        assert_eq!((ctx.sprite.width, ctx.sprite.height), (19, 5));
        assert_eq!((ctx.item.width, ctx.item.height), (5, 5));
        assert_eq!(ctx.item.positions["ad"], Position { x: 7, y: 0 });
        assert_eq!(ctx.item.positions["us"], Position { x: 14, y: 0 });
    }

    #[test]
    fn retina_halving_round_trips_within_one() {
        // Integer halving truncates; doubling back must land within ±1.
        for v in 0..100u32 {
            let back = (v / 2) * 2;
            assert!(v - back <= 1, "v={v} doubled back to {back}");
        }
    }

    #[test]
    fn css_base_class_carries_sprite_and_fallback() {
        let ctx = SheetContext::new(&sample_sheet(), &PackConfig::default());
        let css = render_css(&ctx, "flag");
        assert!(css.contains(".flag {"));
        assert!(css.contains("background-image: url(\"sprite.png\");"));
        assert!(css.contains("background-size: 38px 10px;"));
        assert!(css.contains("background-position: 0 0;"));
        assert!(css.contains("width: 10px;"));
        assert!(css.contains("height: 10px;"));
    }

    #[test]
    fn css_emits_one_rule_per_position() {
        let ctx = SheetContext::new(&sample_sheet(), &PackConfig::default());
        let css = render_css(&ctx, "flag");
        assert!(css.contains(".flag-ad {\n\tbackground-position: -14px 0;\n}"));
        assert!(css.contains(".flag-us {\n\tbackground-position: -28px 0;\n}"));
    }

    #[test]
    fn css_rules_follow_sorted_identifier_order() {
        let ctx = SheetContext::new(&sample_sheet(), &PackConfig::default());
        let css = render_css(&ctx, "flag");
        let ad = css.find(".flag-ad").unwrap();
        let us = css.find(".flag-us").unwrap();
        assert!(ad < us);
    }

    #[test]
    fn zero_offset_is_unitless() {
        assert_eq!(offset(0), "0");
        assert_eq!(offset(14), "-14px");
    }

    #[test]
    fn json_exposes_the_template_contract() {
        let ctx = SheetContext::new(&sample_sheet(), &PackConfig::default());
        let json = render_json(&ctx).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["sprite"]["path"], "sprite.png");
        assert_eq!(v["sprite"]["width"], 38);
        assert_eq!(v["item"]["width"], 10);
        assert_eq!(v["item"]["positions"]["ad"]["x"], 14);
        assert_eq!(v["item"]["positions"]["us"]["x"], 28);
    }
}
