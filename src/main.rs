use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use flagsheet::DEFAULT_PADDING;
use flagsheet::config::{PackConfig, Scale};
use flagsheet::sheet;
use flagsheet::source::SourceSet;
use flagsheet::stylesheet::{self, SheetContext};

/// Assemble a directory of equally-sized flag images into one sprite PNG
/// plus a stylesheet mapping each flag to its offset.
#[derive(Parser, Debug)]
#[command(name = "flagsheet", version, about)]
struct Args {
    /// Directory containing the source PNG files.
    input: PathBuf,

    /// Where to write the composite sprite PNG.
    #[arg(short, long, default_value = "sprite.png")]
    out: PathBuf,

    /// Where to write the stylesheet (see --format).
    #[arg(short, long, default_value = "sprite.css")]
    stylesheet: PathBuf,

    /// Stylesheet output format.
    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Treat the sprite as a 2x asset: halve every emitted dimension and
    /// offset.
    #[arg(long)]
    retina: bool,

    /// Padding in pixels between adjacent cells.
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: u32,

    /// File stem of the fallback image placed at the sprite origin.
    #[arg(long, default_value = "default")]
    default_name: String,

    /// CSS class prefix for emitted rules.
    #[arg(long, default_value = "flag")]
    class: String,

    /// Sprite URL as referenced from the stylesheet. Defaults to the output
    /// sprite's file name.
    #[arg(long)]
    sprite_url: Option<String>,

    /// Also give the default image an entry in the position map.
    #[arg(long)]
    include_default: bool,

    /// Additionally write a half-resolution sprite variant to this path.
    #[arg(long)]
    sprite_1x: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Css,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let sprite_url = args.sprite_url.clone().unwrap_or_else(|| {
        args.out
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sprite.png".to_string())
    });
    let config = PackConfig {
        padding: args.padding,
        default_id: args.default_name.clone(),
        css_class: args.class.clone(),
        sprite_url,
        scale: if args.retina { Scale::Retina } else { Scale::Physical },
        include_default: args.include_default,
    };

    let set = SourceSet::load_dir(&args.input, &config.default_id)
        .with_context(|| format!("scanning {}", args.input.display()))?;
    let sheet = sheet::compose(&set, config.padding, config.include_default)
        .with_context(|| format!("compositing {} images", set.total()))?;

    sheet
        .image
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("Generated {}", args.out.display());

    if let Some(path) = &args.sprite_1x {
        let half = image::imageops::resize(
            &sheet.image,
            (sheet.image.width() / 2).max(1),
            (sheet.image.height() / 2).max(1),
            image::imageops::FilterType::Triangle,
        );
        half.save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Generated {}", path.display());
    }

    let ctx = SheetContext::new(&sheet, &config);
    let rendered = match args.format {
        Format::Css => stylesheet::render_css(&ctx, &config.css_class),
        Format::Json => stylesheet::render_json(&ctx)?,
    };
    std::fs::write(&args.stylesheet, rendered)
        .with_context(|| format!("writing {}", args.stylesheet.display()))?;
    println!("Generated {}", args.stylesheet.display());

    Ok(())
}
