//! SVG → ICO converter
//!
//! Rasterizes with `resvg` and packs the renderings as PNG-compressed
//! 32-bit entries with the `ico` crate.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::domain::entities::SourceAsset;
use crate::domain::ports::{AssetConverter, ConversionConfig};
use crate::error::{IcopackError, IcopackResult};

/// Converter from SVG source to a multi-resolution ICO
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgIcoConverter;

impl SvgIcoConverter {
    pub fn new() -> Self {
        Self
    }
}

/// Render `tree` into a transparent `size`×`size` canvas, scaled to fit and centred.
///
/// Returns straight (non-premultiplied) RGBA bytes.
pub fn render_square(tree: &Tree, size: u32, name: &str) -> IcopackResult<Vec<u8>> {
    let svg_size = tree.size();
    let (width, height) = (svg_size.width(), svg_size.height());
    if width <= 0.0 || height <= 0.0 {
        return Err(IcopackError::render(
            name,
            format!("invalid SVG size {}x{}", width, height),
        ));
    }

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| IcopackError::render(name, format!("cannot allocate {0}x{0} canvas", size)))?;

    let scale = size as f32 / width.max(height);
    let tx = (size as f32 - width * scale) / 2.0;
    let ty = (size as f32 - height * scale) / 2.0;
    let transform = Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(rgba)
}

/// Pack square RGBA renderings into an ICO file
pub fn encode_ico(images: Vec<(u32, Vec<u8>)>, name: &str) -> IcopackResult<Vec<u8>> {
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for (size, rgba) in images {
        let image = ico::IconImage::from_rgba_data(size, size, rgba);
        let entry = ico::IconDirEntry::encode_as_png(&image)
            .map_err(|e| IcopackError::encode(name, format!("{}px entry: {}", size, e)))?;
        dir.add_entry(entry);
    }

    let mut out = Vec::new();
    dir.write(&mut out)
        .map_err(|e| IcopackError::encode(name, e))?;
    Ok(out)
}

impl AssetConverter for SvgIcoConverter {
    fn source_extension(&self) -> &'static str {
        "svg"
    }

    fn artifact_extension(&self) -> &'static str {
        "ico"
    }

    fn convert(&self, asset: &SourceAsset, config: &ConversionConfig) -> IcopackResult<Vec<u8>> {
        let source = asset.text()?;
        let svg = match &config.color {
            Some(color) => color.apply_to_svg(source),
            None => source.to_string(),
        };

        let tree = Tree::from_str(&svg, &Options::default())
            .map_err(|e| IcopackError::render(asset.name(), e))?;

        let images = config
            .sizes
            .as_slice()
            .iter()
            .map(|&size| render_square(&tree, size, asset.name()).map(|rgba| (size, rgba)))
            .collect::<IcopackResult<Vec<_>>>()?;

        encode_ico(images, asset.name())
    }
}
