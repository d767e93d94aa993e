//! Module implementing the rasterization backends.

use std::fmt;

use image::{DynamicImage, GenericImage};
use rusttype::{point, Rect, vector};

use model::{CaptionStyle, VAlign};
use model::constants::OUTLINE_WIDTH;
use resources::Font;
use util::text::{self, Style};
use super::error::RasterError;


/// A single caption line positioned for rendering.
#[derive(Clone, Copy, Debug)]
pub struct Overlay<'t> {
    /// Text of the caption.
    pub text: &'t str,
    /// Where the caption is anchored on the image.
    pub valign: VAlign,
}


/// Backend that turns a scene into a flat bitmap.
///
/// Implemented by `TextRasterizer` for real rendering; a hosting layer
/// with its own snapshot machinery (or a test) may substitute another.
pub trait Rasterize {
    /// Produce a new image of the base with all overlays drawn on it.
    fn rasterize(&self, image: &DynamicImage,
                 overlays: &[Overlay]) -> Result<DynamicImage, RasterError>;
}


/// Rasterizer that draws the caption text glyph by glyph.
pub struct TextRasterizer {
    font: Font,
    style: CaptionStyle,
}

impl TextRasterizer {
    /// Create a rasterizer drawing in given font & style.
    #[inline]
    pub fn new(font: Font, style: CaptionStyle) -> Self {
        TextRasterizer{font: font, style: style}
    }

    /// The style the captions are drawn with.
    #[inline]
    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }
}

impl fmt::Debug for TextRasterizer {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("TextRasterizer")
            .field("font", &self.font)
            .field("style", &self.style)
            .finish()
    }
}

impl Rasterize for TextRasterizer {
    fn rasterize(&self, image: &DynamicImage,
                 overlays: &[Overlay]) -> Result<DynamicImage, RasterError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyRegion);
        }

        // Rendering text requires alpha blending.
        let mut img = image.clone();
        if img.as_rgba8().is_none() {
            trace!("Converting image to RGBA...");
            img = DynamicImage::ImageRgba8(img.to_rgba());
        }

        for overlay in overlays {
            img = self.draw_overlay(img, overlay);
        }
        Ok(img)
    }
}

impl TextRasterizer {
    /// Draws a single caption text.
    /// Returns a new image.
    fn draw_overlay(&self, img: DynamicImage, overlay: &Overlay) -> DynamicImage {
        let mut img = img;

        if overlay.text.is_empty() {
            debug!("Empty caption text, skipping.");
            return img;
        }
        debug!("Rendering {v}-{h} text: {text:?}", text = overlay.text,
            v = format!("{:?}", overlay.valign).to_lowercase(),
            h = format!("{:?}", self.style.halign).to_lowercase());

        text::check(&self.font, overlay.text);

        let (width, height) = img.dimensions();
        let width = width as f32;
        let height = height as f32;

        // Make sure the vertical margin isn't too large by limiting it
        // to a small percentage of image height.
        let max_vmargin: f32 = 16.0;
        let vmargin = max_vmargin.min(height * 0.02);
        trace!("Vertical text margin computed as {}", vmargin);

        // Similarly for the horizontal margin.
        let max_hmargin: f32 = 16.0;
        let hmargin = max_hmargin.min(width * 0.02);
        trace!("Horizontal text margin computed as {}", hmargin);

        let margin_vector = vector(hmargin, vmargin);
        let rect: Rect<f32> = Rect{
            min: point(0.0, 0.0) + margin_vector,
            max: point(width, height) - margin_vector,
        };

        let alignment = (self.style.halign, overlay.valign);

        // Draw four copies of the text, shifted in four diagonal directions,
        // to create the basis for an outline.
        if let Some(outline_color) = self.style.outline {
            for &v in [vector(-OUTLINE_WIDTH, -OUTLINE_WIDTH),
                       vector(OUTLINE_WIDTH, -OUTLINE_WIDTH),
                       vector(OUTLINE_WIDTH, OUTLINE_WIDTH),
                       vector(-OUTLINE_WIDTH, OUTLINE_WIDTH)].iter() {
                let style = Style::new(&self.font, self.style.size, outline_color);
                let rect = Rect{min: rect.min + v, max: rect.max + v};
                img = text::render_line(img, overlay.text, alignment, rect, &style);
            }
        }

        // Now render the fill text in the original position.
        let style = Style::new(&self.font, self.style.size, self.style.color);
        text::render_line(img, overlay.text, alignment, rect, &style)
    }
}
