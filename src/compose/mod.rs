//! Module implementing image compositing.

mod error;
mod output;
mod rasterizer;
mod scene;

pub use self::error::{ComposeError, RasterError};
pub use self::output::Composite;
pub use self::rasterizer::{Overlay, Rasterize, TextRasterizer};
pub use self::scene::{Chrome, ChromeGuard, Scene};


use std::path::Path;

use model::{CaptionStyle, VAlign};
use model::constants::DEFAULT_FONT;
use resources::{FontError, FontLoader};


/// Produces flattened images of the editor scene.
///
/// The compositor is generic over the rasterization backend so that
/// the hosting layer (or a test) can substitute its own;
/// by default it draws the caption text itself.
#[derive(Debug)]
pub struct Compositor<R: Rasterize = TextRasterizer> {
    rasterizer: R,
}

impl Compositor<TextRasterizer> {
    /// Create a `Compositor` that renders captions in the default style,
    /// with the font loaded from given directory.
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Result<Self, FontError> {
        let font = FontLoader::new(font_directory).load(DEFAULT_FONT)?;
        Ok(Compositor::with_rasterizer(
            TextRasterizer::new(font, CaptionStyle::default())))
    }
}

impl<R: Rasterize> Compositor<R> {
    /// Create a `Compositor` that uses given rasterization backend.
    #[inline]
    pub fn with_rasterizer(rasterizer: R) -> Self {
        Compositor{rasterizer: rasterizer}
    }
}

impl<R: Rasterize> Compositor<R> {
    /// Produce a flattened image of the scene with both captions
    /// rendered over the base image.
    ///
    /// The chrome elements are hidden for the duration of the snapshot
    /// and restored to their previous visibility on every exit path,
    /// including a rasterization failure.
    pub fn composite(&self, scene: &mut Scene,
                     top_text: &str, bottom_text: &str) -> Result<Composite, ComposeError> {
        let Scene{ref image, ref mut chrome} = *scene;
        let image = image.as_ref().ok_or(ComposeError::NoImage)?;

        debug!("Compositing scene with captions: top={:?}, bottom={:?}",
            top_text, bottom_text);
        let _chrome = ChromeGuard::hide(chrome);

        let overlays = [
            Overlay{text: top_text, valign: VAlign::Top},
            Overlay{text: bottom_text, valign: VAlign::Bottom},
        ];
        let flattened = self.rasterizer.rasterize(image, &overlays)?;
        Ok(Composite::new(flattened))
    }
}
