//! Defines the output of a compositing operation.

use std::fmt;

use image::{DynamicImage, GenericImage};


/// The flattened image produced by a compositing pass.
///
/// This is what gets handed to the external share facility;
/// encoding and transport are its concern, not ours.
#[derive(Clone)]
#[must_use = "unused composite which must be used"]
pub struct Composite {
    image: DynamicImage,
}

impl Composite {
    #[inline]
    pub(super) fn new(image: DynamicImage) -> Self {
        Composite{image: image}
    }
}

impl Composite {
    /// The flattened image.
    #[inline]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Dimensions of the flattened image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Convert the output into the flattened image.
    #[inline]
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(fmt, "Composite({}x{})", w, h)
    }
}
