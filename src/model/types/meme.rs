//! Module implementing the `Meme` record and its builder.

use std::error;
use std::fmt;

use image::{DynamicImage, GenericImage};


/// The finished meme, assembled at share time.
///
/// The record is immutable once created: it is built only after
/// a successful compositing pass, and only when the share facility
/// has confirmed completion.
#[derive(Clone)]
pub struct Meme {
    top_text: String,
    bottom_text: String,
    original: DynamicImage,
    memed: DynamicImage,
}

impl Meme {
    /// Start building a `Meme`.
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Meme {
    /// Text of the top caption.
    #[inline]
    pub fn top_text(&self) -> &str {
        &self.top_text
    }

    /// Text of the bottom caption.
    #[inline]
    pub fn bottom_text(&self) -> &str {
        &self.bottom_text
    }

    /// The original, un-captioned image.
    #[inline]
    pub fn original_image(&self) -> &DynamicImage {
        &self.original
    }

    /// The flattened image with the captions rendered on it.
    #[inline]
    pub fn memed_image(&self) -> &DynamicImage {
        &self.memed
    }
}

impl fmt::Debug for Meme {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (ow, oh) = self.original.dimensions();
        let (mw, mh) = self.memed.dimensions();
        fmt.debug_struct("Meme")
            .field("top_text", &self.top_text)
            .field("bottom_text", &self.bottom_text)
            .field("original", &format_args!("{}x{}", ow, oh))
            .field("memed", &format_args!("{}x{}", mw, mh))
            .finish()
    }
}


/// Builder for `Meme`.
#[derive(Clone, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    top_text: Option<String>,
    bottom_text: Option<String>,
    original: Option<DynamicImage>,
    memed: Option<DynamicImage>,
}

impl Builder {
    /// Create a new `Builder` for a `Meme`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }

    /// Set the text of the top caption.
    #[inline]
    pub fn top_text<S: Into<String>>(mut self, text: S) -> Self {
        self.top_text = Some(text.into()); self
    }

    /// Set the text of the bottom caption.
    #[inline]
    pub fn bottom_text<S: Into<String>>(mut self, text: S) -> Self {
        self.bottom_text = Some(text.into()); self
    }

    /// Set the original, un-captioned image.
    #[inline]
    pub fn original_image(mut self, image: DynamicImage) -> Self {
        self.original = Some(image); self
    }

    /// Set the composited image with the captions rendered on it.
    #[inline]
    pub fn memed_image(mut self, image: DynamicImage) -> Self {
        self.memed = Some(image); self
    }
}

impl Builder {
    /// Build the resulting `Meme`.
    pub fn build(self) -> Result<Meme, Error> {
        self.validate()?;
        Ok(Meme{
            top_text: self.top_text.unwrap_or_else(String::new),
            bottom_text: self.bottom_text.unwrap_or_else(String::new),
            original: self.original.unwrap(),  // mandatory
            memed: self.memed.unwrap(),  // mandatory
        })
    }

    #[doc(hidden)]
    fn validate(&self) -> Result<(), Error> {
        if self.original.is_none() {
            return Err(Error::NoOriginalImage);
        }
        if self.memed.is_none() {
            return Err(Error::NoMemedImage);
        }
        Ok(())
    }
}


/// Error while building a `Meme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// No original image given.
    NoOriginalImage,
    /// No composited image given.
    NoMemedImage,
}

impl error::Error for Error {
    fn description(&self) -> &str { "Meme creation error" }
    fn cause(&self) -> Option<&error::Error> { None }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoOriginalImage => write!(fmt, "no original image given"),
            Error::NoMemedImage => write!(fmt, "no composited image given"),
        }
    }
}


#[cfg(test)]
mod tests {
    use image::DynamicImage;
    use spectral::prelude::*;
    use super::{Error, Meme};

    #[test]
    fn complete_record() {
        let meme = Meme::builder()
            .top_text("TOP")
            .bottom_text("HELLO")
            .original_image(DynamicImage::new_rgba8(4, 4))
            .memed_image(DynamicImage::new_rgba8(4, 4))
            .build().unwrap();
        assert_eq!("TOP", meme.top_text());
        assert_eq!("HELLO", meme.bottom_text());
    }

    #[test]
    fn missing_original_image() {
        let result = Meme::builder()
            .top_text("TOP")
            .memed_image(DynamicImage::new_rgba8(4, 4))
            .build();
        assert_that!(result).is_err_containing(Error::NoOriginalImage);
    }

    #[test]
    fn missing_memed_image() {
        let result = Meme::builder()
            .original_image(DynamicImage::new_rgba8(4, 4))
            .build();
        assert_that!(result).is_err_containing(Error::NoMemedImage);
    }

    #[test]
    fn caption_texts_default_to_empty() {
        let meme = Meme::builder()
            .original_image(DynamicImage::new_rgba8(4, 4))
            .memed_image(DynamicImage::new_rgba8(4, 4))
            .build().unwrap();
        assert_that!(meme.top_text()).is_equal_to("");
        assert_that!(meme.bottom_text()).is_equal_to("");
    }
}
