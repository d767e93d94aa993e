//! Module for loading fonts used to render the captions.

use std::error;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rusttype::{self, FontCollection};


pub const FILE_EXTENSION: &'static str = "ttf";


macro_attr! {
    /// Font that captions are rendered with.
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font(...)")
    }
}


/// Loader of fonts from a directory.
#[derive(Clone, Debug)]
pub struct FontLoader {
    directory: PathBuf,
}

impl FontLoader {
    /// Create a loader that reads `<name>.ttf` files from given directory.
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{directory: directory.as_ref().to_owned()}
    }

    /// Load a font of given name.
    pub fn load(&self, name: &str) -> Result<Font, FontError> {
        let path = self.directory.join(format!("{}.{}", name, FILE_EXTENSION));
        trace!("Loading font `{}` from {}", name, path.display());

        let bytes = read_bytes(&path)
            .map_err(|e| FontError::Io(name.to_owned(), e))?;

        let fonts: Vec<_> = FontCollection::from_bytes(bytes).into_fonts().collect();
        match fonts.len() {
            0 => {
                error!("No fonts in a file for `{}` font resource", name);
                Err(FontError::NoFonts(name.to_owned()))
            }
            1 => {
                debug!("Font `{}` loaded successfully", name);
                Ok(fonts.into_iter().next().unwrap().into())
            }
            count => {
                error!("Font file for `{}` resource contains {} fonts, expected one",
                    name, count);
                Err(FontError::TooManyFonts(name.to_owned(), count))
            }
        }
    }
}

fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = fs::OpenOptions::new().read(true).open(path)?;
    let mut bytes = match file.metadata() {
        Ok(stat) => Vec::with_capacity(stat.len() as usize),
        Err(e) => {
            warn!("Failed to stat font file {} to obtain its size: {}",
                path.display(), e);
            Vec::new()
        },
    };
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io(String, io::Error),
    /// The font file contains no fonts.
    NoFonts(String),
    /// The font file contains more than one font.
    TooManyFonts(String, usize),
}

impl error::Error for FontError {
    fn description(&self) -> &str { "font loading error" }
    fn cause(&self) -> Option<&error::Error> {
        match *self {
            FontError::Io(_, ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::Io(ref name, ref e) =>
                write!(fmt, "cannot read font `{}`: {}", name, e),
            FontError::NoFonts(ref name) =>
                write!(fmt, "file for font `{}` contains no fonts", name),
            FontError::TooManyFonts(ref name, count) =>
                write!(fmt, "file for font `{}` contains {} fonts, expected one",
                    name, count),
        }
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::{FontError, FontLoader};

    #[test]
    fn missing_font_is_an_io_error() {
        let loader = FontLoader::new("/nonexistent/fonts");
        let result = loader.load("NoSuchFont");
        assert_that!(result).is_err();
        match result.unwrap_err() {
            FontError::Io(name, _) => assert_that!(name).is_equal_to("NoSuchFont".to_owned()),
            e => panic!("unexpected error: {}", e),
        }
    }
}
