//! Module handling the resources used for compositing.

mod fonts;

pub use self::fonts::{Font, FontError, FontLoader, FILE_EXTENSION as FONT_FILE_EXTENSION};
