//! Module defining constants relevant to the data model.

use super::types::{Color, HAlign};


/// Name of the font used for caption text.
pub const DEFAULT_FONT: &'static str = "HelveticaNeue-CondensedBlack";

/// Size of the caption text, in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 40.0;

/// Default color of the caption text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Default color of the caption text outline.
/// This should be the inversion of DEFAULT_COLOR.
pub const DEFAULT_OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);
/// Width of the caption text outline, in pixels.
pub const OUTLINE_WIDTH: f32 = 3.0;

/// Default horizontal alignment of caption text.
pub const DEFAULT_HALIGN: HAlign = HAlign::Center;

/// Initial text of the top caption field.
pub const TOP_PLACEHOLDER: &'static str = "TOP";
/// Initial text of the bottom caption field.
pub const BOTTOM_PLACEHOLDER: &'static str = "BOTTOM";

/// Maximum caption length (in characters) while the device is in portrait.
pub const PORTRAIT_CAPTION_LIMIT: usize = 12;
/// Maximum caption length (in characters) while the device is in landscape.
pub const LANDSCAPE_CAPTION_LIMIT: usize = 20;

/// Marker appended to a caption that had to be cut at the character limit.
pub const ELLIPSIS: &'static str = "...";
