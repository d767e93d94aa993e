//! Module defining the caption text style.

use model::constants::{DEFAULT_COLOR, DEFAULT_FONT, DEFAULT_HALIGN,
                       DEFAULT_OUTLINE_COLOR, DEFAULT_TEXT_SIZE};
use super::align::HAlign;
use super::color::Color;


/// Visual style that caption text is rendered with.
///
/// Every caption field on the screen uses the same fixed style;
/// the defaults mirror the stroke/fill attributes the fields are
/// initialized with.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionStyle {
    /// Name of the font to render the caption with.
    pub font: String,
    /// Size of the text, in pixels.
    pub size: f32,
    /// Horizontal alignment of the caption within the image.
    pub halign: HAlign,
    /// Fill color of the text.
    pub color: Color,
    /// Color of the text outline, if any.
    ///
    /// Pass `None` to draw the text without an outline.
    pub outline: Option<Color>,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        CaptionStyle{
            font: DEFAULT_FONT.into(),
            size: DEFAULT_TEXT_SIZE,
            halign: DEFAULT_HALIGN,
            color: DEFAULT_COLOR,
            outline: Some(DEFAULT_OUTLINE_COLOR),
        }
    }
}


#[cfg(test)]
mod tests {
    use model::{Color, HAlign};
    use super::CaptionStyle;

    #[test]
    fn default_style_is_outlined_and_centered() {
        let style = CaptionStyle::default();
        assert_eq!(HAlign::Center, style.halign);
        assert_eq!(Color::white(), style.color);
        assert_eq!(Some(Color::black()), style.outline);
    }
}
