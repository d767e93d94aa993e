//! Module defining the model types.

mod align;
mod color;
mod meme;
mod orientation;
mod role;
mod style;

pub use self::align::{HAlign, VAlign};
pub use self::color::Color;
pub use self::meme::{Meme,
                     Builder as MemeBuilder,
                     Error as MemeBuildError};
pub use self::orientation::Orientation;
pub use self::role::Role;
pub use self::style::CaptionStyle;
