//! Module defining the device orientation.

use model::constants::{LANDSCAPE_CAPTION_LIMIT, PORTRAIT_CAPTION_LIMIT};


macro_attr! {
    /// Orientation of the device hosting the editor screen.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(Orientations))]
    pub enum Orientation {
        /// Portrait orientation.
        Portrait,
        /// Landscape orientation.
        Landscape,
    }
}

impl Orientation {
    /// Interpret the platform's "is landscape" flag.
    #[inline]
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape { Orientation::Landscape } else { Orientation::Portrait }
    }

    /// Maximum caption length (in characters) in this orientation.
    #[inline]
    pub fn caption_limit(&self) -> usize {
        match *self {
            Orientation::Portrait => PORTRAIT_CAPTION_LIMIT,
            Orientation::Landscape => LANDSCAPE_CAPTION_LIMIT,
        }
    }

    /// Whether this is the landscape orientation.
    #[inline]
    pub fn is_landscape(&self) -> bool {
        *self == Orientation::Landscape
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::Orientation;

    #[test]
    fn portrait_limit_is_shorter() {
        assert_that!(Orientation::Portrait.caption_limit())
            .is_less_than(Orientation::Landscape.caption_limit());
    }

    #[test]
    fn from_landscape_flag() {
        assert_eq!(Orientation::Landscape, Orientation::from_landscape(true));
        assert_eq!(Orientation::Portrait, Orientation::from_landscape(false));
    }
}
