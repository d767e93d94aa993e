//! Module defining the caption role.

use model::constants::{BOTTOM_PLACEHOLDER, TOP_PLACEHOLDER};
use super::align::VAlign;


macro_attr! {
    /// Identifies one of the two caption fields on the editor screen.
    ///
    /// The role is passed explicitly through every editor call;
    /// there is no runtime tag decoding.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(Roles))]
    pub enum Role {
        /// The caption rendered along the top edge of the image.
        Top,
        /// The caption rendered along the bottom edge of the image.
        Bottom,
    }
}

impl Role {
    /// Initial text shown in the caption field of this role
    /// before the user edits it.
    #[inline]
    pub fn placeholder(&self) -> &'static str {
        match *self {
            Role::Top => TOP_PLACEHOLDER,
            Role::Bottom => BOTTOM_PLACEHOLDER,
        }
    }

    /// Where a caption of this role is anchored on the image.
    #[inline]
    pub fn valign(&self) -> VAlign {
        match *self {
            Role::Top => VAlign::Top,
            Role::Bottom => VAlign::Bottom,
        }
    }
}


#[cfg(test)]
mod tests {
    use model::VAlign;
    use super::Role;

    #[test]
    fn placeholders_are_distinct() {
        assert!(Role::Top.placeholder() != Role::Bottom.placeholder());
    }

    #[test]
    fn valign_matches_role() {
        assert_eq!(VAlign::Top, Role::Top.valign());
        assert_eq!(VAlign::Bottom, Role::Bottom.valign());
    }
}
