//! Module defining the events the hosting UI layer exchanges
//! with the editor.

use model::{Orientation, Role};


/// Where the image acquisition facility gets its image from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// The device's photo gallery.
    Gallery,
    /// The device's camera.
    Camera,
}

/// What the external share facility reported back
/// after being handed a composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share went through.
    Completed,
    /// The share was dismissed or failed, with optional error detail.
    NotCompleted(Option<String>),
}

impl ShareOutcome {
    /// Whether the facility confirmed a successful hand-off.
    #[inline]
    pub fn is_completed(&self) -> bool {
        *self == ShareOutcome::Completed
    }
}


/// The set of text-editing capabilities the hosting UI layer drives.
///
/// This replaces per-field delegate callbacks: a single handler
/// (the `Editor`) receives every event along with the typed `Role`
/// of the field it concerns.
pub trait EditEvents {
    /// A caption field of given role gained input focus.
    fn on_edit_begin(&mut self, role: Role);

    /// A keystroke proposes appending `inserted` to `current`.
    /// Returns whether the hosting field should apply the change itself.
    fn on_proposed_change(&mut self, role: Role, current: &str, inserted: &str) -> bool;

    /// The device orientation changed.
    fn on_orientation_change(&mut self, orientation: Orientation);

    /// The user abandoned the edit session.
    fn on_cancel(&mut self);

    /// The return key was pressed in a caption field.
    /// Returns whether the field should resign focus.
    fn on_return_key(&mut self, role: Role) -> bool;
}
