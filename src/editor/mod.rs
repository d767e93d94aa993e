//! Module implementing the caption editor state.

mod events;
mod field;
mod keyboard;

pub use self::events::{EditEvents, ImageSource, ShareOutcome};
pub use self::field::{CaptionField, FieldState};
pub use self::keyboard::{KeyboardNotifications, Subscription};


use std::fmt;

use image::DynamicImage;

use compose::{Composite, ComposeError, Compositor, Rasterize, Scene};
use model::{Meme, Orientation, Role};


/// State of the single meme editor screen.
///
/// Owns the two caption fields, the loaded image (as part of the
/// scene) and the orientation-derived character limit. The hosting
/// UI layer drives it through the `EditEvents` trait and the
/// picker/share event methods; all of it runs on the host's one
/// event context.
#[derive(Debug)]
pub struct Editor {
    top: CaptionField,
    bottom: CaptionField,
    limit: usize,
    focus: Option<Role>,
    scene: Scene,
    camera_available: bool,
    view_offset: f32,
    pending: Option<PendingShare>,
}

/// Snapshot of the screen parked between handing a composite
/// to the share facility and hearing back from it.
struct PendingShare {
    top_text: String,
    bottom_text: String,
    original: DynamicImage,
    composited: DynamicImage,
}

impl fmt::Debug for PendingShare {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PendingShare")
            .field("top_text", &self.top_text)
            .field("bottom_text", &self.bottom_text)
            .finish()
    }
}

impl Editor {
    /// Create an editor for a freshly opened screen:
    /// both captions at their placeholders, no image loaded,
    /// portrait character limit.
    pub fn new() -> Self {
        Editor{
            top: CaptionField::new(Role::Top),
            bottom: CaptionField::new(Role::Bottom),
            limit: Orientation::default().caption_limit(),
            focus: None,
            scene: Scene::new(),
            camera_available: false,
            view_offset: 0.0,
            pending: None,
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}

// Accessors.
impl Editor {
    /// The caption field of given role.
    #[inline]
    pub fn field(&self, role: Role) -> &CaptionField {
        match role {
            Role::Top => &self.top,
            Role::Bottom => &self.bottom,
        }
    }

    #[inline]
    fn field_mut(&mut self, role: Role) -> &mut CaptionField {
        match role {
            Role::Top => &mut self.top,
            Role::Bottom => &mut self.bottom,
        }
    }

    /// Text currently shown in the caption field of given role.
    #[inline]
    pub fn caption_text(&self, role: Role) -> &str {
        self.field(role).text()
    }

    /// The character limit currently in force.
    #[inline]
    pub fn char_limit(&self) -> usize {
        self.limit
    }

    /// The caption field that currently has input focus, if any.
    #[inline]
    pub fn focused(&self) -> Option<Role> {
        self.focus
    }

    /// The scene the compositor would snapshot.
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Whether export/share is available, i.e. an image is loaded.
    #[inline]
    pub fn can_share(&self) -> bool {
        self.scene.has_image()
    }

    /// Whether the camera source can be offered to the user.
    #[inline]
    pub fn can_use_camera(&self) -> bool {
        self.camera_available
    }

    /// Vertical offset the hosting view should apply so the focused
    /// caption stays visible above the keyboard.
    #[inline]
    pub fn view_offset(&self) -> f32 {
        self.view_offset
    }
}

// Image acquisition events.
impl Editor {
    /// Record whether the hosting platform has a camera to offer.
    /// Checked anew every time the screen appears.
    #[inline]
    pub fn set_camera_available(&mut self, available: bool) {
        self.camera_available = available;
    }

    /// Whether an image can be requested from given source.
    /// The gallery is always there; the camera may not be.
    pub fn can_pick(&self, source: ImageSource) -> bool {
        match source {
            ImageSource::Gallery => true,
            ImageSource::Camera => self.camera_available,
        }
    }

    /// The image acquisition facility delivered an image.
    /// Loads it into the scene and enables export.
    pub fn image_picked(&mut self, image: DynamicImage) {
        debug!("Image picked, enabling share");
        self.scene.set_image(image);
    }

    /// The image acquisition facility was dismissed without a pick.
    pub fn picker_cancelled(&mut self) {
        debug!("Image picker cancelled, nothing to do");
    }
}

// Share flow.
impl Editor {
    /// Composite the current scene for export and park the state
    /// needed to assemble the record once the hand-off is confirmed.
    ///
    /// The returned `Composite` is what the caller hands to the
    /// external share facility.
    pub fn share<R: Rasterize>(&mut self,
                               compositor: &Compositor<R>) -> Result<Composite, ComposeError> {
        let original = self.scene.image().cloned().ok_or(ComposeError::NoImage)?;
        let composite = compositor.composite(&mut self.scene,
                                             self.top.text(), self.bottom.text())?;
        self.pending = Some(PendingShare{
            top_text: self.top.text().to_owned(),
            bottom_text: self.bottom.text().to_owned(),
            original: original,
            composited: composite.image().clone(),
        });
        Ok(composite)
    }

    /// The share facility reported back.
    ///
    /// Returns the assembled `Meme` record iff the facility confirmed
    /// completion; any other outcome just drops the pending state.
    pub fn share_completed(&mut self, outcome: ShareOutcome) -> Option<Meme> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => {
                warn!("Share completion reported with no share in flight");
                return None;
            }
        };

        if !outcome.is_completed() {
            debug!("Share not completed ({:?}), discarding", outcome);
            return None;
        }

        let result = Meme::builder()
            .top_text(pending.top_text)
            .bottom_text(pending.bottom_text)
            .original_image(pending.original)
            .memed_image(pending.composited)
            .build();
        match result {
            Ok(meme) => {
                debug!("Share completed, saving {:?}", meme);
                Some(meme)
            }
            Err(e) => {
                warn!("Failed to assemble the meme record: {}", e);
                None
            }
        }
    }
}

// Keyboard events.
impl Editor {
    /// The keyboard is about to slide in with given height.
    ///
    /// Only the bottom caption can be obscured by it, so the view
    /// offset reacts only while that field is focused.
    pub fn keyboard_will_show(&mut self, height: f32) {
        if self.focus == Some(Role::Bottom) {
            self.view_offset = -height;
        }
    }

    /// The keyboard is about to slide out.
    pub fn keyboard_will_hide(&mut self) {
        self.view_offset = 0.0;
    }
}

impl EditEvents for Editor {
    fn on_edit_begin(&mut self, role: Role) {
        self.focus = Some(role);
        self.field_mut(role).begin_editing();
    }

    fn on_proposed_change(&mut self, role: Role, current: &str, inserted: &str) -> bool {
        let limit = self.limit;
        self.field_mut(role).propose_change(current, inserted, limit)
    }

    fn on_orientation_change(&mut self, orientation: Orientation) {
        // Affects future keystrokes only; existing text is left alone.
        self.limit = orientation.caption_limit();
        debug!("Orientation now {:?}, character limit {}", orientation, self.limit);
    }

    fn on_cancel(&mut self) {
        debug!("Cancelling the edit session");
        self.top.reset();
        self.bottom.reset();
        self.scene.clear_image();
        self.pending = None;
        self.focus = None;
        self.view_offset = 0.0;
    }

    fn on_return_key(&mut self, role: Role) -> bool {
        if self.focus == Some(role) {
            self.focus = None;
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use image::DynamicImage;
    use spectral::prelude::*;

    use compose::{Compositor, Overlay, Rasterize, RasterError};
    use model::{Orientation, Role};
    use super::{EditEvents, Editor, ImageSource, ShareOutcome};

    /// Rasterizer that hands the base image back untouched.
    struct Passthrough;
    impl Rasterize for Passthrough {
        fn rasterize(&self, image: &DynamicImage,
                     _: &[Overlay]) -> Result<DynamicImage, RasterError> {
            Ok(image.clone())
        }
    }

    fn compositor() -> Compositor<Passthrough> {
        Compositor::with_rasterizer(Passthrough)
    }

    fn editor_with_image() -> Editor {
        let mut editor = Editor::new();
        editor.image_picked(DynamicImage::new_rgba8(4, 4));
        editor
    }

    #[test]
    fn fresh_editor_cannot_share() {
        let editor = Editor::new();
        assert!(!editor.can_share());
    }

    #[test]
    fn picked_image_enables_share() {
        let editor = editor_with_image();
        assert!(editor.can_share());
    }

    #[test]
    fn cancelled_picker_changes_nothing() {
        let mut editor = Editor::new();
        editor.picker_cancelled();
        assert!(!editor.can_share());
        assert_that!(editor.caption_text(Role::Top)).is_equal_to("TOP");
    }

    #[test]
    fn orientation_switches_the_limit() {
        let mut editor = Editor::new();
        assert_eq!(12, editor.char_limit());
        editor.on_orientation_change(Orientation::Landscape);
        assert_eq!(20, editor.char_limit());
        editor.on_orientation_change(Orientation::Portrait);
        assert_eq!(12, editor.char_limit());
    }

    #[test]
    fn orientation_leaves_text_alone() {
        let mut editor = Editor::new();
        editor.on_orientation_change(Orientation::Landscape);
        editor.on_edit_begin(Role::Top);
        assert!(editor.on_proposed_change(Role::Top, "", "SIXTEEN CHARS OK"));
        editor.on_orientation_change(Orientation::Portrait);
        // Over the new limit, but entered before the switch; stays.
        assert_that!(editor.caption_text(Role::Top)).is_equal_to("SIXTEEN CHARS OK");
    }

    #[test]
    fn cancel_resets_everything() {
        let mut editor = editor_with_image();
        editor.on_edit_begin(Role::Bottom);
        editor.on_proposed_change(Role::Bottom, "", "HELLO");
        editor.share(&compositor()).unwrap();

        editor.on_cancel();

        assert_that!(editor.caption_text(Role::Top)).is_equal_to("TOP");
        assert_that!(editor.caption_text(Role::Bottom)).is_equal_to("BOTTOM");
        assert!(!editor.can_share());
        // The pending share went away with everything else.
        assert_that!(editor.share_completed(ShareOutcome::Completed)).is_none();
    }

    #[test]
    fn share_without_image_is_an_error() {
        let mut editor = Editor::new();
        assert_that!(editor.share(&compositor()).map(|_| ())).is_err();
    }

    #[test]
    fn completed_share_produces_the_record() {
        let mut editor = editor_with_image();
        editor.on_edit_begin(Role::Bottom);
        assert!(editor.on_proposed_change(Role::Bottom, "", "HELLO"));

        editor.share(&compositor()).unwrap();
        let meme = editor.share_completed(ShareOutcome::Completed).unwrap();

        assert_that!(meme.top_text()).is_equal_to("TOP");
        assert_that!(meme.bottom_text()).is_equal_to("HELLO");
        assert_eq!((4, 4), {
            use image::GenericImage;
            meme.memed_image().dimensions()
        });
    }

    #[test]
    fn unconfirmed_share_produces_no_record() {
        let mut editor = editor_with_image();
        editor.share(&compositor()).unwrap();
        let outcome = ShareOutcome::NotCompleted(Some("went away".into()));
        assert_that!(editor.share_completed(outcome)).is_none();
        // The pending state is gone; a late "completed" changes nothing.
        assert_that!(editor.share_completed(ShareOutcome::Completed)).is_none();
    }

    #[test]
    fn return_key_resigns_focus() {
        let mut editor = Editor::new();
        editor.on_edit_begin(Role::Top);
        assert_eq!(Some(Role::Top), editor.focused());
        assert!(editor.on_return_key(Role::Top));
        assert_eq!(None, editor.focused());
    }

    #[test]
    fn keyboard_shifts_view_for_bottom_caption_only() {
        let mut editor = Editor::new();

        editor.on_edit_begin(Role::Top);
        editor.keyboard_will_show(216.0);
        assert_eq!(0.0, editor.view_offset());

        editor.on_edit_begin(Role::Bottom);
        editor.keyboard_will_show(216.0);
        assert_eq!(-216.0, editor.view_offset());

        editor.keyboard_will_hide();
        assert_eq!(0.0, editor.view_offset());
    }

    #[test]
    fn camera_gate_is_independent_of_share_gate() {
        let mut editor = Editor::new();
        assert!(!editor.can_use_camera());
        editor.set_camera_available(true);
        assert!(editor.can_use_camera());
        assert!(!editor.can_share());
    }

    #[test]
    fn gallery_is_always_pickable() {
        let mut editor = Editor::new();
        assert!(editor.can_pick(ImageSource::Gallery));
        assert!(!editor.can_pick(ImageSource::Camera));
        editor.set_camera_available(true);
        assert!(editor.can_pick(ImageSource::Camera));
    }
}
