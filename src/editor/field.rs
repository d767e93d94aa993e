//! Module implementing a single caption field.

use model::Role;
use model::constants::ELLIPSIS;


/// Editing state of a caption field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// The field still shows its initial placeholder text.
    Placeholder,
    /// The field holds user-entered text.
    Editing,
    /// The last edit went over the character limit and the text
    /// was forcibly cut. Behaves as `Editing` from here on.
    Truncated,
}


/// One of the two editable caption fields on the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionField {
    role: Role,
    text: String,
    state: FieldState,
}

impl CaptionField {
    /// Create a field of given role, showing its placeholder text.
    pub fn new(role: Role) -> Self {
        CaptionField{
            role: role,
            text: role.placeholder().into(),
            state: FieldState::Placeholder,
        }
    }
}

impl CaptionField {
    /// Role of this field.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Text currently shown in the field.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editing state of the field.
    #[inline]
    pub fn state(&self) -> FieldState {
        self.state
    }
}

impl CaptionField {
    /// React to the field gaining input focus.
    ///
    /// A field still showing its placeholder verbatim starts empty;
    /// a previously edited field keeps its text across re-focus.
    pub fn begin_editing(&mut self) {
        if self.text == self.role.placeholder() {
            trace!("Clearing placeholder of the {:?} caption", self.role);
            self.text.clear();
            self.state = FieldState::Editing;
        }
    }

    /// Decide on a proposed text change, `current` being the text the
    /// host field holds and `inserted` the fragment about to be added.
    ///
    /// Within the limit, the change is accepted (returns true) and the
    /// field holds the whole candidate text. Over the limit, the change
    /// is rejected (returns false) *and* the field text is forcibly
    /// replaced with the candidate cut to `limit` characters plus an
    /// ellipsis marker.
    pub fn propose_change(&mut self, current: &str, inserted: &str, limit: usize) -> bool {
        let candidate = format!("{}{}", current, inserted);
        if candidate.chars().count() <= limit {
            self.text = candidate;
            self.state = FieldState::Editing;
            return true;
        }

        debug!("Caption {:?} over the {}-character limit, truncating", self.role, limit);
        let mut truncated: String = candidate.chars().take(limit).collect();
        truncated.push_str(ELLIPSIS);
        self.text = truncated;
        self.state = FieldState::Truncated;
        false
    }

    /// Put the field back into its initial placeholder state.
    pub fn reset(&mut self) {
        self.text = self.role.placeholder().into();
        self.state = FieldState::Placeholder;
    }
}


#[cfg(test)]
mod tests {
    use model::Role;
    use model::constants::ELLIPSIS;
    use spectral::prelude::*;
    use super::{CaptionField, FieldState};

    #[test]
    fn fresh_field_shows_placeholder() {
        for role in Role::iter_variants() {
            let field = CaptionField::new(role);
            assert_that!(field.text()).is_equal_to(role.placeholder());
            assert_eq!(FieldState::Placeholder, field.state());
        }
    }

    #[test]
    fn focus_clears_placeholder() {
        for role in Role::iter_variants() {
            let mut field = CaptionField::new(role);
            field.begin_editing();
            assert_that!(field.text()).is_equal_to("");
            assert_eq!(FieldState::Editing, field.state());
        }
    }

    #[test]
    fn focus_preserves_user_text() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        assert!(field.propose_change("", "HELLO", 12));
        field.begin_editing();
        assert_that!(field.text()).is_equal_to("HELLO");
    }

    #[test]
    fn change_within_limit_is_accepted() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        assert!(field.propose_change("HELLO", " WORLD", 12));
        assert_that!(field.text()).is_equal_to("HELLO WORLD");
        assert_eq!(FieldState::Editing, field.state());
    }

    #[test]
    fn change_over_limit_is_rejected_but_truncates() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        assert!(!field.propose_change("HELLO WORLD!", "!", 12));
        let expected = format!("HELLO WORLD!{}", ELLIPSIS);
        assert_that!(field.text()).is_equal_to(expected.as_str());
        assert_eq!(FieldState::Truncated, field.state());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        // Five 2-byte characters; well within a limit of 12.
        assert!(field.propose_change("", "ĄĆĘŁŃ", 12));
        assert_that!(field.text()).is_equal_to("ĄĆĘŁŃ");
    }

    #[test]
    fn truncation_cuts_at_character_boundary() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        assert!(!field.propose_change("ĄĆĘ", "Ł", 3));
        let expected = format!("ĄĆĘ{}", ELLIPSIS);
        assert_that!(field.text()).is_equal_to(expected.as_str());
    }

    #[test]
    fn truncated_field_behaves_as_editing() {
        let mut field = CaptionField::new(Role::Top);
        field.begin_editing();
        assert!(!field.propose_change("HELLO WORLD!", "!", 12));
        // A subsequent in-limit edit is ordinary editing again.
        assert!(field.propose_change("HELLO", "!", 12));
        assert_eq!(FieldState::Editing, field.state());
    }

    #[test]
    fn reset_restores_placeholder() {
        let mut field = CaptionField::new(Role::Bottom);
        field.begin_editing();
        field.propose_change("", "WAT", 12);
        field.reset();
        assert_that!(field.text()).is_equal_to(Role::Bottom.placeholder());
        assert_eq!(FieldState::Placeholder, field.state());
    }
}
