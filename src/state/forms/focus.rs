//! Focus tracking for the account form

use super::field::TextField;

/// Which part of the form receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    FirstName,
    LastName,
    Username,
    Password,
    Gender,
    Terms,
    /// The Clear/Submit button panel
    Actions,
}

impl FormFocus {
    /// Focus stops in tab order
    pub const ORDER: [FormFocus; 7] = [
        FormFocus::FirstName,
        FormFocus::LastName,
        FormFocus::Username,
        FormFocus::Password,
        FormFocus::Gender,
        FormFocus::Terms,
        FormFocus::Actions,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.index() + count - 1) % count]
    }

    /// The text field under focus, if any
    pub fn text_field(&self) -> Option<TextField> {
        match self {
            Self::FirstName => Some(TextField::FirstName),
            Self::LastName => Some(TextField::LastName),
            Self::Username => Some(TextField::Username),
            Self::Password => Some(TextField::Password),
            Self::Gender | Self::Terms | Self::Actions => None,
        }
    }

    pub fn is_on(&self, field: TextField) -> bool {
        self.text_field() == Some(field)
    }
}

/// Buttons in the action panel, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionButton {
    Clear,
    #[default]
    Submit,
}

impl ActionButton {
    pub const ALL: [ActionButton; 2] = [ActionButton::Clear, ActionButton::Submit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Submit => "Submit",
        }
    }

    /// Move to the other button (wraps around)
    pub fn toggle(&self) -> Self {
        match self {
            Self::Clear => Self::Submit,
            Self::Submit => Self::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_focus_is_first_name() {
        assert_eq!(FormFocus::default(), FormFocus::FirstName);
    }

    #[test]
    fn test_next_cycles_through_all_stops() {
        let mut focus = FormFocus::default();
        for _ in 0..FormFocus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::FirstName);
    }

    #[test]
    fn test_prev_wraps_to_actions() {
        assert_eq!(FormFocus::FirstName.prev(), FormFocus::Actions);
        assert_eq!(FormFocus::Actions.prev(), FormFocus::Terms);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for focus in FormFocus::ORDER {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_text_field_mapping() {
        assert_eq!(FormFocus::Password.text_field(), Some(TextField::Password));
        assert_eq!(FormFocus::Gender.text_field(), None);
        assert!(FormFocus::Username.is_on(TextField::Username));
        assert!(!FormFocus::Username.is_on(TextField::FirstName));
    }

    #[test]
    fn test_default_button_is_submit() {
        assert_eq!(ActionButton::default(), ActionButton::Submit);
        assert_eq!(ActionButton::Submit.toggle(), ActionButton::Clear);
        assert_eq!(ActionButton::Clear.toggle(), ActionButton::Submit);
    }
}
