//! Application state definitions

use super::forms::{ActionButton, FormController, FormFocus, TextField};

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The account form and its values
    pub form: FormController,
    /// Which part of the form receives key input
    pub focus: FormFocus,
    /// Which button is selected when the action panel has focus
    pub selected_button: ActionButton,
}

impl AppState {
    pub fn next_form_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_form_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Returns true if the action panel is currently active
    pub fn is_action_panel_focused(&self) -> bool {
        self.focus == FormFocus::Actions
    }

    /// Text field under focus, if any
    pub fn active_text_field(&self) -> Option<TextField> {
        self.focus.text_field()
    }

    /// Reset the form and return focus to its first field
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.focus = FormFocus::default();
        self.selected_button = ActionButton::default();
    }
}
