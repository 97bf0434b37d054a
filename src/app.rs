//! Application state and core logic

use crate::config::TuiConfig;
use crate::notify::{Notifier, ToastNotifier};
use crate::state::{ActionButton, AppState, FormFocus, Gender, Toast};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App<N: Notifier = ToastNotifier> {
    /// Current application state
    pub state: AppState,
    /// Receives submit outcomes for display
    notifier: N,
    /// Whether the app should quit
    quit: bool,
    /// Feedback for clipboard copies
    pub status_message: Option<String>,
    /// Character drawn for each password character
    pub mask_char: char,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_notifier(config, ToastNotifier::new(config.toast_timings()))
    }
}

impl<N: Notifier> App<N> {
    pub fn with_notifier(config: &TuiConfig, notifier: N) -> Self {
        Self {
            state: AppState::default(),
            notifier,
            quit: false,
            status_message: None,
            mask_char: config.mask_char(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Advance notification animation; called once per frame
    pub fn tick(&mut self) {
        self.notifier.tick();
    }

    /// Notification currently on screen
    pub fn toast(&self) -> Option<Toast> {
        self.notifier.current()
    }

    /// Whether the next frame should come quickly for a smooth animation
    pub fn is_animating(&self) -> bool {
        self.toast().is_some_and(|t| t.is_animating())
    }

    /// Route a key press to the focused part of the form
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                return;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_notification();
                return;
            }
            KeyCode::Esc => {
                self.notifier.dismiss();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_form_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_form_field();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            FormFocus::Gender => self.handle_gender_key(key),
            FormFocus::Terms => self.handle_terms_key(key),
            FormFocus::Actions => self.handle_actions_key(key),
            _ => self.handle_text_key(key),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.active_text_field() else {
            return;
        };
        let has_command_modifier = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char(c) if !has_command_modifier => self.state.form.push_char(field, c),
            KeyCode::Backspace => self.state.form.pop_char(field),
            KeyCode::Enter => self.state.next_form_field(),
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        let current = self.state.form.state().gender();
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('h')
            | KeyCode::Char('l') => self.state.form.set_gender(current.toggle()),
            KeyCode::Char('m') | KeyCode::Char('M') => self.state.form.set_gender(Gender::Male),
            KeyCode::Char('f') | KeyCode::Char('F') => self.state.form.set_gender(Gender::Female),
            KeyCode::Enter => self.state.next_form_field(),
            _ => {}
        }
    }

    fn handle_terms_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
            let agreed = self.state.form.state().agreed_to_terms();
            self.state.form.set_agreed(!agreed);
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.state.selected_button = self.state.selected_button.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button {
                ActionButton::Clear => self.clear(),
                ActionButton::Submit => self.submit(),
            },
            _ => {}
        }
    }

    /// Run the submit command and hand its outcome to the notifier
    pub fn submit(&mut self) {
        let outcome = self.state.form.submit();
        self.notifier.notify(&outcome);
    }

    /// Reset the form and return focus to the first field
    pub fn clear(&mut self) {
        self.state.clear_form();
    }

    fn copy_notification(&mut self) {
        let Some(toast) = self.toast() else {
            self.status_message = Some("Nothing to copy".to_string());
            return;
        };
        match copy_to_clipboard(&toast.message) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {} chars", toast.message.len()));
            }
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.status_message = Some("Copy failed".to_string());
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
