//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_account_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Toast overlays everything but the status bar
    if let Some(toast) = app.toast() {
        components::render_toast(frame, main_area, &toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FormFocus, TERMS_REQUIRED_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_form_labels() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app, 100, 30);
        for label in [
            "Create Account",
            "First Name",
            "Last Name",
            "Username",
            "Password",
            "Gender",
            "Terms and Conditions",
            "Actions",
            "Clear",
            "Submit",
        ] {
            assert!(screen.contains(label), "missing {label:?}");
        }
    }

    #[test]
    fn test_draw_masks_password() {
        let config = TuiConfig {
            mask_char: Some('*'),
            ..Default::default()
        };
        let mut app = App::new(&config);
        app.state.form.set_password("hunter2");
        let screen = render(&app, 100, 30);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("*******"));
    }

    #[test]
    fn test_draw_shows_typed_values_and_selection() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.set_username("ada");
        app.state.form.set_agreed(true);
        app.state.focus = FormFocus::Gender;
        let screen = render(&app, 100, 30);
        assert!(screen.contains("ada"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("(•) Male"));
    }

    #[test]
    fn test_draw_shows_toast() {
        let mut app = App::new(&TuiConfig::default());
        app.submit();
        let screen = render(&app, 100, 30);
        assert!(screen.contains(TERMS_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut app = App::new(&TuiConfig::default());
        app.submit();
        render(&app, 10, 3);
        render(&app, 1, 1);
    }
}
