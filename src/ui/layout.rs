//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // Focus-specific hints
    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    // Copy message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused part of the form
fn get_focus_hints(focus: FormFocus) -> String {
    let common = format!("{SUBMIT_SHORTCUT}:submit  {CLEAR_SHORTCUT}:clear  {COPY_SHORTCUT}:copy");
    match focus {
        FormFocus::FirstName | FormFocus::LastName | FormFocus::Username | FormFocus::Password => {
            format!("Tab:next  {common}")
        }
        FormFocus::Gender => format!("←/→:choose  m/f:select  Tab:next  {common}"),
        FormFocus::Terms => format!("Space:toggle  Tab:next  {common}"),
        FormFocus::Actions => format!("←/→:select  Enter:press  Tab:next  {common}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_row() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_hints_always_list_shortcuts() {
        for focus in FormFocus::ORDER {
            let hints = get_focus_hints(focus);
            assert!(hints.contains(SUBMIT_SHORTCUT));
            assert!(hints.contains(CLEAR_SHORTCUT));
        }
    }

    #[test]
    fn test_gender_hints_mention_selection_keys() {
        assert!(get_focus_hints(FormFocus::Gender).contains("m/f"));
    }
}
