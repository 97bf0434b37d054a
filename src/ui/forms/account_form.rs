//! Account creation form rendering

use super::field_renderer::draw_text_field;
use crate::app::App;
use crate::state::{ActionButton, FormFocus, Gender, TextField};
use crate::ui::components::{
    render_action_button, render_checkbox, render_radio_group, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const TERMS_CAPTION: &str = "I agree to the Terms and Conditions";

/// Draw the account form with its action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First & last name
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Terms
            Constraint::Min(0),    // Remaining space
        ])
        .margin(1)
        .split(area);

    let focus = app.state.focus;
    let form = app.state.form.state();

    let border_color = if focus == FormFocus::Actions {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let name_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let text_areas = [name_chunks[0], name_chunks[1], chunks[1], chunks[2]];
    for (field, field_area) in TextField::ALL.into_iter().zip(text_areas) {
        draw_text_field(
            frame,
            field_area,
            field,
            form,
            focus.is_on(field),
            app.mask_char,
        );
    }

    let options: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let selected = Gender::ALL
        .iter()
        .position(|g| *g == form.gender())
        .unwrap_or(0);
    render_radio_group(
        frame,
        chunks[3],
        "Gender",
        &options,
        selected,
        focus == FormFocus::Gender,
    );

    render_checkbox(
        frame,
        chunks[4],
        TERMS_CAPTION,
        form.agreed_to_terms(),
        focus == FormFocus::Terms,
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_focused();
    let selected_button = app.state.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Layout for buttons vertically
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (button, button_area) in ActionButton::ALL.into_iter().zip(button_chunks.iter()) {
        let accent = match button {
            ActionButton::Clear => Color::Gray,
            ActionButton::Submit => Color::Green,
        };
        render_action_button(
            frame,
            *button_area,
            button.label(),
            is_focused && selected_button == button,
            Some(accent),
        );
    }
}
