//! Field rendering utilities for forms

use crate::state::{FormState, TextField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a text field, masking its value if the field requires it
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: TextField,
    state: &FormState,
    is_active: bool,
    mask: char,
) {
    draw_field_with_value(
        frame,
        area,
        field.label(),
        &field.display_value(state, mask),
        is_active,
    );
}

/// Draw a single-line field with a bordered label
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Inside the border; the focused field keeps one cell for the cursor
    let inner_width = usize::from(area.width.saturating_sub(2));
    let display_value = if is_active {
        visible_tail(value, inner_width.saturating_sub(1))
    } else if value.is_empty() {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// The last `width` characters of `value`, so typing stays in view
fn visible_tail(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }
    value
        .char_indices()
        .nth(len - width)
        .map_or("", |(idx, _)| &value[idx..])
}
