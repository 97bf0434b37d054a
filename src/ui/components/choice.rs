//! Radio group and checkbox components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render a horizontal group of mutually exclusive options
pub fn render_radio_group(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    is_active: bool,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let is_selected = idx == selected;
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render a single checkbox with its caption
pub fn render_checkbox(frame: &mut Frame, area: Rect, caption: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let caption_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(caption, caption_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
