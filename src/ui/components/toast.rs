//! Toast notification overlay

use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of the toast, borders included
const MAX_WIDTH: u16 = 50;
/// Horizontal padding inside the border (1 char on each side)
const PADDING: u16 = 2;

/// Render `toast` centered above the bottom edge of `area`.
///
/// The slide offset pushes the box down past the edge as it expires; rows
/// that fall outside `area` are clipped.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let max_line_width = (MAX_WIDTH - PADDING - 2) as usize;
    let lines = wrap_text(&toast.message, max_line_width);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + PADDING + 2).min(MAX_WIDTH).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);

    let rest_y = area.y + area.height.saturating_sub(height + 1);
    let shift = (toast.slide_offset * f32::from(height + 1)).round() as u16;
    let y = rest_y + shift;
    let bottom = area.y + area.height;
    if y >= bottom {
        return;
    }

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y,
        width,
        height: height.min(bottom - y),
    };

    // Clear the area behind the toast
    frame.render_widget(Clear, toast_area);

    let content: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(paragraph, toast_area);
}

/// Wrap text to fit within a maximum width.
///
/// Breaks at the last space that fits and drops only that space; words wider
/// than `max_width` are split mid-word. All other whitespace is kept as is.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut rest: Vec<char> = paragraph.chars().collect();
        while rest.len() > max_width {
            match rest[..=max_width].iter().rposition(|c| *c == ' ') {
                Some(space) if space > 0 => {
                    lines.push(rest[..space].iter().collect());
                    rest.drain(..=space);
                }
                _ => {
                    lines.push(rest[..max_width].iter().collect());
                    rest.drain(..max_width);
                }
            }
        }
        lines.push(rest.into_iter().collect());
    }

    lines
}
