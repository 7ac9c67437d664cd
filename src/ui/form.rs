//! Form panel widgets: text fields, the mode selector and status lines

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::wrap_text;
use crate::input::TextField;
use crate::models::GenerationMode;
use crate::theme::{
    get_pulse_color, spinner_frame, AMBER_WARNING, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY,
    GREEN_SUCCESS, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

const CURSOR: &str = "▏";

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let (border, title_color) = if focused {
        (CYAN_PRIMARY, CYAN_PRIMARY)
    } else {
        (BORDER_SUBTLE, TEXT_SECONDARY)
    };
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(title_color)))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border))
}

/// Visible lines of a field for an inner area of `width` x `height`.
///
/// Multi-line fields wrap and keep the last `height` lines in view; single
/// line fields keep the tail that fits.
pub fn field_lines(field: &TextField, width: usize, height: usize) -> Vec<String> {
    let width = width.max(1);
    if field.is_multiline() {
        let mut lines: Vec<String> = field
            .value()
            .split('\n')
            .flat_map(|line| wrap_text(line, width))
            .collect();
        let skip = lines.len().saturating_sub(height.max(1));
        lines.drain(..skip);
        lines
    } else {
        let chars: Vec<char> = field.value().chars().collect();
        // Leave a column for the cursor
        let keep = width.saturating_sub(1).max(1);
        let start = chars.len().saturating_sub(keep);
        vec![chars[start..].iter().collect()]
    }
}

/// Render a text field with its title and an optional placeholder
pub fn render_field(
    area: Rect,
    title: &str,
    field: &TextField,
    placeholder: &str,
    focused: bool,
    frame: &mut Frame,
) {
    let block = field_block(title, focused);
    let inner = block.inner(area);

    let lines: Vec<Line> = if field.value().is_empty() && !focused {
        vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(TEXT_MUTED),
        ))]
    } else {
        let visible = field_lines(field, inner.width as usize, inner.height as usize);
        let last = visible.len().saturating_sub(1);
        visible
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut spans = vec![Span::styled(text, Style::default().fg(TEXT_PRIMARY))];
                if focused && i == last {
                    spans.push(Span::styled(CURSOR, Style::default().fg(CYAN_PRIMARY)));
                }
                Line::from(spans)
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the generation mode selector
pub fn render_mode_selector(area: Rect, mode: GenerationMode, focused: bool, frame: &mut Frame) {
    let arrow_color = if focused { CYAN_PRIMARY } else { TEXT_MUTED };
    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(arrow_color)),
        Span::styled(
            mode.label(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(arrow_color)),
    ]);
    let paragraph = Paragraph::new(line)
        .block(field_block("Mode", focused))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Color for a status message
pub fn status_color(status: &str, busy: bool) -> Color {
    if busy {
        AMBER_WARNING
    } else if status.starts_with("Error:") {
        RED_ERROR
    } else if status.starts_with("Please ") {
        AMBER_WARNING
    } else {
        GREEN_SUCCESS
    }
}

/// Render a status line, with a spinner while its request is in flight
pub fn render_status(area: Rect, status: &str, busy: bool, tick: u64, frame: &mut Frame) {
    if status.is_empty() {
        return;
    }
    let mut spans = Vec::with_capacity(2);
    if busy {
        spans.push(Span::styled(
            format!("{} ", spinner_frame(tick)),
            Style::default().fg(get_pulse_color(tick, CYAN_PRIMARY, CYAN_DIM)),
        ));
    }
    spans.push(Span::styled(
        status.to_string(),
        Style::default().fg(status_color(status, busy)),
    ));
    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
