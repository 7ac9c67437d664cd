//! Quiz panel rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::wrap_text;
use crate::quiz::QuizView;
use crate::theme::{
    BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Lines for the rendered quiz and the index of the cursor line.
///
/// `cursor` is `(question, option)` and is only drawn when the panel has
/// focus.
pub fn quiz_lines(
    view: &QuizView,
    cursor: Option<(usize, usize)>,
    width: usize,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;

    for (q_idx, block) in view.blocks.iter().enumerate() {
        if q_idx > 0 {
            lines.push(Line::default());
        }
        for text in wrap_text(&block.heading, width) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )));
        }

        for (o_idx, option) in block.options.iter().enumerate() {
            let is_cursor = cursor == Some((q_idx, o_idx));
            if is_cursor {
                cursor_line = lines.len();
            }

            let marker = if option.selected { "(•)" } else { "( )" };
            let (marker_color, text_color) = if option.correct {
                (GREEN_SUCCESS, GREEN_SUCCESS)
            } else if option.selected {
                (CYAN_PRIMARY, TEXT_PRIMARY)
            } else {
                (TEXT_MUTED, TEXT_SECONDARY)
            };

            let mut spans = vec![
                Span::styled(format!("  {} ", marker), Style::default().fg(marker_color)),
                Span::styled(option.text.clone(), Style::default().fg(text_color)),
            ];
            if option.correct {
                spans.push(Span::styled(
                    " ✓",
                    Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
                ));
            }

            let mut line = Line::from(spans);
            if is_cursor {
                line = line.style(Style::default().bg(BG_TERTIARY));
            }
            lines.push(line);
        }
    }

    (lines, cursor_line)
}

/// Scroll offset that keeps `cursor_line` inside a viewport of `height`
pub fn scroll_offset(cursor_line: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor_line + 1).saturating_sub(height)
}

/// Render the quiz panel
pub fn render_quiz(
    area: Rect,
    view: &QuizView,
    cursor: (usize, usize),
    focused: bool,
    frame: &mut Frame,
) {
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let title = if view.is_empty() {
        " Quiz ".to_string()
    } else {
        format!(" Quiz ({} questions) ", view.len())
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(CYAN_PRIMARY)))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    if view.is_empty() {
        let hint = vec![
            Line::from(Span::styled("No quiz yet.", Style::default().fg(TEXT_SECONDARY))),
            Line::from(Span::styled(
                "Paste or extract study text, then press Ctrl+G.",
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    let (lines, cursor_line) = quiz_lines(
        view,
        focused.then_some(cursor),
        inner.width as usize,
    );
    let offset = if focused {
        scroll_offset(cursor_line, inner.height as usize)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}
