//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::QuizState;
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS,
    RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED,
};

fn stat_card(value: String, label: &'static str, color: Color) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(TEXT_MUTED))),
    ];

    Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
}

fn state_color(state: QuizState, tick: u64) -> Color {
    match state {
        QuizState::Idle => TEXT_MUTED,
        QuizState::Submitting => get_pulse_color(tick, AMBER_WARNING, TEXT_MUTED),
        QuizState::Rendered | QuizState::Revealing => GREEN_SUCCESS,
        QuizState::Failed => RED_ERROR,
    }
}

/// Render question, answered and state cards in a given area
pub fn render_stat_cards(
    area: Rect,
    total: usize,
    answered: usize,
    state: QuizState,
    tick: u64,
    frame: &mut Frame,
) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let answered_color = if total > 0 && answered == total {
        GREEN_SUCCESS
    } else {
        CYAN_PRIMARY
    };

    frame.render_widget(
        stat_card(total.to_string(), "QUESTIONS", CYAN_PRIMARY),
        card_layout[0],
    );
    frame.render_widget(
        stat_card(format!("{}/{}", answered, total), "ANSWERED", answered_color),
        card_layout[1],
    );
    frame.render_widget(
        stat_card(state.label().to_string(), "STATE", state_color(state, tick)),
        card_layout[2],
    );
}
