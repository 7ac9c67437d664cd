//! UI module for quizgen-tui
//!
//! Layout: the form panel on the left (upload field, study text, count and
//! mode, status lines, stat cards), the quiz panel on the right and a single
//! line of key hints at the bottom.

mod form;
mod helpers;
mod quiz;
mod stats;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::cli::VERSION;
use crate::models::Focus;
use crate::theme::{BG_PRIMARY, CYAN_PRIMARY, GREEN_SUCCESS, TEXT_MUTED};

use form::{render_field, render_mode_selector, render_status};
use quiz::render_quiz;
use stats::render_stat_cards;

const KEY_HINTS: &str =
    " ^G Generate | ^U Upload | ^R Reveal | ^A AI | ^L Clear | Tab Focus | ^Q Quit ";

/// Draw the whole application
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[0]);

    draw_form(frame, app, panels[0]);
    render_quiz(
        panels[1],
        app.quiz.view(),
        app.quiz_cursor,
        app.focus == Focus::Quiz,
        frame,
    );
    draw_bottom_bar(frame, app, main_layout[1]);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // File
            Constraint::Length(1), // Upload status
            Constraint::Min(5),    // Study text
            Constraint::Length(3), // Questions + mode
            Constraint::Length(1), // AI toggle
            Constraint::Length(2), // Generation status
            Constraint::Length(4), // Stat cards
        ])
        .split(area);

    render_field(
        rows[0],
        "File",
        &app.file_field,
        "path to a .pdf, .docx or .txt file",
        app.focus == Focus::File,
        frame,
    );
    render_status(
        rows[1],
        app.upload.status(),
        app.upload.is_busy(),
        app.animation_tick,
        frame,
    );
    render_field(
        rows[2],
        "Study Text",
        &app.text_field,
        "Paste study text here or upload a file",
        app.focus == Focus::Text,
        frame,
    );

    let settings = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(10)])
        .split(rows[3]);
    render_field(
        settings[0],
        "Questions",
        &app.count_field,
        "5",
        app.focus == Focus::Count,
        frame,
    );
    render_mode_selector(settings[1], app.mode, app.focus == Focus::Mode, frame);

    let (ai_text, ai_color) = if app.use_ai {
        ("on", GREEN_SUCCESS)
    } else {
        ("off", TEXT_MUTED)
    };
    let ai_line = Line::from(vec![
        Span::styled(" AI generator: ", Style::default().fg(TEXT_MUTED)),
        Span::styled(ai_text, Style::default().fg(ai_color)),
    ]);
    frame.render_widget(Paragraph::new(ai_line), rows[4]);

    render_status(
        rows[5],
        app.quiz.status(),
        app.quiz.is_busy(),
        app.animation_tick,
        frame,
    );

    let view = app.quiz.view();
    render_stat_cards(
        rows[6],
        view.len(),
        view.answered_count(),
        app.quiz.state(),
        app.animation_tick,
        frame,
    );
}

fn draw_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!("{}| quizgen-tui v{} | {} ", KEY_HINTS, VERSION, app.server_url);
    let bar = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(bar, area);
}
