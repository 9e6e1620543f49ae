//! Waitlist form rendering
//!
//! Three faces: a collapsed email prompt, the step-by-step form, and the
//! thank-you card once the sign-up went through.

use super::field_renderer::{draw_field, field_height};
use crate::state::{StepId, WaitlistForm};
use crate::ui::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use crate::ui::BRAND;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw whichever face of the form matches its state
pub fn draw(frame: &mut Frame, area: Rect, form: &WaitlistForm) {
    if form.is_complete {
        draw_complete(frame, area);
    } else if form.is_open {
        draw_open(frame, area, form);
    } else {
        draw_collapsed(frame, area, form);
    }
}

/// Email prompt with the join button beside it
fn draw_collapsed(frame: &mut Frame, area: Rect, form: &WaitlistForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Email prompt
            Constraint::Length(12), // Join button
        ])
        .split(Rect {
            height: area.height.min(BUTTON_HEIGHT),
            ..area
        });

    if let Some(email) = form.field(StepId::Email) {
        draw_field(frame, chunks[0], email, false);
    }
    render_button(frame, chunks[1], "UNIRME", ButtonKind::Primary, true);
}

fn draw_open(frame: &mut Frame, area: Rect, form: &WaitlistForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = form.active_field();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Progress bar
            Constraint::Length(1),                  // Spacer
            Constraint::Length(1),                  // Question
            Constraint::Length(field_height(field)), // Input
            Constraint::Length(1),                  // Error message
            Constraint::Min(0),                     // Remaining space
            Constraint::Length(BUTTON_HEIGHT),      // Navigation
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_progress(frame, chunks[0], form);

    let question = Paragraph::new(Line::from(Span::styled(
        field.label(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(question, chunks[2]);

    draw_field(frame, chunks[3], field, !form.is_submitting);

    if let Some(error) = form.error(field.step) {
        let message = Paragraph::new(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(message, chunks[4]);
    }

    draw_navigation(frame, chunks[6], form);
}

/// One segment per step, filled up to the current one
fn draw_progress(frame: &mut Frame, area: Rect, form: &WaitlistForm) {
    let steps = form.step_count().max(1) as u16;
    let gaps = steps - 1;
    let segment = (area.width.saturating_sub(gaps) / steps).max(1) as usize;

    let mut spans = Vec::with_capacity(form.step_count() * 2);
    for index in 0..form.step_count() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if index <= form.current_step() {
            BRAND
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled("━".repeat(segment), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_navigation(frame: &mut Frame, area: Rect, form: &WaitlistForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Back / cancel
            Constraint::Min(0),
            Constraint::Length(16), // Next / submit
        ])
        .split(area);

    let back = if form.current_step() == 0 {
        "‹ Cancelar"
    } else {
        "‹ Atrás"
    };
    render_button(
        frame,
        chunks[0],
        back,
        ButtonKind::Secondary,
        !form.is_submitting,
    );

    let next = if form.is_submitting {
        "Enviando..."
    } else if form.is_last_step() {
        "UNIRME"
    } else {
        "Siguiente ›"
    };
    // Dimmed until the active field has something worth validating
    let kind = if form.can_proceed() {
        ButtonKind::Primary
    } else {
        ButtonKind::Secondary
    };
    render_button(frame, chunks[2], next, kind, !form.is_submitting);
}

fn draw_complete(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw("  "),
            Span::styled(
                "¡Gracias por unirte!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "      Te contactaremos pronto con novedades.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));

    let height = area.height.min(4);
    frame.render_widget(Paragraph::new(content).block(block), Rect { height, ..area });
}
