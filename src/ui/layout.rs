//! Layout components (header, footer)

use crate::app::App;
use crate::state::View;
use crate::ui::BRAND;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and footer rows
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Logo
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the logo header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let logo = Paragraph::new(Line::from(Span::styled(
        "F I V A",
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(logo, area);
}

/// Draw the footer: key hints on the left, copyright and privacy link on the right
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(33)])
        .split(area);

    let hints = Paragraph::new(Span::styled(
        format!(" {}", key_hints(app)),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hints, chunks[0]);

    let privacy_style = if app.state.current_view == View::Privacy {
        Style::default().fg(BRAND)
    } else {
        Style::default().fg(Color::Gray)
    };
    let legal = Paragraph::new(Line::from(vec![
        Span::styled("© 2026 FIVA.", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("PRIVACIDAD (Ctrl+P)", privacy_style),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(legal, chunks[1]);
}

/// Key hints for the current view and form state
fn key_hints(app: &App) -> &'static str {
    let form = &app.state.form;
    if app.state.current_error().is_some() {
        return "Enter/Esc: cerrar";
    }
    match app.state.current_view {
        View::Privacy => "Esc: volver | q: salir",
        View::Landing if form.is_complete => "q: salir",
        View::Landing if form.is_submitting => "Enviando...",
        View::Landing if form.is_open && form.active_field().is_select() => {
            "↑↓: elegir | Enter: siguiente | Esc: atrás"
        }
        View::Landing if form.is_open => "Enter: siguiente | Esc: atrás | Ctrl+C: salir",
        View::Landing => "Escribe tu correo | Enter: unirme | Esc: salir",
    }
}
