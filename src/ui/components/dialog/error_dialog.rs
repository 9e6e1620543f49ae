//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a submission error centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let hint = Line::from(vec![
        Span::raw("Presiona "),
        Span::styled("Enter", key_style),
        Span::raw(" o "),
        Span::styled("Esc", key_style),
        Span::raw(" para continuar"),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "No pudimos registrarte",
            accent: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
