//! Button component for TUI

use crate::ui::BRAND;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled brand button ("UNIRME", "Siguiente")
    Primary,
    /// Muted text button ("Atrás", "Cancelar")
    Secondary,
}

/// Render a bordered button; disabled buttons are dimmed
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, kind: ButtonKind, is_enabled: bool) {
    let (text_style, border_style) = match (kind, is_enabled) {
        (_, false) => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        (ButtonKind::Primary, true) => (
            Style::default()
                .fg(Color::Black)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(BRAND),
        ),
        (ButtonKind::Secondary, true) => (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
