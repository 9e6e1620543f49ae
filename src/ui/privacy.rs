//! Privacy notice view

use crate::ui::BRAND;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Back link
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Min(6), // Notice
        ])
        .margin(2)
        .split(area);

    let back = Paragraph::new(Span::styled(
        "← Volver (Esc)",
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(back, chunks[0]);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Políticas de ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Privacidad",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, chunks[2]);

    let notice = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "Privacidad exclusiva para ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "FIVA",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Sus datos corporativos y de contacto se usarán únicamente para análisis de \
             público y comunicaciones oficiales de FIVA. No los compartimos con terceros.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(notice, chunks[4]);
}
