//! Landing view: hero copy, the waitlist form and the illustration

use super::forms::draw_waitlist_form;
use crate::app::App;
use crate::ui::BRAND;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Below this width the illustration is dropped
const ILLUSTRATION_MIN_WIDTH: u16 = 100;

/// Light bulb drawn beside the hero copy
const BULB: &[&str] = &[
    r"        .-''''-.        ",
    r"      .'        '.      ",
    r"     /   .-''-.   \     ",
    r"    |   /  ..  \   |    ",
    r"    |   \  \/  /   |    ",
    r"     \   '-||-'   /     ",
    r"      '.   ||   .'      ",
    r"        '-.||.-'        ",
    r"         [____]         ",
    r"         [____]         ",
    r"          \__/          ",
];

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if area.width >= ILLUSTRATION_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        draw_hero(frame, chunks[0], app);
        draw_illustration(frame, chunks[1]);
    } else {
        draw_hero(frame, area, app);
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Launch badge
            Constraint::Length(1),
            Constraint::Length(2), // Headline
            Constraint::Length(1),
            Constraint::Length(3), // Pitch
            Constraint::Length(1),
            Constraint::Length(2), // Waitlist prompt
            Constraint::Min(3),    // Form
            Constraint::Length(1), // Social links
        ])
        .horizontal_margin(2)
        .split(area);

    let badge = Paragraph::new(Span::styled(
        " CO · AGOSTO 2026 ",
        Style::default()
            .fg(BRAND)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    ));
    frame.render_widget(badge, chunks[0]);

    frame.render_widget(Paragraph::new(headline()), chunks[2]);

    let bold = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    let plain = Style::default().fg(Color::Gray);
    let pitch = Paragraph::new(Line::from(vec![
        Span::styled("No es magia,", bold),
        Span::styled(" trabajamos con ", plain),
        Span::styled("data real del mercado colombiano", bold),
        Span::styled(
            ": la recolectamos, limpiamos y visualizamos para lograr una toma de ",
            plain,
        ),
        Span::styled("decisiones", bold),
        Span::styled(" estratégica.", plain),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(pitch, chunks[4]);

    let prompt = Paragraph::new(vec![
        Line::from("Pronto lanzaremos, mientras tanto únete a"),
        Line::from("nuestra lista de espera"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(prompt, chunks[6]);

    draw_waitlist_form(frame, chunks[7], &app.state.form);

    frame.render_widget(Paragraph::new(social_links()), chunks[8]);
}

fn headline() -> Vec<Line<'static>> {
    let strong = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let pill = Style::default()
        .fg(Color::White)
        .bg(BRAND)
        .add_modifier(Modifier::BOLD);

    vec![
        Line::from(vec![
            Span::styled("Convertimos ", strong),
            Span::styled(" data ", pill),
        ]),
        Line::from(vec![
            Span::styled(" criolla ", pill),
            Span::styled(" en decisiones con ", strong),
            Span::styled(">98% precisión", strong.fg(BRAND)),
        ]),
    ]
}

fn social_links() -> Line<'static> {
    let label = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let link = Style::default().fg(BRAND);
    let sep = Span::styled(" · ", Style::default().fg(Color::DarkGray));

    Line::from(vec![
        Span::styled("SÍGUENOS EN  ", label),
        Span::styled("linkedin.com/company/fiva-co", link),
        sep.clone(),
        Span::styled("wa.me/573000000000", link),
        sep,
        Span::styled("instagram.com/fiva.co", link),
    ])
}

fn draw_illustration(frame: &mut Frame, area: Rect) {
    let height = BULB.len() as u16;
    let top = area.y + area.height.saturating_sub(height);

    let lines: Vec<Line> = BULB
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(BRAND))))
        .collect();

    let bulb_area = Rect {
        y: top,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        bulb_area,
    );
}
