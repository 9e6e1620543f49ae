//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use crate::ui::BRAND;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Rows needed to draw a field
pub fn field_height(field: &FormField) -> u16 {
    match &field.value {
        FieldValue::Text(_) => 3,
        // placeholder row + options + borders
        FieldValue::Choice { options, .. } => options.len() as u16 + 3,
    }
}

fn border_style(field: &FormField, is_active: bool) -> Style {
    if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(BRAND)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a field as a text input or an option list depending on its kind
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    match &field.value {
        FieldValue::Text(_) => draw_text_field(frame, area, field, is_active),
        FieldValue::Choice { options, selected } => {
            draw_select_field(frame, area, field, options, *selected, is_active)
        }
    }
}

fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let cursor = if is_active { "▌" } else { "" };

    let value = if field.as_text().is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(field.as_text(), Style::default().fg(Color::White))
    };

    let line = if field.as_text().is_empty() {
        // Cursor sits before the placeholder
        Line::from(vec![Span::styled(cursor, Style::default().fg(BRAND)), value])
    } else {
        Line::from(vec![value, Span::styled(cursor, Style::default().fg(BRAND))])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(field, is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    options: &[&str],
    selected: Option<usize>,
    is_active: bool,
) {
    let mut items = vec![ListItem::new(Span::styled(
        field.placeholder(),
        Style::default().fg(Color::DarkGray),
    ))];
    items.extend(options.iter().map(|o| ListItem::new(*o)));

    let block = Block::default()
        .title(" ↑↓ ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(field, is_active));

    let list = List::new(items)
        .block(block)
        .highlight_symbol("› ")
        .highlight_style(Style::default().fg(BRAND).add_modifier(Modifier::BOLD));

    // Row 0 is the placeholder
    let row = selected.map_or(0, |i| i + 1);
    let mut list_state = ListState::default().with_selected(Some(row));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepId;

    #[test]
    fn test_text_field_height() {
        assert_eq!(field_height(&FormField::for_step(StepId::Email)), 3);
    }

    #[test]
    fn test_select_field_height_fits_all_options() {
        // 8 sectors + placeholder + borders
        assert_eq!(field_height(&FormField::for_step(StepId::Sector)), 11);
    }
}
