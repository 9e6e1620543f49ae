//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;
mod privacy;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{style::Color, Frame};

/// FIVA yellow
pub const BRAND: Color = Color::Rgb(0xF5, 0xC4, 0x23);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, footer_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);

    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app),
        View::Privacy => privacy::draw(frame, main_area),
    }

    layout::draw_footer(frame, footer_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
