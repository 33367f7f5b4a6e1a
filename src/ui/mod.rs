//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod table;
mod widgets;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let (form_area, table_area, status_area) = layout::create_layout(frame.area());

    forms::draw_form(frame, form_area, app, now);
    table::draw_submissions(frame, table_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Toasts overlay everything else
    components::render_toasts(frame, app.session.notifier(), now);
}
