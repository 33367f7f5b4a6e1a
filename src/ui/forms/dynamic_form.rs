//! Schema-driven form: type selector, progress bar, fields and submit button

use super::field_renderer::{draw_control, render, CONTROL_HEIGHT};
use crate::app::App;
use crate::state::Focus;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

const TYPE_PLACEHOLDER: &str = "Select a form type";

/// Draw the form pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let engine = app.session.engine();
    let focus = app.state.focus;

    let block = Block::default()
        .title(" Dynamic Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focus == Focus::Table {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(form) = engine.selected_form() else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .margin(1)
            .split(inner);
        draw_type_selector(frame, chunks[0], app);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(" choose a form type to start"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[1]);
        return;
    };

    let mut constraints = vec![
        Constraint::Length(3), // Type selector
        Constraint::Length(1), // Progress bar
        Constraint::Length(1), // Spacing
    ];
    constraints.extend(form.fields.iter().map(|_| Constraint::Length(CONTROL_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    draw_type_selector(frame, chunks[0], app);
    draw_progress(frame, chunks[1], app.progress.value_at(now));

    for (i, field) in form.fields.iter().enumerate() {
        let control = render(field, engine.value(&field.name), engine.error(&field.name));
        draw_control(frame, chunks[3 + i], &control, focus == Focus::Field(i));
    }

    let submit_area = chunks[3 + form.fields.len()];
    render_action_button(
        frame,
        submit_area,
        "Submit",
        focus == Focus::SubmitButton,
        Some(Color::Blue),
    );
}

fn draw_type_selector(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == Focus::TypeSelector;
    let selected = app
        .session
        .engine()
        .selected_form()
        .map(|f| f.label.as_str());

    let (text, style) = match selected {
        Some(label) => (
            label,
            if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ),
        None => (TYPE_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![Span::styled(text, style)];
    if is_active {
        spans.push(Span::styled("  ◂ ▸", Style::default().fg(Color::DarkGray)));
    }

    let block = Block::default()
        .title(" Select Form Type ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_progress(frame: &mut Frame, area: Rect, percent: f64) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, area);
}
