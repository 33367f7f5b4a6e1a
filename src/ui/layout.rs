//! Layout components (panes and status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form pane, submissions pane and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Form
            Constraint::Percentage(55), // Submissions
        ])
        .split(rows[0]);

    (panes[0], panes[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(form) = app.session.engine().selected_form() {
        spans.push(Span::styled(
            form.label.as_str(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(
            " {:.0}% | ",
            app.progress.target()
        )));
    }

    let hints = get_focus_hints(app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focus: Focus) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match focus {
        Focus::TypeSelector => "←/→:form type  Tab:next  Esc:dismiss".to_string(),
        Focus::Field(_) => format!("Tab:next  Enter/{submit}:submit  Esc:dismiss"),
        Focus::SubmitButton => format!("Enter/{submit}:submit  Tab:next"),
        Focus::Table => "j/k:row  e:edit  d:delete  Tab:next".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (form, table, status) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 29);
        assert_eq!(form.height, 29);
        assert_eq!(form.width + table.width, 100);
    }

    #[test]
    fn test_hints_mention_table_actions() {
        let hints = get_focus_hints(Focus::Table);
        assert!(hints.contains("e:edit"));
        assert!(hints.contains("d:delete"));
    }

    #[test]
    fn test_field_hints_mention_submit_shortcut() {
        let hints = get_focus_hints(Focus::Field(0));
        assert!(hints.contains(crate::platform::SUBMIT_SHORTCUT));
    }
}
