//! Toast overlay in the top-right corner

use crate::state::{NotificationKind, Toast, ToastQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Outer width of a toast, borders included
const TOAST_WIDTH: u16 = 40;

/// Color used for a notification kind
fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Error => Color::Red,
        NotificationKind::Success => Color::Green,
        NotificationKind::Info => Color::Blue,
    }
}

/// Render all live toasts, newest on top, stacked downward from the top-right
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue, now: Instant) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    if width < 6 {
        return;
    }
    let inner_width = (width - 4) as usize; // borders + 1 char padding each side

    let mut y = area.y + 1;
    for toast in toasts.iter() {
        let lines = wrap_text(&toast.message, inner_width);
        // message lines + progress line + borders
        let height = lines.len() as u16 + 3;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        render_toast(frame, toast_area, toast, lines, now);
        y += height;
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, lines: Vec<String>, now: Instant) {
    let color = kind_color(toast.kind);

    frame.render_widget(Clear, area);

    let mut content: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(format!(" {l}")))
        .collect();

    let bar_width = area.width.saturating_sub(2) as usize;
    let filled = (bar_width as f64 * toast.remaining_ratio(now)).round() as usize;
    content.push(Line::from(Span::styled(
        "▔".repeat(filled),
        Style::default().fg(color),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", toast.kind.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(Color::Black).fg(Color::White)),
        area,
    );
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.chars().count() + word.chars().count() + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_wrap_text_splits_on_words() {
        let lines = wrap_text("Please correct the errors in the form", 16);
        assert_eq!(lines, vec!["Please correct", "the errors in", "the form"]);
    }

    #[test]
    fn test_wrap_text_keeps_empty_message() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_render_toasts_newest_on_top() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        queue.push_at(NotificationKind::Success, "older", now);
        queue.push_at(NotificationKind::Error, "newer", now);

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, &queue, now))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..20u16)
            .map(|y| {
                (0..60u16)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect();
        let newer_row = rows.iter().position(|r| r.contains("newer")).unwrap();
        let older_row = rows.iter().position(|r| r.contains("older")).unwrap();
        assert!(newer_row < older_row);
        // Toasts sit against the right edge
        assert!(rows[newer_row].find("newer").unwrap() > 20);
    }
}
