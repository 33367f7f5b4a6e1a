//! Field rendering for schema-driven forms
//!
//! `render` maps a field descriptor, its current value and its error to a
//! `VisualControl`; `draw_control` paints that control with ratatui. Neither
//! keeps state or validates anything.

use crate::schema::{FieldDescriptor, FieldKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one control: bordered input plus the inline error line
pub const CONTROL_HEIGHT: u16 = 4;

const MASK_CHAR: char = '•';

/// The widget a field is shown as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Selector with a placeholder entry followed by the options
    Select {
        placeholder: String,
        options: Vec<String>,
        /// Index into `options`; `None` means the placeholder is shown
        selected: Option<usize>,
    },
    /// Masked single-line input
    Masked { len: usize },
    /// Single-line input of a native kind such as `text`, `number` or `date`
    Input {
        native_kind: &'static str,
        value: String,
    },
}

/// Everything needed to draw one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualControl {
    pub label: String,
    pub required: bool,
    /// Inline error; never an empty string
    pub error: Option<String>,
    pub kind: ControlKind,
}

impl VisualControl {
    /// Text shown inside the control
    pub fn display_text(&self) -> String {
        match &self.kind {
            ControlKind::Select {
                placeholder,
                options,
                selected,
            } => selected
                .and_then(|i| options.get(i))
                .unwrap_or(placeholder)
                .clone(),
            ControlKind::Masked { len } => MASK_CHAR.to_string().repeat(*len),
            ControlKind::Input { value, .. } => value.clone(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Map a field and its state to the control that displays it
pub fn render(field: &FieldDescriptor, value: &str, error: Option<&str>) -> VisualControl {
    let kind = match &field.kind {
        FieldKind::Dropdown { options } => ControlKind::Select {
            placeholder: format!("Select {}", field.label),
            options: options.clone(),
            selected: options.iter().position(|o| o == value),
        },
        FieldKind::Password => ControlKind::Masked {
            len: value.chars().count(),
        },
        FieldKind::Text | FieldKind::Number | FieldKind::Date => ControlKind::Input {
            native_kind: field.kind.native_kind(),
            value: value.to_string(),
        },
    };

    VisualControl {
        label: field.label.clone(),
        required: field.required,
        error: error.filter(|e| !e.is_empty()).map(str::to_string),
        kind,
    }
}

/// Draw a control and its inline error into `area`
pub fn draw_control(frame: &mut Frame, area: Rect, control: &VisualControl, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let border_color = if control.has_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut title = vec![Span::raw(format!(" {}", control.label))];
    if control.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    title.push(Span::raw(" "));

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(content_line(control, is_active)).block(block),
        chunks[0],
    );

    if let Some(error) = &control.error {
        let message = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

fn content_line(control: &VisualControl, is_active: bool) -> Line<'static> {
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let dim = Style::default().fg(Color::DarkGray);
    let text = control.display_text();

    match &control.kind {
        ControlKind::Select { selected, .. } => {
            let style = if selected.is_some() { value_style } else { dim };
            let mut spans = vec![Span::styled(text, style)];
            if is_active {
                spans.push(Span::styled("  ◂ ▸", dim));
            }
            Line::from(spans)
        }
        ControlKind::Masked { .. } | ControlKind::Input { .. } => {
            if text.is_empty() && !is_active {
                return Line::from(Span::styled("(empty)", dim));
            }
            let mut spans = vec![Span::styled(text, value_style)];
            if is_active {
                spans.push(Span::styled(
                    "▌",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            if let ControlKind::Input { native_kind, .. } = &control.kind {
                if *native_kind == "date" && is_active {
                    spans.push(Span::styled("  YYYY-MM-DD", dim));
                }
            }
            Line::from(spans)
        }
    }
}
