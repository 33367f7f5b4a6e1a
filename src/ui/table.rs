//! Submission tables, one per form type with records

use super::widgets::render_scrollable_table;
use crate::app::App;
use crate::state::{Focus, SubmissionRecord};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const ACTIONS_HEADER: &str = "Actions";
const ACTIONS_CELL: &str = "e:Edit  d:Delete";

/// Column headers, taken from the first record's field names
pub fn table_headers(records: &[SubmissionRecord]) -> Vec<&str> {
    records
        .first()
        .map(|r| r.field_names().collect())
        .unwrap_or_default()
}

/// Rows needed to show a table in full; 0 when there is nothing to show
pub fn table_height(records: &[SubmissionRecord]) -> u16 {
    if records.is_empty() {
        0
    } else {
        // borders + header + rows
        u16::try_from(records.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3)
    }
}

/// Draw one table of records; an empty list draws nothing
pub fn draw_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    records: &[SubmissionRecord],
    selected: Option<usize>,
) {
    if records.is_empty() {
        return;
    }

    let headers = table_headers(records);

    let header = Row::new(
        headers
            .iter()
            .map(|h| Cell::from(h.to_string()))
            .chain(std::iter::once(Cell::from(ACTIONS_HEADER))),
    )
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = records.iter().map(|record| {
        Row::new(
            headers
                .iter()
                .map(|h| Cell::from(record.get(h).unwrap_or_default().to_string()))
                .chain(std::iter::once(Cell::from(ACTIONS_CELL).style(
                    Style::default().fg(Color::DarkGray),
                ))),
        )
    });

    let widths = headers
        .iter()
        .map(|_| Constraint::Fill(1))
        .chain(std::iter::once(Constraint::Length(ACTIONS_CELL.len() as u16)))
        .collect::<Vec<_>>();

    let border_color = if selected.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▸ ");

    render_scrollable_table(frame, area, table, selected);
}

/// Draw every non-empty form type's table, in registry order.
///
/// The table cursor counts rows across all tables in the same order.
pub fn draw_submissions(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.session.store();
    let schema = app.session.schema();
    let table_focused = app.state.focus == Focus::Table;

    let block = Block::default()
        .title(format!(" Submissions ({}) ", store.total()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if table_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if store.is_empty() {
        let empty = Paragraph::new(Line::from("No submissions yet."))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let sections: Vec<_> = schema
        .form_types()
        .into_iter()
        .map(|summary| (summary.label, store.list_by_type(summary.id)))
        .filter(|(_, records)| !records.is_empty())
        .collect();

    let mut constraints: Vec<Constraint> = sections
        .iter()
        .map(|(_, records)| Constraint::Length(table_height(records)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut offset = 0usize;
    for (i, (label, records)) in sections.iter().enumerate() {
        let cursor = app.state.table_cursor;
        let selected = (table_focused && cursor >= offset && cursor < offset + records.len())
            .then(|| cursor - offset);

        draw_table(
            frame,
            chunks[i],
            &format!("{label} Submissions"),
            records,
            selected,
        );
        offset += records.len();
    }
}
