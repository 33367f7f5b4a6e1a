//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{Table, TableState},
    Frame,
};

/// Render a table that keeps the selected row visible.
///
/// Wraps `render_stateful_widget` with a `TableState`, so the table scrolls
/// to the selected row when it does not fit. `None` renders without a
/// highlighted row.
///
/// # Example
/// ```ignore
/// let table = Table::new(rows, widths).block(block);
/// render_scrollable_table(frame, area, table, Some(cursor));
/// ```
pub fn render_scrollable_table(frame: &mut Frame, area: Rect, table: Table, selected: Option<usize>) {
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}
