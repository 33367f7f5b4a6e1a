//! Keyboard focus and table cursor for the form view

use super::submissions::SubmissionStore;

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TypeSelector,
    /// A field of the selected form type, by schema position
    Field(usize),
    SubmitButton,
    /// The submissions tables
    Table,
}

impl Focus {
    /// Focus targets in Tab order for the current screen
    pub fn cycle(field_count: usize, has_type: bool, has_rows: bool) -> Vec<Focus> {
        let mut order = vec![Focus::TypeSelector];
        if has_type {
            order.extend((0..field_count).map(Focus::Field));
            order.push(Focus::SubmitButton);
        }
        if has_rows {
            order.push(Focus::Table);
        }
        order
    }
}

/// UI-only state; the form data itself lives in the session
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Row across all non-empty tables, in registry then submission order
    pub table_cursor: usize,
}

impl AppState {
    /// Move focus forward through `order`, wrapping around
    pub fn next_focus(&mut self, order: &[Focus]) {
        self.focus = step(order, self.focus, true);
    }

    /// Move focus backward through `order`, wrapping around
    pub fn prev_focus(&mut self, order: &[Focus]) {
        self.focus = step(order, self.focus, false);
    }

    /// Keep focus valid after the screen changed shape
    pub fn ensure_focus(&mut self, order: &[Focus]) {
        if !order.contains(&self.focus) {
            self.focus = Focus::TypeSelector;
        }
    }

    pub fn move_cursor_down(&mut self, total: usize) {
        if total > 0 && self.table_cursor < total - 1 {
            self.table_cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.table_cursor = self.table_cursor.saturating_sub(1);
    }

    /// Clamp the cursor after rows were removed
    pub fn clamp_cursor(&mut self, total: usize) {
        if total == 0 {
            self.table_cursor = 0;
        } else if self.table_cursor >= total {
            self.table_cursor = total - 1;
        }
    }
}

fn step(order: &[Focus], current: Focus, forward: bool) -> Focus {
    if order.is_empty() {
        return Focus::TypeSelector;
    }
    let Some(pos) = order.iter().position(|f| *f == current) else {
        return order[0];
    };
    let next = if forward {
        (pos + 1) % order.len()
    } else if pos == 0 {
        order.len() - 1
    } else {
        pos - 1
    };
    order[next]
}

/// Map a flat table cursor to `(form type id, position in that type's list)`
pub fn resolve_table_row(store: &SubmissionStore, cursor: usize) -> Option<(&str, usize)> {
    let mut remaining = cursor;
    for (type_id, records) in store.iter() {
        if remaining < records.len() {
            return Some((type_id, remaining));
        }
        remaining -= records.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;
    use crate::state::SubmissionRecord;
    use indexmap::IndexMap;

    mod focus {
        use super::*;

        #[test]
        fn test_default_is_type_selector() {
            assert_eq!(Focus::default(), Focus::TypeSelector);
        }

        #[test]
        fn test_cycle_without_type() {
            assert_eq!(Focus::cycle(3, false, false), vec![Focus::TypeSelector]);
            assert_eq!(
                Focus::cycle(3, false, true),
                vec![Focus::TypeSelector, Focus::Table]
            );
        }

        #[test]
        fn test_cycle_with_type() {
            assert_eq!(
                Focus::cycle(2, true, true),
                vec![
                    Focus::TypeSelector,
                    Focus::Field(0),
                    Focus::Field(1),
                    Focus::SubmitButton,
                    Focus::Table,
                ]
            );
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_next_focus_wraps() {
            let order = Focus::cycle(1, true, false);
            let mut state = AppState::default();
            state.next_focus(&order);
            assert_eq!(state.focus, Focus::Field(0));
            state.next_focus(&order);
            assert_eq!(state.focus, Focus::SubmitButton);
            state.next_focus(&order);
            assert_eq!(state.focus, Focus::TypeSelector);
        }

        #[test]
        fn test_prev_focus_wraps() {
            let order = Focus::cycle(1, true, false);
            let mut state = AppState::default();
            state.prev_focus(&order);
            assert_eq!(state.focus, Focus::SubmitButton);
        }

        #[test]
        fn test_ensure_focus_resets_missing_target() {
            let mut state = AppState {
                focus: Focus::Field(5),
                ..Default::default()
            };
            state.ensure_focus(&Focus::cycle(3, true, false));
            assert_eq!(state.focus, Focus::TypeSelector);
        }

        #[test]
        fn test_cursor_moves_within_bounds() {
            let mut state = AppState::default();
            state.move_cursor_up();
            assert_eq!(state.table_cursor, 0);
            state.move_cursor_down(2);
            state.move_cursor_down(2);
            assert_eq!(state.table_cursor, 1);
        }

        #[test]
        fn test_clamp_cursor() {
            let mut state = AppState {
                table_cursor: 4,
                ..Default::default()
            };
            state.clamp_cursor(2);
            assert_eq!(state.table_cursor, 1);
            state.clamp_cursor(0);
            assert_eq!(state.table_cursor, 0);
        }
    }

    mod resolve_table_row {
        use super::*;

        fn store(counts: &[(&str, usize)]) -> SubmissionStore {
            let mut store = SubmissionStore::new(&SchemaRegistry::builtin());
            for (type_id, count) in counts {
                for _ in 0..*count {
                    store
                        .append(type_id, SubmissionRecord::new(type_id, IndexMap::new()))
                        .unwrap();
                }
            }
            store
        }

        #[test]
        fn test_walks_types_in_registry_order() {
            let store = store(&[("payment", 1), ("userInfo", 2)]);
            assert_eq!(resolve_table_row(&store, 0), Some(("userInfo", 0)));
            assert_eq!(resolve_table_row(&store, 1), Some(("userInfo", 1)));
            assert_eq!(resolve_table_row(&store, 2), Some(("payment", 0)));
            assert_eq!(resolve_table_row(&store, 3), None);
        }

        #[test]
        fn test_empty_store() {
            let store = store(&[]);
            assert_eq!(resolve_table_row(&store, 0), None);
        }
    }
}
