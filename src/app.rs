//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_submit_modifier;
use crate::schema::SchemaRegistry;
use crate::state::{resolve_table_row, AppState, Focus, ProgressAnimation, Session, ToastQueue};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Form engine, submission store and toasts
    pub session: Session<ToastQueue>,
    /// Focus and table cursor
    pub state: AppState,
    /// Displayed progress bar value
    pub progress: ProgressAnimation,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(schema: SchemaRegistry, config: &TuiConfig) -> Self {
        let toasts = ToastQueue::new(config.toast_duration());
        let mut session = Session::new(Arc::new(schema), toasts);

        if let Some(type_id) = &config.default_form_type {
            if let Err(err) = session.select_type(type_id) {
                tracing::warn!("Ignoring default_form_type: {err}");
            }
        }

        let mut progress = ProgressAnimation::new(config.animate_progress());
        progress.retarget(session.engine().progress(), Instant::now());

        Self {
            session,
            state: AppState::default(),
            progress,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Focus targets in Tab order for the current screen
    pub fn focus_order(&self) -> Vec<Focus> {
        let engine = self.session.engine();
        let field_count = engine.selected_form().map_or(0, |f| f.fields.len());
        Focus::cycle(
            field_count,
            engine.selected_type_id().is_some(),
            !self.session.store().is_empty(),
        )
    }

    /// Advance timers. Returns true when the screen needs a redraw.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let pruned = self.session.notifier_mut().prune(now);
        pruned || self.progress.is_animating(now) || !self.session.notifier().is_empty()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if key.code == KeyCode::Char('s') && is_submit_modifier(key.modifiers) {
            self.submit()?;
            self.sync_progress();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.session.notifier_mut().dismiss_newest();
            }
            KeyCode::Tab => {
                let order = self.focus_order();
                self.state.next_focus(&order);
            }
            KeyCode::BackTab => {
                let order = self.focus_order();
                self.state.prev_focus(&order);
            }
            _ => match self.state.focus {
                Focus::TypeSelector => self.handle_type_selector_key(key)?,
                Focus::Field(index) => self.handle_field_key(index, key)?,
                Focus::SubmitButton => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit()?;
                    }
                }
                Focus::Table => self.handle_table_key(key)?,
            },
        }

        self.sync_progress();
        Ok(())
    }

    fn handle_type_selector_key(&mut self, key: KeyEvent) -> Result<()> {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
            KeyCode::Left | KeyCode::Char('h') => false,
            _ => return Ok(()),
        };

        let schema = self.session.schema();
        if schema.is_empty() {
            return Ok(());
        }
        let current = self
            .session
            .engine()
            .selected_type_id()
            .and_then(|id| schema.position(id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => schema.len() - 1,
            (Some(pos), true) => (pos + 1) % schema.len(),
            (Some(pos), false) => (pos + schema.len() - 1) % schema.len(),
        };
        let Some(type_id) = schema.get(next).map(|t| t.id.clone()) else {
            return Ok(());
        };

        self.session.select_type(&type_id)?;
        Ok(())
    }

    fn handle_field_key(&mut self, index: usize, key: KeyEvent) -> Result<()> {
        let Some(type_id) = self.session.engine().selected_type_id() else {
            return Ok(());
        };
        let Some(field) = self.session.schema().fields(type_id)?.get(index).cloned() else {
            return Ok(());
        };
        let current = self.session.engine().value(&field.name).to_string();

        if key.code == KeyCode::Enter {
            return self.submit();
        }

        if let Some(options) = field.kind.options() {
            let forward = match key.code {
                KeyCode::Right | KeyCode::Char(' ') => true,
                KeyCode::Left => false,
                _ => return Ok(()),
            };
            let value = cycle_option(options, &current, forward);
            self.session.update_field(&field.name, &value);
            return Ok(());
        }

        match key.code {
            KeyCode::Char(c)
                if field.kind.accepts(c) && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let mut value = current;
                value.push(c);
                self.session.update_field(&field.name, &value);
            }
            KeyCode::Backspace if !current.is_empty() => {
                let mut value = current;
                value.pop();
                self.session.update_field(&field.name, &value);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> Result<()> {
        let total = self.session.store().total();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor_down(total),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor_up(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected()?,
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected()?,
            _ => {}
        }
        Ok(())
    }

    /// Submit the draft; validation failures move focus to the first bad field
    fn submit(&mut self) -> Result<()> {
        if self.session.engine().selected_type_id().is_none() {
            tracing::debug!("Submit ignored, no form type selected");
            return Ok(());
        }

        match self.session.submit() {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                let engine = self.session.engine();
                let first_error = engine.selected_form().and_then(|form| {
                    form.fields
                        .iter()
                        .position(|f| engine.errors().contains_key(&f.name))
                });
                if let Some(index) = first_error {
                    self.state.focus = Focus::Field(index);
                }
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn edit_selected(&mut self) -> Result<()> {
        let Some((type_id, index)) = resolve_table_row(self.session.store(), self.state.table_cursor)
            .map(|(id, index)| (id.to_string(), index))
        else {
            return Ok(());
        };

        self.session.edit(&type_id, index)?;
        self.state.clamp_cursor(self.session.store().total());
        self.state.focus = Focus::Field(0);
        let order = self.focus_order();
        self.state.ensure_focus(&order);
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        let Some((type_id, index)) = resolve_table_row(self.session.store(), self.state.table_cursor)
            .map(|(id, index)| (id.to_string(), index))
        else {
            return Ok(());
        };

        self.session.delete(&type_id, index)?;
        self.state.clamp_cursor(self.session.store().total());
        let order = self.focus_order();
        self.state.ensure_focus(&order);
        Ok(())
    }

    fn sync_progress(&mut self) {
        self.progress
            .retarget(self.session.engine().progress(), Instant::now());
    }
}

/// Next dropdown value. The empty placeholder sits before the first option.
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    // 0 is the placeholder, 1..=len are the options
    let slots = options.len() + 1;
    let pos = options
        .iter()
        .position(|o| o == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    match next {
        0 => String::new(),
        i => options[i - 1].clone(),
    }
}
