use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Engine, EngineError, Expense, export};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    form::{self, Field, FormState},
    ui::{
        self, TerminalGuard,
        components::toast::{ToastLevel, ToastState},
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    pub expenses: Vec<Expense>,
    /// Highlighted row in the expense table.
    pub selected: usize,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
    /// Set when the last fetch failed; the previous rows stay on screen.
    pub load_error: Option<String>,
    pub database_label: String,
    pub export_path: String,
}

impl AppState {
    fn select_next(&mut self) {
        if !self.expenses.is_empty() {
            self.selected = (self.selected + 1).min(self.expenses.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.expenses.len().saturating_sub(1));
    }

    fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState::new(level, message));
    }
}

pub struct App {
    engine: Engine,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, engine: Engine) -> Self {
        let state = AppState {
            form: FormState::new(Local::now().date_naive(), config.budget),
            expenses: Vec::new(),
            selected: 0,
            toast: None,
            last_refresh: None,
            load_error: None,
            database_label: config.database_label().to_string(),
            export_path: config.export_path.clone(),
        };

        Self {
            engine,
            state,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.refresh().await;

        let mut guard = TerminalGuard::enter()?;
        let result = self.event_loop(&mut guard).await;
        guard.restore()?;
        result
    }

    async fn event_loop(&mut self, guard: &mut TerminalGuard) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            if self.state.toast.as_ref().is_some_and(ToastState::expired) {
                self.state.toast = None;
            }

            guard
                .terminal()
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::NextField => {
                self.state.form.focus = self.state.form.focus.next();
            }
            AppAction::PrevField => {
                self.state.form.focus = self.state.form.focus.prev();
            }
            AppAction::Submit => match self.state.form.focus {
                Field::DeleteId => self.delete_expense().await,
                Field::Budget => self.apply_budget(),
                _ => self.add_expense().await,
            },
            AppAction::Backspace => {
                if let Some(text) = self.state.form.focused_text_mut() {
                    text.pop();
                }
            }
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Left => {
                if self.state.form.focus == Field::Category {
                    self.state.form.category = self.state.form.category.prev();
                }
            }
            AppAction::Right => {
                if self.state.form.focus == Field::Category {
                    self.state.form.category = self.state.form.category.next();
                }
            }
            AppAction::PickSelected => self.pick_selected(),
            AppAction::Export => self.export(),
            AppAction::Refresh => self.refresh().await,
            AppAction::Input(ch) => self.input(ch),
            AppAction::None => {}
        }
    }

    fn input(&mut self, ch: char) {
        if self.state.form.focus == Field::Category {
            if ch == ' ' {
                self.state.form.category = self.state.form.category.next();
            }
            return;
        }
        if let Some(text) = self.state.form.focused_text_mut() {
            text.push(ch);
        }
    }

    /// Reload every row. On failure the previous rows stay visible.
    pub async fn refresh(&mut self) {
        match self.engine.fetch_all().await {
            Ok(expenses) => {
                self.state.expenses = expenses;
                self.state.load_error = None;
                self.state.last_refresh = Some(Local::now());
                self.state.clamp_selection();
            }
            Err(err) => {
                tracing::error!("fetch failed: {err}");
                let message = format!("Could not load expenses: {err}");
                self.state.load_error = Some(message.clone());
                self.state.notify(ToastLevel::Error, message);
            }
        }
    }

    async fn add_expense(&mut self) {
        let new = match self.state.form.validate_add() {
            Ok(new) => new,
            Err(message) => {
                self.state.notify(ToastLevel::Warning, message);
                return;
            }
        };

        let inserted = self
            .engine
            .insert(new.date, new.category, &new.item, new.quantity, new.amount)
            .await;
        match inserted {
            Ok(_) => {
                self.state.form.reset_after_add();
                self.refresh().await;
                if self.state.load_error.is_none() {
                    self.state.notify(ToastLevel::Success, "Expense added!");
                }
            }
            Err(err) => self.report_engine_error("add", err),
        }
    }

    async fn delete_expense(&mut self) {
        let id = match form::parse_delete_id(&self.state.form.delete_id) {
            Ok(id) => id,
            Err(message) => {
                self.state.notify(ToastLevel::Warning, message);
                return;
            }
        };

        match self.engine.delete(id).await {
            Ok(true) => {
                self.state.form.delete_id.clear();
                self.refresh().await;
                if self.state.load_error.is_none() {
                    self.state.notify(ToastLevel::Success, "Expense deleted!");
                }
            }
            Ok(false) => {
                self.state
                    .notify(ToastLevel::Info, format!("No expense with ID {id}."));
            }
            Err(err) => self.report_engine_error("delete", err),
        }
    }

    fn apply_budget(&mut self) {
        match form::parse_budget(&self.state.form.budget) {
            Ok(limit) if limit > 0.0 => self
                .state
                .notify(ToastLevel::Info, format!("Budget limit set to {limit:.2}.")),
            Ok(_) => self.state.notify(ToastLevel::Info, "Budget limit cleared."),
            Err(message) => self.state.notify(ToastLevel::Warning, message),
        }
    }

    /// Copy the highlighted row's id into the delete field.
    fn pick_selected(&mut self) {
        let Some(expense) = self.state.expenses.get(self.state.selected) else {
            return;
        };
        self.state.form.delete_id = expense.id.to_string();
        self.state.form.focus = Field::DeleteId;
    }

    fn export(&mut self) {
        let path = self.state.export_path.clone();
        match export::export_to_path(&self.state.expenses, &path) {
            Ok(()) => {
                self.state.notify(
                    ToastLevel::Success,
                    format!("Exported {} expenses to {path}.", self.state.expenses.len()),
                );
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                self.state
                    .notify(ToastLevel::Error, format!("Export failed: {err}"));
            }
        }
    }

    fn report_engine_error(&mut self, action: &str, err: EngineError) {
        if err.is_validation() {
            tracing::warn!("{action} rejected: {err}");
            self.state.notify(ToastLevel::Warning, err.to_string());
        } else {
            tracing::error!("{action} failed: {err}");
            self.state
                .notify(ToastLevel::Error, format!("Storage error: {err}"));
        }
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}
