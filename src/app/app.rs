use std::io;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{ListState, TableState},
};

use crate::{
    app::{AssetRegister, DepreciationReport, ui},
    models::ReportFilter,
};

pub const ALL_CATEGORIES: &str = "All";

pub struct App {
    register: AssetRegister,
    register_path: String,
    as_of: DateTime<Local>,
    filter: ReportFilter,
    report: DepreciationReport,
    table_state: TableState,
    error_popup: Option<String>,
    show_category_popup: bool,
    category_state: ListState,
    selection_mode: bool,
}

impl App {
    pub fn new(register: AssetRegister, register_path: String, as_of: DateTime<Local>) -> Self {
        let filter = ReportFilter::all();
        let report = register.report(&as_of, &filter);
        let mut category_state = ListState::default();
        category_state.select(Some(0));

        Self {
            register,
            register_path,
            as_of,
            filter,
            report,
            table_state: TableState::default(),
            error_popup: None,
            show_category_popup: false,
            category_state,
            selection_mode: false,
        }
    }

    pub fn report(&self) -> &DepreciationReport {
        &self.report
    }

    pub fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    pub fn error_popup(&self) -> &Option<String> {
        &self.error_popup
    }

    pub fn show_category_popup(&self) -> bool {
        self.show_category_popup
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// `All` followed by every category in the register.
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![ALL_CATEGORIES.to_string()];
        options.extend(self.register.categories());
        options
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    fn clear_selection(&mut self) {
        self.selection_mode = false;
        self.table_state.select(None);
    }

    fn refresh_report(&mut self) {
        self.report = self.register.report(&self.as_of, &self.filter);
        if let Some(i) = self.table_state.selected() {
            if i >= self.report.rows().len() {
                self.table_state.select(None);
            }
        }
    }

    fn reload_register(&mut self) {
        let register_path = self.register_path.clone();
        match self.register.import_assets(&register_path) {
            Ok(count) => {
                info!("Reloaded {} assets from {}", count, register_path);
                self.refresh_report();
            }
            Err(e) => {
                error!("Error importing assets from {}: {:?}", register_path, e);
                self.show_error_popup(&format!("Error importing assets: {:?}", e));
            }
        }
    }

    fn apply_category(&mut self, index: usize) {
        let category = self
            .category_options()
            .into_iter()
            .nth(index)
            .filter(|category| category != ALL_CATEGORIES);
        self.filter = self.filter.clone().with_category(category);
        self.clear_selection();
        self.refresh_report();
    }

    fn cycle(selected: Option<usize>, len: usize, forward: bool) -> usize {
        match selected {
            Some(i) if forward => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        }
    }

    /// Applies a single key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        if self.show_category_popup {
            let options = self.category_options();
            match code {
                KeyCode::Esc => self.show_category_popup = false,
                KeyCode::Down | KeyCode::Up => {
                    let i = Self::cycle(
                        self.category_state.selected(),
                        options.len(),
                        code == KeyCode::Down,
                    );
                    self.category_state.select(Some(i));
                }
                KeyCode::Enter => {
                    let i = self
                        .category_state
                        .selected()
                        .with_context(|| "Cannot select")?;
                    self.apply_category(i);
                    self.show_category_popup = false;
                }
                _ => {}
            }
            return Ok(false);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Enter | KeyCode::Esc => {
                if self.error_popup.is_some() {
                    self.clear_error_popup();
                } else if code == KeyCode::Esc {
                    self.clear_selection();
                }
            }
            KeyCode::F(4) => {
                self.clear_selection();
                self.reload_register();
            }
            KeyCode::F(5) => {
                self.clear_selection();
                self.as_of = Local::now();
                self.refresh_report();
            }
            KeyCode::F(8) => {
                self.clear_selection();
                let current = self.filter.category().as_ref().and_then(|category| {
                    self.category_options()
                        .iter()
                        .position(|option| option.eq_ignore_ascii_case(category))
                });
                self.category_state.select(Some(current.unwrap_or(0)));
                self.show_category_popup = true;
            }
            KeyCode::Down | KeyCode::Up => {
                self.selection_mode = true;
                let len = self.report.rows().len();
                if len > 0 {
                    let i = Self::cycle(self.table_state.selected(), len, code == KeyCode::Down);
                    self.table_state.select(Some(i));
                }
            }
            _ => {}
        }

        Ok(false)
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let categories = self.category_options();
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.report,
                &self.filter,
                &mut self.table_state,
                &self.error_popup,
                self.show_category_popup,
                &categories,
                &mut self.category_state,
                self.selection_mode,
            )
        })?;
        Ok(())
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.handle_key(key.code)? {
                    return Ok(());
                }
            }
        }
    }
}
