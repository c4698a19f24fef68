mod forms;

use std::{
    collections::HashSet,
    sync::Arc,
    time::Instant,
};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::{
    chat::{ChatTranscript, Sender},
    client::{Gateway, HttpTransport, Transport},
    config::AppConfig,
    error::{AppError, Result},
    mutations::{
        self, DeleteOutcome, LimitOutcome, MSG_ADDED, MSG_DELETE_FAILED, MSG_DELETED,
        MSG_LIMIT_SAVED, SubmitOutcome,
    },
    refresh::{Generations, Orchestrator, RefreshOutcome},
    render::Renderers,
    state::{TransactionId, TransactionKind, TypeFilter, ViewState},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use forms::{
    FormField, FormState, LimitRow, LimitsModal, MonthPicker, NO_LIMIT_PLACEHOLDER, RecordsUi,
    SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};

pub const MSG_LIMITS_DISABLED: &str = "Spending limits are disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Records,
    Assistant,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Overview, Self::Records, Self::Assistant];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Records => "Records",
            Self::Assistant => "Assistant",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Overview => Self::Records,
            Self::Records => Self::Assistant,
            Self::Assistant => Self::Overview,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Assistant,
            Self::Records => Self::Overview,
            Self::Assistant => Self::Records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Form,
    Months,
    Limits,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Everything the UI draws from. Server data lives in `view`; the rest is
/// local interaction state.
#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub overlay: Overlay,
    pub view: ViewState,
    pub renderers: Renderers,
    /// Rows with a delete in flight. Cleared per id on failure, or by the
    /// next refresh once the row is gone.
    pub pending_deletes: HashSet<TransactionId>,
    pub toast: Option<ToastState>,
    pub chat: ChatTranscript,
    pub form: FormState,
    pub limits_modal: LimitsModal,
    pub month_picker: MonthPicker,
    pub records: RecordsUi,
    pub base_url: String,
    pub refreshing: bool,
    pub last_refresh: Option<DateTime<Tz>>,
}

/// Results of background work, delivered to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    Refreshed {
        generation: u64,
        outcome: RefreshOutcome,
    },
    Deleted {
        id: TransactionId,
        outcome: DeleteOutcome,
    },
    Submitted(SubmitOutcome),
    LimitSaved {
        category: String,
        outcome: LimitOutcome,
    },
}

/// User intents. Commands that act on an entity carry its id, so handlers
/// never look the target up from ambient UI state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    ShowSection(Section),
    Open(Overlay),
    CloseOverlay,
    Refresh,
    SetFilter(TypeFilter),
    SelectMonth(String),
    Delete(TransactionId),
    SubmitForm,
    SaveLimit { category: String, input: String },
    HoverSlice(Option<usize>),
}

pub struct App {
    config: AppConfig,
    tz: Tz,
    orchestrator: Orchestrator,
    generations: Generations,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.base_url)?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: AppConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let tz = config.tz()?;
        let orchestrator = Orchestrator::new(Gateway::new(transport), config.limits);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let today = Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string();

        let state = AppState {
            section: Section::Overview,
            overlay: Overlay::None,
            view: ViewState::default(),
            renderers: Renderers::new(config.animation_duration(), config.limits),
            pending_deletes: HashSet::new(),
            toast: None,
            chat: ChatTranscript::default(),
            form: FormState::new(today),
            limits_modal: LimitsModal::default(),
            month_picker: MonthPicker::default(),
            records: RecordsUi::default(),
            base_url: config.base_url.clone(),
            refreshing: false,
            last_refresh: None,
        };

        Ok(Self {
            config,
            tz,
            orchestrator,
            generations: Generations::default(),
            events_tx,
            events_rx,
            state,
            should_quit: false,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        self.request_refresh();

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }

            while let Ok(event) = self.events_rx.try_recv() {
                self.handle_event(event, Instant::now());
            }
            self.tick(Instant::now());
        }

        Ok(())
    }

    /// Waits for the next background result and applies it. Returns `false`
    /// if the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle_event(event, Instant::now());
                true
            }
            None => false,
        }
    }

    /// Advances animations and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        self.state.renderers.tick(now);
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.state.toast = None;
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + self.config.toast_duration(),
        });
    }

    /// Starts a full refresh for the current month filter. Any refresh
    /// still in flight is superseded.
    pub fn request_refresh(&mut self) -> u64 {
        let generation = self.generations.issue();
        let orchestrator = self.orchestrator.clone();
        let month = self.state.view.month.clone();
        let tx = self.events_tx.clone();
        self.state.refreshing = true;
        debug!(generation, %month, "refresh requested");

        tokio::spawn(async move {
            let outcome = orchestrator.fetch(&month).await;
            if tx.send(AppEvent::Refreshed { generation, outcome }).is_err() {
                debug!(generation, "event loop gone, dropping refresh");
            }
        });
        generation
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Refreshed {
                generation,
                outcome,
            } => self.apply_refresh(generation, outcome, now),
            AppEvent::Deleted { id, outcome } => match outcome {
                DeleteOutcome::Deleted => {
                    self.show_toast(MSG_DELETED, ToastLevel::Success);
                    self.request_refresh();
                }
                DeleteOutcome::Failed => {
                    self.state.pending_deletes.remove(&id);
                    self.rerender_list();
                    self.show_toast(MSG_DELETE_FAILED, ToastLevel::Error);
                }
            },
            AppEvent::Submitted(outcome) => {
                self.state.form.submitting = false;
                match outcome {
                    SubmitOutcome::Added => {
                        self.show_toast(MSG_ADDED, ToastLevel::Success);
                        self.after_submit();
                    }
                    SubmitOutcome::AddedWithWarning(warning) => {
                        self.state.chat.append_message(warning.clone(), Sender::Bot);
                        self.show_toast(warning, ToastLevel::Info);
                        self.after_submit();
                    }
                    SubmitOutcome::Failed(message) => {
                        self.show_toast(message, ToastLevel::Error);
                    }
                }
            }
            AppEvent::LimitSaved { category, outcome } => match outcome {
                LimitOutcome::Saved => {
                    self.state.limits_modal.input.clear();
                    self.show_toast(format!("{MSG_LIMIT_SAVED}: {category}"), ToastLevel::Success);
                    self.request_refresh();
                }
                LimitOutcome::Failed(message) => {
                    self.show_toast(message, ToastLevel::Error);
                }
            },
        }
    }

    fn apply_refresh(&mut self, generation: u64, outcome: RefreshOutcome, now: Instant) {
        if !self.generations.accepts(generation) {
            debug!(
                generation,
                latest = self.generations.latest(),
                "discarding stale refresh"
            );
            return;
        }

        let state = &mut self.state;
        let applied = outcome.apply(&mut state.view);
        let present: HashSet<TransactionId> = state.view.transactions.iter().map(|t| t.id).collect();
        state.pending_deletes.retain(|id| present.contains(id));

        state
            .renderers
            .fan_out(&state.view, &state.pending_deletes, now);
        if let Some(insight) = &applied.insight {
            state.renderers.render_insight(insight);
        }
        state.renderers.render_months(&applied.months);
        state.month_picker.selected = state.renderers.months.index_of(&state.view.month);
        state.records.clamp(state.renderers.list.rows.len());

        state.refreshing = false;
        state.last_refresh = Some(Utc::now().with_timezone(&self.tz));
        info!(generation, month = %state.view.month, "refresh applied");
    }

    fn after_submit(&mut self) {
        self.state.form.clear_entries();
        // Show the new record regardless of the previous month filter.
        self.state.view.month.clear();
        self.state.overlay = Overlay::None;
        self.request_refresh();
    }

    fn rerender_list(&mut self) {
        let state = &mut self.state;
        state
            .renderers
            .render_list(&state.view, &state.pending_deletes);
        state.records.clamp(state.renderers.list.rows.len());
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::ShowSection(section) => self.state.section = section,
            Command::Open(Overlay::Limits) if !self.config.limits => {
                self.show_toast(MSG_LIMITS_DISABLED, ToastLevel::Info);
            }
            Command::Open(overlay) => {
                if overlay == Overlay::Months {
                    self.state.month_picker.selected =
                        self.state.renderers.months.index_of(&self.state.view.month);
                }
                self.state.overlay = overlay;
            }
            Command::CloseOverlay => self.state.overlay = Overlay::None,
            Command::Refresh => {
                self.request_refresh();
            }
            Command::SetFilter(filter) => {
                self.state.view.filter = filter;
                self.rerender_list();
            }
            Command::SelectMonth(month) => {
                self.state.overlay = Overlay::None;
                if month != self.state.view.month {
                    self.state.view.month = month;
                    self.request_refresh();
                }
            }
            Command::Delete(id) => self.begin_delete(id),
            Command::SubmitForm => self.submit_form(),
            Command::SaveLimit { category, input } => self.save_limit(category, &input),
            Command::HoverSlice(index) => self.state.renderers.donut.hover(index),
        }
    }

    /// Dims the row at once; the network call runs in the background.
    fn begin_delete(&mut self, id: TransactionId) {
        if !self.state.pending_deletes.insert(id) {
            return;
        }
        self.rerender_list();

        let gateway = self.orchestrator.gateway().clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = mutations::delete(&gateway, id).await;
            if tx.send(AppEvent::Deleted { id, outcome }).is_err() {
                debug!(id, "event loop gone, dropping delete result");
            }
        });
    }

    fn submit_form(&mut self) {
        if self.state.form.submitting {
            return;
        }
        self.state.form.submitting = true;
        let payload = self.state.form.payload(self.state.view.kind);

        let gateway = self.orchestrator.gateway().clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = mutations::submit(&gateway, &payload).await;
            if tx.send(AppEvent::Submitted(outcome)).is_err() {
                debug!("event loop gone, dropping submit result");
            }
        });
    }

    fn save_limit(&mut self, category: String, input: &str) {
        let limit = match mutations::parse_limit(input) {
            Ok(limit) => limit,
            Err(err) => {
                self.show_toast(err.to_string(), ToastLevel::Error);
                return;
            }
        };

        let gateway = self.orchestrator.gateway().clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = mutations::save_limit(&gateway, &category, limit).await;
            if tx.send(AppEvent::LimitSaved { category, outcome }).is_err() {
                debug!("event loop gone, dropping limit result");
            }
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.dispatch(Command::Quit);
            return;
        }
        match self.state.overlay {
            Overlay::None => self.handle_main_key(action),
            Overlay::Form => self.handle_form_key(action),
            Overlay::Months => self.handle_months_key(action),
            Overlay::Limits => self.handle_limits_key(action),
            Overlay::Help => {
                if matches!(action, AppAction::Cancel | AppAction::Input('?')) {
                    self.dispatch(Command::CloseOverlay);
                }
            }
        }
    }

    fn handle_main_key(&mut self, action: AppAction) {
        if self.state.section == Section::Records && self.state.records.searching {
            self.handle_search_key(action);
            return;
        }

        match action {
            AppAction::NextField => self.dispatch(Command::ShowSection(self.state.section.next())),
            AppAction::PrevField => self.dispatch(Command::ShowSection(self.state.section.prev())),
            AppAction::Input('q') => self.dispatch(Command::Quit),
            AppAction::Input('1') => self.dispatch(Command::ShowSection(Section::Overview)),
            AppAction::Input('2') => self.dispatch(Command::ShowSection(Section::Records)),
            AppAction::Input('3') => self.dispatch(Command::ShowSection(Section::Assistant)),
            AppAction::Input('a') => self.dispatch(Command::Open(Overlay::Form)),
            AppAction::Input('m') => self.dispatch(Command::Open(Overlay::Months)),
            AppAction::Input('l') => self.dispatch(Command::Open(Overlay::Limits)),
            AppAction::Input('?') => self.dispatch(Command::Open(Overlay::Help)),
            AppAction::Input('r') => self.dispatch(Command::Refresh),
            _ => match self.state.section {
                Section::Overview => self.handle_overview_key(action),
                Section::Records => self.handle_records_key(action),
                Section::Assistant => self.handle_assistant_key(action),
            },
        }
    }

    fn handle_overview_key(&mut self, action: AppAction) {
        match action {
            AppAction::Right => self.state.renderers.donut.hover_next(),
            AppAction::Left => self.state.renderers.donut.hover_prev(),
            AppAction::Cancel => self.dispatch(Command::HoverSlice(None)),
            _ => {}
        }
    }

    fn handle_records_key(&mut self, action: AppAction) {
        let rows = self.state.renderers.list.rows.len();
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.records.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.state.records.select_next(rows),
            AppAction::Input('f') => {
                self.dispatch(Command::SetFilter(self.state.view.filter.next()));
            }
            AppAction::Input('/') => self.state.records.searching = true,
            AppAction::Input('d') => {
                let target = self
                    .state
                    .renderers
                    .list
                    .rows
                    .get(self.state.records.selected)
                    .and_then(|row| row.delete_target());
                if let Some(id) = target {
                    self.dispatch(Command::Delete(id));
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel | AppAction::Submit => self.state.records.searching = false,
            AppAction::Backspace => {
                self.state.view.search.pop();
                self.rerender_list();
            }
            AppAction::Input(ch) => {
                self.state.view.search.push(ch);
                self.rerender_list();
            }
            _ => {}
        }
    }

    fn handle_assistant_key(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.chat.scroll_up(),
            AppAction::Down | AppAction::Input('j') => self.state.chat.scroll_down(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => return self.dispatch(Command::CloseOverlay),
            _ if self.state.form.submitting => return,
            AppAction::Submit => return self.dispatch(Command::SubmitForm),
            _ => {}
        }

        let kind = self.state.view.kind;
        let form = &mut self.state.form;
        match (form.focus, action) {
            (_, AppAction::NextField | AppAction::Down) => form.focus = form.focus.next(),
            (_, AppAction::PrevField | AppAction::Up) => form.focus = form.focus.prev(),
            (FormField::Kind, AppAction::Left | AppAction::Right | AppAction::Input(' ')) => {
                form.reset_category();
                self.state.view.kind = toggled(kind);
            }
            (FormField::Category, AppAction::Left) => form.cycle_category(kind, false),
            (FormField::Category, AppAction::Right | AppAction::Input(' ')) => {
                form.cycle_category(kind, true);
            }
            (_, AppAction::Backspace) => {
                if let Some(text) = form.active_text_mut() {
                    text.pop();
                }
            }
            (_, AppAction::Input(ch)) => {
                if let Some(text) = form.active_text_mut() {
                    text.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_months_key(&mut self, action: AppAction) {
        let len = self.state.renderers.months.len();
        match action {
            AppAction::Cancel => self.dispatch(Command::CloseOverlay),
            AppAction::Up => self.state.month_picker.select_prev(),
            AppAction::Down => self.state.month_picker.select_next(len),
            AppAction::Submit => {
                let value = self
                    .state
                    .renderers
                    .months
                    .options
                    .get(self.state.month_picker.selected)
                    .map(|option| option.value.clone())
                    .unwrap_or_default();
                self.dispatch(Command::SelectMonth(value));
            }
            _ => {}
        }
    }

    fn handle_limits_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => self.dispatch(Command::CloseOverlay),
            AppAction::Submit => {
                let modal = &self.state.limits_modal;
                let command = Command::SaveLimit {
                    category: modal.selected_category().to_string(),
                    input: modal.input.clone(),
                };
                self.dispatch(command);
            }
            AppAction::Up => self.state.limits_modal.select_prev(),
            AppAction::Down => self.state.limits_modal.select_next(),
            AppAction::Backspace => {
                self.state.limits_modal.input.pop();
            }
            AppAction::Input(ch) => self.state.limits_modal.input.push(ch),
            _ => {}
        }
    }
}

fn toggled(kind: TransactionKind) -> TransactionKind {
    match kind {
        TransactionKind::Income => TransactionKind::Expense,
        TransactionKind::Expense => TransactionKind::Income,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::client::{Method, StubReply, StubTransport};

    fn app(stub: StubTransport) -> (App, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        let app = App::with_transport(AppConfig::default(), stub.clone()).unwrap();
        (app, stub)
    }

    async fn next(app: &mut App) {
        let received = tokio::time::timeout(Duration::from_secs(5), app.process_next_event()).await;
        assert_eq!(received.ok(), Some(true));
    }

    fn rows() -> serde_json::Value {
        json!([
            { "id": 1, "type": "expense", "category": "Rent", "amount": 900, "date": "2026-02-01" },
            { "id": 2, "type": "income", "category": "Salary", "amount": 5000, "date": "2026-02-02" }
        ])
    }

    #[tokio::test]
    async fn refresh_fans_out_to_every_view() {
        let stub = StubTransport::new()
            .route(Method::Get, "/api/transactions", StubReply::Json(200, rows()))
            .route(
                Method::Get,
                "/api/summary",
                StubReply::Json(
                    200,
                    json!({
                        "income": 5000, "expense": 900, "balance": 4100,
                        "categories": [{ "category": "Rent", "total": 900 }],
                        "trend": [{ "month": "2026-02", "income": 5000, "expense": 900 }]
                    }),
                ),
            )
            .route(
                Method::Get,
                "/api/months",
                StubReply::Json(200, json!(["2026-02"])),
            );
        let (mut app, _) = app(stub);

        app.request_refresh();
        next(&mut app).await;

        let state = &app.state;
        assert!(!state.refreshing);
        assert_eq!(state.renderers.list.rows.len(), 2);
        assert_eq!(state.renderers.list.count_label, "2 records");
        assert!(state.renderers.donut.chart().is_some());
        assert!(state.renderers.trend.chart().is_some());
        assert_eq!(state.renderers.bars.len(), 1);
        assert_eq!(state.renderers.months.len(), 2);
        assert!(state.last_refresh.is_some());
    }

    #[tokio::test]
    async fn stale_refresh_is_discarded() {
        let (mut app, _) = app(StubTransport::new());
        let generation = app.request_refresh();
        app.request_refresh();

        app.handle_event(
            AppEvent::Refreshed {
                generation,
                outcome: RefreshOutcome {
                    month: String::new(),
                    transactions: rows(),
                    summary: json!({}),
                    insight: json!({}),
                    limits: None,
                    months: json!([]),
                },
            },
            Instant::now(),
        );
        assert!(app.state.view.transactions.is_empty());
        assert!(app.state.refreshing);
    }

    #[tokio::test]
    async fn failed_delete_restores_row() {
        let stub = StubTransport::new().route(
            Method::Delete,
            "/api/transactions/1",
            StubReply::Json(500, json!({ "success": false })),
        );
        let (mut app, _) = app(stub);
        app.state.view.transactions = crate::normalize::transactions(&rows());
        app.rerender_list();

        app.dispatch(Command::Delete(1));
        assert!(app.state.renderers.list.rows[0].pending);
        assert_eq!(app.state.renderers.list.rows[0].delete_target(), None);

        next(&mut app).await;
        assert!(!app.state.renderers.list.rows[0].pending);
        let toast = app.state.toast.as_ref().map(|t| (t.message.as_str(), t.level));
        assert_eq!(toast, Some((MSG_DELETE_FAILED, ToastLevel::Error)));
    }

    #[tokio::test]
    async fn blank_limit_is_rejected_before_network() {
        let (mut app, stub) = app(StubTransport::new());
        app.dispatch(Command::SaveLimit {
            category: "Rent".to_string(),
            input: "0".to_string(),
        });
        assert!(stub.calls().is_empty());
        assert_eq!(
            app.state.toast.as_ref().map(|t| t.level),
            Some(ToastLevel::Error)
        );
    }

    #[tokio::test]
    async fn month_selection_refreshes_with_query() {
        let (mut app, stub) = app(StubTransport::new());
        app.dispatch(Command::SelectMonth("2026-01".to_string()));
        next(&mut app).await;
        assert_eq!(stub.count(Method::Get, "/api/summary?month=2026-01"), 1);
        assert_eq!(stub.count(Method::Get, "/api/limits"), 1);
    }

    #[tokio::test]
    async fn toast_expires_after_duration() {
        let (mut app, _) = app(StubTransport::new());
        app.show_toast("hello", ToastLevel::Info);
        let expires = app.state.toast.as_ref().map(|t| t.expires_at).unwrap();
        app.tick(expires - Duration::from_millis(1));
        assert!(app.state.toast.is_some());
        app.tick(expires);
        assert!(app.state.toast.is_none());
    }
}
