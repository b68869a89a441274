use crate::config::Config;
use crate::constants::{ERROR_SAVE_FAILED, INPUT_HEIGHT};
use crate::dispatch::{Dispatcher, Intent, TaskRenderer};
use crate::icons::IconService;
use crate::storage::{KeyValueStore, TaskStore};
use crate::ui::components::{InputComponent, StatusBar, TaskListComponent};
use crate::ui::core::{Action, Component, EventType, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Top-level component: owns the dispatcher and wires the input field and
/// task list to it.
pub struct AppComponent<S: KeyValueStore> {
    // Component composition
    input: InputComponent,
    task_list: TaskListComponent,

    // Services
    dispatcher: Dispatcher<S>,

    // Simple UI state
    focus: Focus,
    mouse_enabled: bool,
    error_message: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> AppComponent<S> {
    pub fn new(store: TaskStore<S>, config: &Config) -> Self {
        Self {
            input: InputComponent::new(),
            task_list: TaskListComponent::new(IconService::new(config.display.icon_theme)),
            dispatcher: Dispatcher::new(store),
            focus: Focus::default(),
            mouse_enabled: config.ui.mouse_enabled,
            error_message: None,
            should_quit: false,
        }
    }

    /// Restore the persisted list, draw it and start routing input to the
    /// add and toggle handlers.
    pub fn init(&mut self) {
        let tasks = self.dispatcher.store().load();
        log::info!("Loaded {} tasks from '{}'", tasks.len(), self.dispatcher.store().key());
        self.task_list.render_tasks(&tasks);
        self.set_focus(self.focus);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn input(&self) -> &InputComponent {
        &self.input
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Input => {
                self.task_list.on_blur();
                self.input.on_focus();
            }
            Focus::TaskList => {
                self.input.on_blur();
                self.task_list.on_focus();
            }
        }
    }

    /// Route one terminal event and execute the resulting action
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Dispatch(intent) => self.dispatch(intent),
            Action::FocusInput => self.set_focus(Focus::Input),
            Action::FocusTaskList => self.set_focus(Focus::TaskList),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        match self.dispatcher.dispatch(intent, &mut self.task_list, &mut self.input) {
            Ok(()) => self.error_message = None,
            Err(e) => {
                log::error!("{}: {}", ERROR_SAVE_FAILED, e);
                self.error_message = Some(format!("{}: {}", ERROR_SAVE_FAILED, e));
            }
        }
    }
}

impl<S: KeyValueStore> Component for AppComponent<S> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match (self.focus, key.code) {
            (Focus::Input, KeyCode::Tab | KeyCode::BackTab) => Action::FocusTaskList,
            (Focus::TaskList, KeyCode::Tab | KeyCode::BackTab) => Action::FocusInput,
            (Focus::Input, _) => self.input.handle_key_events(key),
            (Focus::TaskList, KeyCode::Char('q')) => Action::Quit,
            (Focus::TaskList, KeyCode::Char('a') | KeyCode::Char('i')) => Action::FocusInput,
            (Focus::TaskList, _) => self.task_list.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        match self.input.handle_mouse_events(mouse) {
            Action::None => self.task_list.handle_mouse_events(mouse),
            action => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(rect);

        self.input.render(f, chunks[0]);
        self.task_list.render(f, chunks[1]);
        StatusBar::render(
            f,
            chunks[2],
            self.focus,
            self.error_message.as_deref(),
            self.task_list.completed_count(),
            self.task_list.len(),
        );
    }
}
