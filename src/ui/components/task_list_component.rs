use crate::constants::{EMPTY_LIST_HINT, TITLE_TASKS};
use crate::dispatch::{Intent, TaskRenderer};
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One rendered row, bound to the task it was built from
#[derive(Debug, Clone)]
pub struct TaskItem {
    text: String,
    completed: bool,
    on_activate: Action,
}

impl TaskItem {
    pub fn new(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            completed: task.completed,
            on_activate: Action::Dispatch(Intent::ToggleTask(task.text.clone())),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The action this row fires when activated
    pub fn activate(&self) -> Action {
        self.on_activate.clone()
    }

    fn to_list_item(&self, selected: bool, icons: &IconService) -> ListItem<'static> {
        let mut style = if self.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        if selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        let icon_style = if self.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", icons.task_status(self.completed)), icon_style),
            Span::styled(self.text.clone(), style),
        ]))
    }
}

/// Visual projection of the task list.
///
/// Every call to [`TaskRenderer::render_tasks`] throws away the previous items
/// and builds a fresh one per task.
pub struct TaskListComponent {
    items: Vec<TaskItem>,
    list_state: ListState,
    icons: IconService,
    focused: bool,
    area: Rect,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new(IconService::default())
    }
}

impl TaskListComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
            icons,
            focused: false,
            area: Rect::default(),
        }
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
        self.clamp_selection();
    }

    pub fn next_task(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous_task(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(previous));
    }

    fn activate_selected(&self) -> Action {
        self.list_state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(TaskItem::activate)
            .unwrap_or(Action::None)
    }

    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.list_state.select(None);
        } else {
            let max = self.items.len() - 1;
            let selected = self.list_state.selected().map_or(0, |i| i.min(max));
            self.list_state.select(Some(selected));
        }
    }

    /// Index of the item drawn at terminal row `row`, if any
    fn item_at_row(&self, row: u16) -> Option<usize> {
        let first_row = self.area.y + 1;
        let last_row = (self.area.y + self.area.height).saturating_sub(1);
        if row < first_row || row >= last_row {
            return None;
        }
        let index = (row - first_row) as usize + self.list_state.offset();
        (index < self.items.len()).then_some(index)
    }
}

impl TaskRenderer for TaskListComponent {
    fn render_tasks(&mut self, tasks: &[Task]) {
        self.items.clear();
        self.items.extend(tasks.iter().map(TaskItem::new));
        self.clamp_selection();
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_task();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_task();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || !self.area.contains(Position::new(mouse.column, mouse.row))
        {
            return Action::None;
        }

        match self.item_at_row(mouse.row) {
            Some(index) => {
                self.list_state.select(Some(index));
                self.items[index].activate()
            }
            None => Action::FocusTaskList,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = format!("{} ({}/{})", TITLE_TASKS, self.completed_count(), self.items.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        if self.items.is_empty() {
            let hint = Paragraph::new(EMPTY_LIST_HINT)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .block(block);
            f.render_widget(hint, rect);
            return;
        }

        let selected = if self.focused { self.list_state.selected() } else { None };
        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_list_item(selected == Some(i), &self.icons))
            .collect();

        let list = List::new(list_items).block(block);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
