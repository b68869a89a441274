use crate::constants::{ADD_BUTTON_WIDTH, LABEL_ADD_BUTTON, TITLE_INPUT};
use crate::dispatch::{InputSurface, Intent};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single-line text field with an add button next to it
#[derive(Debug, Default)]
pub struct InputComponent {
    value: String,
    focused: bool,
    field_area: Rect,
    button_area: Rect,
}

impl InputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    fn submit(&self) -> Action {
        Action::Dispatch(Intent::AddTask(self.value.clone()))
    }

    /// Longest tail of the value that fits in `width` terminal columns
    fn visible_text(&self, width: usize) -> &str {
        if self.value.width() <= width {
            return &self.value;
        }

        let mut used = 0;
        let mut start = self.value.len();
        for (offset, c) in self.value.char_indices().rev() {
            let char_width = c.width().unwrap_or(0);
            if used + char_width > width {
                break;
            }
            used += char_width;
            start = offset;
        }
        &self.value[start..]
    }
}

impl InputSurface for InputComponent {
    fn clear_input(&mut self) {
        self.value.clear();
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::FocusTaskList,
            KeyCode::Backspace => {
                self.value.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.value.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        let position = Position::new(mouse.column, mouse.row);
        if self.button_area.contains(position) {
            self.submit()
        } else if self.field_area.contains(position) {
            Action::FocusInput
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
            .split(rect);
        self.field_area = chunks[0];
        self.button_area = chunks[1];

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let inner_width = self.field_area.width.saturating_sub(2) as usize;
        // Leave one column for the cursor
        let visible = self.visible_text(inner_width.saturating_sub(1));
        let visible_width = visible.width() as u16;

        let field = Paragraph::new(visible.to_string())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(TITLE_INPUT),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(field, self.field_area);

        let button = Paragraph::new(LABEL_ADD_BUTTON)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(button, self.button_area);

        if self.focused && self.field_area.width > 2 && self.field_area.height > 2 {
            f.set_cursor_position(Position::new(self.field_area.x + 1 + visible_width, self.field_area.y + 1));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
