//! Status bar component

use crate::constants::{HINTS_INPUT, HINTS_LIST};
use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the current focus, or the last error, followed by the
    /// `done/total` counts
    pub fn status_text(focus: Focus, error_message: Option<&str>, done: usize, total: usize) -> String {
        let message = match error_message {
            Some(message) => message,
            None => match focus {
                Focus::Input => HINTS_INPUT,
                Focus::TaskList => HINTS_LIST,
            },
        };
        format!("{} │ {}/{} done", message, done, total)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, focus: Focus, error_message: Option<&str>, done: usize, total: usize) {
        let status_color = if error_message.is_some() { Color::Red } else { Color::Gray };

        let status_bar = Paragraph::new(Self::status_text(focus, error_message, done, total))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
