//! Display state for the timer surface.

use crate::core::traits::Row;

/// What is currently on screen, one field per row.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Phase title ("Focus!" / "Break").
    pub title: Option<String>,
    /// Remaining time.
    pub remaining: Option<String>,
    /// Key help line.
    pub commands: Option<String>,
    /// Tracked task description.
    pub task: Option<String>,
    /// Transient notice.
    pub notice: Option<String>,
}

impl App {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text on a row.
    pub fn set(&mut self, row: Row, text: &str) {
        *self.slot(row) = Some(text.to_string());
    }

    /// Erase a row.
    pub fn clear_row(&mut self, row: Row) {
        *self.slot(row) = None;
    }

    /// Erase every row.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, row: Row) -> &mut Option<String> {
        match row {
            Row::Title => &mut self.title,
            Row::Remaining => &mut self.remaining,
            Row::Commands => &mut self.commands,
            Row::Task => &mut self.task,
            Row::Notice => &mut self.notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_row() {
        let mut app = App::new();
        app.set(Row::Title, "Focus!");
        app.set(Row::Remaining, "25:00");
        assert_eq!(app.title.as_deref(), Some("Focus!"));
        assert_eq!(app.remaining.as_deref(), Some("25:00"));

        app.clear_row(Row::Title);
        assert!(app.title.is_none());
        assert_eq!(app.remaining.as_deref(), Some("25:00"));
    }

    #[test]
    fn test_clear_erases_everything() {
        let mut app = App::new();
        app.set(Row::Commands, "commands");
        app.set(Row::Notice, "oops");
        app.clear();
        assert!(app.commands.is_none());
        assert!(app.notice.is_none());
    }
}
