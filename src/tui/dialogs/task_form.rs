//! Add/edit task dialog

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{centered_rect, DialogResult};
use crate::task::{parse_due_date, FormError, Task, TaskFields};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

const FIELD_COUNT: usize = 3;

/// Validated form output. Converts into the store's `TaskFields` for edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormData {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
}

impl From<TaskFormData> for TaskFields {
    fn from(data: TaskFormData) -> Self {
        Self {
            title: data.title,
            description: data.description,
            due: data.due,
        }
    }
}

pub struct TaskFormDialog {
    heading: &'static str,
    title: Input,
    description: Input,
    due: Input,
    focused_field: usize,
    error_message: Option<String>,
}

impl TaskFormDialog {
    /// Blank form for creating a task.
    pub fn add() -> Self {
        Self::with_values("Add Task", "", "", "")
    }

    /// Form preloaded from an existing task for editing.
    pub fn edit(task: &Task) -> Self {
        Self::with_values(
            "Edit Task",
            &task.title,
            &task.description,
            &task.due.format("%Y-%m-%d").to_string(),
        )
    }

    fn with_values(heading: &'static str, title: &str, description: &str, due: &str) -> Self {
        Self {
            heading,
            title: Input::new(title.to_string()),
            description: Input::new(description.to_string()),
            due: Input::new(due.to_string()),
            focused_field: 0,
            error_message: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskFormData> {
        match key.code {
            KeyCode::Esc => {
                self.error_message = None;
                DialogResult::Cancel
            }
            KeyCode::Enter => match self.validate() {
                Ok(data) => DialogResult::Submit(data),
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    DialogResult::Continue
                }
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = if self.focused_field == 0 {
                    FIELD_COUNT - 1
                } else {
                    self.focused_field - 1
                };
                DialogResult::Continue
            }
            _ => {
                self.current_input_mut()
                    .handle_event(&crossterm::event::Event::Key(key));
                self.error_message = None;
                DialogResult::Continue
            }
        }
    }

    /// Required-field validation happens here, on submit. The store never
    /// sees unvalidated input.
    fn validate(&self) -> Result<TaskFormData, FormError> {
        let title = self.title.value().trim();
        if title.is_empty() {
            return Err(FormError::MissingField("Title"));
        }

        let description = self.description.value().trim();
        if description.is_empty() {
            return Err(FormError::MissingField("Description"));
        }

        let due = parse_due_date(self.due.value())?;

        Ok(TaskFormData {
            title: title.to_string(),
            description: description.to_string(),
            due,
        })
    }

    fn current_input_mut(&mut self) -> &mut Input {
        match self.focused_field {
            0 => &mut self.title,
            1 => &mut self.description,
            _ => &mut self.due,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, 60, 11);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.heading))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        let fields: [(&str, &Input, Option<&str>); FIELD_COUNT] = [
            ("Title:", &self.title, Some("task name")),
            ("Description:", &self.description, Some("description")),
            ("Due Date:", &self.due, Some("YYYY-MM-DD")),
        ];

        for (idx, (label, input, placeholder)) in fields.iter().enumerate() {
            render_text_field(
                frame,
                chunks[idx],
                label,
                input,
                idx == self.focused_field,
                *placeholder,
                theme,
            );
        }

        if let Some(error) = &self.error_message {
            let error_line = Line::from(vec![
                Span::styled("✗ ", Style::default().fg(theme.overdue).bold()),
                Span::styled(error, Style::default().fg(theme.overdue)),
            ]);
            frame.render_widget(Paragraph::new(error_line), chunks[3]);
        } else {
            let hint = Line::from(vec![
                Span::styled("Tab", Style::default().fg(theme.hint)),
                Span::raw(" next  "),
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" save  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ]);
            frame.render_widget(Paragraph::new(hint), chunks[3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn type_str(dialog: &mut TaskFormDialog, s: &str) {
        for c in s.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn filled_dialog() -> TaskFormDialog {
        let mut dialog = TaskFormDialog::add();
        type_str(&mut dialog, "Buy milk");
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "Two bottles");
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "2024-01-01");
        dialog
    }

    #[test]
    fn test_initial_state() {
        let dialog = TaskFormDialog::add();
        assert_eq!(dialog.title.value(), "");
        assert_eq!(dialog.description.value(), "");
        assert_eq!(dialog.due.value(), "");
        assert_eq!(dialog.focused_field, 0);
        assert!(dialog.error_message.is_none());
    }

    #[test]
    fn test_edit_preloads_fields() {
        let task = Task::new(
            TaskId(3),
            "Walk dog",
            "Around the block",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let dialog = TaskFormDialog::edit(&task);
        assert_eq!(dialog.title.value(), "Walk dog");
        assert_eq!(dialog.description.value(), "Around the block");
        assert_eq!(dialog.due.value(), "2024-01-02");
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = TaskFormDialog::add();
        let result = dialog.handle_key(key(KeyCode::Esc));
        assert!(matches!(result, DialogResult::Cancel));
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut dialog = TaskFormDialog::add();
        assert_eq!(dialog.focused_field, 0);

        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focused_field, 1);

        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focused_field, 2);

        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focused_field, 0); // wrap to start
    }

    #[test]
    fn test_backtab_cycles_fields_reverse() {
        let mut dialog = TaskFormDialog::add();
        dialog.handle_key(shift_key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field, 2);

        dialog.handle_key(shift_key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field, 1);
    }

    #[test]
    fn test_char_input_goes_to_focused_field() {
        let mut dialog = TaskFormDialog::add();
        type_str(&mut dialog, "Hi");
        assert_eq!(dialog.title.value(), "Hi");

        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "there");
        assert_eq!(dialog.description.value(), "there");
        assert_eq!(dialog.title.value(), "Hi");
    }

    #[test]
    fn test_backspace_removes_char() {
        let mut dialog = TaskFormDialog::add();
        type_str(&mut dialog, "Hello");
        dialog.handle_key(key(KeyCode::Backspace));
        assert_eq!(dialog.title.value(), "Hell");
    }

    #[test]
    fn test_submit_valid_form() {
        let mut dialog = filled_dialog();
        let result = dialog.handle_key(key(KeyCode::Enter));
        match result {
            DialogResult::Submit(data) => {
                assert_eq!(data.title, "Buy milk");
                assert_eq!(data.description, "Two bottles");
                assert_eq!(data.due, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            }
            _ => panic!("Expected Submit"),
        }
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut dialog = TaskFormDialog::with_values("Add Task", " Buy milk ", " x ", "2024-01-01");
        let result = dialog.handle_key(key(KeyCode::Enter));
        match result {
            DialogResult::Submit(data) => {
                assert_eq!(data.title, "Buy milk");
                assert_eq!(data.description, "x");
            }
            _ => panic!("Expected Submit"),
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut dialog = TaskFormDialog::with_values("Add Task", "", "desc", "2024-01-01");
        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert_eq!(dialog.error_message.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut dialog = TaskFormDialog::with_values("Add Task", "t", "", "2024-01-01");
        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert_eq!(
            dialog.error_message.as_deref(),
            Some("Description is required")
        );
    }

    #[test]
    fn test_malformed_due_date_rejected() {
        let mut dialog = TaskFormDialog::with_values("Add Task", "t", "d", "next week");
        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert_eq!(
            dialog.error_message.as_deref(),
            Some("Due date must be YYYY-MM-DD")
        );
    }

    #[test]
    fn test_error_clears_on_input() {
        let mut dialog = TaskFormDialog::add();
        dialog.handle_key(key(KeyCode::Enter));
        assert!(dialog.error_message.is_some());

        dialog.handle_key(key(KeyCode::Char('a')));
        assert!(dialog.error_message.is_none());
    }

    #[test]
    fn test_unknown_key_continues() {
        let mut dialog = TaskFormDialog::add();
        let result = dialog.handle_key(key(KeyCode::F(1)));
        assert!(matches!(result, DialogResult::Continue));
    }
}
