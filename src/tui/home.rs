//! Home view - task list, search, move mode, and modal wiring

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{ConfirmDialog, DialogResult, TaskFormDialog};
use super::styles::Theme;
use crate::task::{self, DragEnd, TaskId, TaskStore};

/// At most one modal is open at a time; assigning the option replaces
/// whatever was open before.
enum Modal {
    Add(TaskFormDialog),
    Edit(TaskId, TaskFormDialog),
    ConfirmDelete(TaskId, ConfirmDialog),
}

pub struct HomeView {
    store: TaskStore,

    // UI state
    cursor: usize,
    grabbed: Option<TaskId>,

    // Dialogs
    show_help: bool,
    modal: Option<Modal>,

    // Search
    search_active: bool,
    search_query: String,
}

impl HomeView {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            cursor: 0,
            grabbed: None,
            show_help: false,
            modal: None,
            search_active: false,
            search_query: String::new(),
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.modal.is_some()
    }

    /// Ids of the rows currently displayed, in store order.
    fn display_ids(&self) -> Vec<TaskId> {
        task::display_ids(self.store.tasks(), &self.search_query)
    }

    /// Identity of the task under the cursor, if any row is displayed.
    fn selected_id(&self) -> Option<TaskId> {
        self.display_ids().get(self.cursor).copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
            return None;
        }

        // Search mode
        if self.search_active {
            match key.code {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.search_query.clear();
                    self.clamp_cursor();
                }
                KeyCode::Enter => {
                    self.search_active = false;
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                    self.clamp_cursor();
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    self.cursor = 0;
                }
                _ => {}
            }
            return None;
        }

        // Move mode: a task is grabbed, the cursor picks the drop slot
        if let Some(source) = self.grabbed {
            match key.code {
                KeyCode::Esc => {
                    self.grabbed = None;
                }
                KeyCode::Enter => {
                    self.grabbed = None;
                    if let Some(target) = self.selected_id() {
                        task::apply_drag_end(&mut self.store, DragEnd { source, target });
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                _ => {}
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('/') => {
                self.search_active = true;
                self.search_query.clear();
                self.cursor = 0;
            }
            KeyCode::Char('a') => {
                self.modal = Some(Modal::Add(TaskFormDialog::add()));
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if let Some(selected) = self.store.get(id) {
                        self.modal = Some(Modal::Edit(id, TaskFormDialog::edit(selected)));
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.modal = Some(Modal::ConfirmDelete(
                        id,
                        ConfirmDialog::new(
                            "Delete Task",
                            "Are you sure you want to delete this task?",
                        ),
                    ));
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle_completed(id);
                }
            }
            KeyCode::Char('m') | KeyCode::Char(' ') => {
                // Grabbing is disabled entirely when nothing is displayed
                self.grabbed = self.selected_id();
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                let len = self.display_ids().len();
                if len > 0 {
                    self.cursor = len - 1;
                }
            }
            _ => {}
        }

        None
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = &mut self.modal else {
            return;
        };

        match modal {
            Modal::Add(dialog) => match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.modal = None;
                }
                DialogResult::Submit(data) => {
                    self.modal = None;
                    self.store.add(data.title, data.description, data.due);
                }
            },
            Modal::Edit(id, dialog) => {
                let id = *id;
                match dialog.handle_key(key) {
                    DialogResult::Continue => {}
                    DialogResult::Cancel => {
                        self.modal = None;
                    }
                    DialogResult::Submit(data) => {
                        self.modal = None;
                        self.store.update(id, data.into());
                    }
                }
            }
            Modal::ConfirmDelete(id, dialog) => {
                let id = *id;
                match dialog.handle_key(key) {
                    DialogResult::Continue => {}
                    DialogResult::Cancel => {
                        self.modal = None;
                    }
                    DialogResult::Submit(()) => {
                        self.modal = None;
                        self.store.remove(id);
                        self.clamp_cursor();
                    }
                }
            }
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.display_ids().len();
        if len == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    fn clamp_cursor(&mut self) {
        let len = self.display_ids().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        self.render_list(frame, chunks[0], theme);
        self.render_detail(frame, chunks[1], theme);
        self.render_status_bar(frame, main_chunks[1], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        match &self.modal {
            Some(Modal::Add(dialog)) | Some(Modal::Edit(_, dialog)) => {
                dialog.render(frame, area, theme);
            }
            Some(Modal::ConfirmDelete(_, dialog)) => {
                dialog.render(frame, area, theme);
            }
            None => {}
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Tasks ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let ids = self.display_ids();

        if ids.is_empty() {
            let empty_text = if self.store.is_empty() {
                vec![
                    Line::from(""),
                    Line::from("You have nothing to do!").style(Style::default().fg(theme.dimmed)),
                    Line::from(""),
                    Line::from("Press 'a' to add a task").style(Style::default().fg(theme.hint)),
                ]
            } else {
                vec![
                    Line::from(""),
                    Line::from(format!("No tasks match '{}'", self.search_query))
                        .style(Style::default().fg(theme.dimmed)),
                ]
            };
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
        } else {
            let list_items: Vec<ListItem> = ids
                .iter()
                .enumerate()
                .map(|(idx, id)| self.render_item(*id, idx == self.cursor, theme))
                .collect();

            let list = List::new(list_items);
            frame.render_widget(list, inner);
        }

        if self.search_active || !self.search_query.is_empty() {
            let search_area = Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            };
            let search_text = format!("/{}", self.search_query);
            let search_para = Paragraph::new(search_text).style(Style::default().fg(theme.search));
            frame.render_widget(search_para, search_area);
        }
    }

    fn render_item(&self, id: TaskId, is_selected: bool, theme: &Theme) -> ListItem<'_> {
        let Some(item) = self.store.get(id) else {
            return ListItem::new(Line::from("?"));
        };

        let is_grabbed = self.grabbed == Some(id);

        let (icon, icon_style) = if is_grabbed {
            ("◆", Style::default().fg(theme.grabbed))
        } else if item.completed {
            ("✔", Style::default().fg(theme.done))
        } else {
            ("○", Style::default().fg(theme.text))
        };

        let mut title_style = if item.completed {
            Style::default()
                .fg(theme.dimmed)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(theme.text)
        };
        if is_selected {
            title_style = title_style.bold();
        }

        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), icon_style),
            Span::styled(item.title.clone(), title_style),
        ]);

        if is_selected {
            ListItem::new(line).style(Style::default().bg(theme.selection))
        } else {
            ListItem::new(line)
        }
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Details ")
            .title_style(Style::default().fg(theme.title));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(item) = self.selected_id().and_then(|id| self.store.get(id)) else {
            let hint = Paragraph::new("Select a task to see its details")
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        };

        let due_style = if item.is_overdue() {
            Style::default().fg(theme.overdue).bold()
        } else {
            Style::default().fg(theme.due)
        };
        let mut due_line = vec![
            Span::styled("Due: ", Style::default().fg(theme.dimmed)),
            Span::styled(item.due.format("%Y-%m-%d").to_string(), due_style),
        ];
        if item.is_overdue() {
            due_line.push(Span::styled(
                "  (overdue)",
                Style::default().fg(theme.overdue),
            ));
        } else if item.is_due_today() {
            due_line.push(Span::styled("  (today)", Style::default().fg(theme.due)));
        }

        let status = if item.completed {
            Span::styled("completed", Style::default().fg(theme.done))
        } else {
            Span::styled("open", Style::default().fg(theme.text))
        };

        let lines = vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default().fg(theme.title).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                item.description.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(due_line),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(theme.dimmed)),
                status,
            ]),
        ];

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = if self.grabbed.is_some() {
            vec![
                Span::styled(" j/k", key_style),
                Span::styled(" Pick slot ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" Enter", key_style),
                Span::styled(" Drop ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" Esc", key_style),
                Span::styled(" Cancel move", desc_style),
            ]
        } else {
            vec![
                Span::styled(" j/k", key_style),
                Span::styled(" Navigate ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" a", key_style),
                Span::styled(" Add ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" e", key_style),
                Span::styled(" Edit ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" d", key_style),
                Span::styled(" Delete ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" x", key_style),
                Span::styled(" Done ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" m", key_style),
                Span::styled(" Move ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" /", key_style),
                Span::styled(" Search ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" ?", key_style),
                Span::styled(" Help ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" q", key_style),
                Span::styled(" Quit", desc_style),
            ]
        };

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
