use chrono::{Local, NaiveDate};
use eframe::egui::{
    Align, Button, CentralPanel, Context, Id, Layout, Modal, RichText, TextEdit, TopBottomPanel, Ui,
};
use egui_extras::DatePickerButton;

use crate::error::Result;
use crate::model::{format_due_date, parse_due_date, Priority, Task};
use crate::store::SharedTaskStore;
use crate::widgets::PriorityStrip;

/// Confirmation the editor is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Confirm {
    Delete,
    Discard,
}

/// Whether the editor stays open after this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorOutcome {
    Open,
    Close,
}

/// Edits a copy of one task and writes it back on save.
pub struct TaskEditor {
    store: SharedTaskStore,
    original: Task,
    task: Task,
    due_date: String,
    is_new: bool,
    confirm: Option<Confirm>,
}

impl TaskEditor {
    /// Editor for a task that is not in the store yet.
    pub fn new_task(store: SharedTaskStore) -> Self {
        Self::with_task(store, Task::new(), true)
    }

    /// Editor for the stored task `id`, `None` if there is no such task.
    pub fn open(store: SharedTaskStore, id: &str) -> Option<Self> {
        let task = store.read().get(id).cloned();
        match task {
            Some(task) => Some(Self::with_task(store, task, false)),
            None => {
                log::warn!("cannot edit unknown task {id}");
                None
            }
        }
    }

    fn with_task(store: SharedTaskStore, task: Task, is_new: bool) -> Self {
        Self {
            store,
            due_date: format_due_date(task.due_date),
            original: task.clone(),
            task,
            is_new,
            confirm: None,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// The due date as typed.
    pub fn due_date_input(&self) -> &str {
        &self.due_date
    }

    pub fn set_due_date_input(&mut self, input: impl Into<String>) {
        self.due_date = input.into();
    }

    /// Replace the typed due date with one picked from the calendar.
    pub fn pick_due_date(&mut self, date: NaiveDate) {
        self.due_date = format_due_date(Some(date));
    }

    /// The edited task as it would be saved.
    pub fn edited(&self) -> Result<Task> {
        let task = Task {
            due_date: parse_due_date(&self.due_date)?,
            ..self.task.clone()
        };
        task.validate()?;
        Ok(task)
    }

    /// Whether saving would change anything. Unparsable input counts as a change.
    pub fn has_changes(&self) -> bool {
        match parse_due_date(&self.due_date) {
            Ok(due_date) => {
                let task = Task {
                    due_date,
                    ..self.task.clone()
                };
                task != self.original
            }
            Err(_) => true,
        }
    }

    pub fn can_save(&self) -> bool {
        self.has_changes() && self.edited().is_ok()
    }

    /// Write the task to the store.
    pub fn save(&mut self) -> Result<()> {
        let task = self.edited()?;
        {
            let mut store = self.store.write();
            if self.is_new {
                store.add(task.clone());
            } else {
                store.update(task.clone())?;
            }
        }
        log::info!("saved task {}", task.id);
        self.original = task.clone();
        self.task = task;
        self.is_new = false;
        Ok(())
    }

    /// Remove the task from the store.
    pub fn delete(&mut self) -> Result<()> {
        let removed = self.store.write().remove(&self.task.id)?;
        log::info!("deleted task {}", removed.id);
        Ok(())
    }

    /// Leave the editor, asking first if there are unsaved changes.
    pub fn request_close(&mut self) -> EditorOutcome {
        if self.has_changes() {
            self.confirm = Some(Confirm::Discard);
            EditorOutcome::Open
        } else {
            EditorOutcome::Close
        }
    }

    pub fn show(&mut self, ctx: &Context) -> EditorOutcome {
        let mut outcome = EditorOutcome::Open;

        TopBottomPanel::top("task_editor_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⬅").on_hover_text("Back").clicked() {
                    outcome = self.request_close();
                }
                ui.heading(if self.is_new { "New Task" } else { "Edit Task" });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .add_enabled(!self.is_new, Button::new("🗑 Delete"))
                        .clicked()
                    {
                        self.confirm = Some(Confirm::Delete);
                    }
                });
            });
        });

        TopBottomPanel::bottom("task_editor_actions").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(self.can_save(), Button::new("Save")).clicked() {
                    match self.save() {
                        Ok(()) => outcome = EditorOutcome::Close,
                        Err(err) => log::warn!("could not save task: {err}"),
                    }
                }
                if ui.button("Cancel").clicked() {
                    outcome = self.request_close();
                }
            });
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| self.form(ui));

        if let Some(confirm) = self.confirm {
            if let Some(next) = self.confirm_dialog(ctx, confirm) {
                outcome = next;
            }
        }

        outcome
    }

    fn form(&mut self, ui: &mut Ui) {
        ui.label("Name");
        ui.add(
            TextEdit::singleline(&mut self.task.name)
                .hint_text("What needs doing?")
                .desired_width(f32::INFINITY),
        );
        if self.task.name.trim().is_empty() && self.has_changes() {
            ui.colored_label(ui.visuals().error_fg_color, "A task needs a name");
        }

        ui.label("Description");
        ui.add(
            TextEdit::multiline(&mut self.task.description)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.checkbox(&mut self.task.completed, "Completed");

        ui.separator();
        ui.label("Priority");
        for priority in Priority::ALL {
            ui.horizontal(|ui| {
                ui.add(PriorityStrip::new(priority).height(18.0));
                ui.radio_value(&mut self.task.priority, priority, priority.label());
            });
        }

        ui.separator();
        ui.label("Due date");
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.due_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(160.0),
            );
            let mut picked = parse_due_date(&self.due_date)
                .ok()
                .flatten()
                .unwrap_or_else(|| Local::now().date_naive());
            if ui
                .add(DatePickerButton::new(&mut picked).id_salt("task_due_date"))
                .changed()
            {
                self.pick_due_date(picked);
            }
        });
        if let Err(err) = parse_due_date(&self.due_date) {
            ui.label(RichText::new(err.to_string()).color(ui.visuals().error_fg_color));
        }
    }

    fn confirm_dialog(&mut self, ctx: &Context, confirm: Confirm) -> Option<EditorOutcome> {
        let (message, action) = match confirm {
            Confirm::Delete => ("Delete this task?", "Delete"),
            Confirm::Discard => ("Discard unsaved changes?", "Discard"),
        };

        let mut outcome = None;
        let modal = Modal::new(Id::new("task_editor_confirm")).show(ctx, |ui| {
            ui.set_width(240.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(action).clicked() {
                    outcome = Some(match confirm {
                        Confirm::Delete => match self.delete() {
                            Ok(()) => EditorOutcome::Close,
                            Err(err) => {
                                log::warn!("could not delete task: {err}");
                                EditorOutcome::Open
                            }
                        },
                        Confirm::Discard => EditorOutcome::Close,
                    });
                }
                if ui.button("Keep editing").clicked() {
                    outcome = Some(EditorOutcome::Open);
                }
            });
        });

        if outcome.is_some() || modal.should_close() {
            self.confirm = None;
        }
        outcome
    }
}
