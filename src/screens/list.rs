use std::cell::RefCell;

use eframe::egui::{
    Align, Align2, CentralPanel, Color32, Context, Layout, Margin, RichText, Style, TopBottomPanel,
};

use crate::model::{Task, DUE_DATE_FORMAT};
use crate::store::SharedTaskStore;
use crate::themes::TaskTableStyle;
use crate::widgets::table::{
    content, Column, ResolvedTable, Sortable, Sorting, Spacer, TableConfig, Width,
};
use crate::widgets::PriorityStrip;

/// Something the user asked for while the table was drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// Edit an existing task.
    Open(String),
    /// Start a new task.
    Add,
    ToggleCompleted(String),
    Sort(Sorting),
}

/// Where the list wants to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    NewTask,
    EditTask(String),
}

/// The task table: priority strip, name, due date and done mark.
pub fn task_table<'a>(
    style: &Style,
    actions: &'a RefCell<Vec<ListAction>>,
) -> ResolvedTable<'a, Task> {
    let colors = TaskTableStyle::from(style);
    let mut table = TableConfig::new(style).id_salt("task_table");

    table
        .set_cell_defaults(|cell| cell.background = Color32::TRANSPARENT)
        .set_row_defaults(|row| {
            row.spacer = Some(Spacer::new(colors.row_gap));
            row.padding = Margin::ZERO;
        })
        .set_header_row_defaults(|header| header.background = colors.header_fill)
        .set_content_row_defaults(|row| {
            row.min_height = Some(48.0);
            row.background = colors.row_fill;
            row.on_click(move |task: &Task| {
                actions
                    .borrow_mut()
                    .push(ListAction::Open(task.id.clone()))
            });
        });

    table.column(
        Column::new("Priority", Width::fixed(16.0), |ui, task: &Task| {
            ui.add(PriorityStrip::new(task.priority));
        })
        .header_text("")
        .padding(Margin::ZERO)
        .sortable(Sortable::by_key(|task: &Task| task.priority).enabled(false)),
    );

    let description = colors.description;
    table.column(
        Column::new("Name", Width::fraction(0.65), move |ui, task: &Task| {
            ui.label(&task.name);
            if !task.description.is_empty() {
                ui.label(RichText::new(&task.description).small().color(description));
            }
        })
        .sortable(Sortable::by_key(|task: &Task| task.name.to_lowercase())),
    );

    table.column(
        Column::new(
            "Due Date",
            Width::fraction(0.25),
            content::optional_text(|task: &Task| {
                task.due_date.map(|date| date.format(DUE_DATE_FORMAT))
            }),
        )
        .sortable(Sortable::by_optional_key(|task: &Task| task.due_date)),
    );

    table.column(
        Column::new(
            "Completed",
            Width::fraction(0.1),
            content::icon(|task: &Task| task.completed.then_some("✔")),
        )
        .header_text("")
        .alignment(Align2::CENTER_CENTER)
        .on_click(move |task: &Task| {
            actions
                .borrow_mut()
                .push(ListAction::ToggleCompleted(task.id.clone()))
        }),
    );

    table.build()
}

/// The task list screen.
pub struct TaskList {
    store: SharedTaskStore,
    sorting: Sorting,
}

impl TaskList {
    pub fn new(store: SharedTaskStore, sorting: Sorting) -> Self {
        Self { store, sorting }
    }

    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    /// Apply the actions gathered during one frame.
    ///
    /// A click on the done mark also reaches the row, so toggling a task
    /// wins over opening it.
    pub fn apply(&mut self, actions: Vec<ListAction>) -> Option<Navigation> {
        let toggled = actions
            .iter()
            .any(|action| matches!(action, ListAction::ToggleCompleted(_)));

        let mut navigation = None;
        for action in actions {
            match action {
                ListAction::Sort(sorting) => self.sorting = sorting,
                ListAction::ToggleCompleted(id) => {
                    if let Err(err) = self.store.write().toggle_completed(&id) {
                        log::warn!("could not toggle task: {err}");
                    }
                }
                ListAction::Open(id) if !toggled => navigation = Some(Navigation::EditTask(id)),
                ListAction::Open(_) => {}
                ListAction::Add => navigation = Some(Navigation::NewTask),
            }
        }
        navigation
    }

    pub fn show(&mut self, ctx: &Context, dark_mode: &mut bool) -> Option<Navigation> {
        let actions = RefCell::new(Vec::new());

        TopBottomPanel::top("task_list_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tasks");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.menu_button("⚙", |ui| {
                        if ui.checkbox(dark_mode, "Dark Mode").changed() {
                            ui.close();
                        }
                        let mut show_completed = self.store.read().show_completed();
                        if ui.checkbox(&mut show_completed, "Show Completed").changed() {
                            self.store.write().set_show_completed(show_completed);
                            ui.close();
                        }
                    });
                    if ui.button("➕ Add Task").clicked() {
                        actions.borrow_mut().push(ListAction::Add);
                    }
                });
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let tasks = self.store.read().visible();
            let table = task_table(ui.style(), &actions);
            let on_sorting_change = |sorting: Sorting| actions.borrow_mut().push(ListAction::Sort(sorting));
            table.show(
                ui,
                &tasks,
                |task| task.id.clone(),
                self.sorting,
                Some(&on_sorting_change),
            );
        });

        self.apply(actions.into_inner())
    }
}
