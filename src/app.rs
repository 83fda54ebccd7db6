use eframe::egui::{Context, Theme};

use crate::config::AppConfig;
use crate::screens::{EditorOutcome, Navigation, TaskEditor, TaskList};
use crate::store::{SharedTaskStore, TaskStore};
use crate::themes;

/// What is on screen.
pub enum Screen {
    List,
    Edit(TaskEditor),
}

pub struct QuickTasksApp {
    store: SharedTaskStore,
    list: TaskList,
    screen: Screen,
    dark_mode: bool,
}

impl QuickTasksApp {
    /// App over the sample tasks.
    pub fn new(config: &AppConfig) -> Self {
        let mut store = TaskStore::with_samples();
        store.set_show_completed(config.show_completed);
        Self::with_store(store.shared(), config)
    }

    pub fn with_store(store: SharedTaskStore, config: &AppConfig) -> Self {
        Self {
            list: TaskList::new(store.clone(), config.sorting),
            store,
            screen: Screen::List,
            dark_mode: config.dark_mode(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Follow a navigation request of the list.
    pub fn navigate(&mut self, navigation: Navigation) {
        let editor = match navigation {
            Navigation::NewTask => Some(TaskEditor::new_task(self.store.clone())),
            Navigation::EditTask(id) => TaskEditor::open(self.store.clone(), &id),
        };
        if let Some(editor) = editor {
            log::debug!("opening editor for task {}", editor.task().id);
            self.screen = Screen::Edit(editor);
        }
    }

    /// Install both theme styles on `ctx` and pick the current one.
    pub fn install_themes(&self, ctx: &Context) {
        ctx.set_style_of(Theme::Light, themes::light());
        ctx.set_style_of(Theme::Dark, themes::dark());
        ctx.set_theme(self.theme());
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// One frame of the app.
    pub fn ui(&mut self, ctx: &Context) {
        let dark_mode = self.dark_mode;

        let navigation = match &mut self.screen {
            Screen::List => self.list.show(ctx, &mut self.dark_mode),
            Screen::Edit(editor) => {
                if editor.show(ctx) == EditorOutcome::Close {
                    log::debug!("back to the task list");
                    self.screen = Screen::List;
                }
                None
            }
        };
        if let Some(navigation) = navigation {
            self.navigate(navigation);
        }

        if dark_mode != self.dark_mode {
            log::info!("dark mode: {}", self.dark_mode);
            ctx.set_theme(self.theme());
        }
    }
}

impl eframe::App for QuickTasksApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeChoice;

    fn app() -> QuickTasksApp {
        QuickTasksApp::new(&AppConfig::default().theme(ThemeChoice::Light))
    }

    #[test]
    fn navigation_opens_the_editor() {
        let mut app = app();
        assert!(matches!(app.screen(), Screen::List));

        app.navigate(Navigation::EditTask("1".into()));
        match app.screen() {
            Screen::Edit(editor) => assert_eq!(editor.task().id, "1"),
            Screen::List => panic!("editor did not open"),
        }
    }

    #[test]
    fn unknown_tasks_stay_on_the_list() {
        let mut app = app();
        app.navigate(Navigation::EditTask("missing".into()));
        assert!(matches!(app.screen(), Screen::List));
    }

    #[test]
    fn new_tasks_open_an_empty_editor() {
        let mut app = app();
        app.navigate(Navigation::NewTask);
        match app.screen() {
            Screen::Edit(editor) => assert!(editor.is_new()),
            Screen::List => panic!("editor did not open"),
        }
    }

    #[test]
    fn a_frame_renders_headless() {
        let mut app = app();
        let ctx = Context::default();
        app.install_themes(&ctx);
        let _ = ctx.run(eframe::egui::RawInput::default(), |ctx| app.ui(ctx));
        assert!(!app.dark_mode());
        assert!(matches!(app.screen(), Screen::List));
    }
}
