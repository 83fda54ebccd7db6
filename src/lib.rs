//! QuickTasks: a small task list built around a declarative, sortable table
//! widget for egui.
//!
//! The reusable part is [`widgets::table`]. The rest of the crate is the
//! app that uses it: a task model, an in-memory store, and a list and an
//! editor screen.

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod screens;
pub mod store;
pub mod themes;
pub mod widgets;

pub use app::QuickTasksApp;
pub use config::{AppConfig, ThemeChoice};
pub use error::{Result, TaskError};
pub use model::{Priority, Task};
pub use store::{SharedTaskStore, TaskStore};

/// Open the app window and block until it is closed.
pub fn run(config: AppConfig) -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            if let Err(err) =
                ctrlc::set_handler(move || ctx.send_viewport_cmd(eframe::egui::ViewportCommand::Close))
            {
                log::warn!("failed to set exit signal handler: {err}");
            }

            let app = QuickTasksApp::new(&config);
            app.install_themes(&cc.egui_ctx);
            log::info!("starting {} with {:?}", config.title, config.theme);

            Ok(Box::new(app))
        }),
    )
}
