use eframe::egui::{self, Vec2};

use crate::widgets::table::{SortOrder, Sorting};

/// Column the list sorts by on startup.
pub const NAME_COLUMN: usize = 1;

/// Which theme the app starts in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Follow the desktop.
    #[default]
    System,
}

impl ThemeChoice {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" | "auto" => Some(Self::System),
            _ => None,
        }
    }
}

/// Startup settings of the app.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: Vec2,
    pub min_window_size: Vec2,
    pub theme: ThemeChoice,
    pub show_completed: bool,
    pub sorting: Sorting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "QuickTasks".to_owned(),
            window_size: egui::vec2(496.0, 1046.0),
            min_window_size: egui::vec2(320.0, 400.0),
            theme: ThemeChoice::System,
            show_completed: false,
            sorting: Sorting::sort_by(NAME_COLUMN, SortOrder::Ascending),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `QUICKTASKS_THEME` and `QUICKTASKS_SHOW_COMPLETED`.
    pub fn from_env() -> Self {
        Self::default().with_vars(|name| std::env::var(name).ok())
    }

    /// Overlay settings looked up through `var`.
    pub fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = var("QUICKTASKS_THEME") {
            match ThemeChoice::parse(&value) {
                Some(theme) => self.theme = theme,
                None => log::warn!("ignoring QUICKTASKS_THEME={value:?}, expected light, dark or system"),
            }
        }
        if let Some(value) = var("QUICKTASKS_SHOW_COMPLETED") {
            match value.trim() {
                "1" | "true" | "yes" => self.show_completed = true,
                "0" | "false" | "no" => self.show_completed = false,
                _ => log::warn!("ignoring QUICKTASKS_SHOW_COMPLETED={value:?}"),
            }
        }
        self
    }

    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn theme(mut self, theme: ThemeChoice) -> Self {
        self.theme = theme;
        self
    }

    #[inline]
    pub fn show_completed(mut self, show_completed: bool) -> Self {
        self.show_completed = show_completed;
        self
    }

    #[inline]
    pub fn sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = sorting;
        self
    }

    /// Resolve [`ThemeChoice::System`] against the desktop.
    pub fn dark_mode(&self) -> bool {
        match self.theme {
            ThemeChoice::Light => false,
            ThemeChoice::Dark => true,
            ThemeChoice::System => crate::themes::system_prefers_dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn defaults_sort_by_name() {
        let config = AppConfig::default();
        assert_eq!(config.sorting, Sorting::sort_by(1, SortOrder::Ascending));
        assert!(!config.show_completed);
        assert_eq!(config.window_size, egui::vec2(496.0, 1046.0));
    }

    #[test]
    fn environment_overlays_defaults() {
        let config = AppConfig::default().with_vars(vars(&[
            ("QUICKTASKS_THEME", "Dark"),
            ("QUICKTASKS_SHOW_COMPLETED", "yes"),
        ]));
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(config.show_completed);
        assert!(config.dark_mode());
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = AppConfig::default().with_vars(vars(&[
            ("QUICKTASKS_THEME", "purple"),
            ("QUICKTASKS_SHOW_COMPLETED", "maybe"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
