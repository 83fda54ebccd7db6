use eframe::egui::{vec2, Response, Sense, Ui, Widget};

use crate::model::Priority;
use crate::themes::priority_color;

/// Vertical bar in the signal color of a priority.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct PriorityStrip {
    priority: Priority,
    width: f32,
    height: Option<f32>,
}

impl PriorityStrip {
    pub fn new(priority: Priority) -> Self {
        Self {
            priority,
            width: 4.0,
            height: None,
        }
    }

    #[inline]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Fixed height. By default the strip fills the available height.
    #[inline]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

impl Widget for PriorityStrip {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = self
            .height
            .unwrap_or_else(|| ui.available_height())
            .max(ui.spacing().interact_size.y);
        let (rect, response) = ui.allocate_exact_size(vec2(self.width, height), Sense::hover());
        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, 0.0, priority_color(self.priority));
        }
        response.on_hover_text(self.priority.label())
    }
}
