use eframe::egui::ecolor::hex_color;
use eframe::egui::style::{Selection, WidgetVisuals, Widgets};
use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, Style, TextStyle, Visuals};

use crate::model::Priority;

/// Colors the task list paints its table with.
#[derive(Clone, Debug)]
pub struct TaskTableStyle {
    pub header_fill: Color32,
    pub row_fill: Color32,
    pub row_gap: f32,
    pub description: Color32,
}

impl From<&Style> for TaskTableStyle {
    fn from(style: &Style) -> Self {
        let visuals = &style.visuals;
        Self {
            header_fill: visuals.panel_fill,
            row_fill: visuals.faint_bg_color,
            row_gap: 2.0,
            description: visuals.weak_text_color(),
        }
    }
}

/// Signal color of a priority.
pub fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::High => hex_color!("#c1121c"),
        Priority::Medium => hex_color!("#f9a800"),
        Priority::Low => hex_color!("#308446"),
    }
}

// Color utilities: simple sRGB linear interpolation for quick palette derivation
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let r = (a.r() as f32 * (1.0 - t) + b.r() as f32 * t).round() as u8;
    let g = (a.g() as f32 * (1.0 - t) + b.g() as f32 * t).round() as u8;
    let bch = (a.b() as f32 * (1.0 - t) + b.b() as f32 * t).round() as u8;
    Color32::from_rgb(r, g, bch)
}

/// Flat visuals from four base colors.
pub fn flat(
    foreground: Color32,
    background: Color32,
    surface: Color32,
    accent: Color32,
    mut base_visuals: Visuals,
) -> Visuals {
    let border = blend(foreground, background, 0.6);
    let weak_text = blend(foreground, background, 0.45);
    let control_radius = 4.0;

    let control_fill = blend(background, foreground, 0.04);
    let control_fill_hover = blend(background, foreground, 0.08);
    let control_fill_active = blend(control_fill_hover, accent, 0.15);

    base_visuals.window_fill = background;
    base_visuals.panel_fill = background;
    base_visuals.override_text_color = None;
    base_visuals.weak_text_color = Some(weak_text);
    base_visuals.faint_bg_color = surface;
    base_visuals.extreme_bg_color = blend(background, foreground, 0.03);
    base_visuals.selection = Selection {
        bg_fill: blend(background, accent, 0.35),
        stroke: Stroke::new(1.5, accent),
    };
    base_visuals.window_stroke = Stroke::new(1.0, border);

    let widget = |bg_fill: Color32, stroke: Stroke| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: stroke,
        fg_stroke: Stroke::new(1.0, foreground),
        corner_radius: control_radius.into(),
        expansion: 0.0,
    };

    base_visuals.widgets = Widgets {
        noninteractive: WidgetVisuals {
            corner_radius: 0.0.into(),
            ..widget(surface, Stroke::new(1.0, border))
        },
        inactive: widget(control_fill, Stroke::new(1.0, border)),
        hovered: widget(control_fill_hover, Stroke::new(1.4, border)),
        active: widget(control_fill_active, Stroke::new(1.4, accent)),
        open: widget(control_fill_hover, Stroke::new(1.4, accent)),
    };

    base_visuals
}

pub fn light() -> Style {
    let mut style = Style {
        text_styles: text_styles().into_iter().collect(),
        ..Default::default()
    };

    style.visuals = flat(
        hex_color!("#1e1e1e"),
        hex_color!("#f4f4f4"),
        hex_color!("#e3e6f0"),
        hex_color!("#3b5bdb"),
        Visuals::light(),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style
}

pub fn dark() -> Style {
    let mut style = Style {
        text_styles: text_styles().into_iter().collect(),
        ..Default::default()
    };

    style.visuals = flat(
        hex_color!("#ececec"),
        hex_color!("#1b1b1f"),
        hex_color!("#2a2c35"),
        hex_color!("#91a7ff"),
        Visuals::dark(),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style
}

pub fn text_styles() -> Vec<(TextStyle, FontId)> {
    vec![
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
}

/// Whether the desktop asks for a dark theme. Unknown counts as light.
pub fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(dark_light::Mode::Light) | Ok(dark_light::Mode::Unspecified) => false,
        Err(err) => {
            log::warn!("could not detect the system theme: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(200, 0, 100);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 150));
    }

    #[test]
    fn presets_match_their_mode() {
        assert!(dark().visuals.dark_mode);
        assert!(!light().visuals.dark_mode);
    }

    #[test]
    fn priorities_have_distinct_colors() {
        let colors: Vec<_> = Priority::ALL.into_iter().map(priority_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
