//! Ready-made cell contents for [`super::Column::new`].

use std::fmt::Display;

use eframe::egui::{pos2, vec2, Checkbox, RadioButton, Response, RichText, Sense, StrokeKind, Ui};

/// A label showing the value `value` extracts from the row item.
pub fn text<'a, T, V: Display>(value: impl Fn(&T) -> V + 'a) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        ui.label(value(item).to_string());
    }
}

/// Like [`text`], but the cell stays empty when there is no value.
pub fn optional_text<'a, T, V: Display>(
    value: impl Fn(&T) -> Option<V> + 'a,
) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        if let Some(value) = value(item) {
            ui.label(value.to_string());
        }
    }
}

/// A number with exactly `precision` fraction digits.
pub fn number<'a, T>(value: impl Fn(&T) -> f64 + 'a, precision: usize) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        ui.label(format_number(value(item), precision));
    }
}

/// A read-only checkbox. Pair it with [`super::Column::on_click`] to toggle.
pub fn checkbox<'a, T>(value: impl Fn(&T) -> bool + 'a) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        let mut checked = value(item);
        ui.add_enabled(false, Checkbox::without_text(&mut checked));
    }
}

/// A read-only radio button.
pub fn radio<'a, T>(selected: impl Fn(&T) -> bool + 'a) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        ui.add_enabled(false, RadioButton::new(selected(item), ""));
    }
}

/// A read-only on/off switch.
pub fn switch<'a, T>(on: impl Fn(&T) -> bool + 'a) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        paint_switch(ui, on(item));
    }
}

/// A glyph such as `"✔"`, drawn a little larger than body text. Nothing is
/// drawn for `None`.
pub fn icon<'a, T>(glyph: impl Fn(&T) -> Option<&'static str> + 'a) -> impl Fn(&mut Ui, &T) + 'a {
    move |ui: &mut Ui, item: &T| {
        if let Some(glyph) = glyph(item) {
            ui.label(RichText::new(glyph).size(18.0));
        }
    }
}

fn paint_switch(ui: &mut Ui, on: bool) -> Response {
    let size = ui.spacing().interact_size.y * vec2(2.0, 1.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact_selectable(&response, on);
        let radius = 0.5 * rect.height();
        ui.painter()
            .rect(rect, radius, visuals.bg_fill, visuals.bg_stroke, StrokeKind::Inside);
        let x = if on {
            rect.right() - radius
        } else {
            rect.left() + radius
        };
        ui.painter().circle(
            pos2(x, rect.center().y),
            0.75 * radius,
            visuals.bg_fill,
            visuals.fg_stroke,
        );
    }
    response
}

pub fn format_number(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_their_precision() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(2.0, 0), "2");
        assert_eq!(format_number(0.5, 3), "0.500");
    }

    #[test]
    fn switches_are_twice_as_wide_as_tall() {
        let ctx = eframe::egui::Context::default();
        let mut sizes = Vec::new();
        let _ = ctx.run(eframe::egui::RawInput::default(), |ctx| {
            eframe::egui::CentralPanel::default().show(ctx, |ui| {
                sizes.push(paint_switch(ui, true).rect.size());
                sizes.push(paint_switch(ui, false).rect.size());
            });
        });

        let height = eframe::egui::Style::default().spacing.interact_size.y;
        assert!(!sizes.is_empty());
        assert!(sizes.iter().all(|size| *size == vec2(2.0 * height, height)), "{sizes:?}");
    }
}
