//! Layered style defaults for table cells and rows.
//!
//! Cell defaults are the root layer. Row defaults embed a copy of them and
//! the header and content rows each copy the row layer. Every copy is a
//! value copy, so editing a layer never reaches one derived before.

use std::fmt;

use eframe::egui::{self, Align, Align2, Color32, FontId, Margin, RichText, Ui, Visuals};

/// Font and color of text inside a cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_id: FontId,
    pub color: Color32,

    /// Render with the theme's strong text color, egui's stand-in for bold.
    pub strong: bool,
}

impl TextStyle {
    /// Body text in the ambient text color of `style`.
    pub fn ambient(style: &egui::Style) -> Self {
        Self {
            font_id: egui::TextStyle::Body.resolve(style),
            color: style.visuals.text_color(),
            strong: false,
        }
    }

    #[inline]
    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    #[inline]
    pub fn size(mut self, size: f32) -> Self {
        self.font_id.size = size;
        self
    }

    #[inline]
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    fn effective_color(&self, visuals: &Visuals) -> Color32 {
        if self.strong {
            visuals.strong_text_color()
        } else {
            self.color
        }
    }

    /// `text` in this style.
    pub fn rich_text(&self, text: impl Into<String>, visuals: &Visuals) -> RichText {
        RichText::new(text)
            .font(self.font_id.clone())
            .color(self.effective_color(visuals))
    }

    /// Make this the default text style of everything added to `ui`.
    pub fn apply(&self, ui: &mut Ui) {
        let color = self.effective_color(ui.visuals());
        ui.style_mut().override_font_id = Some(self.font_id.clone());
        ui.visuals_mut().override_text_color = Some(color);
    }
}

/// Gap drawn between cells or after a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    pub size: f32,
    pub color: Color32,
}

impl Spacer {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: Color32::TRANSPARENT,
        }
    }

    #[inline]
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }
}

/// Root default layer: styling of a single cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellDefaults {
    pub alignment: Align2,
    pub padding: Margin,
    pub background: Color32,
    pub text_style: TextStyle,

    /// Drawn between two neighbouring cells of a row.
    pub spacer: Option<Spacer>,
}

impl CellDefaults {
    /// Defaults derived from the ambient egui style.
    pub fn ambient(style: &egui::Style) -> Self {
        Self {
            alignment: Align2::LEFT_TOP,
            padding: Margin::same(4),
            background: Color32::TRANSPARENT,
            text_style: TextStyle::ambient(style),
            spacer: None,
        }
    }
}

/// Row default layer, generic over what a click on the row receives.
pub struct RowDefaults<'a, R> {
    pub cell: CellDefaults,
    pub alignment: Align,
    pub padding: Margin,
    pub background: Color32,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,

    /// Drawn below the row.
    pub spacer: Option<Spacer>,
    on_click: Option<Box<dyn Fn(&R) + 'a>>,
}

impl<'a, R> RowDefaults<'a, R> {
    pub fn from_cell(cell: &CellDefaults) -> Self {
        Self {
            cell: cell.clone(),
            alignment: Align::TOP,
            padding: Margin::ZERO,
            background: cell.background,
            min_height: None,
            max_height: None,
            spacer: None,
            on_click: None,
        }
    }

    /// Handler fired by a click anywhere in the row.
    pub fn on_click(&mut self, on_click: impl Fn(&R) + 'a) {
        self.on_click = Some(Box::new(on_click));
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    pub(crate) fn fire(&self, row: &R) -> bool {
        match &self.on_click {
            Some(on_click) => {
                on_click(row);
                true
            }
            None => false,
        }
    }

    /// Copy every field into a layer for another row kind.
    ///
    /// Click handlers belong to one row kind and are not copied.
    pub fn derive<S>(&self) -> RowDefaults<'a, S> {
        RowDefaults {
            cell: self.cell.clone(),
            alignment: self.alignment,
            padding: self.padding,
            background: self.background,
            min_height: self.min_height,
            max_height: self.max_height,
            spacer: self.spacer,
            on_click: None,
        }
    }

    /// Copy for the header row: like [`Self::derive`] with strong text.
    pub fn derive_header<S>(&self) -> RowDefaults<'a, S> {
        let mut header = self.derive();
        header.cell.text_style.strong = true;
        header
    }
}

impl<R> fmt::Debug for RowDefaults<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowDefaults")
            .field("cell", &self.cell)
            .field("alignment", &self.alignment)
            .field("padding", &self.padding)
            .field("background", &self.background)
            .field("min_height", &self.min_height)
            .field("max_height", &self.max_height)
            .field("spacer", &self.spacer)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Per-column overrides. `None` falls back to the row kind's cell defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellOverrides {
    pub alignment: Option<Align2>,
    pub padding: Option<Margin>,
    pub background: Option<Color32>,
    pub text_style: Option<TextStyle>,
}

/// Fully resolved style of one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCellStyle {
    pub alignment: Align2,
    pub padding: Margin,
    pub background: Color32,
    pub text_style: TextStyle,
}

/// Column override first, then the row kind's cell defaults.
pub fn resolve_cell_style(overrides: &CellOverrides, defaults: &CellDefaults) -> ResolvedCellStyle {
    ResolvedCellStyle {
        alignment: overrides.alignment.unwrap_or(defaults.alignment),
        padding: overrides.padding.unwrap_or(defaults.padding),
        background: overrides.background.unwrap_or(defaults.background),
        text_style: overrides
            .text_style
            .clone()
            .unwrap_or_else(|| defaults.text_style.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_defaults_follow_the_style() {
        let style = egui::Style::default();
        let cell = CellDefaults::ambient(&style);

        assert_eq!(cell.text_style.color, style.visuals.text_color());
        assert_eq!(cell.text_style.font_id, egui::TextStyle::Body.resolve(&style));
        assert_eq!(cell.alignment, Align2::LEFT_TOP);
        assert!(!cell.text_style.strong);
    }

    #[test]
    fn header_derivation_only_changes_strength() {
        let cell = CellDefaults::ambient(&egui::Style::default());
        let mut row: RowDefaults<'_, ()> = RowDefaults::from_cell(&cell);
        row.min_height = Some(20.0);
        row.on_click(|_| {});

        let header: RowDefaults<'_, ()> = row.derive_header();
        let content: RowDefaults<'_, u32> = row.derive();

        assert!(header.cell.text_style.strong);
        assert!(!content.cell.text_style.strong);
        assert_eq!(header.min_height, Some(20.0));
        assert_eq!(content.cell.padding, cell.padding);
        assert!(!header.has_click_handler());
        assert!(!content.has_click_handler());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let defaults = CellDefaults::ambient(&egui::Style::default());
        let overrides = CellOverrides {
            background: Some(Color32::RED),
            padding: Some(Margin::ZERO),
            ..Default::default()
        };

        let resolved = resolve_cell_style(&overrides, &defaults);
        assert_eq!(resolved.background, Color32::RED);
        assert_eq!(resolved.padding, Margin::ZERO);
        assert_eq!(resolved.alignment, defaults.alignment);
        assert_eq!(resolved.text_style, defaults.text_style);
    }
}
