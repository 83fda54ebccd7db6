//! Declarative table with a sticky header, sortable columns and layered
//! style defaults.
//!
//! A table is configured in two phases. A [`TableConfig`] collects columns
//! and default layers, [`TableConfig::build`] resolves the layers into an
//! immutable [`ResolvedTable`], and that is shown for the current items:
//!
//! ```ignore
//! let mut config = TableConfig::new(ui.style());
//! config.set_content_row_defaults(|row| row.min_height = Some(48.0));
//! config.column(
//!     Column::new("Name", Width::fraction(1.0), content::text(|t: &Task| t.name.clone()))
//!         .sortable(Sortable::by_key(|t: &Task| t.name.clone())),
//! );
//! config.build().show(ui, &tasks, |t| t.id.clone(), sorting, Some(&|s| next = Some(s)));
//! ```
//!
//! The sort state is owned by the caller. The table reads it and reports
//! the state a header click asks for, it never stores it.

use std::hash::Hash;

use eframe::egui::{
    self, vec2, Color32, CursorIcon, Id, Layout, Rect, ScrollArea, Sense, Shape, Ui, Vec2,
};

// -----------------------------------------------------------------=----------

/// Panic in debug builds, log otherwise.
macro_rules! log_or_panic {
    ($fmt: literal) => { log_or_panic!($fmt,) };
    ($fmt: literal, $($arg: tt)*) => {{
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            log::error!($fmt, $($arg)*);
        }
    }};
}

mod column;
pub mod content;
mod defaults;
mod plan;
mod sizing;
mod sorting;

pub use column::{Clickable, Column, Sortable, Width};
pub use defaults::{
    resolve_cell_style, CellDefaults, CellOverrides, ResolvedCellStyle, RowDefaults, Spacer,
    TextStyle,
};
pub use plan::{CellPlan, HeaderCellPlan, RowGeometry, RowPlan, TablePlan};
pub use sizing::allocate_widths;
pub use sorting::{compare_missing_last, sorted_indices, SortOrder, Sorting};

use column::Header;

// -----------------------------------------------------------------=----------

/// Collects columns and default layers for one table.
///
/// Every default layer is initialized on first use: cell defaults from the
/// ambient style, the row layer from the cell layer, header and content
/// rows from the row layer. After that a setter only edits its own layer.
pub struct TableConfig<'a, T> {
    id_salt: Id,
    ambient: CellDefaults,
    columns: Vec<Column<'a, T>>,
    cell_defaults: Option<CellDefaults>,
    row_defaults: Option<RowDefaults<'a, ()>>,
    header_row_defaults: Option<RowDefaults<'a, ()>>,
    content_row_defaults: Option<RowDefaults<'a, T>>,
}

impl<'a, T> TableConfig<'a, T> {
    pub fn new(style: &egui::Style) -> Self {
        Self::with_ambient(CellDefaults::ambient(style))
    }

    /// Start from explicit root values instead of an egui style.
    pub fn with_ambient(ambient: CellDefaults) -> Self {
        Self {
            id_salt: Id::new("table"),
            ambient,
            columns: Vec::new(),
            cell_defaults: None,
            row_defaults: None,
            header_row_defaults: None,
            content_row_defaults: None,
        }
    }

    /// Needed to tell apart several tables in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Append a column. It gets the next index, hidden or not.
    pub fn column(&mut self, mut column: Column<'a, T>) -> &Column<'a, T> {
        let index = self.columns.len();
        column.set_index(index);
        self.columns.push(column);
        &self.columns[index]
    }

    pub fn columns(&self) -> &[Column<'a, T>] {
        &self.columns
    }

    pub fn set_cell_defaults(&mut self, mutate: impl FnOnce(&mut CellDefaults)) -> &mut Self {
        self.ensure_cell_defaults();
        if let Some(cell) = self.cell_defaults.as_mut() {
            mutate(cell);
        }
        self
    }

    pub fn set_row_defaults(&mut self, mutate: impl FnOnce(&mut RowDefaults<'a, ()>)) -> &mut Self {
        self.ensure_row_defaults();
        if let Some(row) = self.row_defaults.as_mut() {
            mutate(row);
        }
        self
    }

    pub fn set_header_row_defaults(
        &mut self,
        mutate: impl FnOnce(&mut RowDefaults<'a, ()>),
    ) -> &mut Self {
        if self.header_row_defaults.is_none() {
            self.ensure_row_defaults();
            self.header_row_defaults = self.row_defaults.as_ref().map(|row| row.derive_header());
        }
        if let Some(header) = self.header_row_defaults.as_mut() {
            mutate(header);
        }
        self
    }

    pub fn set_content_row_defaults(
        &mut self,
        mutate: impl FnOnce(&mut RowDefaults<'a, T>),
    ) -> &mut Self {
        if self.content_row_defaults.is_none() {
            self.ensure_row_defaults();
            self.content_row_defaults = self.row_defaults.as_ref().map(|row| row.derive());
        }
        if let Some(content) = self.content_row_defaults.as_mut() {
            mutate(content);
        }
        self
    }

    fn ensure_cell_defaults(&mut self) {
        if self.cell_defaults.is_none() {
            self.cell_defaults = Some(self.ambient.clone());
        }
    }

    fn ensure_row_defaults(&mut self) {
        if self.row_defaults.is_none() {
            self.ensure_cell_defaults();
            self.row_defaults = self.cell_defaults.as_ref().map(RowDefaults::from_cell);
        }
    }

    /// Resolve the remaining layers and freeze the configuration.
    pub fn build(self) -> ResolvedTable<'a, T> {
        let cell_defaults = self.cell_defaults.unwrap_or(self.ambient);
        let row_defaults = self
            .row_defaults
            .unwrap_or_else(|| RowDefaults::from_cell(&cell_defaults));
        let header_row = self
            .header_row_defaults
            .unwrap_or_else(|| row_defaults.derive_header());
        let content_row = self
            .content_row_defaults
            .unwrap_or_else(|| row_defaults.derive());

        ResolvedTable {
            id_salt: self.id_salt,
            columns: self.columns,
            cell_defaults,
            row_defaults,
            header_row,
            content_row,
        }
    }
}

// -----------------------------------------------------------------=----------

/// Which handlers a click reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub row: bool,
    pub cell: bool,
}

/// What happened during one [`ResolvedTable::show`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableResponse {
    /// Content rows drawn.
    pub rows: usize,

    /// Sort state a header click asked for.
    pub sorting: Option<Sorting>,

    /// Input index of a clicked row.
    pub clicked: Option<usize>,
}

/// A finalized table configuration.
pub struct ResolvedTable<'a, T> {
    id_salt: Id,
    columns: Vec<Column<'a, T>>,
    cell_defaults: CellDefaults,
    row_defaults: RowDefaults<'a, ()>,
    header_row: RowDefaults<'a, ()>,
    content_row: RowDefaults<'a, T>,
}

impl<'a, T> ResolvedTable<'a, T> {
    pub fn columns(&self) -> &[Column<'a, T>] {
        &self.columns
    }

    pub fn cell_defaults(&self) -> &CellDefaults {
        &self.cell_defaults
    }

    pub fn row_defaults(&self) -> &RowDefaults<'a, ()> {
        &self.row_defaults
    }

    pub fn header_row_defaults(&self) -> &RowDefaults<'a, ()> {
        &self.header_row
    }

    pub fn content_row_defaults(&self) -> &RowDefaults<'a, T> {
        &self.content_row
    }

    /// A click on the header row, inside `column`'s cell if given.
    ///
    /// Fires the header row handler. On a sortable column, and only when
    /// `on_sorting_change` is set, the next sort state is reported to it
    /// and returned.
    pub fn click_header(
        &self,
        column: Option<usize>,
        sorting: Sorting,
        on_sorting_change: Option<&dyn Fn(Sorting)>,
    ) -> Option<Sorting> {
        self.header_row.fire(&());

        let column = column
            .and_then(|index| self.columns.get(index))
            .filter(|column| column.is_sortable())?;
        let on_sorting_change = on_sorting_change?;

        let next = sorting.toggled(column.index());
        log::debug!("sorting of `{}` changed: {:?} -> {:?}", column.name(), sorting, next);
        on_sorting_change(next);
        Some(next)
    }

    /// A click on the row showing `item`, inside `column`'s cell if given.
    ///
    /// The cell handler does not swallow the click, both it and the row
    /// handler run.
    pub fn click_row(&self, item: &T, column: Option<usize>) -> ClickOutcome {
        let cell = column
            .and_then(|index| self.columns.get(index))
            .and_then(|column| column.click_capability())
            .is_some_and(|clickable| clickable.fire(item));
        let row = self.content_row.fire(item);
        ClickOutcome { row, cell }
    }

    /// Draw the table into the remaining space of `ui`.
    ///
    /// The header stays in place while the rows scroll beneath it. `key`
    /// identifies an item across frames.
    pub fn show<K: Hash>(
        &self,
        ui: &mut Ui,
        items: &[T],
        key: impl Fn(&T) -> K,
        sorting: Sorting,
        on_sorting_change: Option<&dyn Fn(Sorting)>,
    ) -> TableResponse {
        let _span = tracing::trace_span!("table_show", rows = items.len()).entered();

        let plan = self.plan(items, sorting, ui.available_width());
        let indicator = plan
            .header
            .iter()
            .find_map(|header| header.sort_order.map(|order| (header.cell.column, order)));
        let mut response = TableResponse {
            rows: plan.rows.len(),
            ..Default::default()
        };

        ui.push_id(self.id_salt, |ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            let header = paint_row(
                ui,
                &self.header_row,
                &plan.geometry,
                plan.header.iter().map(|header| &header.cell),
                |ui, cell| {
                    let order = indicator
                        .filter(|(column, _)| *column == cell.column)
                        .map(|(_, order)| order);
                    self.header_contents(ui, cell, order);
                },
            );

            let sortable = |column: usize| {
                on_sorting_change.is_some()
                    && plan
                        .header
                        .iter()
                        .any(|header| header.cell.column == column && header.sortable)
            };
            if header.hovered_cell(ui).is_some_and(sortable)
                || (self.header_row.has_click_handler() && ui.rect_contains_pointer(header.rect))
            {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
            if let Some(column) = header.clicked(ui) {
                let on_sorting_change = on_sorting_change.filter(|_| column.is_some_and(sortable));
                response.sorting = self.click_header(column, sorting, on_sorting_change);
            }

            ScrollArea::vertical()
                .id_salt("body")
                .auto_shrink(false)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    for row in &plan.rows {
                        let item = &items[row.item];
                        ui.push_id(key(item), |ui| {
                            let rects = paint_row(
                                ui,
                                &self.content_row,
                                &plan.geometry,
                                &row.cells,
                                |ui, cell| self.columns[cell.column].show_content(ui, item),
                            );

                            let clickable_cell = rects.hovered_cell(ui).is_some_and(|column| {
                                self.columns[column]
                                    .click_capability()
                                    .is_some_and(|clickable| clickable.is_enabled())
                            });
                            if clickable_cell
                                || (self.content_row.has_click_handler()
                                    && ui.rect_contains_pointer(rects.rect))
                            {
                                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                            }
                            if let Some(column) = rects.clicked(ui) {
                                self.click_row(item, column);
                                response.clicked = Some(row.item);
                            }
                        });
                    }
                });
        });

        response
    }

    fn header_contents(&self, ui: &mut Ui, cell: &CellPlan, order: Option<SortOrder>) {
        let column = &self.columns[cell.column];
        let text_style = &cell.style.text_style;
        ui.horizontal(|ui| {
            match column.header_content() {
                Header::Name => {
                    ui.label(text_style.rich_text(column.name(), ui.visuals()));
                }
                Header::Text(text) => {
                    ui.label(text_style.rich_text(text.as_str(), ui.visuals()));
                }
                Header::Custom(header) => header(ui),
            }
            if let Some(order) = order {
                ui.add_space(4.0);
                ui.label(text_style.rich_text(order.glyph(), ui.visuals()));
            }
        });
    }
}

// -----------------------------------------------------------------=----------

/// Screen rects of a painted row and its cells.
struct RowRects {
    rect: Rect,
    cells: Vec<(usize, Rect)>,
}

impl RowRects {
    fn cell_at(&self, pos: egui::Pos2) -> Option<usize> {
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(column, _)| *column)
    }

    fn hovered_cell(&self, ui: &Ui) -> Option<usize> {
        if !ui.rect_contains_pointer(self.rect) {
            return None;
        }
        ui.input(|i| i.pointer.hover_pos())
            .and_then(|pos| self.cell_at(pos))
    }

    /// `Some` when the row was clicked this frame, holding the clicked
    /// cell's column if the click landed in one.
    fn clicked(&self, ui: &Ui) -> Option<Option<usize>> {
        if !ui.rect_contains_pointer(self.rect) || !ui.input(|i| i.pointer.primary_clicked()) {
            return None;
        }
        Some(
            ui.input(|i| i.pointer.interact_pos())
                .and_then(|pos| self.cell_at(pos)),
        )
    }
}

fn paint_row<'c, R>(
    ui: &mut Ui,
    defaults: &RowDefaults<'_, R>,
    geometry: &RowGeometry,
    cells: impl IntoIterator<Item = &'c CellPlan>,
    mut add_contents: impl FnMut(&mut Ui, &CellPlan),
) -> RowRects {
    let background = ui.painter().add(Shape::Noop);
    let padding = geometry.padding_for(defaults);
    let min_height = defaults
        .min_height
        .map_or(0.0, |height| (height - padding.sum().y).max(0.0));
    let max_height = defaults
        .max_height
        .map(|height| (height - padding.sum().y).max(0.0));

    let mut fills = Vec::new();
    let mut cell_rects = Vec::new();

    let frame = egui::Frame::new().inner_margin(padding).show(ui, |ui| {
        let layout = Layout::left_to_right(defaults.alignment);
        ui.allocate_ui_with_layout(vec2(ui.available_width(), min_height), layout, |ui| {
            ui.set_min_height(min_height);
            if let Some(max_height) = max_height {
                ui.set_max_height(max_height);
            }

            for (n, cell) in cells.into_iter().enumerate() {
                if n > 0 && geometry.spacing > 0.0 {
                    let color = defaults
                        .cell
                        .spacer
                        .map_or(Color32::TRANSPARENT, |spacer| spacer.color);
                    let (rect, _) =
                        ui.allocate_exact_size(vec2(geometry.spacing, 0.0), Sense::hover());
                    fills.push((ui.painter().add(Shape::Noop), rect, color));
                }

                let shape = ui.painter().add(Shape::Noop);
                let size = vec2(cell.width, min_height);
                let alignment = cell.style.alignment;
                let layout = Layout::top_down(alignment.x()).with_main_align(alignment.y());
                let rect = ui
                    .allocate_ui_with_layout(size, layout, |ui| {
                        ui.set_min_size(size);
                        ui.set_max_width(cell.width);
                        egui::Frame::new()
                            .inner_margin(cell.style.padding)
                            .show(ui, |ui| {
                                cell.style.text_style.apply(ui);
                                add_contents(ui, cell);
                            });
                    })
                    .response
                    .rect;

                fills.push((shape, rect, cell.style.background));
                cell_rects.push((cell.column, rect));
            }
        })
    });

    let rect = frame.response.rect;
    let content = frame.inner.response.rect;
    ui.painter()
        .set(background, Shape::rect_filled(rect, 0.0, defaults.background));
    for (shape, fill_rect, color) in fills {
        let fill_rect = Rect::from_x_y_ranges(fill_rect.x_range(), content.y_range());
        ui.painter().set(shape, Shape::rect_filled(fill_rect, 0.0, color));
    }
    let cells = cell_rects
        .into_iter()
        .map(|(column, cell)| (column, Rect::from_x_y_ranges(cell.x_range(), content.y_range())))
        .collect();

    if let Some(spacer) = defaults.spacer {
        gap(ui, vec2(ui.available_width(), spacer.size), spacer.color);
    }

    RowRects { rect, cells }
}

fn gap(ui: &mut Ui, size: Vec2, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 0.0, color);
    }
}
