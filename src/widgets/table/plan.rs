//! What a render pass draws, computed without touching egui.

use eframe::egui::Margin;

use super::defaults::{resolve_cell_style, ResolvedCellStyle, RowDefaults};
use super::sizing::allocate_widths;
use super::sorting::{active_sort, sorted_indices, SortOrder, Sorting};
use super::{Column, ResolvedTable, Width};

/// One visible cell: which column, how wide, how it looks.
#[derive(Clone, Debug, PartialEq)]
pub struct CellPlan {
    pub column: usize,
    pub width: f32,
    pub style: ResolvedCellStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCellPlan {
    pub cell: CellPlan,

    /// Set on the column the rows are actually sorted by.
    pub sort_order: Option<SortOrder>,

    /// The column has an enabled sort capability.
    pub sortable: bool,
}

/// One content row. `item` indexes into the slice handed to the table.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub item: usize,
    pub cells: Vec<CellPlan>,
}

/// Horizontal layout every row shares, taken from the content row so
/// header cells sit above their column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowGeometry {
    /// Only `left` and `right` are used.
    pub padding: Margin,

    /// Gap between two neighbouring cells.
    pub spacing: f32,
}

impl RowGeometry {
    fn of<R>(row: &RowDefaults<'_, R>) -> Self {
        Self {
            padding: Margin {
                top: 0,
                bottom: 0,
                ..row.padding
            },
            spacing: row.cell.spacer.map_or(0.0, |spacer| spacer.size),
        }
    }

    /// `row`'s vertical padding inside this geometry's horizontal one.
    pub fn padding_for<R>(&self, row: &RowDefaults<'_, R>) -> Margin {
        Margin {
            top: row.padding.top,
            bottom: row.padding.bottom,
            ..self.padding
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TablePlan {
    pub geometry: RowGeometry,
    pub header: Vec<HeaderCellPlan>,
    pub rows: Vec<RowPlan>,
}

impl TablePlan {
    /// Input indices in display order.
    pub fn order(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.item).collect()
    }
}

fn visible_cells<T, R>(
    visible: &[&Column<'_, T>],
    widths: &[f32],
    row: &RowDefaults<'_, R>,
) -> Vec<CellPlan> {
    visible
        .iter()
        .zip(widths)
        .map(|(column, &width)| CellPlan {
            column: column.index(),
            width,
            style: resolve_cell_style(column.overrides(), &row.cell),
        })
        .collect()
}

impl<T> ResolvedTable<'_, T> {
    /// Lay out a pass over `items` sorted per `sorting` in `available_width`.
    pub fn plan(&self, items: &[T], sorting: Sorting, available_width: f32) -> TablePlan {
        let effective = active_sort(&self.columns, sorting).map(|(_, order)| order);

        let geometry = RowGeometry::of(&self.content_row);
        let visible: Vec<&Column<'_, T>> = self.columns.iter().filter(|c| c.is_visible()).collect();
        let declared: Vec<Width> = visible.iter().map(|c| c.width()).collect();
        let widths = allocate_widths(
            &declared,
            available_width - geometry.padding.sum().x,
            geometry.spacing,
        );

        let header = visible_cells(&visible, &widths, &self.header_row)
            .into_iter()
            .map(|cell| {
                let column = &self.columns[cell.column];
                HeaderCellPlan {
                    sort_order: effective.filter(|_| sorting.order_for(cell.column).is_some()),
                    sortable: column.is_sortable(),
                    cell,
                }
            })
            .collect();

        let cells = visible_cells(&visible, &widths, &self.content_row);
        let rows = sorted_indices(items, &self.columns, sorting)
            .into_iter()
            .map(|item| RowPlan {
                item,
                cells: cells.clone(),
            })
            .collect();

        TablePlan {
            geometry,
            header,
            rows,
        }
    }
}
