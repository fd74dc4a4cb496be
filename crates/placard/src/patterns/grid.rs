//! Grid-pattern calculator.
//!
//! Assigns each item a cell in a fixed-column grid and resolves the cell's
//! corner through the safe-position search.

use log::info;

use placard_core::{geometry::Point, item::Item};

use crate::engine::{Engine, Placement};

impl Engine {
    /// Lays out `items` in a grid of `columns` columns starting at `start`.
    ///
    /// Item `i` is assigned `col = i % columns`, `row = i / columns` and a
    /// desired position of `start + (col * cell_width, row * cell_height)`.
    /// Cell dimensions come from the grid configuration when it is enabled;
    /// otherwise the spacing steps are used. With `snap_to_grid` set, the
    /// start point is snapped to the cell lattice first.
    ///
    /// A column count of zero is clamped to one rather than treated as an
    /// error.
    pub fn calculate_grid_layout(
        &mut self,
        start: Point,
        items: &[Item],
        columns: usize,
    ) -> Vec<Placement> {
        let columns = columns.max(1);
        let grid = *self.config().grid();
        let (cell_width, cell_height) = if grid.enabled() {
            (grid.cell_width(), grid.cell_height())
        } else {
            (
                self.config().spacing().horizontal_step(),
                self.config().spacing().vertical_step(),
            )
        };

        let start = if grid.enabled() && grid.snap_to_grid() {
            Point::new(
                (start.x() / cell_width).round() * cell_width,
                (start.y() / cell_height).round() * cell_height,
            )
        } else {
            start
        };

        info!(items = items.len(), columns; "Calculating grid layout");

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let col = (index % columns) as f32;
                let row = (index / columns) as f32;
                let desired =
                    start.add_point(Point::new(col * cell_width, row * cell_height));
                self.place_item(desired, item)
            })
            .collect()
    }
}
