//! Hierarchical tree calculator.
//!
//! Places a root card and then each level of children as a horizontally
//! centered row beneath the previous level.

use log::info;

use placard_core::{geometry::Point, item::Item};

use crate::{
    engine::{Engine, Placement},
    patterns::centered_row_xs,
};

impl Engine {
    /// Lays out a tree rooted at `root` with the given levels of children.
    ///
    /// The root card (a default item) is placed first at the root position.
    /// Level `i` is placed `(i + 1)` vertical steps below the root as a row
    /// centered on the root's x-coordinate, one horizontal step between
    /// siblings. Placements are returned in order: root, then each level
    /// left to right.
    pub fn calculate_tree_layout(&mut self, root: Point, levels: &[Vec<Item>]) -> Vec<Placement> {
        let horizontal_step = self.config().spacing().horizontal_step();
        let vertical_step = self.config().spacing().vertical_step();

        info!(levels = levels.len(); "Calculating tree layout");

        let mut placements =
            Vec::with_capacity(1 + levels.iter().map(Vec::len).sum::<usize>());
        placements.push(self.place_item(root, &Item::default()));

        for (level_index, level) in levels.iter().enumerate() {
            let y = root.y() + (level_index as f32 + 1.0) * vertical_step;
            let row_xs = centered_row_xs(root.x(), level.len(), horizontal_step);

            for (item, x) in level.iter().zip(row_xs) {
                placements.push(self.place_item(Point::new(x, y), item));
            }
        }

        placements
    }
}
