//! Flow (word-wrap) calculator.
//!
//! Packs items left-to-right and wraps to a new row when the next item
//! would extend past the configured maximum row width.

use log::info;

use placard_core::{geometry::Point, item::Item};

use crate::engine::{Engine, Placement};

impl Engine {
    /// Packs `items` into rows starting at `start`, at most `max_width`
    /// wide.
    ///
    /// Items advance left-to-right with the packing gap between them.
    /// When the next item's right edge would pass `start.x + max_width`,
    /// the cursor wraps to a new row below the tallest item seen in the
    /// current row. Each item keeps its own kind-derived (or explicit)
    /// dimensions.
    pub fn calculate_flow_layout(
        &mut self,
        start: Point,
        max_width: f32,
        items: &[Item],
    ) -> Vec<Placement> {
        let gap = self.config().spacing().packing_gap();

        info!(items = items.len(), max_width; "Calculating flow layout");

        let mut placements = Vec::with_capacity(items.len());
        let mut cursor = start;
        let mut row_height: f32 = 0.0;

        for item in items {
            let size = item.resolved_size();

            // Wrap before the item that would overflow the row. The first
            // item of a row is never wrapped, even if wider than the row.
            if cursor.x() > start.x() && cursor.x() + size.width() > start.x() + max_width {
                cursor = Point::new(start.x(), cursor.y() + row_height + gap);
                row_height = 0.0;
            }

            placements.push(self.place_item(cursor, item));

            cursor = cursor.with_x(cursor.x() + size.width() + gap);
            row_height = row_height.max(size.height());
        }

        placements
    }
}
