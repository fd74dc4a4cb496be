//! Layout-quality reporting.
//!
//! [`LayoutReport`] is a derived, read-only snapshot of one session's
//! occupied space. The collision scan is independent of whatever the
//! placement search did, which makes it the authoritative signal of an
//! invariant violation (fallback placements in particular).

use log::debug;
use serde::Serialize;

use placard_core::geometry::Bounds;

use crate::engine::Engine;

/// A snapshot of the layout quality of one placement session.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    total_items: usize,
    bounding_box: Bounds,
    density: f32,
    collisions: Vec<(usize, usize)>,
}

impl LayoutReport {
    /// Returns the number of cards placed in the session
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the bounding box enclosing every placed card.
    ///
    /// A zero-size box when the session is empty.
    pub fn bounding_box(&self) -> Bounds {
        self.bounding_box
    }

    /// Returns the summed card area as a percentage of the bounding-box
    /// area.
    ///
    /// Reported as 0 when the bounding-box area is zero. Note the metric's
    /// limit: a single card always yields 100% since the box is exactly the
    /// card.
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Returns every overlapping pair of placed cards, as indices into the
    /// session's placement order.
    pub fn collisions(&self) -> &[(usize, usize)] {
        &self.collisions
    }
}

impl Engine {
    /// Computes a [`LayoutReport`] over the session's occupied space.
    ///
    /// The collision list is an exhaustive O(n²) pairwise scan using the
    /// same padded predicate as the placement search, so it also catches
    /// overlaps introduced by unverified fallback placements. An empty
    /// session yields a zeroed report rather than an error.
    pub fn generate_report(&self) -> LayoutReport {
        let occupied = self.occupied();
        let padding = self.config().spacing().minimum_padding();

        let bounding_box = occupied
            .iter()
            .map(|rect| rect.bounds())
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default();

        let box_area = bounding_box.area();
        let density = if box_area > 0.0 {
            let item_area: f32 = occupied.iter().map(|rect| rect.area()).sum();
            item_area / box_area * 100.0
        } else {
            0.0
        };

        let mut collisions = Vec::new();
        for (i, a) in occupied.iter().enumerate() {
            for (j, b) in occupied.iter().enumerate().skip(i + 1) {
                if a.overlaps_padded(*b, padding) {
                    collisions.push((i, j));
                }
            }
        }

        debug!(
            total_items = occupied.len(),
            density,
            collisions = collisions.len();
            "Generated layout report"
        );

        LayoutReport {
            total_items: occupied.len(),
            bounding_box,
            density,
            collisions,
        }
    }
}
