//! The placement session: occupied space and the safe-position search.
//!
//! [`Engine`] owns the list of already-placed rectangles for one layout
//! session and answers the single question everything else is built on:
//! "where can this box go without overlapping the boxes already there?"
//! The pattern calculators in [`crate::patterns`] are pure orchestration
//! over repeated calls to [`Engine::find_safe_position`].

use log::{debug, trace, warn};
use serde::Serialize;

use placard_core::{
    geometry::{Point, Rect, Size},
    item::{Item, ItemKind},
};

use crate::{
    config::{EngineConfig, FALLBACK_STEP, MAX_SEARCH_ATTEMPTS},
    error::PlacardError,
};

/// The outcome of one placement request.
///
/// `was_fallback` is true when the bounded search exhausted its attempts
/// and the engine fell back to a count-proportional offset. A fallback
/// position is *not* verified against the occupied list; callers wanting a
/// hard guarantee should check [`crate::report::LayoutReport::collisions`]
/// afterwards, or retry from a different desired position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    position: Point,
    size: Size,
    was_fallback: bool,
}

impl Placement {
    /// Returns the accepted top-left position
    pub fn position(self) -> Point {
        self.position
    }

    /// Returns the resolved dimensions of the placed card
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns whether the position came from the exhaustion fallback
    pub fn was_fallback(self) -> bool {
        self.was_fallback
    }

    /// Returns the placed card as a rectangle
    pub fn rect(self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// A card-placement session.
///
/// The engine instance *is* the session: it owns the occupied-space list
/// and there is no shared or module-level state. Construct one engine per
/// layout computation, or call [`Engine::reset`] between unrelated
/// computations on the same instance; stale obstacles from a prior session
/// would otherwise constrain the new one.
///
/// The occupied-space list is ordinary mutable state with no
/// synchronization, so an instance must not be shared across concurrent
/// callers without external locking.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    occupied: Vec<Rect>,
}

impl Engine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::InvalidConfig`] when the configuration fails
    /// validation (negative gaps, non-positive steps or cells).
    pub fn new(config: EngineConfig) -> Result<Self, PlacardError> {
        config.validate()?;
        Ok(Self {
            config,
            occupied: Vec::new(),
        })
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rectangles accepted so far in this session
    pub fn occupied(&self) -> &[Rect] {
        &self.occupied
    }

    /// Returns the number of cards placed so far in this session
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Clears the occupied-space list, starting a new independent session
    pub fn reset(&mut self) {
        debug!(discarded = self.occupied.len(); "Resetting placement session");
        self.occupied.clear();
    }

    /// Finds a position at or near `desired` that does not conflict with
    /// any card already placed in this session.
    ///
    /// Dimensions are taken from `size` when given, otherwise from the
    /// `kind` lookup table. The candidate is tested against every occupied
    /// rectangle with the configured minimum padding; when the desired
    /// position is free it is returned unchanged (the common,
    /// zero-displacement case).
    ///
    /// On conflict the search probes deterministic alternatives for up to
    /// [`MAX_SEARCH_ATTEMPTS`], alternating between stepping the candidate
    /// rightward by the horizontal step and resetting x while stepping
    /// downward by the vertical step, producing a zig-zag
    /// rightward-then-downward probe pattern. If every attempt conflicts,
    /// the engine falls back to `desired` offset by
    /// `placed_count * FALLBACK_STEP` on both axes and returns that
    /// position *without* further verification (see [`Placement`]).
    ///
    /// Every call, success or fallback, appends the resulting rectangle to
    /// the occupied-space list, so subsequent calls see it as an obstacle.
    pub fn find_safe_position(
        &mut self,
        desired: Point,
        size: Option<Size>,
        kind: ItemKind,
    ) -> Placement {
        let size = size.unwrap_or_else(|| kind.nominal_size());
        let horizontal_step = self.config.spacing().horizontal_step();
        let vertical_step = self.config.spacing().vertical_step();

        let mut candidate = Rect::new(desired, size);
        for attempt in 0..=MAX_SEARCH_ATTEMPTS {
            if self.is_free(candidate) {
                if attempt > 0 {
                    debug!(
                        attempt,
                        x = candidate.left(),
                        y = candidate.top();
                        "Desired position occupied, displaced candidate accepted"
                    );
                }
                self.occupied.push(candidate);
                return Placement {
                    position: candidate.origin(),
                    size,
                    was_fallback: false,
                };
            }

            if attempt == MAX_SEARCH_ATTEMPTS {
                break;
            }

            // Zig-zag: even attempts step rightward, odd attempts return to
            // the desired x and move one row down.
            let next_origin = if attempt % 2 == 0 {
                candidate.origin().add_point(Point::new(horizontal_step, 0.0))
            } else {
                candidate.origin().with_x(desired.x()).add_point(Point::new(0.0, vertical_step))
            };
            trace!(
                attempt,
                x = next_origin.x(),
                y = next_origin.y();
                "Probing alternative position"
            );
            candidate = Rect::new(next_origin, size);
        }

        // Exhausted the bounded search: derive a terminating position from
        // the session's placement count. The no-overlap invariant is not
        // checked here.
        let offset = self.occupied.len() as f32 * FALLBACK_STEP;
        let position = desired.add_point(Point::new(offset, offset));
        warn!(
            x = position.x(),
            y = position.y(),
            placed = self.occupied.len();
            "Search exhausted, using unverified fallback position"
        );
        self.occupied.push(Rect::new(position, size));
        Placement {
            position,
            size,
            was_fallback: true,
        }
    }

    /// Places one logical item at or near the desired position.
    ///
    /// Convenience wrapper used by the pattern calculators.
    pub(crate) fn place_item(&mut self, desired: Point, item: &Item) -> Placement {
        self.find_safe_position(desired, item.size, item.kind)
    }

    fn is_free(&self, candidate: Rect) -> bool {
        let padding = self.config.spacing().minimum_padding();
        self.occupied
            .iter()
            .all(|placed| !candidate.overlaps_padded(*placed, padding))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn desired_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(
            (0.0f32..4000.0, 0.0f32..4000.0).prop_map(|(x, y)| Point::new(x, y)),
            1..20,
        )
    }

    /// Any sequence of placements that never hits the fallback must leave
    /// the occupied list free of pairwise collisions.
    fn check_no_overlap_without_fallback(desired: Vec<Point>) -> Result<(), TestCaseError> {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();

        let mut hit_fallback = false;
        for point in desired {
            let placement = engine.find_safe_position(
                point,
                Some(Size::new(150.0, 100.0)),
                ItemKind::Default,
            );
            hit_fallback |= placement.was_fallback();
        }

        if !hit_fallback {
            let report = engine.generate_report();
            prop_assert!(report.collisions().is_empty());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn no_overlap_without_fallback(desired in desired_strategy()) {
            check_no_overlap_without_fallback(desired)?;
        }
    }
}
