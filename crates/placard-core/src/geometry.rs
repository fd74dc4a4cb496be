//! Geometric primitives for card placement.
//!
//! This module provides the fundamental geometric types used throughout
//! Placard for calculating positions, sizes, and bounding boxes of placed
//! cards.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in board space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - An axis-aligned, top-left anchored rectangle
//! - [`Bounds`] - A bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Placard uses a coordinate system consistent with SVG and most screen
//! coordinate systems:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! A [`Rect`] is anchored at its top-left corner: its width extends to the
//! right and its height extends downward. Every type in this crate follows
//! that single convention.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in board coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector
/// math. The coordinate system has its origin at the top-left with Y
/// increasing downward (see [module documentation](self) for details).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Represents the dimensions of a card with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns the area covered by this size
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// The origin is the top-left corner; width extends rightward and height
/// extends downward (see [module documentation](self)). Rectangles are the
/// unit of occupied space in the placement engine: each accepted placement
/// is recorded as one `Rect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new rectangle from a top-left origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left origin of the rectangle
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size of the rectangle
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the x-coordinate of the left edge
    pub fn left(self) -> f32 {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge
    pub fn top(self) -> f32 {
        self.origin.y
    }

    /// Returns the x-coordinate of the right edge
    pub fn right(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the area covered by the rectangle
    pub fn area(self) -> f32 {
        self.size.area()
    }

    /// Moves the rectangle by the specified offset
    pub fn translate(self, offset: Point) -> Self {
        Self {
            origin: self.origin.add_point(offset),
            size: self.size,
        }
    }

    /// Tests whether two rectangles overlap once a clearance gap is applied.
    ///
    /// Two rectangles are considered overlapping unless one lies strictly
    /// beyond the other on at least one axis with more than `padding` of
    /// clear space between their facing edges. The padding is symmetric and
    /// applied once, not once per rectangle.
    ///
    /// The predicate is pure and stable under argument order:
    /// `a.overlaps_padded(b, p) == b.overlaps_padded(a, p)`.
    pub fn overlaps_padded(self, other: Rect, padding: f32) -> bool {
        !(self.right() + padding < other.left()
            || other.right() + padding < self.left()
            || self.bottom() + padding < other.top()
            || other.bottom() + padding < self.top())
    }

    /// Converts the rectangle into an equivalent [`Bounds`]
    pub fn bounds(self) -> Bounds {
        Bounds {
            min_x: self.left(),
            min_y: self.top(),
            max_x: self.right(),
            max_y: self.bottom(),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the area enclosed by the bounds
    pub fn area(self) -> f32 {
        self.width() * self.height()
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for
    /// min_x and min_y, and the maximum values of both bounds for max_x and
    /// max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(Point::new(x, y), Size::new(w, h)))
    }

    fn padding_strategy() -> impl Strategy<Value = f32> {
        0.0f32..300.0
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The padded overlap predicate must not depend on argument order.
    fn check_overlap_is_symmetric(a: Rect, b: Rect, padding: f32) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.overlaps_padded(b, padding), b.overlaps_padded(a, padding));
        Ok(())
    }

    /// A rectangle always overlaps itself, for any non-negative padding.
    fn check_overlap_is_reflexive(r: Rect, padding: f32) -> Result<(), TestCaseError> {
        prop_assert!(r.overlaps_padded(r, padding));
        Ok(())
    }

    /// Growing the padding can only turn a clear pair into a conflict,
    /// never the other way around.
    fn check_overlap_monotone_in_padding(a: Rect, b: Rect, padding: f32) -> Result<(), TestCaseError> {
        if a.overlaps_padded(b, padding) {
            prop_assert!(a.overlaps_padded(b, padding + 1.0));
        }
        Ok(())
    }

    /// Bounds merge should be commutative: a.merge(b) == b.merge(a).
    fn check_bounds_merge_is_commutative(a: Rect, b: Rect) -> Result<(), TestCaseError> {
        let merged1 = a.bounds().merge(&b.bounds());
        let merged2 = b.bounds().merge(&a.bounds());

        prop_assert!(approx_eq!(f32, merged1.min_x(), merged2.min_x()));
        prop_assert!(approx_eq!(f32, merged1.min_y(), merged2.min_y()));
        prop_assert!(approx_eq!(f32, merged1.max_x(), merged2.max_x()));
        prop_assert!(approx_eq!(f32, merged1.max_y(), merged2.max_y()));
        Ok(())
    }

    /// Merged bounds should contain both original bounds.
    fn check_bounds_merge_contains_both(a: Rect, b: Rect) -> Result<(), TestCaseError> {
        let merged = a.bounds().merge(&b.bounds());

        for bounds in [a.bounds(), b.bounds()] {
            prop_assert!(merged.min_x() <= bounds.min_x());
            prop_assert!(merged.min_y() <= bounds.min_y());
            prop_assert!(merged.max_x() >= bounds.max_x());
            prop_assert!(merged.max_y() >= bounds.max_y());
        }
        Ok(())
    }

    /// Translating a rectangle must not change its size or overlap with a
    /// rectangle translated by the same offset.
    fn check_translate_preserves_relative_overlap(
        a: Rect,
        b: Rect,
        offset: Point,
        padding: f32,
    ) -> Result<(), TestCaseError> {
        let moved_a = a.translate(offset);
        let moved_b = b.translate(offset);

        prop_assert!(approx_eq!(f32, moved_a.area(), a.area()));
        prop_assert_eq!(
            a.overlaps_padded(b, padding),
            moved_a.overlaps_padded(moved_b, padding)
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy(), p in padding_strategy()) {
            check_overlap_is_symmetric(a, b, p)?;
        }

        #[test]
        fn overlap_is_reflexive(r in rect_strategy(), p in padding_strategy()) {
            check_overlap_is_reflexive(r, p)?;
        }

        #[test]
        fn overlap_monotone_in_padding(a in rect_strategy(), b in rect_strategy(), p in padding_strategy()) {
            check_overlap_monotone_in_padding(a, b, p)?;
        }

        #[test]
        fn bounds_merge_is_commutative(a in rect_strategy(), b in rect_strategy()) {
            check_bounds_merge_is_commutative(a, b)?;
        }

        #[test]
        fn bounds_merge_contains_both(a in rect_strategy(), b in rect_strategy()) {
            check_bounds_merge_contains_both(a, b)?;
        }

        #[test]
        fn translate_preserves_relative_overlap(
            a in rect_strategy(),
            b in rect_strategy(),
            offset in point_strategy(),
            p in padding_strategy(),
        ) {
            check_translate_preserves_relative_overlap(a, b, offset, p)?;
        }
    }
}
