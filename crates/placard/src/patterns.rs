//! Layout-pattern calculators.
//!
//! Each submodule adds one `calculate_*` method to [`crate::Engine`]. The
//! calculators are pure orchestration: they translate a logical arrangement
//! (grid, tree, flow, journey map, opportunity-solution tree) into a
//! sequence of desired positions and resolve every one of them through
//! [`crate::Engine::find_safe_position`]. None of them contain collision
//! logic of their own, and none of them raise errors for geometric
//! impossibility; the bounded fallback in the search always produces some
//! position, and the layout report is the authoritative check afterwards.

pub mod flow;
pub mod grid;
pub mod journey;
pub mod opportunity;
pub mod tree;

/// X coordinates for a row of `count` elements centered on `center_x`,
/// `step` apart.
pub(crate) fn centered_row_xs(center_x: f32, count: usize, step: f32) -> Vec<f32> {
    let half_span = (count.saturating_sub(1)) as f32 / 2.0;
    (0..count)
        .map(|i| center_x + (i as f32 - half_span) * step)
        .collect()
}
