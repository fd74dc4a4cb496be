//! Configuration types for the placement engine.
//!
//! This module provides the configuration structures that govern collision
//! padding, search step sizes, and grid-pattern cell dimensions. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources, and every default is a named value rather than an inline
//! literal.
//!
//! # Overview
//!
//! - [`EngineConfig`] - Top-level configuration combining spacing and grid settings.
//! - [`SpacingConfig`] - Clearance gaps and search step sizes.
//! - [`GridConfig`] - Cell dimensions for grid-pattern layouts.
//!
//! # Example
//!
//! ```
//! # use placard::config::EngineConfig;
//! let config = EngineConfig::default();
//! assert_eq!(config.spacing().minimum_padding(), 50.0);
//! assert_eq!(config.grid().cell_width(), 300.0);
//! ```

use serde::Deserialize;

use crate::error::PlacardError;

/// Maximum number of alternative positions probed before the search gives
/// up and falls back to a count-proportional offset.
///
/// Twenty probes cover ten columns rightward and ten rows downward of the
/// desired position, which in practice resolves dense but sane layouts; a
/// larger bound only delays the inevitable on a saturated board.
pub const MAX_SEARCH_ATTEMPTS: usize = 20;

/// Offset applied per already-placed item when the bounded search is
/// exhausted.
///
/// The fallback position is `desired + placed_count * FALLBACK_STEP` on
/// both axes. It matches the default minimum padding so consecutive
/// fallbacks form a visible diagonal cascade instead of a pile.
pub const FALLBACK_STEP: f32 = 50.0;

const DEFAULT_MINIMUM_PADDING: f32 = 50.0;
const DEFAULT_HORIZONTAL_STEP: f32 = 250.0;
const DEFAULT_VERTICAL_STEP: f32 = 250.0;
const DEFAULT_CONNECTOR_CLEARANCE: f32 = 100.0;
// Wide enough that a moment's pain-point column and the next phase's story
// column keep the default padding between them.
const DEFAULT_SECTION_MARGIN: f32 = 800.0;
const DEFAULT_CELL_WIDTH: f32 = 300.0;
const DEFAULT_CELL_HEIGHT: f32 = 300.0;
const DEFAULT_GRID_ENABLED: bool = true;
const DEFAULT_SNAP_TO_GRID: bool = false;

/// Top-level engine configuration combining spacing and grid settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Spacing configuration section.
    #[serde(default)]
    spacing: SpacingConfig,

    /// Grid configuration section.
    #[serde(default)]
    grid: GridConfig,
}

impl EngineConfig {
    /// Creates a new [`EngineConfig`] with the specified spacing and grid
    /// configurations.
    pub fn new(spacing: SpacingConfig, grid: GridConfig) -> Self {
        Self { spacing, grid }
    }

    /// Returns the spacing configuration.
    pub fn spacing(&self) -> &SpacingConfig {
        &self.spacing
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::InvalidConfig`] when a gap value is negative
    /// or a step/cell dimension is not strictly positive. A zero step would
    /// make the alternative-position probe revisit the same spot on every
    /// attempt.
    pub fn validate(&self) -> Result<(), PlacardError> {
        self.spacing.validate()?;
        self.grid.validate()
    }
}

/// Clearance gaps and search step sizes.
///
/// `minimum_padding` governs both the collision predicate (how much clear
/// space two cards need between their edges) and the packing gap used by
/// the flow calculator. The step fields govern how far the safe-position
/// search moves between probe attempts and how far apart the pattern
/// calculators spread sibling cards.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpacingConfig {
    /// Minimum clear gap between two cards' edges.
    #[serde(default = "default_minimum_padding")]
    minimum_padding: f32,

    /// Horizontal probe step and sibling spread.
    #[serde(default = "default_horizontal_step")]
    horizontal_step: f32,

    /// Vertical probe step and level spread.
    #[serde(default = "default_vertical_step")]
    vertical_step: f32,

    /// Clearance reserved beside a card for connectors to attach to.
    #[serde(default = "default_connector_clearance")]
    connector_clearance: f32,

    /// Horizontal distance between independent sections (journey phases).
    #[serde(default = "default_section_margin")]
    section_margin: f32,
}

fn default_minimum_padding() -> f32 {
    DEFAULT_MINIMUM_PADDING
}

fn default_horizontal_step() -> f32 {
    DEFAULT_HORIZONTAL_STEP
}

fn default_vertical_step() -> f32 {
    DEFAULT_VERTICAL_STEP
}

fn default_connector_clearance() -> f32 {
    DEFAULT_CONNECTOR_CLEARANCE
}

fn default_section_margin() -> f32 {
    DEFAULT_SECTION_MARGIN
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            minimum_padding: DEFAULT_MINIMUM_PADDING,
            horizontal_step: DEFAULT_HORIZONTAL_STEP,
            vertical_step: DEFAULT_VERTICAL_STEP,
            connector_clearance: DEFAULT_CONNECTOR_CLEARANCE,
            section_margin: DEFAULT_SECTION_MARGIN,
        }
    }
}

impl SpacingConfig {
    /// Returns the minimum clear gap between two cards' edges
    pub fn minimum_padding(&self) -> f32 {
        self.minimum_padding
    }

    /// Returns the horizontal probe step
    pub fn horizontal_step(&self) -> f32 {
        self.horizontal_step
    }

    /// Returns the vertical probe step
    pub fn vertical_step(&self) -> f32 {
        self.vertical_step
    }

    /// Returns the connector clearance beside a card
    pub fn connector_clearance(&self) -> f32 {
        self.connector_clearance
    }

    /// Returns the horizontal distance between independent sections
    pub fn section_margin(&self) -> f32 {
        self.section_margin
    }

    /// Returns the pitch used when packing cards edge to edge.
    ///
    /// The collision predicate treats a gap of exactly `minimum_padding` as
    /// a conflict, so compact packing (flow rows, story stacks) leaves twice
    /// the padding between edges.
    pub fn packing_gap(&self) -> f32 {
        self.minimum_padding * 2.0
    }

    /// Returns a copy with the specified minimum padding
    pub fn with_minimum_padding(mut self, padding: f32) -> Self {
        self.minimum_padding = padding;
        self
    }

    /// Returns a copy with the specified horizontal step
    pub fn with_horizontal_step(mut self, step: f32) -> Self {
        self.horizontal_step = step;
        self
    }

    /// Returns a copy with the specified vertical step
    pub fn with_vertical_step(mut self, step: f32) -> Self {
        self.vertical_step = step;
        self
    }

    fn validate(&self) -> Result<(), PlacardError> {
        if self.minimum_padding < 0.0 {
            return Err(PlacardError::InvalidConfig(format!(
                "minimum_padding must be non-negative, got {}",
                self.minimum_padding
            )));
        }
        if self.horizontal_step <= 0.0 || self.vertical_step <= 0.0 {
            return Err(PlacardError::InvalidConfig(format!(
                "search steps must be positive, got {} x {}",
                self.horizontal_step, self.vertical_step
            )));
        }
        if self.connector_clearance < 0.0 || self.section_margin < 0.0 {
            return Err(PlacardError::InvalidConfig(format!(
                "clearance values must be non-negative, got {} / {}",
                self.connector_clearance, self.section_margin
            )));
        }
        Ok(())
    }
}

/// Cell dimensions for grid-pattern layouts.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GridConfig {
    /// Whether grid cell spacing is applied by the grid calculator.
    #[serde(default = "default_grid_enabled")]
    enabled: bool,

    /// Width of one grid cell.
    #[serde(default = "default_cell_width")]
    cell_width: f32,

    /// Height of one grid cell.
    #[serde(default = "default_cell_height")]
    cell_height: f32,

    /// Whether the grid calculator snaps its start position to the cell
    /// lattice.
    #[serde(default = "default_snap_to_grid")]
    snap_to_grid: bool,
}

fn default_grid_enabled() -> bool {
    DEFAULT_GRID_ENABLED
}

fn default_cell_width() -> f32 {
    DEFAULT_CELL_WIDTH
}

fn default_cell_height() -> f32 {
    DEFAULT_CELL_HEIGHT
}

fn default_snap_to_grid() -> bool {
    DEFAULT_SNAP_TO_GRID
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_GRID_ENABLED,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            snap_to_grid: DEFAULT_SNAP_TO_GRID,
        }
    }
}

impl GridConfig {
    /// Returns whether grid cell spacing is applied
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the width of one grid cell
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Returns the height of one grid cell
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Returns whether the grid calculator snaps its start position
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// Returns a copy with the specified cell dimensions
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Returns a copy with snapping enabled or disabled
    pub fn with_snap_to_grid(mut self, snap: bool) -> Self {
        self.snap_to_grid = snap;
        self
    }

    /// Returns a copy with grid cell spacing enabled or disabled
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn validate(&self) -> Result<(), PlacardError> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(PlacardError::InvalidConfig(format!(
                "grid cells must be positive, got {} x {}",
                self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.spacing().minimum_padding(), 50.0);
        assert_eq!(config.spacing().horizontal_step(), 250.0);
        assert_eq!(config.spacing().vertical_step(), 250.0);
        assert_eq!(config.grid().cell_width(), 300.0);
        assert_eq!(config.grid().cell_height(), 300.0);
        assert!(config.grid().enabled());
        assert!(!config.grid().snap_to_grid());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_padding_is_rejected() {
        let spacing = SpacingConfig::default().with_minimum_padding(-1.0);
        let config = EngineConfig::new(spacing, GridConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let spacing = SpacingConfig::default().with_horizontal_step(0.0);
        let config = EngineConfig::new(spacing, GridConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_degenerate_grid_cell_is_rejected() {
        let grid = GridConfig::default().with_cell_size(0.0, 300.0);
        let config = EngineConfig::new(SpacingConfig::default(), grid);
        assert!(config.validate().is_err());
    }
}
