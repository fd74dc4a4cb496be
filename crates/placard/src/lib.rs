//! Placard: a deterministic 2D card-placement engine.
//!
//! Placard computes non-overlapping positions for fixed-size visual items
//! (cards, sticky notes) on an unbounded board. All placement flows through
//! a single safe-position search that probes deterministic alternatives when
//! a desired position is already occupied, and the engine can report on the
//! quality of the resulting layout (bounding box, density, collision count).
//!
//! # Overview
//!
//! - [`Engine`] - the placement session: occupied space, safe-position
//!   search, and the layout-pattern calculators
//! - [`config::EngineConfig`] - spacing and grid configuration
//! - [`report::LayoutReport`] - layout-quality snapshot
//!
//! # Example
//!
//! ```
//! use placard::{Engine, config::EngineConfig};
//! use placard_core::{geometry::Point, item::Item};
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! let items = vec![Item::default(); 6];
//! let placements = engine.calculate_grid_layout(Point::new(0.0, 0.0), &items, 3);
//!
//! assert_eq!(placements.len(), 6);
//! assert!(engine.generate_report().collisions().is_empty());
//! ```
//!
//! # Sessions
//!
//! An [`Engine`] instance *is* one layout session: the occupied-space list
//! it owns is ordinary mutable state with no synchronization, so an instance
//! must be used sequentially by a single caller and [`Engine::reset`]
//! between unrelated computations.

pub mod config;
pub mod error;
pub mod report;

mod engine;
mod patterns;

pub use engine::{Engine, Placement};
pub use error::PlacardError;
pub use patterns::journey::{Moment, Phase};
pub use patterns::opportunity::{Opportunity, Solution};
