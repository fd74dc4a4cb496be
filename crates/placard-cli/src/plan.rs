//! Layout-plan definitions.
//!
//! A plan is a TOML document describing one layout computation: which
//! pattern to run and the logical items to place. The `layout` key selects
//! the pattern; the remaining keys are that pattern's inputs.
//!
//! # Example
//!
//! ```toml
//! layout = "grid"
//! columns = 3
//!
//! [origin]
//! x = 0.0
//! y = 0.0
//!
//! [[items]]
//! kind = "square"
//! ```

use serde::Deserialize;

use placard::{Engine, Opportunity, Phase, Placement};
use placard_core::{geometry::Point, item::Item};

/// One layout computation, tagged by pattern.
#[derive(Debug, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum Plan {
    /// Fixed-column grid of items
    Grid {
        #[serde(default)]
        origin: Point,
        columns: usize,
        #[serde(default)]
        items: Vec<Item>,
    },

    /// Root card with centered levels of children beneath it
    Tree {
        #[serde(default)]
        origin: Point,
        #[serde(default)]
        levels: Vec<Vec<Item>>,
    },

    /// Left-to-right packing with row wrapping
    Flow {
        #[serde(default)]
        origin: Point,
        max_width: f32,
        #[serde(default)]
        items: Vec<Item>,
    },

    /// Journey map of phases, moments, stories, and pain points
    Journey {
        #[serde(default)]
        origin: Point,
        #[serde(default)]
        phases: Vec<Phase>,
    },

    /// Opportunity-solution tree beneath an outcome card
    OpportunityTree {
        #[serde(default)]
        origin: Point,
        #[serde(default)]
        opportunities: Vec<Opportunity>,
    },
}

impl Plan {
    /// Returns the name of the selected pattern, for logging
    pub fn pattern_name(&self) -> &'static str {
        match self {
            Plan::Grid { .. } => "grid",
            Plan::Tree { .. } => "tree",
            Plan::Flow { .. } => "flow",
            Plan::Journey { .. } => "journey",
            Plan::OpportunityTree { .. } => "opportunity-tree",
        }
    }

    /// Runs this plan's calculator against the given engine
    pub fn execute(&self, engine: &mut Engine) -> Vec<Placement> {
        match self {
            Plan::Grid {
                origin,
                columns,
                items,
            } => engine.calculate_grid_layout(*origin, items, *columns),
            Plan::Tree { origin, levels } => engine.calculate_tree_layout(*origin, levels),
            Plan::Flow {
                origin,
                max_width,
                items,
            } => engine.calculate_flow_layout(*origin, *max_width, items),
            Plan::Journey { origin, phases } => engine.calculate_journey_layout(*origin, phases),
            Plan::OpportunityTree {
                origin,
                opportunities,
            } => engine.calculate_opportunity_solution_tree(*origin, opportunities),
        }
    }
}
