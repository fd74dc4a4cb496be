//! Opportunity-solution-tree calculator.
//!
//! Product-discovery trees: a desired outcome at the top, the opportunities
//! that could drive it beneath, candidate solutions beneath each
//! opportunity, and experiments beneath each solution.

use log::info;
use serde::Deserialize;

use placard_core::{geometry::Point, item::Item};

use crate::{
    engine::{Engine, Placement},
    patterns::centered_row_xs,
};

/// One opportunity beneath the outcome, with its candidate solutions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opportunity {
    /// The opportunity card
    #[serde(default)]
    pub card: Item,

    /// Candidate solutions for this opportunity
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

/// One solution with the experiments that would validate it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Solution {
    /// The solution card
    #[serde(default)]
    pub card: Item,

    /// Experiments, stacked beneath the solution
    #[serde(default)]
    pub experiments: Vec<Item>,
}

impl Engine {
    /// Lays out an opportunity-solution tree anchored at `outcome`.
    ///
    /// The outcome card (a default item) is placed at the anchor.
    /// Opportunities form a row centered beneath it, one vertical step down
    /// and one horizontal step apart. Each opportunity's solutions form a
    /// narrower centered row another step down (half the horizontal
    /// spread), and each solution's experiments stack vertically beneath
    /// it with the packing gap.
    ///
    /// Placements are returned in traversal order: outcome, then per
    /// opportunity its card, then per solution its card followed by its
    /// experiments.
    pub fn calculate_opportunity_solution_tree(
        &mut self,
        outcome: Point,
        opportunities: &[Opportunity],
    ) -> Vec<Placement> {
        let spacing = self.config().spacing();
        let horizontal_step = spacing.horizontal_step();
        let vertical_step = spacing.vertical_step();
        let stack_gap = spacing.packing_gap();

        info!(opportunities = opportunities.len(); "Calculating opportunity-solution tree");

        let mut placements = Vec::new();
        placements.push(self.place_item(outcome, &Item::default()));

        let opportunity_y = outcome.y() + vertical_step;
        let opportunity_xs = centered_row_xs(outcome.x(), opportunities.len(), horizontal_step);

        for (opportunity, opportunity_x) in opportunities.iter().zip(opportunity_xs) {
            placements
                .push(self.place_item(Point::new(opportunity_x, opportunity_y), &opportunity.card));

            let solution_y = opportunity_y + vertical_step;
            let solution_xs = centered_row_xs(
                opportunity_x,
                opportunity.solutions.len(),
                horizontal_step / 2.0,
            );

            for (solution, solution_x) in opportunity.solutions.iter().zip(solution_xs) {
                placements.push(self.place_item(Point::new(solution_x, solution_y), &solution.card));

                let mut experiment_y = solution_y + vertical_step;
                for experiment in &solution.experiments {
                    placements.push(self.place_item(Point::new(solution_x, experiment_y), experiment));
                    experiment_y += experiment.resolved_size().height() + stack_gap;
                }
            }
        }

        placements
    }
}
