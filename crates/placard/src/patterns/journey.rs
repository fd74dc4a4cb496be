//! Journey-map calculator.
//!
//! A journey map reads left to right: one column per phase, the phase's key
//! moments stacked beneath its header, and each moment flanked by its user
//! stories on the left and pain points on the right.

use log::info;
use serde::Deserialize;

use placard_core::{geometry::Point, item::Item};

use crate::engine::{Engine, Placement};

/// One phase of a journey map: a header card and its key moments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phase {
    /// The phase header card
    #[serde(default)]
    pub header: Item,

    /// Key moments within this phase, top to bottom
    #[serde(default)]
    pub moments: Vec<Moment>,
}

/// One key moment: its card plus flanking stories and pain points.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Moment {
    /// The moment card itself
    #[serde(default)]
    pub card: Item,

    /// User stories, placed as a column to the left of the moment
    #[serde(default)]
    pub stories: Vec<Item>,

    /// Pain points, placed as a column to the right of the moment
    #[serde(default)]
    pub pain_points: Vec<Item>,
}

impl Engine {
    /// Lays out a journey map anchored at `anchor`.
    ///
    /// Phase headers spread horizontally by the section margin. Each
    /// phase's moments stack beneath its header, one vertical step apart.
    /// Stories sit in a column to the left of their moment and pain points
    /// in a column to the right, offset by the connector clearance and
    /// stacked with the packing gap.
    ///
    /// Placements are returned in traversal order: for each phase, the
    /// header, then per moment the moment card, its stories, and its pain
    /// points.
    pub fn calculate_journey_layout(
        &mut self,
        anchor: Point,
        phases: &[Phase],
    ) -> Vec<Placement> {
        let spacing = self.config().spacing();
        let section_margin = spacing.section_margin();
        let vertical_step = spacing.vertical_step();
        let clearance = spacing.connector_clearance();
        let stack_gap = spacing.packing_gap();

        info!(phases = phases.len(); "Calculating journey layout");

        let mut placements = Vec::new();
        for (phase_index, phase) in phases.iter().enumerate() {
            let phase_x = anchor.x() + phase_index as f32 * section_margin;
            placements.push(self.place_item(Point::new(phase_x, anchor.y()), &phase.header));

            for (moment_index, moment) in phase.moments.iter().enumerate() {
                let moment_pos = Point::new(
                    phase_x,
                    anchor.y() + (moment_index as f32 + 1.0) * vertical_step,
                );
                let moment_size = moment.card.resolved_size();
                placements.push(self.place_item(moment_pos, &moment.card));

                // Story column flanking the moment on the left.
                let mut story_y = moment_pos.y();
                for story in &moment.stories {
                    let story_size = story.resolved_size();
                    let desired = Point::new(
                        moment_pos.x() - clearance - story_size.width(),
                        story_y,
                    );
                    placements.push(self.place_item(desired, story));
                    story_y += story_size.height() + stack_gap;
                }

                // Pain-point column flanking the moment on the right.
                let mut pain_y = moment_pos.y();
                for pain in &moment.pain_points {
                    let pain_size = pain.resolved_size();
                    let desired = Point::new(
                        moment_pos.x() + moment_size.width() + clearance,
                        pain_y,
                    );
                    placements.push(self.place_item(desired, pain));
                    pain_y += pain_size.height() + stack_gap;
                }
            }
        }

        placements
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;

    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).expect("default config is valid")
    }

    fn moment_with(stories: usize, pain_points: usize) -> Moment {
        Moment {
            card: Item::default(),
            stories: vec![Item::default(); stories],
            pain_points: vec![Item::default(); pain_points],
        }
    }

    #[test]
    fn test_phases_spread_by_section_margin() {
        let mut engine = engine();
        let phases = vec![Phase::default(), Phase::default(), Phase::default()];

        let placements = engine.calculate_journey_layout(Point::new(0.0, 0.0), &phases);

        let xs: Vec<f32> = placements.iter().map(|p| p.position().x()).collect();
        assert_eq!(xs, vec![0.0, 800.0, 1600.0]);
    }

    #[test]
    fn test_moments_stack_beneath_their_phase() {
        let mut engine = engine();
        let phases = vec![Phase {
            header: Item::default(),
            moments: vec![moment_with(0, 0), moment_with(0, 0)],
        }];

        let placements = engine.calculate_journey_layout(Point::new(100.0, 50.0), &phases);

        assert_eq!(placements[1].position(), Point::new(100.0, 300.0));
        assert_eq!(placements[2].position(), Point::new(100.0, 550.0));
    }

    #[test]
    fn test_stories_flank_left_and_pain_points_right() {
        let mut engine = engine();
        let phases = vec![Phase {
            header: Item::default(),
            moments: vec![moment_with(1, 1)],
        }];

        let placements = engine.calculate_journey_layout(Point::new(1000.0, 0.0), &phases);

        let moment = placements[1];
        let story = placements[2];
        let pain = placements[3];

        // Default cards are 180 wide; clearance is 100.
        assert_eq!(story.position(), Point::new(720.0, 250.0));
        assert_eq!(pain.position(), Point::new(1280.0, 250.0));
        assert_eq!(moment.position().y(), story.position().y());
    }

    #[test]
    fn test_journey_with_defaults_has_no_collisions() {
        let mut engine = engine();
        let phases = vec![
            Phase {
                header: Item::default(),
                moments: vec![moment_with(1, 1), moment_with(1, 1)],
            },
            Phase {
                header: Item::default(),
                moments: vec![moment_with(1, 1)],
            },
        ];

        let placements = engine.calculate_journey_layout(Point::new(0.0, 0.0), &phases);

        assert_eq!(placements.len(), 2 + 3 * 3);
        assert!(placements.iter().all(|p| !p.was_fallback()));
        assert!(engine.generate_report().collisions().is_empty());
    }
}
