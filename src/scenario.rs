//! A complete field arrangement: one optional structure per fixed slot plus
//! the shuffled middle block. Each generation run builds a fresh scenario
//! that fully replaces the previous one.

use crate::scene::Scene;
use crate::scoring::ScenarioScoring;
use crate::structure::{
    BeamOnFloor, FloorGoal, RemainingPins, StandoffGoal, StartingPin, Structure,
};

#[derive(Clone, Debug, Default)]
pub struct Scenario {
    pub standoff_goal: Option<StandoffGoal>,
    pub beam_on_floor: Option<BeamOnFloor>,
    pub floor_goal: Option<FloorGoal>,
    /// Square goals, triangle goals and floor stacks in their shuffled order.
    pub others: Vec<Structure>,
    pub starting_pin: Option<StartingPin>,
    pub remaining_pins: Option<RemainingPins>,
}

impl Scenario {
    /// Every structure present, in slot order.
    pub fn structures(&self) -> Vec<Structure> {
        let mut structures = Vec::new();
        if let Some(goal) = &self.standoff_goal {
            structures.push(Structure::StandoffGoal(goal.clone()));
        }
        if let Some(beam) = &self.beam_on_floor {
            structures.push(Structure::BeamOnFloor(beam.clone()));
        }
        if let Some(goal) = &self.floor_goal {
            structures.push(Structure::FloorGoal(goal.clone()));
        }
        structures.extend(self.others.iter().cloned());
        if let Some(starting) = &self.starting_pin {
            structures.push(Structure::StartingPin(starting.clone()));
        }
        if let Some(remaining) = &self.remaining_pins {
            structures.push(Structure::RemainingPins(remaining.clone()));
        }
        structures
    }

    pub fn piece_count(&self) -> usize {
        self.structures()
            .iter()
            .map(|structure| structure.pieces().len())
            .sum()
    }

    pub fn scoring(&self) -> ScenarioScoring {
        let structures = self
            .structures()
            .iter()
            .map(Structure::scoring)
            .collect();
        let starting_pins = self
            .starting_pin
            .as_ref()
            .map(|starting| starting.pieces().len() as u32)
            .unwrap_or(0);
        ScenarioScoring {
            structures,
            starting_pins,
            contacted: 0,
        }
    }

    /// Place every structure one at a time, in slot order. Each placement
    /// completes before the next begins.
    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        for structure in self.structures() {
            structure.visualize(scene).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Pin;
    use crate::scene::TallyScene;
    use crate::structure::{
        StacksOnFloor, StacksOnFloorCase, StandoffGoalCase, StartingPinCase,
    };

    fn sample() -> Scenario {
        Scenario {
            standoff_goal: Some(StandoffGoal::new(
                StandoffGoalCase::one_column(vec![Pin::red(), Pin::blue()]).unwrap(),
                0,
            )),
            others: vec![Structure::StacksOnFloor(StacksOnFloor::new(
                StacksOnFloorCase::new(vec![vec![Pin::orange(), Pin::red()]]),
            ))],
            starting_pin: Some(StartingPin::new(StartingPinCase::untouched())),
            ..Default::default()
        }
    }

    #[test]
    fn empty_scenario_scores_zero() {
        let scenario = Scenario::default();
        assert_eq!(scenario.piece_count(), 0);
        let scoring = scenario.scoring();
        assert!(scoring.structures.is_empty());
        assert_eq!(scoring.starting_pins, 0);
    }

    #[test]
    fn counts_starting_pins_and_pieces() {
        let scenario = sample();
        assert_eq!(scenario.piece_count(), 2 + 2 + 4);
        let scoring = scenario.scoring();
        assert_eq!(scoring.starting_pins, 4);
        assert_eq!(scoring.structures.len(), 3);
        let totals = scoring.totals();
        assert_eq!(totals.connected_pins, 4);
        assert_eq!(totals.two_color_stacks, 2);
    }

    #[test]
    fn visualize_places_all_pieces_in_slot_order() {
        let scenario = sample();
        let mut scene = TallyScene::default();
        pollster::block_on(scenario.visualize(&mut scene));
        assert_eq!(scene.pins.len(), scenario.piece_count());
        // the standoff column comes before everything else
        assert_eq!(scene.pins[0].1.x, 0.0);
    }
}
