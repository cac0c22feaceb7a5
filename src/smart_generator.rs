//! The resource-constrained scenario orchestrator. Works down a fixed slot
//! pipeline, drawing candidate cases and committing them against the shared
//! piece pool. Beam-consuming slots run first because beams are scarcest.
//! A slot that keeps drawing unaffordable cases is omitted, never fatal.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generator;
use crate::piece::{Piece, Pin, PinColor};
use crate::resources::{PieceBudget, ResourceTracker};
use crate::scenario::Scenario;
use crate::structure::{
    BeamOnFloor, FloorColumn, FloorGoal, FloorGoalCase, RemainingPins, SquareGoal, StacksOnFloor,
    StandoffGoal, StartingPin, Structure, TriangleGoal,
};
use crate::Difficulty;

const MAX_ATTEMPTS: u32 = 100;

/// Generate a complete scenario at the given difficulty. A `None` seed draws
/// one from the system clock.
pub fn generate_scenario(difficulty: Difficulty, seed: Option<u64>) -> Scenario {
    ScenarioGenerator::new(difficulty, seed).generate()
}

#[derive(Clone, Copy)]
enum MiddleSlot {
    BlueSquare,
    RedSquare,
    RedTriangle,
    BlueTriangle,
    FloorStacks,
}

pub struct ScenarioGenerator {
    difficulty: Difficulty,
    tracker: ResourceTracker,
    rng: ChaCha8Rng,
}

impl ScenarioGenerator {
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0)
        });
        Self::with_budget(difficulty, PieceBudget::competition(), seed)
    }

    pub fn with_budget(difficulty: Difficulty, budget: PieceBudget, seed: u64) -> Self {
        info!("generating a {difficulty} scenario from seed {seed}");
        Self {
            difficulty,
            tracker: ResourceTracker::with_budget(budget),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> Scenario {
        let standoff_goal = self.standoff_goal();
        let beam_on_floor = self.beam_on_floor();
        let floor_goal = self.floor_goal();

        let mut slots = [
            MiddleSlot::BlueSquare,
            MiddleSlot::RedSquare,
            MiddleSlot::RedTriangle,
            MiddleSlot::BlueTriangle,
            MiddleSlot::FloorStacks,
        ];
        slots.shuffle(&mut self.rng);
        let others = slots
            .into_iter()
            .filter_map(|slot| self.middle_slot(slot))
            .collect();

        let starting_pin = self.starting_pin();
        let remaining_pins = self.remaining_pins();
        Scenario {
            standoff_goal,
            beam_on_floor,
            floor_goal,
            others,
            starting_pin,
            remaining_pins,
        }
    }

    fn standoff_goal(&mut self) -> Option<StandoffGoal> {
        if !self.tracker.can_afford_beams(1) {
            info!("no beam remaining, skipping the standoff goal");
            return None;
        }
        for _ in 0..MAX_ATTEMPTS {
            let Ok(case) = generator::standoff_goal_case(&mut self.rng, self.difficulty) else {
                continue;
            };
            let rotation = self.rng.random_range(0..360);
            let goal = StandoffGoal::new(case, rotation);
            if self.commit("standoff goal", &goal.pieces()) {
                return Some(goal);
            }
        }
        warn!("standoff goal omitted after {MAX_ATTEMPTS} attempts");
        None
    }

    fn beam_on_floor(&mut self) -> Option<BeamOnFloor> {
        if !self.tracker.can_afford_beams(1) {
            info!("no beam remaining, skipping the floor beam");
            return None;
        }
        for _ in 0..MAX_ATTEMPTS {
            let Ok(case) = generator::beam_on_floor_case(&mut self.rng, self.difficulty) else {
                continue;
            };
            let structure = BeamOnFloor::new(case, self.rng.random());
            if self.commit("beam on floor", &structure.pieces()) {
                return Some(structure);
            }
        }
        warn!("floor beam omitted after {MAX_ATTEMPTS} attempts");
        None
    }

    fn floor_goal(&mut self) -> Option<FloorGoal> {
        for _ in 0..MAX_ATTEMPTS {
            let Ok(case) = generator::floor_goal_case(&mut self.rng, self.difficulty) else {
                continue;
            };
            let goal = FloorGoal::new(case, self.rng.random());
            if self.commit("floor goal", &goal.pieces()) {
                return Some(goal);
            }
        }
        self.simple_floor_goal()
    }

    /// When the pool is too depleted for the drawn floor goals, fall back to
    /// one within-area column of distinct available colors, shrinking it
    /// until it fits.
    fn simple_floor_goal(&mut self) -> Option<FloorGoal> {
        let colors = self.tracker.available_colors();
        for take in (1..=colors.len().min(3)).rev() {
            let column: Vec<Pin> = colors.iter().take(take).copied().map(Pin::new).collect();
            let Ok(case) = FloorGoalCase::with_columns([
                FloorColumn::new(column, true),
                FloorColumn::empty(),
                FloorColumn::empty(),
                FloorColumn::empty(),
            ]) else {
                continue;
            };
            let goal = FloorGoal::new(case, self.rng.random());
            if self.commit("simplified floor goal", &goal.pieces()) {
                return Some(goal);
            }
        }
        warn!("floor goal omitted, pool exhausted");
        None
    }

    fn middle_slot(&mut self, slot: MiddleSlot) -> Option<Structure> {
        match slot {
            MiddleSlot::BlueSquare => self.square_goal(PinColor::Blue),
            MiddleSlot::RedSquare => self.square_goal(PinColor::Red),
            MiddleSlot::RedTriangle => self.triangle_goal(PinColor::Red),
            MiddleSlot::BlueTriangle => self.triangle_goal(PinColor::Blue),
            MiddleSlot::FloorStacks => self.stacks_on_floor(),
        }
    }

    fn square_goal(&mut self, goal_color: PinColor) -> Option<Structure> {
        for _ in 0..MAX_ATTEMPTS {
            let Ok(case) = generator::square_goal_case(&mut self.rng, self.difficulty, goal_color)
            else {
                continue;
            };
            let goal = SquareGoal::new(case, goal_color, self.rng.random());
            if self.commit("square goal", &goal.pieces()) {
                return Some(Structure::SquareGoal(goal));
            }
        }
        warn!("{goal_color} square goal omitted after {MAX_ATTEMPTS} attempts");
        None
    }

    fn triangle_goal(&mut self, goal_color: PinColor) -> Option<Structure> {
        for _ in 0..MAX_ATTEMPTS {
            let Ok(case) =
                generator::triangle_goal_case(&mut self.rng, self.difficulty, goal_color)
            else {
                continue;
            };
            let goal = TriangleGoal::new(case, goal_color, self.rng.random());
            if self.commit("triangle goal", &goal.pieces()) {
                return Some(Structure::TriangleGoal(goal));
            }
        }
        warn!("{goal_color} triangle goal omitted after {MAX_ATTEMPTS} attempts");
        None
    }

    /// A single resource-aware draw: the sampler caps itself against a pool
    /// snapshot, so the commit only fails if the snapshot was misread.
    fn stacks_on_floor(&mut self) -> Option<Structure> {
        let case = generator::stacks_on_floor_case(
            &mut self.rng,
            self.difficulty,
            self.tracker.available(),
        );
        let structure = StacksOnFloor::new(case);
        if self.commit("stacks on floor", &structure.pieces()) {
            Some(Structure::StacksOnFloor(structure))
        } else {
            warn!("floor stacks omitted, draw exceeded the pool");
            None
        }
    }

    fn starting_pin(&mut self) -> Option<StartingPin> {
        for _ in 0..MAX_ATTEMPTS {
            let case = generator::starting_pin_case(&mut self.rng, self.difficulty);
            let structure = StartingPin::new(case);
            if self.commit("starting pins", &structure.pieces()) {
                return Some(structure);
            }
        }
        warn!("starting pins omitted after {MAX_ATTEMPTS} attempts");
        None
    }

    /// Always last: sweeps every orange pin still in the pool into the
    /// leftover row.
    fn remaining_pins(&mut self) -> Option<RemainingPins> {
        let orange = self.tracker.available().orange;
        let case = generator::remaining_pins_case(orange);
        let structure = RemainingPins::new(case);
        if self.commit("remaining pins", &structure.pieces()) {
            Some(structure)
        } else {
            warn!("remaining pins omitted, pool misread");
            None
        }
    }

    /// Affordability check plus defensive consume. Returns whether the
    /// pieces were paid for.
    fn commit(&mut self, name: &str, pieces: &[Piece]) -> bool {
        let pins: Vec<&Pin> = pieces.iter().copied().filter_map(Piece::pin).collect();
        let beams = pieces.iter().filter(|piece| piece.is_beam()).count() as u32;
        if !self.tracker.can_afford(pins.iter().copied()) || !self.tracker.can_afford_beams(beams)
        {
            return false;
        }
        match self.tracker.consume(pins, beams) {
            Ok(()) => {
                debug!("{name}: committed {} pieces", pieces.len());
                true
            }
            Err(error) => {
                warn!("{name}: {error}");
                false
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn remaining_budget(&self) -> PieceBudget {
        self.tracker.available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let first = generate_scenario(Difficulty::Medium, Some(99));
        let second = generate_scenario(Difficulty::Medium, Some(99));
        assert_eq!(first.piece_count(), second.piece_count());
        assert_eq!(first.scoring().totals(), second.scoring().totals());
    }

    #[test]
    fn zero_beams_skip_both_beam_slots() {
        let budget = PieceBudget {
            beams: 0,
            ..PieceBudget::competition()
        };
        let mut generator = ScenarioGenerator::with_budget(Difficulty::Hard, budget, 7);
        let scenario = generator.generate();
        assert!(scenario.standoff_goal.is_none());
        assert!(scenario.beam_on_floor.is_none());
    }

    #[test]
    fn remaining_pins_drain_the_orange_pool() {
        let mut generator =
            ScenarioGenerator::with_budget(Difficulty::Easy, PieceBudget::competition(), 21);
        let scenario = generator.generate();
        assert!(scenario.remaining_pins.is_some());
        assert_eq!(generator.remaining_budget().orange, 0);
    }

    #[test]
    fn exhausted_pool_still_yields_a_scenario() {
        let budget = PieceBudget {
            red: 0,
            blue: 0,
            orange: 0,
            beams: 0,
        };
        let mut generator = ScenarioGenerator::with_budget(Difficulty::Hard, budget, 3);
        let scenario = generator.generate();
        assert_eq!(scenario.piece_count(), 0);
    }
}
