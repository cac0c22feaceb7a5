//! The square goals: one blue and one red, each a corner zone that holds a
//! single candidate column. Both are the same family parameterized by the
//! goal color.

use glam::Vec3;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::piece::{column_pieces, Piece, Pin, PinColor};
use crate::scene::Scene;
use crate::scoring::{
    is_stack_matching_goal, is_three_color_stack, is_two_color_stack, stack_pin_count,
    StructureScoring,
};
use crate::structure::CaseError;

const FLOOR_Y: f32 = -114.0;
const PIN_HEIGHT: f32 = 60.0;
const GOAL_X: f32 = -880.0;
const GOAL_Z: f32 = 1180.0;

#[derive(Clone, Debug)]
pub enum SquareGoalCase {
    Empty,
    OneColumn { column: Vec<Pin> },
}

impl SquareGoalCase {
    pub fn empty() -> Self {
        SquareGoalCase::Empty
    }

    pub fn one_column(column: Vec<Pin>) -> Result<Self, CaseError> {
        if column.is_empty() {
            return Err(CaseError::EmptyColumn);
        }
        Ok(SquareGoalCase::OneColumn { column })
    }
}

#[derive(Clone, Debug)]
pub struct SquareGoal {
    pub case: SquareGoalCase,
    pub goal_color: PinColor,
    pub seed: u64,
}

impl SquareGoal {
    pub fn new(case: SquareGoalCase, goal_color: PinColor, seed: u64) -> Self {
        Self {
            case,
            goal_color,
            seed,
        }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        if let SquareGoalCase::OneColumn { column } = &self.case {
            column_pieces(column, &mut pieces);
        }
        pieces
    }

    pub fn scoring(&self) -> StructureScoring {
        let SquareGoalCase::OneColumn { column } = &self.case else {
            return StructureScoring::default();
        };
        StructureScoring {
            connected_pins: stack_pin_count(column, None),
            two_color_stacks: is_two_color_stack(column, None) as u32,
            three_color_stacks: is_three_color_stack(column, None) as u32,
            matching_goals: is_stack_matching_goal(column, self.goal_color) as u32,
            ..Default::default()
        }
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        let SquareGoalCase::OneColumn { column } = &self.case else {
            return;
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dx = rng.random::<f32>() * 10.0;
        let dz = rng.random::<f32>() * 10.0;
        // the blue square goal sits on the positive-z side, the red one mirrored
        let z_sign = if self.goal_color == PinColor::Blue {
            1.0
        } else {
            -1.0
        };
        let mut y = FLOOR_Y;
        for pin in column {
            scene
                .add_pin(
                    pin.color(),
                    Vec3::new(GOAL_X + dx, y, z_sign * (GOAL_Z + dz)),
                    Vec3::new(0.0, 90.0, 0.0),
                )
                .await;
            y += PIN_HEIGHT;
        }
    }
}
