//! The triangle goals: one red and one blue, each offering three column
//! spots arranged in an L around the corner. Same family, parameterized by
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
// the three column spots relative to the field center, for the red goal
const SPOTS: [(f32, f32); 3] = [(880.0, 1180.0), (790.0, 1180.0), (880.0, 1090.0)];

#[derive(Clone, Debug)]
pub enum TriangleGoalCase {
    Empty,
    WithColumns { columns: [Vec<Pin>; 3] },
}

impl TriangleGoalCase {
    pub fn empty() -> Self {
        TriangleGoalCase::Empty
    }

    /// At least one of the three columns must hold a pin.
    pub fn with_columns(columns: [Vec<Pin>; 3]) -> Result<Self, CaseError> {
        if columns.iter().all(|column| column.is_empty()) {
            return Err(CaseError::AllColumnsEmpty);
        }
        Ok(TriangleGoalCase::WithColumns { columns })
    }
}

#[derive(Clone, Debug)]
pub struct TriangleGoal {
    pub case: TriangleGoalCase,
    pub goal_color: PinColor,
    pub seed: u64,
}

impl TriangleGoal {
    pub fn new(case: TriangleGoalCase, goal_color: PinColor, seed: u64) -> Self {
        Self {
            case,
            goal_color,
            seed,
        }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        if let TriangleGoalCase::WithColumns { columns } = &self.case {
            for column in columns {
                column_pieces(column, &mut pieces);
            }
        }
        pieces
    }

    pub fn scoring(&self) -> StructureScoring {
        let TriangleGoalCase::WithColumns { columns } = &self.case else {
            return StructureScoring::default();
        };
        let mut scoring = StructureScoring::default();
        for column in columns {
            scoring.connected_pins += stack_pin_count(column, None);
            scoring.two_color_stacks += is_two_color_stack(column, None) as u32;
            scoring.three_color_stacks += is_three_color_stack(column, None) as u32;
            scoring.matching_goals += is_stack_matching_goal(column, self.goal_color) as u32;
        }
        scoring
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        let TriangleGoalCase::WithColumns { columns } = &self.case else {
            return;
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dx = rng.random::<f32>() * 10.0;
        let dz = rng.random::<f32>() * 10.0;
        // the red triangle goal sits on the positive-z side, the blue one mirrored
        let z_sign = if self.goal_color == PinColor::Red {
            1.0
        } else {
            -1.0
        };
        for (column, (spot_x, spot_z)) in columns.iter().zip(SPOTS) {
            let mut y = FLOOR_Y;
            for pin in column {
                scene
                    .add_pin(
                        pin.color(),
                        Vec3::new(spot_x + dx, y, z_sign * (spot_z + dz)),
                        Vec3::ZERO,
                    )
                    .await;
                y += PIN_HEIGHT;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TallyScene;

    #[test]
    fn needs_at_least_one_column() {
        assert_eq!(
            TriangleGoalCase::with_columns([vec![], vec![], vec![]]).unwrap_err(),
            CaseError::AllColumnsEmpty
        );
        assert!(TriangleGoalCase::with_columns([vec![Pin::red()], vec![], vec![]]).is_ok());
    }

    #[test]
    fn each_matching_column_counts() {
        let case = TriangleGoalCase::with_columns([
            vec![Pin::red(), Pin::blue()],
            vec![Pin::red(), Pin::orange()],
            vec![Pin::blue(), Pin::red()],
        ])
        .unwrap();
        let goal = TriangleGoal::new(case, PinColor::Red, 5);
        let scoring = goal.scoring();
        assert_eq!(scoring.matching_goals, 2);
        assert_eq!(scoring.connected_pins, 6);
    }

    #[test]
    fn columns_land_on_their_spots() {
        let case = TriangleGoalCase::with_columns([
            vec![Pin::red()],
            vec![Pin::blue()],
            vec![Pin::orange()],
        ])
        .unwrap();
        let goal = TriangleGoal::new(case, PinColor::Red, 11);
        let mut scene = TallyScene::default();
        pollster::block_on(goal.visualize(&mut scene));
        assert_eq!(scene.pins.len(), 3);
        // three distinct spots
        assert_ne!(scene.pins[0].1, scene.pins[1].1);
        assert_ne!(scene.pins[1].1, scene.pins[2].1);
    }
}
