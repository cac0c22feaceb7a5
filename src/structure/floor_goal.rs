//! The floor goal: a square scoring area on the mat with one candidate
//! column near each corner. Matching stacks only count when the column
//! actually sits within the marked area.

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
const CORNER_OFFSET: f32 = 115.0;
const GOAL_COLOR: PinColor = PinColor::Orange;

/// One corner column of the floor goal, with its within-area flag.
#[derive(Clone, Debug, Default)]
pub struct FloorColumn {
    pub pins: Vec<Pin>,
    pub within_area: bool,
}

impl FloorColumn {
    pub fn new(pins: Vec<Pin>, within_area: bool) -> Self {
        Self { pins, within_area }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub enum FloorGoalCase {
    Empty,
    WithColumns { columns: [FloorColumn; 4] },
}

impl FloorGoalCase {
    pub fn empty() -> Self {
        FloorGoalCase::Empty
    }

    /// At least one of the four corner columns must hold a pin.
    pub fn with_columns(columns: [FloorColumn; 4]) -> Result<Self, CaseError> {
        if columns.iter().all(|column| column.pins.is_empty()) {
            return Err(CaseError::AllColumnsEmpty);
        }
        Ok(FloorGoalCase::WithColumns { columns })
    }
}

#[derive(Clone, Debug)]
pub struct FloorGoal {
    pub case: FloorGoalCase,
    pub seed: u64,
}

impl FloorGoal {
    pub fn new(case: FloorGoalCase, seed: u64) -> Self {
        Self { case, seed }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        if let FloorGoalCase::WithColumns { columns } = &self.case {
            for column in columns {
                column_pieces(&column.pins, &mut pieces);
            }
        }
        pieces
    }

    pub fn scoring(&self) -> StructureScoring {
        let FloorGoalCase::WithColumns { columns } = &self.case else {
            return StructureScoring::default();
        };
        let mut scoring = StructureScoring::default();
        for column in columns {
            scoring.connected_pins += stack_pin_count(&column.pins, None);
            scoring.two_color_stacks += is_two_color_stack(&column.pins, None) as u32;
            scoring.three_color_stacks += is_three_color_stack(&column.pins, None) as u32;
            scoring.matching_goals +=
                (is_stack_matching_goal(&column.pins, GOAL_COLOR) && column.within_area) as u32;
        }
        scoring
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        let FloorGoalCase::WithColumns { columns } = &self.case else {
            return;
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        // corner signs: (-,+), (-,-), (+,+), (+,-)
        let corners = [(-1.0, 1.0), (-1.0, -1.0), (1.0, 1.0), (1.0, -1.0)];
        for (column, (sx, sz)) in columns.iter().zip(corners) {
            // columns inside the area drift inward, outside ones drift away
            let spread = if column.within_area { -2.0 } else { 1.0 };
            let dx = rng.random::<f32>() * 10.0 * spread;
            let dz = rng.random::<f32>() * 10.0 * spread;
            let mut y = FLOOR_Y;
            for pin in &column.pins {
                scene
                    .add_pin(
                        pin.color(),
                        Vec3::new(
                            sx * (CORNER_OFFSET + dx),
                            y,
                            sz * (CORNER_OFFSET + dz),
                        ),
                        Vec3::new(0.0, 90.0, 0.0),
                    )
                    .await;
                y += PIN_HEIGHT;
            }
        }
    }
}
