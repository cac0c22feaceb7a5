//! The structure families a field scenario is assembled from. Each family
//! is a closed sum type over its legal case shapes; scoring and piece
//! listing are matches over the case tag.

use std::fmt;

use crate::piece::Piece;
use crate::scene::Scene;
use crate::scoring::StructureScoring;

pub mod beam_on_floor;
pub mod floor_goal;
pub mod remaining_pins;
pub mod square_goal;
pub mod stacks_on_floor;
pub mod standoff_goal;
pub mod starting_pin;
pub mod triangle_goal;

pub use beam_on_floor::{BeamOnFloor, BeamOnFloorCase};
pub use floor_goal::{FloorColumn, FloorGoal, FloorGoalCase};
pub use remaining_pins::{RemainingPins, RemainingPinsCase};
pub use square_goal::{SquareGoal, SquareGoalCase};
pub use stacks_on_floor::{StacksOnFloor, StacksOnFloorCase};
pub use standoff_goal::{StandoffGoal, StandoffGoalCase};
pub use starting_pin::{StartingPin, StartingPinCase};
pub use triangle_goal::{TriangleGoal, TriangleGoalCase};

/// Construction violations for structure cases. A generator that draws an
/// invalid case discards it and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseError {
    /// A column that the case requires has no pins.
    EmptyColumn,
    /// Every column of a multi-column case is empty.
    AllColumnsEmpty,
    /// Two columns that must support a beam at the same height differ in length.
    UnevenColumns,
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseError::EmptyColumn => write!(f, "Column must have at least 1 pin"),
            CaseError::AllColumnsEmpty => write!(f, "Columns must have at least 1 pin"),
            CaseError::UnevenColumns => write!(f, "Supporting columns must match in height"),
        }
    }
}

impl std::error::Error for CaseError {}

/// A placed instance of any structure family.
#[derive(Clone, Debug)]
pub enum Structure {
    StandoffGoal(StandoffGoal),
    BeamOnFloor(BeamOnFloor),
    FloorGoal(FloorGoal),
    SquareGoal(SquareGoal),
    TriangleGoal(TriangleGoal),
    StacksOnFloor(StacksOnFloor),
    StartingPin(StartingPin),
    RemainingPins(RemainingPins),
}

impl Structure {
    pub fn name(&self) -> String {
        match self {
            Structure::StandoffGoal(_) => "standoff goal".into(),
            Structure::BeamOnFloor(_) => "beam on floor".into(),
            Structure::FloorGoal(_) => "floor goal".into(),
            Structure::SquareGoal(goal) => format!("{} square goal", goal.goal_color),
            Structure::TriangleGoal(goal) => format!("{} triangle goal", goal.goal_color),
            Structure::StacksOnFloor(_) => "stacks on floor".into(),
            Structure::StartingPin(_) => "starting pins".into(),
            Structure::RemainingPins(_) => "remaining pins".into(),
        }
    }

    /// Flattened list of every piece the structure contains.
    pub fn pieces(&self) -> Vec<Piece> {
        match self {
            Structure::StandoffGoal(s) => s.pieces(),
            Structure::BeamOnFloor(s) => s.pieces(),
            Structure::FloorGoal(s) => s.pieces(),
            Structure::SquareGoal(s) => s.pieces(),
            Structure::TriangleGoal(s) => s.pieces(),
            Structure::StacksOnFloor(s) => s.pieces(),
            Structure::StartingPin(s) => s.pieces(),
            Structure::RemainingPins(s) => s.pieces(),
        }
    }

    pub fn scoring(&self) -> StructureScoring {
        match self {
            Structure::StandoffGoal(s) => s.scoring(),
            Structure::BeamOnFloor(s) => s.scoring(),
            Structure::FloorGoal(s) => s.scoring(),
            Structure::SquareGoal(s) => s.scoring(),
            Structure::TriangleGoal(s) => s.scoring(),
            Structure::StacksOnFloor(s) => s.scoring(),
            Structure::StartingPin(s) => s.scoring(),
            Structure::RemainingPins(s) => s.scoring(),
        }
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        match self {
            Structure::StandoffGoal(s) => s.visualize(scene).await,
            Structure::BeamOnFloor(s) => s.visualize(scene).await,
            Structure::FloorGoal(s) => s.visualize(scene).await,
            Structure::SquareGoal(s) => s.visualize(scene).await,
            Structure::TriangleGoal(s) => s.visualize(scene).await,
            Structure::StacksOnFloor(s) => s.visualize(scene).await,
            Structure::StartingPin(s) => s.visualize(scene).await,
            Structure::RemainingPins(s) => s.visualize(scene).await,
        }
    }
}
