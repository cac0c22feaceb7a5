//! The standoff goal: an elevated post in the center of the field. A beam
//! can rest on top of a pin column there, carrying up to two more columns.

use std::f32::consts::PI;

use glam::Vec3;

use crate::piece::{column_pieces, Beam, Piece, Pin};
use crate::scene::Scene;
use crate::scoring::{
    is_three_color_stack, is_two_color_stack, is_stack, stack_pin_count, StructureScoring,
};
use crate::structure::CaseError;

const POST_TOP_Y: f32 = 74.0;
const PIN_HEIGHT: f32 = 60.0;
const BEAM_HEIGHT: f32 = 110.0;
const BEAM_ARM_OFFSET: f32 = 64.0;

/// Legal shapes of a standoff goal arrangement. Any variant that visually
/// includes a beam owns its own `Beam`.
#[derive(Clone, Debug)]
pub enum StandoffGoalCase {
    Empty,
    BeamOnly {
        beam: Beam,
    },
    OneColumn {
        column: Vec<Pin>,
    },
    BeamWithColumns {
        bottom: Vec<Pin>,
        top_left: Vec<Pin>,
        top_right: Vec<Pin>,
        beam: Beam,
    },
}

impl StandoffGoalCase {
    pub fn empty() -> Self {
        StandoffGoalCase::Empty
    }

    pub fn beam_only() -> Self {
        StandoffGoalCase::BeamOnly { beam: Beam::new() }
    }

    pub fn one_column(column: Vec<Pin>) -> Result<Self, CaseError> {
        if column.is_empty() {
            return Err(CaseError::EmptyColumn);
        }
        Ok(StandoffGoalCase::OneColumn { column })
    }

    /// The beam rests on the bottom column (or directly on the post when the
    /// bottom column is empty), so all three columns may be empty here.
    pub fn beam_with_columns(bottom: Vec<Pin>, top_left: Vec<Pin>, top_right: Vec<Pin>) -> Self {
        StandoffGoalCase::BeamWithColumns {
            bottom,
            top_left,
            top_right,
            beam: Beam::new(),
        }
    }

    pub fn beam(&self) -> Option<&Beam> {
        match self {
            StandoffGoalCase::Empty | StandoffGoalCase::OneColumn { .. } => None,
            StandoffGoalCase::BeamOnly { beam }
            | StandoffGoalCase::BeamWithColumns { beam, .. } => Some(beam),
        }
    }
}

/// A standoff goal placed with a rotation around the post axis.
#[derive(Clone, Debug)]
pub struct StandoffGoal {
    pub case: StandoffGoalCase,
    pub rotation_degrees: u32,
}

impl StandoffGoal {
    pub fn new(case: StandoffGoalCase, rotation_degrees: u32) -> Self {
        Self {
            case,
            rotation_degrees,
        }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        match &self.case {
            StandoffGoalCase::Empty => {}
            StandoffGoalCase::BeamOnly { beam } => pieces.push(Piece::Beam(beam)),
            StandoffGoalCase::OneColumn { column } => column_pieces(column, &mut pieces),
            StandoffGoalCase::BeamWithColumns {
                bottom,
                top_left,
                top_right,
                beam,
            } => {
                column_pieces(bottom, &mut pieces);
                column_pieces(top_left, &mut pieces);
                column_pieces(top_right, &mut pieces);
                pieces.push(Piece::Beam(beam));
            }
        }
        pieces
    }

    /// This is the only family that reports `stacks_on_standoff_goal`:
    /// every valid stack resting on the standoff apparatus counts there.
    pub fn scoring(&self) -> StructureScoring {
        match &self.case {
            StandoffGoalCase::Empty => StructureScoring::default(),
            StandoffGoalCase::BeamOnly { beam } => StructureScoring {
                connected_beams: beam.untouched() as u32,
                ..Default::default()
            },
            StandoffGoalCase::OneColumn { column } => StructureScoring {
                connected_pins: stack_pin_count(column, None),
                two_color_stacks: is_two_color_stack(column, None) as u32,
                three_color_stacks: is_three_color_stack(column, None) as u32,
                stacks_on_standoff_goal: is_stack(column, None) as u32,
                ..Default::default()
            },
            StandoffGoalCase::BeamWithColumns {
                bottom,
                top_left,
                top_right,
                beam,
            } => {
                let mut scoring = StructureScoring {
                    connected_beams: beam.untouched() as u32,
                    ..Default::default()
                };
                for column in [bottom, top_left, top_right] {
                    scoring.connected_pins += stack_pin_count(column, Some(beam));
                    scoring.two_color_stacks += is_two_color_stack(column, Some(beam)) as u32;
                    scoring.three_color_stacks += is_three_color_stack(column, Some(beam)) as u32;
                    scoring.stacks_on_standoff_goal += is_stack(column, Some(beam)) as u32;
                }
                scoring
            }
        }
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        let rad = self.rotation_degrees as f32 * PI / 180.0;
        match &self.case {
            StandoffGoalCase::Empty => {}
            StandoffGoalCase::BeamOnly { .. } => {
                scene
                    .add_beam(Vec3::new(0.0, POST_TOP_Y, 0.0), Vec3::new(0.0, rad, 0.0))
                    .await;
            }
            StandoffGoalCase::OneColumn { column } => {
                let mut y = POST_TOP_Y;
                for pin in column {
                    scene
                        .add_pin(pin.color(), Vec3::new(0.0, y, 0.0), Vec3::new(0.0, rad, 0.0))
                        .await;
                    y += PIN_HEIGHT;
                }
            }
            StandoffGoalCase::BeamWithColumns {
                bottom,
                top_left,
                top_right,
                ..
            } => {
                let mut y = POST_TOP_Y;
                for pin in bottom {
                    scene
                        .add_pin(pin.color(), Vec3::new(0.0, y, 0.0), Vec3::ZERO)
                        .await;
                    y += PIN_HEIGHT;
                }
                scene
                    .add_beam(Vec3::new(0.0, y, 0.0), Vec3::new(0.0, rad, 0.0))
                    .await;

                let arm_x = BEAM_ARM_OFFSET * rad.cos();
                let arm_z = BEAM_ARM_OFFSET * rad.sin();
                let mut y2 = y + BEAM_HEIGHT;
                for pin in top_left {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(arm_x, y2, -arm_z),
                            Vec3::new(0.0, 0.0, -PI),
                        )
                        .await;
                    y2 += PIN_HEIGHT;
                }
                y2 = y + BEAM_HEIGHT;
                for pin in top_right {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(-arm_x, y2, arm_z),
                            Vec3::new(0.0, 0.0, PI),
                        )
                        .await;
                    y2 += PIN_HEIGHT;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TallyScene;

    #[test]
    fn one_column_requires_a_pin() {
        assert_eq!(
            StandoffGoalCase::one_column(vec![]).unwrap_err(),
            CaseError::EmptyColumn
        );
        assert!(StandoffGoalCase::one_column(vec![Pin::red()]).is_ok());
    }

    #[test]
    fn beam_cases_own_exactly_one_beam() {
        let beam_only = StandoffGoal::new(StandoffGoalCase::beam_only(), 0);
        assert_eq!(
            beam_only.pieces().iter().filter(|p| p.is_beam()).count(),
            1
        );
        let full = StandoffGoal::new(
            StandoffGoalCase::beam_with_columns(vec![Pin::red()], vec![], vec![Pin::blue()]),
            90,
        );
        assert_eq!(full.pieces().iter().filter(|p| p.is_beam()).count(), 1);
        assert_eq!(full.pieces().len(), 3);
    }

    #[test]
    fn single_pin_on_beam_counts_as_standoff_stack() {
        let goal = StandoffGoal::new(
            StandoffGoalCase::beam_with_columns(vec![Pin::red()], vec![], vec![]),
            0,
        );
        let scoring = goal.scoring();
        assert_eq!(scoring.stacks_on_standoff_goal, 1);
        assert_eq!(scoring.connected_pins, 1);
        assert_eq!(scoring.connected_beams, 1);
        assert_eq!(scoring.two_color_stacks, 1);
    }

    #[test]
    fn single_pin_column_without_beam_is_not_a_stack() {
        let goal = StandoffGoal::new(
            StandoffGoalCase::one_column(vec![Pin::red()]).unwrap(),
            0,
        );
        assert_eq!(goal.scoring().stacks_on_standoff_goal, 0);
        assert_eq!(goal.scoring().connected_pins, 0);
    }

    #[test]
    fn visualize_places_every_piece() {
        let goal = StandoffGoal::new(
            StandoffGoalCase::beam_with_columns(
                vec![Pin::red(), Pin::blue()],
                vec![Pin::orange()],
                vec![],
            ),
            180,
        );
        let mut scene = TallyScene::default();
        pollster::block_on(goal.visualize(&mut scene));
        assert_eq!(scene.pins.len(), 3);
        assert_eq!(scene.beams.len(), 1);
        // beam sits above the two bottom pins
        assert_eq!(scene.beams[0].0.y, POST_TOP_Y + 2.0 * PIN_HEIGHT);
    }
}
