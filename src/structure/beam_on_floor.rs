//! A beam placed loose on the floor, optionally bridging pin columns.
//! Every case of this family owns its beam.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::piece::{column_pieces, Beam, Piece, Pin};
use crate::scene::Scene;
use crate::scoring::{
    is_stack, is_three_color_stack, is_two_color_stack, stack_pin_count, StructureScoring,
};
use crate::structure::CaseError;

const FLOOR_Y: f32 = -114.0;
const ZONE_Z: f32 = 600.0;
const PIN_HEIGHT: f32 = 60.0;
const BEAM_HEIGHT: f32 = 110.0;
const BEAM_ARM_OFFSET: f32 = 64.0;
const FLOOR_BEAM_LIFT: f32 = 4.0;
const JITTER_RANGE: f32 = 200.0;

#[derive(Clone, Debug)]
pub enum BeamOnFloorCase {
    /// The beam alone, flat on the floor.
    JustBeam { beam: Beam },
    /// A beam resting on one bottom column (possibly empty, then the beam
    /// lies on the floor) with up to two columns standing on its arms.
    BeamWithColumns {
        bottom: Vec<Pin>,
        top_left: Vec<Pin>,
        top_right: Vec<Pin>,
        beam: Beam,
    },
    /// A beam bridging two equal-height bottom columns, with a column on top.
    BeamWithTwoBottomColumns {
        bottom_left: Vec<Pin>,
        bottom_right: Vec<Pin>,
        top: Vec<Pin>,
        beam: Beam,
    },
}

impl BeamOnFloorCase {
    pub fn just_beam() -> Self {
        BeamOnFloorCase::JustBeam { beam: Beam::new() }
    }

    pub fn beam_with_columns(bottom: Vec<Pin>, top_left: Vec<Pin>, top_right: Vec<Pin>) -> Self {
        BeamOnFloorCase::BeamWithColumns {
            bottom,
            top_left,
            top_right,
            beam: Beam::new(),
        }
    }

    /// Both bottom columns carry the beam, so they must be non-empty and of
    /// equal height.
    pub fn beam_with_two_bottom_columns(
        bottom_left: Vec<Pin>,
        bottom_right: Vec<Pin>,
        top: Vec<Pin>,
    ) -> Result<Self, CaseError> {
        if bottom_left.is_empty() || bottom_right.is_empty() {
            return Err(CaseError::EmptyColumn);
        }
        if bottom_left.len() != bottom_right.len() {
            return Err(CaseError::UnevenColumns);
        }
        Ok(BeamOnFloorCase::BeamWithTwoBottomColumns {
            bottom_left,
            bottom_right,
            top,
            beam: Beam::new(),
        })
    }

    pub fn beam(&self) -> &Beam {
        match self {
            BeamOnFloorCase::JustBeam { beam }
            | BeamOnFloorCase::BeamWithColumns { beam, .. }
            | BeamOnFloorCase::BeamWithTwoBottomColumns { beam, .. } => beam,
        }
    }
}

/// A floor beam arrangement with a seed for deterministic placement jitter.
#[derive(Clone, Debug)]
pub struct BeamOnFloor {
    pub case: BeamOnFloorCase,
    pub seed: u64,
}

impl BeamOnFloor {
    pub fn new(case: BeamOnFloorCase, seed: u64) -> Self {
        Self { case, seed }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        match &self.case {
            BeamOnFloorCase::JustBeam { beam } => pieces.push(Piece::Beam(beam)),
            BeamOnFloorCase::BeamWithColumns {
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
            BeamOnFloorCase::BeamWithTwoBottomColumns {
                bottom_left,
                bottom_right,
                top,
                beam,
            } => {
                column_pieces(bottom_left, &mut pieces);
                column_pieces(bottom_right, &mut pieces);
                column_pieces(top, &mut pieces);
                pieces.push(Piece::Beam(beam));
            }
        }
        pieces
    }

    /// Columns joined to the beam score with it; the beam itself counts as
    /// connected when it is untouched and at least one column forms a stack
    /// with it. A beam lying alone on the floor scores nothing.
    pub fn scoring(&self) -> StructureScoring {
        match &self.case {
            BeamOnFloorCase::JustBeam { .. } => StructureScoring::default(),
            BeamOnFloorCase::BeamWithColumns {
                bottom,
                top_left,
                top_right,
                beam,
            } => Self::score_columns([bottom, top_left, top_right], beam),
            BeamOnFloorCase::BeamWithTwoBottomColumns {
                bottom_left,
                bottom_right,
                top,
                beam,
            } => Self::score_columns([bottom_left, bottom_right, top], beam),
        }
    }

    fn score_columns(columns: [&Vec<Pin>; 3], beam: &Beam) -> StructureScoring {
        let mut scoring = StructureScoring::default();
        let mut stacks = 0;
        for column in columns {
            scoring.connected_pins += stack_pin_count(column, Some(beam));
            scoring.two_color_stacks += is_two_color_stack(column, Some(beam)) as u32;
            scoring.three_color_stacks += is_three_color_stack(column, Some(beam)) as u32;
            stacks += is_stack(column, Some(beam)) as u32;
        }
        scoring.connected_beams = (beam.untouched() && stacks > 0) as u32;
        scoring
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let rotate = rng.random::<f32>() * 2.0 * PI;
        match &self.case {
            BeamOnFloorCase::JustBeam { .. } => {
                scene
                    .add_beam(
                        Vec3::new(0.0, FLOOR_Y, ZONE_Z),
                        Vec3::new(0.0, rotate, 0.0),
                    )
                    .await;
            }
            BeamOnFloorCase::BeamWithColumns {
                bottom,
                top_left,
                top_right,
                ..
            } => {
                let dx = rng.random_range(-JITTER_RANGE..JITTER_RANGE);
                let dz = rng.random_range(-JITTER_RANGE..JITTER_RANGE);

                let mut y = FLOOR_Y;
                for pin in bottom {
                    scene
                        .add_pin(pin.color(), Vec3::new(dx, y, ZONE_Z + dz), Vec3::ZERO)
                        .await;
                    y += PIN_HEIGHT;
                }
                scene
                    .add_beam(Vec3::new(dx, y, ZONE_Z + dz), Vec3::new(0.0, rotate, 0.0))
                    .await;
                y += BEAM_HEIGHT;
                if bottom.is_empty() {
                    y += FLOOR_BEAM_LIFT;
                }

                let arm_x = BEAM_ARM_OFFSET * rotate.cos();
                let arm_z = BEAM_ARM_OFFSET * rotate.sin();
                let mut y2 = y;
                for pin in top_left {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(dx + arm_x, y2, ZONE_Z + dz - arm_z),
                            Vec3::new(0.0, 0.0, -PI),
                        )
                        .await;
                    y2 += PIN_HEIGHT;
                }
                y2 = y;
                for pin in top_right {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(dx - arm_x, y2, ZONE_Z + dz + arm_z),
                            Vec3::new(0.0, 0.0, PI),
                        )
                        .await;
                    y2 += PIN_HEIGHT;
                }
            }
            BeamOnFloorCase::BeamWithTwoBottomColumns {
                bottom_left,
                bottom_right,
                top,
                ..
            } => {
                let dx = rng.random_range(-JITTER_RANGE..JITTER_RANGE);
                let dz = rng.random_range(-JITTER_RANGE..JITTER_RANGE);
                let arm_x = BEAM_ARM_OFFSET * rotate.cos();
                let arm_z = BEAM_ARM_OFFSET * rotate.sin();

                let mut y = FLOOR_Y;
                for pin in bottom_left {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(dx + arm_x, y, ZONE_Z + dz - arm_z),
                            Vec3::ZERO,
                        )
                        .await;
                    y += PIN_HEIGHT;
                }
                y = FLOOR_Y;
                for pin in bottom_right {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(dx - arm_x, y, ZONE_Z + dz + arm_z),
                            Vec3::ZERO,
                        )
                        .await;
                    y += PIN_HEIGHT;
                }
                scene
                    .add_beam(Vec3::new(dx, y, ZONE_Z + dz), Vec3::new(0.0, rotate, 0.0))
                    .await;
                y += BEAM_HEIGHT;
                for pin in top {
                    scene
                        .add_pin(
                            pin.color(),
                            Vec3::new(dx, y, ZONE_Z + dz),
                            Vec3::new(0.0, 0.0, -PI),
                        )
                        .await;
                    y += PIN_HEIGHT;
                }
            }
        }
    }
}
