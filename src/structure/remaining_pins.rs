//! Whatever orange pins the generator did not spend end up in a neat row
//! beside the field, still part of the scenario inventory.

use glam::Vec3;

use crate::piece::{Piece, Pin};
use crate::scene::Scene;
use crate::scoring::StructureScoring;

const FLOOR_Y: f32 = -114.0;
const ROW_X: f32 = 600.0;
const PIN_SPACING: f32 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct RemainingPinsCase {
    pub pins: Vec<Pin>,
}

impl RemainingPinsCase {
    pub fn orange(count: u32) -> Self {
        Self {
            pins: (0..count).map(|_| Pin::orange()).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RemainingPins {
    pub case: RemainingPinsCase,
}

impl RemainingPins {
    pub fn new(case: RemainingPinsCase) -> Self {
        Self { case }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        self.case.pins.iter().map(Piece::Pin).collect()
    }

    /// Leftover pins sit alone on the floor and score nothing.
    pub fn scoring(&self) -> StructureScoring {
        StructureScoring::default()
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        if self.case.pins.is_empty() {
            return;
        }
        let total_width = (self.case.pins.len() - 1) as f32 * PIN_SPACING;
        let start_z = -total_width / 2.0;
        for (index, pin) in self.case.pins.iter().enumerate() {
            let z = start_z + index as f32 * PIN_SPACING;
            scene
                .add_pin(pin.color(), Vec3::new(ROW_X, FLOOR_Y, z), Vec3::ZERO)
                .await;
        }
    }
}
