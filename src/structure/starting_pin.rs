//! The four starting pins: one red and one blue at each end of the field.
//! A cleared pin has already been removed by a robot and leaves the field.

use glam::Vec3;

use crate::piece::{Piece, Pin};
use crate::scene::Scene;
use crate::scoring::StructureScoring;

const INCH: f32 = 25.4;
const END_X: f32 = 3.0 * 12.0 * INCH;
const TOP_Z: f32 = 1.5 * 12.0 * INCH;
const BOTTOM_Z: f32 = 0.5 * 12.0 * INCH;
const TILT: f32 = 45.0;

/// The fixed four starting pins with their cleared flags. Only pins that
/// have not been cleared remain on the field.
#[derive(Clone, Debug)]
pub struct StartingPinCase {
    red_top: Pin,
    red_bottom: Pin,
    blue_top: Pin,
    blue_bottom: Pin,
    pub red_top_cleared: bool,
    pub red_bottom_cleared: bool,
    pub blue_top_cleared: bool,
    pub blue_bottom_cleared: bool,
}

impl StartingPinCase {
    pub fn new(
        red_top_cleared: bool,
        red_bottom_cleared: bool,
        blue_top_cleared: bool,
        blue_bottom_cleared: bool,
    ) -> Self {
        Self {
            red_top: Pin::red(),
            red_bottom: Pin::red(),
            blue_top: Pin::blue(),
            blue_bottom: Pin::blue(),
            red_top_cleared,
            red_bottom_cleared,
            blue_top_cleared,
            blue_bottom_cleared,
        }
    }

    pub fn untouched() -> Self {
        Self::new(false, false, false, false)
    }

    fn remaining(&self) -> Vec<&Pin> {
        let mut pins = Vec::with_capacity(4);
        if !self.red_top_cleared {
            pins.push(&self.red_top);
        }
        if !self.red_bottom_cleared {
            pins.push(&self.red_bottom);
        }
        if !self.blue_top_cleared {
            pins.push(&self.blue_top);
        }
        if !self.blue_bottom_cleared {
            pins.push(&self.blue_bottom);
        }
        pins
    }
}

#[derive(Clone, Debug)]
pub struct StartingPin {
    pub case: StartingPinCase,
}

impl StartingPin {
    pub fn new(case: StartingPinCase) -> Self {
        Self { case }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        self.case.remaining().into_iter().map(Piece::Pin).collect()
    }

    /// The number of remaining starting pins feeds the scenario total;
    /// starting pins never form stacks or match goals.
    pub fn scoring(&self) -> StructureScoring {
        StructureScoring::default()
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        if !self.case.red_top_cleared {
            scene
                .add_pin(
                    self.case.red_top.color(),
                    Vec3::new(-END_X, 0.0, TOP_Z),
                    Vec3::new(0.0, 0.0, -TILT),
                )
                .await;
        }
        if !self.case.blue_top_cleared {
            scene
                .add_pin(
                    self.case.blue_top.color(),
                    Vec3::new(-END_X, 0.0, -TOP_Z),
                    Vec3::new(0.0, 0.0, -TILT),
                )
                .await;
        }
        if !self.case.red_bottom_cleared {
            scene
                .add_pin(
                    self.case.red_bottom.color(),
                    Vec3::new(END_X, 0.0, -BOTTOM_Z),
                    Vec3::new(0.0, 0.0, TILT),
                )
                .await;
        }
        if !self.case.blue_bottom_cleared {
            scene
                .add_pin(
                    self.case.blue_bottom.color(),
                    Vec3::new(END_X, 0.0, BOTTOM_Z),
                    Vec3::new(0.0, 0.0, TILT),
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PinColor;

    #[test]
    fn cleared_pins_leave_the_field() {
        let all_present = StartingPin::new(StartingPinCase::untouched());
        assert_eq!(all_present.pieces().len(), 4);

        let two_cleared = StartingPin::new(StartingPinCase::new(true, false, true, false));
        let pieces = two_cleared.pieces();
        assert_eq!(pieces.len(), 2);
        let colors: Vec<PinColor> = pieces
            .iter()
            .filter_map(|piece| piece.pin().map(Pin::color))
            .collect();
        assert_eq!(colors, vec![PinColor::Red, PinColor::Blue]);
    }

    #[test]
    fn starting_pins_never_contribute_structure_scoring() {
        let structure = StartingPin::new(StartingPinCase::untouched());
        assert_eq!(structure.scoring(), StructureScoring::default());
    }
}
