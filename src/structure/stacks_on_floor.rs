//! Free-standing pin stacks lined up on the open floor, outside any goal.

use glam::Vec3;

use crate::piece::{column_pieces, Piece, Pin};
use crate::scene::Scene;
use crate::scoring::{
    is_three_color_stack, is_two_color_stack, stack_pin_count, StructureScoring,
};

const FLOOR_Y: f32 = -114.0;
const ZONE_Z: f32 = -600.0;
const PIN_HEIGHT: f32 = 60.0;
const STACK_SPACING: f32 = 12.0 * 25.4; // one foot in mm

/// Zero or more bottom-to-top pin columns. An empty arrangement is legal.
#[derive(Clone, Debug, Default)]
pub struct StacksOnFloorCase {
    pub stacks: Vec<Vec<Pin>>,
}

impl StacksOnFloorCase {
    pub fn new(stacks: Vec<Vec<Pin>>) -> Self {
        Self { stacks }
    }
}

#[derive(Clone, Debug)]
pub struct StacksOnFloor {
    pub case: StacksOnFloorCase,
}

impl StacksOnFloor {
    pub fn new(case: StacksOnFloorCase) -> Self {
        Self { case }
    }

    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for stack in &self.case.stacks {
            column_pieces(stack, &mut pieces);
        }
        pieces
    }

    pub fn scoring(&self) -> StructureScoring {
        let mut scoring = StructureScoring::default();
        for stack in &self.case.stacks {
            scoring.connected_pins += stack_pin_count(stack, None);
            scoring.two_color_stacks += is_two_color_stack(stack, None) as u32;
            scoring.three_color_stacks += is_three_color_stack(stack, None) as u32;
        }
        scoring
    }

    pub async fn visualize<S: Scene>(&self, scene: &mut S) {
        if self.case.stacks.is_empty() {
            return;
        }
        // center the row of stacks on the zone
        let total_width = (self.case.stacks.len() - 1) as f32 * STACK_SPACING;
        let start_x = -total_width / 2.0;
        for (index, stack) in self.case.stacks.iter().enumerate() {
            let x = start_x + index as f32 * STACK_SPACING;
            for (level, pin) in stack.iter().enumerate() {
                let y = FLOOR_Y + level as f32 * PIN_HEIGHT;
                scene
                    .add_pin(pin.color(), Vec3::new(x, y, ZONE_Z), Vec3::ZERO)
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TallyScene;

    #[test]
    fn empty_arrangement_is_legal_and_scoreless() {
        let structure = StacksOnFloor::new(StacksOnFloorCase::default());
        assert!(structure.pieces().is_empty());
        assert_eq!(structure.scoring(), StructureScoring::default());
    }

    #[test]
    fn stacks_score_without_a_beam() {
        let structure = StacksOnFloor::new(StacksOnFloorCase::new(vec![
            vec![Pin::red(), Pin::blue()],
            vec![Pin::orange()],
        ]));
        let scoring = structure.scoring();
        // the lone pin is not a stack
        assert_eq!(scoring.connected_pins, 2);
        assert_eq!(scoring.two_color_stacks, 1);
    }

    #[test]
    fn row_is_centered() {
        let structure = StacksOnFloor::new(StacksOnFloorCase::new(vec![
            vec![Pin::red(), Pin::red()],
            vec![Pin::blue(), Pin::blue()],
            vec![Pin::orange(), Pin::orange()],
        ]));
        let mut scene = TallyScene::default();
        pollster::block_on(structure.visualize(&mut scene));
        assert_eq!(scene.pins.len(), 6);
        assert_eq!(scene.pins[0].1.x, -STACK_SPACING);
        assert_eq!(scene.pins[2].1.x, 0.0);
        assert_eq!(scene.pins[4].1.x, STACK_SPACING);
    }
}
