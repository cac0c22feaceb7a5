//! Pure structural predicates over piece arrangements, shared by every
//! structure family's scoring computation.
//!
//! A beam structurally supports a column, so a single pin resting on an
//! untouched beam already forms a valid stack; without a beam, isolated
//! single pins do not count. The beam also contributes one implicit color
//! slot: a two-color stack needs two distinct pin colors on its own, but
//! only one when a beam supplies the second slot, and a three-color stack
//! needs three distinct pin colors on its own but only two with a beam.

use std::collections::HashSet;

use crate::piece::{Beam, Pin, PinColor};

/// Per-structure scoring breakdown, recomputed on demand and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StructureScoring {
    pub connected_pins: u32,
    pub connected_beams: u32,
    pub two_color_stacks: u32,
    pub three_color_stacks: u32,
    pub matching_goals: u32,
    pub stacks_on_standoff_goal: u32,
}

impl StructureScoring {
    pub fn add(&mut self, other: StructureScoring) {
        self.connected_pins += other.connected_pins;
        self.connected_beams += other.connected_beams;
        self.two_color_stacks += other.two_color_stacks;
        self.three_color_stacks += other.three_color_stacks;
        self.matching_goals += other.matching_goals;
        self.stacks_on_standoff_goal += other.stacks_on_standoff_goal;
    }
}

/// Aggregate scoring for a whole scenario.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioScoring {
    pub structures: Vec<StructureScoring>,
    pub starting_pins: u32,
    pub contacted: u32,
}

impl ScenarioScoring {
    pub fn totals(&self) -> StructureScoring {
        let mut totals = StructureScoring::default();
        for scoring in &self.structures {
            totals.add(*scoring);
        }
        totals
    }
}

/// A column counts as a stack when it meets the minimum length (two pins on
/// its own, one pin when resting on a beam) and nothing in it has been
/// contacted by a robot.
pub fn is_stack(column: &[Pin], beam: Option<&Beam>) -> bool {
    let minimum = if beam.is_some() { 1 } else { 2 };
    column.len() >= minimum
        && column.iter().all(Pin::untouched)
        && beam.is_none_or(Beam::untouched)
}

pub fn is_two_color_stack(column: &[Pin], beam: Option<&Beam>) -> bool {
    let required = if beam.is_some() { 1 } else { 2 };
    distinct_colors(column) == required && is_stack(column, beam)
}

pub fn is_three_color_stack(column: &[Pin], beam: Option<&Beam>) -> bool {
    let required = if beam.is_some() { 2 } else { 3 };
    distinct_colors(column) >= required && is_stack(column, beam)
}

/// Goal match: a valid stack whose bottom-most pin carries the goal color.
pub fn is_stack_matching_goal(column: &[Pin], goal_color: PinColor) -> bool {
    is_stack(column, None)
        && column
            .first()
            .is_some_and(|pin| pin.color() == goal_color)
}

/// Pin count of a column if it forms a stack, otherwise zero.
pub fn stack_pin_count(column: &[Pin], beam: Option<&Beam>) -> u32 {
    if is_stack(column, beam) {
        column.len() as u32
    } else {
        0
    }
}

fn distinct_colors(column: &[Pin]) -> usize {
    column
        .iter()
        .map(Pin::color)
        .collect::<HashSet<PinColor>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Contact;

    fn touched(pin: Pin) -> Pin {
        pin.contact.set(Contact {
            robot1: true,
            robot2: false,
        });
        pin
    }

    #[test]
    fn stack_minimum_lengths() {
        let beam = Beam::new();
        assert!(!is_stack(&[], None));
        assert!(!is_stack(&[Pin::red()], None));
        assert!(is_stack(&[Pin::red(), Pin::red()], None));
        assert!(is_stack(&[Pin::red()], Some(&beam)));
        assert!(!is_stack(&[], Some(&beam)));
    }

    #[test]
    fn touched_pin_breaks_stack() {
        let column = vec![Pin::red(), touched(Pin::blue())];
        assert!(!is_stack(&column, None));
    }

    #[test]
    fn touched_beam_breaks_stack() {
        let beam = Beam::new();
        beam.contact.set(Contact {
            robot1: false,
            robot2: true,
        });
        assert!(!is_stack(&[Pin::red()], Some(&beam)));
    }

    #[test]
    fn matching_goal_is_decided_by_bottom_pin() {
        let orange_bottom = vec![Pin::orange(), Pin::red()];
        let red_bottom = vec![Pin::red(), Pin::orange()];
        assert!(is_stack_matching_goal(&orange_bottom, PinColor::Orange));
        assert!(!is_stack_matching_goal(&red_bottom, PinColor::Orange));
    }

    #[test]
    fn matching_goal_requires_a_stack() {
        assert!(!is_stack_matching_goal(&[Pin::orange()], PinColor::Orange));
    }

    #[test]
    fn two_color_stack_without_beam_needs_two_colors() {
        assert!(is_two_color_stack(&[Pin::red(), Pin::blue()], None));
        assert!(!is_two_color_stack(&[Pin::red(), Pin::red()], None));
        assert!(!is_two_color_stack(
            &[Pin::red(), Pin::blue(), Pin::orange()],
            None
        ));
    }

    #[test]
    fn two_color_stack_with_beam_needs_one_color() {
        let beam = Beam::new();
        assert!(is_two_color_stack(&[Pin::red()], Some(&beam)));
        assert!(is_two_color_stack(&[Pin::red(), Pin::red()], Some(&beam)));
        assert!(!is_two_color_stack(
            &[Pin::red(), Pin::blue()],
            Some(&beam)
        ));
    }

    #[test]
    fn three_color_stack_without_beam_needs_three_colors() {
        assert!(is_three_color_stack(
            &[Pin::red(), Pin::blue(), Pin::orange()],
            None
        ));
        assert!(!is_three_color_stack(&[Pin::red(), Pin::blue()], None));
    }

    #[test]
    fn three_color_stack_with_beam_needs_two_colors() {
        let beam = Beam::new();
        assert!(is_three_color_stack(
            &[Pin::red(), Pin::blue()],
            Some(&beam)
        ));
        assert!(!is_three_color_stack(&[Pin::red()], Some(&beam)));
    }

    #[test]
    fn totals_sum_every_field() {
        let scoring = ScenarioScoring {
            structures: vec![
                StructureScoring {
                    connected_pins: 2,
                    two_color_stacks: 1,
                    ..Default::default()
                },
                StructureScoring {
                    connected_pins: 3,
                    connected_beams: 1,
                    ..Default::default()
                },
            ],
            starting_pins: 4,
            contacted: 0,
        };
        let totals = scoring.totals();
        assert_eq!(totals.connected_pins, 5);
        assert_eq!(totals.connected_beams, 1);
        assert_eq!(totals.two_color_stacks, 1);
    }
}
