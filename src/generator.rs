//! Random case draws for every structure family. Each function takes the
//! caller's RNG so a run stays reproducible from a single seed. A draw that
//! violates a case constraint surfaces the `CaseError`; the orchestrator
//! treats it as a miss and tries again.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::piece::{Pin, PinColor};
use crate::resources::PieceBudget;
use crate::structure::{
    BeamOnFloorCase, CaseError, FloorColumn, FloorGoalCase, RemainingPinsCase, SquareGoalCase,
    StacksOnFloorCase, StandoffGoalCase, StartingPinCase, TriangleGoalCase,
};
use crate::Difficulty;

pub fn random_pin(rng: &mut impl Rng) -> Pin {
    match rng.random_range(0..3) {
        0 => Pin::red(),
        1 => Pin::blue(),
        2 => Pin::orange(),
        _ => unreachable!(),
    }
}

pub fn random_pins(rng: &mut impl Rng, min: u32, max: u32) -> Vec<Pin> {
    let count = rng.random_range(min..=max);
    (0..count).map(|_| random_pin(rng)).collect()
}

/// A column whose bottom pin takes the preferred color with the given
/// probability. Higher pins repeating the preferred color get one resample,
/// with a 20% escape that lets the repeat stand. A bias, not a guarantee.
pub fn pins_with_preferred_bottom(
    rng: &mut impl Rng,
    min: u32,
    max: u32,
    preferred: PinColor,
    probability: f32,
) -> Vec<Pin> {
    let count = rng.random_range(min..=max);
    let mut pins = Vec::with_capacity(count as usize);
    for level in 0..count {
        if level == 0 && rng.random::<f32>() < probability {
            pins.push(Pin::new(preferred));
            continue;
        }
        let mut pin = random_pin(rng);
        if pin.color() == preferred && rng.random::<f32>() >= 0.2 {
            pin = random_pin(rng);
        }
        pins.push(pin);
    }
    pins
}

pub fn standoff_goal_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
) -> Result<StandoffGoalCase, CaseError> {
    let roll = rng.random::<f32>();
    match difficulty {
        Difficulty::Easy => {
            if roll < 0.5 {
                Ok(StandoffGoalCase::empty())
            } else if roll < 0.75 {
                Ok(StandoffGoalCase::beam_only())
            } else {
                StandoffGoalCase::one_column(random_pins(rng, 1, 2))
            }
        }
        Difficulty::Medium | Difficulty::Hard => {
            if roll < 0.4 {
                StandoffGoalCase::one_column(random_pins(rng, 1, 2))
            } else if roll < 0.5 {
                Ok(StandoffGoalCase::beam_only())
            } else {
                Ok(StandoffGoalCase::beam_with_columns(
                    random_pins(rng, 0, 2),
                    random_pins(rng, 0, 2),
                    random_pins(rng, 0, 2),
                ))
            }
        }
    }
}

pub fn beam_on_floor_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
) -> Result<BeamOnFloorCase, CaseError> {
    match difficulty {
        Difficulty::Easy => {
            if rng.random::<f32>() < 0.7 {
                Ok(BeamOnFloorCase::just_beam())
            } else {
                Ok(BeamOnFloorCase::beam_with_columns(
                    random_pins(rng, 1, 2),
                    random_pins(rng, 1, 2),
                    random_pins(rng, 1, 2),
                ))
            }
        }
        Difficulty::Medium | Difficulty::Hard => {
            let roll = rng.random::<f32>();
            if roll < 0.3 {
                let height = rng.random_range(1..=2);
                BeamOnFloorCase::beam_with_two_bottom_columns(
                    random_pins(rng, height, height),
                    random_pins(rng, height, height),
                    random_pins(rng, 1, 2),
                )
            } else if roll < 0.6 {
                Ok(BeamOnFloorCase::beam_with_columns(
                    vec![],
                    random_pins(rng, 1, 2),
                    random_pins(rng, 1, 2),
                ))
            } else {
                Ok(BeamOnFloorCase::beam_with_columns(
                    random_pins(rng, 1, 2),
                    random_pins(rng, 1, 2),
                    random_pins(rng, 1, 2),
                ))
            }
        }
    }
}

pub fn floor_goal_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
) -> Result<FloorGoalCase, CaseError> {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            if rng.random::<f32>() < 0.2 {
                return Ok(FloorGoalCase::empty());
            }
            let preference = match difficulty {
                Difficulty::Easy => 0.9,
                _ => 0.8,
            };
            let columns = std::array::from_fn(|_| {
                if rng.random::<f32>() < 0.5 {
                    FloorColumn::new(
                        pins_with_preferred_bottom(rng, 1, 3, PinColor::Orange, preference),
                        true,
                    )
                } else {
                    FloorColumn::empty()
                }
            });
            FloorGoalCase::with_columns(columns)
        }
        Difficulty::Hard => {
            let columns = std::array::from_fn(|_| {
                FloorColumn::new(
                    pins_with_preferred_bottom(rng, 2, 3, PinColor::Orange, 0.8),
                    rng.random::<f32>() < 0.8,
                )
            });
            FloorGoalCase::with_columns(columns)
        }
    }
}

pub fn square_goal_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
    goal_color: PinColor,
) -> Result<SquareGoalCase, CaseError> {
    match difficulty {
        Difficulty::Easy => {
            if rng.random::<f32>() < 0.2 {
                Ok(SquareGoalCase::empty())
            } else {
                SquareGoalCase::one_column(random_pins(rng, 1, 3))
            }
        }
        Difficulty::Medium => {
            SquareGoalCase::one_column(pins_with_preferred_bottom(rng, 1, 3, goal_color, 0.8))
        }
        Difficulty::Hard => {
            SquareGoalCase::one_column(pins_with_preferred_bottom(rng, 1, 3, goal_color, 0.7))
        }
    }
}

pub fn triangle_goal_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
    goal_color: PinColor,
) -> Result<TriangleGoalCase, CaseError> {
    match difficulty {
        Difficulty::Easy => {
            if rng.random::<f32>() < 0.2 {
                Ok(TriangleGoalCase::empty())
            } else {
                TriangleGoalCase::with_columns([
                    pins_with_preferred_bottom(rng, 1, 3, goal_color, 0.9),
                    vec![],
                    vec![],
                ])
            }
        }
        Difficulty::Medium | Difficulty::Hard => {
            let preference = match difficulty {
                Difficulty::Medium => 0.8,
                _ => 0.7,
            };
            let first = pins_with_preferred_bottom(rng, 1, 3, goal_color, preference);
            let second = if rng.random::<f32>() < 0.5 {
                pins_with_preferred_bottom(rng, 1, 3, goal_color, preference)
            } else {
                vec![]
            };
            let third = if rng.random::<f32>() < 0.5 {
                pins_with_preferred_bottom(rng, 1, 3, goal_color, preference)
            } else {
                vec![]
            };
            TriangleGoalCase::with_columns([first, second, third])
        }
    }
}

pub fn starting_pin_case(rng: &mut impl Rng, difficulty: Difficulty) -> StartingPinCase {
    if difficulty == Difficulty::Easy && rng.random::<f32>() < 0.8 {
        return StartingPinCase::untouched();
    }
    StartingPinCase::new(
        rng.random::<f32>() < 0.5,
        rng.random::<f32>() < 0.5,
        rng.random::<f32>() < 0.5,
        rng.random::<f32>() < 0.5,
    )
}

/// Pins for the floor stacks are drawn against a snapshot of the remaining
/// pool so the draw can never request more of a color than is left. Within a
/// stack the shuffled color bag prefers colors the stack has not used yet.
pub fn stacks_on_floor_case(
    rng: &mut impl Rng,
    difficulty: Difficulty,
    available: PieceBudget,
) -> StacksOnFloorCase {
    let mut pool = available;
    let stack_count = match difficulty {
        Difficulty::Easy => rng.random_range(0..=1),
        Difficulty::Medium | Difficulty::Hard => rng.random_range(0..=3),
    };
    let mut stacks = Vec::new();
    for _ in 0..stack_count {
        let desired = rng.random_range(2..=3).min(pool.total_pins());
        let mut stack: Vec<Pin> = Vec::with_capacity(desired as usize);
        for _ in 0..desired {
            let mut colors: Vec<PinColor> = PinColor::iter_colors()
                .filter(|&color| pool.pins(color) > 0)
                .collect();
            if colors.is_empty() {
                break;
            }
            colors.shuffle(rng);
            let used: Vec<PinColor> = stack.iter().map(Pin::color).collect();
            let color = colors
                .iter()
                .copied()
                .find(|color| !used.contains(color))
                .unwrap_or(colors[0]);
            match color {
                PinColor::Red => pool.red -= 1,
                PinColor::Blue => pool.blue -= 1,
                PinColor::Orange => pool.orange -= 1,
            }
            stack.push(Pin::new(color));
        }
        if !stack.is_empty() {
            stacks.push(stack);
        }
    }
    StacksOnFloorCase::new(stacks)
}

/// Whatever orange is left goes into the leftover row.
pub fn remaining_pins_case(orange_count: u32) -> RemainingPinsCase {
    RemainingPinsCase::orange(orange_count)
}
