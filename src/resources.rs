use std::fmt;

use crate::piece::{Pin, PinColor};

/// Counts of consumable game pieces, one field per pin color plus beams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceBudget {
    pub red: u32,
    pub blue: u32,
    pub orange: u32,
    pub beams: u32,
}

impl PieceBudget {
    /// The fixed competition inventory a field starts with.
    pub fn competition() -> Self {
        Self {
            red: 10,
            blue: 10,
            orange: 16,
            beams: 2,
        }
    }

    pub fn pins(&self, color: PinColor) -> u32 {
        match color {
            PinColor::Red => self.red,
            PinColor::Blue => self.blue,
            PinColor::Orange => self.orange,
        }
    }

    fn pins_mut(&mut self, color: PinColor) -> &mut u32 {
        match color {
            PinColor::Red => &mut self.red,
            PinColor::Blue => &mut self.blue,
            PinColor::Orange => &mut self.orange,
        }
    }

    pub fn total_pins(&self) -> u32 {
        self.red + self.blue + self.orange
    }
}

impl Default for PieceBudget {
    fn default() -> Self {
        Self::competition()
    }
}

/// Errors from the resource tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// A consume request asked for more pins of a color than remain.
    PinsExhausted(PinColor),
    /// A consume request asked for more beams than remain.
    BeamsExhausted,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::PinsExhausted(color) => {
                write!(f, "Not enough {color} pins remaining")
            }
            ResourceError::BeamsExhausted => write!(f, "Not enough beams remaining"),
        }
    }
}

impl std::error::Error for ResourceError {}

/// Gate-keeper for the shared, depleting inventory of one generation run.
///
/// Single-owner and strictly sequential: the orchestrator is the only
/// mutator, and counts only ever go down during a run.
#[derive(Clone, Debug)]
pub struct ResourceTracker {
    available: PieceBudget,
}

impl ResourceTracker {
    pub fn new() -> Self {
        Self::with_budget(PieceBudget::competition())
    }

    pub fn with_budget(budget: PieceBudget) -> Self {
        Self { available: budget }
    }

    /// Snapshot copy of the current counts.
    pub fn available(&self) -> PieceBudget {
        self.available
    }

    /// Pure check: can every color in the request be covered?
    pub fn can_afford<'a>(&self, pins: impl IntoIterator<Item = &'a Pin>) -> bool {
        let needed = Self::tally(pins);
        PinColor::iter_colors().all(|color| needed.pins(color) <= self.available.pins(color))
    }

    pub fn can_afford_beams(&self, count: u32) -> bool {
        count <= self.available.beams
    }

    /// Decrement the inventory by the given pieces.
    ///
    /// Defensive: re-checks affordability and fails without mutating anything
    /// when the request cannot be covered, so counts can never go negative.
    pub fn consume<'a>(
        &mut self,
        pins: impl IntoIterator<Item = &'a Pin>,
        beams: u32,
    ) -> Result<(), ResourceError> {
        let needed = Self::tally(pins);
        for color in PinColor::iter_colors() {
            if needed.pins(color) > self.available.pins(color) {
                return Err(ResourceError::PinsExhausted(color));
            }
        }
        if beams > self.available.beams {
            return Err(ResourceError::BeamsExhausted);
        }
        for color in PinColor::iter_colors() {
            *self.available.pins_mut(color) -= needed.pins(color);
        }
        self.available.beams -= beams;
        Ok(())
    }

    /// Colors with a strictly positive remaining count, in enumeration order.
    pub fn available_colors(&self) -> Vec<PinColor> {
        PinColor::iter_colors()
            .filter(|&color| self.available.pins(color) > 0)
            .collect()
    }

    pub fn total_pins_available(&self) -> u32 {
        self.available.total_pins()
    }

    fn tally<'a>(pins: impl IntoIterator<Item = &'a Pin>) -> PieceBudget {
        let mut needed = PieceBudget {
            red: 0,
            blue: 0,
            orange: 0,
            beams: 0,
        };
        for pin in pins {
            *needed.pins_mut(pin.color()) += 1;
        }
        needed
    }
}

impl Default for ResourceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PinColor {
    /// All colors in fixed enumeration order: red, blue, orange.
    pub fn iter_colors() -> impl Iterator<Item = PinColor> {
        use strum::IntoEnumIterator;
        PinColor::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Pin;

    #[test]
    fn competition_pool_counts() {
        let tracker = ResourceTracker::new();
        let available = tracker.available();
        assert_eq!(available.red, 10);
        assert_eq!(available.blue, 10);
        assert_eq!(available.orange, 16);
        assert_eq!(available.beams, 2);
    }

    #[test]
    fn can_afford_is_pure() {
        let tracker = ResourceTracker::new();
        let pins = vec![Pin::red(), Pin::red(), Pin::orange()];
        let before = tracker.available();
        assert!(tracker.can_afford(&pins));
        assert!(tracker.can_afford(&pins));
        assert_eq!(tracker.available(), before);
    }

    #[test]
    fn consume_decrements_exactly() {
        let mut tracker = ResourceTracker::new();
        let pins = vec![Pin::red(), Pin::red(), Pin::blue()];
        let before = tracker.available();
        tracker.consume(&pins, 1).unwrap();
        let after = tracker.available();
        assert_eq!(after.red, before.red - 2);
        assert_eq!(after.blue, before.blue - 1);
        assert_eq!(after.orange, before.orange);
        assert_eq!(after.beams, before.beams - 1);
    }

    #[test]
    fn consume_fails_without_mutating_when_exhausted() {
        let mut tracker = ResourceTracker::with_budget(PieceBudget {
            red: 1,
            blue: 0,
            orange: 0,
            beams: 0,
        });
        let pins = vec![Pin::red(), Pin::red()];
        assert_eq!(
            tracker.consume(&pins, 0),
            Err(ResourceError::PinsExhausted(PinColor::Red))
        );
        assert_eq!(tracker.available().red, 1);
        let no_pins: &[Pin] = &[];
        assert_eq!(tracker.consume(no_pins, 1), Err(ResourceError::BeamsExhausted));
    }

    #[test]
    fn available_colors_in_enumeration_order() {
        let tracker = ResourceTracker::with_budget(PieceBudget {
            red: 0,
            blue: 3,
            orange: 1,
            beams: 0,
        });
        assert_eq!(
            tracker.available_colors(),
            vec![PinColor::Blue, PinColor::Orange]
        );
    }
}
