use std::cell::Cell;

use strum::{Display, EnumIter, EnumString};

/// The three pin colors, in fixed enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PinColor {
    Red,
    Blue,
    Orange,
}

/// Which robots have contacted a piece. Both flags start out false and are
/// set by the game-state collaborator; scoring only ever reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub robot1: bool,
    pub robot2: bool,
}

impl Contact {
    pub fn untouched(self) -> bool {
        !self.robot1 && !self.robot2
    }
}

/// A colored scoring piece. The color is fixed at creation; only the
/// contact flags change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    color: PinColor,
    pub contact: Cell<Contact>,
}

impl Pin {
    pub fn new(color: PinColor) -> Self {
        Self {
            color,
            contact: Cell::new(Contact::default()),
        }
    }

    pub fn red() -> Self {
        Self::new(PinColor::Red)
    }

    pub fn blue() -> Self {
        Self::new(PinColor::Blue)
    }

    pub fn orange() -> Self {
        Self::new(PinColor::Orange)
    }

    pub fn color(&self) -> PinColor {
        self.color
    }

    pub fn untouched(&self) -> bool {
        self.contact.get().untouched()
    }
}

/// The uncolored structural accessory piece, capacity-limited to two per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Beam {
    pub contact: Cell<Contact>,
}

impl Beam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn untouched(&self) -> bool {
        self.contact.get().untouched()
    }
}

/// Borrowed view over any piece a structure contains, used for flattened
/// piece lists handed to resource accounting.
#[derive(Clone, Copy, Debug)]
pub enum Piece<'a> {
    Pin(&'a Pin),
    Beam(&'a Beam),
}

impl<'a> Piece<'a> {
    pub fn pin(self) -> Option<&'a Pin> {
        match self {
            Piece::Pin(pin) => Some(pin),
            Piece::Beam(_) => None,
        }
    }

    pub fn is_beam(self) -> bool {
        matches!(self, Piece::Beam(_))
    }
}

/// Collect borrowed views of a whole column.
pub fn column_pieces<'a>(column: &'a [Pin], pieces: &mut Vec<Piece<'a>>) {
    pieces.extend(column.iter().map(Piece::Pin));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_starts_untouched() {
        let pin = Pin::orange();
        assert!(pin.untouched());
        pin.contact.set(Contact {
            robot1: true,
            robot2: false,
        });
        assert!(!pin.untouched());
    }

    #[test]
    fn color_is_fixed() {
        let pin = Pin::new(PinColor::Blue);
        assert_eq!(pin.color(), PinColor::Blue);
    }

    #[test]
    fn piece_view_distinguishes_kinds() {
        let pin = Pin::red();
        let beam = Beam::new();
        assert!(Piece::Pin(&pin).pin().is_some());
        assert!(!Piece::Pin(&pin).is_beam());
        assert!(Piece::Beam(&beam).is_beam());
        assert!(Piece::Beam(&beam).pin().is_none());
    }
}
