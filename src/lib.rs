//! Procedural scenario generation and scoring for a head-to-head
//! pin-stacking game field. A scenario is a set of scoring structures drawn
//! at random against a finite shared piece pool; placement is delegated to
//! an external [`scene::Scene`] implementation.

use strum::{Display, EnumIter, EnumString};

pub mod generator;
pub mod piece;
pub mod resources;
pub mod scenario;
pub mod scene;
pub mod scoring;
pub mod smart_generator;
pub mod structure;

pub use scenario::Scenario;
pub use smart_generator::{generate_scenario, ScenarioGenerator};

/// How aggressively the generator fills the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}
