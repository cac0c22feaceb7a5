use field_lab::piece::{Contact, Piece, PinColor};
use field_lab::resources::PieceBudget;
use field_lab::scene::TallyScene;
use field_lab::{generate_scenario, Difficulty, ScenarioGenerator};

fn consumed_by_color(scenario: &field_lab::Scenario) -> (u32, u32, u32, u32) {
    let mut red = 0;
    let mut blue = 0;
    let mut orange = 0;
    let mut beams = 0;
    for structure in scenario.structures() {
        for piece in structure.pieces() {
            match piece {
                Piece::Pin(pin) => match pin.color() {
                    PinColor::Red => red += 1,
                    PinColor::Blue => blue += 1,
                    PinColor::Orange => orange += 1,
                },
                Piece::Beam(_) => beams += 1,
            }
        }
    }
    (red, blue, orange, beams)
}

#[test]
fn hard_runs_never_overdraw_the_pool() {
    let pool = PieceBudget::competition();
    for seed in 0..1000 {
        let scenario = generate_scenario(Difficulty::Hard, Some(seed));
        let (red, blue, orange, beams) = consumed_by_color(&scenario);
        assert!(red <= pool.red, "seed {seed} used {red} red pins");
        assert!(blue <= pool.blue, "seed {seed} used {blue} blue pins");
        assert!(orange <= pool.orange, "seed {seed} used {orange} orange pins");
        assert!(beams <= pool.beams, "seed {seed} used {beams} beams");
    }
}

#[test]
fn zero_starting_beams_mean_no_standoff_goal() {
    let budget = PieceBudget {
        beams: 0,
        ..PieceBudget::competition()
    };
    for seed in 0..100 {
        let scenario = ScenarioGenerator::with_budget(Difficulty::Hard, budget, seed).generate();
        assert!(scenario.standoff_goal.is_none(), "seed {seed}");
        assert!(scenario.beam_on_floor.is_none(), "seed {seed}");
    }
}

#[test]
fn easy_generation_end_to_end() {
    for seed in 0..100 {
        let scenario = generate_scenario(Difficulty::Easy, Some(seed));
        assert!(scenario.remaining_pins.is_some(), "seed {seed}");
        let scoring = scenario.scoring();
        assert!(scoring.starting_pins <= 4);
        assert_eq!(scoring.contacted, 0);

        let mut scene = TallyScene::default();
        pollster::block_on(scenario.visualize(&mut scene));
        assert_eq!(
            scene.pins.len() + scene.beams.len(),
            scenario.piece_count(),
            "seed {seed}"
        );
    }
}

#[test]
fn touching_pieces_never_raises_any_score() {
    let scenario = generate_scenario(Difficulty::Hard, Some(424242));
    let structures = scenario.structures();
    let mut before = field_lab::scoring::StructureScoring::default();
    for structure in &structures {
        before.add(structure.scoring());
    }

    for structure in &structures {
        for piece in structure.pieces() {
            match piece {
                Piece::Pin(pin) => pin.contact.set(Contact {
                    robot1: true,
                    robot2: false,
                }),
                Piece::Beam(beam) => beam.contact.set(Contact {
                    robot1: false,
                    robot2: true,
                }),
            }
        }
    }

    let mut after = field_lab::scoring::StructureScoring::default();
    for structure in &structures {
        after.add(structure.scoring());
    }
    assert!(after.connected_pins <= before.connected_pins);
    assert!(after.connected_beams <= before.connected_beams);
    assert!(after.two_color_stacks <= before.two_color_stacks);
    assert!(after.three_color_stacks <= before.three_color_stacks);
    assert!(after.matching_goals <= before.matching_goals);
    assert!(after.stacks_on_standoff_goal <= before.stacks_on_standoff_goal);
    assert_eq!(after.connected_pins, 0);
    assert_eq!(after.connected_beams, 0);
}
