use std::str::FromStr;

use clap::Parser;

use field_lab::scene::TallyScene;
use field_lab::{generate_scenario, Difficulty};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Difficulty of the generated scenario: easy, medium or hard
    #[arg(default_value = "easy")]
    difficulty: String,
    /// Seed for reproducible generation; omit for a fresh random field
    #[arg(long)]
    seed: Option<u64>,
    /// Generate this many scenarios, reporting each
    #[arg(long, default_value_t = 1)]
    runs: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = match Difficulty::from_str(&args.difficulty) {
        Ok(difficulty) => difficulty,
        Err(_) => {
            eprintln!("unknown difficulty '{}', expected easy, medium or hard", args.difficulty);
            std::process::exit(1);
        }
    };

    for run in 0..args.runs {
        let seed = args.seed.map(|seed| seed + run as u64);
        let scenario = generate_scenario(difficulty, seed);

        println!("scenario ({difficulty}):");
        for structure in scenario.structures() {
            println!("  {} ({} pieces)", structure.name(), structure.pieces().len());
        }

        let scoring = scenario.scoring();
        let totals = scoring.totals();
        println!("scoring:");
        println!("  connected pins:         {}", totals.connected_pins);
        println!("  connected beams:        {}", totals.connected_beams);
        println!("  two-color stacks:       {}", totals.two_color_stacks);
        println!("  three-color stacks:     {}", totals.three_color_stacks);
        println!("  matching goals:         {}", totals.matching_goals);
        println!("  stacks on standoff:     {}", totals.stacks_on_standoff_goal);
        println!("  starting pins:          {}", scoring.starting_pins);

        let mut scene = TallyScene::default();
        pollster::block_on(scenario.visualize(&mut scene));
        println!(
            "placed {} pins and {} beams",
            scene.pins.len(),
            scene.beams.len()
        );
    }
}
