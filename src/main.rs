//! Byzantine Generals simulator CLI.
//!
//! Plays one run of the oral-message algorithm and prints what every
//! lieutenant decided.
//!
//! # Example
//!
//! ```bash
//! # 7 generals, 2 of them faulty, commander orders ATTACK
//! byzantine-generals -g 7 -m 2 -o ATTACK
//!
//! # Reproducible fault draw
//! byzantine-generals -g 7 -m 2 --seed 42
//! ```

use byzantine_generals::{Order, Simulation, SimulationConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "byzantine-generals")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of generals. The first is the commander, the rest are
    /// lieutenants
    #[arg(short = 'g', long, default_value = "4")]
    generals: usize,

    /// Number of faulty generals
    #[arg(short = 'm', long, default_value = "1")]
    faulty: usize,

    /// The order given by the commander (ATTACK or RETREAT)
    #[arg(short = 'o', long, default_value = "ATTACK")]
    order: Order,

    /// Seed for the faulty-general draw; omit for a random draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,byzantine_generals=info")),
        )
        .init();

    let args = Args::parse();

    let config = SimulationConfig {
        num_generals: args.generals,
        num_faulty: args.faulty,
        order: args.order,
        seed: args.seed,
    };

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let report = simulation.run();

    println!(
        "Commander (general 0) is {} and ordered {}",
        if report.commander_faulty { "faulty" } else { "loyal" },
        args.order,
    );
    for outcome in &report.outcomes {
        println!(
            "General {} [{}]: {}",
            outcome.id,
            if outcome.faulty { "faulty" } else { "loyal " },
            outcome.decision,
        );
    }
    println!("Consensus: {}", report.consensus);
}
