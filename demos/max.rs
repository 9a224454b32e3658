//! Find the maximum of f(x) = sin(10x)·x + cos(2x)·x for x in [0, 5].
//!
//! Run with `RUST_LOG=info cargo run --example max`.

use bitga::ga::{FnProblem, GaConfig, GaRunner, GaState, Genome};
use bitga::gray;

fn f(x: f64) -> f64 {
    (10.0 * x).sin() * x + (2.0 * x).cos() * x
}

fn decode(g: &Genome) -> f64 {
    gray::decode_u64(g.low_bits(0..10)) as f64 / 1023.0 * 5.0
}

fn main() -> Result<(), bitga::GaError> {
    env_logger::init();

    let problem = FnProblem::new(|g: &Genome| f(decode(g))).with_callback(|state: &GaState| {
        if state.generation() % 10 == 0 {
            if let Some(best) = state.best() {
                log::info!(
                    "generation {} x={:.6} f(x)={:.6}",
                    state.generation(),
                    decode(&best.genome),
                    best.fitness
                );
            }
        }
    });
    let config = GaConfig::new(10)
        .with_population_size(80)
        .with_max_generations(200)
        .with_crossover_rate(0.5)
        .with_mutation_rate(0.005);

    let result = GaRunner::run(&problem, &config)?;
    println!("x = {:.6}, f(x) = {:.6}", decode(&result.best), result.best_fitness);
    Ok(())
}
