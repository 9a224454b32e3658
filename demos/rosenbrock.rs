//! Maximize the Rosenbrock function
//! F(x, y) = 100(x² - y)² + (1 - x)² for x, y in [-2.048, 2.048].
//!
//! The maximum is F(-2.048, -2.048) = 3905.9262.

use bitga::ga::{GaConfig, GaProblem, GaRunner, GaState, Genome, Selection};
use bitga::gray;

struct Rosenbrock;

impl Rosenbrock {
    fn decode(g: &Genome) -> (f64, f64) {
        let x = gray::decode_u64(g.low_bits(0..10)) as f64;
        let y = gray::decode_u64(g.low_bits(10..20)) as f64;
        (4.096 * x / 1023.0 - 2.048, 4.096 * y / 1023.0 - 2.048)
    }
}

impl GaProblem for Rosenbrock {
    fn evaluate(&self, genome: &Genome) -> f64 {
        let (x, y) = Self::decode(genome);
        100.0 * (x * x - y).powi(2) + (1.0 - x).powi(2)
    }

    fn on_generation(&self, state: &GaState) {
        if let Some(best) = state.best() {
            let (x, y) = Self::decode(&best.genome);
            log::debug!("G={} F({x:.4}, {y:.4})={:.4}", state.generation(), best.fitness);
        }
    }
}

fn main() -> Result<(), bitga::GaError> {
    env_logger::init();

    let config = GaConfig::new(20)
        .with_population_size(80)
        .with_max_generations(200)
        .with_crossover_rate(0.6)
        .with_mutation_rate(0.001)
        .with_selection(Selection::Tournament)
        .with_keep_best(true);

    let result = GaRunner::run(&Rosenbrock, &config)?;
    let (x, y) = Rosenbrock::decode(&result.best);
    println!("F({x:.4}, {y:.4}) = {:.4}", result.best_fitness);
    Ok(())
}
