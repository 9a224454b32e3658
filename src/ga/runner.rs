//! GA evolutionary loop execution.
//!
//! [`Evolution`] owns the population and drives it one generation at a time:
//! report → selection → crossover → mutation → measurement → scaling.
//! [`GaRunner`] wraps it for one-shot runs.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::selection::Selection;
use super::types::{Best, GaProblem, Genome};
use crate::error::GaError;
use crate::random::rng_from_seed;
use crate::stats::{arg_max, arg_min};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of the engine between generations.
///
/// `population[i]` was scored `fitness[i]` and weighted `scaled[i]`.
#[derive(Debug, Clone)]
pub struct GaState {
    generation: usize,
    population: Vec<Genome>,
    fitness: Vec<f64>,
    scaled: Vec<f64>,
    best: Option<Best>,
}

impl GaState {
    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Raw fitness of each population member.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Selection weight of each population member.
    pub fn scaled(&self) -> &[f64] {
        &self.scaled
    }

    /// Best genome seen across all generations, by raw fitness.
    ///
    /// Always `Some` once the initial population has been measured.
    pub fn best(&self) -> Option<&Best> {
        self.best.as_ref()
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best genome found during the entire run.
    pub best: Genome,

    /// Raw fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-so-far fitness after the initial measurement and after each
    /// generation.
    pub fitness_history: Vec<f64>,

    /// The final population.
    pub population: Vec<Genome>,

    /// Raw fitness of the final population.
    pub fitness: Vec<f64>,
}

/// A running evolution.
///
/// Construction validates the configuration, draws a random population and
/// measures it. Each [`step`](Self::step) then advances one generation.
///
/// ```
/// use bitga::ga::{Evolution, FnProblem, GaConfig, Genome};
///
/// let problem = FnProblem::new(|g: &Genome| g.loci()[0].count_ones() as f64);
/// let config = GaConfig::new(1).with_population_size(10).with_max_generations(5).with_seed(1);
///
/// let mut evo = Evolution::new(&problem, &config).unwrap();
/// while !evo.is_finished() {
///     evo.step().unwrap();
/// }
/// assert_eq!(evo.state().generation(), 5);
/// ```
pub struct Evolution<'a, P: GaProblem, R: Rng = StdRng> {
    problem: &'a P,
    config: GaConfig,
    rng: R,
    state: GaState,
    fitness_history: Vec<f64>,
}

impl<'a, P: GaProblem> Evolution<'a, P, StdRng> {
    /// Starts an evolution with a generator built from `config.seed`.
    pub fn new(problem: &'a P, config: &GaConfig) -> Result<Self, GaError> {
        Self::with_rng(problem, config, rng_from_seed(config.seed))
    }
}

impl<'a, P: GaProblem, R: Rng> Evolution<'a, P, R> {
    /// Starts an evolution driven by the given generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(problem: &'a P, config: &GaConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;

        let population: Vec<Genome> = (0..config.population_size)
            .map(|_| Genome::random(config.genome_size, &mut rng))
            .collect();

        let mut evo = Self {
            problem,
            config: config.clone(),
            rng,
            state: GaState {
                generation: 0,
                population,
                fitness: Vec::new(),
                scaled: Vec::new(),
                best: None,
            },
            fitness_history: Vec::with_capacity(config.max_generations + 1),
        };
        evo.measure()?;
        Ok(evo)
    }

    pub fn state(&self) -> &GaState {
        &self.state
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Whether `max_generations` generations have run.
    pub fn is_finished(&self) -> bool {
        self.state.generation >= self.config.max_generations
    }

    /// Advances one generation.
    ///
    /// Reports the current state to [`GaProblem::on_generation`], breeds the
    /// next population (select, crossover, mutate), then measures and scales
    /// it. Does nothing once the run is finished.
    pub fn step(&mut self) -> Result<(), GaError> {
        if self.is_finished() {
            return Ok(());
        }

        self.problem.on_generation(&self.state);

        let mut next = self.config.selection.select_generation(
            &self.state.population,
            &self.state.fitness,
            &self.state.scaled,
            &mut self.rng,
        );
        crossover(&mut next, self.config.crossover_rate, &mut self.rng);
        mutate(&mut next, self.config.mutation_rate, &mut self.rng);

        self.state.population = next;
        self.state.generation += 1;
        self.measure()
    }

    /// Runs the remaining generations.
    pub fn run(self) -> Result<GaResult, GaError> {
        self.run_with_cancel(None)
    }

    /// Runs the remaining generations with an optional cancellation token.
    ///
    /// If the flag is set, the run stops before the next generation and
    /// returns the best genome found so far.
    pub fn run_with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> Result<GaResult, GaError> {
        log::info!(
            "GA start: genome={} population={} generations={} selection={:?} scaling={:?} keep_best={}",
            self.config.genome_size,
            self.config.population_size,
            self.config.max_generations,
            self.config.selection,
            self.config.scaling,
            self.config.keep_best,
        );

        let mut cancelled = false;
        while !self.is_finished() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            self.step()?;
        }

        let result = self.into_result(cancelled)?;
        log::info!(
            "GA finished: generations={} best_fitness={:.6} cancelled={}",
            result.generations,
            result.best_fitness,
            result.cancelled,
        );
        Ok(result)
    }

    /// Consumes the evolution and returns its current result.
    ///
    /// Construction measures the initial population, so the best record is
    /// always present here; [`GaError::Unmeasured`] guards that invariant.
    pub fn into_result(self, cancelled: bool) -> Result<GaResult, GaError> {
        let best = self.state.best.ok_or(GaError::Unmeasured)?;
        Ok(GaResult {
            best_fitness: best.fitness,
            best: best.genome,
            generations: self.state.generation,
            cancelled,
            fitness_history: self.fitness_history,
            population: self.state.population,
            fitness: self.state.fitness,
        })
    }

    /// Scores the population, updates the best record, applies elitism and
    /// scales the result.
    fn measure(&mut self) -> Result<(), GaError> {
        let mut fitness = evaluate_population(
            self.problem,
            &self.state.population,
            self.config.parallel,
        );

        let top = arg_max(&fitness).ok_or(GaError::EmptyScores)?;
        let improved = match &self.state.best {
            Some(best) => fitness[top] > best.fitness,
            None => true,
        };
        if improved {
            self.state.best = Some(Best {
                genome: self.state.population[top].clone(),
                fitness: fitness[top],
            });
        }

        if self.config.keep_best {
            if let Some(best) = &self.state.best {
                let worst = arg_min(&fitness).ok_or(GaError::EmptyScores)?;
                self.state.population[worst] = best.genome.clone();
                fitness[worst] = best.fitness;
            }
        }

        // Tournament reads raw fitness only, so its weights are reported but
        // never validated.
        self.state.scaled = match self.config.selection {
            Selection::Proportional => self.config.scaling.scale(&fitness)?,
            Selection::Tournament => self.config.scaling.weights(&fitness),
        };
        self.state.fitness = fitness;

        if let Some(best) = &self.state.best {
            self.fitness_history.push(best.fitness);
        }
        Ok(())
    }
}

/// Executes a GA run in one call.
///
/// # Usage
///
/// ```ignore
/// let problem = FnProblem::new(my_fitness);
/// let config = GaConfig::new(10).with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization with a generator built from `config.seed`.
    ///
    /// # Errors
    /// [`GaError::Config`] if the configuration is invalid, before any
    /// genome is evaluated; [`GaError::InvalidWeight`] if scaling produces a
    /// negative or NaN weight.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, GaError> {
        Evolution::new(problem, config)?.run()
    }

    /// Runs the GA optimization driven by a caller-owned generator.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, GaError> {
        Evolution::with_rng(problem, config, rng)?.run()
    }

    /// Runs the GA with an optional cancellation token.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        Evolution::new(problem, config)?.run_with_cancel(cancel)
    }
}

/// Scores every genome, writing results by population index.
fn evaluate_population<P: GaProblem>(problem: &P, population: &[Genome], parallel: bool) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return population.par_iter().map(|g| problem.evaluate(g)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|g| problem.evaluate(g)).collect()
}

// ============================================================================
// Tests
// ============================================================================
