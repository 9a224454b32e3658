//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::scaling::Scaling;
use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::ga::{GaConfig, Scaling, Selection};
///
/// let config = GaConfig::new(20)
///     .with_population_size(100)
///     .with_selection(Selection::Proportional)
///     .with_scaling(Scaling::MinSubtraction)
///     .with_keep_best(true)
///     .with_mutation_rate(0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of 64-bit loci per genome.
    pub genome_size: usize,

    /// Number of individuals in the population. Must be even, since
    /// crossover works on adjacent pairs.
    ///
    /// Typical range: 20–100.
    pub population_size: usize,

    /// Number of generations to run.
    ///
    /// Typical range: 100–500.
    pub max_generations: usize,

    /// Probability that an adjacent pair undergoes crossover (0.0–1.0).
    ///
    /// Typical range: 0.4–0.99.
    pub crossover_rate: f64,

    /// Per-locus probability of replacement by a random word (0.0–1.0).
    ///
    /// Typical range: 0.0001–0.1.
    pub mutation_rate: f64,

    /// How raw fitness becomes selection weight.
    pub scaling: Scaling,

    /// How the next generation is drawn.
    pub selection: Selection,

    /// Elitism: after each measurement the worst individual is replaced by
    /// a copy of the best genome seen so far.
    pub keep_best: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` or `Some(0)` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            genome_size: 10,
            population_size: 80,
            max_generations: 200,
            crossover_rate: 0.5,
            mutation_rate: 0.005,
            scaling: Scaling::default(),
            selection: Selection::default(),
            keep_best: false,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Creates a default configuration for genomes of `genome_size` loci.
    pub fn new(genome_size: usize) -> Self {
        Self {
            genome_size,
            ..Self::default()
        }
    }

    /// Sets the genome length.
    pub fn with_genome_size(mut self, n: usize) -> Self {
        self.genome_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets selection and scaling from a numeric strategy code.
    ///
    /// See [`Selection::from_code`] for the code table.
    pub fn with_strategy_code(mut self, code: u8) -> Result<Self, ConfigError> {
        let (selection, scaling) = Selection::from_code(code)?;
        self.selection = selection;
        self.scaling = scaling;
        Ok(self)
    }

    /// Enables or disables elitism.
    pub fn with_keep_best(mut self, keep: bool) -> Self {
        self.keep_best = keep;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genome_size == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        if self.population_size < 2 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
