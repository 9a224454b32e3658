//! Genetic algorithm engine over fixed-length 64-bit-word genomes.
//!
//! The caller supplies a fitness function, a genome length and tuning
//! parameters; the engine evolves a population through selection, crossover
//! and mutation and reports the best individual found. It is a best-effort
//! stochastic search with no convergence guarantee.
//!
//! - [`ga`]: the evolutionary loop, scaling and selection strategies,
//!   genetic operators
//! - [`stats`]: argmax, argmin and stable argsort over score vectors
//! - [`gray`]: Gray-code transforms for decoding genome chunks into
//!   smoothly varying integers
//! - [`random`]: seeded generator construction
//!
//! # Example
//!
//! ```
//! use bitga::ga::{FnProblem, GaConfig, GaRunner, Genome};
//! use bitga::gray;
//!
//! // Maximize f(x) = sin(10x)·x + cos(2x)·x over x in [0, 5].
//! let problem = FnProblem::new(|g: &Genome| {
//!     let x = gray::decode_u64(g.low_bits(0..10)) as f64 / 1023.0 * 5.0;
//!     (10.0 * x).sin() * x + (2.0 * x).cos() * x
//! });
//! let config = GaConfig::new(10).with_seed(42);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert!(result.best_fitness > 4.3);
//! ```

pub mod error;
pub mod ga;
pub mod gray;
pub mod random;
pub mod stats;

pub use error::{ConfigError, GaError};
