//! Genetic Algorithm engine over fixed-length bit-vector genomes.
//!
//! A genome is a sequence of 64-bit loci ([`Genome`]). Users supply the
//! objective by implementing [`GaProblem`] (or wrapping a closure in
//! [`FnProblem`]); the engine evolves a population toward higher fitness.
//!
//! # Generation pipeline
//!
//! measure → scale → report → select → crossover → mutate → repeat
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (sizes, rates, strategies, elitism)
//! - [`Scaling`]: Raw fitness → selection weight (min-subtraction or rank)
//! - [`Selection`]: Roulette over weights, or stochastic tournament
//! - [`Evolution`]: Step-by-step driver exposing [`GaState`]
//! - [`GaRunner`]: One-shot runs returning a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and word-granularity mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod scaling;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{Evolution, GaResult, GaRunner, GaState};
pub use scaling::Scaling;
pub use selection::{roulette, Selection};
pub use types::{Best, FnProblem, GaProblem, Genome};
