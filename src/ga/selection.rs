//! Selection strategies for the GA.
//!
//! Selection draws the next generation from the current one, with
//! replacement, biased toward fitter individuals. Every strategy assumes
//! **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::scaling::Scaling;
use super::types::Genome;
use crate::error::ConfigError;
use rand::Rng;
use std::str::FromStr;

/// Selection strategy for building the next generation.
///
/// # Examples
///
/// ```
/// use bitga::ga::{Scaling, Selection};
///
/// // Strategy code 0 is proportional selection over rank-scaled weights.
/// assert_eq!(
///     Selection::from_code(0).unwrap(),
///     (Selection::Proportional, Scaling::Rank)
/// );
/// assert!(Selection::from_code(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) sampling over the scaled
    /// weights of the current generation.
    ///
    /// With [`Scaling::Rank`] this is rank-proportional selection; with
    /// [`Scaling::MinSubtraction`] the worst individual is never drawn.
    ///
    /// Infinite fitness is unsupported here. Under min-subtraction a `+inf`
    /// score makes the total weight infinite and the draw degrades to
    /// uniform sampling, so the dominant individual gets no preference;
    /// several `-inf` scores produce NaN weights and abort the run. Use
    /// [`Selection::Tournament`] or rank scaling with such objectives.
    ///
    /// # Complexity
    /// O(n) per draw (linear scan)
    #[default]
    Proportional,

    /// Stochastic tournament: pick two individuals uniformly at random and
    /// keep the one with higher raw fitness (the second on ties).
    ///
    /// Ignores the scaled weights.
    ///
    /// # Complexity
    /// O(1) per draw
    Tournament,
}

impl Selection {
    /// Decodes a numeric strategy code into a selection/scaling pair.
    ///
    /// - `0`: proportional over rank-scaled weights
    /// - `1`: proportional over min-subtracted ("cmin") weights
    /// - `2`: stochastic tournament
    ///
    /// # Errors
    /// [`ConfigError::UnknownStrategy`] for any other code.
    pub fn from_code(code: u8) -> Result<(Selection, Scaling), ConfigError> {
        match code {
            0 => Ok((Selection::Proportional, Scaling::Rank)),
            1 => Ok((Selection::Proportional, Scaling::MinSubtraction)),
            2 => Ok((Selection::Tournament, Scaling::MinSubtraction)),
            other => Err(ConfigError::UnknownStrategy(other)),
        }
    }

    /// Selects a single index.
    ///
    /// `fitness` holds raw scores and `weights` their scaled counterparts;
    /// both must have the same length.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], weights: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Proportional => roulette(weights, rng),
            Selection::Tournament => tournament(fitness, rng),
        }
    }

    /// Draws `population.len()` genomes, independently and with replacement,
    /// and returns them as a new population.
    pub fn select_generation<R: Rng>(
        &self,
        population: &[Genome],
        fitness: &[f64],
        weights: &[f64],
        rng: &mut R,
    ) -> Vec<Genome> {
        let n = population.len();
        match self {
            Selection::Proportional => {
                let total: f64 = weights.iter().sum();
                if !is_usable_total(total) {
                    log::warn!(
                        "selection weights sum to {total}; falling back to uniform sampling"
                    );
                }
                (0..n)
                    .map(|_| population[spin(weights, total, rng)].clone())
                    .collect()
            }
            Selection::Tournament => (0..n)
                .map(|_| population[tournament(fitness, rng)].clone())
                .collect(),
        }
    }
}

impl FromStr for Selection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "proportional" | "roulette" => Ok(Selection::Proportional),
            "tournament" | "stochastic" | "stochastic-tournament" => Ok(Selection::Tournament),
            _ => Err(ConfigError::UnknownSelection(s.to_string())),
        }
    }
}

/// Roulette wheel draw over non-negative `weights`.
///
/// A bullet is drawn uniformly in `[0, W)` where `W` is the total weight,
/// then the weights are walked, subtracting each in turn until the bullet
/// fits within the current bucket.
///
/// If `W` is zero or not finite (for example every individual scaled to 0
/// under min-subtraction, or one weight is `+inf`), the index is drawn
/// uniformly instead and the weights are ignored.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from empty population");
    let total: f64 = weights.iter().sum();
    spin(weights, total, rng)
}

fn is_usable_total(total: f64) -> bool {
    total > 0.0 && total.is_finite()
}

fn spin<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let n = weights.len();
    if !is_usable_total(total) {
        return rng.random_range(0..n);
    }

    let mut bullet = rng.random_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        if bullet > w {
            bullet -= w;
        } else {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Binary stochastic tournament on raw fitness.
fn tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if fitness[a] > fitness[b] {
        a
    } else {
        b
    }
}
