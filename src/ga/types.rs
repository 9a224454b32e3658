//! Core types for the GA engine.
//!
//! [`Genome`] is the unit of genetic material; [`GaProblem`] is the contract
//! between the generic engine and the caller's objective.

use super::runner::GaState;
use rand::Rng;
use std::ops::Range;

/// A candidate solution: a fixed-length sequence of 64-bit loci.
///
/// Genomes are values. `clone()` deep-copies the locus vector, so mutating
/// a copy never affects the original. Any bit pattern is a legal genome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome {
    loci: Vec<u64>,
}

impl Genome {
    /// Wraps an existing locus vector.
    pub fn new(loci: Vec<u64>) -> Self {
        Self { loci }
    }

    /// Creates a genome of `size` loci, each uniform over the full `u64` range.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        Self {
            loci: (0..size).map(|_| rng.random::<u64>()).collect(),
        }
    }

    /// Number of loci.
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn loci(&self) -> &[u64] {
        &self.loci
    }

    pub fn loci_mut(&mut self) -> &mut [u64] {
        &mut self.loci
    }

    /// Packs bit 0 of each locus in `range` into an integer.
    ///
    /// Locus `range.start` becomes bit 0 of the result. At most 64 loci are
    /// read; anything past that is ignored.
    ///
    /// ```
    /// use bitga::ga::Genome;
    ///
    /// let g = Genome::new(vec![1, 0, 3, 2]);
    /// assert_eq!(g.low_bits(0..4), 0b0101);
    /// ```
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    pub fn low_bits(&self, range: Range<usize>) -> u64 {
        self.loci[range]
            .iter()
            .take(64)
            .enumerate()
            .fold(0u64, |acc, (i, &locus)| acc | ((locus & 1) << i))
    }
}

impl From<Vec<u64>> for Genome {
    fn from(loci: Vec<u64>) -> Self {
        Self::new(loci)
    }
}

/// The best genome observed so far and its raw fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Best {
    pub genome: Genome,
    pub fitness: f64,
}

/// Defines the objective the engine maximizes.
///
/// Higher fitness is better. Fitness may be any real number, including
/// negative values; the scaling step turns raw scores into selection weights.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// genomes in parallel using rayon (the `parallel` feature).
pub trait GaProblem: Send + Sync {
    /// Evaluates a genome and returns its raw fitness.
    ///
    /// A panic here aborts the run; it is not caught.
    fn evaluate(&self, genome: &Genome) -> f64;

    /// Called once per generation, after fitness has been measured and
    /// scaled and before selection.
    ///
    /// The default implementation logs the generation and best fitness at
    /// debug level.
    fn on_generation(&self, state: &GaState) {
        log_generation(state);
    }
}

fn log_generation(state: &GaState) {
    if let Some(best) = state.best() {
        log::debug!("G={} F={:.6}", state.generation(), best.fitness);
    }
}

/// Adapts a plain fitness closure (and an optional callback) to
/// [`GaProblem`].
///
/// ```
/// use bitga::ga::{FnProblem, Genome};
/// use bitga::ga::GaProblem;
///
/// let problem = FnProblem::new(|g: &Genome| g.loci()[0].count_ones() as f64);
/// assert_eq!(problem.evaluate(&Genome::new(vec![0b111])), 3.0);
/// ```
pub struct FnProblem<F, C = fn(&GaState)> {
    fitness: F,
    callback: Option<C>,
}

impl<F> FnProblem<F>
where
    F: Fn(&Genome) -> f64 + Send + Sync,
{
    pub fn new(fitness: F) -> Self {
        Self {
            fitness,
            callback: None,
        }
    }
}

impl<F, C> FnProblem<F, C>
where
    F: Fn(&Genome) -> f64 + Send + Sync,
    C: Fn(&GaState) + Send + Sync,
{
    /// Replaces the default logging callback.
    pub fn with_callback<C2>(self, callback: C2) -> FnProblem<F, C2>
    where
        C2: Fn(&GaState) + Send + Sync,
    {
        FnProblem {
            fitness: self.fitness,
            callback: Some(callback),
        }
    }
}

impl<F, C> GaProblem for FnProblem<F, C>
where
    F: Fn(&Genome) -> f64 + Send + Sync,
    C: Fn(&GaState) + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> f64 {
        (self.fitness)(genome)
    }

    fn on_generation(&self, state: &GaState) {
        match &self.callback {
            Some(cb) => cb(state),
            None => log_generation(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_clone_does_not_alias() {
        let original = Genome::new(vec![1, 2, 3]);
        let mut copy = original.clone();
        copy.loci_mut()[0] = 42;
        assert_eq!(original.loci(), &[1, 2, 3]);
        assert_eq!(copy.loci(), &[42, 2, 3]);
    }

    #[test]
    fn test_random_genome_size() {
        let mut rng = create_rng(1);
        let g = Genome::random(10, &mut rng);
        assert_eq!(g.len(), 10);
        assert!(!g.is_empty());
        // 10 uniform words being all zero is effectively impossible.
        assert!(g.loci().iter().any(|&l| l != 0));
    }

    #[test]
    fn test_low_bits() {
        let g = Genome::new(vec![u64::MAX, 2, 5, 0, 1]);
        assert_eq!(g.low_bits(0..5), 0b10101);
        assert_eq!(g.low_bits(1..3), 0b10);
        assert_eq!(g.low_bits(3..3), 0);
    }

    #[test]
    fn test_fn_problem_callback_dispatch() {
        use crate::ga::{Evolution, GaConfig};
        use std::sync::atomic::{AtomicUsize, Ordering};

        let config = GaConfig::new(2).with_population_size(4).with_seed(3);

        // Default path logs and returns.
        let plain = FnProblem::new(|g: &Genome| g.loci()[0] as f64);
        let evo = Evolution::new(&plain, &config).unwrap();
        plain.on_generation(evo.state());

        let calls = AtomicUsize::new(0);
        let counted = FnProblem::new(|g: &Genome| g.loci()[0] as f64).with_callback(
            |state: &GaState| {
                assert_eq!(state.generation(), 0);
                calls.fetch_add(1, Ordering::Relaxed);
            },
        );
        let evo = Evolution::new(&counted, &config).unwrap();
        counted.on_generation(evo.state());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_fn_problem_evaluates() {
        let p = FnProblem::new(|g: &Genome| g.len() as f64);
        assert_eq!(p.evaluate(&Genome::new(vec![0; 4])), 4.0);
    }
}
