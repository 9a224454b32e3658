//! Genetic operators over 64-bit-word genomes.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point prefix exchange between adjacent pairs
//!
//! # Mutation
//!
//! - [`mutate`]: independent whole-word replacement per locus
//!
//! Mutation works at word granularity: a mutated locus is replaced by a fresh
//! uniform `u64`, not toggled bit by bit.

use super::types::Genome;
use rand::Rng;

/// Single-point crossover over the population in place.
///
/// The population is processed as disjoint adjacent pairs `(2i, 2i + 1)`.
/// Each pair is independently chosen with probability `rate`; for a chosen
/// pair a point `L` is drawn uniformly from `[1, genome length]` and the
/// first `L` loci of the two genomes are exchanged. A trailing unpaired
/// genome (odd population) is left untouched.
///
/// # Complexity
/// O(population · genome length)
pub fn crossover<R: Rng>(population: &mut [Genome], rate: f64, rng: &mut R) {
    for pair in population.chunks_exact_mut(2) {
        if rng.random_range(0.0..1.0) >= rate {
            continue;
        }
        let (left, right) = pair.split_at_mut(1);
        let (a, b) = (&mut left[0], &mut right[0]);
        let len = a.len().min(b.len());
        if len == 0 {
            continue;
        }
        let point = rng.random_range(1..=len);
        a.loci_mut()[..point].swap_with_slice(&mut b.loci_mut()[..point]);
    }
}

/// Replaces each locus, independently with probability `rate`, by a fresh
/// uniform random word.
pub fn mutate<R: Rng>(population: &mut [Genome], rate: f64, rng: &mut R) {
    for genome in population.iter_mut() {
        for locus in genome.loci_mut() {
            if rng.random_range(0.0..1.0) < rate {
                *locus = rng.random::<u64>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn random_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Genome> {
        (0..n).map(|_| Genome::random(size, rng)).collect()
    }

    #[test]
    fn test_crossover_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let before = random_population(20, 10, &mut rng);
        let mut after = before.clone();
        crossover(&mut after, 0.0, &mut rng);
        assert_eq!(before, after);
    }

    #[test]
    fn test_crossover_rate_one_exchanges_every_pair() {
        let mut rng = create_rng(42);
        let trials = 1_000;
        let mut exchanged = 0;
        for _ in 0..trials {
            let before = random_population(2, 10, &mut rng);
            let mut after = before.clone();
            crossover(&mut after, 1.0, &mut rng);
            if after != before {
                exchanged += 1;
            }
        }
        assert!(exchanged * 100 > trials * 99, "exchanged {exchanged}/{trials}");
    }

    #[test]
    fn test_crossover_swaps_prefix_only() {
        let mut rng = create_rng(3);
        for _ in 0..100 {
            let a = Genome::new(vec![0; 8]);
            let b = Genome::new(vec![1; 8]);
            let mut pop = vec![a, b];
            crossover(&mut pop, 1.0, &mut rng);

            // Child 0 is a run of 1s followed by 0s; child 1 is its complement.
            let point = pop[0].loci().iter().take_while(|&&x| x == 1).count();
            assert!((1..=8).contains(&point));
            assert!(pop[0].loci()[point..].iter().all(|&x| x == 0));
            for (x, y) in pop[0].loci().iter().zip(pop[1].loci()) {
                assert_eq!(x ^ y, 1);
            }
        }
    }

    #[test]
    fn test_crossover_preserves_locus_multiset() {
        let mut rng = create_rng(11);
        let before = random_population(10, 6, &mut rng);
        let mut after = before.clone();
        crossover(&mut after, 0.7, &mut rng);
        for j in 0..6 {
            for pair in 0..5 {
                let mut x = [before[2 * pair].loci()[j], before[2 * pair + 1].loci()[j]];
                let mut y = [after[2 * pair].loci()[j], after[2 * pair + 1].loci()[j]];
                x.sort_unstable();
                y.sort_unstable();
                assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let before = random_population(20, 10, &mut rng);
        let mut after = before.clone();
        mutate(&mut after, 0.0, &mut rng);
        assert_eq!(before, after);
    }

    #[test]
    fn test_mutate_rate_one_replaces_words() {
        let mut rng = create_rng(42);
        let before = vec![Genome::new(vec![0; 256])];
        let mut after = before.clone();
        mutate(&mut after, 1.0, &mut rng);
        let changed = after[0].loci().iter().filter(|&&x| x != 0).count();
        // A fresh uniform word is zero with probability 2^-64.
        assert_eq!(changed, 256);
    }
}
