//! Fitness scaling.
//!
//! Scaling converts the raw scores returned by the fitness function into
//! non-negative selection weights. The raw scores are left untouched and keep
//! serving best-individual comparisons, since scaled values are relative to
//! one generation and not comparable across generations.
//!
//! # References
//!
//! - MathWorks, *Global Optimization Toolbox: Fitness Scaling*

use crate::error::{ConfigError, GaError};
use crate::stats::{arg_min, arg_sort};
use std::str::FromStr;

/// Fitness scaling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scaling {
    /// Min-subtraction ("cmin"): `w[i] = raw[i] - min(raw)`.
    ///
    /// The worst individual gets weight exactly 0 and relative differences
    /// are preserved linearly. A uniform population scales to all zeros.
    MinSubtraction,

    /// Rank scaling: the individual of rank `n` (best is rank 1) gets weight
    /// `1/sqrt(n)`.
    ///
    /// Insensitive to the magnitude and skew of raw scores. Among equal raw
    /// scores the one with the higher index ranks better.
    #[default]
    Rank,
}

impl Scaling {
    /// Scales `raw` into a weight vector of the same length.
    ///
    /// # Errors
    /// [`GaError::InvalidWeight`] if any raw score is NaN or any weight
    /// comes out negative or NaN (min-subtraction with several `-inf`
    /// scores gives `-inf - -inf = NaN`).
    pub fn scale(&self, raw: &[f64]) -> Result<Vec<f64>, GaError> {
        if let Some(index) = raw.iter().position(|f| f.is_nan()) {
            return Err(GaError::InvalidWeight {
                index,
                value: raw[index],
            });
        }
        let weights = self.weights(raw);
        check_weights(&weights)?;
        Ok(weights)
    }

    /// Scales `raw` without validating the result.
    ///
    /// Used for reporting when the weights do not drive selection.
    pub fn weights(&self, raw: &[f64]) -> Vec<f64> {
        match self {
            Scaling::MinSubtraction => min_subtraction(raw),
            Scaling::Rank => rank(raw),
        }
    }
}

fn min_subtraction(raw: &[f64]) -> Vec<f64> {
    let Some(i) = arg_min(raw) else {
        return Vec::new();
    };
    let min = raw[i];
    raw.iter().map(|&f| f - min).collect()
}

fn rank(raw: &[f64]) -> Vec<f64> {
    let n = raw.len();
    let mut weights = vec![0.0; n];
    for (pos, &idx) in arg_sort(raw).iter().enumerate() {
        weights[idx] = 1.0 / ((n - pos) as f64).sqrt();
    }
    weights
}

fn check_weights(weights: &[f64]) -> Result<(), GaError> {
    match weights.iter().position(|w| w.is_nan() || *w < 0.0) {
        Some(index) => Err(GaError::InvalidWeight {
            index,
            value: weights[index],
        }),
        None => Ok(()),
    }
}

impl FromStr for Scaling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cmin" | "min" | "min-subtraction" => Ok(Scaling::MinSubtraction),
            "rank" => Ok(Scaling::Rank),
            _ => Err(ConfigError::UnknownScaling(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cmin_known() {
        let w = Scaling::MinSubtraction.scale(&[3.0, -1.0, 2.0]).unwrap();
        assert_eq!(w, vec![4.0, 0.0, 3.0]);
    }

    #[test]
    fn test_cmin_uniform_is_all_zero() {
        let w = Scaling::MinSubtraction.scale(&[5.0; 4]).unwrap();
        assert!(w.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_rank_known() {
        let w = Scaling::Rank.scale(&[2.0, 1.0, 1.5, 1.25]).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-12);
        assert!((w[2] - 1.0 / 2f64.sqrt()).abs() < 1e-12);
        assert!((w[3] - 1.0 / 3f64.sqrt()).abs() < 1e-12);
        assert!((w[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rank_ties_favor_later_index() {
        let w = Scaling::Rank.scale(&[1.0, 1.0]).unwrap();
        assert!(w[1] > w[0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Scaling::MinSubtraction.scale(&[]).unwrap().is_empty());
        assert!(Scaling::Rank.scale(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_nan_rejected() {
        let err = Scaling::MinSubtraction.scale(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, GaError::InvalidWeight { index: 1, .. }));
    }

    #[test]
    fn test_rank_nan_rejected_on_large_input() {
        let raw: Vec<f64> = (0..80)
            .map(|i| if i % 3 == 1 { f64::NAN } else { i as f64 })
            .collect();
        let err = Scaling::Rank.scale(&raw).unwrap_err();
        assert!(matches!(err, GaError::InvalidWeight { index: 1, .. }));

        // Unchecked weights still rank without panicking.
        assert_eq!(Scaling::Rank.weights(&raw).len(), 80);
    }

    #[test]
    fn test_cmin_repeated_neg_infinity_rejected() {
        let raw = [f64::NEG_INFINITY, 1.0, f64::NEG_INFINITY];
        assert!(Scaling::MinSubtraction.scale(&raw).is_err());
        assert!(Scaling::MinSubtraction.weights(&raw)[0].is_nan());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cmin".parse::<Scaling>().unwrap(), Scaling::MinSubtraction);
        assert_eq!("Rank".parse::<Scaling>().unwrap(), Scaling::Rank);
        assert_eq!(
            "sigma".parse::<Scaling>(),
            Err(ConfigError::UnknownScaling("sigma".into()))
        );
    }

    proptest! {
        #[test]
        fn prop_cmin_min_is_zero(raw in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let w = Scaling::MinSubtraction.scale(&raw).unwrap();
            prop_assert!(w.iter().all(|&x| x >= 0.0));
            prop_assert_eq!(w.iter().cloned().fold(f64::INFINITY, f64::min), 0.0);
        }

        #[test]
        fn prop_rank_weights_are_inverse_sqrt_ranks(
            raw in prop::collection::hash_set(-100_000i64..100_000, 1..64)
        ) {
            let raw: Vec<f64> = raw.into_iter().map(|x| x as f64).collect();
            let n = raw.len();
            let w = Scaling::Rank.scale(&raw).unwrap();

            let mut got = w.clone();
            got.sort_by(|a, b| b.partial_cmp(a).unwrap());
            for (k, &x) in got.iter().enumerate() {
                prop_assert!((x - 1.0 / ((k + 1) as f64).sqrt()).abs() < 1e-12);
            }
            prop_assert_eq!(got.len(), n);

            let best = crate::stats::arg_max(&raw).unwrap();
            prop_assert!((w[best] - 1.0).abs() < 1e-12);
        }
    }
}
