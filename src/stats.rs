//! Order statistics over score vectors.
//!
//! Used by the scaling and selection strategies to locate the best and worst
//! members of a generation and to rank them.

/// Index of the first occurrence of the maximum score.
///
/// Returns `None` for an empty slice. NaN scores never win a comparison.
pub fn arg_max(scores: &[f64]) -> Option<usize> {
    let mut iter = scores.iter().enumerate();
    let (mut best, mut best_val) = iter.next().map(|(i, &v)| (i, v))?;
    for (i, &v) in iter {
        if v > best_val {
            best = i;
            best_val = v;
        }
    }
    Some(best)
}

/// Index of the first occurrence of the minimum score.
///
/// Returns `None` for an empty slice.
pub fn arg_min(scores: &[f64]) -> Option<usize> {
    let mut iter = scores.iter().enumerate();
    let (mut best, mut best_val) = iter.next().map(|(i, &v)| (i, v))?;
    for (i, &v) in iter {
        if v < best_val {
            best = i;
            best_val = v;
        }
    }
    Some(best)
}

/// Permutation of indices that sorts `scores` ascending.
///
/// The sort is stable: equal scores keep their original relative order.
/// Scores are compared with [`f64::total_cmp`], so NaN never breaks the
/// sort: positive NaN orders after `+inf`, negative NaN before `-inf`.
///
/// ```
/// use bitga::stats::arg_sort;
///
/// assert_eq!(arg_sort(&[2.0, 1.0, 1.5, 1.25]), vec![1, 3, 2, 0]);
/// ```
pub fn arg_sort(scores: &[f64]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..scores.len()).collect();
    perm.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    perm
}
