//! Pareto dominance.
//!
//! All objectives are **minimized**: a smaller score is better.
//!
//! # Algorithms
//!
//! - [`dominates`]: Pareto dominance between two signatures
//! - [`pareto_front`]: indices of the non-dominated subset of a signature set
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use super::signature::Signature;

/// Returns `true` if `p` dominates `q`.
///
/// With per-objective differences `d_i = q_i - p_i`, `p` dominates `q` iff
/// `min(d_i) >= 0` and `max(d_i) > 0`: `p` is no worse on every objective
/// and strictly better on at least one.
///
/// Signatures of different lengths are not comparable and never dominate.
///
/// # Example
///
/// ```
/// use u_evo::evo::{dominates, Signature};
///
/// let p = Signature::from_pairs([("a", 1.0), ("b", 2.0)]).unwrap();
/// let q = Signature::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
///
/// assert!(dominates(&p, &q));
/// assert!(!dominates(&q, &p));
/// assert!(!dominates(&p, &p));
/// ```
pub fn dominates(p: &Signature, q: &Signature) -> bool {
    debug_assert_eq!(p.len(), q.len(), "signatures must cover the same objectives");
    if p.len() != q.len() || p.is_empty() {
        return false;
    }

    let mut min_diff = f64::INFINITY;
    let mut max_diff = f64::NEG_INFINITY;
    for (ps, qs) in p.scores().zip(q.scores()) {
        let d = qs - ps;
        min_diff = min_diff.min(d);
        max_diff = max_diff.max(d);
    }

    min_diff >= 0.0 && max_diff > 0.0
}

/// Computes the Pareto frontier of a set of signatures.
///
/// Returns the indices, in ascending order, of every signature that is not
/// dominated by any other member of the **full** input set. Equal signatures
/// and incomparable trade-offs are all retained.
///
/// The result depends only on the set of signatures, not on their order.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of signatures
///
/// # Example
///
/// ```
/// use u_evo::evo::{pareto_front, Signature};
///
/// let sigs: Vec<Signature> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
///     .iter()
///     .map(|s| Signature::from_pairs([("a", s[0]), ("b", s[1])]).unwrap())
///     .collect();
///
/// // (4, 4) is dominated by (3, 3)
/// assert_eq!(pareto_front(&sigs), vec![0, 1, 2]);
/// ```
pub fn pareto_front(signatures: &[Signature]) -> Vec<usize> {
    let n = signatures.len();
    let mut dominated = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&signatures[i], &signatures[j]) {
                dominated[j] = true;
            } else if dominates(&signatures[j], &signatures[i]) {
                dominated[i] = true;
            }
        }
    }

    (0..n).filter(|&i| !dominated[i]).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sig(values: &[f64]) -> Signature {
        Signature::from_pairs(values.iter().enumerate().map(|(i, &v)| (format!("o{i}"), v)))
            .unwrap()
    }

    fn sigs(rows: &[&[f64]]) -> Vec<Signature> {
        rows.iter().map(|r| sig(r)).collect()
    }

    // ---- dominates ----

    #[test]
    fn test_strictly_better_everywhere() {
        assert!(dominates(&sig(&[1.0, 1.0]), &sig(&[2.0, 2.0])));
    }

    #[test]
    fn test_better_in_one_equal_in_other() {
        assert!(dominates(&sig(&[1.0, 2.0]), &sig(&[1.0, 3.0])));
    }

    #[test]
    fn test_trade_off_is_incomparable() {
        let p = sig(&[1.0, 3.0]);
        let q = sig(&[3.0, 1.0]);
        assert!(!dominates(&p, &q));
        assert!(!dominates(&q, &p));
    }

    #[test]
    fn test_equal_does_not_dominate() {
        assert!(!dominates(&sig(&[2.0, 2.0]), &sig(&[2.0, 2.0])));
    }

    #[test]
    fn test_minimization_direction() {
        // higher scores are worse
        assert!(!dominates(&sig(&[5.0]), &sig(&[4.0])));
        assert!(dominates(&sig(&[4.0]), &sig(&[5.0])));
    }

    #[test]
    fn test_negative_scores() {
        assert!(dominates(&sig(&[-3.0, 0.0]), &sig(&[-1.0, 0.0])));
    }

    // ---- pareto_front ----

    #[test]
    fn test_front_empty() {
        assert!(pareto_front(&[]).is_empty());
    }

    #[test]
    fn test_front_single() {
        assert_eq!(pareto_front(&sigs(&[&[1.0, 2.0]])), vec![0]);
    }

    #[test]
    fn test_front_chain() {
        let s = sigs(&[&[3.0, 3.0], &[2.0, 2.0], &[1.0, 1.0]]);
        assert_eq!(pareto_front(&s), vec![2]);
    }

    #[test]
    fn test_front_mixed() {
        let s = sigs(&[
            &[1.0, 5.0],
            &[3.0, 3.0],
            &[5.0, 1.0],
            &[4.0, 4.0], // dominated by (3, 3)
            &[6.0, 6.0], // dominated by everything above
        ]);
        assert_eq!(pareto_front(&s), vec![0, 1, 2]);
    }

    #[test]
    fn test_front_three_objectives_all_incomparable() {
        let s = sigs(&[
            &[1.0, 5.0, 3.0],
            &[3.0, 1.0, 5.0],
            &[5.0, 3.0, 1.0],
            &[4.0, 4.0, 4.0],
        ]);
        assert_eq!(pareto_front(&s), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_front_keeps_duplicates() {
        let s = sigs(&[&[2.0, 2.0], &[2.0, 2.0], &[3.0, 3.0]]);
        assert_eq!(pareto_front(&s), vec![0, 1]);
    }

    // ---- properties ----

    fn arb_signatures() -> impl Strategy<Value = Vec<Signature>> {
        (1usize..4).prop_flat_map(|m| {
            prop::collection::vec(prop::collection::vec(0i32..6, m), 0..24).prop_map(|rows| {
                rows.iter()
                    .map(|r| sig(&r.iter().map(|&v| v as f64).collect::<Vec<_>>()))
                    .collect()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_irreflexive_and_antisymmetric(s in arb_signatures()) {
            for p in &s {
                prop_assert!(!dominates(p, p));
                for q in &s {
                    prop_assert!(!(dominates(p, q) && dominates(q, p)));
                }
            }
        }

        #[test]
        fn prop_front_is_mutually_non_dominated(s in arb_signatures()) {
            let front = pareto_front(&s);
            for &i in &front {
                for &j in &front {
                    prop_assert!(!dominates(&s[i], &s[j]));
                }
            }
        }

        #[test]
        fn prop_every_removed_was_dominated(s in arb_signatures()) {
            let front = pareto_front(&s);
            for i in (0..s.len()).filter(|i| !front.contains(i)) {
                prop_assert!(s.iter().any(|p| dominates(p, &s[i])));
            }
        }

        #[test]
        fn prop_front_is_order_independent(s in arb_signatures()) {
            let mut reversed = s.clone();
            reversed.reverse();

            let forward: Vec<Signature> =
                pareto_front(&s).into_iter().map(|i| s[i].clone()).collect();
            let mut backward: Vec<Signature> =
                pareto_front(&reversed).into_iter().map(|i| reversed[i].clone()).collect();
            backward.reverse();

            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_matches_left_fold(s in arb_signatures()) {
            // remove from the retained set everything dominated by each
            // member of the original set, one member at a time
            let mut retained: Vec<usize> = (0..s.len()).collect();
            for p in &s {
                retained.retain(|&q| !dominates(p, &s[q]));
            }
            prop_assert_eq!(pareto_front(&s), retained);
        }
    }
}
