//! Core trait definitions for the evolutionary engine.
//!
//! The engine never looks inside a candidate. It depends on the domain only
//! through two function-shaped contracts: an [`Objective`] scores a candidate,
//! and an [`Agent`] turns zero or more sampled candidates into a new one.

use rand::RngCore;

/// A candidate solution.
///
/// `Clone` is the deep-copy capability the engine relies on: every candidate
/// handed to an agent is an independent clone, so agents may mutate their
/// inputs freely without touching the stored population.
///
/// Blanket-implemented for every `Clone + Send + Sync + 'static` type.
pub trait Candidate: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Candidate for T {}

/// A named scalar scoring function. Lower scores are better.
///
/// Objectives must be pure and total over every candidate the registered
/// agents can produce. The returned score must be finite; NaN or infinite
/// scores are rejected at evaluation time.
///
/// Implemented for any `Fn(&C) -> f64 + Send + Sync`:
///
/// ```
/// use u_evo::evo::Objective;
///
/// let len = |v: &Vec<u8>| v.len() as f64;
/// assert_eq!(len.score(&vec![1, 2, 3]), 3.0);
/// ```
pub trait Objective<C>: Send + Sync {
    /// Scores a candidate.
    fn score(&self, candidate: &C) -> f64;
}

impl<C, F> Objective<C> for F
where
    F: Fn(&C) -> f64 + Send + Sync,
{
    fn score(&self, candidate: &C) -> f64 {
        self(candidate)
    }
}

/// A randomized operator producing one new candidate.
///
/// An agent declares an input arity `k` at registration. It then receives
/// exactly `k` sampled candidates, or an **empty** `Vec` when the population
/// is empty. Every agent must handle the empty case, typically by building a
/// fresh seed candidate. A perturbation that finds nothing to change should
/// return its input unchanged rather than panic.
///
/// Implemented for any `Fn(Vec<C>, &mut dyn RngCore) -> C + Send + Sync`:
///
/// ```
/// use rand::RngCore;
/// use u_evo::evo::Agent;
///
/// let grow = |mut inputs: Vec<Vec<u8>>, _rng: &mut dyn RngCore| match inputs.pop() {
///     Some(mut v) => {
///         v.push(0);
///         v
///     }
///     None => vec![0],
/// };
/// let mut rng = rand::rng();
/// assert_eq!(grow.apply(vec![], &mut rng), vec![0]);
/// ```
pub trait Agent<C>: Send + Sync {
    /// Builds a new candidate from the sampled inputs.
    fn apply(&self, inputs: Vec<C>, rng: &mut dyn RngCore) -> C;
}

impl<C, F> Agent<C> for F
where
    F: Fn(Vec<C>, &mut dyn RngCore) -> C + Send + Sync,
{
    fn apply(&self, inputs: Vec<C>, rng: &mut dyn RngCore) -> C {
        self(inputs, rng)
    }
}
