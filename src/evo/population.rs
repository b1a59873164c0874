//! The population store.
//!
//! [`Population`] maps each [`Signature`] to the candidate that produced it.
//! Entries iterate in first-insertion order; overwriting a signature keeps the
//! entry's position and replaces its candidate.

use super::dominance::pareto_front;
use super::signature::Signature;
use rand::seq::IndexedRandom;
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;

/// Candidates keyed by their evaluation signature.
#[derive(Debug, Clone)]
pub struct Population<C> {
    entries: Vec<(Signature, C)>,
    index: HashMap<Signature, usize>,
}

impl<C> Default for Population<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<C> Population<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `candidate` at `signature`, replacing any candidate already
    /// stored there.
    ///
    /// Returns `true` if the signature was new.
    pub fn insert(&mut self, signature: Signature, candidate: C) -> bool {
        match self.index.get(&signature) {
            Some(&i) => {
                self.entries[i].1 = candidate;
                false
            }
            None => {
                self.index.insert(signature.clone(), self.entries.len());
                self.entries.push((signature, candidate));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        self.index.contains_key(signature)
    }

    /// The candidate stored at `signature`.
    pub fn get(&self, signature: &Signature) -> Option<&C> {
        self.index.get(signature).map(|&i| &self.entries[i].1)
    }

    /// Iterates `(signature, candidate)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &C)> + '_ {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    pub fn signatures(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.entries.iter().map(|(s, _)| s)
    }

    pub fn candidates(&self) -> impl Iterator<Item = &C> + '_ {
        self.entries.iter().map(|(_, c)| c)
    }

    /// Consumes the population into its `(signature, candidate)` pairs.
    pub fn into_vec(self) -> Vec<(Signature, C)> {
        self.entries
    }

    /// Discards every entry whose signature is dominated by another entry.
    ///
    /// Returns the number of entries removed. Survivors keep their order.
    pub fn remove_dominated(&mut self) -> usize {
        let signatures: Vec<Signature> = self.signatures().cloned().collect();
        let front = pareto_front(&signatures);
        let removed = self.entries.len() - front.len();
        if removed == 0 {
            return 0;
        }

        let mut keep = vec![false; self.entries.len()];
        for i in front {
            keep[i] = true;
        }
        let mut flags = keep.into_iter();
        self.entries.retain(|_| flags.next().unwrap_or(false));
        self.reindex();
        removed
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, (sig, _)) in self.entries.iter().enumerate() {
            self.index.insert(sig.clone(), i);
        }
    }

    /// Tabulates the objective scores of every entry.
    ///
    /// Columns are taken from the first entry; an empty population yields an
    /// empty summary.
    pub fn summarize(&self) -> Summary {
        let objectives = self
            .entries
            .first()
            .map(|(sig, _)| sig.names().map(str::to_string).collect())
            .unwrap_or_default();
        let rows = self
            .entries
            .iter()
            .map(|(sig, _)| sig.scores().collect())
            .collect();
        Summary { objectives, rows }
    }
}

impl<C: Clone> Population<C> {
    /// Draws `k` candidates uniformly at random, with replacement.
    ///
    /// Each returned candidate is an independent clone. An empty population
    /// yields an empty `Vec` whatever `k` is.
    pub fn sample(&self, k: usize, rng: &mut dyn RngCore) -> Vec<C> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        (0..k)
            .filter_map(|_| self.entries.choose(rng).map(|(_, c)| c.clone()))
            .collect()
    }
}

impl<C: fmt::Display> fmt::Display for Population<C> {
    /// One line per entry: `{name: score, ...}:\t<candidate>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sig, candidate) in &self.entries {
            writeln!(f, "{sig}:\t{candidate}")?;
        }
        Ok(())
    }
}

/// Objective scores of a population, one row per entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Objective names, in registration order.
    pub objectives: Vec<String>,

    /// Scores per entry, aligned with `objectives`.
    pub rows: Vec<Vec<f64>>,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All scores of the named objective.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.objectives.iter().position(|o| o == name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Best (lowest) score of the named objective.
    pub fn min_of(&self, name: &str) -> Option<f64> {
        self.column(name)?.into_iter().reduce(f64::min)
    }
}
