//! Objective and agent registries.
//!
//! Both registries are ordered, name-keyed tables. Registering a name that
//! already exists replaces the stored entry in place, keeping its original
//! position. Objective order defines the order of every [`Signature`].

use super::error::EvoError;
use super::signature::{Score, Signature};
use super::types::{Agent, Objective};
use rand::seq::IndexedRandom;
use rand::RngCore;
use std::sync::Arc;

struct NamedObjective<C> {
    name: Arc<str>,
    objective: Box<dyn Objective<C>>,
}

/// Ordered set of named objectives.
pub struct ObjectiveRegistry<C> {
    entries: Vec<NamedObjective<C>>,
}

impl<C> Default for ObjectiveRegistry<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> ObjectiveRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an objective. The last registration for a name wins.
    pub fn register(&mut self, name: impl Into<Arc<str>>, objective: Box<dyn Objective<C>>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.objective = objective,
            None => self.entries.push(NamedObjective { name, objective }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Objective names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_ref())
    }

    /// Scores `candidate` with every objective, in registration order.
    ///
    /// Fails with [`EvoError::NonFiniteScore`] on the first NaN or infinite
    /// score.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate(&self, candidate: &C) -> Result<Signature, EvoError> {
        let entries = self
            .entries
            .iter()
            .map(|e| score_one(e, candidate))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Signature::from_entries(entries))
    }

    /// Scores `candidate` with every objective, in registration order.
    ///
    /// Objectives run concurrently; the signature is identical to a
    /// sequential evaluation. Fails with [`EvoError::NonFiniteScore`] on the
    /// first NaN or infinite score in objective order.
    #[cfg(feature = "parallel")]
    pub fn evaluate(&self, candidate: &C) -> Result<Signature, EvoError>
    where
        C: Sync,
    {
        use rayon::prelude::*;

        let entries = self
            .entries
            .par_iter()
            .map(|e| score_one(e, candidate))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Signature::from_entries(entries))
    }
}

fn score_one<C>(entry: &NamedObjective<C>, candidate: &C) -> Result<(Arc<str>, Score), EvoError> {
    let value = entry.objective.score(candidate);
    let score = Score::new(value).ok_or_else(|| EvoError::NonFiniteScore {
        objective: entry.name.to_string(),
        value,
    })?;
    Ok((Arc::clone(&entry.name), score))
}

/// A registered agent and its input arity.
pub struct AgentEntry<C> {
    name: Arc<str>,
    agent: Box<dyn Agent<C>>,
    arity: usize,
}

impl<C> AgentEntry<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of sampled candidates the agent expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn agent(&self) -> &dyn Agent<C> {
        self.agent.as_ref()
    }
}

/// Ordered set of named agents.
pub struct AgentRegistry<C> {
    entries: Vec<AgentEntry<C>>,
}

impl<C> Default for AgentRegistry<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> AgentRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agent taking `arity` sampled inputs. The last
    /// registration for a name wins.
    pub fn register(&mut self, name: impl Into<Arc<str>>, agent: Box<dyn Agent<C>>, arity: usize) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.agent = agent;
                entry.arity = arity;
            }
            None => self.entries.push(AgentEntry { name, agent, arity }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Agent names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_ref())
    }

    /// Looks up an agent by name.
    pub fn get(&self, name: &str) -> Result<&AgentEntry<C>, EvoError> {
        self.entries
            .iter()
            .find(|e| e.name.as_ref() == name)
            .ok_or_else(|| EvoError::UnknownAgent(name.to_string()))
    }

    /// Picks an agent uniformly at random. `None` if the registry is empty.
    pub fn choose(&self, rng: &mut dyn RngCore) -> Option<&AgentEntry<C>> {
        self.entries.choose(rng)
    }
}
