//! Evolution loop execution.
//!
//! [`Evo`] owns the registries, the population, and the random source, and
//! drives the loop: pick agent → sample → apply → evaluate → insert → repeat,
//! pruning dominated entries at regular intervals.

use super::config::{EvoConfig, StopCondition};
use super::error::EvoError;
use super::observer::{EvoObserver, Remaining, StatusReport};
use super::population::{Population, Summary};
use super::registry::{AgentEntry, AgentRegistry, ObjectiveRegistry};
use super::types::{Agent, Candidate, Objective};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of an evolution run.
///
/// The final population itself stays in the engine; see
/// [`Evo::population`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvoResult {
    /// Number of steps executed.
    pub iterations: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Size of the population after the final filter pass.
    pub population_size: usize,

    /// Number of dominance filter passes, including the final one.
    pub filter_passes: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Collects objectives, agents and initial candidates, then builds an [`Evo`].
///
/// Registries are frozen by [`build`](Self::build): the resulting engine
/// cannot register further objectives, so every signature in its population
/// covers the same objectives.
///
/// ```
/// use rand::RngCore;
/// use u_evo::evo::Evo;
///
/// let evo = Evo::builder()
///     .objective("len", |v: &Vec<u8>| v.len() as f64)
///     .agent("grow", |mut inputs: Vec<Vec<u8>>, _rng: &mut dyn RngCore| {
///         let mut v = inputs.pop().unwrap_or_default();
///         v.push(0);
///         v
///     })
///     .initial(vec![0])
///     .build()
///     .unwrap();
///
/// assert_eq!(evo.population().len(), 1);
/// ```
pub struct EvoBuilder<C> {
    objectives: ObjectiveRegistry<C>,
    agents: AgentRegistry<C>,
    initial: Vec<C>,
    seed: Option<u64>,
}

impl<C: Candidate> Default for EvoBuilder<C> {
    fn default() -> Self {
        Self {
            objectives: ObjectiveRegistry::new(),
            agents: AgentRegistry::new(),
            initial: Vec::new(),
            seed: None,
        }
    }
}

impl<C: Candidate> EvoBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an objective. Registration order defines signature order;
    /// re-registering a name replaces the earlier objective.
    pub fn objective<O>(mut self, name: impl Into<Arc<str>>, objective: O) -> Self
    where
        O: Objective<C> + 'static,
    {
        self.objectives.register(name, Box::new(objective));
        self
    }

    /// Registers an agent taking one sampled candidate.
    pub fn agent<A>(self, name: impl Into<Arc<str>>, agent: A) -> Self
    where
        A: Agent<C> + 'static,
    {
        self.agent_with_arity(name, agent, 1)
    }

    /// Registers an agent taking `arity` sampled candidates.
    pub fn agent_with_arity<A>(mut self, name: impl Into<Arc<str>>, agent: A, arity: usize) -> Self
    where
        A: Agent<C> + 'static,
    {
        self.agents.register(name, Box::new(agent), arity);
        self
    }

    /// Adds a candidate to the initial population.
    pub fn initial(mut self, candidate: C) -> Self {
        self.initial.push(candidate);
        self
    }

    /// Seeds the engine's random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Freezes the registries and evaluates the initial candidates.
    pub fn build(self) -> Result<Evo<C>, EvoError> {
        if self.objectives.is_empty() {
            return Err(EvoError::NoObjectives);
        }

        let mut evo = Evo {
            objectives: self.objectives,
            agents: self.agents,
            population: Population::new(),
            rng: create_rng(self.seed),
        };
        for candidate in self.initial {
            evo.add(candidate)?;
        }
        Ok(evo)
    }
}

/// The multi-objective evolution engine.
///
/// # Usage
///
/// ```ignore
/// let mut evo = Evo::builder()
///     .objective("overallocation", overallocation)
///     .objective("conflicts", conflicts)
///     .agent("swap", swap_agent)
///     .initial(random_solution())
///     .build()?;
///
/// let result = evo.evolve(&EvoConfig::time_limit(Duration::from_secs(60)))?;
/// println!("{} non-dominated solutions", result.population_size);
/// ```
pub struct Evo<C> {
    objectives: ObjectiveRegistry<C>,
    agents: AgentRegistry<C>,
    population: Population<C>,
    rng: StdRng,
}

impl<C: Candidate> Evo<C> {
    pub fn builder() -> EvoBuilder<C> {
        EvoBuilder::new()
    }

    pub fn objectives(&self) -> &ObjectiveRegistry<C> {
        &self.objectives
    }

    pub fn agents(&self) -> &AgentRegistry<C> {
        &self.agents
    }

    pub fn population(&self) -> &Population<C> {
        &self.population
    }

    pub fn into_population(self) -> Population<C> {
        self.population
    }

    /// Evaluates `candidate` and stores it under its signature.
    ///
    /// Returns `true` if the signature was new, `false` if an existing entry
    /// was overwritten.
    pub fn add(&mut self, candidate: C) -> Result<bool, EvoError> {
        let signature = self.objectives.evaluate(&candidate)?;
        log::trace!("adding candidate {signature}");
        Ok(self.population.insert(signature, candidate))
    }

    /// Draws `k` independent copies from the population, uniformly with
    /// replacement. Empty when the population is empty.
    pub fn sample(&mut self, k: usize) -> Vec<C> {
        self.population.sample(k, &mut self.rng)
    }

    /// Runs the named agent once and adds its output.
    pub fn run_agent(&mut self, name: &str) -> Result<bool, EvoError> {
        let child = {
            let entry = self.agents.get(name)?;
            apply_agent(entry, &self.population, &mut self.rng)
        };
        self.add(child)
    }

    /// Runs one uniformly chosen agent and adds its output.
    ///
    /// No dominance filtering happens here.
    pub fn step(&mut self) -> Result<bool, EvoError> {
        let child = {
            let entry = self.agents.choose(&mut self.rng).ok_or(EvoError::NoAgents)?;
            apply_agent(entry, &self.population, &mut self.rng)
        };
        self.add(child)
    }

    /// Discards dominated entries. Returns the number removed.
    pub fn remove_dominated(&mut self) -> usize {
        let before = self.population.len();
        let removed = self.population.remove_dominated();
        log::debug!(
            "dominance filter: {} -> {} entries",
            before,
            self.population.len()
        );
        removed
    }

    /// Tabulates the objective scores of the current population.
    pub fn summarize(&self) -> Summary {
        self.population.summarize()
    }

    /// Runs the evolution loop without status reporting or cancellation.
    pub fn evolve(&mut self, config: &EvoConfig) -> Result<EvoResult, EvoError> {
        self.evolve_with(config, &mut (), None)
    }

    /// Runs the evolution loop.
    ///
    /// After step `i` (counting from 1), dominated entries are removed when
    /// `i` is a multiple of `dom_interval`, and removed again followed by a
    /// status report when `i` is a multiple of `status_interval`. The stop
    /// condition and the `cancel` flag are checked between steps. A final
    /// filter pass runs on halt.
    ///
    /// Any error raised by a step aborts the run immediately.
    pub fn evolve_with<O>(
        &mut self,
        config: &EvoConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvoResult, EvoError>
    where
        O: EvoObserver<C> + ?Sized,
    {
        config.validate()?;
        if self.agents.is_empty() {
            return Err(EvoError::NoAgents);
        }
        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let start = Instant::now();
        let mut iteration = 0usize;
        let mut filter_passes = 0usize;
        let mut cancelled = false;

        loop {
            let done = match config.stop {
                StopCondition::Iterations(n) => iteration >= n,
                StopCondition::TimeLimit(limit) => start.elapsed() >= limit,
            };
            if done {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            self.step()?;
            iteration += 1;

            if iteration % config.dom_interval == 0 {
                self.remove_dominated();
                filter_passes += 1;
            }

            if iteration % config.status_interval == 0 {
                self.remove_dominated();
                filter_passes += 1;

                let elapsed = start.elapsed();
                let remaining = match config.stop {
                    StopCondition::Iterations(n) => Remaining::Iterations(n - iteration),
                    StopCondition::TimeLimit(limit) => {
                        Remaining::Time(limit.saturating_sub(elapsed))
                    }
                };
                observer.on_status(&StatusReport {
                    iteration,
                    elapsed,
                    remaining,
                    population: &self.population,
                });
            }
        }

        self.remove_dominated();
        filter_passes += 1;

        let elapsed = start.elapsed();
        log::info!(
            "evolution completed in {:.1}s: {} iterations, final population {}",
            elapsed.as_secs_f64(),
            iteration,
            self.population.len()
        );

        Ok(EvoResult {
            iterations: iteration,
            elapsed,
            population_size: self.population.len(),
            filter_passes,
            cancelled,
        })
    }
}

fn apply_agent<C: Candidate>(
    entry: &AgentEntry<C>,
    population: &Population<C>,
    rng: &mut StdRng,
) -> C {
    log::trace!("running agent {}", entry.name());
    let inputs = population.sample(entry.arity(), rng);
    entry.agent().apply(inputs, rng)
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

// ============================================================================
// Tests
// ============================================================================
