//! Multi-objective evolutionary local search.
//!
//! A pool of candidate solutions is repeatedly perturbed by randomized
//! *agents*. Every new candidate is scored by an ordered set of *objectives*
//! (all minimized) and stored under its evaluation [`Signature`]; the pool is
//! periodically pruned to its Pareto frontier.
//!
//! The engine never inspects candidates. Users plug in a problem through two
//! function-shaped traits:
//!
//! - [`Objective`]: `&C -> f64`, pure and total
//! - [`Agent`]: `(Vec<C>, &mut dyn RngCore) -> C`, with a declared input arity
//!
//! # Key Types
//!
//! - [`EvoBuilder`]: registers objectives, agents and initial candidates
//! - [`Evo`]: the engine (add, sample, step, evolve)
//! - [`EvoConfig`]: stop condition, filter and reporting intervals
//! - [`Population`]: signature-keyed candidate store
//!
//! # Example
//!
//! ```
//! use rand::{Rng, RngCore};
//! use u_evo::evo::{Evo, EvoConfig};
//!
//! // Two competing objectives over a pair of integers.
//! let mut evo = Evo::builder()
//!     .objective("x", |p: &(i32, i32)| p.0 as f64)
//!     .objective("y", |p: &(i32, i32)| p.1 as f64)
//!     .agent("trade", |mut inputs: Vec<(i32, i32)>, rng: &mut dyn RngCore| {
//!         let (x, y) = inputs.pop().unwrap_or((10, 10));
//!         if rng.random_bool(0.5) { (x - 1, y + 2) } else { (x + 2, y - 1) }
//!     })
//!     .initial((10, 10))
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = evo.evolve(&EvoConfig::iterations(500)).unwrap();
//! assert_eq!(result.iterations, 500);
//! assert!(result.population_size >= 1);
//! ```

mod config;
mod dominance;
mod error;
mod observer;
mod population;
mod registry;
mod runner;
mod signature;
mod types;

pub use config::{EvoConfig, StopCondition};
pub use dominance::{dominates, pareto_front};
pub use error::EvoError;
pub use observer::{EvoObserver, LogObserver, Remaining, StatusReport};
pub use population::{Population, Summary};
pub use registry::{AgentEntry, AgentRegistry, ObjectiveRegistry};
pub use runner::{Evo, EvoBuilder, EvoResult};
pub use signature::{Score, Signature};
pub use types::{Agent, Candidate, Objective};
