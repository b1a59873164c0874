//! Domain-agnostic multi-objective evolutionary local search.
//!
//! Provides a generic engine that drives a population of candidate
//! solutions towards the Pareto frontier of several competing objectives:
//!
//! - **Registries**: named objectives (scoring functions) and named agents
//!   (randomized operators with a declared input arity)
//! - **Population**: candidates keyed by their evaluation signature, so
//!   identically scoring solutions collapse into one entry
//! - **Dominance filter**: Pareto frontier extraction, all objectives
//!   minimized
//! - **Scheduler**: uniform agent selection with periodic pruning and
//!   status reporting, bounded by iterations or wall-clock time
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts: assignment problems, input tables
//! and report formats are all defined by consumers at higher layers.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`evo::EvoConfig`],
//!   [`evo::StopCondition`] and [`evo::Summary`]
//! - `parallel`: evaluates the objectives of a candidate concurrently with
//!   rayon

pub mod evo;
