//! Progress reporting.
//!
//! The evolution loop hands a [`StatusReport`] to an [`EvoObserver`] every
//! `status_interval` steps. Reports are informational only.

use super::population::Population;
use std::fmt;
use std::time::Duration;

/// Budget left when a report is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Iterations(usize),
    Time(Duration),
}

/// Snapshot of the run at a reporting instant.
#[derive(Debug)]
pub struct StatusReport<'a, C> {
    /// Number of completed steps.
    pub iteration: usize,

    /// Wall-clock time since the run started.
    pub elapsed: Duration,

    pub remaining: Remaining,

    /// The population, already filtered to its Pareto frontier.
    pub population: &'a Population<C>,
}

/// Receives periodic status reports.
///
/// Implemented for `()` (ignores reports) and for any
/// `FnMut(&StatusReport<'_, C>)`.
pub trait EvoObserver<C> {
    fn on_status(&mut self, report: &StatusReport<'_, C>);
}

impl<C> EvoObserver<C> for () {
    fn on_status(&mut self, _report: &StatusReport<'_, C>) {}
}

impl<C, F> EvoObserver<C> for F
where
    F: FnMut(&StatusReport<'_, C>),
{
    fn on_status(&mut self, report: &StatusReport<'_, C>) {
        self(report)
    }
}

/// Writes reports through the `log` facade.
///
/// The counters go to `info`; the full population listing goes to `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<C: fmt::Display> EvoObserver<C> for LogObserver {
    fn on_status(&mut self, report: &StatusReport<'_, C>) {
        let remaining = match report.remaining {
            Remaining::Iterations(n) => format!("{n} iterations"),
            Remaining::Time(d) => format!("{:.1}s", d.as_secs_f64()),
        };
        log::info!(
            "iteration {}: elapsed {:.1}s, remaining {}, population {}",
            report.iteration,
            report.elapsed.as_secs_f64(),
            remaining,
            report.population.len()
        );
        log::debug!("population:\n{}", report.population);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evo::Signature;

    fn report_for(pop: &Population<String>) -> StatusReport<'_, String> {
        StatusReport {
            iteration: 10,
            elapsed: Duration::from_millis(250),
            remaining: Remaining::Iterations(90),
            population: pop,
        }
    }

    #[test]
    fn test_closure_observer_receives_reports() {
        let mut pop = Population::new();
        pop.insert(Signature::from_pairs([("a", 1.0)]).unwrap(), "x".to_string());

        let mut seen = Vec::new();
        let mut observer = |r: &StatusReport<'_, String>| seen.push((r.iteration, r.population.len()));
        observer.on_status(&report_for(&pop));
        observer.on_status(&report_for(&pop));
        assert_eq!(seen, vec![(10, 1), (10, 1)]);
    }

    #[test]
    fn test_unit_and_log_observers_accept_reports() {
        let _ = env_logger::builder().is_test(true).try_init();
        let pop: Population<String> = Population::new();
        ().on_status(&report_for(&pop));
        LogObserver.on_status(&report_for(&pop));
    }
}
