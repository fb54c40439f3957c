//! Run metrics computed from round reports.
//!
//! Answers the two questions a run is judged by: how often did the
//! colony find food, and did the paths get shorter over time.

use crate::colony::RoundReport;
use formica_core::types::TrailPath;
use serde::Serialize;

/// Summary of a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub rounds: usize,
    /// Rounds with at least one successful ant.
    pub successful_rounds: usize,
    pub exhausted_rounds: usize,
    pub total_agents: usize,
    pub total_successes: usize,
    /// Successful ants over all ants.
    pub success_rate: f64,
    /// Round best of the first successful round.
    pub first_best: Option<f64>,
    /// Round best of the last successful round.
    pub last_best: Option<f64>,
    /// `(first - last) / first * 100`, when at least two rounds succeeded.
    pub improvement_pct: Option<f64>,
    pub overall_best: Option<TrailPath>,
}

impl RunSummary {
    pub fn from_reports(reports: &[RoundReport]) -> Self {
        let round_bests: Vec<f64> = reports.iter().filter_map(|r| r.round_best).collect();
        let total_agents: usize = reports.iter().map(|r| r.agents()).sum();
        let total_successes: usize = reports.iter().map(|r| r.successes).sum();

        let first_best = round_bests.first().copied();
        let last_best = round_bests.last().copied();
        let improvement_pct = match (first_best, last_best) {
            (Some(first), Some(last)) if round_bests.len() > 1 && first > 0.0 => {
                Some((first - last) / first * 100.0)
            }
            _ => None,
        };

        Self {
            rounds: reports.len(),
            successful_rounds: round_bests.len(),
            exhausted_rounds: reports.iter().filter(|r| r.is_exhausted()).count(),
            total_agents,
            total_successes,
            success_rate: if total_agents == 0 {
                0.0
            } else {
                total_successes as f64 / total_agents as f64
            },
            first_best,
            last_best,
            improvement_pct,
            overall_best: reports.last().and_then(|r| r.overall_best.clone()),
        }
    }

    pub fn best_length(&self) -> Option<f64> {
        self.overall_best.as_ref().map(|p| p.length)
    }
}

/// Print a formatted summary to the terminal.
pub fn print_summary(summary: &RunSummary) {
    println!("── Run Summary ─────────────────────────────────────");
    println!("  Rounds:                     {}", summary.rounds);
    println!("  Successful / exhausted:     {} / {}",
        summary.successful_rounds,
        summary.exhausted_rounds);
    println!("  Success rate:               {:.1}% ({} / {} ants)",
        summary.success_rate * 100.0,
        summary.total_successes,
        summary.total_agents);
    match &summary.overall_best {
        Some(path) => {
            println!("  Best path:                  {:?}",
                path.nodes.iter().map(|n| n.0).collect::<Vec<_>>());
            println!("  Best length:                {:.2}", path.length);
        }
        None => println!("  Best path:                  none found"),
    }
    if let Some(pct) = summary.improvement_pct {
        println!("  Improvement first to last:  {:.1}%", pct);
    }
}
