use crate::cp::{BoolVar, IntVar};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Termination status of a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolveStatus {
    /// A solution was found and proven optimal
    Optimal,
    /// A solution was found, but the search was interrupted before proving optimality
    Feasible,
    /// The model was proven to have no solution
    Infeasible,
    /// The search was interrupted before any solution was found
    Unknown,
}

impl SolveStatus {
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Outcome of a solve
#[derive(Clone, Debug)]
pub struct SolveResponse {
    pub status: SolveStatus,
    /// Objective value of the best solution found, if any.
    /// Zero for models without objective.
    pub objective: Option<i64>,
    /// Value of every variable in the best solution, empty if no solution was found
    pub values: Vec<i64>,
    pub wall_time: Duration,
}

impl SolveResponse {
    /// Value of `var` in the best solution.
    /// Panics if the response carries no solution.
    pub fn value(&self, var: impl Into<IntVar>) -> i64 {
        assert!(
            self.status.has_solution(),
            "no solution available, status: {}",
            self.status
        );
        self.values[var.into().index()]
    }

    pub fn bool_value(&self, var: BoolVar) -> bool {
        self.value(var) == 1
    }
}
