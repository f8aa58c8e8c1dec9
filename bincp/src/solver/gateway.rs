use anyhow::Result;

use crate::cp::CpModel;
use crate::solver::{SolveResponse, SolverParams};

/// Backend capable of solving a [`CpModel`].
///
/// Infeasibility and exhausted limits are not errors, they are reported through the
/// [`SolveStatus`](crate::solver::SolveStatus) of the response.
/// An error means the model cannot be handed to the backend at all.
pub trait SolverGateway {
    fn solve(&self, model: &CpModel, params: &SolverParams) -> Result<SolveResponse>;
}
