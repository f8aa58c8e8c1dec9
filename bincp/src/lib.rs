//! Constraint programming model for the two-dimensional Bin Packing Problem.
//!
//! A [`BP2Instance`](entities::BP2Instance) (a rectangular container shape and a set of rectangular items)
//! is encoded into a [`CpModel`](cp::CpModel) by the [`ModelEncoder`](encoder::ModelEncoder).
//! The model is handed to a [`SolverGateway`](solver::SolverGateway), which returns a
//! [`SolveResponse`](solver::SolveResponse) containing the minimum number of bins required.

/// Entities to model 2D Bin Packing Problems: containers, items, instances and solutions
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Builder for constraint models: variables, optional intervals, constraints and objective
pub mod cp;

/// Everything related to solving a [`CpModel`](cp::CpModel)
pub mod solver;

/// Translation of a packing instance into a [`CpModel`](cp::CpModel)
pub mod encoder;

/// Helper functions which do not belong to any specific module
pub mod util;
