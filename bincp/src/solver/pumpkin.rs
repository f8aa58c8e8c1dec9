use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{Level, info, log};
use pumpkin_solver::constraints;
use pumpkin_solver::optimisation::OptimisationDirection;
use pumpkin_solver::optimisation::linear_sat_unsat::LinearSatUnsat;
use pumpkin_solver::results::{
    OptimisationResult, ProblemSolution, SatisfactionResult, SolutionReference,
};
use pumpkin_solver::termination::{TerminationCondition, TimeBudget};
use pumpkin_solver::variables::{DomainId, TransformableVariable};
use pumpkin_solver::{DefaultBrancher, Solver};
use thousands::Separable;

use crate::cp::{Constraint, CpModel, IntervalDef, LinearExpr, Literal};
use crate::solver::{SolveResponse, SolveStatus, SolverGateway, SolverParams};

/// Backend solving a [`CpModel`] with the lazy clause generation solver of the `pumpkin-solver` crate.
///
/// Every model variable becomes a bounded integer of the solver and every constraint is posted
/// as one or more linear inequalities. Optional intervals are not native to the solver: each pair
/// of rectangles of a 2D non-overlap constraint gets four separation booleans (left of, right of,
/// below, above), each gating its precedence, and at least one of them must hold when both
/// rectangles are present.
#[derive(Clone, Copy, Debug, Default)]
pub struct PumpkinBackend;

impl SolverGateway for PumpkinBackend {
    fn solve(&self, model: &CpModel, params: &SolverParams) -> Result<SolveResponse> {
        let start = Instant::now();
        let log_level = match params.log_search_progress {
            true => Level::Info,
            false => Level::Debug,
        };
        let time_limit = params
            .max_time_in_seconds
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("invalid time limit")?;

        let mut translation = Translation::new(model)?;
        translation.post_constraints()?;
        let objective = translation.post_objective()?;

        log!(
            log_level,
            "[PMK] posted {} variables and {} constraints ({} auxiliary variables)",
            model.n_vars().separate_with_commas(),
            model.constraints().len().separate_with_commas(),
            translation.n_auxiliary.separate_with_commas()
        );

        let (status, values) = match translation.infeasible {
            true => (SolveStatus::Infeasible, None),
            false => translation.search(objective, params, time_limit, log_level),
        };
        let objective = values
            .as_ref()
            .map(|values| model.objective().map_or(0, |o| o.eval(values)));

        log!(
            log_level,
            "[PMK] search finished with status {status}, objective: {objective:?}, time: {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(SolveResponse {
            status,
            objective,
            values: values.unwrap_or_default(),
            wall_time: start.elapsed(),
        })
    }
}

/// A linear term `coeff * var` of the solver, plus a constant
type Affine = (DomainId, i64, i64);

struct Translation<'a> {
    model: &'a CpModel,
    solver: Solver,
    vars: Vec<DomainId>,
    n_auxiliary: usize,
    /// A constraint was found violated while posting it
    infeasible: bool,
}

impl<'a> Translation<'a> {
    fn new(model: &'a CpModel) -> Result<Self> {
        let mut solver = Solver::default();
        let vars = model
            .domains()
            .iter()
            .map(|&(lb, ub)| Ok(solver.new_bounded_integer(to_i32(lb)?, to_i32(ub)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            model,
            solver,
            vars,
            n_auxiliary: 0,
            infeasible: false,
        })
    }

    fn post_constraints(&mut self) -> Result<()> {
        let model = self.model;
        for constraint in model.constraints() {
            match constraint {
                Constraint::Linear { expr, lb, ub } => self.post_linear(expr, *lb, *ub)?,
                Constraint::BoolOr(literals) => {
                    // Σ lit >= 1
                    let terms = literals.iter().map(|l| self.literal(*l)).collect_vec();
                    self.post_at_least(&terms, 1)?;
                }
                Constraint::Implication(a, b) => {
                    // a <= b
                    let (a, b) = (self.literal(*a), self.literal(*b));
                    self.post_at_most(&[a, negate(b)], 0)?;
                }
                Constraint::NoOverlap2D(rects) => {
                    let rects = rects
                        .iter()
                        .map(|(x, y)| (*model.interval(*x), *model.interval(*y)))
                        .collect_vec();
                    for (a, b) in rects.iter().tuple_combinations() {
                        self.post_disjoint(a, b)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Creates a variable equal to the objective of the model, if any
    fn post_objective(&mut self) -> Result<Option<DomainId>> {
        let model = self.model;
        let Some(expr) = model.objective() else {
            return Ok(None);
        };
        let (min, max) = expr.terms.iter().fold(
            (expr.constant, expr.constant),
            |(min, max), &(var, coeff)| {
                let (lb, ub) = model.domain(var);
                let (a, b) = (lb * coeff, ub * coeff);
                (min + a.min(b), max + a.max(b))
            },
        );
        let objective = self.new_auxiliary(min, max)?;
        let mut terms = self.linear(expr);
        terms.push((objective, -1, 0));
        // Σ terms + constant - objective == 0
        self.post_at_most(&terms, -expr.constant)?;
        self.post_at_least(&terms, -expr.constant)?;
        Ok(Some(objective))
    }

    fn search(
        mut self,
        objective: Option<DomainId>,
        params: &SolverParams,
        time_limit: Option<Duration>,
        log_level: Level,
    ) -> (SolveStatus, Option<Vec<i64>>) {
        let mut termination = TimeLimit(time_limit.map(TimeBudget::starting_now));
        let mut brancher = self.solver.default_brancher();

        match objective {
            Some(objective) if !params.stop_after_first_solution => {
                let callback: fn(&Solver, SolutionReference, &DefaultBrancher) = match log_level {
                    Level::Info => log_improving_solution,
                    _ => |_, _, _| {},
                };
                let result = self.solver.optimise(
                    &mut brancher,
                    &mut termination,
                    LinearSatUnsat::new(OptimisationDirection::Minimise, objective, callback),
                );
                match result {
                    OptimisationResult::Optimal(solution) => {
                        (SolveStatus::Optimal, Some(values(&solution, &self.vars)))
                    }
                    OptimisationResult::Satisfiable(solution) => {
                        (SolveStatus::Feasible, Some(values(&solution, &self.vars)))
                    }
                    OptimisationResult::Unsatisfiable { .. } => (SolveStatus::Infeasible, None),
                    OptimisationResult::Unknown { .. } => (SolveStatus::Unknown, None),
                }
            }
            _ => {
                let result = self.solver.satisfy(&mut brancher, &mut termination);
                match result {
                    SatisfactionResult::Satisfiable(satisfiable) => {
                        // a first solution only proves optimality when there is nothing to optimise
                        let status = match objective {
                            None => SolveStatus::Optimal,
                            Some(_) => SolveStatus::Feasible,
                        };
                        (status, Some(values(&satisfiable.solution(), &self.vars)))
                    }
                    SatisfactionResult::Unsatisfiable { .. } => (SolveStatus::Infeasible, None),
                    SatisfactionResult::Unknown { .. } => (SolveStatus::Unknown, None),
                }
            }
        }
    }

    /// At least one of the four separations holds when both rectangles are present
    fn post_disjoint(
        &mut self,
        a: &(IntervalDef, IntervalDef),
        b: &(IntervalDef, IntervalDef),
    ) -> Result<()> {
        let separations = [(a.0, b.0), (b.0, a.0), (a.1, b.1), (b.1, a.1)].map(|(first, second)| {
            // largest possible value of first.end - second.start
            let big_m =
                self.model.domain(first.start).1 + first.size - self.model.domain(second.start).0;
            (first, second, big_m)
        });
        if separations.iter().any(|(_, _, big_m)| *big_m <= 0) {
            // always separated
            return Ok(());
        }

        let mut separators = vec![];
        for (first, second, big_m) in separations {
            // s => first.start + first.size <= second.start
            let s = self.new_auxiliary(0, 1)?;
            self.post_at_most(
                &[
                    (self.vars[first.start.index()], 1, 0),
                    (self.vars[second.start.index()], -1, 0),
                    (s, big_m, 0),
                ],
                big_m - first.size,
            )?;
            separators.push(s);
        }

        let presences = [a.0.presence, a.1.presence, b.0.presence, b.1.presence]
            .into_iter()
            .unique()
            .map(|p| self.literal(p))
            .collect_vec();
        // Σ presence - Σ separator <= |presence| - 1
        let terms = presences
            .iter()
            .copied()
            .chain(separators.into_iter().map(|s| (s, -1, 0)))
            .collect_vec();
        self.post_at_most(&terms, presences.len() as i64 - 1)
    }

    fn post_linear(&mut self, expr: &LinearExpr, lb: i64, ub: i64) -> Result<()> {
        let terms = self.linear(expr);
        if ub != i64::MAX {
            self.post_at_most(&terms, ub - expr.constant)?;
        }
        if lb != i64::MIN {
            self.post_at_least(&terms, lb - expr.constant)?;
        }
        Ok(())
    }

    /// `Σ terms >= rhs`
    fn post_at_least(&mut self, terms: &[Affine], rhs: i64) -> Result<()> {
        let negated = terms.iter().map(|t| negate(*t)).collect_vec();
        self.post_at_most(&negated, -rhs)
    }

    /// `Σ terms <= rhs`
    fn post_at_most(&mut self, terms: &[Affine], rhs: i64) -> Result<()> {
        let constant: i64 = terms.iter().map(|(_, _, k)| k).sum();
        let scaled = terms
            .iter()
            .filter(|(_, coeff, _)| *coeff != 0)
            .map(|&(var, coeff, _)| Ok(var.scaled(to_i32(coeff)?)))
            .collect::<Result<Vec<_>>>()?;
        let rhs = rhs - constant;

        if scaled.is_empty() {
            self.infeasible |= rhs < 0;
            return Ok(());
        }
        let tag = self.solver.new_constraint_tag();
        let posted = self
            .solver
            .add_constraint(constraints::less_than_or_equals(scaled, to_i32(rhs)?, tag))
            .post();
        // the solver detected a conflict at the root
        self.infeasible |= posted.is_err();
        Ok(())
    }

    /// The terms of `expr`, without its constant
    fn linear(&self, expr: &LinearExpr) -> Vec<Affine> {
        expr.terms
            .iter()
            .map(|&(var, coeff)| (self.vars[var.index()], coeff, 0))
            .collect()
    }

    /// A literal as `var` or `1 - var`
    fn literal(&self, lit: Literal) -> Affine {
        let var = self.vars[lit.var.index()];
        match lit.negated {
            false => (var, 1, 0),
            true => (var, -1, 1),
        }
    }

    fn new_auxiliary(&mut self, lb: i64, ub: i64) -> Result<DomainId> {
        self.n_auxiliary += 1;
        Ok(self.solver.new_bounded_integer(to_i32(lb)?, to_i32(ub)?))
    }
}

/// Stops the search once the time budget, if any, is exhausted
struct TimeLimit(Option<TimeBudget>);

impl TerminationCondition for TimeLimit {
    fn should_stop(&mut self) -> bool {
        self.0.as_mut().is_some_and(|budget| budget.should_stop())
    }
}

fn log_improving_solution(_: &Solver, _: SolutionReference, _: &DefaultBrancher) {
    info!("[PMK] improving solution found");
}

fn values(solution: &impl ProblemSolution, vars: &[DomainId]) -> Vec<i64> {
    vars.iter()
        .map(|var| solution.get_integer_value(*var) as i64)
        .collect()
}

fn negate((var, coeff, constant): Affine) -> Affine {
    (var, -coeff, -constant)
}

fn to_i32(v: i64) -> Result<i32> {
    i32::try_from(v).with_context(|| format!("{v} exceeds the 32-bit integer range of the solver"))
}
