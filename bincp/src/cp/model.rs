use crate::cp::{BoolVar, Constraint, IntVar, IntervalDef, IntervalVar, LinearExpr, Literal};
use itertools::Itertools;

/// A constraint model: integer variables with bounded domains, optional fixed size intervals,
/// constraints over them and an optional objective to minimize.
///
/// The model is only a description, it is solved by a [`SolverGateway`](crate::solver::SolverGateway).
#[derive(Clone, Debug, Default)]
pub struct CpModel {
    domains: Vec<(i64, i64)>,
    booleans: Vec<bool>,
    intervals: Vec<IntervalDef>,
    constraints: Vec<Constraint>,
    objective: Option<LinearExpr>,
}

impl CpModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_bool_var(&mut self) -> BoolVar {
        let var = BoolVar(self.push_domain(0, 1));
        self.booleans[var.index()] = true;
        var
    }

    /// Creates a new integer variable with domain `[lb, ub]`
    pub fn new_int_var(&mut self, lb: i64, ub: i64) -> IntVar {
        assert!(lb <= ub, "empty domain: [{lb}, {ub}]");
        IntVar(self.push_domain(lb, ub))
    }

    /// Creates the interval `[start, start + size)` which only exists when `presence` is true
    pub fn new_optional_fixed_size_interval(
        &mut self,
        start: IntVar,
        size: i64,
        presence: impl Into<Literal>,
    ) -> IntervalVar {
        assert!(size >= 0, "negative interval size: {size}");
        self.intervals.push(IntervalDef {
            start,
            size,
            presence: presence.into(),
        });
        IntervalVar(self.intervals.len() - 1)
    }

    /// Adds `lb <= expr <= ub`
    pub fn add_linear(&mut self, expr: impl Into<LinearExpr>, lb: i64, ub: i64) {
        self.constraints.push(Constraint::Linear {
            expr: expr.into(),
            lb,
            ub,
        });
    }

    /// Adds `lhs == rhs`
    pub fn add_eq(&mut self, lhs: impl Into<LinearExpr>, rhs: impl Into<LinearExpr>) {
        self.add_linear(lhs.into() - rhs.into(), 0, 0);
    }

    /// Adds `lhs <= rhs`
    pub fn add_le(&mut self, lhs: impl Into<LinearExpr>, rhs: impl Into<LinearExpr>) {
        self.add_linear(lhs.into() - rhs.into(), i64::MIN, 0);
    }

    /// Adds `a => b`
    pub fn add_implication(&mut self, a: impl Into<Literal>, b: impl Into<Literal>) {
        self.constraints
            .push(Constraint::Implication(a.into(), b.into()));
    }

    /// Adds a clause: at least one of `literals` is true
    pub fn add_bool_or(&mut self, literals: impl IntoIterator<Item = Literal>) {
        self.constraints
            .push(Constraint::BoolOr(literals.into_iter().collect()));
    }

    /// Adds a constraint stating that none of the present rectangles overlap.
    /// Each rectangle is a pair of (x-interval, y-interval).
    pub fn add_no_overlap_2d(
        &mut self,
        rectangles: impl IntoIterator<Item = (IntervalVar, IntervalVar)>,
    ) {
        self.constraints
            .push(Constraint::NoOverlap2D(rectangles.into_iter().collect()));
    }

    pub fn minimize(&mut self, expr: impl Into<LinearExpr>) {
        self.objective = Some(expr.into());
    }

    pub fn n_vars(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, var: impl Into<IntVar>) -> (i64, i64) {
        self.domains[var.into().index()]
    }

    /// Whether `var` was created through [`CpModel::new_bool_var`]
    pub fn is_bool(&self, var: impl Into<IntVar>) -> bool {
        self.booleans[var.into().index()]
    }

    pub fn domains(&self) -> &[(i64, i64)] {
        &self.domains
    }

    pub fn interval(&self, interval: IntervalVar) -> &IntervalDef {
        &self.intervals[interval.index()]
    }

    pub fn intervals(&self) -> &[IntervalDef] {
        &self.intervals
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&LinearExpr> {
        self.objective.as_ref()
    }

    /// Checks whether a complete assignment (one value per variable) satisfies every domain and constraint
    pub fn is_satisfied_by(&self, values: &[i64]) -> bool {
        values.len() == self.domains.len()
            && values
                .iter()
                .zip(self.domains.iter())
                .all(|(v, (lb, ub))| lb <= v && v <= ub)
            && self
                .constraints
                .iter()
                .all(|c| self.constraint_satisfied(c, values))
    }

    fn constraint_satisfied(&self, constraint: &Constraint, values: &[i64]) -> bool {
        match constraint {
            Constraint::Linear { expr, lb, ub } => {
                let v = expr.eval(values);
                *lb <= v && v <= *ub
            }
            Constraint::BoolOr(literals) => literals.iter().any(|l| l.eval(values)),
            Constraint::Implication(a, b) => !a.eval(values) || b.eval(values),
            Constraint::NoOverlap2D(rectangles) => rectangles
                .iter()
                .map(|(x, y)| (self.interval(*x), self.interval(*y)))
                .filter(|(x, y)| x.is_present(values) && y.is_present(values))
                .tuple_combinations()
                .all(|((x1, y1), (x2, y2))| {
                    !(overlapping(x1, x2, values) && overlapping(y1, y2, values))
                }),
        }
    }

    fn push_domain(&mut self, lb: i64, ub: i64) -> usize {
        self.domains.push((lb, ub));
        self.booleans.push(false);
        self.domains.len() - 1
    }
}

fn overlapping(a: &IntervalDef, b: &IntervalDef, values: &[i64]) -> bool {
    let (a_start, b_start) = (values[a.start.index()], values[b.start.index()]);
    a_start < b_start + b.size && b_start < a_start + a.size
}
