use crate::cp::{IntVar, IntervalVar, LinearExpr, Literal};

/// Interval `[start, start + size)` of fixed size.
/// It only takes part in constraints when `presence` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalDef {
    pub start: IntVar,
    pub size: i64,
    pub presence: Literal,
}

impl IntervalDef {
    pub fn is_present(&self, values: &[i64]) -> bool {
        self.presence.eval(values)
    }
}

/// Constraints supported by a [`CpModel`](crate::cp::CpModel)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// `lb <= expr <= ub`
    Linear { expr: LinearExpr, lb: i64, ub: i64 },
    /// At least one of the literals is true
    BoolOr(Vec<Literal>),
    /// `a => b`
    Implication(Literal, Literal),
    /// Rectangles, given as (x-interval, y-interval) pairs, do not overlap.
    /// A rectangle is ignored unless both of its intervals are present.
    NoOverlap2D(Vec<(IntervalVar, IntervalVar)>),
}
