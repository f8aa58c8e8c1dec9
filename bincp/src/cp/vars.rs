use std::fmt::{Display, Formatter};
use std::ops::Not;

/// Handle to an integer variable of a [`CpModel`](crate::cp::CpModel)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntVar(pub(crate) usize);

impl IntVar {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to a boolean variable, an integer variable with domain `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoolVar(pub(crate) usize);

impl BoolVar {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<BoolVar> for IntVar {
    fn from(b: BoolVar) -> Self {
        IntVar(b.0)
    }
}

impl Not for BoolVar {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal {
            var: self,
            negated: true,
        }
    }
}

/// A [`BoolVar`] or its negation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub var: BoolVar,
    pub negated: bool,
}

impl Literal {
    /// Evaluates the literal against a complete assignment of the model's variables
    pub fn eval(&self, values: &[i64]) -> bool {
        (values[self.var.index()] == 1) != self.negated
    }
}

impl From<BoolVar> for Literal {
    fn from(var: BoolVar) -> Self {
        Literal {
            var,
            negated: false,
        }
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "!b{}", self.var.0),
            false => write!(f, "b{}", self.var.0),
        }
    }
}

/// Handle to an interval of a [`CpModel`](crate::cp::CpModel), see [`IntervalDef`](crate::cp::IntervalDef)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalVar(pub(crate) usize);

impl IntervalVar {
    pub fn index(&self) -> usize {
        self.0
    }
}
