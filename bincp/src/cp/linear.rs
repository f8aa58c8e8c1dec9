use crate::cp::{BoolVar, IntVar};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Weighted sum of variables plus a constant: `Σ coeff * var + constant`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearExpr {
    pub terms: Vec<(IntVar, i64)>,
    pub constant: i64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(constant: i64) -> Self {
        LinearExpr {
            terms: vec![],
            constant,
        }
    }

    /// Sum of all variables, each with coefficient 1
    pub fn sum<V: Into<IntVar>>(vars: impl IntoIterator<Item = V>) -> Self {
        Self::weighted_sum(vars.into_iter().map(|v| (v, 1)))
    }

    pub fn weighted_sum<V: Into<IntVar>>(terms: impl IntoIterator<Item = (V, i64)>) -> Self {
        LinearExpr {
            terms: terms.into_iter().map(|(v, c)| (v.into(), c)).collect(),
            constant: 0,
        }
    }

    pub fn add_term(&mut self, var: impl Into<IntVar>, coeff: i64) {
        self.terms.push((var.into(), coeff));
    }

    /// Evaluates the expression against a complete assignment of the model's variables
    pub fn eval(&self, values: &[i64]) -> i64 {
        self.terms
            .iter()
            .map(|(v, c)| c * values[v.index()])
            .sum::<i64>()
            + self.constant
    }
}

impl From<IntVar> for LinearExpr {
    fn from(var: IntVar) -> Self {
        LinearExpr {
            terms: vec![(var, 1)],
            constant: 0,
        }
    }
}

impl From<BoolVar> for LinearExpr {
    fn from(var: BoolVar) -> Self {
        LinearExpr::from(IntVar::from(var))
    }
}

impl From<i64> for LinearExpr {
    fn from(constant: i64) -> Self {
        LinearExpr::constant(constant)
    }
}

impl<T: Into<LinearExpr>> Add<T> for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: T) -> LinearExpr {
        self += rhs;
        self
    }
}

impl<T: Into<LinearExpr>> AddAssign<T> for LinearExpr {
    fn add_assign(&mut self, rhs: T) {
        let rhs = rhs.into();
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> LinearExpr {
        self * -1
    }
}

impl<T: Into<LinearExpr>> Sub<T> for LinearExpr {
    type Output = LinearExpr;

    fn sub(self, rhs: T) -> LinearExpr {
        self + (-rhs.into())
    }
}

impl Mul<i64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, rhs: i64) -> LinearExpr {
        LinearExpr {
            terms: self.terms.into_iter().map(|(v, c)| (v, c * rhs)).collect(),
            constant: self.constant * rhs,
        }
    }
}

impl Mul<i64> for BoolVar {
    type Output = LinearExpr;

    fn mul(self, rhs: i64) -> LinearExpr {
        LinearExpr::from(self) * rhs
    }
}

impl Mul<i64> for IntVar {
    type Output = LinearExpr;

    fn mul(self, rhs: i64) -> LinearExpr {
        LinearExpr::from(self) * rhs
    }
}
