use serde::{Deserialize, Serialize};

/// Configuration of the [`ModelEncoder`](crate::encoder::ModelEncoder)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EncoderConfig {
    /// Number of bins to model. If 0, twice the trivial lower bound is used.
    /// A value below the optimum still produces a valid (infeasible) model.
    pub max_bins: usize,
    /// Order the bins by their number of items
    pub symmetry_breaking: bool,
    /// Add the redundant area and item count equalities
    pub redundant_constraints: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_bins: 0,
            symmetry_breaking: true,
            redundant_constraints: true,
        }
    }
}
