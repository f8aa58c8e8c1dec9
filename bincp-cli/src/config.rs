use bincp::encoder::EncoderConfig;
use bincp::solver::SolverParams;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the command line tool
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Configuration of the model encoder
    pub encoder: EncoderConfig,
    /// Parameters passed to the solver, before the `--params` overlay is applied
    pub solver: SolverParams,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}
