mod bp2_model;
mod config;
mod lower_bound;
mod model_encoder;

#[doc(inline)]
pub use bp2_model::BP2Model;
#[doc(inline)]
pub use config::EncoderConfig;
#[doc(inline)]
pub use lower_bound::slot_budget;
#[doc(inline)]
pub use lower_bound::trivial_lower_bound;
#[doc(inline)]
pub use model_encoder::ModelEncoder;

use anyhow::Result;

use crate::entities::BP2Instance;
use crate::solver::{SolveResponse, SolverGateway, SolverParams};

/// Encodes `instance` and hands the model to `gateway`.
/// The response is returned untouched, together with the model needed to interpret it.
pub fn encode_and_solve(
    instance: &BP2Instance,
    config: &EncoderConfig,
    params: &SolverParams,
    gateway: &impl SolverGateway,
) -> Result<(BP2Model, SolveResponse)> {
    let model = ModelEncoder::new(*config).encode(instance);
    let response = gateway.solve(&model.cp_model, params)?;
    Ok((model, response))
}
