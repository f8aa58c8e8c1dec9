use crate::config::CliConfig;
use bincp::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct BPOutput {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CliConfig,
}
