mod gateway;
mod params;
mod pumpkin;
mod response;

#[doc(inline)]
pub use gateway::SolverGateway;
#[doc(inline)]
pub use params::SolverParams;
#[doc(inline)]
pub use pumpkin::PumpkinBackend;
#[doc(inline)]
pub use response::SolveResponse;
#[doc(inline)]
pub use response::SolveStatus;
