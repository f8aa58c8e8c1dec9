/// External (serializable) representations of instances and solutions
pub mod ext_repr;

mod error;
mod export;
mod import;

#[doc(inline)]
pub use error::InstanceError;
#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::select_instance;
