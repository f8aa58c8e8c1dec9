mod container;
mod instance;
mod item;
mod solution;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use instance::BP2Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use solution::BP2Solution;
#[doc(inline)]
pub use solution::Layout;
#[doc(inline)]
pub use solution::PlacedItem;

/// Number of dimensions supported by the library
pub const N_DIMENSIONS: usize = 2;
