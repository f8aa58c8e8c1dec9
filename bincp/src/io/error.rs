use thiserror::Error;

/// Reasons why an external instance cannot be turned into a [`BP2Instance`](crate::entities::BP2Instance).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The box shape or an item shape does not have exactly two dimensions
    #[error("{context} has {n_dims} dimensions, only 2 dimensions are supported")]
    UnsupportedDimensions { context: String, n_dims: usize },

    /// An item does not have exactly one candidate shape
    #[error("item {item} has {n_shapes} candidate shapes, exactly 1 is required")]
    MalformedItem { item: usize, n_shapes: usize },

    #[error("{context} has a non-positive dimension")]
    NonPositiveDimension { context: String },

    /// An item is larger than the container along some axis
    #[error("item {item} does not fit inside the container")]
    ItemExceedsContainer { item: usize },

    #[error("instance {index} requested, but the file only contains {n_instances} instances")]
    SelectorOutOfRange { index: usize, n_instances: usize },
}
