use serde::{Deserialize, Serialize};

/// External representation of a shape: one positive size per dimension.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtShape {
    pub dimensions: Vec<u64>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Identifier of the item, defaults to its position in the instance
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<u64>,
    /// Candidate shapes of the item. Only a single shape is supported.
    pub shapes: Vec<ExtShape>,
}

/// External representation of a [`BP2Instance`](crate::entities::BP2Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Name of the instance
    #[serde(default)]
    pub name: String,
    /// Shape of every bin
    pub box_shape: ExtShape,
    /// The items to be packed
    pub items: Vec<ExtItem>,
}

/// A file containing multiple instances, addressed by their index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstanceSet {
    pub instances: Vec<ExtInstance>,
}

/// External representation of a [`BP2Solution`](crate::entities::BP2Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Termination status reported by the solver
    pub status: String,
    /// Number of bins used, if a solution was found
    pub n_bins: Option<usize>,
    /// Trivial (area based) lower bound on the number of bins
    pub lower_bound: usize,
    /// Number of bins that were modelled
    pub max_bins: usize,
    /// Ratio of the total item area to the total area of the used bins
    pub density: f32,
    /// Wall time of the solve in seconds
    pub run_time_sec: f64,
    pub layouts: Vec<ExtLayout>,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    /// Index of the bin
    pub bin: usize,
    pub placed_items: Vec<ExtPlacedItem>,
    pub density: f32,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    pub item_id: u64,
    /// Position of the item's bottom left corner
    pub position: (u64, u64),
    /// Width and height of the item
    pub size: (u64, u64),
}
