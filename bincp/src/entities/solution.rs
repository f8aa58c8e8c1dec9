use crate::entities::BP2Instance;
use crate::solver::SolveStatus;

/// An item placed at a specific position inside a bin.
/// `(x, y)` is the position of the item's bottom left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    pub item_id: usize,
    pub x: u64,
    pub y: u64,
}

/// Contents of a single bin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Index of the bin (slot) in the model this layout was decoded from
    pub slot: usize,
    pub placed_items: Vec<PlacedItem>,
}

impl Layout {
    pub fn item_area(&self, instance: &BP2Instance) -> u64 {
        self.placed_items
            .iter()
            .map(|pi| instance.item(pi.item_id).area())
            .sum()
    }

    pub fn density(&self, instance: &BP2Instance) -> f32 {
        self.item_area(instance) as f32 / instance.container_area() as f32
    }
}

/// Interpretation of a solver response for a [`BP2Instance`].
/// Only bins containing at least one item are represented.
#[derive(Clone, Debug)]
pub struct BP2Solution {
    pub status: SolveStatus,
    /// Objective value reported by the solver (number of bins marked active), if a solution was found
    pub objective: Option<i64>,
    pub layouts: Vec<Layout>,
}

impl BP2Solution {
    /// Number of bins that contain at least one item
    pub fn n_bins(&self) -> usize {
        self.layouts.len()
    }

    pub fn has_solution(&self) -> bool {
        self.status.has_solution()
    }

    /// Ratio of the total item area to the total area of the used bins
    pub fn density(&self, instance: &BP2Instance) -> f32 {
        if self.layouts.is_empty() {
            return 0.0;
        }
        let total_bin_area = instance.container_area() * self.layouts.len() as u64;
        instance.item_area() as f32 / total_bin_area as f32
    }
}
