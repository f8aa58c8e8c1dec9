/// Area based lower bound on the number of bins: `ceil(Σ item_area / container_area)`.
/// No feasible packing uses fewer bins.
pub fn trivial_lower_bound(container_area: u64, item_areas: impl IntoIterator<Item = u64>) -> usize {
    assert!(container_area > 0, "container area must be positive");
    let total_item_area: u64 = item_areas.into_iter().sum();
    total_item_area.div_ceil(container_area) as usize
}

/// Number of bins to model: `max_bins` if positive, twice the lower bound otherwise.
pub fn slot_budget(lower_bound: usize, max_bins: usize) -> usize {
    match max_bins {
        0 => 2 * lower_bound,
        n => n,
    }
}
