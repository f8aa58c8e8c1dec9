use crate::entities::{BP2Instance, BP2Solution, Item, PlacedItem};
use itertools::Itertools;
use log::error;

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// Checks whether a solution is a valid packing of the instance:
/// every item is placed exactly once, inside the container, without overlapping another item in the same bin.
pub fn solution_is_feasible(instance: &BP2Instance, solution: &BP2Solution) -> bool {
    let mut placement_counts = vec![0; instance.n_items()];
    for pi in solution.layouts.iter().flat_map(|l| l.placed_items.iter()) {
        placement_counts[pi.item_id] += 1;
    }
    if let Some((id, count)) = placement_counts.iter().find_position(|c| **c != 1) {
        error!("item {id} is placed {count} times");
        return false;
    }

    for layout in &solution.layouts {
        for pi in &layout.placed_items {
            let item = instance.item(pi.item_id);
            if pi.x + item.width > instance.container.width
                || pi.y + item.height > instance.container.height
            {
                error!("item {} exceeds the container in bin {}", pi.item_id, layout.slot);
                return false;
            }
        }
        let overlapping = layout
            .placed_items
            .iter()
            .tuple_combinations()
            .find(|(a, b)| items_overlap(instance, a, b));
        if let Some((a, b)) = overlapping {
            error!(
                "items {} and {} overlap in bin {}",
                a.item_id, b.item_id, layout.slot
            );
            return false;
        }
    }
    true
}

/// Two placed items overlap when their projections overlap on both axes
pub fn items_overlap(instance: &BP2Instance, a: &PlacedItem, b: &PlacedItem) -> bool {
    let (ia, ib) = (instance.item(a.item_id), instance.item(b.item_id));
    let x_overlap = a.x < b.x + ib.width && b.x < a.x + ia.width;
    let y_overlap = a.y < b.y + ib.height && b.y < a.y + ia.height;
    x_overlap && y_overlap
}
