use crate::encoder::BP2Model;
use crate::entities::{BP2Instance, BP2Solution};
use crate::io::ext_repr::{ExtLayout, ExtPlacedItem, ExtSolution};

/// Exports a solution out of the library
pub fn export(
    instance: &BP2Instance,
    model: &BP2Model,
    solution: &BP2Solution,
    run_time_sec: f64,
) -> ExtSolution {
    ExtSolution {
        status: solution.status.to_string(),
        n_bins: solution.has_solution().then(|| solution.n_bins()),
        lower_bound: model.lower_bound,
        max_bins: model.n_slots,
        density: solution.density(instance),
        run_time_sec,
        layouts: solution
            .layouts
            .iter()
            .map(|layout| ExtLayout {
                bin: layout.slot,
                placed_items: layout
                    .placed_items
                    .iter()
                    .map(|pi| {
                        let item = instance.item(pi.item_id);
                        ExtPlacedItem {
                            item_id: pi.item_id as u64,
                            position: (pi.x, pi.y),
                            size: (item.width, item.height),
                        }
                    })
                    .collect(),
                density: layout.density(instance),
            })
            .collect(),
    }
}
