use std::iter;
use std::time::Instant;

use crate::cp::{CpModel, LinearExpr};
use crate::encoder::bp2_model::ConditionalPlacement;
use crate::encoder::{BP2Model, EncoderConfig, slot_budget, trivial_lower_bound};
use crate::entities::{BP2Instance, N_DIMENSIONS};
use itertools::Itertools;
use log::{debug, info};

/// Translates a [`BP2Instance`] into a [`BP2Model`].
///
/// Every item gets one assignment boolean per bin and, per bin, an optional x- and y-interval
/// which only takes part in that bin's non-overlap constraint when the item is assigned to it.
/// The number of used bins is minimized.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelEncoder {
    pub config: EncoderConfig,
}

impl ModelEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn encode(&self, instance: &BP2Instance) -> BP2Model {
        let start = Instant::now();
        let container = &instance.container;

        let lower_bound =
            trivial_lower_bound(instance.container_area(), instance.items().map(|i| i.area()));
        info!("[ENC] trivial lower bound on the number of bins: {lower_bound}");
        if self.config.max_bins == 0 {
            info!("[ENC] setting max_bins to {}", 2 * lower_bound);
        }
        let n_slots = slot_budget(lower_bound, self.config.max_bins);

        let mut cp = CpModel::new();

        let assignment = instance
            .items()
            .map(|_| (0..n_slots).map(|_| cp.new_bool_var()).collect_vec())
            .collect_vec();

        // every item is placed in exactly one bin
        for item_slots in &assignment {
            cp.add_eq(LinearExpr::sum(item_slots.iter().copied()), 1);
        }

        let placements = instance
            .items()
            .map(|item| {
                (0..n_slots)
                    .map(|slot| {
                        let presence = assignment[item.id][slot];
                        let (size, capacity) = (item.dims(), container.dims());
                        let start: [_; N_DIMENSIONS] = [0, 1].map(|axis| {
                            cp.new_int_var(0, capacity[axis] as i64 - size[axis] as i64)
                        });
                        let interval = [0, 1].map(|axis| {
                            cp.new_optional_fixed_size_interval(
                                start[axis],
                                size[axis] as i64,
                                presence,
                            )
                        });
                        ConditionalPlacement {
                            start,
                            interval,
                            presence,
                        }
                    })
                    .collect_vec()
            })
            .collect_vec();

        debug!(
            "[ENC] container size: {}x{}",
            container.width, container.height
        );
        for slot in 0..n_slots {
            cp.add_no_overlap_2d(
                placements
                    .iter()
                    .map(|item_slots| (item_slots[slot].interval[0], item_slots[slot].interval[1])),
            );
        }

        let items_per_slot = (0..n_slots)
            .map(|slot| LinearExpr::sum(assignment.iter().map(|item_slots| item_slots[slot])))
            .collect_vec();

        if self.config.redundant_constraints {
            let placed_area = LinearExpr::weighted_sum(instance.items().flat_map(|item| {
                assignment[item.id]
                    .iter()
                    .map(move |&a| (a, item.area() as i64))
            }));
            cp.add_eq(placed_area, instance.item_area() as i64);

            let placed_items = LinearExpr::sum(assignment.iter().flatten().copied());
            cp.add_eq(placed_items, instance.n_items() as i64);
        }

        if self.config.symmetry_breaking {
            // bins are ordered by their number of items
            for (prev, next) in items_per_slot.iter().tuple_windows() {
                cp.add_le(prev.clone(), next.clone());
            }
        }

        let slot_active = (0..n_slots)
            .map(|slot| {
                let active = cp.new_bool_var();
                for item_slots in &assignment {
                    cp.add_implication(item_slots[slot], active);
                }
                // an active bin cannot be empty
                cp.add_bool_or(
                    iter::once(!active)
                        .chain(assignment.iter().map(|item_slots| item_slots[slot].into())),
                );
                active
            })
            .collect_vec();

        cp.minimize(LinearExpr::sum(slot_active.iter().copied()));

        info!(
            "[ENC] model built for {} items and {} bins: {} variables, {} constraints ({:.3}ms)",
            instance.n_items(),
            n_slots,
            cp.n_vars(),
            cp.constraints().len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        BP2Model {
            cp_model: cp,
            lower_bound,
            n_slots,
            assignment,
            placements,
            slot_active,
        }
    }
}
