use crate::cp::{BoolVar, CpModel, IntVar, IntervalVar};
use crate::entities::{BP2Instance, BP2Solution, Layout, PlacedItem};
use crate::solver::SolveResponse;
use crate::util::assertions::solution_is_feasible;

/// Placement of an item inside a specific bin.
/// Only meaningful (and only constrained) when `presence` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionalPlacement {
    /// Position of the item's bottom left corner along x and y
    pub start: [IntVar; 2],
    /// The intervals `[start, start + item size)` along x and y, gated by `presence`
    pub interval: [IntervalVar; 2],
    /// The item is assigned to this bin
    pub presence: BoolVar,
}

/// A [`CpModel`] encoding a [`BP2Instance`], together with handles to all of its variables.
#[derive(Clone, Debug)]
pub struct BP2Model {
    pub cp_model: CpModel,
    /// Trivial lower bound on the number of bins
    pub lower_bound: usize,
    /// Number of bins (slots) modelled
    pub n_slots: usize,
    /// `assignment[item][slot]`: the item is placed in the slot
    pub assignment: Vec<Vec<BoolVar>>,
    /// `placements[item][slot]`
    pub placements: Vec<Vec<ConditionalPlacement>>,
    /// `slot_active[slot]`: the slot is counted as a used bin
    pub slot_active: Vec<BoolVar>,
}

impl BP2Model {
    /// Interprets a response to this model. Only non-empty bins are included in the solution.
    pub fn decode(&self, instance: &BP2Instance, response: &SolveResponse) -> BP2Solution {
        let layouts = match response.status.has_solution() {
            false => vec![],
            true => (0..self.n_slots)
                .map(|slot| Layout {
                    slot,
                    placed_items: instance
                        .items()
                        .filter(|item| response.bool_value(self.assignment[item.id][slot]))
                        .map(|item| {
                            let placement = &self.placements[item.id][slot];
                            PlacedItem {
                                item_id: item.id,
                                x: response.value(placement.start[0]) as u64,
                                y: response.value(placement.start[1]) as u64,
                            }
                        })
                        .collect(),
                })
                .filter(|layout| !layout.placed_items.is_empty())
                .collect(),
        };

        let solution = BP2Solution {
            status: response.status,
            objective: response.objective,
            layouts,
        };
        debug_assert!(!solution.has_solution() || solution_is_feasible(instance, &solution));
        solution
    }

    /// Number of slots marked active in the response, `None` if it carries no solution
    pub fn n_active_slots(&self, response: &SolveResponse) -> Option<usize> {
        if !response.status.has_solution() {
            return None;
        }
        let n_active = self
            .slot_active
            .iter()
            .filter(|active| response.bool_value(**active))
            .count();
        Some(n_active)
    }
}
