#[cfg(test)]
mod tests {
    use bincp::cp::{Constraint, Literal};
    use bincp::encoder::{
        BP2Model, EncoderConfig, ModelEncoder, slot_budget, trivial_lower_bound,
    };
    use bincp::entities::{BP2Instance, Container, Item};
    use test_case::test_case;

    fn instance(container: [u64; 2], items: &[[u64; 2]]) -> BP2Instance {
        let items = items
            .iter()
            .enumerate()
            .map(|(id, [w, h])| Item::new(id, *w, *h))
            .collect();
        BP2Instance::new(Container::new(container[0], container[1]), items)
    }

    fn count(model: &BP2Model, pred: impl Fn(&Constraint) -> bool) -> usize {
        model.cp_model.constraints().iter().filter(|c| pred(c)).count()
    }

    /// Values for a model in which every item sits in `slot` at the given position and only that slot is active
    fn values_with_all_items_in(model: &BP2Model, slot: usize, positions: &[(i64, i64)]) -> Vec<i64> {
        let mut values = vec![0; model.cp_model.n_vars()];
        for (item, &(x, y)) in positions.iter().enumerate() {
            values[model.assignment[item][slot].index()] = 1;
            values[model.placements[item][slot].start[0].index()] = x;
            values[model.placements[item][slot].start[1].index()] = y;
        }
        values[model.slot_active[slot].index()] = 1;
        values
    }

    #[test_case(100, &[25, 25, 25, 25], 1; "exact fit")]
    #[test_case(100, &[100, 100], 2; "two full bins")]
    #[test_case(100, &[30, 30, 41], 2; "rounded up")]
    #[test_case(100, &[1], 1; "tiny item")]
    #[test_case(100, &[], 0; "no items")]
    fn lower_bound(container_area: u64, item_areas: &[u64], expected: usize) {
        assert_eq!(
            trivial_lower_bound(container_area, item_areas.iter().copied()),
            expected
        );
    }

    #[test_case(3, 0, 6; "default is twice the lower bound")]
    #[test_case(3, 4, 4; "override")]
    #[test_case(3, 1, 1; "override below the lower bound")]
    #[test_case(0, 0, 0; "empty instance")]
    fn budget(lower_bound: usize, max_bins: usize, expected: usize) {
        assert_eq!(slot_budget(lower_bound, max_bins), expected);
    }

    #[test]
    fn default_budget_is_used_without_override() {
        let instance = instance([10, 10], &[[5, 5]; 4]);
        let model = ModelEncoder::default().encode(&instance);
        assert_eq!(model.lower_bound, 1);
        assert_eq!(model.n_slots, 2);

        let instance = self::instance([10, 10], &[[10, 10]; 2]);
        let model = ModelEncoder::default().encode(&instance);
        assert_eq!(model.lower_bound, 2);
        assert_eq!(model.n_slots, 4);
    }

    #[test]
    fn override_replaces_budget() {
        let instance = instance([10, 10], &[[10, 10]; 2]);
        let config = EncoderConfig {
            max_bins: 1,
            ..EncoderConfig::default()
        };
        let model = ModelEncoder::new(config).encode(&instance);
        assert_eq!(model.lower_bound, 2);
        assert_eq!(model.n_slots, 1);
    }

    #[test_case(&[[5, 5]; 4], 0; "four squares")]
    #[test_case(&[[3, 7], [6, 2], [4, 4]], 5; "mixed with override")]
    #[test_case(&[[10, 10]], 0; "single item")]
    fn model_structure(items: &[[u64; 2]], max_bins: usize) {
        let instance = instance([10, 10], items);
        let config = EncoderConfig {
            max_bins,
            ..EncoderConfig::default()
        };
        let model = ModelEncoder::new(config).encode(&instance);
        let (n, b) = (instance.n_items(), model.n_slots);

        assert_eq!(model.assignment.len(), n);
        assert!(model.assignment.iter().all(|row| row.len() == b));
        assert_eq!(model.slot_active.len(), b);
        // one boolean per (item, bin), a position per (item, bin, axis) and one boolean per bin
        assert_eq!(model.cp_model.n_vars(), n * b + 2 * n * b + b);
        assert_eq!(model.cp_model.intervals().len(), 2 * n * b);

        // exactly one bin per item, area, item count and b - 1 symmetry breaking constraints
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::Linear { .. })),
            n + 2 + b.saturating_sub(1)
        );
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::NoOverlap2D(rects) if rects.len() == n)),
            b
        );
        assert_eq!(count(&model, |c| matches!(c, Constraint::Implication(..))), n * b);
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::BoolOr(lits) if lits.len() == n + 1)),
            b
        );
        assert!(model.cp_model.objective().is_some());
    }

    #[test]
    fn dims_are_width_then_height() {
        assert_eq!(Item::new(0, 3, 7).dims(), [3, 7]);
        assert_eq!(Container::new(10, 8).dims(), [10, 8]);
    }

    #[test]
    fn placement_domains_keep_items_inside_the_container() {
        let instance = instance([10, 8], &[[3, 8], [10, 1]]);
        let model = ModelEncoder::default().encode(&instance);
        for (item, slots) in instance.items().zip(model.placements.iter()) {
            for placement in slots {
                assert_eq!(
                    model.cp_model.domain(placement.start[0]),
                    (0, (10 - item.width) as i64)
                );
                assert_eq!(
                    model.cp_model.domain(placement.start[1]),
                    (0, (8 - item.height) as i64)
                );
                let x_interval = model.cp_model.interval(placement.interval[0]);
                assert_eq!(x_interval.size, item.width as i64);
                assert_eq!(x_interval.presence, Literal::from(placement.presence));
            }
        }
    }

    #[test]
    fn symmetry_breaking_orders_every_adjacent_pair_of_bins() {
        let instance = instance([10, 10], &[[5, 5]; 3]);
        let config = EncoderConfig {
            max_bins: 4,
            ..EncoderConfig::default()
        };
        let model = ModelEncoder::new(config).encode(&instance);
        let ordering = model
            .cp_model
            .constraints()
            .iter()
            .filter(|c| matches!(c, Constraint::Linear { lb, ub: 0, .. } if *lb == i64::MIN))
            .count();
        assert_eq!(ordering, 3);

        // all items in the first bin violates the ordering, in the last bin it does not
        let positions = [(0, 0), (5, 0), (0, 5)];
        let first = values_with_all_items_in(&model, 0, &positions);
        let last = values_with_all_items_in(&model, 3, &positions);
        assert!(!model.cp_model.is_satisfied_by(&first));
        assert!(model.cp_model.is_satisfied_by(&last));

        let unordered = ModelEncoder::new(EncoderConfig {
            symmetry_breaking: false,
            ..config
        })
        .encode(&instance);
        let first = values_with_all_items_in(&unordered, 0, &positions);
        assert!(unordered.cp_model.is_satisfied_by(&first));
    }

    #[test]
    fn overlapping_items_in_the_same_bin_violate_the_model() {
        let instance = instance([10, 10], &[[5, 5]; 2]);
        let model = ModelEncoder::default().encode(&instance);
        let last = model.n_slots - 1;
        let disjoint = values_with_all_items_in(&model, last, &[(0, 0), (5, 5)]);
        let overlapping = values_with_all_items_in(&model, last, &[(0, 0), (4, 4)]);
        let touching = values_with_all_items_in(&model, last, &[(0, 0), (5, 0)]);
        assert!(model.cp_model.is_satisfied_by(&disjoint));
        assert!(!model.cp_model.is_satisfied_by(&overlapping));
        assert!(model.cp_model.is_satisfied_by(&touching));
    }

    #[test]
    fn slot_activity_is_linked_to_assignments() {
        let instance = instance([10, 10], &[[5, 5]; 2]);
        let model = ModelEncoder::default().encode(&instance);
        let last = model.n_slots - 1;

        // an item in an inactive bin
        let mut values = values_with_all_items_in(&model, last, &[(0, 0), (5, 5)]);
        values[model.slot_active[last].index()] = 0;
        assert!(!model.cp_model.is_satisfied_by(&values));

        // an active bin without items
        let mut values = values_with_all_items_in(&model, last, &[(0, 0), (5, 5)]);
        values[model.slot_active[0].index()] = 1;
        assert!(!model.cp_model.is_satisfied_by(&values));
    }

    #[test]
    fn redundant_constraints_can_be_disabled() {
        let instance = instance([10, 10], &[[5, 5]; 4]);
        let config = EncoderConfig {
            redundant_constraints: false,
            symmetry_breaking: false,
            ..EncoderConfig::default()
        };
        let model = ModelEncoder::new(config).encode(&instance);
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::Linear { .. })),
            instance.n_items()
        );
    }
}
