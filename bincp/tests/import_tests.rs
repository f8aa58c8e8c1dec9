#[cfg(test)]
mod tests {
    use bincp::io::ext_repr::{ExtInstance, ExtInstanceSet, ExtItem, ExtShape};
    use bincp::io::{InstanceError, import, select_instance};
    use test_case::test_case;

    fn shape(dims: &[u64]) -> ExtShape {
        ExtShape {
            dimensions: dims.to_vec(),
        }
    }

    fn ext_instance(box_dims: &[u64], items: &[&[u64]]) -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            box_shape: shape(box_dims),
            items: items
                .iter()
                .map(|dims| ExtItem {
                    id: None,
                    shapes: vec![shape(dims)],
                })
                .collect(),
        }
    }

    fn import_error(ext: &ExtInstance) -> InstanceError {
        let err = import(ext).expect_err("import should fail");
        err.downcast_ref::<InstanceError>()
            .expect("error should be an InstanceError")
            .clone()
    }

    #[test]
    fn imports_valid_instance() {
        let ext = ext_instance(&[10, 8], &[&[5, 4], &[10, 8], &[1, 1]]);
        let instance = import(&ext).unwrap();
        assert_eq!(instance.container.width, 10);
        assert_eq!(instance.container.height, 8);
        assert_eq!(instance.n_items(), 3);
        assert_eq!(instance.item(1).width, 10);
        assert_eq!(instance.item_area(), 20 + 80 + 1);
    }

    #[test_case(&[10, 10, 10], 3; "three dimensional box")]
    #[test_case(&[10], 1; "one dimensional box")]
    #[test_case(&[], 0; "dimensionless box")]
    fn rejects_unsupported_box_dimensions(box_dims: &[u64], n_dims: usize) {
        let ext = ext_instance(box_dims, &[&[5, 5]]);
        match import_error(&ext) {
            InstanceError::UnsupportedDimensions { n_dims: n, .. } => assert_eq!(n, n_dims),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_three_dimensional_item() {
        let ext = ext_instance(&[10, 10], &[&[5, 5], &[5, 5, 5]]);
        assert!(matches!(
            import_error(&ext),
            InstanceError::UnsupportedDimensions { n_dims: 3, .. }
        ));
    }

    #[test_case(&[]; "no shapes")]
    #[test_case(&[&[5, 5], &[4, 6]]; "two shapes")]
    fn rejects_malformed_item(shapes: &[&[u64]]) {
        let n_shapes = shapes.len();
        let mut ext = ext_instance(&[10, 10], &[&[5, 5], &[5, 5]]);
        ext.items[1].shapes = shapes.iter().map(|dims| shape(dims)).collect();
        assert_eq!(
            import_error(&ext),
            InstanceError::MalformedItem { item: 1, n_shapes }
        );
    }

    #[test]
    fn rejects_zero_dimension() {
        let ext = ext_instance(&[10, 10], &[&[0, 5]]);
        assert!(matches!(
            import_error(&ext),
            InstanceError::NonPositiveDimension { .. }
        ));
    }

    #[test_case(&[11, 5]; "too wide")]
    #[test_case(&[5, 11]; "too high")]
    fn rejects_item_larger_than_container(dims: &[u64]) {
        let ext = ext_instance(&[10, 10], &[dims]);
        assert_eq!(
            import_error(&ext),
            InstanceError::ItemExceedsContainer { item: 0 }
        );
    }

    #[test]
    fn rejects_non_consecutive_ids() {
        let mut ext = ext_instance(&[10, 10], &[&[5, 5], &[5, 5]]);
        ext.items[1].id = Some(5);
        assert!(import(&ext).is_err());
    }

    #[test]
    fn selects_instance_by_index() {
        let set = ExtInstanceSet {
            instances: vec![
                ext_instance(&[10, 10], &[&[5, 5]]),
                ext_instance(&[20, 20], &[&[5, 5]]),
            ],
        };
        assert_eq!(select_instance(&set, 1).unwrap().box_shape.dimensions, vec![20, 20]);

        let err = select_instance(&set, 2).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InstanceError>(),
            Some(&InstanceError::SelectorOutOfRange {
                index: 2,
                n_instances: 2
            })
        );
        assert_eq!(
            err.to_string(),
            "instance 2 requested, but the file only contains 2 instances"
        );
    }

    #[test]
    fn import_error_messages() {
        let err = import_error(&ext_instance(&[10, 10, 10], &[&[5, 5]]));
        assert_eq!(
            err.to_string(),
            "box shape has 3 dimensions, only 2 dimensions are supported"
        );
        let err = import_error(&ext_instance(&[10, 10], &[&[11, 5]]));
        assert_eq!(err.to_string(), "item 0 does not fit inside the container");
    }

    #[test]
    fn parses_json_instance_set() {
        let json = r#"{
            "instances": [
                {
                    "name": "scenario_a",
                    "box_shape": { "dimensions": [10, 10] },
                    "items": [
                        { "shapes": [{ "dimensions": [5, 5] }] },
                        { "id": 1, "shapes": [{ "dimensions": [5, 5] }] }
                    ]
                }
            ]
        }"#;
        let set: ExtInstanceSet = serde_json::from_str(json).unwrap();
        let instance = import(select_instance(&set, 0).unwrap()).unwrap();
        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.container_area(), 100);
    }
}
