#[cfg(test)]
mod tests {
    use bincp::solver::SolverParams;
    use test_case::test_case;

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    fn empty_overlay_keeps_defaults(overlay: &str) {
        let params = SolverParams::default().with_overlay(overlay).unwrap();
        assert_eq!(params, SolverParams::default());
    }

    #[test_case("max_time_in_seconds:2.5 log_search_progress:false"; "key value pairs")]
    #[test_case("max_time_in_seconds: 2.5, log_search_progress: false"; "separated by commas")]
    #[test_case(r#"{"max_time_in_seconds": 2.5, "log_search_progress": false}"#; "json object")]
    fn overlay_is_merged(overlay: &str) {
        let params = SolverParams::default().with_overlay(overlay).unwrap();
        assert_eq!(params.max_time_in_seconds, Some(2.5));
        assert!(!params.log_search_progress);
        assert!(!params.stop_after_first_solution);
    }

    #[test]
    fn overlay_is_merged_on_top_of_existing_values() {
        let base = SolverParams {
            max_time_in_seconds: Some(1000.0),
            ..SolverParams::default()
        };
        let params = base.with_overlay("stop_after_first_solution:true").unwrap();
        assert_eq!(params.max_time_in_seconds, Some(1000.0));
        assert!(params.stop_after_first_solution);
    }

    #[test_case("num_workers:8"; "unknown key")]
    #[test_case("max_time_in_seconds:many"; "unparsable value")]
    #[test_case("stop_after_first_solution:yes"; "not a boolean")]
    #[test_case("log_search_progress:1"; "wrong type")]
    #[test_case("max_time_in_seconds"; "missing separator")]
    #[test_case("max_time_in_seconds:"; "missing value")]
    #[test_case("{\"max_time_in_seconds\": 3"; "broken json")]
    fn malformed_overlay_is_rejected(overlay: &str) {
        assert!(SolverParams::default().with_overlay(overlay).is_err());
    }
}
