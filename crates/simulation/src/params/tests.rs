//! Tests for the parameter record: defaults, validation, and query strings.

#[cfg(test)]
mod tests {
    use crate::config::MAX_LOTS_PER_ROW;
    use crate::error::NeighbourhoodError;
    use crate::params::NeighbourhoodParams;

    fn invalid_name(params: &NeighbourhoodParams) -> &'static str {
        match params.validate() {
            Err(NeighbourhoodError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    // -------------------------------------------------------------------------
    // Defaults and validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(NeighbourhoodParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_lot_width_rejected() {
        let mut params = NeighbourhoodParams::default();
        params.lot_width_in_m = 0.0;
        assert_eq!(invalid_name(&params), "lot_width_in_m");
        params.lot_width_in_m = -3.0;
        assert_eq!(invalid_name(&params), "lot_width_in_m");
    }

    #[test]
    fn test_block_shorter_than_lot_rejected() {
        let params = NeighbourhoodParams {
            lot_width_in_m: 20.0,
            max_block_length_in_m: 19.9,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "max_block_length_in_m");
    }

    #[test]
    fn test_block_exactly_one_lot_long_is_valid() {
        let params = NeighbourhoodParams {
            lot_width_in_m: 20.0,
            max_block_length_in_m: 20.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let params = NeighbourhoodParams {
            road_width_in_m: f64::NAN,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "road_width_in_m");

        let params = NeighbourhoodParams {
            lot_depth_in_m: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "lot_depth_in_m");
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        let params = NeighbourhoodParams {
            side_yard_percent: 101.0,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "side_yard_percent");
    }

    #[test]
    fn test_overlapping_setbacks_still_valid() {
        // Front + back above 100% just means no buildable depth.
        let params = NeighbourhoodParams {
            front_yard_percent: 60.0,
            back_yard_percent: 60.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_negative_widths_rejected() {
        let params = NeighbourhoodParams {
            sidewalk_width_in_m: -1.0,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "sidewalk_width_in_m");
    }

    #[test]
    fn test_zero_widths_allowed() {
        let params = NeighbourhoodParams {
            road_width_in_m: 0.0,
            laneway_width_in_m: 0.0,
            sidewalk_width_in_m: 0.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_park_period_needs_two_blocks_when_parks_enabled() {
        let mut params = NeighbourhoodParams {
            include_parks: true,
            one_park_per_this_many_housing_blocks: 1,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "one_park_per_this_many_housing_blocks");

        params.include_parks = false;
        assert_eq!(params.validate(), Ok(()));

        params.one_park_per_this_many_housing_blocks = 0;
        assert_eq!(invalid_name(&params), "one_park_per_this_many_housing_blocks");
    }

    #[test]
    fn test_unrepresentable_lot_count_rejected() {
        let params = NeighbourhoodParams {
            max_block_length_in_m: 1e20,
            lot_width_in_m: 1.0,
            ..Default::default()
        };
        assert_eq!(invalid_name(&params), "max_block_length_in_m");

        let params = NeighbourhoodParams {
            max_block_length_in_m: 100.0,
            lot_width_in_m: 1e-300,
            ..Default::default()
        };
        assert_eq!(
            invalid_name(&params),
            "max_block_length_in_m",
            "an infinite lot count is rejected too"
        );
    }

    #[test]
    fn test_lot_count_at_cap_is_valid() {
        let params = NeighbourhoodParams {
            max_block_length_in_m: MAX_LOTS_PER_ROW as f64,
            lot_width_in_m: 1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    // -------------------------------------------------------------------------
    // Query strings
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(NeighbourhoodParams::from_query(""), NeighbourhoodParams::default());
        assert_eq!(NeighbourhoodParams::from_query("?"), NeighbourhoodParams::default());
    }

    #[test]
    fn test_query_overrides_given_keys_only() {
        let params = NeighbourhoodParams::from_query("?low=12.5&st=6&ip=TRUE&pphb=5");
        assert_eq!(params.lot_width_in_m, 12.5);
        assert_eq!(params.storeys, 6);
        assert!(params.include_parks);
        assert_eq!(params.one_park_per_this_many_housing_blocks, 5);
        assert_eq!(params.lot_depth_in_m, NeighbourhoodParams::default().lot_depth_in_m);
    }

    #[test]
    fn test_query_zero_is_not_treated_as_missing() {
        let params = NeighbourhoodParams::from_query("rw=0&law=0&fyp=0&st=0");
        assert_eq!(params.road_width_in_m, 0.0);
        assert_eq!(params.laneway_width_in_m, 0.0);
        assert_eq!(params.front_yard_percent, 0.0);
        assert_eq!(params.storeys, 0);
    }

    #[test]
    fn test_query_unparseable_value_keeps_default() {
        let defaults = NeighbourhoodParams::default();
        let params = NeighbourhoodParams::from_query("lod=deep&st=2.5&sw=");
        assert_eq!(params.lot_depth_in_m, defaults.lot_depth_in_m);
        assert_eq!(params.storeys, defaults.storeys);
        assert_eq!(params.sidewalk_width_in_m, defaults.sidewalk_width_in_m);
    }

    #[test]
    fn test_query_include_parks_only_true_enables() {
        let mut base = NeighbourhoodParams::from_query("ip=true");
        assert!(base.include_parks);
        base = NeighbourhoodParams::from_query("ip=yes");
        assert!(!base.include_parks);
    }

    #[test]
    fn test_query_unknown_keys_ignored() {
        let params = NeighbourhoodParams::from_query("zoom=4&low=11");
        assert_eq!(params.lot_width_in_m, 11.0);
    }

    #[test]
    fn test_to_query_uses_short_keys() {
        let query = NeighbourhoodParams::default().to_query();
        assert!(query.starts_with("fyp=20&syp=10&byp=45"), "got: {query}");
        assert!(query.contains("low=10.1"), "got: {query}");
        assert!(query.contains("ip=false"), "got: {query}");
        assert!(query.contains("pphb=4"), "got: {query}");
    }

    #[test]
    fn test_query_round_trip_preserves_zero_widths() {
        let params = NeighbourhoodParams {
            road_width_in_m: 0.0,
            include_parks: true,
            one_park_per_this_many_housing_blocks: 7,
            ..Default::default()
        };
        assert_eq!(NeighbourhoodParams::from_query(&params.to_query()), params);
    }

    #[test]
    fn test_params_serde_json_fills_missing_fields() {
        let params: NeighbourhoodParams =
            serde_json::from_str(r#"{"storeys": 8}"#).expect("valid json");
        assert_eq!(params.storeys, 8);
        assert_eq!(params.lot_width_in_m, NeighbourhoodParams::default().lot_width_in_m);
    }
}
