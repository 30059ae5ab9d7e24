//! Tests for the neighbourhood renderer against a recording surface.

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use bevy::math::DVec2;
    use simulation::params::NeighbourhoodParams;
    use simulation::tiling::{plan_layout, plan_layout_with_scale, BlockKind, TiledLayoutPlan};
    use simulation::NeighbourhoodError;

    use crate::palette::*;
    use crate::recording::{PaintKind, RecordingSurface, SurfaceCall};
    use crate::render;
    use crate::surface::{DrawSurface, SavedState};

    const EPS: f64 = 1e-9;

    fn assert_close(actual: DVec2, expected: DVec2, what: &str) {
        assert!(
            (actual - expected).length() < EPS,
            "{what}: expected {expected:?}, got {actual:?}"
        );
    }

    fn render_recorded(params: &NeighbourhoodParams, plan: &TiledLayoutPlan) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render(&mut surface, params, plan).unwrap();
        surface
    }

    /// Defaults at one drawing unit per metre on a 200 x 200 surface: 3 x 3 blocks.
    fn unit_scale_plan(params: &NeighbourhoodParams) -> TiledLayoutPlan {
        let plan = plan_layout_with_scale(params, 200.0, 200.0, 1.0).unwrap();
        assert_eq!((plan.rows, plan.columns), (3, 3));
        plan
    }

    // -------------------------------------------------------------------------
    // Call structure
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_opens_with_clear_and_road_background() {
        let params = NeighbourhoodParams::default();
        let plan = plan_layout(&params, 800.0, 600.0).unwrap();
        let surface = render_recorded(&params, &plan);

        let calls = surface.calls();
        assert_eq!(calls[0], SurfaceCall::Save);
        assert_eq!(calls[1], SurfaceCall::Clear);
        assert_eq!(
            calls[2],
            SurfaceCall::FillRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
                colour: ROAD_COLOUR,
            }
        );
        assert_eq!(calls[3], SurfaceCall::Save, "first block opens its own scope");
        assert_eq!(calls.last(), Some(&SurfaceCall::Restore));
    }

    #[test]
    fn test_render_leaves_stack_balanced() {
        let params = NeighbourhoodParams {
            include_parks: true,
            ..Default::default()
        };
        let plan = plan_layout(&params, 800.0, 600.0).unwrap();
        let surface = render_recorded(&params, &plan);

        assert!(surface.is_balanced());
        let saves = surface
            .calls()
            .iter()
            .filter(|c| **c == SurfaceCall::Save)
            .count();
        let restores = surface
            .calls()
            .iter()
            .filter(|c| **c == SurfaceCall::Restore)
            .count();
        assert_eq!(saves, restores);
    }

    #[test]
    fn test_one_building_and_outline_per_lot() {
        let params = NeighbourhoodParams::default();
        let plan = plan_layout(&params, 800.0, 600.0).unwrap();
        let surface = render_recorded(&params, &plan);

        let buildings = surface
            .painted_with(PaintKind::Fill, BUILDING_COLOUR)
            .count();
        let outlines = surface
            .painted_with(PaintKind::Stroke, LOT_OUTLINE_COLOUR)
            .count();
        let yards = surface.painted_with(PaintKind::Fill, YARD_COLOUR).count();
        assert_eq!(buildings, 360);
        assert_eq!(buildings, plan.building_count());
        assert_eq!(outlines, buildings);
        assert_eq!(yards, buildings);

        let sidewalks = surface
            .painted_with(PaintKind::Fill, SIDEWALK_COLOUR)
            .count();
        assert_eq!(sidewalks, plan.rows * plan.columns);
        // Background plus one laneway per housing block
        let roads = surface.painted_with(PaintKind::Fill, ROAD_COLOUR).count();
        assert_eq!(roads, 1 + plan.rows * plan.columns);
    }

    #[test]
    fn test_render_through_trait_object() {
        let params = NeighbourhoodParams::default();
        let plan = unit_scale_plan(&params);
        let mut recording = RecordingSurface::new();
        {
            let surface: &mut dyn DrawSurface = &mut recording;
            render(surface, &params, &plan).unwrap();
        }
        assert!(recording.is_balanced());
        assert_eq!(
            recording
                .painted_with(PaintKind::Fill, BUILDING_COLOUR)
                .count(),
            plan.building_count()
        );
    }

    // -------------------------------------------------------------------------
    // Failure paths
    // -------------------------------------------------------------------------

    #[test]
    fn test_safety_bound_stops_after_background() {
        let params = NeighbourhoodParams {
            lot_width_in_m: 1.0,
            max_block_length_in_m: 300.0,
            ..Default::default()
        };
        let plan = plan_layout(&params, 2000.0, 2000.0).unwrap();
        let mut surface = RecordingSurface::new();

        let result = render(&mut surface, &params, &plan);
        assert!(matches!(
            result,
            Err(NeighbourhoodError::TooManyBuildings { .. })
        ));
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::Save,
                SurfaceCall::Clear,
                SurfaceCall::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 2000.0,
                    height: 2000.0,
                    colour: ROAD_COLOUR,
                },
                SurfaceCall::Restore,
            ]
        );
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_invalid_params_issue_no_calls() {
        let plan = plan_layout(&NeighbourhoodParams::default(), 800.0, 600.0).unwrap();
        let params = NeighbourhoodParams {
            front_yard_percent: 150.0,
            ..Default::default()
        };
        let mut surface = RecordingSurface::new();

        let result = render(&mut surface, &params, &plan);
        assert!(matches!(
            result,
            Err(NeighbourhoodError::InvalidParameter {
                name: "front_yard_percent",
                ..
            })
        ));
        assert!(surface.calls().is_empty(), "no drawing on invalid input");
    }

    #[test]
    fn test_saved_state_restores_on_early_return() {
        fn over_budget() -> Result<(), NeighbourhoodError> {
            Err(NeighbourhoodError::TooManyBuildings {
                requested: 2,
                max: 1,
            })
        }

        fn fails_midway(surface: &mut RecordingSurface) -> Result<(), NeighbourhoodError> {
            let mut scope = SavedState::new(surface);
            scope.translate(5.0, 5.0);
            over_budget()?;
            scope.translate(1.0, 1.0);
            Ok(())
        }

        let mut surface = RecordingSurface::new();
        assert!(fails_midway(&mut surface).is_err());
        assert!(surface.is_balanced());
        assert_close(
            surface.transform().translation,
            DVec2::ZERO,
            "transform after restore",
        );
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_surface_draws_background_only() {
        let params = NeighbourhoodParams::default();
        let plan = plan_layout(&params, 0.0, 0.0).unwrap();
        let surface = render_recorded(&params, &plan);
        assert_eq!(surface.painted().len(), 1);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_front_row_building_sits_behind_front_yard() {
        let params = NeighbourhoodParams::default();
        let plan = unit_scale_plan(&params);
        let surface = render_recorded(&params, &plan);

        let first = surface
            .painted_with(PaintKind::Fill, BUILDING_COLOUR)
            .next()
            .unwrap();
        // Road 11 + sidewalk 8, then 10% side yard and 20% front yard
        let (min, max) = first.bounds();
        assert_close(min, DVec2::new(19.0 + 1.01, 19.0 + 7.44), "building min");
        assert_close(
            max,
            DVec2::new(19.0 + 1.01 + 8.08, 19.0 + 7.44 + 13.02),
            "building max",
        );
    }

    #[test]
    fn test_back_row_building_faces_far_street() {
        let params = NeighbourhoodParams::default();
        let plan = unit_scale_plan(&params);
        let surface = render_recorded(&params, &plan);

        // Nine front-row lots come first, then the back row of the same block.
        let back = surface
            .painted_with(PaintKind::Fill, BUILDING_COLOUR)
            .nth(plan.lots_per_row)
            .unwrap();
        let (min, max) = back.bounds();

        let lot_bottom = 19.0 + plan.block_draw_height;
        assert!(
            (lot_bottom - max.y - 37.2 * 0.2).abs() < EPS,
            "front yard gap towards the far street, got {}",
            lot_bottom - max.y
        );
        assert!((max.y - min.y - 13.02).abs() < EPS);
        // Mirrored across the lot, so the side yard is on the right.
        assert!((19.0 + 10.1 - max.x - 1.01).abs() < EPS);
        assert!((max.x - min.x - 8.08).abs() < EPS);
    }

    #[test]
    fn test_rotation_recorded_for_back_row_only() {
        let params = NeighbourhoodParams::default();
        let plan = unit_scale_plan(&params);
        let surface = render_recorded(&params, &plan);

        let rotations: Vec<f64> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Rotate { radians } => Some(*radians),
                _ => None,
            })
            .collect();
        assert_eq!(rotations.len(), plan.building_count() / 2);
        assert!(rotations.iter().all(|r| (*r - PI).abs() < EPS));
    }

    #[test]
    fn test_park_block_replaces_lots() {
        let params = NeighbourhoodParams {
            include_parks: true,
            ..Default::default()
        };
        let plan = plan_layout(&params, 800.0, 600.0).unwrap();
        let surface = render_recorded(&params, &plan);

        let parks: Vec<_> = surface.painted_with(PaintKind::Fill, PARK_COLOUR).collect();
        // (column + row) % 4 == 0 on a 5 x 4 grid, columns from 1
        assert_eq!(parks.len(), 5);
        assert_eq!(
            surface
                .painted_with(PaintKind::Fill, BUILDING_COLOUR)
                .count(),
            15 * 2 * plan.lots_per_row
        );

        let first_park = plan
            .blocks(&params)
            .find(|b| b.kind == BlockKind::Park)
            .unwrap();
        assert_eq!((first_park.column, first_park.row), (4, 0));
        let inner = first_park.origin + DVec2::splat(plan.sidewalk_draw_width);
        let (min, max) = parks[0].bounds();
        assert_close(min, inner, "park min");
        assert_close(
            max,
            inner + DVec2::new(plan.block_draw_length, plan.block_draw_height),
            "park max",
        );
    }

    #[test]
    fn test_tiny_lots_never_paint_negative_yards() {
        let params = NeighbourhoodParams::default();
        let plan = plan_layout_with_scale(&params, 100.0, 100.0, 0.1).unwrap();
        let surface = render_recorded(&params, &plan);

        for call in surface.calls() {
            if let SurfaceCall::FillRect { width, height, .. } = call {
                assert!(*width >= 0.0 && *height >= 0.0, "negative fill {call:?}");
            }
        }
    }
}
