#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use glam::{Vec2, Vec3};

    use aerostrike_core::components::{AerialTarget, HoverParams, PatrolPath};
    use aerostrike_core::scene::NodeId;

    use crate::controller::PatrolMotionController;
    use crate::heading::{lerp_angle, travel_heading, wrap_angle};
    use crate::paths::{horizontal_offset, hover_height, position_at};

    const EPS: f32 = 1e-4;

    fn flat_hover(baseline_y: f32) -> HoverParams {
        HoverParams {
            baseline_y,
            amplitude: 0.0,
            frequency: 1.0,
            phase_offset: 0.0,
        }
    }

    fn make_target(path: PatrolPath) -> AerialTarget {
        AerialTarget::new(
            NodeId(0),
            Vec3::new(100.0, 40.0, -50.0),
            path,
            0.0,
            0.5,
            flat_hover(40.0),
        )
    }

    fn assert_vec2_near(a: Vec2, b: Vec2) {
        assert!((a - b).length() < EPS, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_circular_path_points() {
        let path = PatrolPath::Circular { radius: 30.0 };
        assert_vec2_near(horizontal_offset(&path, 0.0), Vec2::new(30.0, 0.0));
        assert_vec2_near(horizontal_offset(&path, FRAC_PI_2), Vec2::new(0.0, 30.0));
        assert_vec2_near(horizontal_offset(&path, PI), Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn test_circular_path_constant_radius() {
        let path = PatrolPath::Circular { radius: 12.5 };
        for i in 0..64 {
            let t = i as f32 * TAU / 64.0;
            assert!((horizontal_offset(&path, t).length() - 12.5).abs() < EPS);
        }
    }

    #[test]
    fn test_figure_eight_lemniscate_points() {
        let path = PatrolPath::FigureEight {
            radius_x: 40.0,
            radius_z: 20.0,
        };
        // Lobes at t = 0 and t = PI, crossing through the center at PI/2.
        assert_vec2_near(horizontal_offset(&path, 0.0), Vec2::new(40.0, 0.0));
        assert_vec2_near(horizontal_offset(&path, PI), Vec2::new(-40.0, 0.0));
        assert_vec2_near(horizontal_offset(&path, FRAC_PI_2), Vec2::ZERO);

        // d = 1 + sin²(PI/4) = 1.5
        let t = PI / 4.0;
        let expected = Vec2::new(40.0 * t.cos() / 1.5, 20.0 * t.sin() * t.cos() / 1.5);
        assert_vec2_near(horizontal_offset(&path, t), expected);
    }

    #[test]
    fn test_figure_eight_symmetry() {
        let path = PatrolPath::FigureEight {
            radius_x: 25.0,
            radius_z: 25.0,
        };
        for i in 1..16 {
            let t = i as f32 * 0.2;
            let a = horizontal_offset(&path, t);
            let b = horizontal_offset(&path, -t);
            assert_vec2_near(a, Vec2::new(b.x, -b.y));
        }
    }

    #[test]
    fn test_hover_height() {
        let hover = HoverParams {
            baseline_y: 50.0,
            amplitude: 2.0,
            frequency: 2.0,
            phase_offset: FRAC_PI_2,
        };
        assert!((hover_height(&hover, 0.0) - 52.0).abs() < EPS);
        let t = std::f64::consts::FRAC_PI_4;
        assert!((hover_height(&hover, t) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_position_at_combines_center_path_and_hover() {
        let center = Vec3::new(10.0, 999.0, 20.0);
        let pos = position_at(
            center,
            &PatrolPath::Circular { radius: 5.0 },
            &flat_hover(33.0),
            0.0,
            7.0,
        );
        // Altitude comes from the hover baseline, not center.y.
        assert!((pos - Vec3::new(15.0, 33.0, 20.0)).length() < EPS);
    }

    #[test]
    fn test_wrap_angle_range() {
        for raw in [-10.0_f32, -PI, -1.0, 0.0, 1.0, PI - 0.01, 7.0, 100.0] {
            let w = wrap_angle(raw);
            assert!((-PI..PI).contains(&w), "{raw} wrapped to {w}");
            assert!(((raw - w) / TAU - ((raw - w) / TAU).round()).abs() < EPS);
        }
    }

    #[test]
    fn test_heading_shortest_path_through_zero() {
        let from = 359.0_f32.to_radians();
        let to = 1.0_f32.to_radians();

        let halfway = lerp_angle(from, to, 0.5);
        assert!(wrap_angle(halfway).abs() < EPS, "got {halfway}");

        // Repeated smoothing never strays toward 180°.
        let mut heading = from;
        for _ in 0..200 {
            heading = lerp_angle(heading, to, 0.1);
            let off = wrap_angle(heading).abs();
            assert!(off <= 1.0_f32.to_radians() + EPS, "strayed to {heading}");
        }
        assert!((wrap_angle(heading - to)).abs() < 1e-3);
    }

    #[test]
    fn test_heading_shortest_path_other_direction() {
        let from = 10.0_f32.to_radians();
        let to = 350.0_f32.to_radians();
        let step = lerp_angle(from, to, 0.5);
        assert!((wrap_angle(step) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_travel_heading() {
        let origin = Vec2::ZERO;
        assert!(travel_heading(origin, origin).is_none());
        assert!((travel_heading(origin, Vec2::new(0.0, 1.0)).unwrap()).abs() < EPS);
        assert!((travel_heading(origin, Vec2::new(1.0, 0.0)).unwrap() - FRAC_PI_2).abs() < EPS);
        assert!((travel_heading(origin, Vec2::new(0.0, -1.0)).unwrap().abs() - PI).abs() < EPS);
    }

    #[test]
    fn test_first_update_skips_heading() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 });
        target.heading = 1.0;

        controller.update_target(&mut target, 0.0);
        assert_eq!(target.heading, 1.0, "heading must not change on first update");
        assert!(target.previous_horizontal.is_some());

        controller.update_target(&mut target, 0.1);
        assert_ne!(target.heading, 1.0, "heading should follow motion afterwards");
        assert!(target.heading.is_finite());
    }

    #[test]
    fn test_stationary_frame_does_not_produce_nan() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 });
        controller.update_target(&mut target, 1.0);
        let heading = target.heading;
        // Same elapsed time: zero-length delta.
        controller.update_target(&mut target, 1.0);
        assert_eq!(target.heading, heading);
        assert!(target.heading.is_finite());
    }

    #[test]
    fn test_heading_tracks_circular_tangent() {
        let controller = PatrolMotionController::new(1.0);
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 });
        controller.update_target(&mut target, 0.0);
        controller.update_target(&mut target, 0.01);
        // At phase 0 on a counter-clockwise (x→z) circle, motion is along +Z.
        assert!(wrap_angle(target.heading).abs() < 0.01);
    }

    #[test]
    fn test_destroyed_target_frozen() {
        let controller = PatrolMotionController::default();
        let mut targets = vec![
            make_target(PatrolPath::Circular { radius: 30.0 }),
            make_target(PatrolPath::FigureEight {
                radius_x: 30.0,
                radius_z: 15.0,
            }),
        ];
        controller.update(&mut targets, 1.0);
        targets[0].destroyed = true;
        let frozen = targets[0].clone();
        let moving_before = targets[1].position;

        controller.update(&mut targets, 2.0);
        assert_eq!(targets[0], frozen);
        assert_ne!(targets[1].position, moving_before);
    }

    #[test]
    fn test_phase_angle_monotonic() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::FigureEight {
            radius_x: 30.0,
            radius_z: 15.0,
        });
        let mut last = target.phase_angle;
        for frame in 1..=600 {
            controller.update_target(&mut target, frame as f64 / 60.0);
            assert!(target.phase_angle > last);
            last = target.phase_angle;
        }
    }

    /// Position depends only on elapsed time, not on how frames were sliced.
    #[test]
    fn test_frame_rate_independent_path() {
        let controller = PatrolMotionController::default();
        let path = PatrolPath::FigureEight {
            radius_x: 30.0,
            radius_z: 15.0,
        };
        let mut fast = make_target(path);
        let mut slow = make_target(path);

        for frame in 1..=120 {
            controller.update_target(&mut fast, frame as f64 / 120.0);
        }
        for frame in 1..=30 {
            controller.update_target(&mut slow, frame as f64 / 30.0);
        }
        assert!((fast.position - slow.position).length() < 1e-3);
        assert!((fast.phase_angle - slow.phase_angle).abs() < 1e-5);
    }

    #[test]
    fn test_spin_accumulates_with_time() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 }).with_spin(0.25);
        controller.update_target(&mut target, 4.0);
        assert!((target.spin_angle - 1.0).abs() < EPS);
    }

    /// A day into a session, consecutive frames still advance evenly.
    #[test]
    fn test_motion_smooth_in_long_session() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 });
        let day = 86_400.0;
        controller.update_target(&mut target, day);
        let expected_step = 30.0 * 0.5 / 60.0;

        let mut previous = target.position;
        for frame in 1..=120 {
            controller.update_target(&mut target, day + frame as f64 / 60.0);
            let step = (target.position - previous).length();
            assert!(
                (step - expected_step).abs() < expected_step * 0.01,
                "frame {frame} moved {step}, expected {expected_step}"
            );
            assert!(target.heading.is_finite());
            previous = target.position;
        }
    }

    #[test]
    fn test_spin_angle_stays_within_one_turn() {
        let controller = PatrolMotionController::default();
        let mut target = make_target(PatrolPath::Circular { radius: 30.0 }).with_spin(0.25);
        controller.update_target(&mut target, 86_400.0);
        assert!((0.0..TAU).contains(&target.spin_angle));
    }
}
