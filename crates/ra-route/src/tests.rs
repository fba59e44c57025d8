//! Unit tests for ra-route.
//!
//! All tests use hand-crafted routes; none need external geometry.

#[cfg(test)]
mod helpers {
    use ra_core::Coordinate;
    use crate::RouteModel;

    /// Straight line due north from (0, 0) to (0, 1).
    pub fn meridian() -> RouteModel {
        RouteModel::from_lon_lat(&[(0.0, 0.0), (0.0, 1.0)]).unwrap()
    }

    /// Closed loop of five offices, ending where it starts.
    pub fn office_loop() -> RouteModel {
        RouteModel::new(vec![
            Coordinate::new(-104.9903, 39.7392), // Denver
            Coordinate::new(-87.6298, 41.8781),  // Chicago
            Coordinate::new(-75.1652, 39.9526),  // Philadelphia
            Coordinate::new(-77.4360, 37.5407),  // Richmond
            Coordinate::new(-84.3880, 33.7490),  // Atlanta
            Coordinate::new(-104.9903, 39.7392), // Denver
        ])
        .unwrap()
    }

    pub fn close(a: Coordinate, b: Coordinate) -> bool {
        (a.lon - b.lon).abs() < 1e-9 && (a.lat - b.lat).abs() < 1e-9
    }
}

// ── RouteModel ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use ra_core::{Coordinate, DistanceUnit};
    use super::helpers::*;
    use crate::{RouteError, RouteModel};

    #[test]
    fn rejects_short_routes() {
        assert_eq!(RouteModel::new(vec![]), Err(RouteError::InvalidRoute { points: 0 }));
        assert_eq!(
            RouteModel::from_lon_lat(&[(1.0, 2.0)]),
            Err(RouteError::InvalidRoute { points: 1 }),
        );
    }

    #[test]
    fn rejects_non_finite_vertices() {
        let err = RouteModel::from_lon_lat(&[(0.0, 0.0), (f64::NAN, 1.0), (0.0, 2.0)]).unwrap_err();
        assert!(matches!(err, RouteError::NonFiniteVertex { index: 1, .. }));
    }

    #[test]
    fn length_of_one_degree() {
        let route = meridian();
        let km = route.length(DistanceUnit::Kilometers);
        assert!((km - 111.195).abs() < 0.01, "got {km}");
        assert!((route.total_arc() - 1.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn endpoints() {
        let route = office_loop();
        assert_eq!(route.vertex_count(), 6);
        assert_eq!(route.start(), route.coordinates()[0]);
        assert_eq!(route.end(), route.coordinates()[5]);
    }

    #[test]
    fn point_at_arc_clamps() {
        let route = meridian();
        assert_eq!(route.point_at_arc(0.0), route.start());
        assert_eq!(route.point_at_arc(-1.0), route.start());
        assert_eq!(route.point_at_arc(f64::NAN), route.start());
        assert_eq!(route.point_at_arc(route.total_arc()), route.end());
        assert_eq!(route.point_at_arc(10.0), route.end());
    }

    #[test]
    fn point_at_vertex_boundaries() {
        let route = RouteModel::from_lon_lat(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]).unwrap();
        let p = route.point_at_arc(1.0_f64.to_radians());
        assert!(close(p, Coordinate::new(0.0, 1.0)), "got {p}");
        let p = route.point_at_arc(1.5_f64.to_radians());
        assert!(close(p, Coordinate::new(0.0, 1.5)), "got {p}");
    }

    #[test]
    fn point_along_in_units() {
        let route = meridian();
        let half = route.length(DistanceUnit::Miles) / 2.0;
        let p = route.point_along(half, DistanceUnit::Miles);
        assert!(close(p, Coordinate::new(0.0, 0.5)), "got {p}");
    }

    #[test]
    fn duplicate_vertices_are_skipped() {
        let route = RouteModel::from_lon_lat(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (0.0, 1.0),
            (0.0, 2.0),
        ])
        .unwrap();
        let p = route.point_at_arc(1.25_f64.to_radians());
        assert!(close(p, Coordinate::new(0.0, 1.25)), "got {p}");
    }

    #[test]
    fn zero_length_route() {
        let route = RouteModel::from_lon_lat(&[(5.0, 5.0), (5.0, 5.0)]).unwrap();
        assert_eq!(route.total_arc(), 0.0);
        assert_eq!(route.point_at_arc(0.3), Coordinate::new(5.0, 5.0));
    }
}

// ── DistanceSampler ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sampler {
    use ra_core::{AnimConfig, CoreError, DistanceUnit, OverrunPolicy};
    use super::helpers::*;
    use crate::{sample, DistanceSampler, RouteError};

    #[test]
    fn default_steps_give_501_points() {
        let route = office_loop();
        let seq = sample(&route, 1234.5, 500).unwrap();
        assert_eq!(seq.len(), 501);
        assert_eq!(seq.steps(), 500);
    }

    #[test]
    fn length_is_steps_plus_one_for_any_distance() {
        let route = office_loop();
        let total = route.length(DistanceUnit::Miles);
        for steps in [1, 2, 7, 500] {
            for d in [0.0, 0.3, total / 3.0, total, total * 4.5] {
                let seq = sample(&route, d, steps).unwrap();
                assert_eq!(seq.len(), steps as usize + 1, "steps {steps}, distance {d}");
            }
        }
    }

    #[test]
    fn zero_distance_repeats_start() {
        let route = office_loop();
        let seq = sample(&route, 0.0, 500).unwrap();
        assert_eq!(seq.len(), 501);
        assert!(seq.iter().all(|&p| p == route.start()));
    }

    #[test]
    fn overrun_clamps_to_end() {
        let route = meridian();
        let total = route.length(DistanceUnit::Miles);
        let steps = 10;
        let seq = sample(&route, total * 2.0, steps).unwrap();
        let increment = total * 2.0 / f64::from(steps);
        for (i, &p) in seq.iter().enumerate() {
            // Skip the sample sitting on the boundary itself.
            if i as f64 * increment > total * 1.0001 {
                assert_eq!(p, route.end(), "index {i}");
            }
        }
        assert_eq!(seq.last(), route.end());
        // The first half is still strictly inside the route.
        assert!(seq[4].lat < 1.0);
    }

    #[test]
    fn wrap_policy_laps_the_route() {
        let route = meridian();
        let total = route.length(DistanceUnit::Miles);
        let sampler = DistanceSampler::new(4, DistanceUnit::Miles)
            .unwrap()
            .with_overrun(OverrunPolicy::Wrap);
        // 1.5 laps in 4 steps: 0, 0.375, 0.75, 1.125 → 0.125, 1.5 → 0.5
        let seq = sampler.sample(&route, total * 1.5).unwrap();
        let lats: Vec<f64> = seq.iter().map(|p| p.lat).collect();
        for (got, want) in lats.iter().zip([0.0, 0.375, 0.75, 0.125, 0.5]) {
            assert!((got - want).abs() < 1e-6, "lats {lats:?}");
        }
        // The jump from 0.75 back to 0.125 is a lap boundary.
        assert!(seq.crosses_lap(2, 3));
        assert!(seq.crosses_lap(3, 2));
        assert!(!seq.crosses_lap(1, 2));
        assert!(!seq.crosses_lap(3, 4));
    }

    #[test]
    fn clamp_never_crosses_laps() {
        let route = meridian();
        let seq = sample(&route, route.length(DistanceUnit::Miles) * 3.0, 6).unwrap();
        assert!((0..6).all(|i| !seq.crosses_lap(i, i + 1)));
    }

    #[test]
    fn evenly_spaced_along_meridian() {
        let route = meridian();
        let total = route.length(DistanceUnit::Miles);
        let seq = sample(&route, total, 4).unwrap();
        let want = [0.0, 0.25, 0.5, 0.75, 1.0];
        assert_eq!(seq.len(), 5);
        for (p, lat) in seq.iter().zip(want) {
            assert!((p.lat - lat).abs() < 1e-9, "got {p}, want lat {lat}");
            assert!(p.lon.abs() < 1e-9);
        }
    }

    #[test]
    fn spacing_follows_distance_across_vertices() {
        let route = office_loop();
        let sampler = DistanceSampler::new(20, DistanceUnit::Kilometers).unwrap();
        let distance = route.length(DistanceUnit::Kilometers) * 0.8;
        let seq = sampler.sample(&route, distance).unwrap();
        // Chord between neighbours never exceeds the along-route spacing.
        let spacing = distance / 20.0;
        for w in seq.points().windows(2) {
            let chord = w[0].distance_to(w[1], DistanceUnit::Kilometers);
            assert!(chord <= spacing + 1e-6, "chord {chord} > spacing {spacing}");
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let route = office_loop();
        let a = sample(&route, 987.654, 500).unwrap();
        let b = sample(&route, 987.654, 500).unwrap();
        assert_eq!(a, b);
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.lon.to_bits(), q.lon.to_bits());
            assert_eq!(p.lat.to_bits(), q.lat.to_bits());
        }
    }

    #[test]
    fn units_change_spacing() {
        let route = meridian();
        let km = DistanceSampler::new(1, DistanceUnit::Kilometers).unwrap();
        let mi = DistanceSampler::new(1, DistanceUnit::Miles).unwrap();
        let a = km.sample(&route, 50.0).unwrap().last();
        let b = mi.sample(&route, 50.0).unwrap().last();
        assert!(b.lat > a.lat);
        assert_eq!(km.sample(&route, 50.0).unwrap().unit(), DistanceUnit::Kilometers);
    }

    #[test]
    fn invalid_inputs() {
        let route = meridian();
        assert_eq!(sample(&route, 1.0, 0), Err(RouteError::Core(CoreError::InvalidSteps(0))));
        assert!(matches!(
            sample(&route, -1.0, 4),
            Err(RouteError::Core(CoreError::InvalidDistance(_)))
        ));
        assert!(sample(&route, f64::NAN, 4).is_err());
    }

    #[test]
    fn from_config() {
        let cfg = AnimConfig { steps: 12, overrun: OverrunPolicy::Wrap, ..AnimConfig::default() };
        let sampler = DistanceSampler::from_config(&cfg).unwrap();
        assert_eq!(sampler.steps(), 12);
        assert_eq!(sampler.overrun(), OverrunPolicy::Wrap);
        let bad = AnimConfig { steps: 0, ..AnimConfig::default() };
        assert!(DistanceSampler::from_config(&bad).is_err());
    }

    #[test]
    fn sequence_accessors() {
        let route = meridian();
        let seq = sample(&route, 10.0, 3).unwrap();
        assert_eq!(seq.distance(), 10.0);
        assert_eq!(seq.first(), route.start());
        assert_eq!(seq.get(3), Some(seq.last()));
        assert_eq!(seq.get(4), None);
        assert!(!seq.is_empty());
        assert_eq!(seq.clone().into_points().len(), 4);
    }
}

// ── Heading lookup ────────────────────────────────────────────────────────────

#[cfg(test)]
mod heading {
    use ra_core::geo::bearing;
    use ra_core::Coordinate;
    use crate::{heading_at, heading_pair};

    #[test]
    fn pair_looks_ahead() {
        assert_eq!(heading_pair(5, 0), Some((0, 1)));
        assert_eq!(heading_pair(5, 3), Some((3, 4)));
    }

    #[test]
    fn last_index_uses_previous_pair() {
        for n in 2..10 {
            assert_eq!(heading_pair(n, n - 1), Some((n - 2, n - 1)));
            // Out-of-range indices never reach index n.
            assert_eq!(heading_pair(n, n + 3), Some((n - 2, n - 1)));
        }
    }

    #[test]
    fn single_point_has_no_heading() {
        assert_eq!(heading_pair(0, 0), None);
        assert_eq!(heading_pair(1, 0), None);
        assert_eq!(heading_at(&[Coordinate::new(1.0, 1.0)], 0), None);
    }

    #[test]
    fn heading_values() {
        let pts = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
        ];
        let h0 = heading_at(&pts, 0).unwrap();
        assert!(h0.abs() < 1e-9);
        let h1 = heading_at(&pts, 1).unwrap();
        assert_eq!(h1, bearing(pts[1], pts[2]));
        assert!((h1 - 90.0).abs() < 0.05);
        // Last index keeps the arriving heading.
        assert_eq!(heading_at(&pts, 2).unwrap(), h1);
    }
}
