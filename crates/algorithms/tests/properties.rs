//! Property-based tests for the distance metrics and aggregators.
//!
//! Longitudes are kept within ±60° so no generated pair is close to
//! antipodal, where Vincenty may stop before converging.

use geoweight_algorithms::prelude::*;
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = (f64, f64)> {
    (-60.0f64..60.0, -80.0f64..80.0)
}

fn arb_points(max: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    proptest::collection::vec(arb_point(), 0..max).prop_map(|pts| pts.into_iter().unzip())
}

fn close(a: f64, b: f64, rel: f64, abs: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()) + abs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 300,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // Metrics
    // ─────────────────────────────────────────────────────────────────────────

    /// d(x, y) == d(y, x)
    #[test]
    fn haversine_symmetric((xlon, xlat) in arb_point(), (ylon, ylat) in arb_point()) {
        let a = dist_haversine(xlon, xlat, ylon, ylat);
        let b = dist_haversine(ylon, ylat, xlon, xlat);
        prop_assert!(close(a, b, 1e-12, 1e-6), "{} vs {}", a, b);
    }

    #[test]
    fn vincenty_symmetric((xlon, xlat) in arb_point(), (ylon, ylat) in arb_point()) {
        let a = dist_vincenty(xlon, xlat, ylon, ylat);
        let b = dist_vincenty(ylon, ylat, xlon, xlat);
        prop_assert!(close(a, b, 1e-9, 1e-3), "{} vs {}", a, b);
    }

    /// Self distance is zero and distances are bounded by half the sphere
    #[test]
    fn haversine_range((xlon, xlat) in arb_point(), (ylon, ylat) in arb_point()) {
        prop_assert!(dist_haversine(xlon, xlat, xlon, xlat).abs() < 1e-6);
        let d = dist_haversine(xlon, xlat, ylon, ylat);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
    }

    #[test]
    fn vincenty_converges_off_antipode((xlon, xlat) in arb_point(), (ylon, ylat) in arb_point()) {
        let r = vincenty_inverse(xlon, xlat, ylon, ylat);
        prop_assert!(r.converged, "{:?}", r);
        prop_assert!(r.distance >= 0.0);
    }

    /// Sphere and ellipsoid agree to within a percent
    #[test]
    fn metrics_agree((xlon, xlat) in arb_point(), (ylon, ylat) in arb_point()) {
        let h = dist_haversine(xlon, xlat, ylon, ylat);
        let v = dist_vincenty(xlon, xlat, ylon, ylat);
        prop_assume!(h > 1_000.0);
        prop_assert!(close(h, v, 0.01, 0.0), "haversine {} vincenty {}", h, v);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Batch shapes
    // ─────────────────────────────────────────────────────────────────────────

    /// Every batch shape agrees exactly with one-to-one evaluation
    #[test]
    fn batch_matches_1to1((xlon, xlat) in arb_points(6), (ylon, ylat) in arb_points(6)) {
        for name in ["Haversine", "Vincenty"] {
            let m = dist_mtom(&xlon, &xlat, &ylon, &ylat, name).unwrap();
            prop_assert_eq!(m.dim(), (xlon.len(), ylon.len()));
            for i in 0..xlon.len() {
                let row = dist_1tom(xlon[i], xlat[i], &ylon, &ylat, name).unwrap();
                for j in 0..ylon.len() {
                    let d = dist_1to1(xlon[i], xlat[i], ylon[j], ylat[j], name).unwrap();
                    prop_assert_eq!(m[[i, j]], d);
                    prop_assert_eq!(row[j], d);
                }
            }
        }
    }

    #[test]
    fn elementwise_matches_1to1((lon, lat) in arb_points(8), shift in 0.0f64..5.0) {
        let ylon: Vec<f64> = lon.iter().map(|v| v + shift).collect();
        let v = dist_df(&lon, &lat, &ylon, &lat, "Haversine").unwrap();
        prop_assert_eq!(v.len(), lon.len());
        for i in 0..lon.len() {
            prop_assert_eq!(v[i], dist_haversine(lon[i], lat[i], ylon[i], lat[i]));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregators
    // ─────────────────────────────────────────────────────────────────────────

    /// With positive weights the mean stays within the measure range
    #[test]
    fn weighted_mean_is_convex(
        (ylon, ylat) in arb_points(8),
        (xlon, xlat) in arb_point(),
        seed in proptest::collection::vec(-50.0f64..50.0, 8),
    ) {
        let k = ylon.len();
        prop_assume!(k > 0);
        // keep the origin off every reference point
        prop_assume!(ylon.iter().zip(&ylat).all(|(&lo, &la)| dist_haversine(xlon, xlat, lo, la) > 1.0));
        let measure = seed[..k].to_vec();

        let x = DataFrame::new()
            .with_numeric("id", vec![1.0]).unwrap()
            .with_numeric("lon", vec![xlon]).unwrap()
            .with_numeric("lat", vec![xlat]).unwrap();
        let y = DataFrame::new()
            .with_numeric("lon", ylon).unwrap()
            .with_numeric("lat", ylat).unwrap()
            .with_numeric("m", measure.clone()).unwrap();

        let out = dist_weighted_mean(&x, &y, "m", WeightedMeanParams::default()).unwrap();
        let wm = out.numeric_column("wmeasure").unwrap()[0];
        let lo = measure.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = measure.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(wm >= lo - 1e-9 && wm <= hi + 1e-9, "{} not in [{}, {}]", wm, lo, hi);
    }

    /// One reference row reproduces its measure exactly
    #[test]
    fn single_reference_reproduces_measure(
        (xlon, xlat) in arb_point(),
        offset in 0.01f64..5.0,
        m in -1e6f64..1e6,
    ) {
        let x = DataFrame::new()
            .with_text("id", vec!["only".into()]).unwrap()
            .with_numeric("lon", vec![xlon]).unwrap()
            .with_numeric("lat", vec![xlat]).unwrap();
        let y = DataFrame::new()
            .with_numeric("lon", vec![xlon + offset]).unwrap()
            .with_numeric("lat", vec![xlat]).unwrap()
            .with_numeric("m", vec![m]).unwrap()
            .with_numeric("pop", vec![250.0]).unwrap();

        let out = dist_weighted_mean(&x, &y, "m", WeightedMeanParams::default()).unwrap();
        prop_assert_eq!(out.numeric_column("wmeasure").unwrap()[0], m);
        let out = popdist_weighted_mean(&x, &y, "m", PopWeightedMeanParams::default()).unwrap();
        prop_assert_eq!(out.numeric_column("wmeasure").unwrap()[0], m);
    }

    /// Nearest distance is the minimum of the one-to-many row
    #[test]
    fn dist_min_is_row_minimum((xlon, xlat) in arb_points(5), (ylon, ylat) in arb_points(7)) {
        let n = xlon.len();
        let x = DataFrame::new()
            .with_numeric("id", (0..n).map(|i| i as f64).collect()).unwrap()
            .with_numeric("lon", xlon.clone()).unwrap()
            .with_numeric("lat", xlat.clone()).unwrap();
        let y = DataFrame::new()
            .with_numeric("lon", ylon.clone()).unwrap()
            .with_numeric("lat", ylat.clone()).unwrap();

        let out = dist_min(&x, &y, DistMinParams::default()).unwrap();
        let mins = out.numeric_column("mindist").unwrap();
        prop_assert_eq!(mins.len(), n);
        for i in 0..n {
            let row = dist_1tom(xlon[i], xlat[i], &ylon, &ylat, "Haversine").unwrap();
            let expected = row.iter().cloned().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(mins[i], expected);
        }
    }
}
