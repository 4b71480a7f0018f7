//! Vincenty inverse geodesic on the WGS84 ellipsoid
//!
//! Iterates on the longitude difference on the auxiliary sphere until it
//! changes by less than [`CONVERGENCE_TOL`] or [`MAX_ITERATIONS`] is hit.
//! Near-antipodal points may never converge; the last iterate is used.
//!
//! Reference:
//! Vincenty, T. (1975). Direct and inverse solutions of geodesics on the
//! ellipsoid with application of nested equations. Survey Review 23(176).

use super::deg_to_rad;

/// WGS84 semi-major axis (m)
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (m)
pub const WGS84_B: f64 = (1.0 - WGS84_F) * WGS84_A;

/// Stop iterating once λ moves by no more than this (radians).
pub const CONVERGENCE_TOL: f64 = 1e-12;
/// Hard cap on λ iterations.
pub const MAX_ITERATIONS: usize = 200;

/// Outcome of a single inverse solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VincentyReport {
    /// Geodesic distance in meters (NaN if the inputs were NaN)
    pub distance: f64,
    /// λ updates performed
    pub iterations: usize,
    /// Whether λ settled within [`CONVERGENCE_TOL`]
    pub converged: bool,
}

/// Geodesic distance between two points in degrees, in meters.
#[inline]
pub fn dist_vincenty(xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> f64 {
    vincenty_inverse(xlon, xlat, ylon, ylat).distance
}

/// Solve the inverse problem and report how the iteration went.
pub fn vincenty_inverse(xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> VincentyReport {
    let f = WGS84_F;
    let l = deg_to_rad(ylon - xlon);

    // reduced latitudes
    let u1 = ((1.0 - f) * deg_to_rad(xlat).tan()).atan();
    let u2 = ((1.0 - f) * deg_to_rad(ylat).tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut sin_sigma;
    let mut cos_sigma;
    let mut sigma;
    let mut cos_sq_alpha;
    let mut cos_2sigma_m;
    let mut iterations = 0;
    let mut converged = false;

    loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = (t1 * t1 + t2 * t2).sqrt();

        if sin_sigma == 0.0 {
            // coincident points
            return VincentyReport {
                distance: 0.0,
                iterations,
                converged: true,
            };
        }

        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // equatorial line: cos²α = 0
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        iterations += 1;

        if (lambda - lambda_prev).abs() <= CONVERGENCE_TOL {
            converged = true;
            break;
        }
        if iterations >= MAX_ITERATIONS {
            break;
        }
    }

    let a2 = WGS84_A * WGS84_A;
    let b2 = WGS84_B * WGS84_B;
    let u_sq = cos_sq_alpha * (a2 - b2) / b2;
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let c2sm_sq = cos_2sigma_m * cos_2sigma_m;
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * c2sm_sq)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * c2sm_sq)));

    VincentyReport {
        distance: WGS84_B * big_a * (sigma - delta_sigma),
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dms(d: f64, m: f64, s: f64) -> f64 {
        d.signum() * (d.abs() + m / 60.0 + s / 3600.0)
    }

    #[test]
    fn test_flinders_peak_buninyong() {
        // Vincenty (1975) worked example
        let lat1 = dms(-37.0, 57.0, 3.72030);
        let lon1 = dms(144.0, 25.0, 29.52440);
        let lat2 = dms(-37.0, 39.0, 10.15610);
        let lon2 = dms(143.0, 55.0, 35.38390);

        let report = vincenty_inverse(lon1, lat1, lon2, lat2);
        assert!(report.converged);
        assert_relative_eq!(report.distance, 54_972.271, epsilon = 1e-3);
    }

    #[test]
    fn test_equatorial_degree() {
        // along the equator the geodesic is an arc of radius a
        let d = dist_vincenty(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(d, WGS84_A * std::f64::consts::PI / 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_meridian_degree() {
        let d = dist_vincenty(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(d, 110_574.389, epsilon = 1e-3);
    }

    #[test]
    fn test_coincident_points() {
        let report = vincenty_inverse(-71.06, 42.36, -71.06, 42.36);
        assert_eq!(report.distance, 0.0);
        assert_eq!(report.iterations, 0);
        assert!(report.converged);
    }

    #[test]
    fn test_pole_to_pole() {
        let d = dist_vincenty(0.0, -90.0, 0.0, 90.0);
        assert_relative_eq!(d, 20_003_931.459, epsilon = 1e-2);
    }

    #[test]
    fn test_near_antipodal_returns_estimate() {
        let report = vincenty_inverse(0.0, 0.0, 179.7, 0.5);
        assert!(!report.converged);
        assert_eq!(report.iterations, MAX_ITERATIONS);
        assert!(report.distance.is_finite());
        assert!(report.distance > 19_900_000.0 && report.distance < 20_010_000.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = dist_vincenty(-0.1278, 51.5074, 139.6917, 35.6895);
        let d2 = dist_vincenty(139.6917, 35.6895, -0.1278, 51.5074);
        assert_relative_eq!(d1, d2, max_relative = 1e-9);
    }

    #[test]
    fn test_close_to_haversine() {
        let v = dist_vincenty(13.405, 52.52, 2.3522, 48.8566);
        let h = super::super::dist_haversine(13.405, 52.52, 2.3522, 48.8566);
        assert!((v - h).abs() / v < 0.005);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(dist_vincenty(0.0, f64::NAN, 1.0, 1.0).is_nan());
    }
}
