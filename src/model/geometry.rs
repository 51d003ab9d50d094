//! Spherical-cap crater geometry.
//!
//! The crater wall is treated as an arc of the sphere whose cap matches the
//! crater depth and rim diameter. The cable lies along that arc from the rim
//! down to the crater floor.

use ndarray::Array1;

use crate::error::{ModelError, ModelResult};

/// Derived shape of the crater the cable traverses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterGeometry {
    /// Crater depth (m).
    pub depth: f64,
    /// Rim diameter (m).
    pub diameter: f64,
    /// Radius of the sphere whose cap matches the crater (m).
    pub arc_radius: f64,
    /// Wall angle at the rim, measured at the centre of curvature (rad).
    pub initial_angle: f64,
    /// Arc length from rim to floor (m).
    pub cable_length: f64,
}

impl CraterGeometry {
    /// Derive the crater arc from its depth and diameter.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if either dimension is not positive, or
    /// if the crater is an exact hemisphere (arc radius equal to depth).
    pub fn new(depth: f64, diameter: f64) -> ModelResult<Self> {
        if !(depth > 0.0) {
            return Err(ModelError::domain(format!(
                "crater depth must be positive, got {depth}"
            )));
        }
        if !(diameter > 0.0) {
            return Err(ModelError::domain(format!(
                "crater diameter must be positive, got {diameter}"
            )));
        }

        let arc_radius = depth / 2.0 + diameter.powi(2) / (8.0 * depth);
        let centre_height = arc_radius - depth;
        if centre_height == 0.0 {
            return Err(ModelError::domain(format!(
                "crater arc radius equals crater depth ({depth}), wall angle is undefined"
            )));
        }

        // atan2 keeps caps deeper than a hemisphere (negative centre height) past 90 degrees
        let initial_angle = (diameter / 2.0).atan2(centre_height);
        let cable_length = initial_angle * arc_radius;

        Ok(Self {
            depth,
            diameter,
            arc_radius,
            initial_angle,
            cable_length,
        })
    }

    /// Wall angle at each sample, from the rim angle down to 0 at the floor.
    pub fn wall_angles(&self, samples: usize) -> Array1<f64> {
        linspace(self.initial_angle, 0.0, samples)
    }

    /// Cable paid out at each sample, from 0 to the full cable length.
    pub fn cable_positions(&self, samples: usize) -> Array1<f64> {
        linspace(0.0, self.cable_length, samples)
    }
}

/// `n` evenly spaced values from `start` to `end`, with the last value pinned
/// to `end` exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    let mut values = Array1::linspace(start, end, n);
    if n > 1 {
        values[n - 1] = end;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn reference_crater() {
        let geometry = CraterGeometry::new(200.0, 2000.0).unwrap();

        assert_relative_eq!(geometry.arc_radius, 2600.0);
        assert_relative_eq!(
            geometry.initial_angle,
            (1000.0_f64 / 2400.0).atan(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.cable_length,
            (1000.0_f64 / 2400.0).atan() * 2600.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rim_lies_on_the_arc() {
        for (depth, diameter) in [(200.0, 2000.0), (10.0, 35.0), (80.0, 100.0), (3.0, 500.0)] {
            let geometry = CraterGeometry::new(depth, diameter).unwrap();
            assert!(geometry.arc_radius >= depth / 2.0);
            assert_relative_eq!(
                geometry.initial_angle.sin(),
                diameter / (2.0 * geometry.arc_radius),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn deep_crater_wall_passes_vertical() {
        // Narrower than a hemisphere, so the rim is above the centre of curvature
        let geometry = CraterGeometry::new(80.0, 100.0).unwrap();
        assert!(geometry.arc_radius < geometry.depth);
        assert!(geometry.initial_angle > std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn angles_run_from_rim_to_floor() {
        let geometry = CraterGeometry::new(200.0, 2000.0).unwrap();
        let angles = geometry.wall_angles(1000);

        assert_eq!(angles.len(), 1000);
        assert_eq!(angles[0], geometry.initial_angle);
        assert_abs_diff_eq!(angles[999], 0.0);
        assert!(angles.windows(2).into_iter().all(|w| w[1] <= w[0]));
    }

    #[test]
    fn positions_run_from_zero_to_cable_length() {
        let geometry = CraterGeometry::new(200.0, 2000.0).unwrap();
        let positions = geometry.cable_positions(1000);

        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[999], geometry.cable_length);
        assert!(positions.windows(2).into_iter().all(|w| w[1] >= w[0]));
    }

    #[test]
    fn single_sample_is_the_start_value() {
        assert_eq!(linspace(3.0, 7.0, 1).to_vec(), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn rejects_non_positive_depth() {
        for depth in [0.0, -5.0, f64::NAN] {
            let err = CraterGeometry::new(depth, 2000.0).unwrap_err();
            assert!(matches!(err, ModelError::Domain(ref msg) if msg.contains("depth")));
        }
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let err = CraterGeometry::new(200.0, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(ref msg) if msg.contains("diameter")));
    }

    #[test]
    fn rejects_hemisphere() {
        // w = 2h puts the centre of curvature at rim height
        let err = CraterGeometry::new(100.0, 200.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(ref msg) if msg.contains("arc radius")));
    }
}
