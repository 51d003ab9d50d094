//! Cable tension and motor torque.

use ndarray::{Array1, Array2};

/// Tension and torque at a single cable position.
///
/// Tension is the weight of the cable already paid out plus the component of
/// the rover's weight along the slope. The whole paid-out cable is assumed to
/// hang off the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueModel {
    pub gravity: f64,
    /// kg/m
    pub cable_density: f64,
}

impl TorqueModel {
    pub fn new(gravity: f64, cable_density: f64) -> Self {
        Self {
            gravity,
            cable_density,
        }
    }

    /// Cable tension (N) for a rover of `mass` with `position` metres paid out
    /// on a wall at `angle`.
    pub fn tension(&self, mass: f64, position: f64, angle: f64) -> f64 {
        self.gravity * (position * self.cable_density + mass * angle.sin())
    }

    /// Motor torque (N·m) with the spool currently at `spool_radius`.
    pub fn torque(&self, mass: f64, position: f64, angle: f64, spool_radius: f64) -> f64 {
        self.tension(mass, position, angle) * spool_radius
    }

    /// Torque for every (mass, position) pair.
    ///
    /// Rows follow `masses`, columns follow the index-aligned sample
    /// sequences, so `surface[[m, i]]` is mass `m` at sample `i`.
    pub fn surface(
        &self,
        masses: &[f64],
        positions: &Array1<f64>,
        angles: &Array1<f64>,
        spool_radii: &Array1<f64>,
    ) -> Array2<f64> {
        Array2::from_shape_fn((masses.len(), positions.len()), |(m, i)| {
            self.torque(masses[m], positions[i], angles[i], spool_radii[i])
        })
    }
}
