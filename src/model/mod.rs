//! Torque sweep over rover mass and cable position.
//!
//! Everything here is a pure function of [`Config`]: the same configuration
//! always yields the same arrays.

mod geometry;
mod peak;
mod spool;
mod torque;

pub use geometry::{linspace, CraterGeometry};
pub use peak::{peak_index, Peak};
pub use spool::SpoolModel;
pub use torque::TorqueModel;

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::config::Config;
use crate::error::{ModelError, ModelResult};

/// Result of one full evaluation. All per-sample sequences share one length
/// and index.
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueSweep {
    pub geometry: CraterGeometry,
    pub spool: SpoolModel,
    pub masses: Vec<f64>,
    pub angles: Array1<f64>,
    pub positions: Array1<f64>,
    pub spool_radii: Array1<f64>,
    /// Shape (masses, samples)
    pub torque: Array2<f64>,
}

/// Run the whole pipeline for `config`.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] for an empty mass set or zero samples,
/// [`ModelError::Domain`] for crater or spool parameters that make the
/// formulas undefined. Nothing is computed before validation passes.
pub fn compute(config: &Config) -> ModelResult<TorqueSweep> {
    let samples = config.sweep.samples;
    if samples == 0 {
        return Err(ModelError::invalid_input("sample count must be at least 1"));
    }
    if config.rover.masses.is_empty() {
        return Err(ModelError::invalid_input("rover mass set is empty"));
    }

    let geometry = CraterGeometry::new(config.crater.depth, config.crater.diameter)?;
    let spool = SpoolModel::new(
        config.spool.outer_radius,
        config.spool.inner_radius,
        geometry.cable_length,
    )?;
    let model = TorqueModel::new(config.crater.gravity, config.cable.linear_density);

    let angles = geometry.wall_angles(samples);
    let positions = geometry.cable_positions(samples);
    let spool_radii = spool.radii(&positions);
    let torque = model.surface(&config.rover.masses, &positions, &angles, &spool_radii);

    debug!(
        "Swept {} masses x {} samples, arc radius {:.1} m, cable {:.1} m",
        config.rover.masses.len(),
        samples,
        geometry.arc_radius,
        geometry.cable_length
    );

    Ok(TorqueSweep {
        geometry,
        spool,
        masses: config.rover.masses.clone(),
        angles,
        positions,
        spool_radii,
        torque,
    })
}

impl TorqueSweep {
    /// (position, torque) pairs for the series of mass `row`.
    pub fn points(&self, row: usize) -> Vec<(f64, f64)> {
        self.positions
            .iter()
            .zip(self.torque.row(row))
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    /// Row of the heaviest rover, first one on ties.
    pub fn heaviest(&self) -> usize {
        let masses = ndarray::ArrayView1::from(&self.masses[..]);
        peak_index(masses).unwrap_or(0)
    }

    pub fn peak(&self, row: usize) -> ModelResult<Peak> {
        Peak::find(self.positions.view(), self.torque.row(row))
    }

    /// Torque with the rover still at the rim.
    pub fn rim_torque(&self, row: usize) -> f64 {
        self.torque[[row, 0]]
    }
}
