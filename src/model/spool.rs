//! Winch spool radius as cable is paid out.
//!
//! The wound cross-section shrinks linearly with the fraction of cable paid
//! out, from the full annulus plus core down to the bare core.

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::{ModelError, ModelResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpoolModel {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub cable_length: f64,
}

impl SpoolModel {
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] for a zero cable length, where the paid
    /// out fraction is undefined.
    pub fn new(outer_radius: f64, inner_radius: f64, cable_length: f64) -> ModelResult<Self> {
        if cable_length == 0.0 {
            return Err(ModelError::domain(
                "total cable length is zero, spool radius is undefined",
            ));
        }
        Ok(Self {
            outer_radius,
            inner_radius,
            cable_length,
        })
    }

    /// Cross-section of the wound cable alone on a full spool.
    pub fn cable_area(&self) -> f64 {
        PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    /// Wound cross-section, core included, after `position` metres are paid out.
    pub fn wound_area(&self, position: f64) -> f64 {
        (1.0 - position / self.cable_length) * self.cable_area() + PI * self.inner_radius.powi(2)
    }

    /// Effective radius after `position` metres are paid out, `sqrt(A / π)`.
    pub fn radius_at(&self, position: f64) -> f64 {
        let paid_out = position / self.cable_length;
        let remaining = 1.0 - paid_out;
        // Same as sqrt(wound_area / π), regrouped so both ends hit the radii exactly
        (remaining * self.outer_radius.powi(2) + paid_out * self.inner_radius.powi(2)).sqrt()
    }

    pub fn radii(&self, positions: &Array1<f64>) -> Array1<f64> {
        positions.mapv(|position| self.radius_at(position))
    }
}
