use anyhow::Result;

use crate::error::ModelResult;
use crate::model::TorqueSweep;

/// Print the sweep results as plain text instead of drawing the chart.
pub fn run(sweep: &TorqueSweep) -> Result<()> {
    print!("{}", format_summary(sweep)?);
    Ok(())
}

pub fn format_summary(sweep: &TorqueSweep) -> ModelResult<String> {
    let geometry = &sweep.geometry;
    let mut out = format!(
        "crater {} x {} m: arc radius {:.1} m, rim angle {:.1}°, cable {:.1} m\n",
        geometry.depth,
        geometry.diameter,
        geometry.arc_radius,
        geometry.initial_angle.to_degrees(),
        geometry.cable_length
    );
    out.push_str(&format!(
        "spool {} -> {} m, wound area {:.4} m² when full\n",
        sweep.spool.outer_radius,
        sweep.spool.inner_radius,
        sweep.spool.wound_area(0.0)
    ));

    for (row, mass) in sweep.masses.iter().enumerate() {
        let peak = sweep.peak(row)?;
        out.push_str(&format!(
            "M_rover = {} kg: peak {} on a {:.1}° wall, rim {:.1} N·m\n",
            mass,
            peak.label(),
            sweep.angles[peak.index].to_degrees(),
            sweep.rim_torque(row)
        ));
    }

    Ok(out)
}
