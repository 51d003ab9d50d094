//! Peak label placement.
//!
//! The label box is anchored in axes-fraction coordinates so it stays in the
//! same corner of the plot whatever the data. A two-leg connector runs from
//! the box to the peak: horizontal out of the box, then 60° into the point.

use ratatui::layout::Rect;

use crate::model::Peak;

/// Top-right corner of the label box, as a fraction of the plot (x right, y up)
pub const LABEL_ANCHOR: (f64, f64) = (0.96, 0.8);

/// Angle of the connector leg that meets the peak, from horizontal
pub const CONNECTOR_ANGLE_DEG: f64 = 60.0;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Maps between data coordinates and terminal cells for one plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub area: Rect,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl PlotFrame {
    /// Data point to fractional (column, row) cell coordinates.
    pub fn to_cells(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let fx = (x - self.x_bounds[0]) / (self.x_bounds[1] - self.x_bounds[0]);
        let fy = (y - self.y_bounds[0]) / (self.y_bounds[1] - self.y_bounds[0]);
        (
            self.area.x as f64 + fx * self.area.width as f64,
            self.area.y as f64 + (1.0 - fy) * self.area.height as f64,
        )
    }

    pub fn to_data(&self, (col, row): (f64, f64)) -> (f64, f64) {
        let fx = (col - self.area.x as f64) / self.area.width as f64;
        let fy = 1.0 - (row - self.area.y as f64) / self.area.height as f64;
        (
            self.x_bounds[0] + fx * (self.x_bounds[1] - self.x_bounds[0]),
            self.y_bounds[0] + fy * (self.y_bounds[1] - self.y_bounds[0]),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub peak: Peak,
    pub label: String,
}

impl Annotation {
    pub fn new(peak: Peak) -> Self {
        Self {
            label: peak.label(),
            peak,
        }
    }

    /// Bordered box for the label, right/top aligned on [`LABEL_ANCHOR`] and
    /// kept inside `plot`.
    pub fn label_rect(&self, plot: Rect) -> Rect {
        // One cell of padding each side plus the border
        let width = (self.label.chars().count() as u16 + 4).min(plot.width);
        let height = 3.min(plot.height);

        let right = plot.x + (plot.width as f64 * LABEL_ANCHOR.0).round() as u16;
        let top = plot.y + (plot.height as f64 * (1.0 - LABEL_ANCHOR.1)).round() as u16;

        let x = right.saturating_sub(width).max(plot.x);
        let y = top.min((plot.y + plot.height).saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Connector polyline in data coordinates: box edge, elbow, peak.
    pub fn connector(&self, frame: &PlotFrame, label: Rect) -> [(f64, f64); 3] {
        let target = (self.peak.position, self.peak.torque);
        let (peak_col, peak_row) = frame.to_cells(target);

        // Leave from the middle of the box's left edge
        let start = (label.x as f64, label.y as f64 + label.height as f64 / 2.0);

        // Horizontal run (in columns) of the angled leg down to the peak
        let rows = (peak_row - start.1).abs();
        let run = rows * CELL_ASPECT / CONNECTOR_ANGLE_DEG.to_radians().tan();
        let elbow_col = (peak_col + run).min(start.0);

        [
            frame.to_data(start),
            frame.to_data((elbow_col, start.1)),
            target,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> PlotFrame {
        PlotFrame {
            area: Rect::new(10, 2, 100, 30),
            x_bounds: [0.0, 1200.0],
            y_bounds: [0.0, 300.0],
        }
    }

    fn annotation() -> Annotation {
        Annotation::new(Peak {
            index: 583,
            position: 599.0,
            torque: 202.9,
        })
    }

    #[test]
    fn cell_mapping_round_trips() {
        let frame = frame();
        let (col, row) = frame.to_cells((600.0, 150.0));
        assert_relative_eq!(col, 60.0);
        assert_relative_eq!(row, 17.0);

        let (x, y) = frame.to_data((col, row));
        assert_relative_eq!(x, 600.0, max_relative = 1e-12);
        assert_relative_eq!(y, 150.0, max_relative = 1e-12);
    }

    #[test]
    fn label_box_sits_at_anchor() {
        let annotation = annotation();
        let rect = annotation.label_rect(frame().area);

        assert_eq!(annotation.label, "d=599.0 m, T=202.9 N·m");
        assert_eq!(rect.width, annotation.label.chars().count() as u16 + 4);
        assert_eq!(rect.height, 3);
        // 96% across, 20% down
        assert_eq!(rect.x + rect.width, 10 + 96);
        assert_eq!(rect.y, 2 + 6);
    }

    #[test]
    fn label_box_stays_inside_tiny_plot() {
        let plot = Rect::new(0, 0, 12, 2);
        let rect = annotation().label_rect(plot);
        assert!(rect.x >= plot.x);
        assert!(rect.right() <= plot.right());
        assert!(rect.bottom() <= plot.bottom());
    }

    #[test]
    fn connector_ends_on_peak_with_horizontal_first_leg() {
        let frame = frame();
        let annotation = annotation();
        let label = annotation.label_rect(frame.area);
        let [start, elbow, end] = annotation.connector(&frame, label);

        assert_eq!(end, (599.0, 202.9));
        assert_relative_eq!(start.1, elbow.1, max_relative = 1e-12);
        assert!(elbow.0 <= start.0);
        assert!(elbow.0 >= end.0);
    }

    #[test]
    fn connector_second_leg_is_sixty_degrees_on_screen() {
        let frame = frame();
        let annotation = annotation();
        let label = annotation.label_rect(frame.area);
        let [_, elbow, end] = annotation.connector(&frame, label);

        let (elbow_col, elbow_row) = frame.to_cells(elbow);
        let (end_col, end_row) = frame.to_cells(end);
        let rise = (end_row - elbow_row).abs() * CELL_ASPECT;
        let run = (elbow_col - end_col).abs();
        assert_relative_eq!((rise / run).atan().to_degrees(), 60.0, max_relative = 1e-9);
    }
}
