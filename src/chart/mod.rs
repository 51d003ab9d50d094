mod annotation;
mod styles;

pub use annotation::{Annotation, PlotFrame};
pub use styles::LineStyle;

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Clear, Dataset, GraphType, LegendPosition, Paragraph,
};

use crate::config::ChartConfig;
use crate::error::ModelResult;
use crate::model::{linspace, TorqueSweep};

/// Samples used to draw a dashed guide line
const GUIDE_SAMPLES: usize = 120;

/// Number of tick labels on each axis
const AXIS_TICKS: usize = 5;

/// One rover mass drawn as a line
pub struct Series {
    pub name: String,
    pub color: Color,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

/// Torque vs. distance chart for all rover masses, built once from a sweep
pub struct TorqueChart {
    pub series: Vec<Series>,
    /// Horizontal reference torque, then the vertical end-of-cable line
    pub guides: Vec<Vec<(f64, f64)>>,
    pub guide_color: Color,
    pub annotation: Annotation,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TorqueChart {
    pub fn new(sweep: &TorqueSweep, config: &ChartConfig) -> ModelResult<Self> {
        let count = sweep.masses.len();
        let series = sweep
            .masses
            .iter()
            .enumerate()
            .map(|(row, mass)| Series {
                name: format!("M_rover = {} kg", mass),
                color: rgb(config.palette.series_color(row, count)),
                style: LineStyle::for_series(row),
                points: sweep.points(row),
            })
            .collect();

        let cable_length = sweep.geometry.cable_length;
        let guides = vec![
            guide_line(
                (0.0, config.reference_torque),
                (config.x_max, config.reference_torque),
            ),
            guide_line((cable_length, 0.0), (cable_length, config.y_max)),
        ];

        let annotation = Annotation::new(sweep.peak(sweep.heaviest())?);

        Ok(Self {
            series,
            guides,
            guide_color: rgb(config.palette.guide_color()),
            annotation,
            x_bounds: [0.0, config.x_max],
            y_bounds: [0.0, config.y_max],
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Only the left and bottom spines, drawn heavy
        let block = Block::default()
            .borders(Borders::LEFT | Borders::BOTTOM)
            .border_type(BorderType::Thick);

        let x_labels = axis_labels(self.x_bounds);
        let y_labels = axis_labels(self.y_bounds);
        let y_label_width = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

        let plot = PlotFrame {
            area: plot_area(block.inner(area), y_label_width),
            x_bounds: self.x_bounds,
            y_bounds: self.y_bounds,
        };
        let label_rect = self.annotation.label_rect(plot.area);
        let connector = self.annotation.connector(&plot, label_rect);

        let mut datasets = Vec::new();

        for guide in &self.guides {
            for segment in LineStyle::Dashed.segments(guide) {
                datasets.push(line_dataset(segment, self.guide_color));
            }
        }

        for series in &self.series {
            for (i, segment) in series.style.segments(&series.points).into_iter().enumerate() {
                let dataset = line_dataset(segment, series.color);
                // Legend entry only once per series
                datasets.push(if i == 0 {
                    dataset.name(series.name.clone())
                } else {
                    dataset
                });
            }
        }

        datasets.push(line_dataset(&connector, Color::White));
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White))
                .data(&connector[2..]),
        );

        let axis_style = Style::default().fg(Color::Gray);
        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Distance Traveled (m)")
                    .style(axis_style)
                    .bounds(self.x_bounds)
                    .labels(x_labels.into_iter().map(Span::from).collect::<Vec<_>>()),
            )
            .y_axis(
                Axis::default()
                    .title("Torque (N·m)")
                    .style(axis_style)
                    .bounds(self.y_bounds)
                    .labels(y_labels.into_iter().map(Span::from).collect::<Vec<_>>()),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);

        // Square label box drawn over the plot
        frame.render_widget(Clear, label_rect);
        frame.render_widget(
            Paragraph::new(self.annotation.label.as_str())
                .alignment(Alignment::Center)
                .block(Block::bordered()),
            label_rect,
        );
    }
}

fn line_dataset(points: &[(f64, f64)], color: Color) -> Dataset<'_> {
    Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points)
}

fn guide_line(from: (f64, f64), to: (f64, f64)) -> Vec<(f64, f64)> {
    linspace(from.0, to.0, GUIDE_SAMPLES)
        .iter()
        .zip(linspace(from.1, to.1, GUIDE_SAMPLES).iter())
        .map(|(&x, &y)| (x, y))
        .collect()
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    linspace(bounds[0], bounds[1], AXIS_TICKS)
        .iter()
        .map(|v| format!("{:.0}", v))
        .collect()
}

/// Approximate graph rectangle inside the chart block: right of the y tick
/// labels and axis line, below the y title, above the x axis line and labels.
fn plot_area(inner: Rect, y_label_width: u16) -> Rect {
    let left = y_label_width + 1;
    Rect::new(
        inner.x + left.min(inner.width),
        inner.y + 1.min(inner.height),
        inner.width.saturating_sub(left),
        inner.height.saturating_sub(3),
    )
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
