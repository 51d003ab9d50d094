//! Line styles for chart series.
//!
//! Terminal charts only draw solid lines, so dashes are produced by splitting
//! a series into separate runs and skipping the gaps between them.

/// Styles assigned to series in order, repeating after the last one
pub const SERIES_STYLES: [LineStyle; 3] = [LineStyle::Solid, LineStyle::DashDot, LineStyle::Dashed];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Solid,
    DashDot,
    Dashed,
}

impl LineStyle {
    pub fn for_series(index: usize) -> Self {
        SERIES_STYLES[index % SERIES_STYLES.len()]
    }

    /// Alternating drawn / skipped run lengths, as fractions of the series length
    fn pattern(&self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::DashDot => &[0.04, 0.015, 0.008, 0.015],
            LineStyle::Dashed => &[0.03, 0.015],
        }
    }

    /// Split `points` into the runs that should be drawn.
    ///
    /// Every returned run has at least two points so it renders as a line.
    pub fn segments<'a>(&self, points: &'a [(f64, f64)]) -> Vec<&'a [(f64, f64)]> {
        let pattern = self.pattern();
        if pattern.is_empty() || points.len() < 2 {
            return if points.is_empty() { Vec::new() } else { vec![points] };
        }

        let len = points.len();
        let runs: Vec<usize> = pattern
            .iter()
            .enumerate()
            .map(|(k, fraction)| {
                let run = (fraction * len as f64).round() as usize;
                if k % 2 == 0 {
                    run.max(2)
                } else {
                    run.max(1)
                }
            })
            .collect();

        let mut segments = Vec::new();
        let mut start = 0;
        for (k, run) in runs.iter().cycle().enumerate() {
            if start >= len {
                break;
            }
            let end = (start + run).min(len);
            if k % 2 == 0 && end - start >= 2 {
                segments.push(&points[start..end]);
            }
            start = end;
        }
        segments
    }
}
