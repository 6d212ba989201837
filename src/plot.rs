//! Plain-text line charts for comparing trajectories in the terminal.

use std::fmt::Write;

use crate::{Error, Float, Result};

const LABEL_WIDTH: usize = 10;

/// A named set of points drawn with a single marker character.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(Float, Float)>,
    pub marker: char,
}

impl Series {
    pub fn new(label: impl Into<String>, xs: &[Float], ys: &[Float], marker: char) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::DimensionMismatch {
                expected: xs.len(),
                got: ys.len(),
            });
        }
        Ok(Self {
            label: label.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            marker,
        })
    }

    /// Samples `f` at `n` evenly spaced points of `[a, b]`.
    pub fn from_fn<F>(label: impl Into<String>, f: F, a: Float, b: Float, n: usize, marker: char) -> Self
    where
        F: Fn(Float) -> Float,
    {
        let dx = if n > 1 { (b - a) / (n - 1) as Float } else { 0.0 };
        Self {
            label: label.into(),
            points: (0..n).map(|i| a + i as Float * dx).map(|x| (x, f(x))).collect(),
            marker,
        }
    }
}

/// Scatter chart rendered onto a character grid. Series added later are drawn
/// on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Bounds `(xmin, xmax, ymin, ymax)` over every finite point.
    fn bounds(&self) -> Option<(Float, Float, Float, Float)> {
        let mut points = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = points.next()?;
        Some(points.fold((x0, x0, y0, y0), |(xmin, xmax, ymin, ymax), &(x, y)| {
            (xmin.min(x), xmax.max(x), ymin.min(y), ymax.max(y))
        }))
    }

    /// Render the plot area as `height` rows of `width` columns plus axes,
    /// tick labels and a legend.
    pub fn render(&self, width: usize, height: usize) -> String {
        let width = width.max(2);
        let height = height.max(2);
        let mut out = String::new();
        let _ = writeln!(out, "{:^w$}", self.title, w = width + LABEL_WIDTH + 2);

        let Some((xmin, xmax, ymin, ymax)) = self.bounds() else {
            let _ = writeln!(out, "(no data)");
            return out;
        };
        let xspan = if xmax > xmin { xmax - xmin } else { 1.0 };
        let yspan = if ymax > ymin { ymax - ymin } else { 1.0 };

        let mut grid = vec![vec![' '; width]; height];
        for s in &self.series {
            for &(x, y) in s.points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
                let col = ((x - xmin) / xspan * (width - 1) as Float).round() as usize;
                let row = ((ymax - y) / yspan * (height - 1) as Float).round() as usize;
                grid[row.min(height - 1)][col.min(width - 1)] = s.marker;
            }
        }

        for (i, row) in grid.iter().enumerate() {
            let label = if i == 0 {
                format!("{ymax:.3}")
            } else if i == height - 1 {
                format!("{ymin:.3}")
            } else if i == (height - 1) / 2 {
                format!("{:.3}", ymax - yspan * i as Float / (height - 1) as Float)
            } else {
                String::new()
            };
            let line: String = row.iter().collect();
            let _ = writeln!(out, "{label:>LABEL_WIDTH$} |{}", line.trim_end());
        }
        let _ = writeln!(out, "{:>LABEL_WIDTH$} +{}", "", "-".repeat(width));

        let left = format!("{xmin:.3}");
        let right = format!("{xmax:.3}");
        let gap = width.saturating_sub(left.len() + right.len());
        let _ = writeln!(out, "{:>LABEL_WIDTH$}  {left}{}{right}", "", " ".repeat(gap));
        if !self.x_label.is_empty() {
            let _ = writeln!(out, "{:>LABEL_WIDTH$}  {:^width$}", "", self.x_label);
        }
        for s in &self.series {
            let _ = writeln!(out, "{:>LABEL_WIDTH$}  {} {}", "", s.marker, s.label);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_rejected() {
        let err = Series::new("bad", &[0.0, 1.0], &[0.0], 'o').unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn corners_land_on_grid_corners() {
        let chart = Chart::new("diag").with_series(Series::new("line", &[0.0, 1.0], &[0.0, 1.0], 'o').unwrap());
        let text = chart.render(5, 3);
        let rows: Vec<&str> = text.lines().collect();
        // title, then top row holds (1, 1) at the far right
        assert!(rows[1].ends_with("|    o"));
        assert!(rows[3].ends_with("|o"));
        assert!(text.contains("o line"));
    }

    #[test]
    fn later_series_drawn_on_top() {
        let chart = Chart::new("overlap")
            .with_series(Series::new("a", &[0.0, 1.0], &[0.0, 1.0], 'a').unwrap())
            .with_series(Series::new("b", &[0.0], &[0.0], 'b').unwrap());
        let text = chart.render(4, 2);
        assert!(text.lines().nth(2).unwrap().ends_with("|b"));
    }

    #[test]
    fn empty_chart_renders_placeholder() {
        assert!(Chart::new("empty").render(10, 4).contains("(no data)"));
    }

    #[test]
    fn sampled_series_spans_interval() {
        let s = Series::from_fn("sq", |x| x * x, 0.0, 2.0, 5, '*');
        assert_eq!(s.points.len(), 5);
        assert_eq!(s.points[4], (2.0, 4.0));
    }
}
