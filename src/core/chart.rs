//! SVG geometry for the sample charts
//!
//! Coordinates live in a fixed viewbox; the rendered `<svg>` scales it to
//! its container with `preserveAspectRatio="none"`.

use super::fixtures::ChartPoint;

/// Viewbox size and inner padding of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// Axis-aligned bar rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Line and filled-area paths for one series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaPaths {
    pub line: String,
    pub area: String,
}

/// Fraction of each bar slot left empty
const BAR_GAP: f64 = 0.2;

impl ChartFrame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn left(&self) -> f64 {
        self.padding
    }

    fn right(&self) -> f64 {
        self.width - self.padding
    }

    fn top(&self) -> f64 {
        self.padding
    }

    /// y coordinate of the zero line
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn plot_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.baseline() - self.top()).max(0.0)
    }

    /// x of the `index`-th of `count` evenly spaced points
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left();
        }
        self.left() + index as f64 * self.plot_width() / (count - 1) as f64
    }

    /// y of `value` when `max` maps to the top of the plot area
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value / max) * self.plot_height()
    }

    pub fn area_paths(&self, points: &[ChartPoint]) -> AreaPaths {
        if points.is_empty() {
            return AreaPaths::default();
        }
        let max = series_max(points);
        let count = points.len();
        let coords: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (self.x_at(i, count), self.y_at(p.value, max)))
            .collect();

        let line = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{} {:.1} {:.1}", cmd, x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let (first_x, _) = coords[0];
        let (last_x, _) = coords[coords.len() - 1];
        let area = format!(
            "{} L {:.1} {:.1} L {:.1} {:.1} Z",
            line,
            last_x,
            self.baseline(),
            first_x,
            self.baseline()
        );

        AreaPaths { line, area }
    }

    pub fn bars(&self, points: &[ChartPoint]) -> Vec<Bar> {
        if points.is_empty() {
            return Vec::new();
        }
        let max = series_max(points);
        let slot = self.plot_width() / points.len() as f64;
        let width = slot * (1.0 - BAR_GAP);

        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let y = self.y_at(p.value, max);
                Bar {
                    x: self.left() + i as f64 * slot + slot * BAR_GAP / 2.0,
                    y,
                    width,
                    height: self.baseline() - y,
                }
            })
            .collect()
    }

    /// Center x of the `index`-th bar slot, for axis labels under bars
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.left();
        }
        let slot = self.plot_width() / count as f64;
        self.left() + (index as f64 + 0.5) * slot
    }
}

/// Largest value in the series, 0 for an empty one
pub fn series_max(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// `segments + 1` evenly spaced tick values from 0 to `max`
pub fn y_ticks(max: f64, segments: usize) -> Vec<f64> {
    if segments == 0 || max <= 0.0 {
        return vec![0.0];
    }
    (0..=segments)
        .map(|i| max * i as f64 / segments as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::CHART_DATA;

    const FRAME: ChartFrame = ChartFrame::new(600.0, 200.0, 20.0);

    fn point(value: f64) -> ChartPoint {
        ChartPoint {
            time: "t",
            value,
            confidence: 0,
        }
    }

    #[test]
    fn test_x_spacing() {
        assert_eq!(FRAME.x_at(0, 7), 20.0);
        assert_eq!(FRAME.x_at(6, 7), 580.0);
        assert_eq!(FRAME.x_at(3, 7), 300.0);
        assert_eq!(FRAME.x_at(0, 1), 20.0);
    }

    #[test]
    fn test_y_scaling() {
        assert_eq!(FRAME.y_at(0.0, 4000.0), 180.0);
        assert_eq!(FRAME.y_at(4000.0, 4000.0), 20.0);
        assert_eq!(FRAME.y_at(2000.0, 4000.0), 100.0);
        assert_eq!(FRAME.y_at(10.0, 0.0), FRAME.baseline());
    }

    #[test]
    fn test_area_paths() {
        let points = [point(0.0), point(50.0), point(100.0)];
        let paths = FRAME.area_paths(&points);
        assert_eq!(paths.line, "M 20.0 180.0 L 300.0 100.0 L 580.0 20.0");
        assert_eq!(
            paths.area,
            "M 20.0 180.0 L 300.0 100.0 L 580.0 20.0 L 580.0 180.0 L 20.0 180.0 Z"
        );
    }

    #[test]
    fn test_fixture_max_hits_top() {
        let paths = FRAME.area_paths(CHART_DATA);
        // 10:00 holds the series maximum
        assert!(paths.line.starts_with("M 20.0 20.0 "));
        assert_eq!(series_max(CHART_DATA), 4000.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(FRAME.area_paths(&[]), AreaPaths::default());
        assert!(FRAME.bars(&[]).is_empty());
        assert_eq!(series_max(&[]), 0.0);
    }

    #[test]
    fn test_bars() {
        let bars = FRAME.bars(&[point(25.0), point(100.0)]);
        assert_eq!(bars.len(), 2);
        // 560px plot width, 280px slots, 224px bars, 28px side gap
        assert_eq!(bars[0].x, 48.0);
        assert_eq!(bars[0].width, 224.0);
        assert_eq!(bars[1].x, 328.0);
        assert_eq!(bars[1].y, 20.0);
        assert_eq!(bars[1].height, 160.0);
        assert_eq!(bars[0].height, 40.0);
        assert_eq!(FRAME.slot_center(1, 2), 440.0);
    }

    #[test]
    fn test_one_bar_per_fixture_point() {
        assert_eq!(FRAME.bars(CHART_DATA).len(), CHART_DATA.len());
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(4000.0, 4), vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
        assert_eq!(y_ticks(0.0, 4), vec![0.0]);
        assert_eq!(y_ticks(100.0, 0), vec![0.0]);
    }

    #[test]
    fn test_view_box() {
        assert_eq!(FRAME.view_box(), "0 0 600 200");
    }
}
