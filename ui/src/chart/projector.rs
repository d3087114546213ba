//! Maps two value series onto a fixed-size drawing surface.
//!
//! Screen coordinates: origin top-left, y grows downward. The value axis
//! always starts at zero and tops out at the largest value of either series.

/// Horizontal inset on both sides.
pub const PAD_X: f64 = 48.0;
/// Vertical inset on both sides.
pub const PAD_Y: f64 = 28.0;
/// Interior gridline divisions; `GRID_DIVISIONS + 1` lines are drawn.
pub const GRID_DIVISIONS: usize = 4;
/// Gap between the plot's left edge and right-aligned axis labels.
pub const LABEL_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Visits,
    Signups,
}

impl SeriesKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Visits => "Visits",
            Self::Signups => "Signups (scaled)",
        }
    }

    /// Modifier shared by the line, its markers and the legend swatch.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Visits => "visits",
            Self::Signups => "signups",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new(kind: SeriesKind, points: Vec<SeriesPoint>) -> Self {
        Self { kind, points }
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// A horizontal rule with its value label.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub label_x: f64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub kind: SeriesKind,
    pub points: Vec<PlotPoint>,
    pub labels: Vec<String>,
}

impl Polyline {
    /// Coordinates in SVG `points` attribute form: `x1,y1 x2,y2 ...`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything needed to draw one chart: gridlines first, then the lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub max_y: f64,
    pub x_step: f64,
    pub y_scale: f64,
    pub gridlines: Vec<Gridline>,
    pub lines: Vec<Polyline>,
}

/// Project both series onto a `width` × `height` surface.
///
/// The horizontal step is taken from `series_a`; both series are expected to
/// be the same length.
pub fn project(series_a: &ChartSeries, series_b: &ChartSeries, width: f64, height: f64) -> ChartFrame {
    let max_y = series_a.max_value().max(series_b.max_value());
    let min_y = 0.0;

    let plot_width = width - PAD_X * 2.0;
    let plot_height = height - PAD_Y * 2.0;

    let steps = series_a.points.len().saturating_sub(1).max(1);
    let x_step = plot_width / steps as f64;
    let y_scale = plot_height / (max_y - min_y).max(1.0);

    let gridlines = (0..=GRID_DIVISIONS)
        .map(|i| {
            let fraction = i as f64 / GRID_DIVISIONS as f64;
            Gridline {
                y: PAD_Y + plot_height * fraction,
                x_start: PAD_X,
                x_end: width - PAD_X,
                label_x: PAD_X - LABEL_GAP,
                value: (max_y - max_y * fraction).round() as i64,
            }
        })
        .collect();

    let to_polyline = |series: &ChartSeries| Polyline {
        kind: series.kind,
        points: series
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| PlotPoint {
                x: PAD_X + i as f64 * x_step,
                y: height - PAD_Y - (point.value - min_y) * y_scale,
            })
            .collect(),
        labels: series.points.iter().map(|p| p.label.clone()).collect(),
    };

    ChartFrame {
        width,
        height,
        max_y,
        x_step,
        y_scale,
        gridlines,
        lines: vec![to_polyline(series_a), to_polyline(series_b)],
    }
}
