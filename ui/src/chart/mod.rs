//! Chart geometry. Rendering lives with the dashboard components.

pub mod projector;

pub use projector::{
    project, ChartFrame, ChartSeries, Gridline, PlotPoint, Polyline, SeriesKind, SeriesPoint,
};
