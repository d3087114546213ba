//! The dashboard: controller, in-memory sink and the components that render it.

pub mod controller;
pub mod snapshot;

mod kpis;
pub use kpis::KpiGrid;

mod table;
pub use table::MetricsTable;

mod trend_chart;
pub use trend_chart::TrendChart;

mod view;
pub use view::{DashboardEvent, DashboardView};

pub use controller::{chart_series, comparable_scale, DisplaySink, PresentationController, TableRow};
pub use snapshot::{DashboardSnapshot, KpiTile};
