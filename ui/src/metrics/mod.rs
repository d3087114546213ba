//! Daily business metrics: the record model, the synthetic generator and
//! window aggregation.

pub mod aggregate;
pub mod record;
pub mod synth;
pub mod window;

pub use aggregate::{aggregate, pct_change, Kpi, KpiMetric, KpiSet, WindowTotals};
pub use record::{conversion_percent, Dataset, MetricRecord};
pub use synth::{generate, SynthesisProfile};
pub use window::WindowSelection;
