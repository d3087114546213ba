//! A [`DisplaySink`] that keeps the last published view in memory. The
//! dashboard components render from it; tests inspect it directly.

use crate::chart::ChartFrame;
use crate::core::format::DeltaDirection;
use crate::metrics::KpiMetric;

use super::controller::{DisplaySink, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiTile {
    pub metric: KpiMetric,
    pub value: String,
    pub delta: String,
    pub direction: DeltaDirection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub kpis: Vec<KpiTile>,
    pub chart: Option<ChartFrame>,
    pub rows: Vec<TableRow>,
    pub updated_at: String,
}

impl DashboardSnapshot {
    pub fn tile(&self, metric: KpiMetric) -> Option<&KpiTile> {
        self.kpis.iter().find(|tile| tile.metric == metric)
    }

    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty() && self.chart.is_none() && self.rows.is_empty()
    }
}

impl DisplaySink for DashboardSnapshot {
    fn render_kpi(
        &mut self,
        metric: KpiMetric,
        value_text: &str,
        delta_text: &str,
        direction: DeltaDirection,
    ) {
        let tile = KpiTile {
            metric,
            value: value_text.to_string(),
            delta: delta_text.to_string(),
            direction,
        };
        match self.kpis.iter_mut().find(|existing| existing.metric == metric) {
            Some(existing) => *existing = tile,
            None => self.kpis.push(tile),
        }
    }

    fn render_chart(&mut self, frame: &ChartFrame) {
        self.chart = Some(frame.clone());
    }

    fn render_table(&mut self, rows: &[TableRow]) {
        self.rows = rows.to_vec();
    }

    fn render_timestamp(&mut self, text: &str) {
        self.updated_at = text.to_string();
    }
}
