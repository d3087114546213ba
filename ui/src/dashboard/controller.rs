//! The dashboard state holder and its two transitions.
//!
//! [`PresentationController`] owns the full dataset and the active window.
//! `select_window` and `refresh` are the only mutators; each recomputes every
//! derived view and pushes it to a [`DisplaySink`] before returning.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chart::{project, ChartFrame, ChartSeries, SeriesKind, SeriesPoint};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::DashboardConfig;
use crate::core::error::Result;
use crate::core::format::{self, DeltaDirection};
use crate::metrics::{aggregate, synth, Dataset, KpiMetric, KpiSet, MetricRecord, WindowSelection};

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub visits: String,
    pub signups: String,
    pub leads: String,
    pub conversion: String,
}

/// Receiver for everything a transition publishes.
pub trait DisplaySink {
    /// Called once per KPI, in [`KpiMetric::ALL`] order.
    fn render_kpi(
        &mut self,
        metric: KpiMetric,
        value_text: &str,
        delta_text: &str,
        direction: DeltaDirection,
    );

    fn render_chart(&mut self, frame: &ChartFrame);

    /// Most recent date first.
    fn render_table(&mut self, rows: &[TableRow]);

    fn render_timestamp(&mut self, text: &str);
}

/// Factor that stretches signups onto the visits range, 1 when there were no signups.
pub fn comparable_scale(max_visits: f64, max_signups: f64) -> f64 {
    if max_signups > 0.0 {
        max_visits / max_signups
    } else {
        1.0
    }
}

/// Visits as-is and signups rescaled by [`comparable_scale`] so both lines
/// share a vertical range.
pub fn chart_series(records: &[MetricRecord]) -> (ChartSeries, ChartSeries) {
    let max_visits = records.iter().map(|r| r.visits()).max().unwrap_or(0);
    let max_signups = records.iter().map(|r| r.signups()).max().unwrap_or(0);
    let scale = comparable_scale(max_visits.into(), max_signups.into());

    let visits = records
        .iter()
        .map(|r| SeriesPoint {
            label: format::format_date(r.date()),
            value: f64::from(r.visits()),
        })
        .collect();
    let signups = records
        .iter()
        .map(|r| SeriesPoint {
            label: format::format_date(r.date()),
            value: (f64::from(r.signups()) * scale).round(),
        })
        .collect();

    (
        ChartSeries::new(SeriesKind::Visits, visits),
        ChartSeries::new(SeriesKind::Signups, signups),
    )
}

pub struct PresentationController<C = SystemClock, R = StdRng> {
    config: DashboardConfig,
    clock: C,
    rng: R,
    dataset: Dataset,
    active_window: WindowSelection,
}

impl PresentationController {
    /// System clock and an entropy-seeded generator.
    pub fn with_system_clock(config: DashboardConfig) -> Result<Self> {
        Self::new(config, SystemClock, StdRng::from_entropy())
    }
}

impl<C: Clock, R: Rng> PresentationController<C, R> {
    /// Validates `config` and synthesizes the initial dataset. Nothing is
    /// published until the first transition or [`publish`](Self::publish).
    pub fn new(config: DashboardConfig, clock: C, mut rng: R) -> Result<Self> {
        config.validate()?;
        let dataset = synth::generate(config.dataset_days, &config.profile, &clock, &mut rng)?;
        Ok(Self {
            active_window: config.initial_window,
            config,
            clock,
            rng,
            dataset,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn active_window(&self) -> WindowSelection {
        self.active_window
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn current_year(&self) -> i32 {
        self.clock.now().year()
    }

    pub fn select_window(&mut self, window: WindowSelection, sink: &mut impl DisplaySink) {
        tracing::debug!(days = window.days(), "window selected");
        self.active_window = window;
        self.publish(sink);
    }

    /// Replace the dataset wholesale, keep the window, republish.
    pub fn refresh(&mut self, sink: &mut impl DisplaySink) -> Result<()> {
        let dataset = synth::generate(
            self.config.dataset_days,
            &self.config.profile,
            &self.clock,
            &mut self.rng,
        )?;
        tracing::info!(days = dataset.len(), "dataset refreshed");
        self.dataset = dataset;
        self.publish(sink);
        Ok(())
    }

    pub fn kpis(&self) -> KpiSet {
        aggregate(&self.dataset, self.active_window.days())
    }

    pub fn chart(&self) -> ChartFrame {
        let (visits, signups) = chart_series(self.window_records());
        let canvas = self.config.canvas;
        project(&visits, &signups, canvas.width, canvas.height)
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        let locale = &self.config.locale;
        self.window_records()
            .iter()
            .rev()
            .map(|r| TableRow {
                date: format::format_date(r.date()),
                visits: format::format_int(r.visits().into(), locale),
                signups: format::format_int(r.signups().into(), locale),
                leads: format::format_int(r.leads().into(), locale),
                conversion: format::format_percent(r.conversion_rate(), locale),
            })
            .collect()
    }

    /// Push KPIs, chart, table and timestamp for the current state.
    pub fn publish(&self, sink: &mut impl DisplaySink) {
        let locale = &self.config.locale;
        let kpis = self.kpis();
        for metric in KpiMetric::ALL {
            let kpi = kpis.get(metric);
            let value_text = match metric {
                KpiMetric::Conversion => format::format_percent(kpi.current, locale),
                _ => format::format_int(kpi.current.round() as u64, locale),
            };
            let (delta_text, direction) = format::format_delta(kpi.change_pct, locale);
            sink.render_kpi(metric, &value_text, &delta_text, direction);
        }

        sink.render_chart(&self.chart());
        sink.render_table(&self.table_rows());
        sink.render_timestamp(&format::format_timestamp(self.clock.now()));
    }

    fn window_records(&self) -> &[MetricRecord] {
        self.dataset.last_n(self.active_window.days())
    }
}
