//! Window sums, derived conversion and period-over-period change.

use super::record::{conversion_percent, Dataset, MetricRecord};

/// Percent change from `prev` to `curr`.
///
/// A non-positive `prev` yields exactly `100.0`: growth from nothing is shown
/// as a flat 100% rather than an infinite or undefined ratio.
pub fn pct_change(curr: f64, prev: f64) -> f64 {
    if prev <= 0.0 {
        100.0
    } else {
        (curr - prev) / prev * 100.0
    }
}

/// Summed counts over a run of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTotals {
    pub visits: u64,
    pub signups: u64,
    pub leads: u64,
}

impl WindowTotals {
    pub fn from_records(records: &[MetricRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, record| Self {
            visits: acc.visits + u64::from(record.visits()),
            signups: acc.signups + u64::from(record.signups()),
            leads: acc.leads + u64::from(record.leads()),
        })
    }

    pub fn conversion(&self) -> f64 {
        conversion_percent(self.signups, self.visits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpiMetric {
    Visits,
    Signups,
    Leads,
    Conversion,
}

impl KpiMetric {
    pub const ALL: [KpiMetric; 4] = [Self::Visits, Self::Signups, Self::Leads, Self::Conversion];

    pub fn label(self) -> &'static str {
        match self {
            Self::Visits => "Visits",
            Self::Signups => "Signups",
            Self::Leads => "Leads",
            Self::Conversion => "Conversion",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Visits => "visits",
            Self::Signups => "signups",
            Self::Leads => "leads",
            Self::Conversion => "conversion",
        }
    }
}

/// Current value, prior-period value and percent change for one KPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub current: f64,
    pub prior: f64,
    pub change_pct: f64,
}

impl Kpi {
    pub fn new(current: f64, prior: f64) -> Self {
        Self {
            current,
            prior,
            change_pct: pct_change(current, prior),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSet {
    pub current: WindowTotals,
    pub prior: WindowTotals,
    pub visits: Kpi,
    pub signups: Kpi,
    pub leads: Kpi,
    pub conversion: Kpi,
}

impl KpiSet {
    pub fn from_totals(current: WindowTotals, prior: WindowTotals) -> Self {
        Self {
            current,
            prior,
            visits: Kpi::new(current.visits as f64, prior.visits as f64),
            signups: Kpi::new(current.signups as f64, prior.signups as f64),
            leads: Kpi::new(current.leads as f64, prior.leads as f64),
            conversion: Kpi::new(current.conversion(), prior.conversion()),
        }
    }

    pub fn get(&self, metric: KpiMetric) -> &Kpi {
        match metric {
            KpiMetric::Visits => &self.visits,
            KpiMetric::Signups => &self.signups,
            KpiMetric::Leads => &self.leads,
            KpiMetric::Conversion => &self.conversion,
        }
    }
}

/// KPIs for the last `window` records against the `window` records before them.
///
/// When history runs short the prior period shrinks to whatever exists
/// (possibly nothing, which makes every change the 100% sentinel).
pub fn aggregate(dataset: &Dataset, window: usize) -> KpiSet {
    let current = WindowTotals::from_records(dataset.last_n(window));
    let prior = WindowTotals::from_records(dataset.before_last_n(window, window));
    KpiSet::from_totals(current, prior)
}
