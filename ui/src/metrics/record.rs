//! One day of metrics and the ordered dataset built from them.

use time::Date;

use crate::core::error::{DashboardError, Result};

/// `signups / visits * 100`, or 0 when there were no visits.
pub fn conversion_percent(signups: u64, visits: u64) -> f64 {
    if visits > 0 {
        signups as f64 / visits as f64 * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    date: Date,
    visits: u32,
    signups: u32,
    leads: u32,
    conversion_rate: f64,
}

impl MetricRecord {
    pub fn new(date: Date, visits: u32, signups: u32, leads: u32) -> Self {
        Self {
            date,
            visits,
            signups,
            leads,
            conversion_rate: conversion_percent(signups.into(), visits.into()),
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn signups(&self) -> u32 {
        self.signups
    }

    pub fn leads(&self) -> u32 {
        self.leads
    }

    /// Derived from visits and signups at construction.
    pub fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }
}

/// Records in strictly ascending date order. Never edited after construction;
/// a refresh builds a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MetricRecord>,
}

impl Dataset {
    /// Validates that dates strictly increase.
    pub fn from_records(records: Vec<MetricRecord>) -> Result<Self> {
        if let Some(index) = records
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(DashboardError::UnorderedDates {
                index: index + 1,
                previous: records[index].date,
                next: records[index + 1].date,
            });
        }
        Ok(Self { records })
    }

    /// For callers that produce dates in order by construction.
    pub(crate) fn from_sorted(records: Vec<MetricRecord>) -> Self {
        debug_assert!(records.windows(2).all(|pair| pair[0].date < pair[1].date));
        Self { records }
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    /// The most recent `n` records, or all of them when fewer exist.
    pub fn last_n(&self, n: usize) -> &[MetricRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Up to `n` records immediately preceding the most recent `skip`.
    pub fn before_last_n(&self, skip: usize, n: usize) -> &[MetricRecord] {
        let end = self.records.len().saturating_sub(skip);
        let start = end.saturating_sub(n);
        &self.records[start..end]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
