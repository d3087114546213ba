//! Boundary errors. Arithmetic inside the pipeline never fails; these only
//! cover malformed input handed to the dashboard from outside.

use thiserror::Error;
use time::Date;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("window of {0} days is not one of the selectable ranges (7, 30, 90)")]
    InvalidWindow(u32),

    #[error("a dataset needs at least one day")]
    EmptyDataset,

    #[error("record {index} dated {next} does not follow {previous}")]
    UnorderedDates {
        index: usize,
        previous: Date,
        next: Date,
    },

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
