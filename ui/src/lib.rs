//! Shared UI crate for the Credora dashboard. The metric pipeline and the
//! cross-platform views live here; `web` and `desktop` only launch them.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod metrics;
pub mod views;

pub mod components {
    pub mod app_header;
    pub use app_header::AppHeader;
}
