//! The selectable "most recent N days" ranges.

use serde::Deserialize;

use crate::core::error::DashboardError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub enum WindowSelection {
    #[default]
    Week,
    Month,
    Quarter,
}

impl WindowSelection {
    pub const ALL: [WindowSelection; 3] = [Self::Week, Self::Month, Self::Quarter];

    pub fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    /// Short label for the segmented range control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "7D",
            Self::Month => "30D",
            Self::Quarter => "90D",
        }
    }
}

impl TryFrom<u32> for WindowSelection {
    type Error = DashboardError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::Week),
            30 => Ok(Self::Month),
            90 => Ok(Self::Quarter),
            other => Err(DashboardError::InvalidWindow(other)),
        }
    }
}

impl From<WindowSelection> for u32 {
    fn from(window: WindowSelection) -> Self {
        window.days() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerated_sizes_round_trip() {
        for window in WindowSelection::ALL {
            let days = u32::from(window);
            assert_eq!(WindowSelection::try_from(days).unwrap(), window);
        }
    }

    #[test]
    fn other_sizes_are_precondition_violations() {
        assert_eq!(
            WindowSelection::try_from(0),
            Err(DashboardError::InvalidWindow(0))
        );
        assert_eq!(
            WindowSelection::try_from(14),
            Err(DashboardError::InvalidWindow(14))
        );
    }

    #[test]
    fn default_is_one_week() {
        assert_eq!(WindowSelection::default().days(), 7);
    }
}
