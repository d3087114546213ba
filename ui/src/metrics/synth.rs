//! Synthetic daily metrics with compounding growth and uniform noise.
//!
//! Each call starts from fresh running bases and walks from the oldest day to
//! today. Growth is applied once per step before sampling, so even the oldest
//! day is one growth step above the seeds.

use rand::Rng;
use serde::Deserialize;
use time::Duration;

use super::record::{Dataset, MetricRecord};
use crate::core::clock::Clock;
use crate::core::error::{DashboardError, Result};

/// Seeds, growth factors and noise amplitudes for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SynthesisProfile {
    pub visits_seed: f64,
    pub signups_seed: f64,
    pub leads_seed: f64,
    pub visits_growth: f64,
    pub signups_growth: f64,
    pub visits_variance: f64,
    pub signups_variance: f64,
    pub leads_variance: f64,
    /// Extra leads added on every `lead_bonus_every`-th day counted back from today.
    pub lead_bonus: f64,
    pub lead_bonus_every: usize,
}

impl Default for SynthesisProfile {
    fn default() -> Self {
        Self {
            visits_seed: 220.0,
            signups_seed: 18.0,
            leads_seed: 2.0,
            visits_growth: 1.018,
            signups_growth: 1.025,
            visits_variance: 40.0,
            signups_variance: 6.0,
            leads_variance: 2.0,
            lead_bonus: 1.0,
            lead_bonus_every: 6,
        }
    }
}

impl SynthesisProfile {
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("visits_seed", self.visits_seed),
            ("signups_seed", self.signups_seed),
            ("leads_seed", self.leads_seed),
            ("visits_growth", self.visits_growth),
            ("signups_growth", self.signups_growth),
            ("visits_variance", self.visits_variance),
            ("signups_variance", self.signups_variance),
            ("leads_variance", self.leads_variance),
            ("lead_bonus", self.lead_bonus),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.lead_bonus_every == 0 {
            return Err(DashboardError::InvalidConfig(
                "lead_bonus_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Generate `days` consecutive records ending on `clock.today()`, oldest first.
pub fn generate<C, R>(
    days: usize,
    profile: &SynthesisProfile,
    clock: &C,
    rng: &mut R,
) -> Result<Dataset>
where
    C: Clock + ?Sized,
    R: Rng,
{
    if days == 0 {
        return Err(DashboardError::EmptyDataset);
    }
    profile.validate()?;

    let today = clock.today();
    let mut visits_base = profile.visits_seed;
    let mut signups_base = profile.signups_seed;
    let leads_base = profile.leads_seed;

    let mut records = Vec::with_capacity(days);
    for days_back in (0..days).rev() {
        let date = today - Duration::days(days_back as i64);

        visits_base *= profile.visits_growth;
        signups_base *= profile.signups_growth;

        let bonus = if days_back % profile.lead_bonus_every == 0 {
            profile.lead_bonus
        } else {
            0.0
        };

        let visits = random_around(visits_base, profile.visits_variance, rng);
        let signups = random_around(signups_base, profile.signups_variance, rng);
        let leads = random_around(leads_base + bonus, profile.leads_variance, rng);

        records.push(MetricRecord::new(date, visits, signups, leads));
    }

    tracing::debug!(days, %today, "synthesized metric dataset");
    Ok(Dataset::from_sorted(records))
}

/// `round(base + U(-variance, variance))`, floored at zero.
fn random_around<R: Rng>(base: f64, variance: f64, rng: &mut R) -> u32 {
    let delta = if variance > 0.0 {
        rng.gen_range(-variance..variance)
    } else {
        0.0
    };
    (base + delta).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::{date, datetime};

    fn clock() -> FixedClock {
        FixedClock::new(datetime!(2026-03-01 12:00 UTC))
    }

    fn silent_profile() -> SynthesisProfile {
        SynthesisProfile {
            visits_variance: 0.0,
            signups_variance: 0.0,
            leads_variance: 0.0,
            ..SynthesisProfile::default()
        }
    }

    #[test]
    fn dates_are_consecutive_and_end_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = generate(60, &SynthesisProfile::default(), &clock(), &mut rng).unwrap();

        assert_eq!(dataset.len(), 60);
        assert_eq!(dataset.records().last().unwrap().date(), date!(2026-03-01));
        assert_eq!(dataset.records()[0].date(), date!(2026-01-01));
        for pair in dataset.records().windows(2) {
            assert_eq!(pair[1].date() - pair[0].date(), Duration::days(1));
        }
    }

    #[test]
    fn zero_days_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = generate(0, &SynthesisProfile::default(), &clock(), &mut rng).unwrap_err();
        assert_eq!(err, DashboardError::EmptyDataset);
    }

    #[test]
    fn zero_bonus_interval_is_rejected_before_generating() {
        let profile = SynthesisProfile {
            lead_bonus_every: 0,
            ..SynthesisProfile::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            generate(10, &profile, &clock(), &mut rng),
            Err(DashboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn counts_stay_non_negative_and_conversion_is_derived() {
        let profile = SynthesisProfile {
            visits_seed: 1.0,
            signups_seed: 1.0,
            ..SynthesisProfile::default()
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let dataset = generate(30, &profile, &clock(), &mut rng).unwrap();
            for record in &dataset {
                let expected = if record.visits() > 0 {
                    record.signups() as f64 / record.visits() as f64 * 100.0
                } else {
                    0.0
                };
                assert_eq!(record.conversion_rate(), expected);
            }
        }
    }

    #[test]
    fn noiseless_profile_follows_the_growth_curve() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = generate(3, &silent_profile(), &clock(), &mut rng).unwrap();
        let visits: Vec<u32> = dataset.iter().map(|r| r.visits()).collect();
        let signups: Vec<u32> = dataset.iter().map(|r| r.signups()).collect();

        // 220 * 1.018^n and 18 * 1.025^n
        assert_eq!(visits, vec![224, 228, 232]);
        assert_eq!(signups, vec![18, 19, 19]);
    }

    #[test]
    fn lead_bonus_is_keyed_to_distance_from_today() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = generate(13, &silent_profile(), &clock(), &mut rng).unwrap();
        let leads: Vec<u32> = dataset.iter().map(|r| r.leads()).collect();

        // days_back 12, 6 and 0 get the bonus.
        assert_eq!(leads, vec![3, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn same_seed_reproduces_the_dataset() {
        let profile = SynthesisProfile::default();
        let a = generate(60, &profile, &clock(), &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(60, &profile, &clock(), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn noise_stays_within_variance() {
        let profile = SynthesisProfile::default();
        let mut rng = StdRng::seed_from_u64(99);
        let dataset = generate(60, &profile, &clock(), &mut rng).unwrap();

        let mut base = profile.visits_seed;
        for record in &dataset {
            base *= profile.visits_growth;
            let diff = (record.visits() as f64 - base).abs();
            assert!(diff <= profile.visits_variance + 0.5, "diff {diff} too large");
        }
    }

    #[test]
    fn profile_rejects_negative_values() {
        let profile = SynthesisProfile {
            visits_variance: -1.0,
            ..SynthesisProfile::default()
        };
        assert!(profile.validate().is_err());
        assert!(SynthesisProfile::default().validate().is_ok());
    }
}
