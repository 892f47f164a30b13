// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spike train recording and inter-spike interval (ISI) analysis

use serde::{Deserialize, Serialize};

use crate::error::{TestbenchError, TestbenchResult};

/// Spikes needed before the first/last interval comparison means anything
pub const MIN_SPIKES_FOR_TREND: usize = 3;

/// Cycles at which a spike flag was observed, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpikeTrain {
    spike_cycles: Vec<u64>,
}

/// Interval statistics for one recorded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsiSummary {
    pub spike_count: usize,
    pub first_interval: Option<u64>,
    pub last_interval: Option<u64>,
    pub min_interval: Option<u64>,
    pub max_interval: Option<u64>,
    pub mean_interval: Option<f64>,
    /// Intervals never shorten from one spike to the next
    pub non_decreasing: bool,
    /// Last interval is strictly longer than the first
    pub adapting: bool,
}

impl SpikeTrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the spike flag observed at `cycle`
    ///
    /// Cycles must be recorded in increasing order.
    pub fn record(&mut self, cycle: u64, spike: bool) {
        if !spike {
            return;
        }
        debug_assert!(self.spike_cycles.last().map_or(true, |&last| last < cycle));
        self.spike_cycles.push(cycle);
    }

    pub fn spike_cycles(&self) -> &[u64] {
        &self.spike_cycles
    }

    pub fn spike_count(&self) -> usize {
        self.spike_cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spike_cycles.is_empty()
    }

    pub fn clear(&mut self) {
        self.spike_cycles.clear();
    }

    /// Cycles between consecutive spikes
    pub fn intervals(&self) -> Vec<u64> {
        self.spike_cycles.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn first_interval(&self) -> Option<u64> {
        match self.spike_cycles.as_slice() {
            [a, b, ..] => Some(b - a),
            _ => None,
        }
    }

    pub fn last_interval(&self) -> Option<u64> {
        match self.spike_cycles.as_slice() {
            [.., a, b] => Some(b - a),
            _ => None,
        }
    }

    /// True when no interval is shorter than the one before it (vacuously true for < 3 spikes)
    pub fn is_non_decreasing(&self) -> bool {
        self.intervals().windows(2).all(|w| w[0] <= w[1])
    }

    pub fn summary(&self) -> IsiSummary {
        let intervals = self.intervals();
        let first_interval = self.first_interval();
        let last_interval = self.last_interval();

        let mean_interval = if intervals.is_empty() {
            None
        } else {
            Some(intervals.iter().sum::<u64>() as f64 / intervals.len() as f64)
        };

        IsiSummary {
            spike_count: self.spike_count(),
            first_interval,
            last_interval,
            min_interval: intervals.iter().copied().min(),
            max_interval: intervals.iter().copied().max(),
            mean_interval,
            non_decreasing: self.is_non_decreasing(),
            adapting: matches!((first_interval, last_interval), (Some(f), Some(l)) if l > f),
        }
    }

    /// Spike-frequency adaptation check over the recorded train
    ///
    /// See [`IsiSummary::check`].
    pub fn check_adaptation(&self) -> TestbenchResult<IsiSummary> {
        let summary = self.summary();
        summary.check()?;
        Ok(summary)
    }
}

impl IsiSummary {
    /// Spike-frequency adaptation check: enough spikes, the last interval
    /// strictly longer than the first, and no interval shorter than the one before
    pub fn check(&self) -> TestbenchResult<()> {
        if self.spike_count < MIN_SPIKES_FOR_TREND {
            return Err(TestbenchError::TooFewSpikes {
                required: MIN_SPIKES_FOR_TREND,
                observed: self.spike_count,
            });
        }

        // Both are Some once there are at least two spikes
        let first = self.first_interval.unwrap_or_default();
        let last = self.last_interval.unwrap_or_default();
        if last <= first {
            return Err(TestbenchError::NotAdapting { first, last });
        }
        if !self.non_decreasing {
            return Err(TestbenchError::IntervalsShrank { first, last });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(cycles: &[u64]) -> SpikeTrain {
        let mut train = SpikeTrain::new();
        let end = cycles.last().copied().unwrap_or(0);
        for cycle in 0..=end {
            train.record(cycle, cycles.contains(&cycle));
        }
        train
    }

    #[test]
    fn test_intervals() {
        let train = train(&[1, 4, 7, 11, 16]);
        assert_eq!(train.spike_count(), 5);
        assert_eq!(train.intervals(), vec![3, 3, 4, 5]);
        assert_eq!(train.first_interval(), Some(3));
        assert_eq!(train.last_interval(), Some(5));
        assert!(train.is_non_decreasing());
    }

    #[test]
    fn test_empty_and_single_spike() {
        assert_eq!(SpikeTrain::new().first_interval(), None);
        let single = train(&[9]);
        assert_eq!(single.spike_count(), 1);
        assert_eq!(single.last_interval(), None);
        assert!(single.intervals().is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = train(&[0, 2, 6, 12]).summary();
        assert_eq!(summary.spike_count, 4);
        assert_eq!(summary.min_interval, Some(2));
        assert_eq!(summary.max_interval, Some(6));
        assert_eq!(summary.mean_interval, Some(4.0));
        assert!(summary.adapting);
        assert!(summary.non_decreasing);
    }

    #[test]
    fn test_check_adaptation_failures() {
        assert_eq!(
            train(&[3, 5]).check_adaptation(),
            Err(TestbenchError::TooFewSpikes {
                required: 3,
                observed: 2
            })
        );
        assert_eq!(
            train(&[0, 5, 10, 15]).check_adaptation(),
            Err(TestbenchError::NotAdapting { first: 5, last: 5 })
        );
        assert!(train(&[0, 5, 9, 12]).check_adaptation().is_err());
        assert!(!train(&[0, 5, 9, 12]).is_non_decreasing());
    }

    #[test]
    fn test_check_rejects_shrinking_interval() {
        // 3, 4, 2, 11: longer overall but not monotone
        let summary = train(&[0, 3, 7, 9, 20]).summary();
        assert!(summary.adapting);
        assert!(!summary.non_decreasing);
        assert_eq!(
            summary.check(),
            Err(TestbenchError::IntervalsShrank { first: 3, last: 11 })
        );
        assert_eq!(train(&[1, 4, 7, 11, 16]).summary().check(), Ok(()));
    }

    #[test]
    fn test_summary_serde_round_trip() {
        let summary = train(&[0, 2, 6, 12]).summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: IsiSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);

        let spikes = train(&[1, 4, 7]);
        let json = serde_json::to_string(&spikes).unwrap();
        let back: SpikeTrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.spike_cycles(), &[1, 4, 7]);
    }
}
