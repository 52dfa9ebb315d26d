//! Run-level configuration.

use crate::{CoreError, CoreResult, SimClock, Tick};

/// Top-level simulation configuration.
///
/// Built in code by the application (or deserialised with the `serde`
/// feature) and handed to `SimBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Ticks to simulate before the run ends with a time-limit outcome.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// How many tiles ahead an agent can see.  Must be at least 1.
    pub view_distance: u32,

    /// Chebyshev radius of the ambient sound check.  0 disables it.
    pub sound_radius: u32,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Worker thread count for the `parallel` intent phase.  `None` uses
    /// Rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           1_000,
            seed:                  42,
            view_distance:         6,
            sound_radius:          2,
            output_interval_ticks: 1,
            num_threads:           None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }

    /// Reject settings no run can use.
    pub fn validate(&self) -> CoreResult<()> {
        if self.view_distance == 0 {
            return Err(CoreError::Config("view_distance must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
