//! The pheromone field's per-tile scalar.
//!
//! A pheromone is "dropped" by resetting it to the configured maximum and
//! then evaporates linearly, one `decay_per_tick` step per tick, until it
//! reaches zero.  Both operations clamp, so a value is always in
//! `[0, max_strength]` no matter how the calls interleave.

use crate::{WorldError, WorldResult};

/// Field-wide pheromone settings, shared by every tile of one map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneConfig {
    /// Strength a tile is reset to when visited.
    pub max_strength: f32,
    /// Strength removed from every tile per tick.
    pub decay_per_tick: f32,
}

impl Default for PheromoneConfig {
    /// A visited tile stays "fresh" for 20 ticks.
    fn default() -> Self {
        Self { max_strength: 20.0, decay_per_tick: 1.0 }
    }
}

impl PheromoneConfig {
    pub fn validate(&self) -> WorldResult<()> {
        if !self.max_strength.is_finite() || self.max_strength <= 0.0 {
            return Err(WorldError::Pheromone(format!(
                "max_strength must be positive, got {}",
                self.max_strength
            )));
        }
        if !self.decay_per_tick.is_finite() || self.decay_per_tick < 0.0 {
            return Err(WorldError::Pheromone(format!(
                "decay_per_tick must be non-negative, got {}",
                self.decay_per_tick
            )));
        }
        Ok(())
    }

    /// Ticks a freshly dropped pheromone takes to fully evaporate.
    /// `None` when decay is disabled.
    pub fn lifetime_ticks(&self) -> Option<u64> {
        (self.decay_per_tick > 0.0)
            .then(|| (self.max_strength / self.decay_per_tick).ceil() as u64)
    }
}

/// Pheromone strength on one tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pheromone(f32);

impl Pheromone {
    pub const NONE: Pheromone = Pheromone(0.0);

    #[inline]
    pub fn strength(self) -> f32 {
        self.0
    }

    /// Reset to full strength.
    #[inline]
    pub fn drop_fresh(&mut self, cfg: &PheromoneConfig) {
        self.0 = cfg.max_strength;
    }

    /// Evaporate one tick's worth.
    #[inline]
    pub fn decay(&mut self, cfg: &PheromoneConfig) {
        self.0 = (self.0 - cfg.decay_per_tick).clamp(0.0, cfg.max_strength);
    }

    #[inline]
    pub fn is_fresh(self) -> bool {
        self.0 > 0.0
    }
}
