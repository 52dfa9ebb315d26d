//! The `Vision` trait and the closed set of models agents choose from.

use std::fmt;

use arena_core::{AgentKind, Coord, Pose};
use arena_world::{TileKind, TileMap};

use crate::{ConeVision, RectangleVision};

/// A line-of-sight strategy.
///
/// Implementations are stateless; one instance can serve any number of
/// agents, from any thread.
pub trait Vision: Send + Sync {
    /// Tiles visible from `pose`, in scan order, with no duplicates.
    fn observe(&self, map: &TileMap, pose: Pose, view_distance: u32) -> Vec<Coord>;

    /// [`observe`](Self::observe), then flag every seen tile as explored by
    /// `kind`.
    fn observe_and_mark(
        &self,
        map:           &mut TileMap,
        pose:          Pose,
        view_distance: u32,
        kind:          AgentKind,
    ) -> Vec<Coord> {
        let seen = self.observe(map, pose, view_distance);
        for &c in &seen {
            // `observe` only yields in-bounds tiles.
            let _ = map.mark_explored(c, kind);
        }
        seen
    }
}

/// Sight range for an agent standing on `at`: halved (rounded up) on a
/// shaded tile, never below 1.
pub fn effective_distance(map: &TileMap, at: Coord, base: u32) -> u32 {
    let d = match map.kind_at(at) {
        Some(TileKind::Shaded) => base.div_ceil(2),
        _ => base,
    };
    d.max(1)
}

/// Tiles a sight line can cover on `map`: `view_distance`, capped at the
/// map's longer side.  No line longer than that has anything left to see.
pub(crate) fn reach(map: &TileMap, view_distance: u32) -> i32 {
    let side = map.width().max(map.height()).max(0);
    i32::try_from(view_distance).map_or(side, |d| d.min(side))
}

/// Which vision model an agent uses.  Chosen once at agent construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisionModel {
    Cone,
    #[default]
    Rectangle,
}

impl VisionModel {
    pub fn as_str(self) -> &'static str {
        match self {
            VisionModel::Cone      => "cone",
            VisionModel::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for VisionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Vision for VisionModel {
    #[inline]
    fn observe(&self, map: &TileMap, pose: Pose, view_distance: u32) -> Vec<Coord> {
        match self {
            VisionModel::Cone      => ConeVision.observe(map, pose, view_distance),
            VisionModel::Rectangle => RectangleVision.observe(map, pose, view_distance),
        }
    }
}
