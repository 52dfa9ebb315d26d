//! Markers agents leave on tiles.

use arena_core::{AgentId, AgentKind, Coord, MarkerId, Tick};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    Visited,
    Danger,
    Target,
    Custom(u8),
}

/// A marker in the map's registry.  Tiles hold the `MarkerId`s placed on
/// them; this struct holds the rest.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id:        MarkerId,
    pub coord:     Coord,
    pub kind:      MarkerKind,
    /// Side that placed it.
    pub owner:     AgentKind,
    pub placed_by: AgentId,
    pub placed_at: Tick,
}
