//! `TileNode`: one tile as a single agent believes it to be.
//!
//! A node is a private copy of a tile's observable facts plus its
//! neighbourhood restricted to what the owning agent has already observed.
//! Planning algorithms walk nodes, never the ground-truth map, which is what
//! keeps agents partially observant.

use arena_core::{AgentId, AgentKind, Coord, MarkerId};
use arena_world::{Adjacent, TileKind, TileMap};

/// An agent-local snapshot of one tile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileNode {
    coord: Coord,
    pub kind: TileKind,
    pheromone: f32,
    /// Who stood here at the last update.
    pub occupant: Option<(AgentId, AgentKind)>,
    pub markers: Vec<MarkerId>,
    /// Walkable, already-known cardinal neighbours, plus the portal exit
    /// for portal tiles.
    pub adjacent: Adjacent<Coord>,
}

impl TileNode {
    /// A node for `c` with no neighbours linked yet.  `None` off the map.
    pub fn new(map: &TileMap, c: Coord) -> Option<Self> {
        let tile = map.get(c)?;
        let mut node = Self {
            coord:     c,
            kind:      tile.kind,
            pheromone: 0.0,
            occupant:  None,
            markers:   Vec::new(),
            adjacent:  Adjacent::default(),
        };
        node.sync_facts(map);
        Some(node)
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The wrapped tile's pheromone strength as of the last update.
    #[inline]
    pub fn pheromone_strength(&self) -> f32 {
        self.pheromone
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Re-derive everything from `map`: occupancy, markers, pheromone, and
    /// the neighbourhood as filtered by `knows`.
    ///
    /// Calling this twice with an unchanged world and lookup yields the
    /// same node.
    pub fn update(&mut self, map: &TileMap, knows: impl Fn(Coord) -> bool) {
        self.sync_facts(map);
        self.relink(map, knows);
    }

    /// Recompute only the neighbourhood.  Used for nodes out of sight whose
    /// surroundings just became known; their remembered facts stay as they
    /// were.
    pub fn relink(&mut self, map: &TileMap, knows: impl Fn(Coord) -> bool) {
        let mut adj = map.adjacent(self.coord);
        let portal_target = adj.portal_target.take();
        adj.retain(|&n| knows(n) && map.is_passable(n));
        adj.portal_target = portal_target;
        self.adjacent = adj;
    }

    fn sync_facts(&mut self, map: &TileMap) {
        let Some(tile) = map.get(self.coord) else { return };
        self.kind = tile.kind;
        self.pheromone = tile.pheromone_strength();
        self.occupant = map.agent_at(self.coord);
        self.markers.clear();
        self.markers.extend(map.markers_at(self.coord).map(|m| m.id));
    }
}
