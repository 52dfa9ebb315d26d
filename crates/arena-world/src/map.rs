//! The arena: tile grid, pheromone field, portal table, and the agent and
//! marker registries.
//!
//! # Data layout
//!
//! Tiles are stored row-major in one `Vec`:
//!
//! ```text
//! tiles[y * width + x]
//! ```
//!
//! Every lookup goes through [`TileMap::index`], which bounds-checks both
//! axes, so an off-map coordinate can never alias a tile on the next row.
//!
//! # Agent registry
//!
//! The map is the single source of truth for where agents stand.  Positions
//! are kept in two views that are always updated together: `agent_slots`
//! (indexed by `AgentId`) and `occupancy` (keyed by `Coord`).  One tile holds
//! at most one agent.

use tracing::trace;

use arena_core::{AgentId, AgentKind, Coord, Heading, MarkerId, Tick};

use crate::{
    Adjacent, Marker, MarkerKind, PheromoneConfig, Tile, TileKind, WorldError, WorldResult,
};

#[cfg(feature = "fx-hash")]
pub(crate) type CoordMap<V> = rustc_hash::FxHashMap<Coord, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CoordMap<V> = std::collections::HashMap<Coord, V>;

// ── PortalLink ────────────────────────────────────────────────────────────────

/// Where a portal tile sends an agent and which way it faces on arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalLink {
    pub target: Coord,
    pub facing: Heading,
}

// ── AgentSlot ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct AgentSlot {
    kind:  AgentKind,
    coord: Coord,
}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Ground truth for one arena.  Construct with
/// [`TileMapBuilder`][crate::TileMapBuilder].
#[derive(Clone, Debug)]
pub struct TileMap {
    width:         i32,
    height:        i32,
    tiles:         Vec<Tile>,
    pheromone_cfg: PheromoneConfig,
    portals:       CoordMap<PortalLink>,
    agent_slots:   Vec<Option<AgentSlot>>,
    occupancy:     CoordMap<AgentId>,
    markers:       Vec<Marker>,
}

impl TileMap {
    pub(crate) fn from_parts(
        width:         i32,
        height:        i32,
        tiles:         Vec<Tile>,
        pheromone_cfg: PheromoneConfig,
        portals:       CoordMap<PortalLink>,
    ) -> Self {
        Self {
            width,
            height,
            tiles,
            pheromone_cfg,
            portals,
            agent_slots: Vec::new(),
            occupancy:   CoordMap::default(),
            markers:     Vec::new(),
        }
    }

    // ── Dimensions and bounds ─────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    /// Row-major index of `c`, or `None` when off the map.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    fn out_of_bounds(&self, coord: Coord) -> WorldError {
        WorldError::OutOfBounds { coord, width: self.width, height: self.height }
    }

    // ── Tile lookup ───────────────────────────────────────────────────────

    /// The tile at `c`, or `OutOfBounds`.
    pub fn tile(&self, c: Coord) -> WorldResult<&Tile> {
        self.get(c).ok_or_else(|| self.out_of_bounds(c))
    }

    /// [`tile`](Self::tile) by components.
    pub fn tile_at(&self, x: i32, y: i32) -> WorldResult<&Tile> {
        self.tile(Coord::new(x, y))
    }

    /// Non-erroring lookup.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&Tile> {
        self.index(c).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, c: Coord) -> WorldResult<&mut Tile> {
        match self.index(c) {
            Some(i) => Ok(&mut self.tiles[i]),
            None => Err(self.out_of_bounds(c)),
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    #[inline]
    pub fn kind_at(&self, c: Coord) -> Option<TileKind> {
        self.get(c).map(|t| t.kind)
    }

    /// `true` only for in-bounds wall tiles.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.kind_at(c) == Some(TileKind::Wall)
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.kind_at(c).is_some_and(TileKind::is_passable)
    }

    /// Coordinates of every tile of `kind`, row-major.
    pub fn coords_of(&self, kind: TileKind) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.iter().filter(move |t| t.kind == kind).map(Tile::coord)
    }

    #[inline]
    pub fn is_target(&self, c: Coord) -> bool {
        self.kind_at(c) == Some(TileKind::Target)
    }

    // ── Pheromone field ───────────────────────────────────────────────────

    pub fn pheromone_config(&self) -> &PheromoneConfig {
        &self.pheromone_cfg
    }

    pub fn pheromone(&self, c: Coord) -> WorldResult<f32> {
        self.tile(c).map(Tile::pheromone_strength)
    }

    /// Reset the pheromone at `c` to full strength.
    pub fn drop_pheromone(&mut self, c: Coord) -> WorldResult<()> {
        let cfg = self.pheromone_cfg;
        self.tile_mut(c)?.pheromone.drop_fresh(&cfg);
        Ok(())
    }

    /// Evaporate one tick's worth of pheromone from every tile.
    pub fn decay_pheromones(&mut self) {
        let cfg = self.pheromone_cfg;
        for tile in &mut self.tiles {
            tile.pheromone.decay(&cfg);
        }
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// In-bounds cardinal neighbours of `c`, plus the portal exit when `c`
    /// is a portal tile.
    ///
    /// Walls are included: this is geometry, not walkability.  Off-map
    /// coordinates (including `c` itself) yield an all-`None` bundle.
    pub fn adjacent(&self, c: Coord) -> Adjacent<Coord> {
        let mut adj = Adjacent::default();
        if !self.in_bounds(c) {
            return adj;
        }
        for (h, n) in c.neighbors() {
            if self.in_bounds(n) {
                adj.set(h, Some(n));
            }
        }
        if self.kind_at(c) == Some(TileKind::Portal) {
            adj.portal_target = self.portals.get(&c).map(|l| l.target);
        }
        adj
    }

    // ── Portals ───────────────────────────────────────────────────────────

    /// The link configured for the portal tile at `c`.
    pub fn portal(&self, c: Coord) -> Option<&PortalLink> {
        self.portals.get(&c)
    }

    /// All portal links, sorted by source coordinate.
    pub fn portals(&self) -> Vec<(Coord, PortalLink)> {
        let mut out: Vec<_> = self.portals.iter().map(|(&c, &l)| (c, l)).collect();
        out.sort_by_key(|(c, _)| *c);
        out
    }

    // ── Agent registry ────────────────────────────────────────────────────

    /// Place `agent` on the map for the first time.
    pub fn register_agent(&mut self, agent: AgentId, kind: AgentKind, at: Coord) -> WorldResult<()> {
        self.check_enterable(agent, at)?;
        if agent.index() >= self.agent_slots.len() {
            self.agent_slots.resize(agent.index() + 1, None);
        }
        if let Some(old) = self.agent_slots[agent.index()].take() {
            self.occupancy.remove(&old.coord);
        }
        self.agent_slots[agent.index()] = Some(AgentSlot { kind, coord: at });
        self.occupancy.insert(at, agent);
        trace!(%agent, %kind, %at, "agent registered");
        Ok(())
    }

    /// Relocate a registered agent.  Fails if the destination is off-map, a
    /// wall, or held by someone else; the registry is untouched on failure.
    pub fn move_agent(&mut self, agent: AgentId, to: Coord) -> WorldResult<()> {
        let from = self.agent_position(agent).ok_or(WorldError::UnknownAgent(agent))?;
        if from == to {
            return Ok(());
        }
        self.check_enterable(agent, to)?;
        self.occupancy.remove(&from);
        self.occupancy.insert(to, agent);
        if let Some(Some(slot)) = self.agent_slots.get_mut(agent.index()) {
            slot.coord = to;
        }
        Ok(())
    }

    /// Take `agent` off the map.  Returns its last position.
    pub fn remove_agent(&mut self, agent: AgentId) -> Option<Coord> {
        let slot = self.agent_slots.get_mut(agent.index())?.take()?;
        self.occupancy.remove(&slot.coord);
        Some(slot.coord)
    }

    fn check_enterable(&self, agent: AgentId, at: Coord) -> WorldResult<()> {
        let tile = self.tile(at)?;
        if tile.is_wall() {
            return Err(WorldError::Blocked(at));
        }
        match self.occupancy.get(&at) {
            Some(&other) if other != agent => Err(WorldError::Occupied { coord: at, by: other }),
            _ => Ok(()),
        }
    }

    /// The agent standing on `c`, if any.
    pub fn agent_at(&self, c: Coord) -> Option<(AgentId, AgentKind)> {
        let id = *self.occupancy.get(&c)?;
        self.agent_kind(id).map(|k| (id, k))
    }

    pub fn agent_position(&self, agent: AgentId) -> Option<Coord> {
        self.agent_slots.get(agent.index()).copied().flatten().map(|s| s.coord)
    }

    pub fn agent_kind(&self, agent: AgentId) -> Option<AgentKind> {
        self.agent_slots.get(agent.index()).copied().flatten().map(|s| s.kind)
    }

    /// Every agent on the map, ascending by id.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, AgentKind, Coord)> + '_ {
        self.agent_slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|s| (AgentId(i as u32), s.kind, s.coord))
        })
    }

    pub fn agent_count(&self) -> usize {
        self.occupancy.len()
    }

    // ── Marker registry ───────────────────────────────────────────────────

    pub fn place_marker(
        &mut self,
        at:        Coord,
        kind:      MarkerKind,
        owner:     AgentKind,
        placed_by: AgentId,
        tick:      Tick,
    ) -> WorldResult<MarkerId> {
        let id = MarkerId(self.markers.len() as u32);
        self.tile_mut(at)?.markers.push(id);
        self.markers.push(Marker { id, coord: at, kind, owner, placed_by, placed_at: tick });
        Ok(id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.index())
    }

    /// Markers on `c`, oldest first.  Empty when off the map.
    pub fn markers_at(&self, c: Coord) -> impl Iterator<Item = &Marker> + '_ {
        self.get(c)
            .into_iter()
            .flat_map(|t| t.markers.iter())
            .filter_map(|&id| self.marker(id))
    }

    // ── Exploration ───────────────────────────────────────────────────────

    /// Flag `c` as seen by `kind`.  Returns `true` if it was new.
    pub fn mark_explored(&mut self, c: Coord, kind: AgentKind) -> WorldResult<bool> {
        Ok(self.tile_mut(c)?.mark_explored(kind))
    }

    /// Number of non-wall tiles.
    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_wall()).count()
    }

    /// Fraction of non-wall tiles explored by `kind`, in `[0, 1]`.
    pub fn coverage(&self, kind: AgentKind) -> f64 {
        let passable = self.passable_count();
        if passable == 0 {
            return 0.0;
        }
        let seen = self
            .tiles
            .iter()
            .filter(|t| !t.is_wall() && t.is_explored_by(kind))
            .count();
        seen as f64 / passable as f64
    }
}
