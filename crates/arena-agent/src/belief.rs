//! `BeliefMap`: everything one agent has observed so far.
//!
//! # Update model
//!
//! Only tiles the agent perceives this tick have their facts (occupancy,
//! pheromone, markers) refreshed.  Remembered tiles keep the facts they had
//! when last seen, but their neighbourhood links are recomputed whenever a
//! neighbour becomes known, so the graph stays connected as it grows.
//!
//! # Sightings
//!
//! The map also remembers where an opponent was last seen.  A sighting goes
//! cold (is cleared) when the agent looks at that tile again and the
//! opponent is gone.

use arena_core::{AgentId, AgentKind, Coord, Tick};
use arena_world::{TileKind, TileMap};

use crate::TileNode;

#[cfg(feature = "fx-hash")]
type CoordMap<V> = rustc_hash::FxHashMap<Coord, V>;
#[cfg(not(feature = "fx-hash"))]
type CoordMap<V> = std::collections::HashMap<Coord, V>;

#[cfg(feature = "fx-hash")]
type CoordSet = rustc_hash::FxHashSet<Coord>;
#[cfg(not(feature = "fx-hash"))]
type CoordSet = std::collections::HashSet<Coord>;

/// Where and when an opponent was last observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sighting {
    pub agent: AgentId,
    pub coord: Coord,
    pub tick:  Tick,
}

/// One agent's private planning graph.
#[derive(Clone, Debug)]
pub struct BeliefMap {
    owner:    AgentKind,
    nodes:    CoordMap<TileNode>,
    sighting: Option<Sighting>,
}

impl BeliefMap {
    pub fn new(owner: AgentKind) -> Self {
        Self { owner, nodes: CoordMap::default(), sighting: None }
    }

    pub fn owner(&self) -> AgentKind {
        self.owner
    }

    #[inline]
    pub fn knows(&self, c: Coord) -> bool {
        self.nodes.contains_key(&c)
    }

    #[inline]
    pub fn node(&self, c: Coord) -> Option<&TileNode> {
        self.nodes.get(&c)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Known coordinates in ascending order.
    pub fn coords(&self) -> Vec<Coord> {
        let mut out: Vec<Coord> = self.nodes.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Known tiles of `kind`, ascending.
    pub fn known_of_kind(&self, kind: TileKind) -> Vec<Coord> {
        let mut out: Vec<Coord> = self
            .nodes
            .values()
            .filter(|n| n.kind == kind)
            .map(TileNode::coord)
            .collect();
        out.sort_unstable();
        out
    }

    pub fn last_sighting(&self) -> Option<Sighting> {
        self.sighting
    }

    pub fn forget_sighting(&mut self) {
        self.sighting = None;
    }

    /// Record that the agent perceives `seen` at `tick`.
    ///
    /// Off-map coordinates are ignored.  Every seen tile gets a fresh node;
    /// remembered neighbours of seen tiles are relinked.
    pub fn observe(&mut self, map: &TileMap, seen: &[Coord], tick: Tick) {
        let mut fresh: Vec<Coord> = Vec::with_capacity(seen.len());
        for &c in seen {
            if !self.nodes.contains_key(&c) {
                match TileNode::new(map, c) {
                    Some(node) => {
                        self.nodes.insert(c, node);
                    }
                    None => continue,
                }
            }
            fresh.push(c);
        }

        let known: CoordSet = self.nodes.keys().copied().collect();
        let knows = |c: Coord| known.contains(&c);

        let mut touched = CoordSet::default();
        for &c in &fresh {
            if let Some(node) = self.nodes.get_mut(&c) {
                node.update(map, knows);
            }
            touched.insert(c);
        }
        for &c in &fresh {
            for (_, n) in c.neighbors() {
                if touched.insert(n) {
                    if let Some(node) = self.nodes.get_mut(&n) {
                        node.relink(map, knows);
                    }
                }
            }
        }

        self.update_sighting(&fresh, tick);
    }

    /// Touch range: the agent always perceives its own tile and the
    /// in-bounds tiles next to it, whatever its vision model.
    pub fn sense_surroundings(&mut self, map: &TileMap, at: Coord, tick: Tick) {
        let mut around = vec![at];
        around.extend(in_bounds_neighbors(map, at));
        self.observe(map, &around, tick);
    }

    /// Re-sync every known node with ground truth.
    pub fn refresh(&mut self, map: &TileMap) {
        let known: CoordSet = self.nodes.keys().copied().collect();
        for node in self.nodes.values_mut() {
            node.update(map, |c| known.contains(&c));
        }
    }

    /// Known walkable tiles with at least one in-bounds neighbour the agent
    /// has never seen, ascending.
    pub fn frontier(&self, map: &TileMap) -> Vec<Coord> {
        let mut out: Vec<Coord> = self
            .nodes
            .values()
            .filter(|n| n.is_passable())
            .map(TileNode::coord)
            .filter(|&c| in_bounds_neighbors(map, c).any(|n| !self.knows(n)))
            .collect();
        out.sort_unstable();
        out
    }

    fn update_sighting(&mut self, fresh: &[Coord], tick: Tick) {
        let opponent = self.owner.opponent();
        if let Some(s) = self.sighting {
            let gone = fresh.contains(&s.coord)
                && self
                    .nodes
                    .get(&s.coord)
                    .and_then(|n| n.occupant)
                    .is_none_or(|(_, k)| k != opponent);
            if gone {
                self.sighting = None;
            }
        }
        let spotted = fresh.iter().find_map(|c| {
            let (agent, kind) = self.nodes.get(c)?.occupant?;
            (kind == opponent).then_some(Sighting { agent, coord: *c, tick })
        });
        if let Some(s) = spotted {
            self.sighting = Some(s);
        }
    }
}

fn in_bounds_neighbors(map: &TileMap, c: Coord) -> impl Iterator<Item = Coord> + '_ {
    c.neighbors().into_iter().map(|(_, n)| n).filter(|&n| map.in_bounds(n))
}
