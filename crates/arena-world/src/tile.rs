//! Ground-truth tile state.

use std::fmt;

use arena_core::{AgentKind, Coord, MarkerId};

use crate::Pheromone;

/// What occupies a tile's floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Target,
    Portal,
    GuardSpawn,
    IntruderSpawn,
    /// Walkable, but an agent standing here sees half as far.
    Shaded,
}

impl TileKind {
    /// Everything except walls can be stood on.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    #[inline]
    pub fn blocks_sight(self) -> bool {
        matches!(self, TileKind::Wall)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TileKind::Empty         => "empty",
            TileKind::Wall          => "wall",
            TileKind::Target        => "target",
            TileKind::Portal        => "portal",
            TileKind::GuardSpawn    => "guard_spawn",
            TileKind::IntruderSpawn => "intruder_spawn",
            TileKind::Shaded        => "shaded",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the arena.  Owned by [`TileMap`][crate::TileMap]; its
/// coordinate never changes after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    coord: Coord,
    pub kind: TileKind,
    pub pheromone: Pheromone,
    pub explored_by_guard: bool,
    pub explored_by_intruder: bool,
    pub markers: Vec<MarkerId>,
}

impl Tile {
    pub(crate) fn new(coord: Coord, kind: TileKind) -> Self {
        Self {
            coord,
            kind,
            pheromone: Pheromone::NONE,
            explored_by_guard: false,
            explored_by_intruder: false,
            markers: Vec::new(),
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == TileKind::Wall
    }

    #[inline]
    pub fn pheromone_strength(&self) -> f32 {
        self.pheromone.strength()
    }

    pub fn is_explored_by(&self, kind: AgentKind) -> bool {
        match kind {
            AgentKind::Guard    => self.explored_by_guard,
            AgentKind::Intruder => self.explored_by_intruder,
        }
    }

    /// Set the explored flag for `kind`.  Returns `true` if it was unset.
    pub fn mark_explored(&mut self, kind: AgentKind) -> bool {
        let flag = match kind {
            AgentKind::Guard    => &mut self.explored_by_guard,
            AgentKind::Intruder => &mut self.explored_by_intruder,
        };
        !std::mem::replace(flag, true)
    }
}
