//! Scenario construction: [`TileMapBuilder`].
//!
//! The builder accepts tile edits in any order and defers every structural
//! check to [`build`](TileMapBuilder::build), so a malformed scenario is
//! rejected before a single tick runs.
//!
//! # Example
//!
//! ```
//! use arena_core::{Coord, Heading, Rect};
//! use arena_world::TileMapBuilder;
//!
//! let map = TileMapBuilder::new(10, 8)
//!     .border_walls()
//!     .target_area(Rect::new(Coord::new(7, 5), Coord::new(8, 6)))
//!     .portal(Coord::new(1, 1), Coord::new(5, 5), Heading::East)
//!     .build()
//!     .unwrap();
//! assert_eq!(map.portal(Coord::new(1, 1)).unwrap().target, Coord::new(5, 5));
//! ```

use tracing::debug;

use arena_core::{Coord, Heading, Rect};

use crate::map::{CoordMap, PortalLink};
use crate::{PheromoneConfig, Tile, TileKind, TileMap, WorldError, WorldResult};

/// Fluent builder for [`TileMap`].
pub struct TileMapBuilder {
    width:         i32,
    height:        i32,
    kinds:         Vec<TileKind>,
    pheromone_cfg: PheromoneConfig,
    portals:       CoordMap<PortalLink>,
    first_error:   Option<WorldError>,
}

impl TileMapBuilder {
    /// An all-`Empty` map of `width × height` tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let n = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            kinds:         vec![TileKind::Empty; n],
            pheromone_cfg: PheromoneConfig::default(),
            portals:       CoordMap::default(),
            first_error:   None,
        }
    }

    /// Parse a character grid, one line per row.
    ///
    /// | Char | Tile             |
    /// |------|------------------|
    /// | `.`  | empty            |
    /// | `#`  | wall             |
    /// | `T`  | target           |
    /// | `P`  | portal (link it with [`portal`](Self::portal)) |
    /// | `G`  | guard spawn      |
    /// | `I`  | intruder spawn   |
    /// | `s`  | shaded           |
    ///
    /// Leading and trailing blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(layout: &str) -> WorldResult<Self> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut b = Self::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(WorldError::Layout(format!(
                    "row {y} has {} tiles, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    '.' => TileKind::Empty,
                    '#' => TileKind::Wall,
                    'T' => TileKind::Target,
                    'P' => TileKind::Portal,
                    'G' => TileKind::GuardSpawn,
                    'I' => TileKind::IntruderSpawn,
                    's' => TileKind::Shaded,
                    other => {
                        return Err(WorldError::Layout(format!(
                            "unknown tile {other:?} at ({x}, {y})"
                        )));
                    }
                };
                b = b.set(Coord::new(x as i32, y as i32), kind);
            }
        }
        Ok(b)
    }

    pub fn pheromone(mut self, cfg: PheromoneConfig) -> Self {
        self.pheromone_cfg = cfg;
        self
    }

    fn slot(&self, c: Coord) -> Option<usize> {
        (c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    fn record(&mut self, err: WorldError) {
        if self.first_error.is_none() {
            self.first_error = Some(err);
        }
    }

    /// Set a single tile.  An off-map coordinate is reported by `build`.
    pub fn set(mut self, c: Coord, kind: TileKind) -> Self {
        match self.slot(c) {
            Some(i) => self.kinds[i] = kind,
            None => {
                let err = WorldError::OutOfBounds { coord: c, width: self.width, height: self.height };
                self.record(err);
            }
        }
        self
    }

    /// Set every tile in `area`.
    pub fn fill(mut self, area: Rect, kind: TileKind) -> Self {
        for c in area.coords() {
            self = self.set(c, kind);
        }
        self
    }

    pub fn wall(self, c: Coord) -> Self {
        self.set(c, TileKind::Wall)
    }

    pub fn walls(self, area: Rect) -> Self {
        self.fill(area, TileKind::Wall)
    }

    /// Wall off the outermost ring of tiles.
    pub fn border_walls(self) -> Self {
        let (w, h) = (self.width - 1, self.height - 1);
        if w < 0 || h < 0 {
            return self;
        }
        self.walls(Rect::new(Coord::new(0, 0), Coord::new(w, 0)))
            .walls(Rect::new(Coord::new(0, h), Coord::new(w, h)))
            .walls(Rect::new(Coord::new(0, 0), Coord::new(0, h)))
            .walls(Rect::new(Coord::new(w, 0), Coord::new(w, h)))
    }

    pub fn target_area(self, area: Rect) -> Self {
        self.fill(area, TileKind::Target)
    }

    pub fn guard_spawn(self, area: Rect) -> Self {
        self.fill(area, TileKind::GuardSpawn)
    }

    pub fn intruder_spawn(self, area: Rect) -> Self {
        self.fill(area, TileKind::IntruderSpawn)
    }

    pub fn shaded(self, area: Rect) -> Self {
        self.fill(area, TileKind::Shaded)
    }

    /// Make `at` a portal that sends agents to `target`, arriving facing
    /// `facing`.
    pub fn portal(self, at: Coord, target: Coord, facing: Heading) -> Self {
        self.portal_area(Rect::tile(at), target, facing)
    }

    /// Make every tile of `area` a portal to the same exit.
    pub fn portal_area(mut self, area: Rect, target: Coord, facing: Heading) -> Self {
        for c in area.coords() {
            self = self.set(c, TileKind::Portal);
            if self.slot(c).is_some() {
                self.portals.insert(c, PortalLink { target, facing });
            }
        }
        self
    }

    /// Validate and construct the map.
    ///
    /// # Errors
    ///
    /// - `EmptyMap` when either dimension is not positive.
    /// - `OutOfBounds` for the first edit that fell off the map.
    /// - `Pheromone` for a bad [`PheromoneConfig`].
    /// - `UnresolvedPortal` for a portal tile without a link.
    /// - `DanglingPortalLink` for a link whose tile was later overwritten.
    /// - `PortalTargetOutOfBounds` / `PortalTargetBlocked` for a link whose
    ///   exit is not a walkable, non-portal tile.
    pub fn build(mut self) -> WorldResult<TileMap> {
        if self.width <= 0 || self.height <= 0 {
            return Err(WorldError::EmptyMap { width: self.width, height: self.height });
        }
        if let Some(err) = self.first_error.take() {
            return Err(err);
        }
        self.pheromone_cfg.validate()?;

        let width = self.width;
        let kind_of = |c: Coord| self.slot(c).map(|i| self.kinds[i]);

        let mut links: Vec<(Coord, PortalLink)> =
            self.portals.iter().map(|(&c, &l)| (c, l)).collect();
        links.sort_by_key(|(c, _)| *c);
        for (at, link) in &links {
            if kind_of(*at) != Some(TileKind::Portal) {
                return Err(WorldError::DanglingPortalLink(*at));
            }
            match kind_of(link.target) {
                None => {
                    return Err(WorldError::PortalTargetOutOfBounds { portal: *at, target: link.target });
                }
                Some(TileKind::Wall) | Some(TileKind::Portal) => {
                    return Err(WorldError::PortalTargetBlocked { portal: *at, target: link.target });
                }
                Some(_) => {}
            }
        }

        let mut tiles = Vec::with_capacity(self.kinds.len());
        for (i, &kind) in self.kinds.iter().enumerate() {
            let c = Coord::new(i as i32 % width, i as i32 / width);
            if kind == TileKind::Portal && !self.portals.contains_key(&c) {
                return Err(WorldError::UnresolvedPortal(c));
            }
            tiles.push(Tile::new(c, kind));
        }

        debug!(
            width,
            height = self.height,
            portals = links.len(),
            walls = tiles.iter().filter(|t| t.is_wall()).count(),
            "tile map built"
        );
        Ok(TileMap::from_parts(width, self.height, tiles, self.pheromone_cfg, self.portals))
    }
}
