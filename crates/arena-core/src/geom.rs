//! Grid geometry: coordinates, headings, poses, and rectangular areas.
//!
//! All geometry is integral.  Distances are Manhattan (path length on a
//! 4-connected grid) or Chebyshev (square "earshot" areas).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A tile coordinate.  Signed so that off-map neighbours (`x = -1`) are
/// representable and can be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `n` tiles away in direction `heading`.
    #[inline]
    pub fn step(self, heading: Heading, n: i32) -> Coord {
        let (dx, dy) = heading.delta();
        Coord::new(self.x + dx * n, self.y + dy * n)
    }

    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    #[inline]
    pub fn chebyshev(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The four cardinal neighbours in fixed N, E, S, W order.
    ///
    /// No bounds check: callers filter against their map.
    pub fn neighbors(self) -> [(Heading, Coord); 4] {
        Heading::ALL.map(|h| (h, self.step(h, 1)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// One of the four cardinal directions an agent can face.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Clockwise order starting at north.  Every per-direction scan in the
    /// workspace iterates this array so results are order-stable.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit step `(dx, dy)`.  North is `y - 1`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East  => (1, 0),
            Heading::South => (0, 1),
            Heading::West  => (-1, 0),
        }
    }

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::East  => Heading::North,
            Heading::South => Heading::East,
            Heading::West  => Heading::South,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub const fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East  => Heading::South,
            Heading::South => Heading::West,
            Heading::West  => Heading::North,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East  => Heading::West,
            Heading::South => Heading::North,
            Heading::West  => Heading::East,
        }
    }

    /// The heading that steps from `from` to the 4-adjacent `to`, if any.
    pub fn between(from: Coord, to: Coord) -> Option<Heading> {
        Heading::ALL.into_iter().find(|&h| from.step(h, 1) == to)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::East  => "east",
            Heading::South => "south",
            Heading::West  => "west",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up"    => Ok(Heading::North),
            "e" | "east"  | "right" => Ok(Heading::East),
            "s" | "south" | "down"  => Ok(Heading::South),
            "w" | "west"  | "left"  => Ok(Heading::West),
            _ => Err(CoreError::Parse(format!("unknown heading {s:?}"))),
        }
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// Where an agent stands and which way it faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub coord:   Coord,
    pub heading: Heading,
}

impl Pose {
    #[inline]
    pub const fn new(coord: Coord, heading: Heading) -> Self {
        Self { coord, heading }
    }

    /// Translate a heading-relative offset into a map coordinate.
    ///
    /// `forward` is measured along the heading; `lateral` is positive to
    /// the agent's right.
    #[inline]
    pub fn relative(self, forward: i32, lateral: i32) -> Coord {
        self.coord
            .step(self.heading, forward)
            .step(self.heading.turn_right(), lateral)
    }

    /// Inverse of [`relative`](Self::relative): `(forward, lateral)` of `c`
    /// in this pose's frame.
    pub fn local(self, c: Coord) -> (i32, i32) {
        let (fx, fy) = self.heading.delta();
        let (rx, ry) = self.heading.turn_right().delta();
        let (dx, dy) = (c.x - self.coord.x, c.y - self.coord.y);
        (dx * fx + dy * fy, dx * rx + dy * ry)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.coord, self.heading)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle of tiles with inclusive corners.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Coord,
    pub max: Coord,
}

impl Rect {
    /// Build from any two opposite corners; the corners are normalised.
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A single-tile rectangle.
    pub fn tile(c: Coord) -> Self {
        Self { min: c, max: c }
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }

    pub fn width(&self) -> u32 {
        self.min.x.abs_diff(self.max.x) + 1
    }

    pub fn height(&self) -> u32 {
        self.min.y.abs_diff(self.max.y) + 1
    }

    /// Every coordinate inside the rectangle, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Coord::new(x, y)))
    }
}
