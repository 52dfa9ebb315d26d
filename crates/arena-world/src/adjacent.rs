//! Four-way neighbour bundle with an optional portal exit.

use arena_core::Heading;

/// The cardinal neighbours of one tile, plus the tile a portal leads to.
///
/// Recomputed on demand from coordinates.  Never holds references into the
/// map, so it cannot form ownership cycles with the tiles it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjacent<T> {
    pub north:         Option<T>,
    pub east:          Option<T>,
    pub south:         Option<T>,
    pub west:          Option<T>,
    pub portal_target: Option<T>,
}

impl<T> Default for Adjacent<T> {
    fn default() -> Self {
        Self { north: None, east: None, south: None, west: None, portal_target: None }
    }
}

impl<T> Adjacent<T> {
    #[inline]
    pub fn get(&self, heading: Heading) -> Option<&T> {
        match heading {
            Heading::North => self.north.as_ref(),
            Heading::East  => self.east.as_ref(),
            Heading::South => self.south.as_ref(),
            Heading::West  => self.west.as_ref(),
        }
    }

    #[inline]
    pub fn set(&mut self, heading: Heading, value: Option<T>) {
        match heading {
            Heading::North => self.north = value,
            Heading::East  => self.east = value,
            Heading::South => self.south = value,
            Heading::West  => self.west = value,
        }
    }

    /// Present cardinal neighbours in N, E, S, W order.  The portal exit
    /// is not included.
    pub fn iter(&self) -> impl Iterator<Item = (Heading, &T)> + '_ {
        Heading::ALL
            .into_iter()
            .filter_map(move |h| self.get(h).map(|v| (h, v)))
    }

    /// Number of present cardinal neighbours.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Adjacent<U> {
        Adjacent {
            north:         self.north.map(&mut f),
            east:          self.east.map(&mut f),
            south:         self.south.map(&mut f),
            west:          self.west.map(&mut f),
            portal_target: self.portal_target.map(&mut f),
        }
    }

    /// Drop every entry (portal exit included) that fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        for slot in [
            &mut self.north,
            &mut self.east,
            &mut self.south,
            &mut self.west,
            &mut self.portal_target,
        ] {
            if slot.as_ref().is_some_and(|v| !keep(v)) {
                *slot = None;
            }
        }
    }
}
