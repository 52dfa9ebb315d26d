//! Widening cone field of view.
//!
//! Row `d` ahead of the agent (`1..=distance`) spans lateral offsets
//! `-d..=d`, so the cone is a right-angled wedge.  Each lateral offset is a
//! sight line parallel to the heading.  Once a sight line meets a wall, every
//! deeper row skips that offset; the shadow therefore extends to the edge of
//! the view.
//!
//! ```text
//!     . . . . . . .    3
//!       . . x . .      2    x: shadowed by the wall below
//!         . # .        1
//!           @          0
//! ```

use arena_core::{Coord, Pose};
use arena_world::TileMap;

use crate::Vision;
use crate::model::reach;

#[derive(Copy, Clone, Debug, Default)]
pub struct ConeVision;

impl Vision for ConeVision {
    fn observe(&self, map: &TileMap, pose: Pose, view_distance: u32) -> Vec<Coord> {
        let reach = reach(map, view_distance);
        // blocked[l + reach] is set once lateral `l` hits a wall.
        let mut blocked = vec![false; (2 * reach + 1) as usize];
        let mut seen = Vec::new();

        for d in 1..=reach {
            for lateral in -d..=d {
                let slot = (lateral + reach) as usize;
                if blocked[slot] {
                    continue;
                }
                let c = pose.relative(d, lateral);
                let Some(tile) = map.get(c) else { continue };
                seen.push(c);
                if tile.kind.blocks_sight() {
                    blocked[slot] = true;
                }
            }
        }
        seen
    }
}
