//! Three-lane rectangular field of view.
//!
//! ```text
//!          L C R        (heading: north, view distance 4)
//!          . . .   3
//!          . # .   2    ← wall in lane C: C stops here, L and R go on
//!          . . .   1
//!          . @ .   0    ← lanes start on the agent's own rank
//! ```

use arena_core::{Coord, Pose};
use arena_world::TileMap;

use crate::Vision;
use crate::model::reach;

/// Lane offsets to the agent's right, in scan order: centre, left, right.
const LANES: [i32; 3] = [0, -1, 1];

#[derive(Copy, Clone, Debug, Default)]
pub struct RectangleVision;

impl Vision for RectangleVision {
    fn observe(&self, map: &TileMap, pose: Pose, view_distance: u32) -> Vec<Coord> {
        let reach = reach(map, view_distance);
        let mut seen = Vec::with_capacity(LANES.len() * reach as usize);
        for lateral in LANES {
            if lateral != 0 && !map.in_bounds(pose.relative(0, lateral)) {
                continue;
            }
            for forward in 0..reach {
                let c = pose.relative(forward, lateral);
                let Some(tile) = map.get(c) else { break };
                seen.push(c);
                if tile.kind.blocks_sight() {
                    break;
                }
            }
        }
        seen
    }
}
