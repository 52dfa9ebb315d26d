//! A* pursuit over an agent's belief graph.
//!
//! # Goal policy
//!
//! | Agent    | Goal                                                      |
//! |----------|-----------------------------------------------------------|
//! | Guard    | last intruder sighting, else the nearest frontier tile    |
//! | Intruder | nearest known target tile, else the nearest frontier tile |
//!
//! "Nearest" is Manhattan distance from the agent, ties broken by the
//! smaller coordinate.  Goals the agent has no known route to are skipped:
//! after the preferred goal come the other known targets, then the frontier
//! tiles.  The plan is recomputed every time the move queue runs dry, so a
//! guard follows a moving sighting one step at a time.
//!
//! # Search
//!
//! Unit step cost, Manhattan heuristic.  Portal tiles expand only to their
//! exit.  A portal can make the true distance shorter than Manhattan, so
//! paths are shortest only when no portal offers a shortcut.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use arena_agent::BeliefMap;
use arena_core::{AgentId, AgentKind, AgentRng, Coord, Heading};
use arena_world::{TileKind, TileMap};

use crate::{Algorithm, BehaviorError, BehaviorResult, Decision, MoveQueue, PlanContext};

#[cfg(feature = "fx-hash")]
type CoordMap<V> = rustc_hash::FxHashMap<Coord, V>;
#[cfg(not(feature = "fx-hash"))]
type CoordMap<V> = std::collections::HashMap<Coord, V>;

#[derive(Clone, Debug, Default)]
pub struct AStarPursuit {
    queue: MoveQueue,
}

impl AStarPursuit {
    pub fn new() -> Self {
        Self::default()
    }

    fn plan(&mut self, ctx: &PlanContext<'_>) -> BehaviorResult<()> {
        let from = ctx.here()?.coord();
        let goals = goal_candidates(ctx.belief, ctx.map, ctx.kind, from);
        let Some(&first) = goals.first() else { return Err(BehaviorError::NoGoal) };
        if first == from {
            return Ok(());
        }
        let path = goals
            .iter()
            .find_map(|&goal| find_path(ctx.belief, from, goal))
            .ok_or(BehaviorError::NoPath { from, to: first })?;

        // Walk as far as the first leg of the path goes in a straight line.
        let mut legs = path.windows(2).map(|w| Heading::between(w[0], w[1]));
        let Some(Some(heading)) = legs.next() else { return Ok(()) };
        let run = 1 + legs.take_while(|&h| h == Some(heading)).count() as u32;
        self.queue.push_route(ctx.agent, ctx.pose.heading, heading, run.min(ctx.speed));
        Ok(())
    }
}

impl Algorithm for AStarPursuit {
    fn next_move(&mut self, ctx: &PlanContext<'_>, _rng: &mut AgentRng) -> BehaviorResult<Decision> {
        if self.queue.is_empty() {
            self.plan(ctx)?;
        }
        Ok(match self.queue.pop() {
            Some(mv) => Decision::new(mv),
            None => Decision::idle(ctx.agent),
        })
    }

    fn interrupt(&mut self, agent: AgentId, veer: Heading) {
        self.queue.replace_with_turn(agent, veer);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

// ── Goal selection ────────────────────────────────────────────────────────────

/// Where an agent of `kind` standing at `from` should head.  `None` when it
/// has nothing to chase and nothing left to explore.
pub fn select_goal(belief: &BeliefMap, map: &TileMap, kind: AgentKind, from: Coord) -> Option<Coord> {
    goal_candidates(belief, map, kind, from).first().copied()
}

/// Goals in the order they are tried: the sighting (guard) or every known
/// target nearest first (intruder), then every frontier tile nearest first.
/// An unreachable goal falls through to the next, so a target glimpsed
/// behind a wall does not strand the agent.
fn goal_candidates(belief: &BeliefMap, map: &TileMap, kind: AgentKind, from: Coord) -> Vec<Coord> {
    let mut goals = match kind {
        AgentKind::Guard    => belief.last_sighting().map(|s| s.coord).into_iter().collect(),
        AgentKind::Intruder => by_distance(from, belief.known_of_kind(TileKind::Target)),
    };
    for c in by_distance(from, belief.frontier(map)) {
        if c != from && !goals.contains(&c) {
            goals.push(c);
        }
    }
    goals
}

fn by_distance(from: Coord, mut candidates: Vec<Coord>) -> Vec<Coord> {
    candidates.sort_unstable_by_key(|&c| (from.manhattan(c), c));
    candidates
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// Path from `from` to `to` through `belief`, both ends included.
///
/// Only links the agent knows about are followed.  `None` if `to` cannot be
/// reached that way.
pub fn find_path(belief: &BeliefMap, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    if from == to {
        return Some(vec![from]);
    }

    // g[c] = best known step count from `from`.
    let mut g: CoordMap<u32> = CoordMap::default();
    let mut came_from: CoordMap<Coord> = CoordMap::default();
    g.insert(from, 0);

    // Min-heap on (f, h, coord).  The trailing keys make tie-breaking
    // deterministic and prefer nodes closer to the goal.
    let mut open: BinaryHeap<Reverse<(u32, u32, Coord)>> = BinaryHeap::new();
    let h0 = from.manhattan(to);
    open.push(Reverse((h0, h0, from)));

    while let Some(Reverse((f, h, cur))) = open.pop() {
        if cur == to {
            return Some(reconstruct(&came_from, to));
        }
        let cost = g.get(&cur).copied().unwrap_or(u32::MAX);
        // Stale heap entry.
        if f > cost.saturating_add(h) {
            continue;
        }

        for next in expand(belief, cur) {
            let step = cost + 1;
            if step < g.get(&next).copied().unwrap_or(u32::MAX) {
                g.insert(next, step);
                came_from.insert(next, cur);
                let h = next.manhattan(to);
                open.push(Reverse((step + h, h, next)));
            }
        }
    }
    None
}

/// Successors of `c` in the belief graph.
fn expand(belief: &BeliefMap, c: Coord) -> Vec<Coord> {
    let Some(node) = belief.node(c) else { return Vec::new() };
    if node.kind == TileKind::Portal {
        return node.adjacent.portal_target.into_iter().collect();
    }
    node.adjacent.iter().map(|(_, &n)| n).collect()
}

fn reconstruct(came_from: &CoordMap<Coord>, to: Coord) -> Vec<Coord> {
    let mut path = vec![to];
    let mut cur = to;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
