//! Pheromone-gradient patrol.
//!
//! Each step the agent heads for the known walkable neighbour with the
//! weakest pheromone and marks it, so guards spread towards territory that
//! nobody has walked recently.  Neighbours are scanned north, east, south,
//! west; exact ties are broken with a reservoir draw, which makes every tied
//! neighbour equally likely.

use arena_core::{AgentId, AgentRng, Coord, Heading};

use crate::{Algorithm, BehaviorResult, Decision, MoveQueue, PlanContext};

#[derive(Clone, Debug, Default)]
pub struct PheromonePatrol {
    queue: MoveQueue,
}

impl PheromonePatrol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the neighbour to walk to.  `None` if the agent knows of no
    /// walkable neighbour.
    fn choose(ctx: &PlanContext<'_>, rng: &mut AgentRng) -> BehaviorResult<Option<(Heading, Coord)>> {
        let here = ctx.here()?;
        let mut best: Option<(Heading, Coord, f32)> = None;
        let mut ties = 1u32;

        for (heading, &c) in here.adjacent.iter() {
            let Some(node) = ctx.belief.node(c) else { continue };
            let strength = node.pheromone_strength();
            match best {
                None => best = Some((heading, c, strength)),
                Some((_, _, s)) if strength < s => {
                    best = Some((heading, c, strength));
                    ties = 1;
                }
                Some((_, _, s)) if strength == s => {
                    ties += 1;
                    if rng.tie_break(ties) {
                        best = Some((heading, c, strength));
                    }
                }
                Some(_) => {}
            }
        }
        Ok(best.map(|(h, c, _)| (h, c)))
    }
}

impl Algorithm for PheromonePatrol {
    fn next_move(&mut self, ctx: &PlanContext<'_>, rng: &mut AgentRng) -> BehaviorResult<Decision> {
        let mut drop = None;
        if self.queue.is_empty() {
            if let Some((heading, target)) = Self::choose(ctx, rng)? {
                self.queue.push_route(ctx.agent, ctx.pose.heading, heading, 1);
                drop = Some(target);
            }
        }
        let decision = match self.queue.pop() {
            Some(mv) => Decision::new(mv),
            None => Decision::idle(ctx.agent),
        };
        Ok(Decision { pheromone_drop: drop, ..decision })
    }

    fn interrupt(&mut self, agent: AgentId, veer: Heading) {
        self.queue.replace_with_turn(agent, veer);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
