//! Baseline random walk.

use arena_core::{AgentId, AgentRng, Heading};

use crate::{Algorithm, BehaviorResult, Decision, MoveQueue, PlanContext};

/// Steps to a uniformly chosen known walkable neighbour, one tile at a time.
#[derive(Clone, Debug, Default)]
pub struct RandomWalk {
    queue: MoveQueue,
}

impl RandomWalk {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for RandomWalk {
    fn next_move(&mut self, ctx: &PlanContext<'_>, rng: &mut AgentRng) -> BehaviorResult<Decision> {
        if self.queue.is_empty() {
            let options: Vec<Heading> = ctx.here()?.adjacent.iter().map(|(h, _)| h).collect();
            if let Some(&heading) = rng.choose(&options) {
                self.queue.push_route(ctx.agent, ctx.pose.heading, heading, 1);
            }
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
