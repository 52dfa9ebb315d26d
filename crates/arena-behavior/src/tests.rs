//! Unit tests for arena-behavior.

use arena_agent::BeliefMap;
use arena_core::{AgentId, AgentKind, AgentRng, Coord, Heading, Pose, Rect, Tick};
use arena_world::{TileKind, TileMap, TileMapBuilder};

use crate::{
    AStarPursuit, Action, AgentAlgorithm, Algorithm, AlgorithmKind, BehaviorError, Decision, Move,
    MoveQueue, PheromonePatrol, PlanContext, RandomWalk, find_path, select_goal,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const AGENT: AgentId = AgentId(0);

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// Belief of an agent that has only touched the tiles around `at`.
fn sensed(map: &TileMap, kind: AgentKind, at: Coord) -> BeliefMap {
    let mut b = BeliefMap::new(kind);
    b.sense_surroundings(map, at, Tick(0));
    b
}

/// Belief of an agent that has seen the whole map.
fn omniscient(map: &TileMap, kind: AgentKind) -> BeliefMap {
    let mut b = BeliefMap::new(kind);
    let all: Vec<Coord> = map.tiles().map(|t| t.coord()).collect();
    b.observe(map, &all, Tick(0));
    b
}

fn ctx<'a>(map: &'a TileMap, belief: &'a BeliefMap, pose: Pose, speed: u32) -> PlanContext<'a> {
    PlanContext::new(Tick(0), AGENT, belief.owner(), pose, speed, belief, map)
}

/// 5×5 open field, guard in the middle facing north, with pheromone already
/// on the north, east and west neighbours.
fn five_by_five() -> TileMap {
    let mut map = TileMapBuilder::new(5, 5).build().unwrap();
    for at in [c(2, 1), c(3, 2), c(1, 2)] {
        map.drop_pheromone(at).unwrap();
    }
    map
}

// ── Moves ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moves {
    use super::*;

    #[test]
    fn turns_are_absolute() {
        for h in Heading::ALL {
            assert_eq!(Action::turn_towards(h).facing(), Some(h));
        }
        assert_eq!(Action::turn_towards(Heading::North), Action::TurnUp);
        assert_eq!(Action::turn_towards(Heading::West), Action::TurnLeft);
        assert!(!Action::MoveForward.is_turn());
        assert_eq!(Action::Nothing.facing(), None);
    }

    #[test]
    fn queue_skips_turn_when_already_facing() {
        let mut q = MoveQueue::new();
        q.push_route(AGENT, Heading::East, Heading::East, 2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop(), Some(Move::forward(AGENT, 2)));

        q.push_route(AGENT, Heading::North, Heading::East, 0);
        assert_eq!(q.pop(), Some(Move::turn(AGENT, Heading::East)));
        assert_eq!(q.pop(), Some(Move::forward(AGENT, 1)), "magnitude at least 1");
        assert!(q.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Move::forward(AgentId(3), 2).to_string(), "AgentId(3) move_forward x2");
        assert_eq!(Move::turn(AgentId(1), Heading::South).to_string(), "AgentId(1) turn_down");
        assert!(Decision::idle(AGENT).mv.is_nothing());
    }
}

// ── PheromonePatrol ───────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol {
    use super::*;

    #[test]
    fn five_by_five_heads_for_the_fresh_tile() {
        let map = five_by_five();
        let belief = sensed(&map, AgentKind::Guard, c(2, 2));
        let pose = Pose::new(c(2, 2), Heading::North);
        let mut algo = PheromonePatrol::new();
        let mut rng = AgentRng::new(1, AGENT);

        let first = algo.next_move(&ctx(&map, &belief, pose, 1), &mut rng).unwrap();
        assert_eq!(first.mv, Move::turn(AGENT, Heading::South));
        assert_eq!(first.pheromone_drop, Some(c(2, 3)));
        assert_eq!(algo.pending(), 1);

        let turned = Pose::new(c(2, 2), Heading::South);
        let second = algo.next_move(&ctx(&map, &belief, turned, 1), &mut rng).unwrap();
        assert_eq!(second.mv, Move::forward(AGENT, 1));
        assert_eq!(second.pheromone_drop, None);
        assert_eq!(algo.pending(), 0);
    }

    #[test]
    fn fresh_five_by_five_turns_at_most_once_then_steps() {
        let map = TileMapBuilder::new(5, 5).build().unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(2, 2));
        let start = Pose::new(c(2, 2), Heading::North);

        for seed in 0..32 {
            let mut algo = PheromonePatrol::new();
            let mut rng = AgentRng::new(seed, AGENT);
            let first = algo.next_move(&ctx(&map, &belief, start, 1), &mut rng).unwrap();
            let target = first.pheromone_drop.unwrap();
            let heading = Heading::between(c(2, 2), target).unwrap();

            let mut moves = vec![first.mv];
            let mut pose = start;
            while algo.pending() > 0 {
                if let Some(h) = moves.last().unwrap().action.facing() {
                    pose = Pose::new(pose.coord, h);
                }
                moves.push(algo.next_move(&ctx(&map, &belief, pose, 1), &mut rng).unwrap().mv);
            }

            assert!(moves.len() <= 2, "seed {seed}: {moves:?}");
            assert_eq!(moves.last(), Some(&Move::forward(AGENT, 1)), "seed {seed}");
            if heading == Heading::North {
                assert_eq!(moves.len(), 1, "seed {seed}: already facing north");
            } else {
                assert_eq!(moves[0], Move::turn(AGENT, heading), "seed {seed}");
            }
        }
    }

    #[test]
    fn no_turn_when_already_facing() {
        let map = five_by_five();
        let belief = sensed(&map, AgentKind::Guard, c(2, 2));
        let pose = Pose::new(c(2, 2), Heading::South);
        let mut algo = PheromonePatrol::new();
        let d = algo.next_move(&ctx(&map, &belief, pose, 1), &mut AgentRng::new(0, AGENT)).unwrap();
        assert_eq!(d.mv, Move::forward(AGENT, 1));
        assert_eq!(d.pheromone_drop, Some(c(2, 3)));
        assert_eq!(algo.pending(), 0);
    }

    #[test]
    fn queue_never_exceeds_two() {
        let map = TileMapBuilder::new(4, 4).build().unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(1, 1));
        let mut algo = PheromonePatrol::new();
        let mut rng = AgentRng::new(5, AGENT);
        for h in Heading::ALL {
            let _ = algo.next_move(&ctx(&map, &belief, Pose::new(c(1, 1), h), 1), &mut rng).unwrap();
            assert!(algo.pending() <= 1, "one move returned, at most one left");
        }
    }

    #[test]
    fn boxed_in_does_nothing() {
        let map = TileMapBuilder::new(3, 3)
            .wall(c(1, 0))
            .wall(c(0, 1))
            .wall(c(2, 1))
            .wall(c(1, 2))
            .build()
            .unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(1, 1));
        let mut algo = PheromonePatrol::new();
        let d = algo
            .next_move(&ctx(&map, &belief, Pose::new(c(1, 1), Heading::North), 1), &mut AgentRng::new(0, AGENT))
            .unwrap();
        assert_eq!(d, Decision::idle(AGENT));
    }

    #[test]
    fn unknown_neighbours_are_not_candidates() {
        let mut map = TileMapBuilder::new(3, 3).build().unwrap();
        map.drop_pheromone(c(2, 1)).unwrap();
        let mut belief = BeliefMap::new(AgentKind::Guard);
        belief.observe(&map, &[c(1, 1), c(2, 1)], Tick(0));
        let mut algo = PheromonePatrol::new();
        let d = algo
            .next_move(&ctx(&map, &belief, Pose::new(c(1, 1), Heading::East), 1), &mut AgentRng::new(0, AGENT))
            .unwrap();
        assert_eq!(d.pheromone_drop, Some(c(2, 1)), "only known neighbour, however strong");
    }

    #[test]
    fn off_map_pose_is_an_error() {
        let map = TileMapBuilder::new(3, 3).build().unwrap();
        let belief = BeliefMap::new(AgentKind::Guard);
        let err = PheromonePatrol::new()
            .next_move(&ctx(&map, &belief, Pose::new(c(7, 7), Heading::North), 1), &mut AgentRng::new(0, AGENT))
            .unwrap_err();
        assert!(matches!(err, BehaviorError::World(_)));

        let err = PheromonePatrol::new()
            .next_move(&ctx(&map, &belief, Pose::new(c(1, 1), Heading::North), 1), &mut AgentRng::new(0, AGENT))
            .unwrap_err();
        assert!(matches!(err, BehaviorError::Unobserved(_)));
    }

    #[test]
    fn two_way_tie_is_a_fair_coin() {
        // North and west are marked, east and south tie at zero.
        let mut map = TileMapBuilder::new(3, 3).build().unwrap();
        map.drop_pheromone(c(1, 0)).unwrap();
        map.drop_pheromone(c(0, 1)).unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(1, 1));
        let pose = Pose::new(c(1, 1), Heading::North);
        let mut rng = AgentRng::new(2024, AGENT);

        let n = 10_000;
        let mut east = 0;
        for _ in 0..n {
            let d = PheromonePatrol::new().next_move(&ctx(&map, &belief, pose, 1), &mut rng).unwrap();
            match d.pheromone_drop {
                Some(t) if t == c(2, 1) => east += 1,
                Some(t) => assert_eq!(t, c(1, 2)),
                None => panic!("no choice made"),
            }
        }
        // 0.5 ± 5σ with σ = 0.005
        let p = east as f64 / n as f64;
        assert!((p - 0.5).abs() < 0.025, "east chosen {p}");
    }

    #[test]
    fn four_way_tie_is_uniform() {
        let map = TileMapBuilder::new(3, 3).build().unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(1, 1));
        let pose = Pose::new(c(1, 1), Heading::North);
        let mut rng = AgentRng::new(77, AGENT);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            let d = PheromonePatrol::new().next_move(&ctx(&map, &belief, pose, 1), &mut rng).unwrap();
            let to = d.pheromone_drop.unwrap();
            let h = Heading::between(c(1, 1), to).unwrap();
            counts[Heading::ALL.iter().position(|&x| x == h).unwrap()] += 1;
        }
        for n in counts {
            assert!((2250..=2750).contains(&n), "counts {counts:?}");
        }
    }

    #[test]
    fn interrupt_replaces_pending_moves() {
        let map = five_by_five();
        let belief = sensed(&map, AgentKind::Guard, c(2, 2));
        let mut algo = PheromonePatrol::new();
        let mut rng = AgentRng::new(0, AGENT);
        let _ = algo.next_move(&ctx(&map, &belief, Pose::new(c(2, 2), Heading::North), 1), &mut rng).unwrap();
        algo.interrupt(AGENT, Heading::West);
        assert_eq!(algo.pending(), 1);
        let d = algo.next_move(&ctx(&map, &belief, Pose::new(c(2, 2), Heading::South), 1), &mut rng).unwrap();
        assert_eq!(d.mv.action, Action::TurnLeft);
        assert_eq!(d.pheromone_drop, None);
    }
}

// ── AStarPursuit ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit {
    use super::*;

    #[test]
    fn intruder_runs_for_known_target_capped_by_speed() {
        let map = TileMapBuilder::new(6, 1).set(c(5, 0), TileKind::Target).build().unwrap();
        let belief = omniscient(&map, AgentKind::Intruder);
        let mut algo = AStarPursuit::new();
        let mut rng = AgentRng::new(0, AGENT);

        let d = algo.next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::East), 3), &mut rng).unwrap();
        assert_eq!(d.mv, Move::forward(AGENT, 3));

        let mut algo = AStarPursuit::new();
        let d = algo.next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::North), 9), &mut rng).unwrap();
        assert_eq!(d.mv, Move::turn(AGENT, Heading::East));
        assert_eq!(algo.pending(), 1);
        let d = algo.next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::East), 9), &mut rng).unwrap();
        assert_eq!(d.mv, Move::forward(AGENT, 5));
    }

    #[test]
    fn guard_chases_last_sighting() {
        let mut map = TileMapBuilder::new(5, 5).build().unwrap();
        map.register_agent(AgentId(1), AgentKind::Intruder, c(4, 2)).unwrap();
        let belief = omniscient(&map, AgentKind::Guard);
        assert_eq!(select_goal(&belief, &map, AgentKind::Guard, c(0, 2)), Some(c(4, 2)));

        let d = AStarPursuit::new()
            .next_move(&ctx(&map, &belief, Pose::new(c(0, 2), Heading::East), 1), &mut AgentRng::new(0, AGENT))
            .unwrap();
        assert_eq!(d.mv, Move::forward(AGENT, 1));
    }

    #[test]
    fn falls_back_to_nearest_frontier() {
        let map = TileMapBuilder::new(7, 1).build().unwrap();
        let belief = sensed(&map, AgentKind::Intruder, c(3, 0));
        // Known: x = 2..=4.  Both ends are frontier; ties go to the smaller coord.
        assert_eq!(select_goal(&belief, &map, AgentKind::Intruder, c(3, 0)), Some(c(2, 0)));
        assert_eq!(select_goal(&belief, &map, AgentKind::Guard, c(3, 0)), Some(c(2, 0)));
    }

    #[test]
    fn unreachable_target_falls_through_to_frontier() {
        // The target was glimpsed, but nothing known links it to the agent.
        let map = TileMapBuilder::new(6, 1).set(c(4, 0), TileKind::Target).build().unwrap();
        let mut belief = BeliefMap::new(AgentKind::Intruder);
        belief.observe(&map, &[c(0, 0), c(1, 0), c(4, 0)], Tick(0));
        assert_eq!(find_path(&belief, c(0, 0), c(4, 0)), None);
        assert_eq!(select_goal(&belief, &map, AgentKind::Intruder, c(0, 0)), Some(c(4, 0)));

        let mut algo = AStarPursuit::new();
        let d = algo
            .next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::North), 2), &mut AgentRng::new(0, AGENT))
            .unwrap();
        assert_eq!(d.mv, Move::turn(AGENT, Heading::East));
        assert_eq!(algo.pending(), 1);
    }

    #[test]
    fn nearer_target_behind_a_wall_yields_to_the_farther_one() {
        let map = TileMapBuilder::new(7, 3)
            .walls(Rect::new(c(1, 0), c(1, 2)))
            .set(c(0, 1), TileKind::Target)
            .set(c(6, 1), TileKind::Target)
            .build()
            .unwrap();
        let belief = omniscient(&map, AgentKind::Intruder);
        let d = AStarPursuit::new()
            .next_move(&ctx(&map, &belief, Pose::new(c(2, 1), Heading::East), 9), &mut AgentRng::new(0, AGENT))
            .unwrap();
        assert_eq!(d.mv, Move::forward(AGENT, 4));
    }

    #[test]
    fn nothing_left_is_no_goal() {
        let map = TileMapBuilder::new(3, 1).build().unwrap();
        for kind in [AgentKind::Guard, AgentKind::Intruder] {
            let belief = omniscient(&map, kind);
            let err = AStarPursuit::new()
                .next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::East), 1), &mut AgentRng::new(0, AGENT))
                .unwrap_err();
            assert!(matches!(err, BehaviorError::NoGoal), "{kind}: {err}");
        }
    }

    #[test]
    fn walled_off_target_is_no_path() {
        let map = TileMapBuilder::new(5, 1)
            .wall(c(2, 0))
            .set(c(4, 0), TileKind::Target)
            .build()
            .unwrap();
        let belief = omniscient(&map, AgentKind::Intruder);
        let err = AStarPursuit::new()
            .next_move(&ctx(&map, &belief, Pose::new(c(0, 0), Heading::East), 1), &mut AgentRng::new(0, AGENT))
            .unwrap_err();
        assert!(matches!(err, BehaviorError::NoPath { from, to } if from == c(0, 0) && to == c(4, 0)));
    }

    #[test]
    fn path_length_is_manhattan_on_open_grid() {
        let map = TileMapBuilder::new(6, 6).build().unwrap();
        let belief = omniscient(&map, AgentKind::Guard);
        let path = find_path(&belief, c(0, 0), c(5, 3)).unwrap();
        assert_eq!(path.len() as u32, c(0, 0).manhattan(c(5, 3)) + 1);
        assert_eq!(path.first(), Some(&c(0, 0)));
        assert_eq!(path.last(), Some(&c(5, 3)));
        for w in path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1);
        }
        assert_eq!(find_path(&belief, c(2, 2), c(2, 2)), Some(vec![c(2, 2)]));
    }

    #[test]
    fn path_goes_around_walls() {
        let map = TileMapBuilder::new(5, 3).walls(Rect::new(c(2, 0), c(2, 1))).build().unwrap();
        let belief = omniscient(&map, AgentKind::Guard);
        let path = find_path(&belief, c(0, 0), c(4, 0)).unwrap();
        assert!(path.contains(&c(2, 2)));
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn portal_expands_only_to_its_exit() {
        // A wall column splits the map; the portal is the only way across.
        let map = TileMapBuilder::new(5, 3)
            .walls(Rect::new(c(2, 0), c(2, 2)))
            .portal(c(1, 1), c(3, 1), Heading::East)
            .set(c(4, 1), TileKind::Target)
            .build()
            .unwrap();
        let belief = omniscient(&map, AgentKind::Intruder);
        let path = find_path(&belief, c(0, 1), c(4, 1)).unwrap();
        assert_eq!(path, [c(0, 1), c(1, 1), c(3, 1), c(4, 1)]);
        assert_eq!(find_path(&belief, c(1, 1), c(1, 0)), None, "portal tile leads nowhere else");
    }

    #[test]
    fn unknown_tiles_are_not_searched() {
        let map = TileMapBuilder::new(5, 1).build().unwrap();
        let belief = sensed(&map, AgentKind::Guard, c(0, 0));
        assert_eq!(find_path(&belief, c(0, 0), c(4, 0)), None);
    }
}

// ── RandomWalk and dispatch ───────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;

    #[test]
    fn random_walk_stays_on_known_walkable_tiles() {
        let map = TileMapBuilder::new(3, 3).wall(c(1, 0)).wall(c(0, 1)).build().unwrap();
        let belief = sensed(&map, AgentKind::Intruder, c(1, 1));
        let mut rng = AgentRng::new(3, AGENT);
        for _ in 0..200 {
            let mut algo = RandomWalk::new();
            let pose = Pose::new(c(1, 1), Heading::North);
            let d = algo.next_move(&ctx(&map, &belief, pose, 1), &mut rng).unwrap();
            let heading = d.mv.action.facing().unwrap();
            assert!(matches!(heading, Heading::East | Heading::South), "{heading}");
            assert_eq!(d.pheromone_drop, None);
        }
    }

    #[test]
    fn enum_dispatches_and_reports_kind() {
        for kind in [AlgorithmKind::PheromonePatrol, AlgorithmKind::AStarPursuit, AlgorithmKind::RandomWalk] {
            let algo = AgentAlgorithm::from(kind);
            assert_eq!(algo.kind(), kind);
            assert_eq!(algo.pending(), 0);
            assert_eq!(kind.as_str().parse::<AlgorithmKind>().unwrap(), kind);
        }
        assert!("teleport".parse::<AlgorithmKind>().is_err());

        let map = five_by_five();
        let belief = sensed(&map, AgentKind::Guard, c(2, 2));
        let pose = Pose::new(c(2, 2), Heading::South);
        let mut algo = AlgorithmKind::PheromonePatrol.build();
        let d = algo.next_move(&ctx(&map, &belief, pose, 1), &mut AgentRng::new(0, AGENT)).unwrap();
        assert_eq!(d.pheromone_drop, Some(c(2, 3)));
        algo.interrupt(AGENT, Heading::East);
        assert_eq!(algo.pending(), 1);
    }
}
