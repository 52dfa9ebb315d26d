//! Unit tests for arena-world.

use arena_core::{AgentId, AgentKind, Coord, Heading, Rect, Tick};

use crate::{MarkerKind, PheromoneConfig, TileKind, TileMap, TileMapBuilder, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(w: i32, h: i32) -> TileMap {
    TileMapBuilder::new(w, h).build().unwrap()
}

// ── Lookup and bounds ─────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use super::*;

    #[test]
    fn tile_in_bounds() {
        let map = open(5, 4);
        let t = map.tile_at(4, 3).unwrap();
        assert_eq!(t.coord(), Coord::new(4, 3));
        assert_eq!(t.kind, TileKind::Empty);
    }

    #[test]
    fn out_of_bounds_is_an_error_not_a_wrap() {
        let map = open(5, 4);
        // x = 5 on row 0 would alias (0, 1) with a naive row-major index.
        for c in [Coord::new(5, 0), Coord::new(-1, 0), Coord::new(0, 4), Coord::new(0, -1)] {
            match map.tile(c) {
                Err(WorldError::OutOfBounds { coord, width, height }) => {
                    assert_eq!((coord, width, height), (c, 5, 4));
                }
                other => panic!("expected OutOfBounds for {c}, got {other:?}"),
            }
            assert!(map.get(c).is_none());
        }
    }

    #[test]
    fn coordinates_are_unique() {
        let map = open(6, 3);
        let mut seen: Vec<Coord> = map.tiles().map(|t| t.coord()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn ascii_layout_parses() {
        let map = TileMapBuilder::from_ascii(
            "
            #####
            #G.T#
            #s.I#
            #####
            ",
        )
        .unwrap()
        .build()
        .unwrap();
        assert_eq!((map.width(), map.height()), (5, 4));
        assert_eq!(map.kind_at(Coord::new(1, 1)), Some(TileKind::GuardSpawn));
        assert_eq!(map.kind_at(Coord::new(3, 1)), Some(TileKind::Target));
        assert_eq!(map.kind_at(Coord::new(1, 2)), Some(TileKind::Shaded));
        assert!(map.is_wall(Coord::new(0, 0)));
        assert!(!map.is_wall(Coord::new(9, 9)));
        assert_eq!(map.coords_of(TileKind::IntruderSpawn).collect::<Vec<_>>(), [Coord::new(3, 2)]);
    }

    #[test]
    fn ascii_rejects_ragged_and_unknown() {
        assert!(matches!(TileMapBuilder::from_ascii("..\n..."), Err(WorldError::Layout(_))));
        assert!(matches!(TileMapBuilder::from_ascii("..\n.x"), Err(WorldError::Layout(_))));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn empty_dimensions_rejected() {
        assert!(matches!(TileMapBuilder::new(0, 5).build(), Err(WorldError::EmptyMap { .. })));
    }

    #[test]
    fn off_map_edit_rejected_at_build() {
        let r = TileMapBuilder::new(3, 3).wall(Coord::new(3, 1)).build();
        assert!(matches!(r, Err(WorldError::OutOfBounds { .. })));
    }

    #[test]
    fn portal_without_link_is_unresolved() {
        let r = TileMapBuilder::new(4, 4).set(Coord::new(1, 1), TileKind::Portal).build();
        assert!(matches!(r, Err(WorldError::UnresolvedPortal(c)) if c == Coord::new(1, 1)));
    }

    #[test]
    fn portal_target_must_be_on_map_and_walkable() {
        let r = TileMapBuilder::new(4, 4)
            .portal(Coord::new(0, 0), Coord::new(9, 9), Heading::East)
            .build();
        assert!(matches!(r, Err(WorldError::PortalTargetOutOfBounds { .. })));

        let r = TileMapBuilder::new(4, 4)
            .wall(Coord::new(3, 3))
            .portal(Coord::new(0, 0), Coord::new(3, 3), Heading::East)
            .build();
        assert!(matches!(r, Err(WorldError::PortalTargetBlocked { .. })));
    }

    #[test]
    fn overwritten_portal_leaves_dangling_link() {
        let r = TileMapBuilder::new(4, 4)
            .portal(Coord::new(0, 0), Coord::new(2, 2), Heading::East)
            .wall(Coord::new(0, 0))
            .build();
        assert!(matches!(r, Err(WorldError::DanglingPortalLink(_))));
    }

    #[test]
    fn bad_pheromone_config_rejected() {
        let r = TileMapBuilder::new(2, 2)
            .pheromone(PheromoneConfig { max_strength: 0.0, decay_per_tick: 1.0 })
            .build();
        assert!(matches!(r, Err(WorldError::Pheromone(_))));
    }

    #[test]
    fn border_walls_ring() {
        let map = TileMapBuilder::new(4, 3).border_walls().build().unwrap();
        assert_eq!(map.passable_count(), 2);
        assert!(map.is_passable(Coord::new(1, 1)));
        assert!(map.is_passable(Coord::new(2, 1)));
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use super::*;

    #[test]
    fn corner_has_two_neighbours() {
        let map = open(5, 5);
        let adj = map.adjacent(Coord::new(0, 0));
        assert_eq!(adj.north, None);
        assert_eq!(adj.west, None);
        assert_eq!(adj.east, Some(Coord::new(1, 0)));
        assert_eq!(adj.south, Some(Coord::new(0, 1)));
        assert_eq!(adj.count(), 2);
    }

    #[test]
    fn interior_order_is_nesw() {
        let map = open(5, 5);
        let order: Vec<Heading> = map.adjacent(Coord::new(2, 2)).iter().map(|(h, _)| h).collect();
        assert_eq!(order, Heading::ALL);
    }

    #[test]
    fn walls_are_still_geometric_neighbours() {
        let map = TileMapBuilder::new(3, 3).wall(Coord::new(1, 0)).build().unwrap();
        assert_eq!(map.adjacent(Coord::new(1, 1)).north, Some(Coord::new(1, 0)));
    }

    #[test]
    fn portal_resolves_target() {
        let map = TileMapBuilder::new(8, 8)
            .portal(Coord::new(1, 1), Coord::new(5, 5), Heading::East)
            .build()
            .unwrap();
        assert_eq!(map.adjacent(Coord::new(1, 1)).portal_target, Some(Coord::new(5, 5)));
        assert_eq!(map.adjacent(Coord::new(2, 1)).portal_target, None);
        assert_eq!(map.portal(Coord::new(1, 1)).unwrap().facing, Heading::East);
        assert_eq!(map.portals().len(), 1);
    }

    #[test]
    fn off_map_coordinate_has_no_neighbours() {
        let map = open(3, 3);
        assert_eq!(map.adjacent(Coord::new(-1, 1)).count(), 0);
    }

    #[test]
    fn retain_and_map() {
        let map = open(3, 3);
        let mut adj = map.adjacent(Coord::new(1, 1));
        adj.retain(|c| c.y == 1);
        assert_eq!(adj.count(), 2);
        let xs = adj.map(|c| c.x);
        assert_eq!((xs.east, xs.west), (Some(2), Some(0)));
    }
}

// ── Pheromone field ───────────────────────────────────────────────────────────

#[cfg(test)]
mod pheromone {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn drop_resets_to_max_then_decays() {
        let mut map = open(3, 3);
        let c = Coord::new(1, 1);
        map.drop_pheromone(c).unwrap();
        assert_eq!(map.pheromone(c).unwrap(), 20.0);
        map.decay_pheromones();
        assert_eq!(map.pheromone(c).unwrap(), 19.0);
        for _ in 0..50 {
            map.decay_pheromones();
        }
        assert_eq!(map.pheromone(c).unwrap(), 0.0);
    }

    #[test]
    fn drop_out_of_bounds_is_error() {
        let mut map = open(3, 3);
        assert!(map.drop_pheromone(Coord::new(3, 0)).is_err());
    }

    #[test]
    fn lifetime() {
        assert_eq!(PheromoneConfig::default().lifetime_ticks(), Some(20));
        let forever = PheromoneConfig { max_strength: 5.0, decay_per_tick: 0.0 };
        assert_eq!(forever.lifetime_ticks(), None);
    }

    proptest! {
        #[test]
        fn strength_always_in_range(
            max in 0.5f32..100.0,
            decay in 0.0f32..10.0,
            ops in proptest::collection::vec((0i32..4, 0i32..4, any::<bool>()), 0..300),
        ) {
            let cfg = PheromoneConfig { max_strength: max, decay_per_tick: decay };
            let mut map = TileMapBuilder::new(4, 4).pheromone(cfg).build().unwrap();
            for (x, y, drop) in ops {
                if drop {
                    map.drop_pheromone(Coord::new(x, y)).unwrap();
                } else {
                    map.decay_pheromones();
                }
                for t in map.tiles() {
                    let s = t.pheromone_strength();
                    prop_assert!((0.0..=max).contains(&s), "strength {s} outside [0, {max}]");
                }
            }
        }
    }
}

// ── Agent registry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod agents {
    use super::*;

    #[test]
    fn register_move_remove() {
        let mut map = open(5, 5);
        map.register_agent(AgentId(0), AgentKind::Guard, Coord::new(1, 1)).unwrap();
        map.register_agent(AgentId(2), AgentKind::Intruder, Coord::new(3, 3)).unwrap();
        assert_eq!(map.agent_at(Coord::new(1, 1)), Some((AgentId(0), AgentKind::Guard)));
        assert_eq!(map.agent_count(), 2);

        map.move_agent(AgentId(0), Coord::new(1, 2)).unwrap();
        assert_eq!(map.agent_at(Coord::new(1, 1)), None);
        assert_eq!(map.agent_position(AgentId(0)), Some(Coord::new(1, 2)));

        let listed: Vec<_> = map.agents().collect();
        assert_eq!(listed, [
            (AgentId(0), AgentKind::Guard, Coord::new(1, 2)),
            (AgentId(2), AgentKind::Intruder, Coord::new(3, 3)),
        ]);

        assert_eq!(map.remove_agent(AgentId(2)), Some(Coord::new(3, 3)));
        assert_eq!(map.agent_at(Coord::new(3, 3)), None);
        assert_eq!(map.remove_agent(AgentId(2)), None);
    }

    #[test]
    fn one_agent_per_tile() {
        let mut map = open(5, 5);
        map.register_agent(AgentId(0), AgentKind::Guard, Coord::new(1, 1)).unwrap();
        map.register_agent(AgentId(1), AgentKind::Guard, Coord::new(2, 1)).unwrap();
        let err = map.move_agent(AgentId(1), Coord::new(1, 1)).unwrap_err();
        assert!(matches!(err, WorldError::Occupied { by, .. } if by == AgentId(0)));
        assert_eq!(map.agent_position(AgentId(1)), Some(Coord::new(2, 1)));
    }

    #[test]
    fn cannot_enter_walls_or_leave_map() {
        let mut map = TileMapBuilder::new(3, 3).wall(Coord::new(1, 1)).build().unwrap();
        assert!(matches!(
            map.register_agent(AgentId(0), AgentKind::Guard, Coord::new(1, 1)),
            Err(WorldError::Blocked(_))
        ));
        map.register_agent(AgentId(0), AgentKind::Guard, Coord::new(0, 0)).unwrap();
        assert!(map.move_agent(AgentId(0), Coord::new(-1, 0)).is_err());
        assert!(matches!(
            map.move_agent(AgentId(7), Coord::new(0, 1)),
            Err(WorldError::UnknownAgent(_))
        ));
    }
}

// ── Markers and exploration ───────────────────────────────────────────────────

#[cfg(test)]
mod markers_and_coverage {
    use super::*;

    #[test]
    fn markers_attach_to_tiles() {
        let mut map = open(4, 4);
        let c = Coord::new(2, 2);
        let a = map.place_marker(c, MarkerKind::Danger, AgentKind::Guard, AgentId(0), Tick(3)).unwrap();
        let b = map.place_marker(c, MarkerKind::Visited, AgentKind::Intruder, AgentId(1), Tick(4)).unwrap();
        assert_ne!(a, b);
        let kinds: Vec<_> = map.markers_at(c).map(|m| m.kind).collect();
        assert_eq!(kinds, [MarkerKind::Danger, MarkerKind::Visited]);
        assert_eq!(map.tile(c).unwrap().markers, [a, b]);
        assert_eq!(map.markers_at(Coord::new(0, 0)).count(), 0);
        assert_eq!(map.markers_at(Coord::new(-3, 0)).count(), 0);
        assert!(map.place_marker(Coord::new(9, 9), MarkerKind::Target, AgentKind::Guard, AgentId(0), Tick(0)).is_err());
    }

    #[test]
    fn coverage_counts_walkable_tiles_per_side() {
        let mut map = TileMapBuilder::new(2, 2).wall(Coord::new(1, 1)).build().unwrap();
        assert_eq!(map.coverage(AgentKind::Guard), 0.0);
        assert!(map.mark_explored(Coord::new(0, 0), AgentKind::Guard).unwrap());
        assert!(!map.mark_explored(Coord::new(0, 0), AgentKind::Guard).unwrap());
        assert!((map.coverage(AgentKind::Guard) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(map.coverage(AgentKind::Intruder), 0.0);
        // Exploring a wall does not raise coverage.
        map.mark_explored(Coord::new(1, 1), AgentKind::Guard).unwrap();
        assert!((map.coverage(AgentKind::Guard) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn target_area_lookup() {
        let map = TileMapBuilder::new(6, 6)
            .target_area(Rect::new(Coord::new(4, 4), Coord::new(5, 5)))
            .build()
            .unwrap();
        assert!(map.is_target(Coord::new(5, 4)));
        assert_eq!(map.coords_of(TileKind::Target).count(), 4);
    }
}
