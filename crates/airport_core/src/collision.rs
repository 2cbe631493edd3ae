//! Pairwise proximity tests between aircraft.

use crate::error::Result;
use crate::world::{Agent, World};

/// Euclidean distance between two points of equal dimension.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

/// True when the agents are strictly closer than the sum of their sizes.
pub fn collides(a: &Agent, b: &Agent) -> bool {
    distance(a.position(), b.position()) < a.size + b.size
}

/// Number of agents colliding with the agent in slot `index`. Its own slot
/// is skipped unless `count_self` is set (legacy reward scale, where the
/// zero-distance self pair always counts).
pub fn collision_count(world: &World, index: usize, count_self: bool) -> Result<usize> {
    let agent = world.agent(index)?;
    let hits = world
        .agents
        .iter()
        .enumerate()
        .filter(|(slot, _)| count_self || *slot != index)
        .filter(|(_, other)| collides(agent, other))
        .count();
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::AgentState;

    fn agent_at(index: usize, x: f64) -> Agent {
        Agent {
            name: format!("Aircraft {}", index),
            collide: true,
            silent: true,
            movable: true,
            size: 0.15,
            color: [0.0; 3],
            state: AgentState {
                position: vec![x],
                velocity: vec![0.0],
                comm: vec![0.0],
            },
            phase: None,
            flight: None,
        }
    }

    #[test]
    fn test_collision_threshold() {
        let a = agent_at(0, 0.0);
        assert!(collides(&a, &agent_at(1, 0.29)));
        assert!(!collides(&a, &agent_at(1, 0.31)));
    }

    #[test]
    fn test_touching_is_not_collision() {
        let a = Agent {
            size: 0.25,
            ..agent_at(0, 1.0)
        };
        let b = Agent {
            size: 0.25,
            ..agent_at(1, 1.5)
        };
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_multi_dim_distance() {
        assert!((distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!((distance(&[2.0], &[2.0]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_self_pair_excluded_by_default() {
        let mut world = World::new(1, 0);
        world.agents = vec![agent_at(0, 0.0), agent_at(1, 0.1), agent_at(2, 5.0)];
        assert_eq!(collision_count(&world, 0, false).unwrap(), 1);
        // Legacy scale also counts the zero-distance self pair
        assert_eq!(collision_count(&world, 0, true).unwrap(), 2);
    }

    #[test]
    fn test_duplicate_agents_collide_with_each_other() {
        let mut world = World::new(1, 0);
        world.agents = vec![agent_at(0, 0.0); 4];
        assert_eq!(collision_count(&world, 0, false).unwrap(), 3);
        assert_eq!(collision_count(&world, 3, false).unwrap(), 3);
        assert_eq!(collision_count(&world, 3, true).unwrap(), 4);
    }

    #[test]
    fn test_count_for_missing_agent() {
        let world = World::new(1, 0);
        assert!(collision_count(&world, 0, false).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: collision is symmetric
            #[test]
            fn prop_collision_symmetric(x in -5.0f64..5.0, y in -5.0f64..5.0) {
                let a = agent_at(0, x);
                let b = agent_at(1, y);
                prop_assert_eq!(collides(&a, &b), collides(&b, &a));
            }

            /// Property: distance is non-negative and zero on identical points
            #[test]
            fn prop_distance_non_negative(x in -5.0f64..5.0, y in -5.0f64..5.0) {
                prop_assert!(distance(&[x], &[y]) >= 0.0);
                prop_assert!(distance(&[x], &[x]).abs() < 1e-12);
            }
        }
    }
}
