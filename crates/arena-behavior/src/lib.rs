//! `arena-behavior` — agent decision algorithms and move types.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`action`]    | `Action`, `Move`, `Decision`                                  |
//! | [`context`]   | `PlanContext<'a>` — read-only per-agent tick snapshot         |
//! | [`model`]     | `Algorithm` trait, `MoveQueue`                                |
//! | [`patrol`]    | `PheromonePatrol` — weakest-pheromone neighbour policy        |
//! | [`pursuit`]   | `AStarPursuit`, `find_path`, `select_goal`                    |
//! | [`random`]    | `RandomWalk` — baseline                                       |
//! | [`algorithm`] | `AgentAlgorithm` enum, `AlgorithmKind` tag                    |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! The tick loop in arena-sim works as follows:
//!
//! 1. **Intent phase** (parallel with the `parallel` feature): for every
//!    active agent, build a `PlanContext` over the start-of-tick map and
//!    that agent's belief, then call `Algorithm::next_move`.  Algorithms
//!    mutate only their own queue.
//!
//! 2. **Apply phase** (sequential): consume the collected `Decision`s in
//!    ascending `AgentId` order, drop pheromones, and hand each `Move` to
//!    the movement resolver.  Blocked agents get `Algorithm::interrupt`.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                          |
//! |-----------|-------------------------------------------------|
//! | `fx-hash` | FxHash for A* bookkeeping.                      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on tag types. |

pub mod action;
pub mod algorithm;
pub mod context;
pub mod error;
pub mod model;
pub mod patrol;
pub mod pursuit;
pub mod random;

#[cfg(test)]
mod tests;

pub use action::{Action, Decision, Move};
pub use algorithm::{AgentAlgorithm, AlgorithmKind};
pub use context::PlanContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::{Algorithm, MoveQueue};
pub use patrol::PheromonePatrol;
pub use pursuit::{AStarPursuit, find_path, select_goal};
pub use random::RandomWalk;
