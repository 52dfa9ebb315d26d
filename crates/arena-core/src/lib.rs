//! `arena-core` — foundational types for the patrol arena simulator.
//!
//! This crate is a dependency of every other `arena-*` crate.  It has no
//! `arena-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `MarkerId`                                 |
//! | [`geom`]        | `Coord`, `Heading`, `Pose`, `Rect`                    |
//! | [`kind`]        | `AgentKind` (guard / intruder)                        |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`                                           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Coordinate convention
//!
//! `x` grows east, `y` grows south.  `Heading::North` therefore steps to
//! `y - 1`.  Tile `(0, 0)` is the north-west corner of every map.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geom::{Coord, Heading, Pose, Rect};
pub use ids::{AgentId, MarkerId};
pub use kind::AgentKind;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
