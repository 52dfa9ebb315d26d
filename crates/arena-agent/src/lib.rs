//! `arena-agent` — Structure-of-Arrays agent storage and belief graphs.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs`, `AgentStatus`       |
//! | [`node`]    | `TileNode` — one tile as one agent believes it              |
//! | [`belief`]  | `BeliefMap` — an agent's whole planning graph, `Sighting`   |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                   |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for belief maps (and the world's tables).           |
//! | `serde`   | Derives `Serialize`/`Deserialize` on value types.          |

pub mod belief;
pub mod builder;
pub mod node;
pub mod store;


pub use belief::{BeliefMap, Sighting};
pub use builder::{AgentStoreBuilder, DEFAULT_SPEED};
pub use node::TileNode;
pub use store::{AgentRngs, AgentStatus, AgentStore};
