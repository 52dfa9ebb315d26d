//! `arena-world` — the ground-truth environment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`tile`]      | `Tile`, `TileKind`                                         |
//! | [`pheromone`] | `Pheromone`, `PheromoneConfig`                             |
//! | [`adjacent`]  | `Adjacent<T>` four-way neighbour bundle                    |
//! | [`marker`]    | `Marker`, `MarkerKind`                                     |
//! | [`map`]       | `TileMap` (grid + registries), `PortalLink`                |
//! | [`builder`]   | `TileMapBuilder` (fluent construction + validation)        |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the coordinate-keyed tables.                    |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public value types.   |

pub mod adjacent;
pub mod builder;
pub mod error;
pub mod map;
pub mod marker;
pub mod pheromone;
pub mod tile;

#[cfg(test)]
mod tests;

pub use adjacent::Adjacent;
pub use builder::TileMapBuilder;
pub use error::{WorldError, WorldResult};
pub use map::{PortalLink, TileMap};
pub use marker::{Marker, MarkerKind};
pub use pheromone::{Pheromone, PheromoneConfig};
pub use tile::{Tile, TileKind};
