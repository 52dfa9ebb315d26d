//! `arena-movement` — per-tick movement and collision resolution.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`engine`]  | `MovementEngine` — applies one `Move`, `MoveTotals`              |
//! | [`outcome`] | `MoveOutcome`, `BlockCause`                                      |
//! | [`sound`]   | `agents_within_earshot` — ambient hearing check                  |
//! | [`error`]   | `MovementError`, `MovementResult<T>`                             |
//!
//! # Movement model
//!
//! Moves are discrete: a turn takes a tick, a forward move covers up to
//! `speed` tiles in one tick.  A blocked move leaves the agent where it was
//! and hands back a veer heading; arena-sim queues that turn through
//! `Algorithm::interrupt` so it happens on the agent's next tick.
//!
//! The engine mutates the map's position registry and the agent store
//! together, so the two never disagree after `resolve` returns.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod sound;


pub use engine::{MoveTotals, MovementEngine};
pub use error::{MovementError, MovementResult};
pub use outcome::{BlockCause, MoveOutcome};
pub use sound::agents_within_earshot;
