//! `arena-vision` — what an agent can see from where it stands.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `Vision` trait, `VisionModel` enum, `effective_distance`  |
//! | [`rectangle`] | `RectangleVision` — three parallel lanes                  |
//! | [`cone`]      | `ConeVision` — widening triangular sweep                  |
//!
//! # Guarantees (both models)
//!
//! - Never reports a tile outside the map; no lookup is ever made off-map.
//! - Never reports a tile beyond a wall on the same sight line.  The wall
//!   itself is reported.
//! - Never looks further than the view distance it is given.
//!
//! `observe` is pure.  Marking tiles as explored is a separate, mutating
//! step ([`Vision::observe_and_mark`]) so the simulation can perceive
//! against a frozen map and write back later.

pub mod cone;
pub mod model;
pub mod rectangle;


pub use cone::ConeVision;
pub use model::{Vision, VisionModel, effective_distance};
pub use rectangle::RectangleVision;
