//! Grid raycaster: one DDA ray per screen column over a tile map, rasterised
//! into a 3-channel software frame-buffer.
//!
//! Per tick the data flows strictly downstream:
//!
//! ```text
//! sim::player_movement → sim::resolve_collision → engine::cast_ray (× width)
//!                      → renderer::Software::draw_column (× width) → present
//! ```
//!
//! Window creation and event polling for the demo live in
//! `src/bin/raycast.rs`; the library never touches the platform.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::EngineConfig;
pub use engine::{Engine, TickOutcome};
