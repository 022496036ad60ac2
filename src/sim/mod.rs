mod collision;
mod components;
mod controller;
mod tic;

pub use collision::{Push, Quadrant, resolve_collision};
pub use components::{Buttons, InputCmd, PlayerState};
pub use controller::{apply_mouse, player_movement};
pub use tic::{TIC, TIC_RATE, TicClock};
