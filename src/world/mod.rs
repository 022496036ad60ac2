mod grid;
pub mod helpers;
mod level;
mod texture;

pub use grid::TileGrid;

pub use helpers::{clamp_length, vec_len, wrap_angle};

pub use level::{Grid, LEVEL_SIZE_X, LEVEL_SIZE_Y, Level, PLAYER_START, SAMPLE_GRID};

pub use texture::{ChannelOrder, Rgb, TextureError, WallTexture};
