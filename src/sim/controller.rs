//! Input → velocity → position, one Euler step per tick.

use glam::Vec2;

use super::{Buttons, InputCmd, PlayerState};
use crate::config::EngineConfig;
use crate::world::{clamp_length, vec_len};

/// Turn by relative mouse motion.
pub fn apply_mouse(player: &mut PlayerState, mouse_dx: f32, cfg: &EngineConfig) {
    if mouse_dx != 0.0 {
        player.turn(mouse_dx * cfg.mouse_sensitivity);
    }
}

/// Run one tick of player control: mouse and key turning, acceleration,
/// friction, speed cap and integration.
pub fn player_movement(player: &mut PlayerState, cmd: &InputCmd, cfg: &EngineConfig) {
    apply_mouse(player, cmd.mouse_dx, cfg);

    /* 1. turn */
    let mut turn = 0.0;
    if cmd.held(Buttons::TURN_LEFT) {
        turn -= cfg.turn_speed;
    }
    if cmd.held(Buttons::TURN_RIGHT) {
        turn += cfg.turn_speed;
    }
    player.turn(turn);

    /* 2. wish acceleration relative to facing */
    let fwd = player.forward();
    let right = player.right();
    let mut accel = Vec2::ZERO;
    if cmd.held(Buttons::STRAFE_LEFT) {
        accel -= right;
    }
    if cmd.held(Buttons::STRAFE_RIGHT) {
        accel += right;
    }
    if cmd.held(Buttons::BACK) {
        accel -= fwd;
    }
    if cmd.held(Buttons::FORWARD) {
        accel += fwd;
    }

    let max_speed = if cmd.held(Buttons::SPRINT) {
        cfg.sprint_speed
    } else {
        cfg.walk_speed
    };

    let accel = clamp_length(accel, cfg.accel);
    player.vel += accel;

    /* 3. friction only while coasting */
    if vec_len(accel) < cfg.stop_threshold {
        player.vel *= cfg.friction;
        if vec_len(player.vel) < cfg.stop_threshold {
            player.vel = Vec2::ZERO;
        }
    }

    /* 4. cap & integrate */
    player.vel = clamp_length(player.vel, max_speed);
    player.pos += player.vel;
}
