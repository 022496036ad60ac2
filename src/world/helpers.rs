use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Vectors shorter than this are left alone by [`clamp_length`].
const MIN_CLAMP_LEN: f32 = 0.0001;

#[inline(always)]
pub fn vec_len(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Scale `v` down so its length does not exceed `max_len`.
pub fn clamp_length(v: Vec2, max_len: f32) -> Vec2 {
    let len = vec_len(v);
    if len <= MIN_CLAMP_LEN || len < max_len {
        return v;
    }
    v * (max_len / len)
}

/// Wrap an angle into `(-π, π]`.
///
/// Values already in range come back bit-identical, so wrapping twice is a
/// no-op.  Both corrections below are exact in f32 (operands within a
/// factor of two of each other).
pub fn wrap_angle(angle: f32) -> f32 {
    let out = angle % TAU;
    if out > PI {
        out - TAU
    } else if out <= -PI {
        out + TAU
    } else {
        out
    }
}
