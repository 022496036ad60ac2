use bitflags::bitflags;
use glam::Vec2;

use crate::world::wrap_angle;

/// Player kinematic state in grid units.
///
/// `angle` is kept wrapped to `(-π, π]`; 0 looks along +X, positive turns
/// towards +Y (screen "down" on the map).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
}

impl PlayerState {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: wrap_angle(angle),
        }
    }

    /// Unit vector the player faces.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s)
    }

    /// Unit vector a quarter turn clockwise from [`forward`](Self::forward).
    #[inline(always)]
    pub fn right(&self) -> Vec2 {
        let (s, c) = (self.angle + std::f32::consts::FRAC_PI_2).sin_cos();
        Vec2::new(c, s)
    }

    #[inline]
    pub fn turn(&mut self, delta: f32) {
        self.angle = wrap_angle(self.angle + delta);
    }
}

bitflags! {
    /// Keys held during the current tick.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const FORWARD      = 1 << 0;
        const BACK         = 1 << 1;
        const STRAFE_LEFT  = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
        const TURN_LEFT    = 1 << 4;
        const TURN_RIGHT   = 1 << 5;
        const SPRINT       = 1 << 6;
        const QUIT         = 1 << 7;
    }
}

/// Everything the platform layer polled for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub buttons: Buttons,
    /// Relative mouse X motion accumulated since the previous tick.
    pub mouse_dx: f32,
}

impl InputCmd {
    #[inline]
    pub fn held(&self, b: Buttons) -> bool {
        self.buttons.contains(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let p = PlayerState::new(Vec2::ZERO, 0.3);
        let f = p.forward();
        let r = p.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn right_at_zero_points_down_the_map() {
        let p = PlayerState::new(Vec2::ZERO, 0.0);
        assert!((p.right() - Vec2::new(0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn held_checks_all_bits() {
        let cmd = InputCmd {
            buttons: Buttons::FORWARD | Buttons::SPRINT,
            mouse_dx: 0.0,
        };
        assert!(cmd.held(Buttons::FORWARD));
        assert!(cmd.held(Buttons::FORWARD | Buttons::SPRINT));
        assert!(!cmd.held(Buttons::BACK));
    }
}
