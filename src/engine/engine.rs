use log::{debug, info, trace};

use crate::{
    config::{EngineConfig, Projection},
    engine::raycast::{RayHit, cast_ray, column_angle},
    renderer::{Renderer, WallColumn},
    sim::{Buttons, InputCmd, PlayerState, Push, player_movement, resolve_collision},
    world::{Level, WallTexture},
};

/// Whether the caller should keep ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Everything one running game owns: map, player, texture and the
/// per-column scratch reused every tick.
pub struct Engine {
    cfg: EngineConfig,
    proj: Projection,
    level: Level,
    player: PlayerState,
    texture: Option<WallTexture>,
    hits: Vec<RayHit>,
}

impl Engine {
    /// Place the player on the level's start tile.  A missing texture is
    /// fine: walls are flat-shaded instead.
    pub fn new(cfg: EngineConfig, level: Level, texture: Option<WallTexture>) -> Self {
        let player = PlayerState::new(level.spawn(), level.start_angle);
        let proj = Projection::from_config(&cfg);

        info!(
            "level `{}` {}x{}, {}x{} frame, {}",
            level.name,
            level.grid.width(),
            level.grid.height(),
            proj.width,
            proj.height,
            match &texture {
                Some(t) => format!("{}x{} wall texture", t.width(), t.height()),
                None => "flat-shaded walls".to_string(),
            }
        );

        Self {
            cfg,
            proj,
            level,
            player,
            texture,
            hits: Vec::with_capacity(proj.width),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.proj
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[inline]
    pub fn texture(&self) -> Option<&WallTexture> {
        self.texture.as_ref()
    }

    /// Ray hits from the last [`cast_all`](Self::cast_all), one per column.
    #[inline]
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    /// Run one full tick and hand the finished frame to `submit`.
    ///
    /// Returns [`TickOutcome::Quit`] without simulating when quit is held.
    pub fn tick<R, F>(&mut self, cmd: &InputCmd, renderer: &mut R, submit: F) -> TickOutcome
    where
        R: Renderer,
        F: FnOnce(&[u8], usize, usize),
    {
        if cmd.held(Buttons::QUIT) {
            info!("quit requested");
            return TickOutcome::Quit;
        }

        self.step_player(cmd);
        self.cast_all();
        self.draw_all(renderer);
        renderer.end_frame(submit);

        trace!(
            "pos ({:.3}, {:.3}) angle {:.3} vel {:.4}",
            self.player.pos.x,
            self.player.pos.y,
            self.player.angle,
            self.player.vel.length()
        );
        TickOutcome::Continue
    }

    /// Move the player, then eject it from any wall it ended up in.
    pub fn step_player(&mut self, cmd: &InputCmd) -> Push {
        player_movement(&mut self.player, cmd, &self.cfg);
        let push = resolve_collision(&mut self.player, &self.level.grid, &self.cfg);
        if push.any() {
            debug!(
                "collision push x={} y={} -> ({:.4}, {:.4})",
                push.x, push.y, self.player.pos.x, self.player.pos.y
            );
        }
        push
    }

    /// Cast one ray per screen column from the current player pose.
    pub fn cast_all(&mut self) {
        let origin = self.player.pos;
        let forward = self.player.forward();
        let angle = self.player.angle;

        self.hits.clear();
        self.hits.extend((0..self.proj.width).map(|x| {
            let ray_angle = column_angle(x, angle, &self.proj);
            cast_ray(&self.level.grid, origin, ray_angle, forward, &self.cfg)
        }));
    }

    /// Rasterise every cast column into `renderer`.
    pub fn draw_all<R: Renderer>(&self, renderer: &mut R) {
        renderer.begin_frame(self.proj.width, self.proj.height);
        for (x, hit) in self.hits.iter().enumerate() {
            let column = WallColumn::from_hit(hit, &self.proj, &self.cfg);
            renderer.draw_column(x, &column, self.texture.as_ref());
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Side;
    use crate::renderer::{Software, brightness};
    use crate::world::{ChannelOrder, Rgb};
    use glam::{IVec2, Vec2};

    fn engine() -> Engine {
        Engine::new(EngineConfig::default(), Level::sample(), None)
    }

    /// Red bricks with grey mortar, 16×8 texels per brick.
    fn bricks(width: usize, height: usize) -> WallTexture {
        let mut px = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            let shift = if (y / 8) % 2 == 0 { 0 } else { 8 };
            for x in 0..width {
                let mortar = y % 8 == 0 || (x + shift) % 16 == 0;
                px.extend_from_slice(if mortar { &[0xA0; 3] } else { &[0x9C, 0x4A, 0x32] });
            }
        }
        WallTexture::from_raw(width, height, width * 3, 3, ChannelOrder::Rgb, px).unwrap()
    }

    #[test]
    fn spawns_on_tile_centre() {
        let e = engine();
        assert_eq!(e.player().pos, Vec2::new(3.5, 3.5));
        assert_eq!(e.player().angle, 0.0);
    }

    #[test]
    fn centre_column_matches_axis_aligned_cast() {
        let mut e = engine();
        e.cast_all();
        assert_eq!(e.hits().len(), e.projection().width);

        let centre = e.hits()[e.projection().width / 2];
        assert!((centre.depth - 3.5).abs() < 1e-5, "depth {}", centre.depth);
        assert_eq!(centre.cell, IVec2::new(7, 3));
        assert_eq!(centre.side, Side::Right);
    }

    #[test]
    fn flat_wall_depth_is_constant_across_a_straight_wall() {
        // facing the east border from x = 3.5: every column that hits the
        // x = 7 face reports the same perpendicular depth
        let mut e = engine();
        e.cast_all();
        for hit in e.hits() {
            if hit.side == Side::Right && hit.cell.x == 7 {
                assert!((hit.depth - 3.5).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn flat_shaded_frame_is_grey() {
        let mut e = engine();
        let mut sw = Software::default();
        let mut bytes = Vec::new();
        let out = e.tick(&InputCmd::default(), &mut sw, |buf, w, h| {
            assert_eq!((w, h), (512, 384));
            bytes = buf.to_vec();
        });
        assert_eq!(out, TickOutcome::Continue);
        assert_eq!(bytes.len(), 512 * 384 * 3);

        let fb = sw.frame();
        let x = 256;
        let expect = Rgb::grey((brightness(3.5, 8.0) * 255.0) as u8);
        assert_eq!(fb.pixel(x, 192), expect);
        assert_eq!(fb.pixel(x, 0), Rgb::BLACK);
        assert_eq!(fb.pixel(x, 383), Rgb::BLACK);
        // no texture: every channel of every pixel is equal
        for px in bytes.chunks_exact(3) {
            assert!(px[0] == px[1] && px[1] == px[2]);
        }
    }

    #[test]
    fn textured_frame_uses_texture_colours() {
        let tex = bricks(64, 64);
        let mut e = Engine::new(EngineConfig::default(), Level::sample(), Some(tex));
        let mut sw = Software::default();
        e.tick(&InputCmd::default(), &mut sw, |_, _, _| {});
        // the centre column straddles a mortar line; look one column over
        let fb = sw.frame();
        let coloured = (150..230)
            .map(|y| fb.pixel(250, y))
            .any(|px| px.r != px.g || px.g != px.b);
        assert!(coloured);
    }

    #[test]
    fn quit_skips_the_tick() {
        let mut e = engine();
        let before = *e.player();
        let cmd = InputCmd {
            buttons: Buttons::QUIT | Buttons::FORWARD,
            mouse_dx: 0.0,
        };
        let mut called = false;
        let out = e.tick(&cmd, &mut Software::default(), |_, _, _| called = true);
        assert_eq!(out, TickOutcome::Quit);
        assert!(!called);
        assert_eq!(*e.player(), before);
    }

    #[test]
    fn walking_into_a_wall_never_ends_inside_it() {
        let mut e = engine();
        let cmd = InputCmd {
            buttons: Buttons::FORWARD | Buttons::SPRINT,
            mouse_dx: 0.0,
        };
        for _ in 0..600 {
            e.step_player(&cmd);
            let p = e.player().pos;
            assert!(
                !e.level().grid.is_solid(p.x.floor() as i32, p.y.floor() as i32),
                "inside wall at {p}"
            );
        }
        // stopped against the east border face
        assert!((e.player().pos.x - (7.0 - e.config().block_offset)).abs() < 1e-4);
        assert_eq!(e.player().vel.x, 0.0);
    }
}
