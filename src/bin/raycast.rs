use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use minifb::{Key, MouseMode, Scale, Window, WindowOptions};

use raycast_rs::{
    Engine, EngineConfig, TickOutcome,
    config::WINDOW_TITLE,
    renderer::{Software, bgr_to_0rgb},
    sim::{Buttons, InputCmd, TicClock},
    world::{Level, WallTexture},
};

/// First-person grid ray caster.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Wall texture image; walls are flat-shaded if it cannot be loaded.
    #[arg(short, long, default_value = "bricks.png")]
    texture: PathBuf,

    /// Window pixels per frame pixel (1, 2 or 4).
    #[arg(short, long, default_value_t = raycast_rs::config::SCALE_FACTOR)]
    scale: usize,
}

const KEYMAP: [(Key, Buttons); 8] = [
    (Key::W, Buttons::FORWARD),
    (Key::S, Buttons::BACK),
    (Key::A, Buttons::STRAFE_LEFT),
    (Key::D, Buttons::STRAFE_RIGHT),
    (Key::Left, Buttons::TURN_LEFT),
    (Key::Right, Buttons::TURN_RIGHT),
    (Key::LeftShift, Buttons::SPRINT),
    (Key::Escape, Buttons::QUIT),
];

fn window_scale(factor: usize) -> Scale {
    match factor {
        0 | 1 => Scale::X1,
        2 | 3 => Scale::X2,
        4..=7 => Scale::X4,
        _ => Scale::X8,
    }
}

fn poll_input(win: &Window, last_mouse_x: &mut Option<f32>) -> InputCmd {
    let mut cmd = InputCmd::default();
    for (key, button) in KEYMAP {
        if win.is_key_down(key) {
            cmd.buttons |= button;
        }
    }

    // minifb only reports the absolute cursor, so turning stops once the
    // cursor reaches the screen edge.
    if let Some((x, _)) = win.get_mouse_pos(MouseMode::Pass)
        && let Some(prev) = last_mouse_x.replace(x)
    {
        cmd.mouse_dx = x - prev;
    }
    cmd
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let texture = match WallTexture::open(&args.texture) {
        Ok(tex) => Some(tex),
        Err(e) => {
            warn!("{}: {e}; falling back to flat shading", args.texture.display());
            None
        }
    };

    let cfg = EngineConfig::default();
    let (w, h) = (cfg.screen_width, cfg.screen_height);
    let mut engine = Engine::new(cfg, Level::sample(), texture);
    let mut renderer = Software::new(w, h);
    let mut words = vec![0u32; w * h];

    let mut win = Window::new(
        WINDOW_TITLE,
        w,
        h,
        WindowOptions {
            scale: window_scale(args.scale),
            ..WindowOptions::default()
        },
    )
    .context("failed to open window")?;

    let mut clock = TicClock::default();
    let mut last = Instant::now();
    let mut last_mouse_x = None;

    // ─────────── benchmarking state ───────────
    let mut acc_time = Duration::ZERO;
    let mut acc_ticks = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() {
        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;

        if !due {
            win.update();
            std::thread::sleep(Duration::from_millis(1));
            continue;
        }

        let cmd = poll_input(&win, &mut last_mouse_x);
        let mut shown = Ok(());
        let outcome = engine.tick(&cmd, &mut renderer, |fb, fw, fh| {
            bgr_to_0rgb(fb, &mut words);
            shown = win.update_with_buffer(&words, fw, fh);
        });
        if outcome == TickOutcome::Quit {
            break;
        }
        shown.context("failed to present frame")?;

        acc_time += now.elapsed();
        acc_ticks += 1;
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_ticks as f64;
            info!("avg tick: {avg_ms:.2} ms over {acc_ticks} ticks");
            acc_time = Duration::ZERO;
            acc_ticks = 0;
            last_print = Instant::now();
        }
    }

    info!("bye");
    Ok(())
}
