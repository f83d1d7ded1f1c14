//! Trials of Meniskos.
//!
//! ```bash
//! cargo run --release -- --scale 4 --level 0
//! ```

use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use std::time::{Duration, Instant};

use meniskos::{
    audio::{AudioBackend, LogAudio, NullAudio},
    config::{Config, SCREEN_H, SCREEN_W},
    defs::{levels, textures},
    engine::Engine,
    renderer::Software,
    sim::{Action, Flow, InputCmd, InputSource, Sim},
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Window scale: 1, 2, 4 or 8.
    #[arg(long, default_value_t = 4)]
    scale: usize,
    /// Campaign level to start on (0-based).
    #[arg(long, default_value_t = 0)]
    level: usize,
    /// Disable all audio.
    #[arg(long)]
    mute: bool,
    #[arg(long, default_value_t = 255)]
    volume: u8,
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

impl From<Args> for Config {
    fn from(a: Args) -> Self {
        Self {
            scale: a.scale,
            start_level: a.level,
            mute: a.mute,
            volume: a.volume,
            target_fps: a.fps,
        }
    }
}

fn window_scale(scale: usize) -> anyhow::Result<Scale> {
    Ok(match scale {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        n => anyhow::bail!("unsupported window scale {n} (use 1, 2, 4 or 8)"),
    })
}

/// Keyboard bindings.
struct Keyboard<'a>(&'a Window);

impl InputSource for Keyboard<'_> {
    fn is_down(&self, action: Action) -> bool {
        let keys: &[Key] = match action {
            Action::Forward => &[Key::Up, Key::W],
            Action::Back => &[Key::Down, Key::S],
            Action::TurnLeft => &[Key::Left, Key::A],
            Action::TurnRight => &[Key::Right, Key::D],
            Action::Attack => &[Key::Space],
            Action::Block => &[Key::LeftShift, Key::RightShift],
            Action::Confirm => &[Key::Enter],
            Action::Cancel => &[Key::Escape],
        };
        keys.iter().any(|&k| self.0.is_key_down(k))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    log::debug!("{config:?}");

    let bank = textures::builtin_bank()?;
    let sim = Sim::new(levels::campaign()?, config.start_level)?;
    let audio: Box<dyn AudioBackend> = if config.mute {
        Box::new(NullAudio)
    } else {
        Box::new(LogAudio)
    };
    let mut engine = Engine::new(Software::default(), sim, bank, audio, &config);

    let mut win = Window::new(
        "Trials of Meniskos",
        SCREEN_W,
        SCREEN_H,
        WindowOptions {
            scale: window_scale(config.scale)?,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(config.target_fps);

    let palette = engine.texture_bank.palette().0;
    let mut rgb = vec![0u32; SCREEN_W * SCREEN_H];
    let mut prev = InputCmd::default();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() {
        let t0 = Instant::now();

        /* draw & present */
        let mut presented = Ok(());
        engine.render_frame(|fb, w, h| {
            for (dst, &idx) in rgb.iter_mut().zip(fb) {
                *dst = palette[idx as usize];
            }
            acc_time += t0.elapsed();
            acc_frames += 1;
            presented = win.update_with_buffer(&rgb, w, h);
        });
        presented?;

        /* one InputCmd per tic */
        let cmd = InputCmd::poll(&Keyboard(&win), &prev);
        prev = cmd;
        if engine.apply_input(&cmd) == Flow::Quit {
            break;
        }

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            log::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }

    log::info!("bye after {} frames", engine.frames());
    Ok(())
}
