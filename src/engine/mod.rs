//! Frame orchestrator.
//!
//! One call to [`Engine::frame`] is one rendered frame and one simulation
//! tic, in a fixed order: planes, walls, enemy update, sprites, HUD,
//! present, then input.

use crate::{
    audio::{AudioBackend, Mixer, Track},
    config::{Config, SCREEN_H, SCREEN_W},
    renderer::{HudView, Pixel, Renderer},
    sim::{Flow, GameMode, InputCmd, Sim},
    world::TextureBank,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

pub struct Engine<R: Renderer, A: AudioBackend> {
    pub renderer: R,
    pub sim: Sim,
    pub texture_bank: TextureBank,
    pub mixer: Mixer<A>,
    pub screen: Screen,
    frames: u64,
}

impl<R: Renderer, A: AudioBackend> Engine<R, A> {
    pub fn new(renderer: R, sim: Sim, texture_bank: TextureBank, audio: A, config: &Config) -> Self {
        let volume = if config.mute { 0 } else { config.volume };
        Self {
            renderer,
            sim,
            texture_bank,
            mixer: Mixer::new(audio, volume),
            screen: Screen {
                w: SCREEN_W,
                h: SCREEN_H,
            },
            frames: 0,
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one frame and hand the finished buffer to `submit`.
    ///
    /// Enemies act between the wall and sprite passes, so the sprites drawn
    /// this frame already show their new positions and textures.
    pub fn render_frame(&mut self, submit: impl FnOnce(&[Pixel], usize, usize)) {
        self.renderer.begin_frame(self.screen.w, self.screen.h);

        let camera = self.sim.player.camera;
        let level = self.sim.level();
        self.renderer.draw_planes(&camera, level, &self.texture_bank);
        self.renderer.draw_walls(&camera, level, &self.texture_bank);

        self.sim.update_enemies();

        self.renderer
            .draw_sprites(&camera, &self.sim.sprites, &self.texture_bank);
        self.renderer
            .draw_hud(&HudView::from_sim(&self.sim), &self.texture_bank);

        self.flush_audio();
        self.renderer.end_frame(submit);
        self.frames += 1;
    }

    /// Feed one tic of input to the simulation.
    pub fn apply_input(&mut self, cmd: &InputCmd) -> Flow {
        let before = self.sim.mode();
        let flow = self.sim.handle_input(cmd);
        if self.sim.mode() != before {
            log::info!("mode {:?} -> {:?}", before, self.sim.mode());
        }
        self.flush_audio();
        if flow == Flow::Quit {
            self.mixer.stop_track();
        }
        flow
    }

    /// A whole frame: render, present, then input.
    pub fn frame(&mut self, cmd: &InputCmd, submit: impl FnOnce(&[Pixel], usize, usize)) -> Flow {
        self.render_frame(submit);
        self.apply_input(cmd)
    }

    /// Forward queued cues and keep the right music track running.
    fn flush_audio(&mut self) {
        let track = match self.sim.mode() {
            GameMode::Menu => Track::Menu,
            _ => Track::Dungeon,
        };
        self.mixer.play_track(track);
        self.mixer.play_all(self.sim.take_cues());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioEvent, RecordingAudio, Sound};
    use crate::defs::{levels, textures};
    use crate::renderer::Software;
    use crate::sim::Buttons;

    fn engine() -> Engine<Software, RecordingAudio> {
        let sim = Sim::new(levels::campaign().unwrap(), 0).unwrap();
        let bank = textures::builtin_bank().unwrap();
        Engine::new(
            Software::default(),
            sim,
            bank,
            RecordingAudio::default(),
            &Config::default(),
        )
    }

    #[test]
    fn frame_presents_full_screen_buffer() {
        let mut e = engine();
        let mut seen = None;
        e.frame(&InputCmd::default(), |fb, w, h| seen = Some((fb.len(), w, h)));
        assert_eq!(seen, Some((SCREEN_W * SCREEN_H, SCREEN_W, SCREEN_H)));
        assert_eq!(e.frames(), 1);
    }

    #[test]
    fn music_follows_mode_without_restarts() {
        let mut e = engine();
        e.frame(&InputCmd::default(), |_, _, _| {});
        e.frame(&InputCmd::new(Buttons::CONFIRM), |_, _, _| {});
        e.frame(&InputCmd::default(), |_, _, _| {});

        let music: Vec<AudioEvent> = e
            .mixer
            .backend()
            .events
            .iter()
            .copied()
            .filter(|ev| matches!(ev, AudioEvent::Music(_)))
            .collect();
        assert_eq!(
            music,
            vec![AudioEvent::Music(Track::Menu), AudioEvent::Music(Track::Dungeon)]
        );
        assert!(e.mixer.backend().sounds().any(|s| s == Sound::MenuConfirm));
    }

    #[test]
    fn quitting_stops_the_music() {
        let mut e = engine();
        let flow = e.frame(&InputCmd::new(Buttons::CANCEL), |_, _, _| {});
        assert_eq!(flow, Flow::Quit);
        assert_eq!(e.mixer.current_track(), None);
        assert_eq!(e.mixer.backend().events.last(), Some(&AudioEvent::Stop));
    }

    #[test]
    fn paused_scene_is_frozen() {
        let mut e = engine();
        e.frame(&InputCmd::new(Buttons::CONFIRM), |_, _, _| {});
        e.frame(&InputCmd::new(Buttons::CANCEL), |_, _, _| {});
        assert_eq!(e.sim.mode(), GameMode::Paused);

        let sprites = e.sim.sprites.clone();
        let pos = e.sim.player.pos();
        for _ in 0..30 {
            e.frame(&InputCmd::new(Buttons::FORWARD), |_, _, _| {});
        }
        assert_eq!(e.sim.sprites, sprites);
        assert_eq!(e.sim.player.pos(), pos);
    }
}
