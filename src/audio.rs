//! Fire-and-forget sound effects and music.
//!
//! The simulation never talks to a device.  It pushes [`Sound`] cues into a
//! per-tick queue; the frame orchestrator hands them to a [`Mixer`], which
//! rotates through a fixed pool of channels and forwards them to whatever
//! [`AudioBackend`] the binary installed.

use smallvec::SmallVec;

/// Number of playback channels; cues rotate through `0..CHANNELS`.
pub const CHANNELS: u8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    WormAlert,
    WormTelegraph,
    WormDeath,
    BatAlert,
    BatTelegraph,
    BatDeath,
    /// Player weapon connects with an enemy.
    EnemyHit,
    /// Player swing connects with nothing.
    Miss,
    PlayerHit,
    PlayerBlock,
    PlayerDeath,
    Pickup,
    LevelClear,
    Victory,
    MenuConfirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Menu,
    Dungeon,
}

/// Cues produced during one simulation phase.
pub type Cues = SmallVec<[Sound; 8]>;

/// Device-side half of the audio seam.
pub trait AudioBackend {
    fn play_sound(&mut self, sound: Sound, channel: u8, volume: u8);
    fn play_music(&mut self, track: Track, volume: u8);
    fn stop_music(&mut self);
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn play_sound(&mut self, sound: Sound, channel: u8, volume: u8) {
        (**self).play_sound(sound, channel, volume)
    }
    fn play_music(&mut self, track: Track, volume: u8) {
        (**self).play_music(track, volume)
    }
    fn stop_music(&mut self) {
        (**self).stop_music()
    }
}

/// Backend that only reports what would have played.
#[derive(Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play_sound(&mut self, sound: Sound, channel: u8, volume: u8) {
        log::debug!("sfx {sound:?} on channel {channel} (vol {volume})");
    }
    fn play_music(&mut self, track: Track, volume: u8) {
        log::info!("music {track:?} (vol {volume})");
    }
    fn stop_music(&mut self) {
        log::info!("music stopped");
    }
}

/// Silent backend for `--mute`.
#[derive(Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play_sound(&mut self, _: Sound, _: u8, _: u8) {}
    fn play_music(&mut self, _: Track, _: u8) {}
    fn stop_music(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    Sound { sound: Sound, channel: u8 },
    Music(Track),
    Stop,
}

/// Backend that remembers every request; handy for headless runs.
#[derive(Default)]
pub struct RecordingAudio {
    pub events: Vec<AudioEvent>,
}

impl RecordingAudio {
    pub fn sounds(&self) -> impl Iterator<Item = Sound> + '_ {
        self.events.iter().filter_map(|e| match e {
            AudioEvent::Sound { sound, .. } => Some(*sound),
            _ => None,
        })
    }
}

impl AudioBackend for RecordingAudio {
    fn play_sound(&mut self, sound: Sound, channel: u8, _: u8) {
        self.events.push(AudioEvent::Sound { sound, channel });
    }
    fn play_music(&mut self, track: Track, _: u8) {
        self.events.push(AudioEvent::Music(track));
    }
    fn stop_music(&mut self) {
        self.events.push(AudioEvent::Stop);
    }
}

/// Channel rotation and current-track bookkeeping in front of a backend.
pub struct Mixer<B: AudioBackend> {
    backend: B,
    next_channel: u8,
    current_track: Option<Track>,
    volume: u8,
}

impl<B: AudioBackend> Mixer<B> {
    pub fn new(backend: B, volume: u8) -> Self {
        Self {
            backend,
            next_channel: 0,
            current_track: None,
            volume,
        }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn current_track(&self) -> Option<Track> {
        self.current_track
    }

    /// Play `sound` on the next channel of the pool.
    pub fn play(&mut self, sound: Sound) {
        let channel = self.next_channel;
        self.next_channel = (self.next_channel + 1) % CHANNELS;
        self.backend.play_sound(sound, channel, self.volume);
    }

    pub fn play_all(&mut self, cues: impl IntoIterator<Item = Sound>) {
        for sound in cues {
            self.play(sound);
        }
    }

    /// Switch to `track` unless it is already the one playing.
    pub fn play_track(&mut self, track: Track) {
        if self.current_track == Some(track) {
            return;
        }
        self.current_track = Some(track);
        self.backend.play_music(track, self.volume);
    }

    pub fn stop_track(&mut self) {
        if self.current_track.take().is_some() {
            self.backend.stop_music();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_rotate_through_pool() {
        let mut mixer = Mixer::new(RecordingAudio::default(), 255);
        for _ in 0..(CHANNELS as usize + 2) {
            mixer.play(Sound::Miss);
        }
        let channels: Vec<u8> = mixer
            .backend()
            .events
            .iter()
            .map(|e| match e {
                AudioEvent::Sound { channel, .. } => *channel,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(channels[0], 0);
        assert_eq!(channels[15], 15);
        assert_eq!(channels[16], 0);
        assert_eq!(channels[17], 1);
    }

    #[test]
    fn current_track_is_not_restarted() {
        let mut mixer = Mixer::new(RecordingAudio::default(), 200);
        mixer.play_track(Track::Menu);
        mixer.play_track(Track::Menu);
        mixer.play_track(Track::Dungeon);
        mixer.stop_track();
        mixer.stop_track();
        assert_eq!(
            mixer.backend().events,
            vec![
                AudioEvent::Music(Track::Menu),
                AudioEvent::Music(Track::Dungeon),
                AudioEvent::Stop,
            ]
        );
        assert_eq!(mixer.current_track(), None);
    }
}
