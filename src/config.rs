/// Internal frame-buffer resolution.
pub const SCREEN_W: usize = 320;
pub const SCREEN_H: usize = 200;

/// Runtime knobs.  The binary fills this from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Integer window scale (1, 2, 4 or 8).
    pub scale: usize,
    /// Campaign level a new run starts on.
    pub start_level: usize,
    pub mute: bool,
    /// 0‥=255.
    pub volume: u8,
    pub target_fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 4,
            start_level: 0,
            mute: false,
            volume: 255,
            target_fps: crate::sim::SIM_FPS as usize,
        }
    }
}
