use super::combat;
use super::components::{Buttons, Flow, GameMode, InputCmd, Sprite};
use super::enemy::{self, Enemy};
use super::player::Player;
use crate::audio::{Cues, Sound};
use crate::defs::SpriteFlags;
use crate::world::{Level, LevelError};

/// Logic rate.  One tic per rendered frame.
pub const SIM_FPS: u32 = 60;

pub const SCORE_PER_PICKUP: i32 = 100;

/// Seconds → whole tics at [`SIM_FPS`].
#[inline]
pub fn secs_to_ticks(secs: f32) -> i32 {
    (secs * SIM_FPS as f32).round() as i32
}

/// All mutable game state: the campaign, the live level and the player.
pub struct Sim {
    levels: Vec<Level>,
    start_level: usize,
    level: usize,
    mode: GameMode,

    pub player: Player,
    pub sprites: Vec<Sprite>,
    pub enemies: Vec<Enemy>,

    goals_left: usize,
    gem_picked_up: bool,
    cues: Cues,
    tics: u64,
}

impl Sim {
    /// Starts in the menu with `start_level` loaded as backdrop.
    pub fn new(levels: Vec<Level>, start_level: usize) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCampaign);
        }
        if start_level >= levels.len() {
            return Err(LevelError::NoSuchLevel {
                index: start_level,
                len: levels.len(),
            });
        }
        let lvl = &levels[start_level];
        let player = Player::new(lvl.spawn, lvl.facing);
        let mut sim = Self {
            levels,
            start_level,
            level: start_level,
            mode: GameMode::Menu,
            player,
            sprites: Vec::new(),
            enemies: Vec::new(),
            goals_left: 0,
            gem_picked_up: false,
            cues: Cues::new(),
            tics: 0,
        };
        sim.load_level(start_level);
        Ok(sim)
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.levels[self.level]
    }

    #[inline]
    pub fn level_index(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn gem_picked_up(&self) -> bool {
        self.gem_picked_up
    }

    #[inline]
    pub fn goals_left(&self) -> usize {
        self.goals_left
    }

    #[inline]
    pub fn tics(&self) -> u64 {
        self.tics
    }

    /// Take the sound cues queued since the last call.
    pub fn take_cues(&mut self) -> Cues {
        std::mem::take(&mut self.cues)
    }

    /// Fresh run from the first campaign level, score reset.
    pub fn start_run(&mut self) {
        self.player.score = 0;
        self.load_level(self.start_level);
        self.mode = GameMode::Playing;
        log::info!("new run on level {} ({})", self.level, self.level().name);
    }

    /// Rebuild sprites and enemies from level `idx` and respawn the player.
    pub fn load_level(&mut self, idx: usize) {
        self.level = idx;
        let lvl = &self.levels[idx];
        self.sprites = lvl.sprites.iter().map(Sprite::from).collect();
        self.enemies = lvl.enemies.iter().map(Enemy::from).collect();
        self.goals_left = lvl.goal_count();
        self.gem_picked_up = false;
        self.player.respawn(lvl.spawn, lvl.facing);
        log::debug!(
            "loaded level {idx} `{}`: {} sprites, {} enemies, {} goals",
            lvl.name,
            self.sprites.len(),
            self.enemies.len(),
            self.goals_left
        );
    }

    /// Enemy phase of a frame.  Does nothing outside `Playing`.
    pub fn update_enemies(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        let grid = &self.levels[self.level].grid;
        let died = enemy::think(
            &mut self.enemies,
            &mut self.sprites,
            &mut self.player,
            grid,
            &mut self.cues,
        );
        if died {
            self.mode = GameMode::GameOver;
            log::info!("game over, score {}", self.player.score);
        }
    }

    /// Input phase of a frame.
    pub fn handle_input(&mut self, cmd: &InputCmd) -> Flow {
        self.tics += 1;
        match self.mode {
            GameMode::Menu => {
                if cmd.went_down(Buttons::CONFIRM) {
                    self.cues.push(Sound::MenuConfirm);
                    self.start_run();
                } else if cmd.went_down(Buttons::CANCEL) {
                    return Flow::Quit;
                }
            }
            GameMode::Playing => {
                if cmd.went_down(Buttons::CANCEL) {
                    self.mode = GameMode::Paused;
                } else {
                    self.play_tic(cmd);
                }
            }
            GameMode::Paused => {
                if cmd.went_down(Buttons::CONFIRM) {
                    self.mode = GameMode::Playing;
                } else if cmd.went_down(Buttons::CANCEL) {
                    return Flow::Quit;
                }
            }
            GameMode::GameOver | GameMode::Win => {
                if cmd.went_down(Buttons::CONFIRM) {
                    self.load_level(self.start_level);
                    self.mode = GameMode::Menu;
                }
            }
        }
        Flow::Continue
    }

    fn play_tic(&mut self, cmd: &InputCmd) {
        let grid = &self.levels[self.level].grid;

        /* 1. move */
        self.player.integrate(cmd, grid);

        /* 2. fight */
        if self.player.update_action(cmd) {
            combat::player_attack(
                &mut self.player,
                &mut self.enemies,
                &mut self.sprites,
                &mut self.cues,
            );
        }
        self.player.regen_stamina();

        /* 3. pick up */
        self.collect_pickups();
        if self.gem_picked_up {
            self.advance_level();
        }
    }

    fn collect_pickups(&mut self) {
        let cell = self.player.pos().floor();
        for s in self.sprites.iter_mut() {
            if s.collected || !s.flags.contains(SpriteFlags::PICKUP) || s.pos.floor() != cell {
                continue;
            }
            s.collected = true;
            self.player.score += SCORE_PER_PICKUP;
            self.cues.push(Sound::Pickup);
            if s.flags.contains(SpriteFlags::GOAL) {
                self.goals_left = self.goals_left.saturating_sub(1);
                if self.goals_left == 0 {
                    self.gem_picked_up = true;
                }
            }
        }
    }

    fn advance_level(&mut self) {
        let next = self.level + 1;
        if next < self.levels.len() {
            log::info!("level {} cleared, score {}", self.level, self.player.score);
            self.cues.push(Sound::LevelClear);
            self.load_level(next);
        } else {
            log::info!("campaign won, score {}", self.player.score);
            self.gem_picked_up = false;
            self.mode = GameMode::Win;
            self.cues.push(Sound::Victory);
        }
    }
}
