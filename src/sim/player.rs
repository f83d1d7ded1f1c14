use glam::Vec2;

use super::collision;
use super::components::{Buttons, InputCmd};
use super::tic::{SIM_FPS, secs_to_ticks};
use crate::defs::{self, WeaponDef};
use crate::world::{Camera, GridMap, TextureId};

pub const MAX_HEALTH: i32 = 100;
pub const MAX_STAMINA: i32 = 10;
/// Tics between stamina points; also the lock-out after spending one.
pub const STAMINA_REGEN_TICKS: i32 = 120;
/// How long the swing texture stays up.
pub const WEAPON_ANIM_TICKS: i32 = 24;

pub const MOVE_SPEED: f32 = 3.0; // tiles / second
pub const TURN_RATE: f32 = 2.0; // rad / second
/// Walls are tested this many steps ahead of the camera.
pub const COLLISION_PROBE: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerAction {
    #[default]
    Normal,
    Attacking,
    Blocking,
}

/// The equipped weapon and its two countdowns.
#[derive(Clone, Copy, Debug)]
pub struct Weapon {
    pub def: &'static WeaponDef,
    /// Tics until the next swing is allowed.
    pub cooldown: i32,
    /// Tics the swing texture stays up.
    pub anim_cooldown: i32,
}

impl Weapon {
    pub fn new(def: &'static WeaponDef) -> Self {
        Self {
            def,
            cooldown: 0,
            anim_cooldown: 0,
        }
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.cooldown <= 0
    }

    fn swing(&mut self) {
        self.cooldown = secs_to_ticks(self.def.attack_speed);
        self.anim_cooldown = WEAPON_ANIM_TICKS;
    }

    fn tick(&mut self) {
        self.cooldown = (self.cooldown - 1).max(0);
        self.anim_cooldown = (self.anim_cooldown - 1).max(0);
    }

    /// Texture for the first-person overlay.
    pub fn texture(&self, action: PlayerAction) -> TextureId {
        match action {
            PlayerAction::Normal => self.def.texture,
            PlayerAction::Attacking | PlayerAction::Blocking => self.def.attack_texture,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub camera: Camera,
    pub health: i32,
    pub stamina: i32,
    pub score: i32,
    pub action: PlayerAction,
    /// Tics until the next stamina point.
    pub stamina_cooldown: i32,
    pub weapon: Weapon,
}

impl Player {
    pub fn new(spawn: Vec2, facing: Vec2) -> Self {
        Self {
            camera: Camera::new(spawn, facing),
            health: MAX_HEALTH,
            stamina: MAX_STAMINA,
            score: 0,
            action: PlayerAction::Normal,
            stamina_cooldown: 0,
            weapon: Weapon::new(&defs::SWORD),
        }
    }

    /// Level entry: new pose, full health and stamina.  Score carries over.
    pub fn respawn(&mut self, spawn: Vec2, facing: Vec2) {
        let score = self.score;
        *self = Self::new(spawn, facing);
        self.score = score;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.camera.pos
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Walk and turn for one tic.  Both rates halve while blocking.
    pub fn integrate(&mut self, cmd: &InputCmd, grid: &GridMap) {
        let scale = if self.action == PlayerAction::Blocking {
            0.5
        } else {
            1.0
        };
        let step = MOVE_SPEED / SIM_FPS as f32 * scale;
        let turn = TURN_RATE / SIM_FPS as f32 * scale;

        /* 1. walk */
        let dir = self.camera.dir;
        if cmd.holds(Buttons::FORWARD) {
            self.camera.pos = collision::player_move(grid, self.camera.pos, dir * step, COLLISION_PROBE);
        }
        if cmd.holds(Buttons::BACK) {
            self.camera.pos = collision::player_move(grid, self.camera.pos, -dir * step, COLLISION_PROBE);
        }

        /* 2. turn */
        if cmd.holds(Buttons::TURN_RIGHT) {
            self.camera.rotate(-turn);
        }
        if cmd.holds(Buttons::TURN_LEFT) {
            self.camera.rotate(turn);
        }
    }

    /// Tick the weapon and pick this tic's action.  Returns `true` when a
    /// swing starts, which the caller resolves against enemies.
    pub fn update_action(&mut self, cmd: &InputCmd) -> bool {
        self.weapon.tick();

        if cmd.holds(Buttons::ATTACK) && self.weapon.ready() && self.stamina > 0 {
            self.weapon.swing();
            self.stamina -= 1;
            self.stamina_cooldown = STAMINA_REGEN_TICKS;
            self.action = PlayerAction::Attacking;
            return true;
        }

        self.action = if self.action == PlayerAction::Attacking && self.weapon.anim_cooldown > 0 {
            PlayerAction::Attacking
        } else if cmd.holds(Buttons::BLOCK) {
            PlayerAction::Blocking
        } else {
            PlayerAction::Normal
        };
        false
    }

    /// One stamina point every [`STAMINA_REGEN_TICKS`] while below max.
    pub fn regen_stamina(&mut self) {
        if self.stamina_cooldown > 0 {
            self.stamina_cooldown -= 1;
        } else if self.stamina < MAX_STAMINA {
            self.stamina += 1;
            self.stamina_cooldown = STAMINA_REGEN_TICKS;
        }
    }
}
