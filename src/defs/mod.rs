//! Compiled-in game data: enemy prototypes, weapons, textures and levels.
//!
//! Everything here is read-only.  Runtime state lives in [`crate::sim`].

pub mod flags;
pub mod levels;
pub mod textures;

pub use self::flags::SpriteFlags;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::audio::Sound;
use crate::world::TextureId;

/// Per-species constants shared by every enemy of that kind.
#[derive(Debug)]
pub struct EnemyPrototype {
    pub id: &'static str,
    pub health: i32,
    pub damage: i32,
    /// Starts chasing when the player is this close, in tiles.
    pub movement_range: f32,
    /// Tiles per second.
    pub movement_speed: f32,
    /// Starts an attack when the player is this close, in tiles.
    pub attack_range: f32,
    /// Seconds of recovery after a resolved attack.
    pub attack_cooldown: f32,
    /// Seconds between the telegraph and the hit.
    pub attack_speed: f32,
    pub textures: EnemyTextures,
    pub sounds: EnemySounds,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyTextures {
    pub idle: TextureId,
    pub attack: TextureId,
    pub dead: TextureId,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemySounds {
    pub alert: Sound,
    pub telegraph: Sound,
    pub death: Sound,
}

pub static PROTOTYPES: &[EnemyPrototype] = &[
    EnemyPrototype {
        id: "WORM",
        health: 3,
        damage: 10,
        movement_range: 6.0,
        movement_speed: 0.75,
        attack_range: 1.0,
        attack_cooldown: 3.0,
        attack_speed: 1.0,
        textures: EnemyTextures {
            idle: textures::WORM,
            attack: textures::WORM_ATTACK,
            dead: textures::WORM_DEAD,
        },
        sounds: EnemySounds {
            alert: Sound::WormAlert,
            telegraph: Sound::WormTelegraph,
            death: Sound::WormDeath,
        },
    },
    EnemyPrototype {
        id: "BAT",
        health: 1,
        damage: 6,
        movement_range: 8.0,
        movement_speed: 1.5,
        attack_range: 0.8,
        attack_cooldown: 1.5,
        attack_speed: 0.5,
        textures: EnemyTextures {
            idle: textures::BAT,
            attack: textures::BAT_ATTACK,
            dead: textures::BAT_DEAD,
        },
        sounds: EnemySounds {
            alert: Sound::BatAlert,
            telegraph: Sound::BatTelegraph,
            death: Sound::BatDeath,
        },
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static EnemyPrototype>> =
    Lazy::new(|| PROTOTYPES.iter().map(|p| (p.id, p)).collect());

pub fn prototype(id: &str) -> Option<&'static EnemyPrototype> {
    BY_ID.get(id).copied()
}

/// Static description of a weapon slot.
#[derive(Debug)]
pub struct WeaponDef {
    pub name: &'static str,
    pub texture: TextureId,
    pub attack_texture: TextureId,
    pub damage: i32,
    /// Reach in tiles.
    pub range: f32,
    /// Seconds between swings.
    pub attack_speed: f32,
}

pub static SWORD: WeaponDef = WeaponDef {
    name: "sword",
    texture: textures::SWORD,
    attack_texture: textures::SWORD_HIT,
    damage: 1,
    range: 1.0,
    attack_speed: 0.5,
};
