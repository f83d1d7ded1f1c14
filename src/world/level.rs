use std::collections::HashMap;

use glam::Vec2;
use thiserror::Error;

use crate::defs::{self, EnemyPrototype, SpriteFlags};
use crate::world::grid::GridMap;
use crate::world::texture::TextureId;

/// Stable per-level sprite key; the join key between a sprite and its enemy.
pub type SpriteId = u16;

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LevelError {
    #[error("grid is {width}x{height}, need at least 3x3")]
    TooSmall { width: usize, height: usize },

    #[error("grid row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("grid cell ({x}, {y}) holds `{ch}`, expected a digit")]
    BadCell { x: usize, y: usize, ch: char },

    #[error("border cell ({x}, {y}) is open floor")]
    UnsealedBorder { x: usize, y: usize },

    #[error("wall code {0} has no wall texture")]
    NoWallTexture(u8),

    #[error("spawn cell ({x}, {y}) is a wall")]
    SpawnInWall { x: i32, y: i32 },

    #[error("sprite {0} is inside a wall")]
    SpriteInWall(SpriteId),

    #[error("sprite id {0} used twice")]
    DuplicateSprite(SpriteId),

    #[error("enemy refers to sprite {0}, which does not exist")]
    MissingSprite(SpriteId),

    #[error("sprite {0} is owned by more than one enemy")]
    SharedSprite(SpriteId),

    #[error("unknown enemy prototype `{0}`")]
    UnknownPrototype(&'static str),

    #[error("campaign has no levels")]
    EmptyCampaign,

    #[error("start level {index} out of range (campaign has {len})")]
    NoSuchLevel { index: usize, len: usize },
}

/*──────────────────────────── static data ──────────────────────────*/

/// Optional flat tints (palette indices) replacing opaque texels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelColors {
    pub wall: Option<u8>,
    pub floor: Option<u8>,
    pub ceiling: Option<u8>,
}

/// Where a sprite starts and how it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDef {
    pub id: SpriteId,
    pub pos: Vec2,
    pub texture: TextureId,
    pub tint: Option<u8>,
    pub flags: SpriteFlags,
}

/// An enemy instance: prototype id plus per-instance overrides.
#[derive(Clone, Copy, Debug)]
pub struct EnemyDef {
    pub sprite_id: SpriteId,
    pub proto: &'static str,
    pub health: Option<i32>,
    pub damage: Option<i32>,
}

/// Compiled-in description of one level.
#[derive(Clone, Copy, Debug)]
pub struct LevelDef {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub spawn: Vec2,
    pub facing: Vec2,
    pub colors: LevelColors,
    pub sprites: &'static [SpriteDef],
    pub enemies: &'static [EnemyDef],
}

/// Enemy definition with its prototype resolved and overrides applied.
#[derive(Clone, Copy, Debug)]
pub struct EnemySpawn {
    pub sprite_id: SpriteId,
    /// Slot of the owning sprite in [`Level::sprites`].
    pub sprite: usize,
    pub proto: &'static EnemyPrototype,
    pub health: i32,
    pub damage: i32,
}

/// Validated, immutable level structure.
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub grid: GridMap,
    pub spawn: Vec2,
    pub facing: Vec2,
    pub colors: LevelColors,
    pub sprites: Vec<SpriteDef>,
    pub enemies: Vec<EnemySpawn>,
}

impl Level {
    pub fn from_def(def: &LevelDef) -> Result<Self, LevelError> {
        let grid = GridMap::from_rows(def.rows)?;

        let code = grid.max_code();
        if code as usize > defs::textures::WALL_TEXTURES.len() {
            return Err(LevelError::NoWallTexture(code));
        }
        if !grid.is_open(def.spawn) {
            return Err(LevelError::SpawnInWall {
                x: def.spawn.x.floor() as i32,
                y: def.spawn.y.floor() as i32,
            });
        }

        let mut slots: HashMap<SpriteId, usize> = HashMap::with_capacity(def.sprites.len());
        for (slot, s) in def.sprites.iter().enumerate() {
            if slots.insert(s.id, slot).is_some() {
                return Err(LevelError::DuplicateSprite(s.id));
            }
            if !grid.is_open(s.pos) {
                return Err(LevelError::SpriteInWall(s.id));
            }
        }

        let mut owned = vec![false; def.sprites.len()];
        let mut enemies = Vec::with_capacity(def.enemies.len());
        for e in def.enemies {
            let proto = defs::prototype(e.proto).ok_or(LevelError::UnknownPrototype(e.proto))?;
            let sprite = *slots
                .get(&e.sprite_id)
                .ok_or(LevelError::MissingSprite(e.sprite_id))?;
            if std::mem::replace(&mut owned[sprite], true) {
                return Err(LevelError::SharedSprite(e.sprite_id));
            }
            enemies.push(EnemySpawn {
                sprite_id: e.sprite_id,
                sprite,
                proto,
                health: e.health.unwrap_or(proto.health),
                damage: e.damage.unwrap_or(proto.damage),
            });
        }

        Ok(Self {
            name: def.name.to_string(),
            grid,
            spawn: def.spawn,
            facing: def.facing,
            colors: def.colors,
            sprites: def.sprites.to_vec(),
            enemies,
        })
    }

    /// Number of goal pickups that must be collected to finish the level.
    pub fn goal_count(&self) -> usize {
        self.sprites
            .iter()
            .filter(|s| s.flags.contains(SpriteFlags::GOAL))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::textures;
    use glam::vec2;

    const ROWS: &[&str] = &["33333", "30003", "30003", "33333"];

    const WORM_SPRITE: SpriteDef = SpriteDef {
        id: 7,
        pos: vec2(2.5, 2.5),
        texture: textures::WORM,
        tint: None,
        flags: SpriteFlags::SOLID,
    };

    fn def(sprites: &'static [SpriteDef], enemies: &'static [EnemyDef]) -> LevelDef {
        LevelDef {
            name: "test",
            rows: ROWS,
            spawn: vec2(1.5, 1.5),
            facing: vec2(1.0, 0.0),
            colors: LevelColors::default(),
            sprites,
            enemies,
        }
    }

    #[test]
    fn resolves_enemy_to_sprite_slot_and_prototype() {
        static SPRITES: [SpriteDef; 2] = [
            SpriteDef {
                id: 1,
                pos: vec2(3.5, 1.5),
                texture: textures::GEM,
                tint: None,
                flags: SpriteFlags::PICKUP.union(SpriteFlags::GOAL),
            },
            WORM_SPRITE,
        ];
        static ENEMIES: [EnemyDef; 1] = [EnemyDef {
            sprite_id: 7,
            proto: "WORM",
            health: Some(9),
            damage: None,
        }];
        let lvl = Level::from_def(&def(&SPRITES, &ENEMIES)).unwrap();
        assert_eq!(lvl.enemies[0].sprite, 1);
        assert_eq!(lvl.enemies[0].health, 9);
        assert_eq!(lvl.enemies[0].damage, lvl.enemies[0].proto.damage);
        assert_eq!(lvl.goal_count(), 1);
    }

    #[test]
    fn duplicate_sprite_ids_rejected() {
        static SPRITES: [SpriteDef; 2] = [WORM_SPRITE, WORM_SPRITE];
        let err = Level::from_def(&def(&SPRITES, &[])).unwrap_err();
        assert_eq!(err, LevelError::DuplicateSprite(7));
    }

    #[test]
    fn enemy_without_sprite_rejected() {
        static ENEMIES: [EnemyDef; 1] = [EnemyDef {
            sprite_id: 42,
            proto: "WORM",
            health: None,
            damage: None,
        }];
        let err = Level::from_def(&def(&[], &ENEMIES)).unwrap_err();
        assert_eq!(err, LevelError::MissingSprite(42));
    }

    #[test]
    fn unknown_prototype_rejected() {
        static SPRITES: [SpriteDef; 1] = [WORM_SPRITE];
        static ENEMIES: [EnemyDef; 1] = [EnemyDef {
            sprite_id: 7,
            proto: "DRAGON",
            health: None,
            damage: None,
        }];
        let err = Level::from_def(&def(&SPRITES, &ENEMIES)).unwrap_err();
        assert_eq!(err, LevelError::UnknownPrototype("DRAGON"));
    }

    #[test]
    fn spawn_inside_wall_rejected() {
        let mut d = def(&[], &[]);
        d.spawn = vec2(0.5, 0.5);
        assert_eq!(
            Level::from_def(&d).unwrap_err(),
            LevelError::SpawnInWall { x: 0, y: 0 }
        );
    }
}
