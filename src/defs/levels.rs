//! The campaign: three compiled-in levels, played in order.

use glam::vec2;

use super::SpriteFlags;
use super::textures::{self, hue, pal};
use crate::world::{EnemyDef, Level, LevelColors, LevelDef, LevelError, SpriteDef};

const GOAL: SpriteFlags = SpriteFlags::PICKUP.union(SpriteFlags::GOAL);

const fn gem(id: u16, x: f32, y: f32) -> SpriteDef {
    SpriteDef {
        id,
        pos: vec2(x, y),
        texture: textures::GEM,
        tint: None,
        flags: GOAL,
    }
}

const fn monster(id: u16, x: f32, y: f32, texture: u16) -> SpriteDef {
    SpriteDef {
        id,
        pos: vec2(x, y),
        texture,
        tint: None,
        flags: SpriteFlags::SOLID,
    }
}

const fn enemy(sprite_id: u16, proto: &'static str) -> EnemyDef {
    EnemyDef {
        sprite_id,
        proto,
        health: None,
        damage: None,
    }
}

pub static CELLAR: LevelDef = LevelDef {
    name: "The Cellar",
    rows: &[
        "3333333333",
        "3000201113",
        "3000000003",
        "3101111113",
        "3100010003",
        "3101010113",
        "3101010013",
        "3101011013",
        "3100000013",
        "3333333333",
    ],
    spawn: vec2(2.5, 2.5),
    facing: vec2(1.0, 0.0),
    colors: LevelColors {
        wall: None,
        floor: None,
        ceiling: None,
    },
    sprites: &[
        monster(1, 6.5, 5.5, textures::WORM),
        gem(2, 7.5, 7.5),
    ],
    enemies: &[enemy(1, "WORM")],
};

pub static WOODWORKS: LevelDef = LevelDef {
    name: "Woodworks",
    rows: &[
        "2222222222",
        "2000020002",
        "2022000202",
        "2000220002",
        "2200000222",
        "2002202002",
        "2002000002",
        "2022022202",
        "2000000002",
        "2222222222",
    ],
    spawn: vec2(1.5, 1.5),
    facing: vec2(0.0, 1.0),
    colors: LevelColors {
        wall: None,
        floor: None,
        ceiling: Some(pal(hue::INDIGO, 2)),
    },
    sprites: &[
        monster(1, 4.5, 4.5, textures::BAT),
        monster(2, 7.5, 6.5, textures::WORM),
        gem(3, 8.5, 8.5),
    ],
    enemies: &[enemy(1, "BAT"), enemy(2, "WORM")],
};

pub static PILLARED_HALL: LevelDef = LevelDef {
    name: "Pillared Hall",
    rows: &[
        "111111111111",
        "100000000001",
        "103003003001",
        "100000000001",
        "100030030001",
        "100000000001",
        "103003003001",
        "100000000001",
        "100000000001",
        "111111111111",
    ],
    spawn: vec2(1.5, 8.5),
    facing: vec2(0.0, -1.0),
    colors: LevelColors {
        wall: None,
        floor: Some(pal(hue::TEAL, 4)),
        ceiling: Some(pal(hue::GREY, 2)),
    },
    sprites: &[
        monster(1, 5.5, 3.5, textures::WORM),
        monster(2, 8.5, 5.5, textures::WORM),
        monster(3, 6.5, 7.5, textures::BAT),
        SpriteDef {
            id: 4,
            pos: vec2(10.5, 3.5),
            texture: textures::BAT,
            tint: Some(pal(hue::RED, 9)),
            flags: SpriteFlags::SOLID,
        },
        gem(5, 10.5, 1.5),
    ],
    enemies: &[
        EnemyDef {
            sprite_id: 1,
            proto: "WORM",
            health: Some(4),
            damage: None,
        },
        enemy(2, "WORM"),
        enemy(3, "BAT"),
        EnemyDef {
            sprite_id: 4,
            proto: "BAT",
            health: Some(2),
            damage: Some(8),
        },
    ],
};

pub static CAMPAIGN: [&LevelDef; 3] = [&CELLAR, &WOODWORKS, &PILLARED_HALL];

/// Validate and build every level of the campaign.
pub fn campaign() -> Result<Vec<Level>, LevelError> {
    CAMPAIGN.iter().map(|def| Level::from_def(def)).collect()
}
