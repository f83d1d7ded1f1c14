//! Built-in palette and 16×16 textures.
//!
//! The game ships without image files: every texture is generated here at
//! start-up and inserted into a [`TextureBank`] in id order, so the
//! constants below are valid handles into the bank returned by
//! [`builtin_bank`].

use crate::world::{Palette, Rgb, TEX_SIZE, TRANSPARENT, Texture, TextureBank, TextureError, TextureId};

/*──────────────────────────── palette ─────────────────────────────*/

/// Hue rows of the palette.  Index = `hue * 16 + level`, level 0 is black.
pub mod hue {
    pub const GREY: u8 = 0;
    pub const RED: u8 = 1;
    pub const ORANGE: u8 = 2;
    pub const BROWN: u8 = 3;
    pub const YELLOW: u8 = 4;
    pub const OLIVE: u8 = 5;
    pub const GREEN: u8 = 6;
    pub const TEAL: u8 = 7;
    pub const CYAN: u8 = 8;
    pub const SKY: u8 = 9;
    pub const BLUE: u8 = 10;
    pub const INDIGO: u8 = 11;
    pub const PURPLE: u8 = 12;
    pub const MAGENTA: u8 = 13;
    pub const PINK: u8 = 14;
    pub const BONE: u8 = 15;
}

const HUES: [Rgb; 16] = [
    Rgb::new(255, 255, 255),
    Rgb::new(255, 40, 30),
    Rgb::new(255, 140, 20),
    Rgb::new(200, 120, 60),
    Rgb::new(255, 230, 60),
    Rgb::new(170, 180, 60),
    Rgb::new(60, 220, 60),
    Rgb::new(40, 200, 160),
    Rgb::new(60, 230, 255),
    Rgb::new(110, 170, 255),
    Rgb::new(50, 70, 255),
    Rgb::new(110, 60, 220),
    Rgb::new(180, 70, 230),
    Rgb::new(255, 60, 200),
    Rgb::new(255, 150, 170),
    Rgb::new(240, 220, 180),
];

/// Palette index of `hue` at brightness `level` (0 = black, 15 = full).
pub const fn pal(hue: u8, level: u8) -> u8 {
    (hue << 4) | (level & 0x0F)
}

pub const WHITE: u8 = pal(hue::GREY, 15);

pub fn builtin_palette() -> Palette {
    let mut palette = Palette::default();
    for (h, base) in HUES.iter().enumerate() {
        for level in 0..16u32 {
            let scale = |c: u8| (c as u32 * level / 15) as u8;
            palette[h * 16 + level as usize] = Rgb::new(scale(base.r), scale(base.g), scale(base.b)).packed();
        }
    }
    palette
}

/*──────────────────────────── texture ids ─────────────────────────*/

pub const BRICK_WALL: TextureId = 0;
pub const WOOD_WALL: TextureId = 1;
pub const PILLAR_WALL: TextureId = 2;
pub const FLOOR_1: TextureId = 3;
pub const FLOOR_2: TextureId = 4;
pub const CEILING: TextureId = 5;
pub const WORM: TextureId = 6;
pub const WORM_ATTACK: TextureId = 7;
pub const SWORD: TextureId = 8;
pub const SWORD_HIT: TextureId = 9;
pub const WORM_DEAD: TextureId = 10;
pub const BAT: TextureId = 11;
pub const BAT_ATTACK: TextureId = 12;
pub const BAT_DEAD: TextureId = 13;
pub const GEM: TextureId = 14;

/// Wall code `N` draws with `WALL_TEXTURES[N - 1]`.
pub const WALL_TEXTURES: [TextureId; 3] = [BRICK_WALL, WOOD_WALL, PILLAR_WALL];

/*──────────────────────────── generators ──────────────────────────*/

/// Cheap integer hash, stable across runs.
fn noise(x: usize, y: usize, seed: u32) -> u32 {
    let mut h = (x as u32).wrapping_mul(374_761_393)
        ^ (y as u32).wrapping_mul(668_265_263)
        ^ seed.wrapping_mul(2_246_822_519);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

fn procedural(name: &str, f: impl Fn(usize, usize) -> u8) -> Texture {
    let mut pixels = Vec::with_capacity(TEX_SIZE * TEX_SIZE);
    for y in 0..TEX_SIZE {
        for x in 0..TEX_SIZE {
            pixels.push(f(x, y));
        }
    }
    Texture {
        name: name.to_string(),
        w: TEX_SIZE,
        h: TEX_SIZE,
        pixels,
    }
}

fn brick(x: usize, y: usize, seed: u32) -> u8 {
    let course = y / 4;
    let joint = if course % 2 == 0 { 0 } else { 4 };
    if y % 4 == 3 || x % 8 == joint {
        pal(hue::GREY, 5)
    } else {
        pal(hue::RED, 7 + (noise(x / 8, course, seed) % 3) as u8 + (noise(x, y, seed) % 2) as u8)
    }
}

fn brick_wall() -> Texture {
    procedural("BRICK", |x, y| brick(x, y, 1))
}

fn wood_wall() -> Texture {
    procedural("WOOD", |x, y| {
        if x % 4 == 0 {
            pal(hue::BROWN, 4)
        } else if noise(x / 4, y / 5, 7) % 11 == 0 && y % 5 == 2 {
            pal(hue::BROWN, 5)
        } else {
            pal(hue::BROWN, 9 + (noise(x, y / 3, 3) % 3) as u8)
        }
    })
}

fn pillar_wall() -> Texture {
    procedural("PILLAR", |x, y| match x {
        5 | 10 => pal(hue::GREY, 6),
        6..=9 => pal(hue::GREY, 10 + (noise(x, y, 5) % 2) as u8),
        _ => brick(x, y, 2),
    })
}

fn slab(name: &str, h: u8, base: u8, seed: u32) -> Texture {
    procedural(name, |x, y| {
        if x % 8 == 0 || y % 8 == 0 {
            pal(h, base - 4)
        } else {
            pal(h, base + (noise(x, y, seed) % 2) as u8)
        }
    })
}

fn ceiling() -> Texture {
    procedural("CEILING", |x, y| {
        if y % 8 == 0 {
            pal(hue::BROWN, 5)
        } else {
            pal(hue::INDIGO, 3 + (noise(x, y, 11) % 2) as u8)
        }
    })
}

/// Map one art character to a palette index.  `.` is transparent.
fn ink(ch: u8) -> u8 {
    match ch {
        b'G' => pal(hue::GREEN, 10),
        b'g' => pal(hue::GREEN, 6),
        b'R' => pal(hue::RED, 12),
        b'r' => pal(hue::RED, 6),
        b'W' => pal(hue::GREY, 13),
        b'w' => pal(hue::GREY, 15),
        b'Y' => pal(hue::YELLOW, 11),
        b'B' => pal(hue::BROWN, 7),
        b'P' => pal(hue::PURPLE, 9),
        b'p' => pal(hue::PURPLE, 5),
        b'C' => pal(hue::CYAN, 12),
        b'c' => pal(hue::CYAN, 7),
        _ => TRANSPARENT,
    }
}

/// Texture from 16 rows of art; short rows are padded with transparency.
fn art(name: &str, rows: &[&str; TEX_SIZE]) -> Texture {
    procedural(name, |x, y| rows[y].as_bytes().get(x).copied().map_or(TRANSPARENT, ink))
}

const WORM_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "......GGGG......",
    ".....GGGGGG.....",
    ".....GwGGwG.....",
    ".....GGGGGG.....",
    "......GGGG......",
    ".......GG.......",
    "......GGG.......",
    ".....GGG........",
    ".....GGGG.......",
    "......GGGGG.....",
    "....GGGGGGGG....",
    "...GGGGGGGGGG...",
];

const WORM_ATTACK_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "......GGGG......",
    ".....GGGGGG.....",
    "....GGwGGwGG....",
    "....GRRRRRRG....",
    "....GRrrrrRG....",
    "....GRRRRRRG....",
    ".....GGGGGG.....",
    "......GGGG......",
    ".....GGG........",
    ".....GGGG.......",
    "......GGGGG.....",
    "....GGGGGGGG....",
    "...GGGGGGGGGG...",
];

const WORM_DEAD_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "....g.gg..g.....",
    "..ggGGrGGGGgg...",
    ".gGGGGGGGGGGGGg.",
];

const BAT_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "P......PP......P",
    "PP....PPPP....PP",
    "PPP..PRPPRP..PPP",
    "PPPPPPPPPPPPPPPP",
    ".PPPPPPPPPPPPPP.",
    "..PPP.PPPP.PPP..",
    "...P...PP...P...",
    "................",
    "................",
    "................",
    "................",
    "................",
];

const BAT_ATTACK_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "P..............P",
    "PP............PP",
    "PPP....PP....PPP",
    ".PPP..PPPP..PPP.",
    "..PPPPRPPRPPPP..",
    "...PPPPPPPPPP...",
    "......PwwP......",
    ".......PP.......",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
];

const BAT_DEAD_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "..p..PPPP..p....",
    ".ppPPPPPPPPpp...",
];

const SWORD_ART: [&str; TEX_SIZE] = [
    "..............W.",
    ".............WWW",
    "............WWW.",
    "...........WWW..",
    "..........WWW...",
    ".........WWW....",
    "........WWW.....",
    ".......WWW......",
    "......WWW.......",
    "..Y..WWW........",
    "...YWWW.........",
    "....YW..........",
    "...Y.Y..........",
    "..BB..Y.........",
    ".BB.............",
    "BB..............",
];

const SWORD_HIT_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "....Y...........",
    "....Y...........",
    "BBBBYWWWWWWWWWW.",
    "....YWWWWWWWWWWw",
    "....Y...........",
    "....Y...........",
    "................",
    "................",
    "................",
];

const GEM_ART: [&str; TEX_SIZE] = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "......CCCC......",
    ".....CcwCcC.....",
    "....CCCCCCCC....",
    ".....cCCCCc.....",
    "......cCCc......",
    ".......cc.......",
    "................",
    "................",
    "................",
    "................",
];

/// Palette plus every texture the game references, inserted in id order.
pub fn builtin_bank() -> Result<TextureBank, TextureError> {
    let mut bank = TextureBank::default();
    bank.set_palette(builtin_palette());

    let textures = [
        brick_wall(),
        wood_wall(),
        pillar_wall(),
        slab("FLOOR1", hue::GREY, 9, 21),
        slab("FLOOR2", hue::BONE, 7, 22),
        ceiling(),
        art("WORM", &WORM_ART),
        art("WORM_ATTACK", &WORM_ATTACK_ART),
        art("SWORD", &SWORD_ART),
        art("SWORD_HIT", &SWORD_HIT_ART),
        art("WORM_DEAD", &WORM_DEAD_ART),
        art("BAT", &BAT_ART),
        art("BAT_ATTACK", &BAT_ATTACK_ART),
        art("BAT_DEAD", &BAT_DEAD_ART),
        art("GEM", &GEM_ART),
    ];
    for tex in textures {
        bank.insert(tex.name.clone(), tex)?;
    }
    Ok(bank)
}
