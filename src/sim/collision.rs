//! Grid and sprite collision for the player and for chasing enemies.
//!
//! Both movers resolve each axis on its own, so sliding along a wall keeps
//! the free component of the motion.

use glam::{Vec2, vec2};

use super::Sprite;
use crate::defs::SpriteFlags;
use crate::world::GridMap;

/// Enemies keep this much clearance from walls, in tiles.
pub const ENEMY_RADIUS: f32 = 0.25;
/// Solid sprites are not pushed closer than this to each other.
pub const SPRITE_BLOCK_DIST: f32 = 0.5;

/// Move the player by `delta`, probing `probe ×` the step ahead on each
/// axis so the camera never reaches a wall face.
pub fn player_move(grid: &GridMap, pos: Vec2, delta: Vec2, probe: f32) -> Vec2 {
    let mut out = pos;
    if grid.get((out.x + delta.x * probe).floor() as i32, out.y.floor() as i32) == 0 {
        out.x += delta.x;
    }
    if grid.get(out.x.floor() as i32, (out.y + delta.y * probe).floor() as i32) == 0 {
        out.y += delta.y;
    }
    out
}

/// Step sprite `me` by `step`, one axis at a time.
pub fn enemy_move(grid: &GridMap, sprites: &[Sprite], me: usize, step: Vec2) -> Vec2 {
    let mut pos = sprites[me].pos;

    let cand = pos + vec2(step.x, 0.0);
    let probe = vec2(cand.x + step.x.signum() * ENEMY_RADIUS, cand.y);
    if step.x != 0.0 && grid.is_open(probe) && !blocked_by_sprite(sprites, me, pos, cand) {
        pos = cand;
    }

    let cand = pos + vec2(0.0, step.y);
    let probe = vec2(cand.x, cand.y + step.y.signum() * ENEMY_RADIUS);
    if step.y != 0.0 && grid.is_open(probe) && !blocked_by_sprite(sprites, me, pos, cand) {
        pos = cand;
    }
    pos
}

/// True when moving `from → to` would push into another solid sprite.
fn blocked_by_sprite(sprites: &[Sprite], me: usize, from: Vec2, to: Vec2) -> bool {
    sprites.iter().enumerate().any(|(i, s)| {
        if i == me || !s.flags.contains(SpriteFlags::SOLID) {
            return false;
        }
        let d = to.distance(s.pos);
        d < SPRITE_BLOCK_DIST && d < from.distance(s.pos)
    })
}
