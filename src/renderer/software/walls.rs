use glam::{IVec2, Vec2, vec2};

use crate::{
    defs::textures::WALL_TEXTURES,
    renderer::software::Software,
    world::{Camera, GridMap, Level, SHADE_HALF, TRANSPARENT, TextureBank, TextureId},
};

/// Stand-in for `1 / 0` when a ray component is zero.
const NEVER: f32 = 1e30;

/// Result of one DDA walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Grid cell that stopped the ray.
    pub cell: IVec2,
    /// Wall code of that cell (always > 0).
    pub code: u8,
    /// 0 = crossed an x grid line last, 1 = a y grid line.
    pub side: u8,
    /// Distance to the wall along the camera direction.
    pub perp_dist: f32,
    pub ray_dir: Vec2,
    /// Accumulated side distance on the hit axis.
    pub side_dist: f32,
    /// Per-cell step on the hit axis.
    pub delta_dist: f32,
}

/// Walk the grid from `pos` along `ray_dir` until a wall cell is entered.
///
/// Out-of-grid cells read as walls, so the walk always terminates.
pub fn cast_ray(grid: &GridMap, pos: Vec2, ray_dir: Vec2) -> RayHit {
    let mut cell = pos.floor().as_ivec2();
    let delta = vec2(
        if ray_dir.x == 0.0 { NEVER } else { (1.0 / ray_dir.x).abs() },
        if ray_dir.y == 0.0 { NEVER } else { (1.0 / ray_dir.y).abs() },
    );

    let (step_x, mut side_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - cell.x as f32) * delta.x)
    } else {
        (1, (cell.x as f32 + 1.0 - pos.x) * delta.x)
    };
    let (step_y, mut side_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - cell.y as f32) * delta.y)
    } else {
        (1, (cell.y as f32 + 1.0 - pos.y) * delta.y)
    };

    let (side, code) = loop {
        let side = if side_x < side_y {
            side_x += delta.x;
            cell.x += step_x;
            0
        } else {
            side_y += delta.y;
            cell.y += step_y;
            1
        };
        let code = grid.get(cell.x, cell.y);
        if code > 0 {
            break (side, code);
        }
    };

    let (side_dist, delta_dist) = if side == 0 {
        (side_x, delta.x)
    } else {
        (side_y, delta.y)
    };
    RayHit {
        cell,
        code,
        side,
        perp_dist: side_dist - delta_dist,
        ray_dir,
        side_dist,
        delta_dist,
    }
}

/// Texture for wall code `code` (1-based).
pub fn wall_texture(code: u8) -> TextureId {
    (code as usize)
        .checked_sub(1)
        .and_then(|i| WALL_TEXTURES.get(i))
        .copied()
        .unwrap_or(TextureId::MAX)
}

impl Software {
    /// Cast the ray for screen column `x`, draw its wall slice and record
    /// the depth.
    pub fn draw_wall_column(&mut self, x: usize, camera: &Camera, level: &Level, bank: &TextureBank) {
        let camera_x = 2.0 * x as f32 / self.width_f - 1.0;
        let hit = cast_ray(&level.grid, camera.pos, camera.ray_dir(camera_x));
        self.zbuffer[x] = hit.perp_dist;

        let h = self.height as i32;
        // a camera standing exactly on a grid line sees a zero distance
        let perp = hit.perp_dist.max(1e-4);
        let line_h = (self.height_f / perp).min(i32::MAX as f32) as i32;
        let shift = (camera.pitch + camera.pos_z / perp) as i32;

        let draw_start = (-line_h / 2 + h / 2 + shift).max(0);
        let draw_end = (line_h / 2 + h / 2 + shift).min(h);
        if draw_start >= draw_end {
            return;
        }

        let tex = bank.texture_or_missing(wall_texture(hit.code));

        /* where exactly the wall was hit */
        let mut wall_x = if hit.side == 0 {
            camera.pos.y + hit.perp_dist * hit.ray_dir.y
        } else {
            camera.pos.x + hit.perp_dist * hit.ray_dir.x
        };
        wall_x -= wall_x.floor();

        let mut tex_x = ((wall_x * tex.w as f32) as usize).min(tex.w - 1);
        if (hit.side == 0 && hit.ray_dir.x > 0.0) || (hit.side == 1 && hit.ray_dir.y < 0.0) {
            tex_x = tex.w - tex_x - 1;
        }

        /* one texel step per screen row */
        let step = tex.h as f32 / line_h.max(1) as f32;
        let mut tex_pos = (draw_start - shift - h / 2 + line_h / 2) as f32 * step;
        let mask = tex.h as i32 - 1;
        let tint = level.colors.wall;

        for y in draw_start..draw_end {
            let tex_y = (tex_pos as i32 & mask) as usize;
            tex_pos += step;

            let mut color = tex.texel(tex_x, tex_y);
            if color != TRANSPARENT {
                color = tint.unwrap_or(color);
            }
            if hit.side == 1 {
                color = bank.shade(SHADE_HALF, color);
            }
            self.scratch[y as usize * self.width + x] = color;
        }
    }
}
