use crate::{
    renderer::software::Software,
    sim::Sprite,
    world::{Camera, TRANSPARENT, TextureBank, TextureId},
};

/// A sprite that survived projection, ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisSprite {
    /// Squared distance to the camera; sort key.
    pub dist2: f32,
    /// Camera-space depth (`transformY`).
    pub depth: f32,
    /// Screen column of the sprite centre.
    pub screen_x: i32,
    /// Vertical offset from pitch and camera height.
    pub v_move: i32,
    /// Width and height on screen (square billboard).
    pub size: i32,
    /* clipped screen extents, end exclusive */
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
    pub tex: TextureId,
    pub tint: Option<u8>,
}

impl Software {
    /// Project every visible sprite and sort far to near.
    pub fn collect_sprites(&mut self, camera: &Camera, sprites: &[Sprite]) {
        let w = self.width as i32;
        let h = self.height as i32;

        for s in sprites.iter().filter(|s| !s.collected) {
            let rel = camera.to_cam(s.pos);
            if rel.y <= 0.0 {
                continue; // behind the camera plane
            }

            let screen_x = (self.half_w * (1.0 + rel.x / rel.y)) as i32;
            let v_move = (camera.pitch + camera.pos_z / rel.y) as i32;
            let size = (self.height_f / rel.y).abs().min(i32::MAX as f32 / 512.0) as i32;

            let x0 = (screen_x - size / 2).max(0);
            let x1 = (screen_x + size / 2).min(w);
            let y0 = (-size / 2 + h / 2 + v_move).max(0);
            let y1 = (size / 2 + h / 2 + v_move).min(h);
            if x0 >= x1 || y0 >= y1 {
                continue;
            }

            self.sprites.push(VisSprite {
                dist2: camera.pos.distance_squared(s.pos),
                depth: rel.y,
                screen_x,
                v_move,
                size,
                x0,
                x1,
                y0,
                y1,
                tex: s.texture,
                tint: s.tint,
            });
        }

        // painter's order; the sort is stable so equal distances keep list order
        self.sprites.sort_by(|a, b| b.dist2.total_cmp(&a.dist2));
    }

    /// Draw the collected sprites, column by column, behind any nearer wall.
    pub fn render_sprites(&mut self, bank: &TextureBank) {
        let h = self.height as i64;

        for spr in &self.sprites {
            let tex = bank.texture_or_missing(spr.tex);
            let size = spr.size.max(1) as i64;
            let left = (spr.screen_x - spr.size / 2) as i64;

            for stripe in spr.x0..spr.x1 {
                if spr.depth >= self.zbuffer[stripe as usize] {
                    continue;
                }
                let tex_x = ((256 * (stripe as i64 - left) * tex.w as i64 / size) / 256).max(0) as usize;

                for y in spr.y0..spr.y1 {
                    let d = (y as i64 - spr.v_move as i64) * 256 - h * 128 + size * 128;
                    let tex_y = ((d * tex.h as i64 / size) / 256).max(0) as usize;

                    let color = tex.texel(tex_x, tex_y);
                    if color == TRANSPARENT {
                        continue;
                    }
                    self.scratch[y as usize * self.width + stripe as usize] = spr.tint.unwrap_or(color);
                }
            }
        }
    }
}
