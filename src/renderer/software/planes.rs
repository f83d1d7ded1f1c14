use crate::{
    defs::textures::{CEILING, FLOOR_1, FLOOR_2},
    renderer::software::Software,
    world::{Camera, Level, TRANSPARENT, TextureBank},
};

impl Software {
    /// Horizontal floor/ceiling casting, one scan-line at a time.
    ///
    /// Rows below the horizon are floor, the rest ceiling.  Each row is a
    /// single world-space line, so the texel position advances by a
    /// constant step across it.
    pub fn cast_planes(&mut self, camera: &Camera, level: &Level, bank: &TextureBank) {
        let (ray0, ray1) = camera.edge_rays();
        let horizon = self.half_h + camera.pitch;

        let floor_a = bank.texture_or_missing(FLOOR_1);
        let floor_b = bank.texture_or_missing(FLOOR_2);
        let ceiling = bank.texture_or_missing(CEILING);

        for y in 0..self.height {
            let yf = y as f32;
            let is_floor = yf > horizon;

            // rows from the horizon; the horizon row itself reads as 1
            let p = if is_floor { yf - horizon } else { horizon - yf }.max(1.0);
            let cam_z = if is_floor {
                self.half_h + camera.pos_z
            } else {
                self.half_h - camera.pos_z
            };
            let row_distance = cam_z / p;

            let step = row_distance * (ray1 - ray0) / self.width_f;
            let mut floor = camera.pos + row_distance * ray0;

            let tint = if is_floor {
                level.colors.floor
            } else {
                level.colors.ceiling
            };
            let row = y * self.width;

            for x in 0..self.width {
                let cell = floor.floor();
                let frac = floor - cell;
                floor += step;

                let tex = if !is_floor {
                    ceiling
                } else if (cell.x as i32 + cell.y as i32) & 1 == 0 {
                    floor_a
                } else {
                    floor_b
                };
                let tx = (tex.w as f32 * frac.x) as usize & (tex.w - 1);
                let ty = (tex.h as f32 * frac.y) as usize & (tex.h - 1);

                let mut color = tex.texel(tx, ty);
                if color != TRANSPARENT {
                    color = tint.unwrap_or(color);
                }
                self.scratch[row + x] = color;
            }
        }
    }
}
