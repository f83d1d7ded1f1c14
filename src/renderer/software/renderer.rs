use crate::{
    renderer::software::sprites::VisSprite,
    renderer::{HudView, Pixel, Renderer},
    sim::Sprite,
    world::{Camera, Level, TRANSPARENT, TextureBank},
};

#[derive(Default)]
pub struct Software {
    pub scratch: Vec<Pixel>,
    /// Perpendicular wall distance per column, written by the wall pass.
    pub zbuffer: Vec<f32>,
    pub sprites: Vec<VisSprite>,

    pub width: usize,
    pub height: usize,

    pub width_f: f32,
    pub height_f: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.width_f = w as f32;
            self.height_f = h as f32;
            self.half_w = self.width_f * 0.5;
            self.half_h = self.height_f * 0.5;
            self.scratch.resize(w * h, TRANSPARENT);
            self.zbuffer.resize(w, f32::INFINITY);
        }
        self.scratch.fill(TRANSPARENT);
        self.zbuffer.fill(f32::INFINITY);
        self.sprites.clear();
    }

    fn draw_planes(&mut self, camera: &Camera, level: &Level, bank: &TextureBank) {
        self.cast_planes(camera, level, bank);
    }

    fn draw_walls(&mut self, camera: &Camera, level: &Level, bank: &TextureBank) {
        for x in 0..self.width {
            self.draw_wall_column(x, camera, level, bank);
        }
    }

    fn draw_sprites(&mut self, camera: &Camera, sprites: &[Sprite], bank: &TextureBank) {
        self.collect_sprites(camera, sprites);
        self.render_sprites(bank);
    }

    fn draw_hud(&mut self, hud: &HudView<'_>, bank: &TextureBank) {
        self.render_hud(hud, bank);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Pixel], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl Software {
    /// Bounds-checked single pixel write.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Pixel) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.scratch[y * self.width + x]
    }
}
