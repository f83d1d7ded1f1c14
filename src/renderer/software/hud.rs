use crate::{
    defs::textures::WHITE,
    renderer::HudView,
    renderer::software::{
        Software,
        font::{GLYPH_ADVANCE, GLYPH_H, GLYPH_W, glyph, lit, text_width},
    },
    sim::GameMode,
    world::{SHADE_HALF, TRANSPARENT, Texture, TextureBank},
};

/// Weapon overlay magnification.
pub const WEAPON_SCALE: usize = 8;

const STATUS_W: i32 = 100;
const BANNER_SCALE: usize = 3;

impl Software {
    pub fn render_hud(&mut self, hud: &HudView<'_>, bank: &TextureBank) {
        match hud.mode {
            GameMode::Playing | GameMode::Paused => {
                self.draw_weapon(bank.texture_or_missing(hud.weapon));
                self.draw_status(hud);
                if hud.mode == GameMode::Paused {
                    self.dim(bank);
                    self.banner("PAUSED", &[hud.level_name, "ENTER: RESUME", "ESC: QUIT"]);
                }
            }
            GameMode::Menu => {
                self.dim(bank);
                self.banner("MENISKOS", &["TRIALS OF MENISKOS", "ENTER: START", "ESC: QUIT"]);
            }
            GameMode::GameOver => {
                self.dim(bank);
                let score = format!("SCORE: {}", hud.score);
                self.banner("GAME OVER", &[score.as_str(), "ENTER: MENU"]);
            }
            GameMode::Win => {
                self.dim(bank);
                let score = format!("SCORE: {}", hud.score);
                self.banner("VICTORY", &[score.as_str(), "ENTER: MENU"]);
            }
        }
    }

    /// Draw `text` so that it is centred within `width` pixels starting at `x`.
    pub fn center_text(&mut self, x: i32, y: i32, text: &str, width: i32, color: u8) {
        self.center_text_scaled(x, y, text, width, 1, color);
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: usize, color: u8) {
        let mut pen = x;
        for ch in text.chars() {
            let bits = glyph(ch);
            for row in 0..GLYPH_H {
                for col in 0..GLYPH_W {
                    if !lit(bits, col, row) {
                        continue;
                    }
                    let px = pen + (col * scale) as i32;
                    let py = y + (row * scale) as i32;
                    for dy in 0..scale as i32 {
                        for dx in 0..scale as i32 {
                            self.put(px + dx, py + dy, color);
                        }
                    }
                }
            }
            pen += (GLYPH_ADVANCE * scale) as i32;
        }
    }

    fn center_text_scaled(&mut self, x: i32, y: i32, text: &str, width: i32, scale: usize, color: u8) {
        let left = x + (width - text_width(text, scale) as i32) / 2;
        self.draw_text(left, y, text, scale, color);
    }

    /// Weapon texture in the bottom-left corner, magnified.
    fn draw_weapon(&mut self, tex: &Texture) {
        let top = self.height as i32 - (tex.h * WEAPON_SCALE) as i32;
        for y in 0..tex.h * WEAPON_SCALE {
            for x in 0..tex.w * WEAPON_SCALE {
                let color = tex.texel(x / WEAPON_SCALE, y / WEAPON_SCALE);
                if color != TRANSPARENT {
                    self.put(x as i32, top + y as i32, color);
                }
            }
        }
    }

    fn draw_status(&mut self, hud: &HudView<'_>) {
        let right = self.width as i32 - STATUS_W - 12;
        self.center_text(12, 12, &format!("HEALTH: {}", hud.health), STATUS_W, WHITE);
        self.center_text(12, 20, &format!("STAMINA: {}", hud.stamina), STATUS_W, WHITE);
        self.center_text(right, 12, &format!("SCORE: {}", hud.score), STATUS_W, WHITE);
        self.center_text(right, 20, &format!("LEVEL {}", hud.level), STATUS_W, WHITE);
    }

    /// Darken the whole frame behind a banner.
    fn dim(&mut self, bank: &TextureBank) {
        for px in self.scratch.iter_mut() {
            *px = bank.shade(SHADE_HALF, *px);
        }
    }

    fn banner(&mut self, title: &str, lines: &[&str]) {
        let w = self.width as i32;
        let mut y = self.height as i32 / 3;
        self.center_text_scaled(0, y, title, w, BANNER_SCALE, WHITE);
        y += (GLYPH_H * BANNER_SCALE) as i32 + 12;
        for line in lines {
            self.center_text(0, y, line, w, WHITE);
            y += GLYPH_H as i32 + 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::defs::textures::{self, WHITE};
    use crate::renderer::{HudView, Renderer, Software, WEAPON_SCALE};
    use crate::sim::GameMode;
    use crate::world::TRANSPARENT;

    fn hud(mode: GameMode) -> HudView<'static> {
        HudView {
            mode,
            health: 100,
            stamina: 10,
            score: 0,
            level: 1,
            level_name: "test",
            weapon: textures::SWORD,
        }
    }

    #[test]
    fn centred_text_is_symmetric() {
        let mut sw = Software::default();
        sw.begin_frame(40, 10);
        // "I" is 3 wide; centred in 40 columns it starts at 18
        sw.center_text(0, 0, "I", 40, 7);
        assert_eq!(sw.pixel(18, 0), 7);
        assert_eq!(sw.pixel(20, 0), 7);
        assert_eq!(sw.pixel(17, 0), TRANSPARENT);
        assert_eq!(sw.pixel(21, 0), TRANSPARENT);
    }

    #[test]
    fn text_clips_at_screen_edge() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.draw_text(-2, -2, "HELLO WORLD", 2, 7);
        assert!(sw.scratch.contains(&7));
    }

    #[test]
    fn weapon_sits_bottom_left() {
        let bank = textures::builtin_bank().unwrap();
        let mut sw = Software::default();
        sw.begin_frame(320, 200);
        sw.draw_hud(&hud(GameMode::Playing), &bank);

        let span = 16 * WEAPON_SCALE;
        let in_box = |i: usize| i % 320 < span && i / 320 >= 200 - span;
        let weapon_px = sw
            .scratch
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p != TRANSPARENT && p != WHITE && !in_box(i))
            .count();
        assert_eq!(weapon_px, 0);
        assert!(sw.scratch.iter().enumerate().any(|(i, &p)| in_box(i) && p != TRANSPARENT));
        // health readout drawn
        assert!(sw.scratch[12 * 320..20 * 320].contains(&WHITE));
    }

    #[test]
    fn menu_banner_dims_scene() {
        let bank = textures::builtin_bank().unwrap();
        let mut sw = Software::default();
        sw.begin_frame(320, 200);
        sw.scratch.fill(WHITE);
        sw.draw_hud(&hud(GameMode::Menu), &bank);
        assert!(sw.scratch.iter().any(|&p| p != WHITE));
        assert!(sw.scratch.contains(&WHITE));
    }
}
