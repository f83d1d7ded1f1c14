//! ---------------------------------------------------------------------------
//! Classic software (CPU) raycaster
//!
//! * Fills a `Vec<u8>` frame-buffer of palette indices.
//! * Planes first, then one DDA ray per column (which also records the
//!   per-column wall depth), then sprites depth-tested against that buffer,
//!   then the HUD on top.
//! ---------------------------------------------------------------------------

mod font;
mod hud;
mod planes;
mod renderer;
mod sprites;
mod walls;

pub use font::{GLYPH_ADVANCE, GLYPH_H, text_width};
pub use hud::WEAPON_SCALE;
pub use renderer::Software;
pub use sprites::VisSprite;
pub use walls::{RayHit, cast_ray, wall_texture};
