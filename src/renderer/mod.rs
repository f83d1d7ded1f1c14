//! Rendering abstraction layer.
//!
//! *Game logic never touches a pixel buffer directly.*  The frame
//! orchestrator calls the passes of a [`Renderer`] in a fixed order
//! (planes, walls, sprites, HUD) and `end_frame` loans the finished buffer
//! to the caller, which presents it however it likes.
//!
//! The frame buffer holds palette indices.  Expanding them to RGB is the
//! presenter's job ([`TextureBank::get_color`]).

use crate::sim::{GameMode, Sim, Sprite};
use crate::world::{Camera, Level, TextureBank, TextureId};

pub mod software;

pub use software::{RayHit, Software, WEAPON_SCALE, cast_ray};

/// Pixel format of the software frame-buffer: one palette index.
pub type Pixel = u8;

/// Everything the HUD pass reads, copied out of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct HudView<'a> {
    pub mode: GameMode,
    pub health: i32,
    pub stamina: i32,
    pub score: i32,
    /// 1-based for display.
    pub level: usize,
    pub level_name: &'a str,
    /// Overlay texture of the equipped weapon.
    pub weapon: TextureId,
}

impl<'a> HudView<'a> {
    pub fn from_sim(sim: &'a Sim) -> Self {
        let p = &sim.player;
        Self {
            mode: sim.mode(),
            health: p.health,
            stamina: p.stamina,
            score: p.score,
            level: sim.level_index() + 1,
            level_name: &sim.level().name,
            weapon: p.weapon.texture(p.action),
        }
    }
}

/// A renderer that owns its scratch buffers for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Floor and ceiling, every pixel below/above the horizon.
    fn draw_planes(&mut self, camera: &Camera, level: &Level, bank: &TextureBank);

    /// One DDA ray per column.  Fills the depth buffer.
    fn draw_walls(&mut self, camera: &Camera, level: &Level, bank: &TextureBank);

    /// Billboards, far to near, depth-tested against the walls.
    fn draw_sprites(&mut self, camera: &Camera, sprites: &[Sprite], bank: &TextureBank);

    /// Weapon overlay, status text and mode banners.
    fn draw_hud(&mut self, hud: &HudView<'_>, bank: &TextureBank);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Pixel], w, h)` is run exactly once per frame.
    /// * The window caller expands through the palette and presents.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Pixel], usize, usize);
}
