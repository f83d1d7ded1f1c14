use glam::Vec2;

/// Length of the camera plane relative to a unit direction (≈ 66° FoV).
pub const PLANE_LEN: f32 = 0.66;

/// Player view-point in grid space.
///
/// * `dir` and `plane` form the 2×2 camera basis; rays sweep from
///   `dir - plane` (left edge) to `dir + plane` (right edge).
/// * `pitch` shifts the horizon, in screen pixels.
/// * `pos_z` is a vertical camera offset in pixels of a wall at distance 1.
///   Nothing moves it at runtime but both casters honour it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
    pub pitch: f32,
    pub pos_z: f32,
}

impl Camera {
    /// Camera at `pos` looking along `dir`, with the plane perpendicular to it.
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        let dir = dir.normalize_or(Vec2::NEG_X);
        Self {
            pos,
            dir,
            plane: -dir.perp() * PLANE_LEN,
            pitch: 0.0,
            pos_z: 0.0,
        }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Ray through normalised screen column `camera_x ∈ [-1, 1]`.
    #[inline(always)]
    pub fn ray_dir(&self, camera_x: f32) -> Vec2 {
        self.dir + self.plane * camera_x
    }

    /// Rays through the left (`x = 0`) and right (`x = w`) screen edges.
    #[inline]
    pub fn edge_rays(&self) -> (Vec2, Vec2) {
        (self.dir - self.plane, self.dir + self.plane)
    }

    /// Transform a world point into camera space through the inverse of
    /// the `[plane dir]` matrix:
    ///  .x = lateral offset on the camera plane
    ///  .y = depth along `dir`
    #[inline]
    pub fn to_cam(&self, p: Vec2) -> Vec2 {
        let rel = p - self.pos;
        let inv_det = 1.0 / (self.plane.x * self.dir.y - self.dir.x * self.plane.y);
        Vec2::new(
            inv_det * (self.dir.y * rel.x - self.dir.x * rel.y),
            inv_det * (-self.plane.y * rel.x + self.plane.x * rel.y),
        )
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Rotate direction and plane together (positive = turn left).
    pub fn rotate(&mut self, angle: f32) {
        let rot = Vec2::from_angle(angle);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
