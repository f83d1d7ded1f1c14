mod camera;
mod grid;
mod level;
mod texture;

pub use camera::{Camera, PLANE_LEN};

pub use grid::GridMap;

pub use level::{EnemyDef, EnemySpawn, Level, LevelColors, LevelDef, LevelError, SpriteDef, SpriteId};

pub use texture::{
    Colormap, Palette, Rgb, SHADE_FULL, SHADE_HALF, TEX_SIZE, TRANSPARENT, Texture, TextureBank,
    TextureError, TextureId,
};
