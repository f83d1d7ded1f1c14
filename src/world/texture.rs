// Format-agnostic repository of indexed-color textures.
// The renderer and game logic interact through `TextureId` only.

use std::collections::HashMap;

use std::ops::{Index, IndexMut};

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank: ids are
/// handed out in insertion order starting at 0.
pub type TextureId = u16;

/// Side length of every texture the game uses. Must be a power of two.
pub const TEX_SIZE: usize = 16;

/// Palette index treated as the key color by sprite and weapon compositing.
pub const TRANSPARENT: u8 = 0;

/// CPU-side storage: one palette index per texel in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Texel at column `u`, row `v`.  Both wrap at the texture size.
    #[inline(always)]
    pub fn texel(&self, u: usize, v: usize) -> u8 {
        self.pixels[self.w * (v & (self.h - 1)) + (u & (self.w - 1))]
    }
}

/// Convenience checkerboard (dark/light grey) used when an id is unknown.
impl Default for Texture {
    fn default() -> Self {
        const LIGHT_IDX: u8 = 12;
        const DARK_IDX: u8 = 4;
        let mut pix = vec![0u8; TEX_SIZE * TEX_SIZE];
        for y in 0..TEX_SIZE {
            for x in 0..TEX_SIZE {
                pix[y * TEX_SIZE + x] = if ((x >> 2) ^ (y >> 2)) & 1 == 0 {
                    LIGHT_IDX
                } else {
                    DARK_IDX
                };
            }
        }
        Texture {
            name: "CHECKER".to_string(),
            w: TEX_SIZE,
            h: TEX_SIZE,
            pixels: pix,
        }
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// Dimensions are not a power of two or do not match the pixel count.
    #[error("texture `{name}` has unusable size {w}x{h} ({len} texels)")]
    BadSize {
        name: String,
        w: usize,
        h: usize,
        len: usize,
    },
}

/// Decoded 8-bit-per-channel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0x00RRGGBB`.
    #[inline]
    pub const fn from_packed(c: u32) -> Self {
        Self {
            r: (c >> 16) as u8,
            g: (c >> 8) as u8,
            b: c as u8,
        }
    }

    /// Pack into `0x00RRGGBB`, the pixel format `minifb` expects.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Halve every channel. Used for walls hit on their y side.
    #[inline]
    pub const fn darken_half(self) -> Self {
        Self {
            r: self.r >> 1,
            g: self.g >> 1,
            b: self.b >> 1,
        }
    }

    fn dist2(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

pub struct Palette(pub [u32; 256]);
impl Default for Palette {
    fn default() -> Self {
        Palette([0u32; 256])
    }
}
impl Index<usize> for Palette {
    type Output = u32;
    fn index(&self, idx: usize) -> &u32 {
        &self.0[idx]
    }
}
impl IndexMut<usize> for Palette {
    fn index_mut(&mut self, idx: usize) -> &mut u32 {
        &mut self.0[idx]
    }
}

impl Palette {
    #[inline]
    pub fn rgb(&self, idx: u8) -> Rgb {
        Rgb::from_packed(self.0[idx as usize])
    }

    /// Index of the entry closest to `target`; ties go to the lower index.
    pub fn nearest(&self, target: Rgb) -> u8 {
        let mut best = 0usize;
        let mut best_d = u32::MAX;
        for (i, &c) in self.0.iter().enumerate() {
            let d = Rgb::from_packed(c).dist2(target);
            if d < best_d {
                best = i;
                best_d = d;
                if d == 0 {
                    break;
                }
            }
        }
        best as u8
    }
}

/// Shade rows. Row `SHADE_FULL` is the identity, row `SHADE_HALF` maps every
/// index to the palette entry nearest to its half-brightness color.
pub struct Colormap(pub [[u8; 256]; 2]);

pub const SHADE_FULL: u8 = 0;
pub const SHADE_HALF: u8 = 1;

impl Default for Colormap {
    fn default() -> Self {
        let mut ident = [0u8; 256];
        for (i, v) in ident.iter_mut().enumerate() {
            *v = i as u8;
        }
        Colormap([ident; 2])
    }
}
impl Index<usize> for Colormap {
    type Output = [u8; 256];
    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}
impl IndexMut<usize> for Colormap {
    fn index_mut(&mut self, idx: usize) -> &mut [u8; 256] {
        &mut self.0[idx]
    }
}

impl Colormap {
    pub fn from_palette(palette: &Palette) -> Self {
        let mut map = Colormap::default();
        for i in 0..256 {
            let idx = i as u8;
            map[SHADE_HALF as usize][i] = if idx == TRANSPARENT {
                TRANSPARENT
            } else {
                palette.nearest(palette.rgb(idx).darken_half())
            };
        }
        map
    }
}

/// A palette-aware cache of indexed textures.
///
/// * Does **not** know how textures were produced; that's the loader's job.
/// * Stores exactly one copy of every name.
/// * Unknown ids resolve to a checkerboard through [`TextureBank::texture_or_missing`].
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
    missing: Texture,
    palette: Palette,
    colormap: Colormap,
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::new(Texture::default())
    }
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank with a *missing* texture used as fallback.
    pub fn new(missing_tex: Texture) -> Self {
        Self {
            by_name: HashMap::new(),
            data: Vec::new(),
            missing: missing_tex,
            palette: Palette::default(),
            colormap: Colormap::default(),
        }
    }

    /// Install `palette` and rebuild the shade table from it.
    pub fn set_palette(&mut self, palette: Palette) {
        self.colormap = Colormap::from_palette(&palette);
        self.palette = palette;
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index for `texel` under shade row `shade_idx`.
    #[inline(always)]
    pub fn shade(&self, shade_idx: u8, texel: u8) -> u8 {
        self.colormap[shade_idx as usize][texel as usize]
    }

    /// Packed RGB for a palette index.
    #[inline(always)]
    pub fn get_color(&self, idx: u8) -> u32 {
        self.palette[idx as usize]
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Obtain the id for a *loaded* texture by name.
    /// Returns `None` if the name is unknown.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Fallback-safe query: unknown ids resolve to the checkerboard.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        match self.texture(id) {
            Ok(tex) => tex,
            Err(err) => {
                log::warn!("{err}; drawing checkerboard");
                &self.missing
            }
        }
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`) or the texel buffer
    ///   does not describe a power-of-two texture (`BadSize`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        if !tex.w.is_power_of_two() || !tex.h.is_power_of_two() || tex.pixels.len() != tex.w * tex.h
        {
            return Err(TextureError::BadSize {
                name,
                w: tex.w,
                h: tex.h,
                len: tex.pixels.len(),
            });
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: u8) -> Texture {
        Texture {
            name: "Dummy".to_string(),
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    fn grey_palette() -> Palette {
        let mut pal = Palette::default();
        for i in 0..256 {
            pal[i] = Rgb::new(i as u8, i as u8, i as u8).packed();
        }
        pal
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default();
        let red = bank.insert("RED", dummy_tex(0x01)).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(0xFF)).unwrap();

        assert_eq!(red, 0);
        assert_ne!(blue, red);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("BLUE"), Some(blue));
        assert_eq!(bank.id("NOPE"), None);

        assert_eq!(bank.texture(red).unwrap().pixels[0], 0x01);
        assert_eq!(bank.texture(blue).unwrap().pixels[0], 0xFF);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn non_power_of_two_rejected() {
        let mut bank = TextureBank::default();
        let tex = Texture {
            name: "ODD".into(),
            w: 3,
            h: 3,
            pixels: vec![1; 9],
        };
        assert!(matches!(
            bank.insert("ODD", tex),
            Err(TextureError::BadSize { w: 3, h: 3, .. })
        ));
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(bad).name, "CHECKER");
    }

    #[test]
    fn darken_half_halves_each_channel() {
        let c = Rgb::new(200, 101, 3).darken_half();
        assert_eq!(c, Rgb::new(100, 50, 1));
        assert_eq!(Rgb::from_packed(0x00C8_6503), Rgb::new(200, 101, 3));
    }

    #[test]
    fn half_shade_row_tracks_darkened_palette() {
        let mut bank = TextureBank::default();
        bank.set_palette(grey_palette());
        assert_eq!(bank.shade(SHADE_FULL, 200), 200);
        assert_eq!(bank.shade(SHADE_HALF, 200), 100);
        assert_eq!(bank.shade(SHADE_HALF, 1), 0);
        assert_eq!(bank.shade(SHADE_HALF, TRANSPARENT), TRANSPARENT);
    }

    #[test]
    fn texel_coordinates_wrap_for_power_of_two_sizes() {
        let tex = Texture::default();
        for pos in [-40i32, -1, 0, 15, 16, 17, 1000] {
            let masked = pos as usize & (TEX_SIZE - 1);
            assert!(masked < TEX_SIZE);
            // texel() never indexes out of the pixel buffer
            let _ = tex.texel(pos as usize, pos as usize);
        }
    }
}
