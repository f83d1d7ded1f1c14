//! 3×5 bitmap font.
//!
//! Each glyph is 15 bits, three per row, top row in the high bits.

pub const GLYPH_W: usize = 3;
pub const GLYPH_H: usize = 5;
/// Horizontal pen advance per character, including one column of spacing.
pub const GLYPH_ADVANCE: usize = GLYPH_W + 1;

#[rustfmt::skip]
pub fn glyph(ch: char) -> u16 {
    match ch.to_ascii_uppercase() {
        'A' => 0b010_101_111_101_101,
        'B' => 0b110_101_110_101_110,
        'C' => 0b011_100_100_100_011,
        'D' => 0b110_101_101_101_110,
        'E' => 0b111_100_110_100_111,
        'F' => 0b111_100_110_100_100,
        'G' => 0b011_100_101_101_011,
        'H' => 0b101_101_111_101_101,
        'I' => 0b111_010_010_010_111,
        'J' => 0b001_001_001_101_010,
        'K' => 0b101_101_110_101_101,
        'L' => 0b100_100_100_100_111,
        'M' => 0b101_111_111_101_101,
        'N' => 0b110_101_101_101_101,
        'O' => 0b010_101_101_101_010,
        'P' => 0b110_101_110_100_100,
        'Q' => 0b010_101_101_110_011,
        'R' => 0b110_101_110_101_101,
        'S' => 0b011_100_010_001_110,
        'T' => 0b111_010_010_010_010,
        'U' => 0b101_101_101_101_111,
        'V' => 0b101_101_101_101_010,
        'W' => 0b101_101_111_111_101,
        'X' => 0b101_101_010_101_101,
        'Y' => 0b101_101_010_010_010,
        'Z' => 0b111_001_010_100_111,
        '0' => 0b111_101_101_101_111,
        '1' => 0b010_110_010_010_111,
        '2' => 0b110_001_010_100_111,
        '3' => 0b110_001_010_001_110,
        '4' => 0b101_101_111_001_001,
        '5' => 0b111_100_110_001_110,
        '6' => 0b011_100_111_101_111,
        '7' => 0b111_001_010_010_010,
        '8' => 0b111_101_111_101_111,
        '9' => 0b111_101_111_001_110,
        ':' => 0b000_010_000_010_000,
        '-' => 0b000_000_111_000_000,
        '.' => 0b000_000_000_000_010,
        '!' => 0b010_010_010_000_010,
        ' ' => 0,
        _   => 0b110_001_010_000_010, // '?'
    }
}

/// Is pixel (`col`, `row`) of `bits` set?
#[inline]
pub fn lit(bits: u16, col: usize, row: usize) -> bool {
    let shift = (GLYPH_H - 1 - row) * GLYPH_W + (GLYPH_W - 1 - col);
    (bits >> shift) & 1 == 1
}

/// Width in pixels of `text` at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: usize) -> usize {
    let n = text.chars().count();
    if n == 0 {
        0
    } else {
        (n * GLYPH_ADVANCE - 1) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_bits_read_row_major() {
        let t = glyph('T');
        assert!((0..3).all(|c| lit(t, c, 0)));
        assert!(!lit(t, 0, 1) && lit(t, 1, 1) && !lit(t, 2, 1));
        assert!(lit(glyph('.'), 1, 4));
    }

    #[test]
    fn lowercase_shares_uppercase_glyphs() {
        assert_eq!(glyph('h'), glyph('H'));
        assert_eq!(glyph(' '), 0);
    }

    #[test]
    fn width_counts_inner_spacing_only() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 3);
        assert_eq!(text_width("HP", 2), 14);
    }
}
