//! Placeholder mod icon: a single letter on a flat blue square.

/// Side length of the generated icon in pixels.
pub const ICON_SIZE: u32 = 512;
/// Where `setup` puts the icon, relative to the project root.
pub const ICON_PATH: &str = "common/src/main/resources/icon.png";

const BACKGROUND: [u8; 4] = [66, 135, 245, 255];
const FOREGROUND: [u8; 4] = [255, 255, 255, 255];
const GLYPH_CELLS: u32 = 8;

/// 8x8 bitmap font for `A`-`Z`, one byte per row, MSB on the left.
const FONT: [[u8; 8]; 26] = [
    [0b00111000, 0b01000100, 0b10000010, 0b10000010, 0b11111110, 0b10000010, 0b10000010, 0],
    [0b11111100, 0b10000010, 0b10000010, 0b11111100, 0b10000010, 0b10000010, 0b11111100, 0],
    [0b01111110, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b01111110, 0],
    [0b11111100, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b11111100, 0],
    [0b11111110, 0b10000000, 0b10000000, 0b11111100, 0b10000000, 0b10000000, 0b11111110, 0],
    [0b11111110, 0b10000000, 0b10000000, 0b11111100, 0b10000000, 0b10000000, 0b10000000, 0],
    [0b01111110, 0b10000000, 0b10000000, 0b10001110, 0b10000010, 0b10000010, 0b01111110, 0],
    [0b10000010, 0b10000010, 0b10000010, 0b11111110, 0b10000010, 0b10000010, 0b10000010, 0],
    [0b01111100, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0b01111100, 0],
    [0b00111110, 0b00000010, 0b00000010, 0b00000010, 0b10000010, 0b10000010, 0b01111100, 0],
    [0b10000010, 0b10000100, 0b10001000, 0b10110000, 0b11001000, 0b10000100, 0b10000010, 0],
    [0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b11111110, 0],
    [0b10000010, 0b11000110, 0b10101010, 0b10010010, 0b10000010, 0b10000010, 0b10000010, 0],
    [0b10000010, 0b11000010, 0b10100010, 0b10010010, 0b10001010, 0b10000110, 0b10000010, 0],
    [0b01111100, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b01111100, 0],
    [0b11111100, 0b10000010, 0b10000010, 0b11111100, 0b10000000, 0b10000000, 0b10000000, 0],
    [0b01111100, 0b10000010, 0b10000010, 0b10000010, 0b10001010, 0b10000100, 0b01111010, 0],
    [0b11111100, 0b10000010, 0b10000010, 0b11111100, 0b10001000, 0b10000100, 0b10000010, 0],
    [0b01111100, 0b10000010, 0b10000000, 0b01111100, 0b00000010, 0b10000010, 0b01111100, 0],
    [0b11111110, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0],
    [0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b01111100, 0],
    [0b10000010, 0b10000010, 0b10000010, 0b01000100, 0b01000100, 0b00101000, 0b00010000, 0],
    [0b10000010, 0b10000010, 0b10000010, 0b10010010, 0b10101010, 0b11000110, 0b10000010, 0],
    [0b10000010, 0b01000100, 0b00101000, 0b00010000, 0b00101000, 0b01000100, 0b10000010, 0],
    [0b10000010, 0b01000100, 0b00101000, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0],
    [0b11111110, 0b00000010, 0b00000100, 0b00001000, 0b00010000, 0b00100000, 0b11111110, 0],
];

fn glyph(letter: char) -> Option<&'static [u8; 8]> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| &FONT[(upper as u8 - b'A') as usize])
}

/// Raw RGBA8 pixels, row-major, ready for an image encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl IconBitmap {
    /// Draw `letter` centred at 1/16 of the icon size per font cell.
    ///
    /// Letters outside `A`-`Z` (case-insensitive) give a plain background.
    pub fn render(letter: Option<char>) -> Self {
        let size = ICON_SIZE;
        let scale = size / 16;
        let offset = (size - GLYPH_CELLS * scale) / 2;
        let rows = letter.and_then(glyph);

        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let lit = rows.is_some_and(|rows| {
                    let inside = (offset..offset + GLYPH_CELLS * scale).contains(&x)
                        && (offset..offset + GLYPH_CELLS * scale).contains(&y);
                    inside && {
                        let row = rows[((y - offset) / scale) as usize];
                        row & (1 << (7 - (x - offset) / scale)) != 0
                    }
                });
                rgba.extend_from_slice(if lit { &FOREGROUND } else { &BACKGROUND });
            }
        }

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}
