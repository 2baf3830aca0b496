//! Seven-segment font
//!
//! Glyphs are bytes in `(dp)gfedcba` order: bit 0 lights segment a (top),
//! bit 6 segment g (middle) and bit 7 the decimal point.
//!
//! The table covers printable ASCII from `' '` (32) to `'~'` (126). Lookups
//! outside that range return `None` instead of reading past the table.
//!
//! ```
//! use tm1638::font;
//!
//! assert_eq!(font::glyph(b'8'), Some(0x7F));
//! assert_eq!(font::glyph(b'~'), Some(0x01));
//! assert_eq!(font::glyph(0x7F), None);
//! assert_eq!(font::hex_glyph(0xB), font::glyph(b'b').unwrap_or_default());
//! ```

/// ASCII code of the first table entry
pub const ASCII_OFFSET: u8 = 32;

/// Table index of the digit `'0'`
pub const HEX_OFFSET: u8 = b'0' - ASCII_OFFSET;

/// Glyph table indexed by `ascii - ASCII_OFFSET`
pub static SEVEN_SEG: [u8; 95] = [
    0x00, // (space)
    0x86, // !
    0x22, // "
    0x7E, // #
    0x6D, // $
    0xD2, // %
    0x46, // &
    0x20, // '
    0x29, // (
    0x0B, // )
    0x21, // *
    0x70, // +
    0x10, // ,
    0x40, // -
    0x80, // .
    0x52, // /
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x09, // :
    0x0D, // ;
    0x61, // <
    0x48, // =
    0x43, // >
    0xD3, // ?
    0x5F, // @
    0x77, // A
    0x7C, // B
    0x39, // C
    0x5E, // D
    0x79, // E
    0x71, // F
    0x3D, // G
    0x76, // H
    0x30, // I
    0x1E, // J
    0x75, // K
    0x38, // L
    0x15, // M
    0x37, // N
    0x3F, // O
    0x73, // P
    0x6B, // Q
    0x33, // R
    0x6D, // S
    0x78, // T
    0x3E, // U
    0x3E, // V
    0x2A, // W
    0x76, // X
    0x6E, // Y
    0x5B, // Z
    0x39, // [
    0x64, // \
    0x0F, // ]
    0x23, // ^
    0x08, // _
    0x02, // `
    0x5F, // a
    0x7C, // b
    0x58, // c
    0x5E, // d
    0x7B, // e
    0x71, // f
    0x6F, // g
    0x74, // h
    0x10, // i
    0x0C, // j
    0x75, // k
    0x30, // l
    0x14, // m
    0x54, // n
    0x5C, // o
    0x73, // p
    0x67, // q
    0x50, // r
    0x6D, // s
    0x78, // t
    0x1C, // u
    0x1C, // v
    0x14, // w
    0x76, // x
    0x6E, // y
    0x5B, // z
    0x46, // {
    0x30, // |
    0x70, // }
    0x01, // ~
];

/// Characters used for hex digits 10..=15
///
/// Mixed case so that `b` and `d` stay distinct from `8` and `0`.
pub const HEX_LETTERS: [u8; 6] = [b'A', b'b', b'C', b'd', b'E', b'F'];

/// Segment pattern for an ASCII code, `None` when the font has no glyph
pub fn glyph(ascii: u8) -> Option<u8> {
    let index = ascii.checked_sub(ASCII_OFFSET)?;
    SEVEN_SEG.get(index as usize).copied()
}

/// Segment pattern for the low nibble of `hex`
pub fn hex_glyph(hex: u8) -> u8 {
    let hex = hex % 16;
    let index = if hex <= 9 {
        HEX_OFFSET + hex
    } else {
        HEX_LETTERS[(hex - 10) as usize] - ASCII_OFFSET
    };
    SEVEN_SEG[index as usize]
}
