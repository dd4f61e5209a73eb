/// Size of the addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which programs are loaded and execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// Number of general purpose registers (V0..VF).
pub const REGISTER_COUNT: usize = 16;

/// Maximum call depth of the return-address stack.
pub const STACK_DEPTH: usize = 16;

/// Horizontal resolution of the display in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical resolution of the display in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Tallest sprite the Dxyn instruction can describe.
pub const MAX_SPRITE_ROWS: usize = 15;

/// Number of bytes in a single font glyph.
pub const GLYPH_BYTES: usize = 5;

/// Default interpreter step rate in Hz.
pub const CLOCK_HZ: u32 = 500;

/// Timer / keypad / display tick rate in Hz.
pub const TICK_HZ: u32 = 60;

/// The built-in hexadecimal font, one 8x5 glyph per digit 0..F.
///
/// Lives in the reserved low memory so that `Fx29` can address the glyph for
/// digit `d` at `5 * d`. Only the high nibble of each byte carries pixels.
pub const FONT: [u8; GLYPH_BYTES * 16] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
