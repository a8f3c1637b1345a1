/// The width of the display in cells
pub const DISPLAY_WIDTH: usize = 64;
/// The height of the display in cells
pub const DISPLAY_HEIGHT: usize = 32;
/// Total cell count of the row-major framebuffer
pub const FRAMEBUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;
/// The size of ram in bytes
pub const RAM_SIZE: usize = 4096;
/// Where loaded program images start
pub const ROM_START_ADDRESS: u16 = 0x200;
/// How many image bytes fit between the ROM origin and the end of ram
pub const PROGRAM_CAPACITY: usize = RAM_SIZE - ROM_START_ADDRESS as usize;
/// Amount of general purpose registers
pub const NUM_REGISTERS: usize = 16;
/// Amount of keys on the hex keypad
pub const NUM_KEYS: usize = 16;
/// How many nested subroutine calls the return stack holds
pub const STACK_DEPTH: usize = 16;
/// Bytes per glyph in the built-in font, glyph N starts at N * 5
pub const FONT_GLYPH_BYTES: usize = 5;
