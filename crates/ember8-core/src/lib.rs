//! Embeddable CHIP-8 execution core.
//!
//! The crate owns the whole machine state and exposes the boundary a
//! presentation layer needs: load an image, step one cycle per time slice,
//! inject key events, and consume the draw/buzz flags. Rendering, audio and
//! input device mapping live with the caller.

/// Display geometry, memory layout and the other fixed sizes of the machine
mod constants;
/// The fetch, decode, execute cycle and the machine state it mutates
mod cpu;
/// Error conditions surfaced at the load and step boundaries
mod error;
/// The decoded instruction set
mod instruction;
/// Addressable memory with the built-in font
mod ram;
/// General purpose registers, the index register and both timers
mod registers;
/// Program images loaded from disk or built from bytes
mod rombuffer;
/// The subroutine return stack
mod stack;

pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAMEBUFFER_SIZE, NUM_KEYS};
pub use cpu::{Cpu, DecodeMode};
pub use error::EmulatorError;
pub use rombuffer::RomBuffer;

/// Monochrome display cells in row-major order, indexed
/// `x + y * DISPLAY_WIDTH`.
pub type Framebuffer = [bool; FRAMEBUFFER_SIZE];
