use crate::constants::STACK_DEPTH;

/// Everything that can go wrong while loading an image or stepping the
/// machine. Each condition is local to the call that produced it; none are
/// transient.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmulatorError {
    #[error("program image is {size} bytes, at most {capacity} bytes fit above the ROM origin")]
    RomTooLarge { size: usize, capacity: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: u16 },

    #[error("returned from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("subroutine nesting exceeds the {STACK_DEPTH}-slot return stack")]
    StackOverflow,

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },
}
