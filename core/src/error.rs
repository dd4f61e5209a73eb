use crate::constants::MAX_SPRITE_ROWS;

/// Fatal interpreter conditions.
///
/// Every variant is unrecoverable for the current execution: the interpreter
/// stops advancing and the caller is expected to inspect its registers,
/// stack and memory through the diagnostic accessors. Waiting on a keypress
/// is not an error; `Interpreter::step` reports it through its `Ok(false)`
/// return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("program counter {pc:#06X} outside addressable memory")]
    OutOfBoundsProgramCounter { pc: u16 },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with an empty call stack")]
    StackUnderflow,

    #[error("unrecognized instruction {opcode:#06X}")]
    UnrecognizedInstruction { opcode: u16 },

    #[error("sprite height {rows} exceeds the {MAX_SPRITE_ROWS} row maximum")]
    InvalidSpriteHeight { rows: usize },

    #[error("memory access at {address:#06X} outside addressable memory")]
    MemoryOutOfBounds { address: usize },

    #[error("program of {size} bytes exceeds the {capacity} byte program area")]
    RomTooLarge { size: usize, capacity: usize },
}
