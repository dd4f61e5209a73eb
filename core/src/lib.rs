//! Virtual machine core for the CHIP-8 architecture: a 4K address space,
//! 16 8-bit registers, a 64x32 XOR-composited monochrome display, a 16-key
//! pad and two 60 Hz countdown timers.
//!
//! The host drives an [`Interpreter`] on two cadences: `step()` at the
//! instruction clock and `tick()` at the fixed timer rate, reading frames
//! out through `take_frame()` and injecting input through `press()` /
//! `release()`. Presentation, ROM file handling and pacing live outside
//! this crate.

pub use error::Error;
pub use frame_buffer::FrameBuffer;
pub use instruction::Instruction;
pub use interpreter::Interpreter;
pub use keypad::Keypad;
pub use timers::Timers;

pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod interpreter;
mod keypad;
mod opcode;
mod timers;
