use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use tracing::{debug, error, info};

use vip8_core::constants::TICK_HZ;
use vip8_core::{Error, Interpreter};
use vip8_display::Display;

use crate::keymap::keymap;

/// Where the post-mortem memory snapshot lands.
const DUMP_PATH: &str = "mem.dump";

/// Loads a ROM and drives the machine until quit or a fatal fault.
///
/// Each iteration is one 60 Hz frame: drain input events, run the frame's
/// share of interpreter steps, advance the timers and keypad latch, render
/// if anything was drawn, then sleep out the remainder of the frame.
pub fn run(rom: &Path, clock_hz: u32) -> Result<(), String> {
    let mut interpreter = Interpreter::new();

    let program = fs::read(rom).map_err(|e| format!("unable to read {}: {e}", rom.display()))?;
    interpreter.load(&program).map_err(|e| e.to_string())?;
    info!("loaded {} ({} bytes)", rom.display(), program.len());

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let frame_time = Duration::from_secs(1) / TICK_HZ;
    let steps_per_frame = (clock_hz / TICK_HZ).max(1);

    'frame: loop {
        let frame_start = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        interpreter.press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        interpreter.release(kc);
                    }
                }
                _ => {}
            }
        }

        for _ in 0..steps_per_frame {
            match interpreter.step() {
                Ok(true) => {}
                // halted awaiting a key; idle for the rest of the frame
                Ok(false) => break,
                Err(e) => {
                    crash_dump(&interpreter, &e);
                    return Err(e.to_string());
                }
            }
        }

        if interpreter.tick() {
            debug!("tone stopped");
        }

        if let Some(frame) = interpreter.take_frame() {
            display.render(&frame)?;
        }

        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}

/// Surfaces the machine's full state at the point of failure: registers and
/// stack into the log, the 4096-byte memory image onto disk.
fn crash_dump(interpreter: &Interpreter, error: &Error) {
    error!("fatal: {error}");
    error!(
        "registers: PC: {:04X} I: {:04X} SP: {:02X} DT: {:02X} ST: {:02X}",
        interpreter.program_counter(),
        interpreter.address_register(),
        interpreter.stack_pointer(),
        interpreter.timers().delay(),
        interpreter.timers().sound(),
    );
    error!("v: {:02X?}", interpreter.registers());
    error!("stack: {:04X?}", interpreter.stack());
    match fs::write(DUMP_PATH, interpreter.memory()) {
        Ok(()) => info!("memory image written to {DUMP_PATH}"),
        Err(e) => error!("unable to write {DUMP_PATH}: {e}"),
    }
}
