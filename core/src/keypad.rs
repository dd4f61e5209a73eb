/// The 16-key input device.
///
/// Tracks which keys are currently held and latches the most recent new
/// press for the wait-for-key instruction. The latch is retired on the host
/// tick cadence rather than when the interpreter reads it, so a key struck
/// mid-frame stays visible to the interpreter through the following frame's
/// steps.
#[derive(Debug, Default)]
pub struct Keypad {
    held: u16,
    latch: Option<u8>,
    fresh: bool,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Marks a key as held and, if no press is already latched, latches it.
    /// The first press wins within a tick.
    pub fn press(&mut self, key: u8) {
        let key = key & 0xF;
        self.held |= 1 << key;
        if self.latch.is_none() {
            self.latch = Some(key);
            self.fresh = true;
        }
    }

    /// Marks a key as released. Does not disturb the latch.
    pub fn release(&mut self, key: u8) {
        self.held &= !(1 << (key & 0xF));
    }

    /// Whether a key is currently held.
    pub fn is_held(&self, key: u8) -> bool {
        self.held >> (key & 0xF) & 1 == 1
    }

    /// The most recent latched press, if any. Reading does not clear it;
    /// only [`Keypad::tick`] does.
    pub fn latched(&self) -> Option<u8> {
        self.latch
    }

    /// Advances the latch lifecycle by one host tick.
    ///
    /// A press latched since the previous tick survives this one, so it can
    /// still be observed by interpreter steps in the coming frame; a latch
    /// that has already lived through a full tick is cleared.
    pub fn tick(&mut self) {
        if self.fresh {
            self.fresh = false;
        } else {
            self.latch = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_track_held_keys() {
        let mut keypad = Keypad::new();
        keypad.press(0x5);
        keypad.press(0xA);
        assert!(keypad.is_held(0x5));
        assert!(keypad.is_held(0xA));
        assert!(!keypad.is_held(0x0));

        keypad.release(0x5);
        assert!(!keypad.is_held(0x5));
        assert!(keypad.is_held(0xA));
    }

    #[test]
    fn test_first_press_wins_the_latch() {
        let mut keypad = Keypad::new();
        keypad.press(0x3);
        keypad.press(0x7);
        assert_eq!(keypad.latched(), Some(0x3));
    }

    #[test]
    fn test_reading_the_latch_does_not_clear_it() {
        let mut keypad = Keypad::new();
        keypad.press(0x3);
        assert_eq!(keypad.latched(), Some(0x3));
        assert_eq!(keypad.latched(), Some(0x3));
    }

    #[test]
    fn test_release_leaves_the_latch_alone() {
        let mut keypad = Keypad::new();
        keypad.press(0x3);
        keypad.release(0x3);
        assert_eq!(keypad.latched(), Some(0x3));
    }

    #[test]
    fn test_latch_survives_one_tick_then_retires() {
        let mut keypad = Keypad::new();
        keypad.press(0x5);
        keypad.tick();
        assert_eq!(keypad.latched(), Some(0x5));
        keypad.tick();
        assert_eq!(keypad.latched(), None);
    }

    #[test]
    fn test_new_press_relatches_after_retirement() {
        let mut keypad = Keypad::new();
        keypad.press(0x5);
        keypad.tick();
        keypad.tick();
        keypad.press(0x9);
        assert_eq!(keypad.latched(), Some(0x9));
    }

    #[test]
    fn test_tick_without_press_is_a_noop() {
        let mut keypad = Keypad::new();
        keypad.tick();
        assert_eq!(keypad.latched(), None);
        assert!(!keypad.is_held(0x0));
    }
}
