/// What a single pin press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPress {
    /// Lock already picked (or waiting to open), or no such pin.
    Ignored,
    /// Correct pin; more to go.
    Raised { pin: usize },
    /// Correct final pin. Input is frozen from here on.
    Picked { pin: usize },
    /// Out of order: every pin drops and the sequence restarts.
    Jammed { pin: usize },
}

/// Ordered pin sequence. Pins must be pressed `0, 1, .., n-1`.
#[derive(Clone, Debug)]
pub struct PinLock {
    pin_count: usize,
    expected: usize,
}

impl PinLock {
    pub fn new(pin_count: usize) -> Self {
        Self {
            pin_count,
            expected: 0,
        }
    }

    pub fn pin_count(&self) -> usize {
        self.pin_count
    }

    pub fn expected_index(&self) -> usize {
        self.expected
    }

    pub fn is_picked(&self) -> bool {
        self.expected >= self.pin_count
    }

    pub fn is_raised(&self, pin: usize) -> bool {
        pin < self.expected.min(self.pin_count)
    }

    pub fn press(&mut self, pin: usize) -> PinPress {
        if self.is_picked() || pin >= self.pin_count {
            return PinPress::Ignored;
        }
        if pin == self.expected {
            self.expected += 1;
            if self.is_picked() {
                PinPress::Picked { pin }
            } else {
                PinPress::Raised { pin }
            }
        } else {
            self.expected = 0;
            PinPress::Jammed { pin }
        }
    }

    pub fn reset(&mut self) {
        self.expected = 0;
    }
}
