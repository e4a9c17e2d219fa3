/// One-way countdown driving a game round.
///
/// Each `tick` takes one second off the clock. Reaching zero ends the
/// countdown in the same tick, and ended is terminal: there is no pause,
/// no extension, and ticking an ended countdown does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    ended: bool,
}

impl Countdown {
    pub fn from_secs(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            ended: duration == 0,
        }
    }

    /// Advance the clock by one second. Returns true when this tick ended
    /// the countdown.
    pub fn tick(&mut self) -> bool {
        if self.ended {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.ended = true;
            return true;
        }

        false
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Seconds consumed so far.
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_decrements_once_per_tick() {
        let mut countdown = Countdown::from_secs(180);
        assert_eq!(countdown.remaining(), 180);
        assert!(!countdown.is_ended());

        countdown.tick();
        assert_eq!(countdown.remaining(), 179);
        assert_eq!(countdown.elapsed(), 1);
        assert!(!countdown.is_ended());
    }

    #[test]
    fn test_full_round_ends_at_zero() {
        let mut countdown = Countdown::from_secs(180);

        for _ in 0..179 {
            assert!(!countdown.tick());
        }
        assert_eq!(countdown.remaining(), 1);
        assert!(!countdown.is_ended());

        // The 180th tick reaches zero and ends the round
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_ended());
    }

    #[test]
    fn test_remaining_is_non_increasing() {
        let mut countdown = Countdown::from_secs(10);
        let mut last = countdown.remaining();

        for _ in 0..15 {
            countdown.tick();
            assert!(countdown.remaining() <= last);
            last = countdown.remaining();
        }
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut countdown = Countdown::from_secs(2);
        countdown.tick();
        countdown.tick();
        assert!(countdown.is_ended());

        // Further ticks are no-ops
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_ended());
        assert_eq!(countdown.elapsed(), 2);
    }

    #[test]
    fn test_zero_duration_starts_ended() {
        let countdown = Countdown::from_secs(0);
        assert!(countdown.is_ended());
        assert_eq!(countdown.remaining(), 0);
    }
}
