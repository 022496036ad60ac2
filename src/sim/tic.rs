use std::time::Duration;

pub use crate::config::TIC_RATE;

/// Length of one simulation tick.
pub const TIC: Duration = Duration::from_micros(1_000_000 / TIC_RATE as u64);

/// Fixed-rate tick scheduler fed with wall-clock deltas.
///
/// At most one tick fires per [`advance`](Self::advance); when the caller
/// falls behind, the surplus is folded back to less than one tick instead
/// of being replayed.
#[derive(Clone, Copy, Debug)]
pub struct TicClock {
    period: Duration,
    acc: Duration,
}

impl Default for TicClock {
    fn default() -> Self {
        Self::new(TIC)
    }
}

impl TicClock {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            acc: Duration::ZERO,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `elapsed` and report whether a tick is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.acc += elapsed;
        if self.acc < self.period {
            return false;
        }
        let rem = self.acc.as_nanos() % self.period.as_nanos();
        self.acc = Duration::from_nanos(rem as u64);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut clk = TicClock::new(Duration::from_millis(10));
        assert!(!clk.advance(Duration::from_millis(4)));
        assert!(!clk.advance(Duration::from_millis(4)));
        assert!(clk.advance(Duration::from_millis(4)));
        // 2 ms carried over
        assert!(!clk.advance(Duration::from_millis(7)));
        assert!(clk.advance(Duration::from_millis(1)));
    }

    #[test]
    fn large_gap_fires_once_and_keeps_remainder() {
        let mut clk = TicClock::new(Duration::from_millis(10));
        assert!(clk.advance(Duration::from_millis(35)));
        assert!(!clk.advance(Duration::from_millis(4)));
        assert!(clk.advance(Duration::from_millis(1)));
    }

    #[test]
    fn default_runs_at_tic_rate() {
        assert_eq!(TicClock::default().period(), TIC);
        assert_eq!(TIC.as_micros(), 16_666);
    }
}
