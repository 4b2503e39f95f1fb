//! Countdowns: the server-synchronized promo timer and the local payment window.

/// Shown while the remaining time is unknown or invalid.
pub const PLACEHOLDER: &str = "--:--:--";

/// Seconds → `HH:MM:SS`. Hours are not wrapped, so 100 hours renders as `100:00:00`.
pub fn format_hms(seconds: Option<i64>) -> String {
    match seconds {
        Some(s) if s >= 0 => format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Seconds → `MM:SS`, clamped at zero. Used for the payment window.
pub fn format_mm_ss(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// Remaining time as last reported by the backend, ticked down locally.
///
/// The local tick never goes below zero; a periodic [`Countdown::sync`]
/// replaces the value to correct drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<i64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> Option<i64> {
        self.remaining
    }

    /// One local second elapsed. Unknown and zero stay as they are.
    pub fn tick(&mut self) {
        if let Some(s) = self.remaining.as_mut() {
            if *s > 0 {
                *s -= 1;
            }
        }
    }

    /// Adopt the server value. A failed fetch should not call this.
    pub fn sync(&mut self, seconds: i64) {
        self.remaining = Some(seconds);
    }

    /// Whether the timer card should be visible.
    pub fn is_running(&self) -> bool {
        matches!(self.remaining, Some(s) if s > 0)
    }

    pub fn display(&self) -> String {
        format_hms(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_formatting() {
        assert_eq!(format_hms(Some(3661)), "01:01:01");
        assert_eq!(format_hms(Some(0)), "00:00:00");
        assert_eq!(format_hms(Some(59)), "00:00:59");
        assert_eq!(format_hms(Some(360_000)), "100:00:00");
    }

    #[test]
    fn hms_placeholder_for_unknown_or_negative() {
        assert_eq!(format_hms(None), PLACEHOLDER);
        assert_eq!(format_hms(Some(-1)), "--:--:--");
    }

    #[test]
    fn mm_ss_clamps_at_zero() {
        assert_eq!(format_mm_ss(900), "15:00");
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(-5), "00:00");
    }

    #[test]
    fn tick_never_goes_negative() {
        let mut countdown = Countdown::new();
        countdown.tick();
        assert_eq!(countdown.remaining(), None);

        countdown.sync(2);
        countdown.tick();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), Some(0));
        assert!(!countdown.is_running());
    }

    #[test]
    fn sync_overrides_drift() {
        let mut countdown = Countdown::new();
        countdown.sync(100);
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), Some(90));
        countdown.sync(85);
        assert_eq!(countdown.display(), "00:01:25");
        assert!(countdown.is_running());
    }

    #[test]
    fn negative_server_value_hides_the_card() {
        let mut countdown = Countdown::new();
        countdown.sync(-30);
        countdown.tick();
        assert_eq!(countdown.remaining(), Some(-30));
        assert!(!countdown.is_running());
        assert_eq!(countdown.display(), PLACEHOLDER);
    }
}
