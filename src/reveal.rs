use std::time::Duration;

/// One-shot visibility latch behind the scroll-reveal animation.
///
/// A section starts `Hidden` and moves to `Revealed` the first time enough of
/// it is on screen. There is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    /// Feed one observation. Returns `true` only for the call that flips the
    /// latch.
    pub fn observe(&mut self, intersection_ratio: f64, threshold: f64) -> bool {
        if *self == Visibility::Revealed || intersection_ratio < threshold {
            return false;
        }
        *self = Visibility::Revealed;
        true
    }

    /// Reveal without an observation, for environments that cannot observe
    /// intersections at all.
    pub fn force(&mut self) -> bool {
        let changed = *self == Visibility::Hidden;
        *self = Visibility::Revealed;
        changed
    }

    pub fn is_revealed(self) -> bool {
        self == Visibility::Revealed
    }
}

/// Delay before the `index`th staggered child starts its own transition.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step.saturating_mul(index.try_into().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.1;

    #[test]
    fn test_stays_hidden_below_threshold() {
        let mut v = Visibility::default();
        assert!(!v.observe(0.0, THRESHOLD));
        assert!(!v.observe(0.09, THRESHOLD));
        assert!(!v.is_revealed());
    }

    #[test]
    fn test_reveals_once_at_threshold() {
        let mut v = Visibility::default();
        assert!(v.observe(0.1, THRESHOLD));
        assert!(v.is_revealed());
        // further crossings are not transitions
        assert!(!v.observe(0.5, THRESHOLD));
        assert!(!v.observe(1.0, THRESHOLD));
    }

    #[test]
    fn test_never_reverts_on_scroll_out() {
        let mut v = Visibility::default();
        v.observe(0.3, THRESHOLD);
        for ratio in [0.05, 0.0, 0.0, 0.2, 0.0] {
            v.observe(ratio, THRESHOLD);
            assert!(v.is_revealed());
        }
    }

    #[test]
    fn test_force_is_idempotent() {
        let mut v = Visibility::default();
        assert!(v.force());
        assert!(!v.force());
        assert!(!v.observe(1.0, THRESHOLD));
        assert!(v.is_revealed());
    }

    #[test]
    fn test_stagger_scales_with_index() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger(0, step), Duration::ZERO);
        assert_eq!(stagger(3, step), Duration::from_millis(300));
        assert_eq!(stagger(19, Duration::from_millis(200)), Duration::from_millis(3800));
    }
}
