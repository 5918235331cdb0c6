use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Wrapping cursor over a fixed, non-empty list, with an auto-advance gate.
///
/// The timer itself lives in the view; it calls [`Carousel::tick`] on every
/// interval. Manual navigation does not touch the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    auto_advance: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            index: 0,
            auto_advance: true,
        })
    }

    pub fn for_items<T>(items: &[T]) -> Result<Self, CarouselError> {
        Self::new(items.len())
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// One auto-advance interval elapsed. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance {
            return false;
        }
        self.advance();
        true
    }

    /// Stop reacting to ticks. Called when the owning view is torn down, so a
    /// tick that was already queued cannot move the index afterwards.
    pub fn teardown(&mut self) {
        self.auto_advance = false;
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> Carousel {
        Carousel::new(4).unwrap()
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
        assert_eq!(
            Carousel::for_items::<u8>(&[]).unwrap_err().to_string(),
            "carousel needs at least one item"
        );
    }

    #[test]
    fn test_advance_wraps_to_first() {
        let mut c = four();
        c.jump_to(3).unwrap();
        c.advance();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut c = four();
        c.retreat();
        assert_eq!(c.current(), 3);
        c.retreat();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut c = four();
        for _ in 0..c.item_count() {
            c.advance();
        }
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        c.advance();
        assert_eq!(c.current(), 0);
        c.retreat();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut c = four();
        c.jump_to(2).unwrap();
        assert_eq!(
            c.jump_to(4),
            Err(CarouselError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_ticks_advance_until_teardown() {
        let mut c = four();
        assert!(c.tick());
        assert!(c.tick());
        assert_eq!(c.current(), 2);

        c.teardown();
        assert!(!c.is_auto_advancing());
        for _ in 0..5 {
            assert!(!c.tick());
        }
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_manual_navigation_does_not_pause_auto_advance() {
        let mut c = four();
        c.jump_to(1).unwrap();
        c.retreat();
        assert!(c.is_auto_advancing());
        assert!(c.tick());
        assert_eq!(c.current(), 1);
    }
}
