//! Tick-driven rotating carousel.

/// Ticks between automatic advances (the tick stream runs at 4 Hz, so this
/// is roughly three seconds per item).
const TICKS_PER_ADVANCE: u32 = 12;

/// A rotating display of items, one visible at a time.
///
/// The carousel owns no timer: the owner forwards ticks from the terminal's
/// tick stream, which is cancelled on teardown. While paused (a detail
/// overlay is open) ticks are ignored.
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    ticks: u32,
    paused: bool,
}

impl<T> Carousel<T> {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            ticks: 0,
            paused: false,
        }
    }

    /// Replace the items and restart from the first one.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
        self.ticks = 0;
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Position indicator, 1-based ("2/5").
    pub fn position(&self) -> String {
        if self.items.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.index + 1, self.items.len())
        }
    }

    pub const fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance to the next item, wrapping at the end.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
            self.ticks = 0;
        }
    }

    /// Step back to the previous item, wrapping at the start.
    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
            self.ticks = 0;
        }
    }

    /// Count a tick; advances once enough ticks have accumulated. Inert
    /// while paused or with fewer than two items.
    pub fn on_tick(&mut self) {
        if self.paused || self.items.len() < 2 {
            return;
        }
        self.ticks += 1;
        if self.ticks >= TICKS_PER_ADVANCE {
            self.next();
        }
    }
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        let mut c = Carousel::new();
        c.set_items((0..n).collect());
        c
    }

    /// With N items starting at index 0, N advances return to item 0.
    #[test]
    fn advancing_is_cyclic() {
        let mut c = carousel(5);
        assert_eq!(c.current(), Some(&0));
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current(), Some(&0));
    }

    #[test]
    fn ticks_accumulate_into_an_advance() {
        let mut c = carousel(3);
        for _ in 0..TICKS_PER_ADVANCE {
            c.on_tick();
        }
        assert_eq!(c.current(), Some(&1));
    }

    #[test]
    fn timer_firings_wrap_around_all_items() {
        let mut c = carousel(3);
        for _ in 0..(TICKS_PER_ADVANCE * 3) {
            c.on_tick();
        }
        assert_eq!(c.current(), Some(&0));
    }

    #[test]
    fn paused_carousel_ignores_ticks() {
        let mut c = carousel(3);
        c.set_paused(true);
        for _ in 0..(TICKS_PER_ADVANCE * 2) {
            c.on_tick();
        }
        assert_eq!(c.current(), Some(&0));
        c.set_paused(false);
        for _ in 0..TICKS_PER_ADVANCE {
            c.on_tick();
        }
        assert_eq!(c.current(), Some(&1));
    }

    #[test]
    fn single_item_never_advances() {
        let mut c = carousel(1);
        for _ in 0..(TICKS_PER_ADVANCE * 4) {
            c.on_tick();
        }
        assert_eq!(c.current(), Some(&0));
    }

    #[test]
    fn prev_wraps_to_the_last_item() {
        let mut c = carousel(4);
        c.prev();
        assert_eq!(c.current(), Some(&3));
    }

    #[test]
    fn manual_advance_resets_the_tick_budget() {
        let mut c = carousel(3);
        for _ in 0..(TICKS_PER_ADVANCE - 1) {
            c.on_tick();
        }
        c.next();
        assert_eq!(c.current(), Some(&1));
        c.on_tick();
        // One tick after a manual advance must not advance again.
        assert_eq!(c.current(), Some(&1));
    }

    #[test]
    fn position_indicator() {
        let mut c = carousel(3);
        assert_eq!(c.position(), "1/3");
        c.next();
        assert_eq!(c.position(), "2/3");
        let empty: Carousel<usize> = Carousel::new();
        assert_eq!(empty.position(), "0/0");
    }
}
