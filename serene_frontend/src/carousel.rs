use std::time::{Duration, Instant};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Drives which carousel item is shown.
///
/// Two sources write the index: a fixed-interval timer and the user settling a
/// scroll gesture. Neither is locked against the other; whichever runs last wins.
#[derive(Debug)]
pub struct CarouselController {
    len: usize,
    current_index: usize,
    interval: Duration,
    next_tick: Option<Instant>,
    pending_scroll: Option<usize>,
    last_offset: Option<f32>,
    scrolling: bool,
    user_scrolled: bool,
}

impl CarouselController {
    pub fn new(interval: Duration) -> Self {
        Self {
            len: 0,
            current_index: 0,
            interval,
            next_tick: None,
            pending_scroll: None,
            last_offset: None,
            scrolling: false,
            user_scrolled: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timer_active(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Time left before the next automatic advance, if the timer runs.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Applies a new item count. Lists of one or zero items stop the timer.
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        if len == 0 {
            self.current_index = 0;
        } else if self.current_index >= len {
            self.current_index = len - 1;
        }
        if let Some(target) = self.pending_scroll {
            if target >= len {
                self.pending_scroll = None;
            }
        }

        if len <= 1 {
            self.next_tick = None;
        } else if self.next_tick.is_none() {
            self.next_tick = Some(now + self.interval);
        }
    }

    /// Advances the index when the interval has elapsed. Returns the new index.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let deadline = self.next_tick?;
        if now < deadline {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.len;
        self.next_tick = Some(now + self.interval);
        self.pending_scroll = Some(self.current_index);
        Some(self.current_index)
    }

    /// Scroll request for the view to animate to, consumed once.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.pending_scroll.take()
    }

    pub fn has_scroll_request(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// True while the view is still moving and needs another frame to settle.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Feeds the view's scroll offset for this frame. When a user gesture has come
    /// to rest, the nearest item becomes current and its index is returned.
    /// Movement the controller requested itself settles without touching the index.
    pub fn observe_scroll(&mut self, offset: f32, stride: f32, interacting: bool) -> Option<usize> {
        let moved = self
            .last_offset
            .map(|last| (last - offset).abs() > 0.5)
            .unwrap_or(false);
        self.last_offset = Some(offset);

        if interacting {
            self.user_scrolled = true;
        }
        if interacting || moved {
            self.scrolling = true;
            return None;
        }
        if !self.scrolling {
            return None;
        }
        self.scrolling = false;
        if !std::mem::take(&mut self.user_scrolled) {
            return None;
        }
        self.on_scroll_settle(offset, stride)
    }

    /// Overwrites the index from a settled scroll offset.
    pub fn on_scroll_settle(&mut self, offset: f32, stride: f32) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current_index = nearest_index(offset, stride, self.len);
        Some(self.current_index)
    }

    /// Selects an index directly, e.g. from a pager dot.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current_index = index;
            self.pending_scroll = Some(index);
        }
    }
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Whether this frame's input moves the carousel: a drag past the click
/// threshold or wheel/trackpad scrolling over it. Plain presses do not count.
pub fn is_scroll_gesture(hovered: bool, dragging: bool, wheel_delta: f32) -> bool {
    hovered && (dragging || wheel_delta != 0.0)
}

pub fn nearest_index(offset: f32, stride: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if stride <= 0.0 || !offset.is_finite() {
        return 0;
    }
    let raw = (offset.max(0.0) / stride).round() as usize;
    raw.min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_without_drag_is_not_a_gesture() {
        assert!(!is_scroll_gesture(true, false, 0.0));
        assert!(is_scroll_gesture(true, true, 0.0));
        assert!(is_scroll_gesture(true, false, -12.0));
        assert!(!is_scroll_gesture(false, true, 3.0));
    }

    #[test]
    fn click_after_programmatic_scroll_keeps_index() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(Duration::from_secs(5));
        carousel.set_len(3, start);
        carousel.jump_to(1);
        carousel.take_scroll_request();

        // The view could only scroll partway; a press on a card must not move the index.
        let stride = 200.0;
        let pressed = is_scroll_gesture(true, false, 0.0);
        assert_eq!(carousel.observe_scroll(120.0, stride, pressed), None);
        assert_eq!(carousel.observe_scroll(120.0, stride, pressed), None);
        assert_eq!(carousel.current_index(), 1);
    }

    const STEP: Duration = Duration::from_secs(5);

    #[test]
    fn empty_list_starts_no_timer() {
        let now = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(0, now);
        assert!(!carousel.timer_active());
        assert_eq!(carousel.tick(now + STEP * 3), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn single_item_disables_auto_advance() {
        let now = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(1, now);
        assert!(!carousel.timer_active());
        assert_eq!(carousel.tick(now + STEP), None);
    }

    #[test]
    fn tick_wraps_and_requests_scroll() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(3, start);

        assert_eq!(carousel.tick(start + Duration::from_secs(1)), None);
        assert_eq!(carousel.tick(start + STEP), Some(1));
        assert_eq!(carousel.take_scroll_request(), Some(1));
        assert_eq!(carousel.take_scroll_request(), None);
        assert_eq!(carousel.tick(start + STEP * 2), Some(2));
        assert_eq!(carousel.tick(start + STEP * 3), Some(0));
    }

    #[test]
    fn index_stays_in_bounds_as_list_shrinks() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(4, start);
        carousel.jump_to(3);
        for len in (1..4).rev() {
            carousel.set_len(len, start);
            assert!(carousel.current_index() < len);
        }
        assert!(!carousel.timer_active());
        carousel.set_len(0, start);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn growing_past_one_restarts_timer() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(1, start);
        carousel.set_len(2, start + STEP);
        assert_eq!(carousel.time_until_tick(start + STEP), Some(STEP));
        assert_eq!(carousel.tick(start + STEP * 2), Some(1));
    }

    #[test]
    fn settled_gesture_overrides_index() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(5, start);

        assert_eq!(carousel.observe_scroll(0.0, 300.0, false), None);
        assert_eq!(carousel.observe_scroll(150.0, 300.0, true), None);
        assert_eq!(carousel.observe_scroll(610.0, 300.0, false), None);
        assert_eq!(carousel.observe_scroll(610.0, 300.0, false), Some(2));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.observe_scroll(610.0, 300.0, false), None);

        // The timer continues from whatever the gesture left behind.
        assert_eq!(carousel.tick(start + STEP), Some(3));
    }

    #[test]
    fn programmatic_scroll_does_not_rewrite_index() {
        let start = Instant::now();
        let mut carousel = CarouselController::new(STEP);
        carousel.set_len(3, start);
        carousel.observe_scroll(0.0, 300.0, false);

        assert_eq!(carousel.tick(start + STEP), Some(1));
        assert_eq!(carousel.tick(start + STEP * 2), Some(2));
        // The view clamps short of the last item's offset.
        assert_eq!(carousel.observe_scroll(250.0, 300.0, false), None);
        assert_eq!(carousel.observe_scroll(380.0, 300.0, false), None);
        assert!(carousel.is_scrolling());
        assert_eq!(carousel.observe_scroll(380.0, 300.0, false), None);
        assert!(!carousel.is_scrolling());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn nearest_index_clamps() {
        assert_eq!(nearest_index(-40.0, 300.0, 3), 0);
        assert_eq!(nearest_index(449.0, 300.0, 3), 1);
        assert_eq!(nearest_index(451.0, 300.0, 3), 2);
        assert_eq!(nearest_index(10_000.0, 300.0, 3), 2);
        assert_eq!(nearest_index(100.0, 0.0, 3), 0);
        assert_eq!(nearest_index(100.0, 300.0, 0), 0);
    }

    #[test]
    fn index_is_always_in_range_over_many_ticks() {
        let start = Instant::now();
        for len in 2..7 {
            let mut carousel = CarouselController::new(STEP);
            carousel.set_len(len, start);
            for step in 1..(len as u32 * 3) {
                carousel.tick(start + STEP * step);
                assert!(carousel.current_index() < len);
            }
        }
    }
}
