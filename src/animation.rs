//! DOM-free animation math shared by the interactive widgets.

/// Cubic ease-out: fast start, gentle landing. Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A numeric tween from `from` to `to` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(from: i64, to: i64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Rounded display value after `elapsed_ms`. Lands exactly on `to` once done.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        let span = (self.to - self.from) as f64;
        (self.from as f64 + span * eased).round() as i64
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Tracks the vertical scroll position and reports which way the page is moving.
/// Moves smaller than `delta` are ignored so that trackpad jitter does not
/// flip the header back and forth.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    last_y: f64,
    delta: f64,
    direction: ScrollDirection,
}

impl ScrollTracker {
    pub fn new(start_y: f64, delta: f64) -> Self {
        Self {
            last_y: start_y,
            delta,
            direction: ScrollDirection::Up,
        }
    }

    pub fn update(&mut self, y: f64) -> ScrollDirection {
        let moved = y - self.last_y;
        if moved.abs() < self.delta {
            return self.direction;
        }
        // Rubber-band scrolling can report negative offsets at the top.
        self.direction = if moved > 0.0 && y > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_y = y;
        self.direction
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_and_monotonic() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mut last = 0.0;
        for step in 1..=20 {
            let v = ease_out_cubic(step as f64 / 20.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn tween_starts_at_from_and_lands_on_to() {
        let tween = Tween::new(0, 10_000, 2500.0);
        assert_eq!(tween.value_at(0.0), 0);
        assert_eq!(tween.value_at(2500.0), 10_000);
        assert_eq!(tween.value_at(9999.0), 10_000);
        assert!(tween.is_done(2500.0));
        assert!(!tween.is_done(2499.0));
    }

    #[test]
    fn tween_never_overshoots() {
        let tween = Tween::new(0, 20, 2500.0);
        for ms in (0..=2600).step_by(16) {
            let v = tween.value_at(ms as f64);
            assert!((0..=20).contains(&v), "{} out of range at {}ms", v, ms);
        }
    }

    #[test]
    fn tween_counts_down() {
        let tween = Tween::new(100, 0, 1000.0);
        assert_eq!(tween.value_at(0.0), 100);
        assert!(tween.value_at(500.0) < 100);
        assert_eq!(tween.value_at(1000.0), 0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween::new(0, 50, 0.0);
        assert_eq!(tween.value_at(0.0), 50);
    }

    #[test]
    fn scroll_tracker_ignores_jitter() {
        let mut tracker = ScrollTracker::new(0.0, 10.0);
        assert_eq!(tracker.update(4.0), ScrollDirection::Up);
        assert_eq!(tracker.update(120.0), ScrollDirection::Down);
        assert_eq!(tracker.update(115.0), ScrollDirection::Down);
        assert_eq!(tracker.update(60.0), ScrollDirection::Up);
    }

    #[test]
    fn scroll_tracker_treats_overscroll_as_up() {
        let mut tracker = ScrollTracker::new(-30.0, 10.0);
        assert_eq!(tracker.update(-5.0), ScrollDirection::Up);
    }

    #[test]
    fn carousel_indices_wrap() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 0), 0);
        assert_eq!(next_index(5, 0), 0);
    }
}
