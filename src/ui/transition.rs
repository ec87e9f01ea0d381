//! Time-based interpolation for hover effects.

use std::time::Duration;

/// Scale-up duration of a hovered card.
pub const SCALE_DURATION: Duration = Duration::from_millis(300);

/// Overlay and image fade duration.
pub const FADE_DURATION: Duration = Duration::from_millis(150);

/// A value moving linearly from 0.0 to 1.0 (or back) over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    current: f32,
    target: f32,
    duration: Duration,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            duration,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    /// Move toward the target by the share of the duration that `dt` covers.
    pub fn advance(&mut self, dt: Duration) {
        if self.duration.is_zero() {
            self.current = self.target;
            return;
        }

        let step = dt.as_secs_f32() / self.duration.as_secs_f32();
        if self.current < self.target {
            self.current = (self.current + step).min(self.target);
        } else {
            self.current = (self.current - step).max(self.target);
        }
    }

    /// Eased position in `0.0..=1.0`.
    pub fn value(&self) -> f32 {
        ease_in_out(self.current)
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Hover state of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverFx {
    pub scale: Transition,
    pub fade: Transition,
}

impl HoverFx {
    pub fn new(animated: bool) -> Self {
        let (scale, fade) = if animated {
            (SCALE_DURATION, FADE_DURATION)
        } else {
            (Duration::ZERO, Duration::ZERO)
        };
        Self {
            scale: Transition::new(scale),
            fade: Transition::new(fade),
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        let target = if hovered { 1.0 } else { 0.0 };
        self.scale.set_target(target);
        self.fade.set_target(target);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.scale.advance(dt);
        self.fade.advance(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.scale.is_settled() && self.fade.is_settled()
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_progresses_with_time() {
        let mut t = Transition::new(Duration::from_millis(300));
        t.set_target(1.0);

        t.advance(Duration::from_millis(100));
        let first = t.value();
        t.advance(Duration::from_millis(100));
        let second = t.value();

        assert!(first > 0.0 && first < 1.0);
        assert!(second > first);
        assert!(!t.is_settled());

        t.advance(Duration::from_millis(200));
        assert!(t.is_settled());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_transition_reverses() {
        let mut t = Transition::new(Duration::from_millis(100));
        t.set_target(1.0);
        t.advance(Duration::from_millis(100));
        t.set_target(0.0);
        t.advance(Duration::from_millis(50));
        assert!(t.value() > 0.0 && t.value() < 1.0);
        t.advance(Duration::from_secs(1));
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut fx = HoverFx::new(false);
        fx.set_hovered(true);
        fx.advance(Duration::ZERO);
        assert!(fx.is_settled());
        assert_eq!(fx.scale.value(), 1.0);
        assert_eq!(fx.fade.value(), 1.0);
    }

    #[test]
    fn test_fade_settles_before_scale() {
        let mut fx = HoverFx::new(true);
        fx.set_hovered(true);
        fx.advance(Duration::from_millis(150));
        assert!(fx.fade.is_settled());
        assert!(!fx.scale.is_settled());
    }
}
