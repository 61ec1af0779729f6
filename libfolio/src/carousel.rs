//! Auto-scrolling media carousel
//!
//! The overlay renders a project's media strip twice back to back; this
//! scroller advances a horizontal offset over the doubled strip and snaps
//! back to zero at the halfway point, which lands on an identical frame
//! and makes the loop seamless. The snap must be applied without an
//! animated transition; every other advance animates.
//!
//! Like the typewriter, the scroller is deadline-driven and owns at most
//! one pending tick. It is armed only while its owning overlay entry is
//! active, and the strip width is re-measured on every activation since
//! layout can change between openings.

use std::time::{Duration, Instant};

/// Default tick interval between offset advances
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);
/// Default advance per tick, in cells
pub const DEFAULT_STEP: u16 = 1;

/// An offset the renderer should apply to the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollApply {
    pub offset: u16,
    /// False exactly when the offset snapped back to zero; the renderer
    /// must apply that jump without a smooth transition
    pub animated: bool,
}

#[derive(Debug, Clone)]
pub struct AutoScroller {
    tick: Duration,
    step: u16,
    /// Width of one unduplicated copy of the strip; None while inactive
    half_width: Option<u16>,
    offset: u16,
    next_tick: Option<Instant>,
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new(DEFAULT_TICK, DEFAULT_STEP)
    }
}

impl AutoScroller {
    pub fn new(tick: Duration, step: u16) -> Self {
        Self {
            tick,
            step,
            half_width: None,
            offset: 0,
            next_tick: None,
        }
    }

    /// Bind to a freshly measured strip and arm the first tick
    ///
    /// `strip_width` is the full doubled width. A zero measurement leaves
    /// the scroller unarmed: a strip that failed to lay out must not tick
    /// into a degenerate reset loop.
    pub fn activate(&mut self, strip_width: u16, now: Instant) {
        self.deactivate();
        let half = strip_width / 2;
        if half == 0 {
            tracing::debug!("carousel strip has no measurable width, not arming");
            return;
        }
        self.half_width = Some(half);
        self.next_tick = Some(now + self.tick);
    }

    /// Tear down the tick; no stale advance can fire after this
    pub fn deactivate(&mut self) {
        self.half_width = None;
        self.offset = 0;
        self.next_tick = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// The single pending tick deadline, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Advance through every elapsed tick, returning the last offset to
    /// apply. A non-animated result takes precedence within one poll so
    /// the renderer never animates across the seam.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollApply> {
        let half = self.half_width?;
        let mut apply = None;
        while let Some(tick_at) = self.next_tick {
            if tick_at > now {
                break;
            }
            let next = self.offset.saturating_add(self.step);
            let snapped = next >= half;
            self.offset = if snapped { 0 } else { next };
            apply = Some(ScrollApply {
                offset: self.offset,
                animated: !snapped,
            });
            self.next_tick = Some(tick_at + self.tick);
            if snapped {
                break;
            }
        }
        apply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> AutoScroller {
        AutoScroller::new(Duration::from_millis(20), 1)
    }

    #[test]
    fn test_zero_width_does_not_arm() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(0, now);
        assert!(!s.is_active());
        assert!(s.poll(now + Duration::from_secs(1)).is_none());

        // A doubled width of 1 still measures an empty single copy
        s.activate(1, now);
        assert!(!s.is_active());
    }

    #[test]
    fn test_offset_advances_smoothly() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(200, now);

        let apply = s.poll(now + Duration::from_millis(20)).unwrap();
        assert_eq!(apply, ScrollApply { offset: 1, animated: true });

        let apply = s.poll(now + Duration::from_millis(60)).unwrap();
        assert_eq!(apply.offset, 3);
        assert!(apply.animated);
    }

    #[test]
    fn test_wraparound_snaps_to_zero_without_animation() {
        let mut s = scroller();
        let mut now = Instant::now();
        s.activate(20, now); // half = 10

        // Nine animated advances up to offset 9
        for expected in 1..10 {
            now += Duration::from_millis(20);
            let apply = s.poll(now).unwrap();
            assert_eq!(apply.offset, expected);
            assert!(apply.animated);
        }

        // The tenth tick would reach the half width: snap to exactly 0
        now += Duration::from_millis(20);
        let apply = s.poll(now).unwrap();
        assert_eq!(apply, ScrollApply { offset: 0, animated: false });
    }

    #[test]
    fn test_offset_never_reaches_half_width() {
        let mut s = scroller();
        let mut now = Instant::now();
        s.activate(14, now); // half = 7

        for _ in 0..100 {
            now += Duration::from_millis(20);
            if let Some(apply) = s.poll(now) {
                assert!(apply.offset < 7);
            }
        }
    }

    #[test]
    fn test_catch_up_across_seam_reports_snap() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(10, now); // half = 5

        // Enough elapsed time to cross the seam in a single poll: the
        // returned apply is the non-animated reset, not an animated
        // offset beyond it.
        let apply = s.poll(now + Duration::from_millis(20 * 5)).unwrap();
        assert_eq!(apply, ScrollApply { offset: 0, animated: false });
    }

    #[test]
    fn test_deactivate_clears_tick_and_offset() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(100, now);
        s.poll(now + Duration::from_millis(40));
        assert!(s.offset() > 0);

        s.deactivate();
        assert!(!s.is_active());
        assert_eq!(s.offset(), 0);
        assert!(s.poll(now + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_reactivation_remeasures_width() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(200, now);
        s.deactivate();

        // Layout changed between activations; the new half width governs
        s.activate(8, now); // half = 4
        let apply = s.poll(now + Duration::from_millis(20 * 4)).unwrap();
        assert_eq!(apply, ScrollApply { offset: 0, animated: false });
    }

    #[test]
    fn test_single_pending_tick() {
        let mut s = scroller();
        let now = Instant::now();
        s.activate(50, now);

        let first = s.deadline().unwrap();
        assert!(s.poll(first - Duration::from_millis(1)).is_none());
        s.poll(first);
        let second = s.deadline().unwrap();
        assert_eq!(second, first + Duration::from_millis(20));
    }
}
