//! Expanded-project overlay controller
//!
//! Owns the single "active entry" slot and the background scroll lock.
//! At most one project is expanded at any time; while one is, background
//! scrolling is locked. The lock is a scoped resource: acquired when an
//! entry opens and released by drop on every exit path (escape, outside
//! click, explicit close, switching entries, teardown).

use crate::content::ProjectEntry;

/// Exclusive hold on the page's background scroll
///
/// Held by the controller for exactly as long as an entry is active.
/// Release happens in `Drop`, so no exit path can leak the lock.
#[derive(Debug)]
pub struct ScrollLock(());

impl ScrollLock {
    fn acquire() -> Self {
        tracing::debug!("background scroll locked");
        ScrollLock(())
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        tracing::debug!("background scroll unlocked");
    }
}

/// Carousel lifecycle commands emitted by overlay transitions
///
/// The carousel tick may only exist while its owning entry is active, so
/// the controller tells the caller exactly when to create and destroy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Measure the active entry's media strip and arm the auto-scroller
    StartCarousel,
    /// Tear down the auto-scroller for the entry that just deactivated
    StopCarousel,
}

#[derive(Debug)]
struct ActiveEntry {
    id: String,
    has_carousel: bool,
    _lock: ScrollLock,
}

/// Controller for the expandable project overlay
#[derive(Debug, Default)]
pub struct OverlayController {
    active: Option<ActiveEntry>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.id.as_str())
    }

    /// Whether background scroll is currently locked
    pub fn scroll_locked(&self) -> bool {
        self.active.is_some()
    }

    /// Expand `entry`, replacing any currently active entry
    ///
    /// Selecting the already-active entry is a no-op. Returns carousel
    /// commands in apply order (stop the old strip before starting the
    /// new one).
    pub fn open(&mut self, entry: &ProjectEntry) -> Vec<OverlayEffect> {
        if self.active_id() == Some(entry.id.as_str()) {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if let Some(prev) = self.active.take() {
            // Dropping `prev` releases its scroll lock; the replacement
            // acquires its own below, so the lock never lapses mid-switch.
            if prev.has_carousel {
                effects.push(OverlayEffect::StopCarousel);
            }
        }

        tracing::debug!(project = %entry.id, "overlay opened");
        let has_carousel = entry.has_carousel();
        self.active = Some(ActiveEntry {
            id: entry.id.clone(),
            has_carousel,
            _lock: ScrollLock::acquire(),
        });
        if has_carousel {
            effects.push(OverlayEffect::StartCarousel);
        }
        effects
    }

    /// Close the overlay (escape, outside pointer-down, or the close
    /// control); a no-op when nothing is open
    pub fn close(&mut self) -> Vec<OverlayEffect> {
        match self.active.take() {
            Some(prev) => {
                tracing::debug!(project = %prev.id, "overlay closed");
                if prev.has_carousel {
                    vec![OverlayEffect::StopCarousel]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MediaRef, ProjectLinks};

    fn entry(id: &str, media: usize) -> ProjectEntry {
        ProjectEntry {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: "Full-Stack".to_string(),
            summary: String::new(),
            details: Vec::new(),
            technologies: Vec::new(),
            links: ProjectLinks::None,
            media: (0..media)
                .map(|i| MediaRef {
                    path: format!("{id}/{i}.png"),
                    caption: format!("shot {i}"),
                    width: 20,
                })
                .collect(),
        }
    }

    #[test]
    fn test_open_sets_single_active_entry() {
        let mut overlay = OverlayController::new();
        assert!(!overlay.is_open());

        let effects = overlay.open(&entry("a", 3));
        assert_eq!(overlay.active_id(), Some("a"));
        assert_eq!(effects, vec![OverlayEffect::StartCarousel]);
    }

    #[test]
    fn test_switching_entries_keeps_exactly_one_active() {
        let mut overlay = OverlayController::new();
        overlay.open(&entry("a", 2));
        let effects = overlay.open(&entry("b", 2));

        assert_eq!(overlay.active_id(), Some("b"));
        assert_eq!(
            effects,
            vec![OverlayEffect::StopCarousel, OverlayEffect::StartCarousel]
        );
    }

    #[test]
    fn test_reopening_active_entry_is_noop() {
        let mut overlay = OverlayController::new();
        overlay.open(&entry("a", 2));
        let effects = overlay.open(&entry("a", 2));

        assert!(effects.is_empty());
        assert_eq!(overlay.active_id(), Some("a"));
    }

    #[test]
    fn test_close_clears_active_and_stops_carousel() {
        let mut overlay = OverlayController::new();
        overlay.open(&entry("a", 2));

        let effects = overlay.close();
        assert!(!overlay.is_open());
        assert_eq!(effects, vec![OverlayEffect::StopCarousel]);

        // Closing again is harmless
        assert!(overlay.close().is_empty());
    }

    #[test]
    fn test_entry_without_media_starts_no_carousel() {
        let mut overlay = OverlayController::new();
        let effects = overlay.open(&entry("plain", 0));
        assert!(effects.is_empty());

        let effects = overlay.close();
        assert!(effects.is_empty());
    }

    #[test]
    fn test_scroll_locked_iff_open() {
        let mut overlay = OverlayController::new();
        assert!(!overlay.scroll_locked());

        overlay.open(&entry("a", 0));
        assert!(overlay.scroll_locked());

        overlay.open(&entry("b", 0));
        assert!(overlay.scroll_locked());

        overlay.close();
        assert!(!overlay.scroll_locked());
    }
}
