//! Page scroll position, smooth anchor scrolling and the header shadow

use std::time::{Duration, Instant};

/// Layout units per terminal row
pub const ROW_UNITS: f32 = 20.0;

/// Gap kept between the fixed header and an anchor target
pub const ANCHOR_MARGIN: f32 = 20.0;

/// Offset past which the header shows its shadow
pub const HEADER_SHADOW_THRESHOLD: f32 = 10.0;

/// Where a same-page anchor link should scroll to
///
/// Clamped to `[0, max_scroll]` the way the browser clamps `scrollTo`.
pub fn anchor_offset(target_top: f32, header_height: f32, max_scroll: f32) -> f32 {
    (target_top - header_height - ANCHOR_MARGIN).clamp(0.0, max_scroll.max(0.0))
}

/// Same-page anchor target of an href, None for bare `#` and other links
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Vertical scroll position of the page in layout units
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    y: f32,
    max: f32,
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Update the scrollable range (page height minus viewport height)
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.y = self.y.min(self.max);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a smooth scroll towards `target`
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        self.animation = Some(ScrollAnimation {
            from: self.y,
            to: target.clamp(0.0, self.max),
            started: now,
        });
    }

    /// Jump by `delta` units, cancelling any running animation
    pub fn scroll_by(&mut self, delta: f32) {
        self.animation = None;
        self.y = (self.y + delta).clamp(0.0, self.max);
    }

    /// Advance the running animation; returns true if the position changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(anim.started);
        let progress =
            (elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = simple_easing::cubic_in_out(progress);
        let previous = self.y;
        self.y = anim.from + (anim.to - anim.from) * eased;

        if progress >= 1.0 {
            self.y = anim.to;
            self.animation = None;
        }
        (self.y - previous).abs() > f32::EPSILON
    }

    /// First terminal row of the page that is visible
    pub fn first_row(&self) -> u16 {
        (self.y / ROW_UNITS).floor() as u16
    }
}

/// Header "scrolled" state, recomputed at most once per frame
#[derive(Debug, Clone, Default)]
pub struct HeaderShadow {
    scrolled: bool,
    frame_pending: bool,
}

impl HeaderShadow {
    /// Note a scroll event; returns true if this requested a new frame
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Run the pending frame callback, if any
    pub fn on_animation_frame(&mut self, scroll_y: f32) {
        if !self.frame_pending {
            return;
        }
        self.scrolled = scroll_y > HEADER_SHADOW_THRESHOLD;
        self.frame_pending = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}
