//! One-shot reveal of page elements as they scroll into view

use std::time::{Duration, Instant};

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Vertical extent of a watched element, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    /// Share of the element inside `[view_top, view_top + view_height)`
    pub fn visible_ratio(&self, view_top: f32, view_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let start = self.top.max(view_top);
        let end = (self.top + self.height).min(view_top + view_height);
        ((end - start).max(0.0) / self.height).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealState {
    /// Hidden and offset, still watched
    Ready,
    Revealed { at: Instant },
}

/// Watches a fixed set of elements and reveals each one the first time it
/// becomes visible enough
#[derive(Debug, Clone, Default)]
pub struct RevealWatcher {
    elements: Vec<(Extent, RevealState)>,
}

impl RevealWatcher {
    /// Duration of the fade once an element is revealed
    pub const FADE_DURATION: Duration = Duration::from_millis(500);

    /// Start watching an element; returns its index
    pub fn observe(&mut self, extent: Extent) -> usize {
        self.elements.push((extent, RevealState::Ready));
        self.elements.len() - 1
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn watched_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|(_, state)| *state == RevealState::Ready)
            .count()
    }

    /// Check watched elements against the viewport; returns indices
    /// revealed by this pass
    pub fn check(&mut self, view_top: f32, view_height: f32, now: Instant) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (idx, (extent, state)) in self.elements.iter_mut().enumerate() {
            if *state != RevealState::Ready {
                continue;
            }
            let ratio = extent.visible_ratio(view_top, view_height);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                *state = RevealState::Revealed { at: now };
                revealed.push(idx);
            }
        }
        if !revealed.is_empty() {
            tracing::debug!("Revealed {} element(s)", revealed.len());
        }
        revealed
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        matches!(
            self.elements.get(idx),
            Some((_, RevealState::Revealed { .. }))
        )
    }

    /// Returns true while any revealed element is still fading in
    pub fn any_fading(&self, now: Instant) -> bool {
        self.elements.iter().any(|(_, state)| match state {
            RevealState::Revealed { at } => {
                now.saturating_duration_since(*at) < Self::FADE_DURATION
            }
            RevealState::Ready => false,
        })
    }

    /// Fade progress for rendering: 0.0 while hidden, eased up to 1.0
    pub fn progress(&self, idx: usize, now: Instant) -> f32 {
        match self.elements.get(idx) {
            Some((_, RevealState::Revealed { at })) => {
                let elapsed = now.saturating_duration_since(*at).as_secs_f32();
                let linear = (elapsed / Self::FADE_DURATION.as_secs_f32()).min(1.0);
                simple_easing::cubic_out(linear)
            }
            _ => 0.0,
        }
    }
}
