use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::foundation::core::{Millis, Rect};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::ids::{ElementId, ObserverId};
use crate::viewport::geometry::{ElementGeometry, intersection_ratio};

/// How an observer decides visibility.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObserveOptions {
    /// Minimum visible fraction of the element, in `[0, 1]`.
    pub threshold: f64,
    /// Fire once, then detach.
    pub once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            once: true,
        }
    }
}

impl ObserveOptions {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(FolioError::validation(format!(
                "visibility threshold must be in [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    fn is_visible(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// A change of an observer's signal, reported by [`ObserverRegistry::process`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityChange {
    /// Which registration changed.
    pub observer: ObserverId,
    /// Observed element.
    pub target: ElementId,
    /// New signal value.
    pub visible: bool,
    /// When the change was observed.
    pub at: Millis,
    /// Visible fraction that produced the change.
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug)]
struct Registration {
    target: ElementId,
    options: ObserveOptions,
    visible: bool,
}

/// Watches elements against the viewport and reports threshold crossings.
///
/// One-shot registrations are removed as soon as they fire, so the cost of a page with many
/// revealed elements drops to zero once everything has been seen.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    entries: BTreeMap<ObserverId, Registration>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `target`. The signal starts at `false`.
    pub fn observe(
        &mut self,
        target: ElementId,
        options: ObserveOptions,
    ) -> FolioResult<ObserverId> {
        options.validate()?;
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Registration {
                target,
                options,
                visible: false,
            },
        );
        tracing::trace!(?id, ?target, threshold = options.threshold, "observer attached");
        Ok(id)
    }

    /// Stop watching without firing. Returns `false` if `id` already detached.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Whether `id` is still watching.
    pub fn is_active(&self, id: ObserverId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of live registrations.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Drop every registration without firing.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Compare every live registration against `viewport` and report the ones whose signal
    /// changed, in ascending observer order.
    ///
    /// Elements missing from `geometry` count as invisible.
    pub fn process(
        &mut self,
        viewport: Rect,
        geometry: &impl ElementGeometry,
        now: Millis,
    ) -> SmallVec<[VisibilityChange; 4]> {
        let mut changes = SmallVec::<[VisibilityChange; 4]>::new();
        let mut detached = SmallVec::<[ObserverId; 4]>::new();

        for (&id, reg) in self.entries.iter_mut() {
            let ratio = geometry
                .element_rect(reg.target)
                .map(|r| intersection_ratio(viewport, r))
                .unwrap_or(0.0);
            let visible = reg.options.is_visible(ratio);
            if visible == reg.visible {
                continue;
            }
            reg.visible = visible;
            changes.push(VisibilityChange {
                observer: id,
                target: reg.target,
                visible,
                at: now,
                ratio,
            });
            if visible && reg.options.once {
                detached.push(id);
            }
        }

        for id in detached {
            self.entries.remove(&id);
            tracing::debug!(?id, "one-shot observer fired and detached");
        }
        changes
    }
}

/// Consumer-side view of an observer's boolean signal.
///
/// Starts `false`. With `latch` set it never returns to `false` after the first `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisibilitySignal {
    value: bool,
    latch: bool,
    first_fired_at: Option<Millis>,
}

impl VisibilitySignal {
    /// Signal at `false`; `latch` makes the first `true` permanent.
    pub fn new(latch: bool) -> Self {
        Self {
            value: false,
            latch,
            first_fired_at: None,
        }
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.value
    }

    /// Instant of the first `false -> true` transition.
    pub fn first_fired_at(&self) -> Option<Millis> {
        self.first_fired_at
    }

    /// Apply a reported value. Returns `true` when the signal actually changed.
    pub fn set(&mut self, visible: bool, at: Millis) -> bool {
        if self.value == visible || (self.latch && self.value) {
            return false;
        }
        self.value = visible;
        if visible && self.first_fired_at.is_none() {
            self.first_fired_at = Some(at);
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/observer.rs"]
mod tests;
