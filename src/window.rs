//! Closest-timestamp search over a bounded window.

use crate::{DateError, DateResult, SignedDuration, Timestamp};
use alloc::vec::Vec;

/// A closed interval of timestamps around a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: Timestamp,
    end: Timestamp,
}

impl Window {
    /// Creates the window `[center - before, center + after]`.
    ///
    /// Both offsets must be non-negative; a negative bound is an
    /// argument error.
    pub fn around(
        center: Timestamp,
        before: SignedDuration,
        after: SignedDuration,
    ) -> DateResult<Self> {
        if before.is_negative() || after.is_negative() {
            return Err(DateError::argument()
                .with_message("window bounds must be non-negative durations"));
        }
        Ok(Self {
            start: center.checked_sub(&before)?,
            end: center.checked_add(&after)?,
        })
    }

    /// Returns whether `timestamp` lies within this window; both bounds
    /// are inclusive.
    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        (self.start..=self.end).contains(&timestamp)
    }

    /// Returns the inclusive start of this window.
    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the inclusive end of this window.
    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }
}

/// Returns the element whose projected timestamp is closest to `target`,
/// restricted to elements inside `[target - before, target + after]`.
///
/// Candidates are scanned in input order in a single pass; the input
/// need not be sorted. When two candidates are equidistant from the
/// target the first one encountered wins. An empty result is `Ok(None)`,
/// not an error.
pub fn closest_by<'a, T>(
    candidates: &'a [T],
    target: Timestamp,
    before: SignedDuration,
    after: SignedDuration,
    timestamp_of: impl Fn(&T) -> Timestamp,
) -> DateResult<Option<&'a T>> {
    let window = Window::around(target, before, after)?;
    let mut closest: Option<(&T, SignedDuration)> = None;
    for candidate in candidates {
        let ts = timestamp_of(candidate);
        if !window.contains(ts) {
            continue;
        }
        let distance = target.distance_to(&ts);
        // Strict comparison keeps the first of equidistant candidates.
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((candidate, distance)),
        }
    }
    Ok(closest.map(|(candidate, _)| candidate))
}

/// Returns the timestamp closest to `target` within
/// `[target - before, target + after]`.
///
/// The identity-projection form of [`closest_by`].
pub fn closest(
    candidates: &[Timestamp],
    target: Timestamp,
    before: SignedDuration,
    after: SignedDuration,
) -> DateResult<Option<Timestamp>> {
    Ok(closest_by(candidates, target, before, after, |ts| *ts)?.copied())
}

/// Returns the timestamps that lie inside `window`, in input order.
#[must_use]
pub fn within_window(candidates: &[Timestamp], window: &Window) -> Vec<Timestamp> {
    candidates
        .iter()
        .copied()
        .filter(|ts| window.contains(*ts))
        .collect()
}
