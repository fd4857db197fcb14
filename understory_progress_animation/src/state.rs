// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Angle, in degrees, where the ring starts when rotation progress is zero.
///
/// Angles grow clockwise from the positive x axis in y-down coordinates, so
/// 270° is twelve o'clock.
pub const RING_ORIGIN_DEGREES: f64 = 270.0;

/// Animation-driven values read by the renderer on every frame.
///
/// Both values are progress fractions between [`Self::MIN_VALUE`] and
/// [`Self::MAX_VALUE`]. The state is a small `Copy` value: reducers produce a new state rather than
/// mutating a shared one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationDrawingState {
    /// One full turn of the ring per unit.
    pub rotation_progress: f64,
    /// How far the broken arches have opened.
    pub arches_expansion_progress: f64,
}

impl AnimationDrawingState {
    /// Lower bound of both progress values.
    pub const MIN_VALUE: f64 = 0.0;
    /// Upper bound of both progress values.
    pub const MAX_VALUE: f64 = 1.0;

    /// State with the ring at rest: no rotation, arches closed.
    pub const REST: Self = Self {
        rotation_progress: Self::MIN_VALUE,
        arches_expansion_progress: Self::MIN_VALUE,
    };

    /// Returns a copy with `rotation_progress` replaced, clamped to range.
    #[must_use]
    pub fn with_rotation_progress(self, progress: f64) -> Self {
        Self {
            rotation_progress: clamp_progress(progress),
            ..self
        }
    }

    /// Returns a copy with `arches_expansion_progress` replaced, clamped to range.
    #[must_use]
    pub fn with_arches_expansion_progress(self, progress: f64) -> Self {
        Self {
            arches_expansion_progress: clamp_progress(progress),
            ..self
        }
    }

    /// Rotation in degrees, `progress * 360`.
    #[must_use]
    pub fn rotation_in_degrees(&self) -> f64 {
        clamp_progress(self.rotation_progress) * 360.0
    }

    /// Where the ring starts this frame, in `[0, 360)`.
    #[must_use]
    pub fn ring_start_degrees(&self) -> f64 {
        (RING_ORIGIN_DEGREES + self.rotation_in_degrees()) % 360.0
    }

    /// Angular span covered by the broken arches, `progress * max_span`.
    #[must_use]
    pub fn arches_area_in_degrees(&self, max_span: f64) -> f64 {
        clamp_progress(self.arches_expansion_progress) * max_span.max(0.0)
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        AnimationDrawingState::MIN_VALUE
    } else {
        progress.clamp(AnimationDrawingState::MIN_VALUE, AnimationDrawingState::MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_starts_at_top_when_at_rest() {
        assert_eq!(AnimationDrawingState::REST.ring_start_degrees(), 270.0);
        assert_eq!(AnimationDrawingState::default(), AnimationDrawingState::REST);
    }

    #[test]
    fn ring_start_stays_in_range() {
        for i in 0..=1000 {
            let p = f64::from(i) / 1000.0;
            let deg = AnimationDrawingState::REST
                .with_rotation_progress(p)
                .ring_start_degrees();
            assert!((0.0..360.0).contains(&deg), "{p} -> {deg}");
        }
        let quarter = AnimationDrawingState::REST.with_rotation_progress(0.25);
        assert_eq!(quarter.ring_start_degrees(), 0.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let s = AnimationDrawingState::REST
            .with_rotation_progress(3.0)
            .with_arches_expansion_progress(-1.0);
        assert_eq!(s.rotation_progress, 1.0);
        assert_eq!(s.arches_expansion_progress, 0.0);

        let raw = AnimationDrawingState {
            rotation_progress: f64::NAN,
            arches_expansion_progress: 2.0,
        };
        assert_eq!(raw.rotation_in_degrees(), 0.0);
        assert_eq!(raw.arches_area_in_degrees(90.0), 90.0);
    }

    #[test]
    fn arches_area_scales_with_expansion() {
        let s = AnimationDrawingState::REST.with_arches_expansion_progress(0.5);
        assert_eq!(s.arches_area_in_degrees(90.0), 45.0);
        assert_eq!(s.arches_area_in_degrees(-10.0), 0.0);
    }
}
