// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{AnimationDrawingState, RepeatMode, ValueTimer};

/// Pure state transition applied with the current timer value.
pub type Reducer = fn(AnimationDrawingState, f64) -> AnimationDrawingState;

/// Which part of [`AnimationDrawingState`] an animator drives.
///
/// Each variant carries its own reducer; the orchestrator only calls
/// [`reduce`](Self::reduce) and never looks at the variant itself.
#[derive(Clone, Copy, Debug)]
pub enum AnimatorKind {
    /// Drives [`AnimationDrawingState::arches_expansion_progress`].
    Expansion,
    /// Drives [`AnimationDrawingState::rotation_progress`].
    Rotation,
    /// Drives whatever the reducer chooses.
    Custom(Reducer),
}

impl AnimatorKind {
    /// Applies this kind's reducer.
    #[must_use]
    pub fn reduce(self, state: AnimationDrawingState, value: f64) -> AnimationDrawingState {
        match self {
            Self::Expansion => state.with_arches_expansion_progress(value),
            Self::Rotation => state.with_rotation_progress(value),
            Self::Custom(reducer) => reducer(state, value),
        }
    }
}

/// A timer paired with the reducer it feeds.
#[derive(Clone, Debug)]
pub struct ProgressAnimator {
    kind: AnimatorKind,
    timer: ValueTimer,
}

impl ProgressAnimator {
    /// Pairs `timer` with `kind`.
    #[must_use]
    pub fn new(kind: AnimatorKind, timer: ValueTimer) -> Self {
        Self { kind, timer }
    }

    /// Linear 0→1 expansion that plays once over `duration`.
    #[must_use]
    pub fn expansion(duration: Duration) -> Self {
        Self::new(
            AnimatorKind::Expansion,
            ValueTimer::new(
                AnimationDrawingState::MIN_VALUE,
                AnimationDrawingState::MAX_VALUE,
                duration,
            ),
        )
    }

    /// Linear 0→1 rotation that repeats forever, one turn per `duration`.
    #[must_use]
    pub fn rotation(duration: Duration) -> Self {
        Self::new(
            AnimatorKind::Rotation,
            ValueTimer::new(
                AnimationDrawingState::MIN_VALUE,
                AnimationDrawingState::MAX_VALUE,
                duration,
            )
            .with_repeat(RepeatMode::Infinite),
        )
    }

    /// The reducer variant.
    #[must_use]
    pub fn kind(&self) -> AnimatorKind {
        self.kind
    }

    /// The underlying timer.
    #[must_use]
    pub fn timer(&self) -> &ValueTimer {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut ValueTimer {
        &mut self.timer
    }
}

/// Receiver of animation updates, usually the widget that paints the ring.
pub trait AnimatorInterface {
    /// Replaces the current state with `reducer(current)` and schedules a redraw.
    fn update_animation_state(
        &mut self,
        reducer: &dyn Fn(AnimationDrawingState) -> AnimationDrawingState,
    );
}

impl AnimatorInterface for AnimationDrawingState {
    fn update_animation_state(
        &mut self,
        reducer: &dyn Fn(AnimationDrawingState) -> AnimationDrawingState,
    ) {
        *self = reducer(*self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve_rotation(state: AnimationDrawingState, value: f64) -> AnimationDrawingState {
        state.with_rotation_progress(value / 2.0)
    }

    #[test]
    fn kinds_touch_only_their_field() {
        let s = AnimationDrawingState::REST;
        let expanded = AnimatorKind::Expansion.reduce(s, 0.7);
        assert_eq!(expanded.arches_expansion_progress, 0.7);
        assert_eq!(expanded.rotation_progress, 0.0);

        let rotated = AnimatorKind::Rotation.reduce(expanded, 0.3);
        assert_eq!(rotated.rotation_progress, 0.3);
        assert_eq!(rotated.arches_expansion_progress, 0.7);
    }

    #[test]
    fn custom_reducer_is_called() {
        let s = AnimatorKind::Custom(halve_rotation).reduce(AnimationDrawingState::REST, 0.5);
        assert_eq!(s.rotation_progress, 0.25);
    }

    #[test]
    fn presets_use_expected_repeat_modes() {
        let expansion = ProgressAnimator::expansion(Duration::from_millis(250));
        assert_eq!(expansion.timer().repeat(), RepeatMode::Once);
        assert!(matches!(expansion.kind(), AnimatorKind::Expansion));

        let rotation = ProgressAnimator::rotation(Duration::from_millis(2000));
        assert_eq!(rotation.timer().repeat(), RepeatMode::Infinite);
        assert_eq!(rotation.timer().duration(), Duration::from_millis(2000));
    }
}
