// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A float timer advanced by host-supplied frame deltas.

use core::time::Duration;

/// Whether a timer stops at its end or wraps around forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Play once and stop.
    #[default]
    Once,
    /// Wrap back to the start on reaching the end; never finishes by itself.
    Infinite,
}

/// Curve applied to the linear time fraction before interpolating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Slow start and end, fast middle.
    EaseInOut,
}

impl Easing {
    /// Maps a time fraction in `[0, 1]` to an interpolation fraction.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Result of advancing a running timer by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerStep {
    /// Interpolated value after this frame.
    pub value: f64,
    /// `true` if the timer reached its end (or its start, when reversed) and stopped.
    pub finished: bool,
}

/// Interpolates from `from` to `to` over `duration`.
///
/// The timer keeps its position as a time fraction in `[0, 1]`. Frames move
/// that fraction forward, or backward after [`reverse`](Self::reverse).
/// Nothing happens until [`start`](Self::start) or `reverse` is called.
///
/// ```rust
/// use core::time::Duration;
/// use understory_progress_animation::ValueTimer;
///
/// let mut timer = ValueTimer::new(0.0, 1.0, Duration::from_millis(250));
/// timer.start();
/// let step = timer.advance(Duration::from_millis(125)).unwrap();
/// assert_eq!(step.value, 0.5);
/// assert!(!step.finished);
/// ```
#[derive(Clone, Debug)]
pub struct ValueTimer {
    from: f64,
    to: f64,
    duration: Duration,
    repeat: RepeatMode,
    easing: Easing,
    fraction: f64,
    running: bool,
    reversed: bool,
}

impl ValueTimer {
    /// Creates a stopped, linear, non-repeating timer.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            repeat: RepeatMode::Once,
            easing: Easing::Linear,
            fraction: 0.0,
            running: false,
            reversed: false,
        }
    }

    /// Sets the repeat mode.
    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Length of one pass.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Repeat mode.
    #[must_use]
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Returns `true` between a start/reverse and the end of the pass.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `true` if frames move the timer toward its start.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Value at the start of a pass.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// Current time fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.easing.apply(self.fraction)
    }

    /// Plays forward from the start.
    pub fn start(&mut self) {
        self.fraction = 0.0;
        self.reversed = false;
        self.running = true;
    }

    /// Stops where it is. Calling this on a stopped timer does nothing.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Plays back toward the start.
    ///
    /// A running timer turns around at its current position; a stopped timer
    /// plays backward from its end.
    pub fn reverse(&mut self) {
        if self.running {
            self.reversed = !self.reversed;
        } else {
            self.fraction = 1.0;
            self.reversed = true;
            self.running = true;
        }
    }

    /// Advances by one frame of `dt`. Returns `None` if the timer is stopped.
    pub fn advance(&mut self, dt: Duration) -> Option<TimerStep> {
        if !self.running {
            return None;
        }

        let delta = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f64() / self.duration.as_secs_f64()
        };

        let mut finished = false;
        if self.reversed {
            self.fraction -= delta;
            if self.fraction <= 0.0 {
                match self.repeat {
                    RepeatMode::Infinite if !self.duration.is_zero() => {
                        self.fraction = wrap_unit(self.fraction);
                    }
                    _ => {
                        self.fraction = 0.0;
                        finished = true;
                    }
                }
            }
        } else {
            self.fraction += delta;
            if self.fraction >= 1.0 {
                match self.repeat {
                    RepeatMode::Infinite if !self.duration.is_zero() => {
                        self.fraction = wrap_unit(self.fraction);
                    }
                    _ => {
                        self.fraction = 1.0;
                        finished = true;
                    }
                }
            }
        }

        if finished {
            self.running = false;
        }
        Some(TimerStep {
            value: self.value(),
            finished,
        })
    }
}

fn wrap_unit(f: f64) -> f64 {
    let w = f % 1.0;
    if w < 0.0 { w + 1.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn stopped_timer_does_not_advance() {
        let mut timer = ValueTimer::new(0.0, 1.0, ms(100));
        assert!(timer.advance(ms(10)).is_none());
        assert_eq!(timer.value(), 0.0);
    }

    #[test]
    fn once_finishes_at_end_value() {
        let mut timer = ValueTimer::new(0.0, 1.0, ms(250));
        timer.start();
        assert_eq!(timer.advance(ms(125)).unwrap().value, 0.5);
        let last = timer.advance(ms(500)).unwrap();
        assert_eq!(last, TimerStep { value: 1.0, finished: true });
        assert!(!timer.is_running());
        assert!(timer.advance(ms(16)).is_none());
    }

    #[test]
    fn infinite_wraps_and_never_finishes() {
        let mut timer = ValueTimer::new(0.0, 1.0, ms(2000)).with_repeat(RepeatMode::Infinite);
        timer.start();
        let step = timer.advance(ms(2500)).unwrap();
        assert!(!step.finished);
        assert!((step.value - 0.25).abs() < 1e-12);
        assert!(timer.is_running());
    }

    #[test]
    fn reverse_while_running_turns_around() {
        let mut timer = ValueTimer::new(0.0, 1.0, ms(100));
        timer.start();
        timer.advance(ms(60));
        timer.reverse();
        assert!(timer.is_reversed());
        let step = timer.advance(ms(20)).unwrap();
        assert!((step.value - 0.4).abs() < 1e-12);
        let end = timer.advance(ms(100)).unwrap();
        assert_eq!(end, TimerStep { value: 0.0, finished: true });
    }

    #[test]
    fn reverse_when_stopped_plays_back_from_end() {
        let mut timer = ValueTimer::new(0.0, 1.0, ms(100));
        timer.reverse();
        assert!(timer.is_running());
        assert_eq!(timer.value(), 1.0);
        let step = timer.advance(ms(25)).unwrap();
        assert!((step.value - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut timer = ValueTimer::new(2.0, 4.0, Duration::ZERO);
        timer.start();
        assert_eq!(timer.advance(Duration::ZERO).unwrap(), TimerStep { value: 4.0, finished: true });
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }
}
