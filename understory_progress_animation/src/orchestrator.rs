// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequencing of a parallel setup group followed by a parallel progress group.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use crate::{AnimatorInterface, AnimatorKind, ProgressAnimator};

/// Playback phase of an [`AnimationOrchestrator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No timers running.
    #[default]
    Idle,
    /// Setup animators play together.
    SetupRunning,
    /// Progress animators play together until cancelled or reversed.
    ProgressRunning,
    /// Setup animators play back toward their start while progress continues.
    Reversing,
}

/// Plays setup animators together, then progress animators together.
///
/// Setup animators usually open something up (for example the ring's broken
/// arches) and play once; progress animators usually repeat forever. On
/// [`reverse`](Self::reverse) only the setup animators run backward, which
/// animates back to the original look while progress keeps going; once every
/// setup animator is back at its start the orchestrator returns to
/// [`Phase::Idle`].
///
/// The orchestrator owns no clock. The host calls [`on_tick`](Self::on_tick)
/// with the elapsed time of each frame.
///
/// ```rust
/// use core::time::Duration;
/// use understory_progress_animation::{AnimationDrawingState, AnimationOrchestrator, Phase, ProgressAnimator};
///
/// let mut orchestrator = AnimationOrchestrator::single(
///     ProgressAnimator::expansion(Duration::from_millis(250)),
///     ProgressAnimator::rotation(Duration::from_millis(2000)),
/// );
/// orchestrator.attach(|| {});
/// orchestrator.start();
///
/// let mut state = AnimationDrawingState::REST;
/// orchestrator.on_tick(Duration::from_millis(250), &mut state);
/// assert_eq!(state.arches_expansion_progress, 1.0);
/// assert_eq!(orchestrator.phase(), Phase::ProgressRunning);
/// ```
pub struct AnimationOrchestrator {
    setup: Vec<ProgressAnimator>,
    progress: Vec<ProgressAnimator>,
    phase: Phase,
    attached: bool,
    on_setup_end: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for AnimationOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationOrchestrator")
            .field("setup", &self.setup)
            .field("progress", &self.progress)
            .field("phase", &self.phase)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl AnimationOrchestrator {
    /// Creates an idle orchestrator over the two groups.
    #[must_use]
    pub fn new(setup: Vec<ProgressAnimator>, progress: Vec<ProgressAnimator>) -> Self {
        Self {
            setup,
            progress,
            phase: Phase::Idle,
            attached: false,
            on_setup_end: None,
        }
    }

    /// Creates an idle orchestrator with one animator per group.
    #[must_use]
    pub fn single(setup: ProgressAnimator, progress: ProgressAnimator) -> Self {
        Self::new(alloc::vec![setup], alloc::vec![progress])
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` unless idle.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Setup animators in registration order.
    #[must_use]
    pub fn setup_animators(&self) -> &[ProgressAnimator] {
        &self.setup
    }

    /// Progress animators in registration order.
    #[must_use]
    pub fn progress_animators(&self) -> &[ProgressAnimator] {
        &self.progress
    }

    /// Enables delivery of updates and registers the setup-complete callback.
    ///
    /// Until this is called, ticks still move the timers but nothing reaches
    /// the target. Attaching again replaces the callback.
    pub fn attach(&mut self, on_setup_end: impl FnMut() + 'static) {
        self.attached = true;
        self.on_setup_end = Some(Box::new(on_setup_end));
    }

    /// Starts from the beginning, cancelling anything in flight.
    pub fn start(&mut self) {
        self.cancel();
        if self.setup.is_empty() {
            self.finish_setup();
            return;
        }
        for animator in &mut self.setup {
            animator.timer_mut().start();
        }
        self.set_phase(Phase::SetupRunning);
    }

    /// Stops every timer in both groups and goes idle.
    ///
    /// Unlike a finished [`reverse`](Self::reverse), cancelling delivers no
    /// reset: the target keeps whatever state the last delivered tick
    /// produced. Cancelling an idle orchestrator does nothing.
    pub fn cancel(&mut self) {
        for animator in self.setup.iter_mut().chain(self.progress.iter_mut()) {
            animator.timer_mut().cancel();
        }
        self.set_phase(Phase::Idle);
    }

    /// Plays every setup animator back toward its start.
    ///
    /// Does nothing when idle or already reversing.
    pub fn reverse(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Reversing => {}
            Phase::SetupRunning | Phase::ProgressRunning => {
                if self.setup.is_empty() {
                    self.cancel();
                    return;
                }
                for animator in &mut self.setup {
                    let timer = animator.timer_mut();
                    if !(timer.is_running() && timer.is_reversed()) {
                        timer.reverse();
                    }
                }
                self.set_phase(Phase::Reversing);
            }
        }
    }

    /// Advances the active timers by `dt` and delivers one combined update.
    ///
    /// Every reducer fed this frame is applied, in registration order, to the
    /// same incoming state inside a single
    /// [`update_animation_state`](AnimatorInterface::update_animation_state)
    /// call. Returns `true` if another frame is needed.
    pub fn on_tick(&mut self, dt: Duration, target: &mut dyn AnimatorInterface) -> bool {
        let mut updates: Vec<(AnimatorKind, f64)> = Vec::new();
        match self.phase {
            Phase::Idle => return false,
            Phase::SetupRunning => {
                advance_group(&mut self.setup, dt, &mut updates);
                self.deliver(&updates, target);
                if self.setup.iter().all(|a| !a.timer().is_running()) {
                    self.finish_setup();
                }
            }
            Phase::ProgressRunning => {
                advance_group(&mut self.progress, dt, &mut updates);
                self.deliver(&updates, target);
                if self.progress.iter().all(|a| !a.timer().is_running()) {
                    self.set_phase(Phase::Idle);
                }
            }
            Phase::Reversing => {
                advance_group(&mut self.setup, dt, &mut updates);
                advance_group(&mut self.progress, dt, &mut updates);
                let collapsed = self.setup.iter().all(|a| !a.timer().is_running());
                if collapsed {
                    // Progress fields return to rest in the same update.
                    updates.extend(
                        self.progress
                            .iter()
                            .map(|a| (a.kind(), a.timer().start_value())),
                    );
                }
                self.deliver(&updates, target);
                if collapsed {
                    self.cancel();
                }
            }
        }
        self.is_running()
    }

    fn finish_setup(&mut self) {
        if let Some(on_setup_end) = self.on_setup_end.as_mut() {
            on_setup_end();
        }
        if self.progress.is_empty() {
            self.set_phase(Phase::Idle);
            return;
        }
        for animator in &mut self.progress {
            animator.timer_mut().start();
        }
        self.set_phase(Phase::ProgressRunning);
    }

    fn deliver(&self, updates: &[(AnimatorKind, f64)], target: &mut dyn AnimatorInterface) {
        if !self.attached || updates.is_empty() {
            return;
        }
        target.update_animation_state(&|state| {
            updates
                .iter()
                .fold(state, |state, &(kind, value)| kind.reduce(state, value))
        });
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::trace!("progress animation {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

fn advance_group(group: &mut [ProgressAnimator], dt: Duration, out: &mut Vec<(AnimatorKind, f64)>) {
    for animator in group {
        let kind = animator.kind();
        if let Some(step) = animator.timer_mut().advance(dt) {
            out.push((kind, step.value));
        }
    }
}
