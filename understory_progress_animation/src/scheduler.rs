// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between an orchestrator and the host's frame clock.

use core::time::Duration;

use crate::{AnimationOrchestrator, AnimatorInterface, Phase};

/// Host hook that asks for another animation frame.
///
/// Implementations typically forward to the toolkit's "request animation
/// frame" call; the host then reports elapsed time back through
/// [`AnimationDriver::on_tick`].
pub trait FrameScheduler {
    /// Requests that `on_tick` be called again on the next frame.
    fn request_frame(&mut self);
}

/// Scheduler for hosts that poll: it only remembers whether a frame is wanted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualFrames {
    requested: bool,
}

impl ManualFrames {
    /// Returns whether a frame was requested and clears the request.
    pub fn take_request(&mut self) -> bool {
        core::mem::take(&mut self.requested)
    }

    /// Returns whether a frame is currently requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// An orchestrator bound to the scheduler that keeps it ticking.
#[derive(Debug)]
pub struct AnimationDriver<S> {
    orchestrator: AnimationOrchestrator,
    scheduler: S,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    /// Binds `orchestrator` to `scheduler`.
    #[must_use]
    pub fn new(orchestrator: AnimationOrchestrator, scheduler: S) -> Self {
        Self {
            orchestrator,
            scheduler,
        }
    }

    /// The driven orchestrator.
    #[must_use]
    pub fn orchestrator(&self) -> &AnimationOrchestrator {
        &self.orchestrator
    }

    /// Mutable access to the driven orchestrator, for example to [`attach`](AnimationOrchestrator::attach).
    pub fn orchestrator_mut(&mut self) -> &mut AnimationOrchestrator {
        &mut self.orchestrator
    }

    /// The scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Current phase of the orchestrator.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.orchestrator.phase()
    }

    /// Starts playback and requests the first frame.
    pub fn start(&mut self) {
        self.orchestrator.start();
        self.scheduler.request_frame();
    }

    /// Reverses the setup group and requests a frame if anything is running.
    pub fn reverse(&mut self) {
        self.orchestrator.reverse();
        if self.orchestrator.is_running() {
            self.scheduler.request_frame();
        }
    }

    /// Stops everything. No further frames are requested.
    pub fn cancel(&mut self) {
        self.orchestrator.cancel();
    }

    /// Forwards one frame to the orchestrator and requests the next while running.
    pub fn on_tick(&mut self, dt: Duration, target: &mut dyn AnimatorInterface) -> bool {
        let running = self.orchestrator.on_tick(dt, target);
        if running {
            self.scheduler.request_frame();
        }
        running
    }
}
